//! # Field Extractor
//!
//! Pure, deterministic extraction pipeline: raw source bundle → combined
//! text → one pattern cascade per field → best-effort structured record.
//!
//! The only hard failure is an empty bundle. Every per-field miss degrades
//! to `None`: the output feeds a form a human reviews and corrects, so
//! partial results must stay usable. Do not tighten this into per-field
//! validation errors.

pub mod cascade;
pub mod datetime;
pub mod patterns;

use thiserror::Error;

use crate::bundle::RawSourceBundle;
use crate::fields::{ExtractedRunFields, RunType, ALL_PACES_WELCOME};
use crate::synthesize::synthesize;

/// Hard failures of the extraction entry point. Per-field misses are not
/// errors and never appear here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no source input provided")]
    NoInput,
}

/// Run every field cascade over the bundle's combined text.
///
/// The returned record has `description` unset; callers that want the
/// synthesized paragraph use [`extract_and_describe`].
pub fn extract(bundle: &RawSourceBundle) -> Result<ExtractedRunFields, ExtractError> {
    if !bundle.has_usable_input() {
        return Err(ExtractError::NoInput);
    }

    let combined = bundle.combined_text();

    Ok(ExtractedRunFields {
        title: first_title_line(&combined),
        date: datetime::extract_date(&combined),
        start_time_hour: None,
        start_time_minute: None,
        start_time_period: None,
        meet_up_point: patterns::MEET_UP_POINT.first_match(&combined),
        meet_up_city: bundle.contextual_city.clone(),
        route_neighborhood: patterns::ROUTE_NEIGHBORHOOD.first_match(&combined),
        run_type: detect_run_type(&combined),
        workout_description: patterns::WORKOUT_DESCRIPTION.first_match(&combined),
        total_miles: patterns::TOTAL_MILES
            .captures(&combined)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string()),
        pace: extract_pace(&combined),
        post_run_activity: patterns::POST_RUN_ACTIVITY.first_match(&combined),
        strava_map_url: strava_map_url(bundle, &combined),
        description: None,
    }
    .with_start_time(&combined))
}

/// Extraction plus description synthesis: the full pipeline the generate
/// endpoint runs. `description` is always set; the synthesizer falls back
/// to the combined text when no fragment qualifies.
pub fn extract_and_describe(bundle: &RawSourceBundle) -> Result<ExtractedRunFields, ExtractError> {
    let combined = bundle.combined_text();
    let mut fields = extract(bundle)?;
    fields.description = Some(synthesize(&fields, &combined));
    Ok(fields)
}

impl ExtractedRunFields {
    fn with_start_time(mut self, combined: &str) -> Self {
        if let Some(t) = datetime::extract_start_time(combined) {
            self.start_time_hour = Some(t.hour);
            self.start_time_minute = Some(t.minute);
            self.start_time_period = Some(t.period);
        }
        self
    }
}

/// First non-blank line that is not a `[...]` source tag.
fn first_title_line(combined: &str) -> Option<String> {
    combined
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('['))
        .map(str::to_string)
}

/// Explicit Strava URL input wins; otherwise the first strava.com link
/// anywhere in the combined text.
fn strava_map_url(bundle: &RawSourceBundle, combined: &str) -> Option<String> {
    if let Some(url) = bundle.explicit_strava_url() {
        return Some(url.to_string());
    }
    patterns::STRAVA_URL
        .find(combined)
        .map(|m| m.as_str().to_string())
}

/// First matching keyword in the fixed priority order wins, regardless of
/// where it sits in the text.
fn detect_run_type(combined: &str) -> Option<RunType> {
    patterns::RUN_TYPE_PRIORITY
        .iter()
        .find(|(_, re)| re.is_match(combined))
        .map(|(ty, _)| *ty)
}

/// "All paces welcome" short-circuits the numeric cascade.
fn extract_pace(combined: &str) -> Option<String> {
    if patterns::ALL_PACES.is_match(combined) {
        return Some(ALL_PACES_WELCOME.to_string());
    }
    patterns::NUMERIC_PACE.first_match(combined)
}
