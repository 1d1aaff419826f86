//! fields.rs — Output record of the field extractor, plus the run-type enum.
//!
//! Every field is independently nullable: a pattern cascade finding nothing
//! is a soft miss, not an error. The record is returned to the caller for
//! human review and editing before anything is persisted, so partial and
//! even fully-empty records are a normal, correct outcome.

use serde::{Deserialize, Serialize};

/// Literal value the pace field takes when an "all paces welcome" phrase is
/// found. Checked before any numeric pace pattern.
pub const ALL_PACES_WELCOME: &str = "All Paces Welcome";

/// Coarse run classification, determined by keyword priority:
/// track is checked before trail, trail before neighborhood, neighborhood
/// before park. The order is a contract, not a tuning knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunType {
    Track,
    Trail,
    Neighborhood,
    Park,
}

impl RunType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunType::Track => "track",
            RunType::Trail => "trail",
            RunType::Neighborhood => "neighborhood",
            RunType::Park => "park",
        }
    }

    /// Phrase used in the synthesized route sentence ("on {phrase}").
    /// `neighborhood` reads better as "neighborhood streets"; the rest use
    /// their own name.
    pub fn route_phrase(&self) -> &'static str {
        match self {
            RunType::Neighborhood => "neighborhood streets",
            other => other.as_str(),
        }
    }
}

/// Best-effort structured record of run attributes pulled from the combined
/// text. Serialized as the `runData` payload of the generate endpoint.
///
/// Numeric-looking fields (miles, hour, minute) stay strings: they are
/// form-field prefills, edited by a human before persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedRunFields {
    pub title: Option<String>,
    /// ISO `YYYY-MM-DD`; tokens that fail calendar validation are dropped.
    pub date: Option<String>,
    pub start_time_hour: Option<String>,
    pub start_time_minute: Option<String>,
    /// "AM" or "PM"; defaults to "AM" when the time token has no suffix.
    pub start_time_period: Option<String>,
    pub meet_up_point: Option<String>,
    /// Passthrough of the bundle's contextual city, never derived from text.
    pub meet_up_city: Option<String>,
    pub route_neighborhood: Option<String>,
    pub run_type: Option<RunType>,
    pub workout_description: Option<String>,
    pub total_miles: Option<String>,
    pub pace: Option<String>,
    pub post_run_activity: Option<String>,
    pub strava_map_url: Option<String>,
    /// Filled by the description synthesizer, never by the extractor.
    pub description: Option<String>,
}

impl ExtractedRunFields {
    /// Count of resolved (non-null) fields, used for anonymized dev logs.
    pub fn resolved_count(&self) -> usize {
        [
            self.title.is_some(),
            self.date.is_some(),
            self.start_time_hour.is_some(),
            self.start_time_minute.is_some(),
            self.start_time_period.is_some(),
            self.meet_up_point.is_some(),
            self.meet_up_city.is_some(),
            self.route_neighborhood.is_some(),
            self.run_type.is_some(),
            self.workout_description.is_some(),
            self.total_miles.is_some(),
            self.pace.is_some(),
            self.post_run_activity.is_some(),
            self.strava_map_url.is_some(),
            self.description.is_some(),
        ]
        .into_iter()
        .filter(|b| *b)
        .count()
    }
}
