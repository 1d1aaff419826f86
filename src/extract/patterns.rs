//! Compiled pattern bank for every extracted field.
//!
//! Each cascade lists its candidate patterns in priority order; that order
//! is load-bearing (first accepted match wins) and must not be reordered.
//! All patterns scan the combined text, never individual sources, so the
//! source concatenation order decides ties between sources.
//!
//! Regexes use scoped flags: keyword parts are `(?i)` while captures that
//! must start with a capital letter sit inside `(?-i:...)`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::cascade::Cascade;
use crate::fields::RunType;

/// A run of capitalized words, with `of`/`the` allowed as interior fillers
/// ("Museum of Science"). Single spaces only, so a capture never crosses a
/// line break.
const CAP_RUN: &str = r"[A-Z][A-Za-z0-9'&]*(?: (?:[A-Z][A-Za-z0-9'&]*|of|the))*";

/// A capitalized one-or-two-word phrase (neighborhood names).
const CAP_PAIR: &str = r"[A-Z][A-Za-z']*(?: [A-Z][A-Za-z']*)?";

/// `M:SS` or an `M:SS-M:SS` range.
const PACE_TOKEN: &str = r"\d{1,2}:\d{2}(?:\s*-\s*\d{1,2}:\d{2})?";

/// First strava.com link anywhere in the combined text (fallback when no
/// explicit Strava URL was provided).
pub static STRAVA_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:www\.)?strava\.com/[^\s\)\]]+").expect("strava url regex")
});

/// First date-like token: `M/D/YY` or `M/D/YYYY` (group 1), or
/// `YYYY-MM-DD` (group 2). Calendar validation happens in `datetime`.
pub static DATE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2}/\d{1,2}/\d{2}(?:\d{2})?)\b|\b(\d{4}-\d{2}-\d{2})\b")
        .expect("date token regex")
});

/// First `H:MM` token with optional am/pm suffix.
pub static TIME_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2}):(\d{2})(?:\s*(?i:(am|pm)))?\b").expect("time token regex")
});

/// First number immediately followed by a miles unit.
pub static TOTAL_MILES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*(?:miles|mile|mi)\b").expect("total miles regex")
});

/// "All paces welcome" phrase, checked before any numeric pace pattern.
pub static ALL_PACES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\ball\s+paces?\s+(?:are\s+)?welcome\b").expect("all paces regex")
});

/// Meet-up point: explicit "meets/starts/location at ___", then
/// "meet/start/location ___", then bare "at ___". Captures must start with
/// a capital letter and survive cleanup at ≥5 chars.
pub static MEET_UP_POINT: Lazy<Cascade> = Lazy::new(|| {
    Cascade::new()
        .cleaned_pattern(
            &format!(r"(?i)\b(?:meets|starts|location)\s+at\s+(?-i:({CAP_RUN}))"),
            5,
        )
        .cleaned_pattern(
            &format!(r"(?i)\b(?:meet|start|location)\s+(?-i:({CAP_RUN}))"),
            5,
        )
        .cleaned_pattern(&format!(r"(?i)\bat\s+(?-i:({CAP_RUN}))"), 5)
});

/// Route neighborhood: capitalized phrase before a neighborhood keyword;
/// a name ending in Heights/Village/Square/Commons (the suffix is part of
/// the name and is kept); or a "neighborhood:" prefix form.
pub static ROUTE_NEIGHBORHOOD: Lazy<Cascade> = Lazy::new(|| {
    Cascade::new()
        .pattern(&format!(
            r"\b({CAP_PAIR}) (?i:neighborhood|area|district)\b"
        ))
        .pattern(&format!(
            r"\b({CAP_PAIR} (?i:Heights|Village|Square|Commons))\b"
        ))
        .pattern(&format!(
            r"(?i)\b(?:neighborhood|area|district)\s*:\s*(?-i:({CAP_PAIR}))"
        ))
});

/// Workout focus: clause after "workout that emphasizes / focuses on /
/// designed for / targets". Cleaned, ≥10 chars.
pub static WORKOUT_DESCRIPTION: Lazy<Cascade> = Lazy::new(|| {
    Cascade::new()
        .cleaned_pattern(r"(?i)\bworkout\s+that\s+(emphasizes\s+[^.!?\n]+)", 10)
        .cleaned_pattern(r"(?i)\bworkout\s+that\s+(focuses\s+on\s+[^.!?\n]+)", 10)
        .cleaned_pattern(r"(?i)\bworkout\s+(?:that\s+is\s+)?(designed\s+for\s+[^.!?\n]+)", 10)
        .cleaned_pattern(r"(?i)\bworkout\s+that\s+(targets\s+[^.!?\n]+)", 10)
});

/// Numeric pace: `pace: X`, then `X pace` / `X min per mile`, then
/// `pace/speed: X min`. The all-paces phrase short-circuits this cascade.
pub static NUMERIC_PACE: Lazy<Cascade> = Lazy::new(|| {
    Cascade::new()
        .pattern(&format!(r"(?i)\bpace\s*:\s*({PACE_TOKEN})"))
        .pattern(&format!(
            r"(?i)\b({PACE_TOKEN})\s*(?:pace|min(?:s|utes)?\s+per\s+mile)\b"
        ))
        .pattern(&format!(r"(?i)\b(?:pace|speed)\s*:?\s*({PACE_TOKEN})\s*min\b"))
});

/// Post-run social: "finishes/ends/concludes with ___", "post-run ___",
/// "after/following the run ___", then a social keyword at/in/near a
/// capitalized place. Cleaned, ≥5 chars.
pub static POST_RUN_ACTIVITY: Lazy<Cascade> = Lazy::new(|| {
    Cascade::new()
        .cleaned_pattern(r"(?i)\b(?:finishes|ends|concludes)\s+with\s+([^.!?\n]+)", 5)
        .cleaned_pattern(r"(?i)\bpost[-\s]run\s*:?\s*([^.!?\n]+)", 5)
        .cleaned_pattern(r"(?i)\b(?:after|following)\s+the\s+run\b[,:]?\s*([^.!?\n]+)", 5)
        .cleaned_pattern(
            &format!(
                r"(?i)\b((?:social|coffee|drinks|food|breakfast|brunch)\s+(?:at|in|near)\s+(?-i:{CAP_RUN}))"
            ),
            5,
        )
});

/// Run-type keywords in fixed priority order: track beats trail beats
/// neighborhood beats park, regardless of position in the text.
pub static RUN_TYPE_PRIORITY: Lazy<Vec<(RunType, Regex)>> = Lazy::new(|| {
    [
        (RunType::Track, r"(?i)\btrack\b"),
        (RunType::Trail, r"(?i)\btrails?\b"),
        (RunType::Neighborhood, r"(?i)\bneighborhoods?\b"),
        (RunType::Park, r"(?i)\bparks?\b"),
    ]
    .into_iter()
    .map(|(ty, re)| (ty, Regex::new(re).expect("run type regex")))
    .collect()
});

/// Total number of registered patterns, exposed as a startup gauge.
pub fn pattern_count() -> usize {
    MEET_UP_POINT.len()
        + ROUTE_NEIGHBORHOOD.len()
        + WORKOUT_DESCRIPTION.len()
        + NUMERIC_PACE.len()
        + POST_RUN_ACTIVITY.len()
        + RUN_TYPE_PRIORITY.len()
}
