//! # Description Synthesizer
//!
//! Composes the human-readable run summary from an extracted record. Pure
//! sentence assembly: each fragment is emitted only when its governing
//! field is present, in a fixed presentation order (location, then route,
//! then pace, then workout focus, then post-run social). That order is a
//! contract with the editing UI, not an implementation detail.
//!
//! When nothing qualifies, the caller's raw combined text comes back
//! unchanged so the description field is never blank.

use crate::fields::{ExtractedRunFields, RunType, ALL_PACES_WELCOME};

/// Build the summary paragraph for `fields`. `fallback` is the combined
/// text the fields were extracted from; it is returned verbatim when no
/// fragment qualifies. Cannot fail.
pub fn synthesize(fields: &ExtractedRunFields, fallback: &str) -> String {
    let mut fragments: Vec<String> = Vec::with_capacity(5);

    // 1) Location.
    if let Some(point) = &fields.meet_up_point {
        let mut s = format!("This run meets at {point}");
        if let Some(hood) = &fields.route_neighborhood {
            s.push_str(&format!(" in the {hood} neighborhood"));
        } else if let Some(city) = &fields.meet_up_city {
            s.push_str(&format!(" in {city}"));
        }
        fragments.push(s);
    }

    // 2) Distance and route.
    if let Some(miles) = &fields.total_miles {
        let mut s = format!("The route covers {miles} miles");
        if let Some(run_type) = fields.run_type {
            s.push_str(&format!(" on {}", run_type.route_phrase()));
        }
        if fields.run_type == Some(RunType::Track) {
            s.push_str(" before returning to the track");
        } else {
            s.push_str(" before returning to the start");
        }
        fragments.push(s);
    }

    // 3) Pace.
    match fields.pace.as_deref() {
        Some(ALL_PACES_WELCOME) => fragments.push("All paces are welcome".to_string()),
        Some(pace) => fragments.push(format!("Pace: {pace} per mile")),
        None => {}
    }

    // 4) Workout focus.
    if let Some(workout) = &fields.workout_description {
        if fields.run_type == Some(RunType::Track) {
            fragments.push(format!("This is a track workout that {workout}"));
        } else {
            fragments.push(format!("This workout {workout}"));
        }
    }

    // 5) Post-run social.
    if let Some(activity) = &fields.post_run_activity {
        fragments.push(format!("The run finishes with {activity}"));
    }

    if fragments.is_empty() {
        return fallback.to_string();
    }

    let mut out = fragments.join(". ");
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_fall_back_to_raw_text() {
        let raw = "[SOCIAL POST TEXT]\nsomething unparseable";
        let got = synthesize(&ExtractedRunFields::default(), raw);
        assert_eq!(got, raw);
        assert!(!got.is_empty());
    }

    #[test]
    fn neighborhood_wins_over_city_in_location_sentence() {
        let f = ExtractedRunFields {
            meet_up_point: Some("Riverside Park".into()),
            route_neighborhood: Some("Back Bay".into()),
            meet_up_city: Some("Boston".into()),
            ..Default::default()
        };
        let got = synthesize(&f, "");
        assert_eq!(
            got,
            "This run meets at Riverside Park in the Back Bay neighborhood."
        );
    }

    #[test]
    fn city_used_when_no_neighborhood() {
        let f = ExtractedRunFields {
            meet_up_point: Some("Riverside Park".into()),
            meet_up_city: Some("Boston".into()),
            ..Default::default()
        };
        let got = synthesize(&f, "");
        assert_eq!(got, "This run meets at Riverside Park in Boston.");
    }

    #[test]
    fn track_route_returns_to_the_track() {
        let f = ExtractedRunFields {
            total_miles: Some("3".into()),
            run_type: Some(RunType::Track),
            ..Default::default()
        };
        let got = synthesize(&f, "");
        assert_eq!(
            got,
            "The route covers 3 miles on track before returning to the track."
        );
    }

    #[test]
    fn unknown_run_type_still_returns_to_the_start() {
        let f = ExtractedRunFields {
            total_miles: Some("6".into()),
            ..Default::default()
        };
        let got = synthesize(&f, "");
        assert_eq!(got, "The route covers 6 miles before returning to the start.");
    }

    #[test]
    fn track_workout_gets_its_own_sentence_form() {
        let f = ExtractedRunFields {
            run_type: Some(RunType::Track),
            workout_description: Some("emphasizes speed work".into()),
            ..Default::default()
        };
        let got = synthesize(&f, "");
        assert!(got.contains("This is a track workout that emphasizes speed work"));

        let f2 = ExtractedRunFields {
            workout_description: Some("emphasizes speed work".into()),
            ..Default::default()
        };
        let got2 = synthesize(&f2, "");
        assert!(got2.contains("This workout emphasizes speed work"));
    }

    #[test]
    fn numeric_pace_sentence() {
        let f = ExtractedRunFields {
            pace: Some("8:45".into()),
            ..Default::default()
        };
        assert_eq!(synthesize(&f, ""), "Pace: 8:45 per mile.");
    }
}
