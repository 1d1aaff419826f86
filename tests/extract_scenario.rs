// tests/extract_scenario.rs
//
// End-to-end scenario: one realistic social post through the full
// extract-and-describe pipeline, checking every extracted field and the
// assembled description's fragment order.

use gofast_run_extractor::{extract_and_describe, RawSourceBundle, RunType, ALL_PACES_WELCOME};

const POST: &str = "Saturday Morning Run\nWe meet at Riverside Park in the Back Bay neighborhood. The route covers 4.5 miles on neighborhood streets. All paces welcome. This run finishes with coffee at Tatte Bakery.";

fn run_fields() -> gofast_run_extractor::ExtractedRunFields {
    let bundle = RawSourceBundle {
        social_post_text: Some(POST.to_string()),
        ..Default::default()
    };
    extract_and_describe(&bundle).expect("usable input")
}

#[test]
fn scenario_extracts_every_expected_field() {
    let f = run_fields();

    assert_eq!(f.title.as_deref(), Some("Saturday Morning Run"));
    assert_eq!(f.meet_up_point.as_deref(), Some("Riverside Park"));
    assert_eq!(f.route_neighborhood.as_deref(), Some("Back Bay"));
    assert_eq!(f.total_miles.as_deref(), Some("4.5"));
    assert_eq!(f.run_type, Some(RunType::Neighborhood));
    assert_eq!(f.pace.as_deref(), Some(ALL_PACES_WELCOME));
    assert_eq!(
        f.post_run_activity.as_deref(),
        Some("coffee at Tatte Bakery")
    );

    // Not present in the post: soft misses, not errors.
    assert_eq!(f.date, None);
    assert_eq!(f.start_time_hour, None);
    assert_eq!(f.strava_map_url, None);
    assert_eq!(f.meet_up_city, None);
}

#[test]
fn scenario_description_assembles_fragments_in_order() {
    let f = run_fields();
    let desc = f.description.expect("always synthesized");

    let idx = |needle: &str| {
        desc.find(needle)
            .unwrap_or_else(|| panic!("description missing `{needle}`: {desc}"))
    };

    let location = idx("This run meets at Riverside Park in the Back Bay neighborhood");
    let route = idx("The route covers 4.5 miles on neighborhood streets before returning to the start");
    let pace = idx("All paces are welcome");
    let social = idx("The run finishes with coffee at Tatte Bakery");

    assert!(location < route, "location before route: {desc}");
    assert!(route < pace, "route before pace: {desc}");
    assert!(pace < social, "pace before post-run: {desc}");
    assert!(desc.ends_with('.'), "description ends with a period: {desc}");
}
