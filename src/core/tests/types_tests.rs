use crate::core::types::{FlashKind, FlashNotice, Trip};
use chrono::NaiveDate;

/// Helper: a well-formed three-day trip
fn sample_trip() -> Trip {
    Trip {
        city: "Jaipur".to_string(),
        days: 3,
        interests: vec!["forts".to_string(), "food".to_string()],
        transport: "train".to_string(),
        budget: "medium".to_string(),
        group_type: "couple".to_string(),
        itinerary: vec![
            "Amber Fort and old city".to_string(),
            "City Palace and bazaars".to_string(),
            "Day trip to Nahargarh".to_string(),
        ],
        created_at: NaiveDate::from_ymd_opt(2026, 7, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
        updated_at: None,
    }
}

#[test]
fn test_flash_kind_css_classes() {
    assert_eq!(FlashKind::Success.css_class(), "flash-success");
    assert_eq!(FlashKind::Error.css_class(), "flash-error");
}

#[test]
fn test_flash_kind_display_matches_category_strings() {
    assert_eq!(format!("{}", FlashKind::Success), "success");
    assert_eq!(format!("{}", FlashKind::Error), "error");
}

#[test]
fn test_flash_kind_from_str() {
    assert_eq!("success".parse::<FlashKind>(), Ok(FlashKind::Success));
    assert_eq!("error".parse::<FlashKind>(), Ok(FlashKind::Error));
    assert!("warning".parse::<FlashKind>().is_err());
}

#[test]
fn test_flash_notice_constructors() {
    let saved = FlashNotice::success("Trip saved successfully!");
    assert_eq!(saved.kind, FlashKind::Success);
    assert_eq!(saved.text, "Trip saved successfully!");

    let missing = FlashNotice::error("Trip not found");
    assert_eq!(missing.kind, FlashKind::Error);
}

#[test]
fn test_trip_display() {
    let trip = sample_trip();
    assert_eq!(format!("{}", trip), "Jaipur (3 days)");

    let mut day_trip = sample_trip();
    day_trip.days = 1;
    day_trip.itinerary.truncate(1);
    assert_eq!(format!("{}", day_trip), "Jaipur (1 day)");
}

#[test]
fn test_trip_timestamp_display_format() {
    let trip = sample_trip();
    assert_eq!(trip.created_display(), "2026-07-01 09:30");
    assert_eq!(trip.updated_display(), None);
}

#[test]
fn test_clean_trip_has_no_issues() {
    assert!(sample_trip().issues().is_empty());
}

#[test]
fn test_empty_city_is_an_issue() {
    let mut trip = sample_trip();
    trip.city = "  ".to_string();

    let issues = trip.issues();
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("city"));
}

#[test]
fn test_day_count_mismatch_is_an_issue() {
    let mut trip = sample_trip();
    trip.days = 5;

    let issues = trip.issues();
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("3 day entries"));
    assert!(issues[0].contains("5 days"));
}

#[test]
fn test_empty_itinerary_is_not_a_mismatch() {
    // A trip saved before generating day entries is still valid
    let mut trip = sample_trip();
    trip.itinerary.clear();

    assert!(trip.issues().is_empty());
}

#[test]
fn test_trip_toml_round_trip() {
    let trip = sample_trip();

    let serialized = toml::to_string(&trip).expect("Trip should serialize to TOML");
    let parsed: Trip = toml::from_str(&serialized).expect("Serialized trip should parse back");

    assert_eq!(parsed, trip);
}

#[test]
fn test_trip_parses_from_handwritten_toml() {
    let source = r#"
        city = "Lisbon"
        days = 2
        interests = ["food", "tram rides"]
        transport = "walking"
        budget = "low"
        group_type = "solo"
        itinerary = ["Alfama and miradouros", "Belém pastries"]
        created_at = "2026-05-14T18:00:00"
    "#;

    let trip: Trip = toml::from_str(source).expect("Handwritten trip should parse");
    assert_eq!(trip.city, "Lisbon");
    assert_eq!(trip.days, 2);
    assert_eq!(trip.created_display(), "2026-05-14 18:00");
    assert!(trip.updated_at.is_none());
}
