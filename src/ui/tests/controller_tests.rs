// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Controller tests
//!
//! Tests for the MVC Controller logic

use std::{fs, path::PathBuf};
use tempfile::TempDir;

use crate::store::StoreError;
use crate::ui::Controller;

/// Helper: Creates test trips file with known content
fn create_test_trips() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let trips_path = temp_dir.path().join("trips.toml");

    let content = r#"
[[trips]]
city = "Kyoto"
days = 2
transport = "train"
budget = "medium"
group_type = "solo"
itinerary = ["Fushimi Inari at dawn", "Arashiyama bamboo grove"]
created_at = "2026-04-02T08:15:00"

[[trips]]
city = "Lisbon"
days = 2
transport = "walking"
budget = "low"
group_type = "couple"
itinerary = ["Alfama and miradouros", "Belém pastries"]
created_at = "2026-05-14T18:00:00"

[[trips]]
city = "Jaipur"
days = 1
transport = "auto-rickshaw"
budget = "medium"
group_type = "family"
itinerary = ["Amber Fort and the old city"]
created_at = "2026-06-21T07:45:00"
"#;

    fs::write(&trips_path, content).unwrap();
    (temp_dir, trips_path)
}

#[test]
fn test_controller_creation() {
    let (_temp_dir, trips_path) = create_test_trips();
    let controller = Controller::new(Some(trips_path));

    assert!(
        controller.is_ok(),
        "Controller should be created successfully"
    );
}

#[test]
fn test_controller_creation_with_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = Controller::new(Some(temp_dir.path().join("nope.toml")));

    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn test_load_trips() {
    let (_temp_dir, trips_path) = create_test_trips();
    let controller = Controller::new(Some(trips_path)).unwrap();

    let count = controller.load_trips();
    assert!(count.is_ok(), "Should load trips successfully");
    assert_eq!(count.unwrap(), 3, "Should load 3 trips");
}

#[test]
fn test_trips_and_trip_at() {
    let (_temp_dir, trips_path) = create_test_trips();
    let controller = Controller::new(Some(trips_path)).unwrap();
    controller.load_trips().unwrap();

    let trips = controller.trips();
    assert_eq!(trips.len(), 3);
    assert_eq!(trips[0].city, "Kyoto");

    let second = controller.trip_at(1).expect("Index 1 should exist");
    assert_eq!(second.city, "Lisbon");

    assert!(controller.trip_at(3).is_none(), "Index 3 is out of range");
}

#[test]
fn test_delete_trip_removes_and_persists() {
    let (_temp_dir, trips_path) = create_test_trips();
    let controller = Controller::new(Some(trips_path.clone())).unwrap();
    controller.load_trips().unwrap();

    let deleted = controller.delete_trip(1).expect("Delete should succeed");
    assert_eq!(deleted.city, "Lisbon");
    assert_eq!(controller.trip_count(), 2);

    // A fresh controller sees the reduced list: the delete was persisted
    let reloaded = Controller::new(Some(trips_path)).unwrap();
    reloaded.load_trips().unwrap();
    assert_eq!(reloaded.trip_count(), 2, "Deleted trip should stay deleted");
    assert_eq!(reloaded.trip_at(1).unwrap().city, "Jaipur");
}

#[test]
fn test_delete_trip_out_of_range() {
    let (_temp_dir, trips_path) = create_test_trips();
    let controller = Controller::new(Some(trips_path)).unwrap();
    controller.load_trips().unwrap();

    let result = controller.delete_trip(3);

    match result {
        Err(StoreError::TripNotFound(index)) => assert_eq!(index, 3),
        other => panic!("Expected TripNotFound error, got: {:?}", other),
    }

    assert_eq!(controller.trip_count(), 3, "Nothing should be deleted");
}

#[test]
fn test_demo_controller_loads_embedded_content() {
    let controller = Controller::new(None).expect("Demo controller needs no file");
    let count = controller.load_trips().expect("Demo content should load");

    assert!(count > 0, "Demo content should contain trips");
    assert!(controller.trips_path().is_none());
}

#[test]
fn test_demo_controller_delete_is_in_memory_only() {
    let controller = Controller::new(None).unwrap();
    let count = controller.load_trips().unwrap();

    controller.delete_trip(0).expect("Demo delete should succeed");
    assert_eq!(controller.trip_count(), count - 1);

    // Reloading restores the embedded content
    controller.load_trips().unwrap();
    assert_eq!(controller.trip_count(), count);
}

#[test]
fn test_reload_if_changed_detects_external_edit() {
    let (_temp_dir, trips_path) = create_test_trips();
    let controller = Controller::new(Some(trips_path.clone())).unwrap();
    controller.load_trips().unwrap();

    // Unchanged file → no reload
    assert!(matches!(controller.reload_if_changed(), Ok(None)));

    // External edit → reload with new count
    let reduced = r#"
[[trips]]
city = "Kyoto"
days = 2
transport = "train"
budget = "medium"
group_type = "solo"
itinerary = ["Fushimi Inari at dawn", "Arashiyama bamboo grove"]
created_at = "2026-04-02T08:15:00"
"#;
    fs::write(&trips_path, reduced).unwrap();

    match controller.reload_if_changed() {
        Ok(Some(count)) => assert_eq!(count, 1),
        other => panic!("Expected reload with 1 trip, got: {:?}", other),
    }
    assert_eq!(controller.trip_count(), 1);
}

#[test]
fn test_reload_if_changed_without_backing_file() {
    let controller = Controller::new(None).unwrap();
    controller.load_trips().unwrap();

    assert!(matches!(controller.reload_if_changed(), Ok(None)));
}
