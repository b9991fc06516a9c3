//! Parses a realistic directory payload the way the board does on load.

use activity_board::model::ActivityDirectory;

const DIRECTORY_JSON: &str = r#"{
    "Chess Club": {
        "description": "Learn strategies and compete in chess tournaments",
        "schedule": "Fridays, 3:30 PM - 5:00 PM",
        "max_participants": 12,
        "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
    },
    "Programming Class": {
        "description": "Learn programming fundamentals and build software projects",
        "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        "max_participants": 20,
        "participants": ["emma@mergington.edu", "sophia@mergington.edu"]
    },
    "Basketball Team": {
        "description": "Competitive basketball league and practice",
        "schedule": "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        "max_participants": 15,
        "participants": ["alex@mergington.edu"]
    },
    "Art Studio": {
        "description": "Painting, drawing, and visual arts",
        "schedule": "Wednesdays, 3:30 PM - 5:00 PM",
        "max_participants": 18,
        "participants": []
    }
}"#;

#[test]
fn directory_parses_every_activity() {
    let dir: ActivityDirectory = serde_json::from_str(DIRECTORY_JSON).unwrap();
    assert_eq!(dir.len(), 4);

    let chess = &dir["Chess Club"];
    assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(chess.max_participants, 12);
    // Roster order comes straight off the wire.
    assert_eq!(
        chess.participants,
        vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );
}

#[test]
fn spots_left_reflects_each_roster() {
    let dir: ActivityDirectory = serde_json::from_str(DIRECTORY_JSON).unwrap();
    assert_eq!(dir["Chess Club"].spots_left(), 10);
    assert_eq!(dir["Programming Class"].spots_left(), 18);
    assert_eq!(dir["Basketball Team"].spots_left(), 14);
}

#[test]
fn empty_roster_yields_no_removal_entries() {
    let dir: ActivityDirectory = serde_json::from_str(DIRECTORY_JSON).unwrap();
    let art = &dir["Art Studio"];
    assert!(art.participants.is_empty());
    assert_eq!(art.spots_left(), 18);
}

#[test]
fn directory_iterates_in_deterministic_key_order() {
    let dir: ActivityDirectory = serde_json::from_str(DIRECTORY_JSON).unwrap();
    let names: Vec<&str> = dir.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["Art Studio", "Basketball Team", "Chess Club", "Programming Class"]
    );
}
