use std::collections::BTreeMap;

use crate::models::Activity;

/// The fixed catalog the server starts with. Catalog membership never
/// changes at runtime; only rosters do.
pub fn default_catalog() -> BTreeMap<String, Activity> {
    let mut catalog = BTreeMap::new();
    catalog.insert(
        "Chess Club".to_string(),
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: Some(12),
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        },
    );
    catalog.insert(
        "Programming Class".to_string(),
        Activity {
            description: "Learn programming fundamentals and build software projects"
                .to_string(),
            schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: Some(20),
            participants: vec![
                "emma@mergington.edu".to_string(),
                "sophia@mergington.edu".to_string(),
            ],
        },
    );
    catalog.insert(
        "Gym Class".to_string(),
        Activity {
            description: "Physical education and sports activities".to_string(),
            schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
            max_participants: Some(30),
            participants: vec![
                "john@mergington.edu".to_string(),
                "olivia@mergington.edu".to_string(),
            ],
        },
    );
    catalog
}
