//! In-memory enrollment store.
//!
//! Holds the activity catalog and guards the two mutating transitions
//! (signup, unregister). The store itself is synchronous and does no
//! locking; the web layer serializes access behind a single lock over
//! the whole catalog.

pub mod error;
pub mod seed;

use std::collections::BTreeMap;

use crate::models::Activity;

pub use error::EnrollmentError;

/// Returned by a successful signup or unregister, naming what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub activity: String,
    pub email: String,
}

/// The catalog of activities and their rosters.
pub struct EnrollmentStore {
    activities: BTreeMap<String, Activity>,
}

impl EnrollmentStore {
    /// Create a store over the given catalog.
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self { activities }
    }

    /// Create a store seeded with the default catalog.
    pub fn seeded() -> Self {
        Self::new(seed::default_catalog())
    }

    /// The full catalog, keyed by activity name.
    pub fn activities(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    /// Add a participant to an activity's roster.
    ///
    /// Fails if the activity is unknown, the participant is already
    /// registered, or the roster is at capacity. A repeated signup is
    /// an error, not a no-op.
    pub fn signup(
        &mut self,
        activity: &str,
        email: &str,
    ) -> Result<Confirmation, EnrollmentError> {
        let entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| EnrollmentError::ActivityNotFound(activity.to_string()))?;

        // Duplicate signup is reported before a full roster is.
        if entry.participants.iter().any(|p| p == email) {
            return Err(EnrollmentError::AlreadyRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        if let Some(capacity) = entry.max_participants {
            if entry.participants.len() >= capacity as usize {
                return Err(EnrollmentError::ActivityFull {
                    activity: activity.to_string(),
                    capacity,
                });
            }
        }

        entry.participants.push(email.to_string());

        tracing::info!(
            activity = %activity,
            email = %email,
            roster = entry.participants.len(),
            "Participant signed up"
        );

        Ok(Confirmation {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }

    /// Remove a participant from an activity's roster.
    ///
    /// Fails if the activity is unknown or the participant is not on
    /// the roster.
    pub fn unregister(
        &mut self,
        activity: &str,
        email: &str,
    ) -> Result<Confirmation, EnrollmentError> {
        let entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| EnrollmentError::ActivityNotFound(activity.to_string()))?;

        let Some(pos) = entry.participants.iter().position(|p| p == email) else {
            return Err(EnrollmentError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };

        entry.participants.remove(pos);

        tracing::info!(
            activity = %activity,
            email = %email,
            roster = entry.participants.len(),
            "Participant unregistered"
        );

        Ok(Confirmation {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capped_catalog(capacity: Option<u32>) -> BTreeMap<String, Activity> {
        let mut catalog = BTreeMap::new();
        catalog.insert(
            "Chess Club".to_string(),
            Activity {
                description: "Weekly matches".to_string(),
                schedule: "Fridays".to_string(),
                max_participants: capacity,
                participants: vec!["a@mergington.edu".to_string(), "b@mergington.edu".to_string()],
            },
        );
        catalog
    }

    #[test]
    fn seeded_catalog_is_listed_in_full() {
        let store = EnrollmentStore::seeded();
        let catalog = store.activities();

        assert_eq!(catalog.len(), 3);
        let programming = &catalog["Programming Class"];
        assert_eq!(programming.max_participants, Some(20));
        assert_eq!(
            programming.participants,
            vec!["emma@mergington.edu", "sophia@mergington.edu"]
        );
    }

    #[test]
    fn signup_appends_to_roster() {
        let mut store = EnrollmentStore::seeded();

        let confirmation = store
            .signup("Programming Class", "new@mergington.edu")
            .expect("signup should succeed");

        assert_eq!(confirmation.activity, "Programming Class");
        assert_eq!(confirmation.email, "new@mergington.edu");
        let roster = &store.activities()["Programming Class"].participants;
        assert_eq!(roster.last().map(String::as_str), Some("new@mergington.edu"));
    }

    #[test]
    fn duplicate_signup_is_rejected() {
        let mut store = EnrollmentStore::seeded();
        store
            .signup("Programming Class", "new@mergington.edu")
            .expect("first signup should succeed");

        let err = store
            .signup("Programming Class", "new@mergington.edu")
            .expect_err("second signup should fail");

        assert_eq!(
            err,
            EnrollmentError::AlreadyRegistered {
                activity: "Programming Class".to_string(),
                email: "new@mergington.edu".to_string(),
            }
        );
        let copies = store.activities()["Programming Class"]
            .participants
            .iter()
            .filter(|p| *p == "new@mergington.edu")
            .count();
        assert_eq!(copies, 1);
    }

    #[test]
    fn signup_then_unregister_restores_roster() {
        let mut store = EnrollmentStore::seeded();
        let before = store.activities()["Programming Class"].participants.clone();

        store
            .signup("Programming Class", "new@mergington.edu")
            .expect("signup should succeed");
        store
            .unregister("Programming Class", "new@mergington.edu")
            .expect("unregister should succeed");

        assert_eq!(store.activities()["Programming Class"].participants, before);
    }

    #[test]
    fn unregister_of_absent_participant_is_rejected() {
        let mut store = EnrollmentStore::seeded();
        let before = store.activities()["Programming Class"].participants.clone();

        let err = store
            .unregister("Programming Class", "ghost@mergington.edu")
            .expect_err("unregister should fail");

        assert_eq!(
            err,
            EnrollmentError::NotRegistered {
                activity: "Programming Class".to_string(),
                email: "ghost@mergington.edu".to_string(),
            }
        );
        assert_eq!(store.activities()["Programming Class"].participants, before);
    }

    #[test]
    fn unknown_activity_is_rejected_without_creating_one() {
        let mut store = EnrollmentStore::seeded();

        let err = store
            .signup("Knitting Club", "new@mergington.edu")
            .expect_err("signup should fail");

        assert_eq!(
            err,
            EnrollmentError::ActivityNotFound("Knitting Club".to_string())
        );
        assert_eq!(store.activities().len(), 3);
        assert!(!store.activities().contains_key("Knitting Club"));
    }

    #[test]
    fn full_roster_rejects_new_signup() {
        let mut store = EnrollmentStore::new(capped_catalog(Some(2)));

        let err = store
            .signup("Chess Club", "c@mergington.edu")
            .expect_err("signup should fail");

        assert_eq!(
            err,
            EnrollmentError::ActivityFull {
                activity: "Chess Club".to_string(),
                capacity: 2,
            }
        );
        assert_eq!(store.activities()["Chess Club"].participants.len(), 2);
    }

    #[test]
    fn full_roster_still_reports_duplicates_as_duplicates() {
        let mut store = EnrollmentStore::new(capped_catalog(Some(2)));

        let err = store
            .signup("Chess Club", "a@mergington.edu")
            .expect_err("signup should fail");

        assert!(matches!(err, EnrollmentError::AlreadyRegistered { .. }));
    }

    #[test]
    fn missing_capacity_means_unbounded() {
        let mut store = EnrollmentStore::new(capped_catalog(None));

        for i in 0..50 {
            store
                .signup("Chess Club", &format!("student{}@mergington.edu", i))
                .expect("signup should succeed");
        }

        assert_eq!(store.activities()["Chess Club"].participants.len(), 52);
    }
}
