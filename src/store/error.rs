use thiserror::Error;

/// Rejections produced by the enrollment store.
///
/// Every check runs before any mutation, so a returned error never
/// leaves a roster partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrollmentError {
    /// The activity name is not in the catalog.
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),
    /// The participant is already on the roster.
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },
    /// The roster is at its configured capacity.
    #[error("{activity} is full ({capacity} participants)")]
    ActivityFull { activity: String, capacity: u32 },
    /// The participant is not on the roster.
    #[error("{email} is not signed up for {activity}")]
    NotRegistered { activity: String, email: String },
}
