use serde::{Deserialize, Serialize};

/// A single enrollable offering in the catalog. The activity's name is
/// the catalog key and lives outside the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Upper bound on the roster, or unbounded when absent.
    pub max_participants: Option<u32>,
    /// Enrolled participant emails, in signup order. Uniqueness is
    /// enforced by the store; signup is the only insertion path.
    pub participants: Vec<String>,
}
