use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadershipItem {
    pub title: String,
    pub organization: String,
    /// Free-form, e.g. "Fall 2024 - Present". Never parsed.
    pub dates: String,
    pub description: Vec<String>,
}
