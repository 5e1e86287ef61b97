use serde::{Deserialize, Serialize};

/// A titled group of skill tags, rendered in listed order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

impl SkillCategory {
    pub fn new(title: impl Into<String>, skills: &[&str]) -> Self {
        Self {
            title: title.into(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}
