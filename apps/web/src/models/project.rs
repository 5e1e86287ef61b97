use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Identity key when rendering the project list.
    pub title: String,
    pub description: String,
    /// Bullet points; `None` renders no list at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    pub tags: Vec<String>,
    pub image_url: String,
    pub live_url: String,
    pub source_url: String,
}
