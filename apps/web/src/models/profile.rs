use serde::{Deserialize, Serialize};

/// Owner details shown in the header, hero, about and contact sections.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub contact_blurb: String,
    pub email: String,
    pub avatar_url: String,
    pub hero_image_url: String,
    pub github_url: String,
    pub linkedin_url: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
