//! Read-only dataset behind every rendered section.
//!
//! The bundled content is compiled in and built once on first access; there is
//! no fetch and no mutation afterwards.

mod data;

use std::collections::HashSet;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::models::{LeadershipItem, Profile, Project, SkillCategory};

static BUNDLED: Lazy<ContentStore> = Lazy::new(|| {
    ContentStore::new(data::profile(), data::skills(), data::projects(), data::leadership())
});

/// Dataset invariant violations reported by [`ContentStore::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("skill category `{0}` has no skills")]
    EmptySkillCategory(String),

    #[error("duplicate skill category title `{0}`")]
    DuplicateSkillCategory(String),

    #[error("duplicate project title `{0}`")]
    DuplicateProject(String),

    #[error("duplicate leadership title `{0}`")]
    DuplicateLeadership(String),

    #[error("leadership entry `{0}` has no description")]
    EmptyLeadershipDescription(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentStore {
    profile: Profile,
    skills: Vec<SkillCategory>,
    projects: Vec<Project>,
    leadership: Vec<LeadershipItem>,
}

impl ContentStore {
    pub fn new(
        profile: Profile,
        skills: Vec<SkillCategory>,
        projects: Vec<Project>,
        leadership: Vec<LeadershipItem>,
    ) -> Self {
        Self {
            profile,
            skills,
            projects,
            leadership,
        }
    }

    /// The dataset shipped with the site.
    pub fn global() -> &'static ContentStore {
        &BUNDLED
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn skills(&self) -> &[SkillCategory] {
        &self.skills
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn leadership(&self) -> &[LeadershipItem] {
        &self.leadership
    }

    /// Checks the invariants the presentation layer relies on. Returns the
    /// first violation found, scanning skills, then projects, then leadership.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for category in &self.skills {
            if category.skills.is_empty() {
                return Err(ContentError::EmptySkillCategory(category.title.clone()));
            }
            if !seen.insert(category.title.as_str()) {
                return Err(ContentError::DuplicateSkillCategory(category.title.clone()));
            }
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.title.as_str()) {
                return Err(ContentError::DuplicateProject(project.title.clone()));
            }
        }

        let mut seen = HashSet::new();
        for item in &self.leadership {
            if item.description.is_empty() {
                return Err(ContentError::EmptyLeadershipDescription(item.title.clone()));
            }
            if !seen.insert(item.title.as_str()) {
                return Err(ContentError::DuplicateLeadership(item.title.clone()));
            }
        }

        Ok(())
    }
}
