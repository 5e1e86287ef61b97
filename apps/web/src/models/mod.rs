mod leadership;
mod profile;
mod project;
mod skill;

pub use leadership::LeadershipItem;
pub use profile::Profile;
pub use project::Project;
pub use skill::SkillCategory;
