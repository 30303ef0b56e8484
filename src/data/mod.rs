mod blog;
mod projects;
mod skills;

pub use blog::{estimated_read_time, BlogEntry, BlogPreview};
pub use projects::{filter_gallery, Project, ProjectDetail};
pub use skills::{Skill, SkillCategory};
