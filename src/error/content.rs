use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    BlogPostNotFound(u32),
    ProjectNotFound(u32),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::BlogPostNotFound(id) => write!(f, "no blog post with id {}", id),
            ContentError::ProjectNotFound(id) => write!(f, "no project with id {}", id),
        }
    }
}

impl std::error::Error for ContentError {}
