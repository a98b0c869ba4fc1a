use serde::{Deserialize, Serialize};

/// The scene currently being played.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scene {
    /// Scene heading.
    pub title: String,
    /// What the scene is about.
    #[serde(default)]
    pub description: String,
}

impl Scene {
    /// Create a scene.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl std::fmt::Display for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} ({})", self.title, self.description)
        }
    }
}
