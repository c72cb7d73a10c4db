//! Categories

use serde::{Deserialize, Serialize};

/// Product category. Reference data: selected by forms, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name
    pub name: String,

    /// Category image URL
    pub image_url: String,
}

impl Category {
    /// Create a new category.
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}
