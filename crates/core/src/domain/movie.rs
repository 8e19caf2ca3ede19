// Movie Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Movie identifier (slug, e.g. `goodwill-hunting`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Derive an identifier from a title: lowercase, spaces become hyphens.
    ///
    /// Only the ASCII space is replaced; other whitespace and punctuation are
    /// kept as-is.
    pub fn from_title(title: &str) -> Self {
        Self(title.to_lowercase().replace(' ', "-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Movie Entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub rating: f64,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>, rating: f64) -> Self {
        Self {
            id,
            title: title.into(),
            rating,
        }
    }
}

/// Body of the create operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    pub title: String,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}
