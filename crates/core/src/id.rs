//! Identity of a stored video.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Identifies a video by the category directory it lives in and its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VideoKey {
    /// Category (directory) the video belongs to
    pub category: String,

    /// Video name, unique within its category
    pub name: String,
}

impl VideoKey {
    /// Create a key, normalising both parts.
    ///
    /// Names are lowercased and runs of whitespace collapse into a single `-`,
    /// so `"My Video"` and `"my  video"` address the same record.
    pub fn new(category: impl AsRef<str>, name: impl AsRef<str>) -> Self {
        Self {
            category: normalize(category.as_ref()),
            name: normalize(name.as_ref()),
        }
    }

    /// Whether the key can safely be turned into a file path.
    pub fn is_valid(&self) -> bool {
        is_valid_part(&self.category) && is_valid_part(&self.name)
    }
}

impl std::fmt::Display for VideoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.category, self.name)
    }
}

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

fn normalize(s: &str) -> String {
    whitespace()
        .replace_all(s.trim(), "-")
        .to_lowercase()
}

fn is_valid_part(s: &str) -> bool {
    !s.is_empty() && s != "." && !s.contains('/') && !s.contains('\\') && !s.contains("..")
}
