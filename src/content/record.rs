use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::registry::Keyed;

/// Self-assessed tier displayed on project cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Rank {
    #[serde(rename = "S-Rank")]
    #[strum(serialize = "S-Rank")]
    S,
    #[serde(rename = "A-Rank")]
    #[strum(serialize = "A-Rank")]
    A,
    #[serde(rename = "B-Rank")]
    #[strum(serialize = "B-Rank")]
    B,
    #[serde(rename = "C-Rank")]
    #[strum(serialize = "C-Rank")]
    C,
}

/// One portfolio project. Loaded once at startup, immutable afterwards.
///
/// `live_url` and `code_url` may carry the no-link sentinel (`""` or `"#"`);
/// see `view::nav::NavIntent` for how those render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub contributions: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub duration: String,
    pub team: String,
    pub client: String,
    pub status: String,
    pub live_url: String,
    pub code_url: String,
    pub rank: Rank,
    pub completion_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_note: Option<String>,
}

impl ProjectRecord {
    /// First screenshot, used as the card thumbnail when present.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl Keyed for ProjectRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One certificate or badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub id: String,
    pub name: String,
    pub achieved: String,
    pub valid_until: String,
    pub preview_image: String,
    pub credential_id: String,
    pub url: String,
}

impl Keyed for CertificateRecord {
    fn id(&self) -> &str {
        &self.id
    }
}
