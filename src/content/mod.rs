//! The content catalog: every record the site renders.
//!
//! The catalog is deserialized once at startup from the embedded
//! `portfolio.toml` (or an override file, mainly for tests) and shared
//! read-only behind an `Arc` for the lifetime of the process.

pub mod profile;
pub mod record;
pub mod registry;

use std::path::Path;

use serde::Deserialize;

use crate::error::ContentError;
pub use profile::Profile;
pub use record::{CertificateRecord, ProjectRecord, Rank};
pub use registry::{Keyed, Registry};

/// Content as it appears on disk, before registry validation.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    hero: profile::Hero,
    about: profile::About,
    #[serde(default)]
    experience: Vec<profile::ExperienceEntry>,
    #[serde(default)]
    education: Vec<profile::EducationEntry>,
    #[serde(default)]
    skills: Vec<profile::SkillGroup>,
    contact: profile::ContactInfo,
    footer_tagline: String,
    #[serde(default)]
    projects: Vec<ProjectRecord>,
    #[serde(default)]
    certificates: Vec<CertificateRecord>,
}

/// Validated, immutable content set.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub profile: Profile,
    pub projects: Registry<ProjectRecord>,
    pub certificates: Registry<CertificateRecord>,
}

/// Site content compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("portfolio.toml");

impl Catalog {
    /// The catalog shipped with the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml(EMBEDDED_CATALOG)
    }

    /// Load from an external TOML file, overriding the embedded content.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ContentError> {
        let raw: RawCatalog =
            toml::from_str(text).map_err(|e| ContentError::Parse(e.to_string()))?;
        Ok(Self {
            profile: Profile {
                hero: raw.hero,
                about: raw.about,
                experience: raw.experience,
                education: raw.education,
                skills: raw.skills,
                contact: raw.contact,
                footer_tagline: raw.footer_tagline,
            },
            projects: Registry::new("projects", raw.projects)?,
            certificates: Registry::new("certificates", raw.certificates)?,
        })
    }
}
