use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub mail: MailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Host to bind (default: 127.0.0.1; put the site behind its host's
    /// proxy for public serving)
    #[serde(default = "default_host")]
    pub host: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// `<title>` and header brand text (default: FARRAS)
    #[serde(default = "default_brand")]
    pub brand: String,
    /// External TOML catalog overriding the embedded content
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    /// Base URL for image paths; empty serves them relative to the site root
    #[serde(default)]
    pub asset_base: String,
}

/// Identifiers for the transactional-email relay behind the contact form.
/// All three must be present for submissions to leave the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    /// Relay endpoint; overridable for tests
    #[serde(default = "default_mail_endpoint")]
    pub endpoint: String,
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_brand() -> String {
    "FARRAS".into()
}

fn default_mail_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            content_path: None,
            asset_base: String::new(),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            endpoint: default_mail_endpoint(),
        }
    }
}

impl MailConfig {
    /// Relay identifiers when all three are configured.
    pub fn credentials(&self) -> Option<(&str, &str, &str)> {
        match (&self.service_id, &self.template_id, &self.public_key) {
            (Some(s), Some(t), Some(k)) => Some((s, t, k)),
            _ => None,
        }
    }
}
