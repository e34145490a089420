//! Configuration: a small TOML file with serde defaults for every field, so
//! an empty (or absent) file yields a fully working local setup.

mod schema;

pub use schema::{Config, MailConfig, ServerConfig, SiteConfig};

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ConfigError;

/// Environment variable overriding the relay public key, so it never has to
/// live in a checked-in config file.
pub const MAIL_KEY_ENV: &str = "ARISEFOLIO_MAIL_PUBLIC_KEY";

impl Config {
    /// Load from an explicit path, or from the default location when `None`.
    /// A missing file is not an error; defaults apply.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        let mut config = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            toml::from_str(&text).map_err(|e| ConfigError::Load(e.to_string()))?
        } else {
            Self::default()
        };

        if let Ok(key) = std::env::var(MAIL_KEY_ENV) {
            let key = key.trim();
            if !key.is_empty() {
                config.mail.public_key = Some(key.to_owned());
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Validation("server.host is empty".into()));
        }
        if let Some(path) = &self.site.content_path
            && !path.exists()
        {
            return Err(ConfigError::Validation(format!(
                "site.content_path does not exist: {}",
                path.display()
            )));
        }
        Ok(())
    }
}

/// `./config.toml` when present, otherwise the per-user config directory.
fn default_config_path() -> PathBuf {
    let local = PathBuf::from("config.toml");
    if local.exists() {
        return local;
    }
    ProjectDirs::from("", "", "arisefolio")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or(local)
}
