//! `check` subcommand: audit the content catalog before deploying it.
//!
//! Duplicate ids already fail at load; this pass adds link and media health:
//! every non-sentinel URL must parse as an absolute URL, and projects without
//! screenshots are called out (they render with the placeholder thumbnail).

use anyhow::{Result, bail};
use console::style;
use url::Url;

use crate::config::Config;
use crate::content::Catalog;
use crate::view::NavIntent;

#[derive(Debug, Default)]
struct Audit {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Audit {
    fn check_link(&mut self, owner: &str, field: &str, value: &str) {
        match NavIntent::for_link(value) {
            // Sentinel links are a deliberate state, not a finding.
            NavIntent::Unavailable | NavIntent::Internal(_) => {}
            NavIntent::External(url) => {
                if Url::parse(&url).is_err() {
                    self.errors
                        .push(format!("{owner}: {field} is not a valid URL: {url}"));
                }
            }
        }
    }
}

pub fn run_check(config: &Config) -> Result<()> {
    let catalog = match &config.site.content_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::embedded()?,
    };

    let mut audit = Audit::default();

    if catalog.projects.is_empty() {
        audit.errors.push("projects registry is empty".into());
    }
    if catalog.certificates.is_empty() {
        audit
            .warnings
            .push("certificates registry is empty".into());
    }

    for project in catalog.projects.iter() {
        audit.check_link(&project.id, "live_url", &project.live_url);
        audit.check_link(&project.id, "code_url", &project.code_url);
        if project.images.is_empty() {
            audit
                .warnings
                .push(format!("{}: no screenshots, placeholder will render", project.id));
        }
    }

    for cert in catalog.certificates.iter() {
        audit.check_link(&cert.id, "url", &cert.url);
    }

    for social in &catalog.profile.contact.socials {
        audit.check_link(&social.label, "url", &social.url);
    }

    println!(
        "  {} {} projects, {} certificates",
        style("›").cyan(),
        catalog.projects.len(),
        catalog.certificates.len()
    );
    for warning in &audit.warnings {
        println!("  {} {warning}", style("!").yellow());
    }
    for error in &audit.errors {
        println!("  {} {error}", style("✗").red());
    }

    if audit.errors.is_empty() {
        println!("  {} catalog looks good", style("✓").green());
        Ok(())
    } else {
        bail!("catalog audit failed with {} error(s)", audit.errors.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_passes_audit() {
        run_check(&Config::default()).unwrap();
    }

    #[test]
    fn sentinel_links_are_not_findings() {
        let mut audit = Audit::default();
        audit.check_link("p-1", "live_url", "#");
        audit.check_link("p-1", "live_url", "");
        assert!(audit.errors.is_empty());
    }

    #[test]
    fn relative_link_is_an_error() {
        let mut audit = Audit::default();
        audit.check_link("p-1", "code_url", "not-a-url");
        assert_eq!(audit.errors.len(), 1);
    }

    #[test]
    fn absolute_link_is_clean() {
        let mut audit = Audit::default();
        audit.check_link("p-1", "code_url", "https://github.com/Farras8/JobMate.git");
        assert!(audit.errors.is_empty());
    }
}
