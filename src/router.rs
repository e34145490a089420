//! The site's route surface as a tagged variant.
//!
//! The axum route table in `gateway` mirrors this exactly; `Route::parse`
//! exists so the mapping is testable without a listener and so the fallback
//! handler can classify arbitrary paths.

/// Every page this site can serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` — the composed single-page view, all sections in order.
    Home,
    /// `/projects/{id}` — detail view for one project.
    ProjectDetail(String),
    /// Anything else. Renders the terminal not-found page.
    NotFound,
}

impl Route {
    /// Classify a request path (no query string, no fragment).
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::Home;
        }
        match trimmed.strip_prefix("/projects/") {
            // Nested segments under /projects/ are not detail pages.
            Some(id) if !id.is_empty() && !id.contains('/') => {
                Self::ProjectDetail(id.to_owned())
            }
            _ => Self::NotFound,
        }
    }

    /// Path for linking to this route from a template.
    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::ProjectDetail(id) => format!("/projects/{id}"),
            Self::NotFound => "/".to_owned(),
        }
    }
}
