/// Where an action on a card or detail page actually goes.
///
/// Resolved once when the page context is built, never re-branched in the
/// templates. An empty string or a bare `"#"` in a link field means the
/// destination intentionally does not exist; such actions open the
/// informational modal instead of navigating anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// Route handled by this site (detail pages, section anchors).
    Internal(String),
    /// Absolute URL opened in a new browsing context.
    External(String),
    /// Deliberately absent destination; substitute with the notice modal.
    Unavailable,
}

/// Sentinel values meaning "intentionally no destination".
const NO_LINK_SENTINELS: [&str; 2] = ["", "#"];

impl NavIntent {
    /// Classify an external-link field from a content record.
    pub fn for_link(url: &str) -> Self {
        if NO_LINK_SENTINELS.contains(&url.trim()) {
            Self::Unavailable
        } else {
            Self::External(url.to_owned())
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}
