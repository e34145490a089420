use tera::Tera;

use crate::error::RenderError;

/// Tera-backed renderer over the compiled-in page templates.
///
/// Templates are registered from embedded strings, so the binary serves pages
/// with no template directory on disk.
pub struct SiteRenderer {
    tera: Tera,
}

/// Template set, embedded at compile time. Order matters: bases and partials
/// first so later templates can extend/include them.
const TEMPLATES: [(&str, &str); 5] = [
    ("base.html", include_str!("templates/base.html")),
    ("modal.html", include_str!("templates/modal.html")),
    ("home.html", include_str!("templates/home.html")),
    ("project.html", include_str!("templates/project.html")),
    ("not_found.html", include_str!("templates/not_found.html")),
];

impl SiteRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())
            .map_err(|e| RenderError::Compile {
                name: "embedded".into(),
                message: e.to_string(),
            })?;
        Ok(Self { tera })
    }

    /// Render a registered template with the given context.
    pub fn render(&self, name: &str, context: &tera::Context) -> Result<String, RenderError> {
        self.tera.render(name, context).map_err(|e| {
            let mut message = e.to_string();
            // Tera nests the interesting cause one level down.
            if let Some(source) = std::error::Error::source(&e) {
                message = format!("{message}: {source}");
            }
            RenderError::Render {
                name: name.to_owned(),
                message,
            }
        })
    }
}
