use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `Arisefolio`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum SiteError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Content catalog ─────────────────────────────────────────────────
    #[error("content: {0}")]
    Content(#[from] ContentError),

    // ── Page rendering ──────────────────────────────────────────────────
    #[error("render: {0}")]
    Render(#[from] RenderError),

    // ── Contact relay ───────────────────────────────────────────────────
    #[error("mail: {0}")]
    Mail(#[from] MailError),

    // ── HTTP server ─────────────────────────────────────────────────────
    #[error("server: {0}")]
    Server(#[from] ServerError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Content catalog errors ─────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse catalog: {0}")]
    Parse(String),

    #[error("duplicate record id {id:?} in {registry} registry")]
    DuplicateId { registry: &'static str, id: String },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Render errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template {name} failed to compile: {message}")]
    Compile { name: String, message: String },

    #[error("template {name} failed to render: {message}")]
    Render { name: String, message: String },
}

// ─── Contact relay errors ───────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum MailError {
    #[error("relay not configured")]
    NotConfigured,

    #[error("relay request failed: {0}")]
    Request(String),

    #[error("relay rejected submission: status {status}")]
    Rejected { status: u16 },
}

// ─── Server errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
