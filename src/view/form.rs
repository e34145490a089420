use serde::Deserialize;
use strum::{Display, EnumString};

/// Contact form payload. All three fields are required; validation happens
/// locally before anything leaves the process.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    /// Names of the fields that are blank, in form order. Empty means the
    /// message may be submitted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Lifecycle of one contact submission.
///
/// `Idle → Loading → Success | Error`. The submit affordance is disabled
/// while a request is in flight and stays disabled after a success; a failed
/// submission may be retried manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Guard on the submit affordance; there is no request de-duplication
    /// beyond this.
    pub fn can_submit(self) -> bool {
        matches!(self, Self::Idle | Self::Error)
    }

    /// Enter the in-flight state. Only legal from a submittable state.
    pub fn begin(self) -> Self {
        debug_assert!(self.can_submit());
        Self::Loading
    }

    /// Terminal transition from `Loading` on the relay's outcome.
    pub fn complete(self, ok: bool) -> Self {
        if ok { Self::Success } else { Self::Error }
    }

    /// Status carried across the post/redirect/get round trip.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("ok") => Self::Success,
            Some("error") => Self::Error,
            _ => Self::Idle,
        }
    }

    /// Query token for the redirect after a completed submission.
    pub fn as_query(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("ok"),
            Self::Error => Some("error"),
            Self::Idle | Self::Loading => None,
        }
    }
}
