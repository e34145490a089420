//! Outbound contact-form delivery.
//!
//! Submissions go through a transactional-email relay (an EmailJS-style REST
//! endpoint) as an opaque external call: one POST, one boolean-ish outcome.
//! No retries, no cancellation once started.

use async_trait::async_trait;
use serde_json::json;

use crate::config::MailConfig;
use crate::error::MailError;
use crate::view::ContactMessage;

/// Anything that can deliver a contact message. The gateway holds this as a
/// trait object so tests can swap in a recording double.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError>;
}

/// REST relay client. Credentials come from `[mail]` config; the endpoint is
/// overridable so integration tests can point at a local mock.
pub struct RelayMailer {
    client: reqwest::Client,
    config: MailConfig,
}

impl RelayMailer {
    pub fn new(config: MailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Mailer for RelayMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        let (service_id, template_id, public_key) = self
            .config
            .credentials()
            .ok_or(MailError::NotConfigured)?;

        let body = json!({
            "service_id": service_id,
            "template_id": template_id,
            "user_id": public_key,
            "template_params": {
                "name": message.name,
                "email": message.email,
                "message": message.message,
            },
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| MailError::Request(sanitize_relay_error(&e.to_string())))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(MailError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

/// Keep relay credentials out of error text (they can appear in request
/// URLs echoed by reqwest).
fn sanitize_relay_error(message: &str) -> String {
    let mut sanitized = message.to_owned();
    for secret in ["user_id=", "accessToken="] {
        if let Some(pos) = sanitized.find(secret) {
            sanitized.truncate(pos);
            sanitized.push_str("[redacted]");
        }
    }
    sanitized
}
