//! Webhook Strategy
//!
//! The single outbound call a form makes. Implementations POST a JSON body
//! to one fixed endpoint and report the raw status and body; deciding what
//! counts as success is left to [`crate::adapter`].

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Raw response from a webhook endpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200 with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Transport-level "ok": any 2xx status
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// An external HTTP endpoint receiving form submissions.
///
/// One call to `deliver` is one POST. Implementations must not retry.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Webhook: Send + Sync {
    /// POST `payload` as JSON and return the response, whatever its status.
    ///
    /// Errors only on transport failure (connection, timeout, body read).
    async fn deliver(&self, payload: &Value) -> Result<WebhookResponse>;

    /// Endpoint URL this webhook posts to
    fn endpoint(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(WebhookResponse::ok("").is_success());
        assert!(WebhookResponse::new(204, "").is_success());
        assert!(!WebhookResponse::new(199, "").is_success());
        assert!(!WebhookResponse::new(302, "").is_success());
        assert!(!WebhookResponse::new(500, "").is_success());
    }
}
