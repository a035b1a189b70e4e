//! HTTP Webhook
//!
//! Implementation of `Webhook` over reqwest. One POST per delivery, JSON
//! body, no retries.

use async_trait::async_trait;
use serde_json::Value;

use forms_core::{FormError, Result, Webhook, WebhookResponse};

use crate::config::WebhookConfig;

/// POSTs JSON to a fixed endpoint
#[derive(Clone, Debug)]
pub struct HttpWebhook {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpWebhook {
    /// Webhook with the transport's default timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Webhook with an optional request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Option<std::time::Duration>,
    ) -> Result<Self> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder
            .build()
            .map_err(|e| FormError::Config(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl WebhookConfig {
    pub fn contact_webhook(&self) -> Result<HttpWebhook> {
        HttpWebhook::with_timeout(&self.contact_url, self.timeout())
    }

    pub fn agent_webhook(&self) -> Result<HttpWebhook> {
        HttpWebhook::with_timeout(&self.agent_url, self.timeout())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Webhook for HttpWebhook {
    async fn deliver(&self, payload: &Value) -> Result<WebhookResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;

        tracing::debug!(endpoint = %self.endpoint, status, "webhook responded");

        Ok(WebhookResponse { status, body })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhooks_from_config() {
        let config = WebhookConfig {
            timeout_secs: Some(10),
            ..Default::default()
        };

        assert_eq!(config.contact_webhook().unwrap().endpoint(), config.contact_url);
        assert_eq!(config.agent_webhook().unwrap().endpoint(), config.agent_url);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) is closed on loopback, so the connect is refused.
        let webhook = HttpWebhook::new("http://127.0.0.1:9/webhook");

        let err = webhook.deliver(&serde_json::json!({"url": "https://x.io"})).await.unwrap_err();
        assert!(matches!(err, FormError::Transport(_)));
    }
}
