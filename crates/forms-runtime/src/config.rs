//! Webhook Endpoint Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use forms_core::{FormError, Result};

/// Relay path the browser posts contact submissions to
pub const CONTACT_RELAY_PATH: &str = "/api/contact";

/// Relay path the browser posts agent-creation submissions to
pub const AGENT_RELAY_PATH: &str = "/api/agents";

/// Endpoint per form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Contact form webhook
    pub contact_url: String,

    /// Agent-creation webhook
    pub agent_url: String,

    /// Request timeout in seconds; `None` keeps the transport default
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Raw `WEBHOOK_TIMEOUT_SECS` that failed to parse, reported by `validate`
    #[serde(skip)]
    pub(crate) invalid_timeout: Option<String>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            contact_url: "https://n8n.example.com/webhook/contactbnform".into(),
            agent_url: "https://n8n.example.com/webhook/ultravox_inbound_custom".into(),
            timeout_secs: None,
            invalid_timeout: None,
        }
    }
}

impl WebhookConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let contact_url =
            std::env::var("CONTACT_WEBHOOK_URL").unwrap_or(defaults.contact_url);
        let agent_url = std::env::var("AGENT_WEBHOOK_URL").unwrap_or(defaults.agent_url);
        let (timeout_secs, invalid_timeout) =
            parse_timeout(std::env::var("WEBHOOK_TIMEOUT_SECS").ok());

        Self {
            contact_url,
            agent_url,
            timeout_secs,
            invalid_timeout,
        }
    }

    /// Endpoints for a page served from `origin`: the server's relay paths.
    pub fn same_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');

        Self {
            contact_url: format!("{origin}{CONTACT_RELAY_PATH}"),
            agent_url: format!("{origin}{AGENT_RELAY_PATH}"),
            timeout_secs: None,
            invalid_timeout: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Both endpoints must be absolute http(s) URLs with a host
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [("contact", &self.contact_url), ("agent", &self.agent_url)] {
            if endpoint_host(url).is_none() {
                return Err(FormError::Config(format!(
                    "{name} webhook URL must be absolute http(s), got {url:?}"
                )));
            }
        }

        if let Some(raw) = &self.invalid_timeout {
            return Err(FormError::Config(format!(
                "WEBHOOK_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"
            )));
        }

        if self.timeout_secs == Some(0) {
            return Err(FormError::Config("webhook timeout must be positive".into()));
        }

        Ok(())
    }
}

/// Split an optional timeout setting into its value or the unparseable raw text
fn parse_timeout(raw: Option<String>) -> (Option<u64>, Option<String>) {
    match raw {
        None => (None, None),
        Some(raw) => match raw.trim().parse() {
            Ok(secs) => (Some(secs), None),
            Err(_) => (None, Some(raw)),
        },
    }
}

/// Host part of an absolute http(s) URL
pub fn endpoint_host(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    (!host.is_empty()).then_some(host)
}
