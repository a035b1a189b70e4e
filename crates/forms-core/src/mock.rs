//! Mock Webhook
//!
//! In-memory webhook with scripted responses. Records every payload it
//! receives so callers can assert on call counts and request bodies.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{FormError, Result};
use crate::webhook::{Webhook, WebhookResponse};

enum Scripted {
    Respond(WebhookResponse),
    Fail(String),
}

/// Scripted webhook for tests and local demos
pub struct MockWebhook {
    endpoint: String,
    script: Mutex<VecDeque<Scripted>>,
    payloads: Mutex<Vec<Value>>,
}

impl MockWebhook {
    /// Answers `200 {}` once the script runs out
    pub fn new() -> Self {
        Self {
            endpoint: "mock://webhook".into(),
            script: Mutex::new(VecDeque::new()),
            payloads: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Queue a response
    #[must_use]
    pub fn respond(self, response: WebhookResponse) -> Self {
        self.push(Scripted::Respond(response));
        self
    }

    /// Queue a transport failure
    #[must_use]
    pub fn fail(self, reason: impl Into<String>) -> Self {
        self.push(Scripted::Fail(reason.into()));
        self
    }

    /// Number of deliveries so far
    pub fn calls(&self) -> usize {
        self.payloads.lock().map_or(0, |p| p.len())
    }

    /// Every payload received, in order
    pub fn payloads(&self) -> Vec<Value> {
        self.payloads.lock().map(|p| p.clone()).unwrap_or_default()
    }

    fn push(&self, entry: Scripted) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(entry);
        }
    }
}

impl Default for MockWebhook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Webhook for MockWebhook {
    async fn deliver(&self, payload: &Value) -> Result<WebhookResponse> {
        if let Ok(mut payloads) = self.payloads.lock() {
            payloads.push(payload.clone());
        }

        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());

        match next {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(reason)) => Err(FormError::Transport(reason)),
            None => Ok(WebhookResponse::ok("{}")),
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
