//! API Client
//!
//! The browser posts to the server's same-origin relays; the real webhook
//! URLs are server configuration.

use forms_core::{AgentForm, AgentReply, AgentRequest, ContactForm, ContactRequest, Result};
use forms_runtime::{HttpWebhook, WebhookConfig};

fn endpoints() -> WebhookConfig {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());

    WebhookConfig::same_origin(&origin)
}

/// Deliver a contact submission
pub async fn send_contact(request: ContactRequest) -> Result<()> {
    let webhook = HttpWebhook::new(endpoints().contact_url);
    forms_core::deliver::<ContactForm>(&webhook, &request).await
}

/// Ask for a custom agent built from a website
pub async fn create_agent(request: AgentRequest) -> Result<AgentReply> {
    let webhook = HttpWebhook::new(endpoints().agent_url);
    forms_core::deliver::<AgentForm>(&webhook, &request).await
}
