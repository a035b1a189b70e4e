//! Agent Creation Form
//!
//! Takes a website address, always sends it as an absolute `https://` URL,
//! and reads an optional `joinUrl` from the webhook's reply.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FormError, Result};
use crate::input::FormInput;
use crate::kind::{FormCopy, FormKind};
use crate::route::demo_try_route;
use crate::webhook::WebhookResponse;

/// Agent webhook body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub url: String,
}

/// What the agent webhook said
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentReply {
    /// A live session is ready
    Join(String),
    /// Accepted; the agent is provisioned asynchronously
    Provisioning,
}

pub struct AgentForm;

/// Strip one leading `http://` or `https://` (any case) and prefix `https://`.
///
/// Idempotent: `normalize_url(&normalize_url(x)) == normalize_url(x)`.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let host_and_path = ["https://", "http://"]
        .iter()
        .find_map(|scheme| {
            trimmed
                .get(..scheme.len())
                .filter(|prefix| prefix.eq_ignore_ascii_case(scheme))
                .map(|_| &trimmed[scheme.len()..])
        })
        .unwrap_or(trimmed);

    format!("https://{host_and_path}")
}

impl FormKind for AgentForm {
    type Request = AgentRequest;
    type Reply = AgentReply;

    const NAME: &'static str = "create-agent";
    const FIELDS: &'static [&'static str] = &["url"];
    const REQUIRED: &'static [&'static str] = &["url"];

    const COPY: FormCopy = FormCopy {
        submit_label: "Create Agent",
        busy_label: "Submitting...",
        busy_message: Some("Submitting..."),
        failure_message: "An error occurred. Please try again.",
        invalid_message: "Please enter a valid website URL.",
        clear_after: Some(Duration::from_secs(5)),
    };

    fn normalize(input: &FormInput) -> Result<AgentRequest> {
        let raw = input.get("url");
        let url = normalize_url(raw);

        if url.len() == "https://".len() || url.chars().any(char::is_whitespace) {
            return Err(FormError::InvalidUrl(raw.to_string()));
        }

        Ok(AgentRequest { url })
    }

    fn interpret(response: &WebhookResponse) -> Result<AgentReply> {
        let data: Value = serde_json::from_str(&response.body)?;

        Ok(data
            .get("joinUrl")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map_or(AgentReply::Provisioning, |url| {
                AgentReply::Join(url.to_string())
            }))
    }

    fn resets_on(reply: &AgentReply) -> bool {
        matches!(reply, AgentReply::Provisioning)
    }

    fn success_message(reply: &AgentReply) -> &'static str {
        match reply {
            AgentReply::Join(_) => "Agent created! Redirecting to live demo...",
            AgentReply::Provisioning => {
                "Success! Your custom agent is being created. We will notify you once it is ready."
            }
        }
    }

    fn navigate_to(reply: &AgentReply) -> Option<String> {
        match reply {
            AgentReply::Join(url) => Some(demo_try_route(url)),
            AgentReply::Provisioning => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_is_idempotent() {
        for raw in ["example.com", "http://example.com", "https://example.com"] {
            assert_eq!(normalize_url(raw), "https://example.com");
        }
        assert_eq!(
            normalize_url(&normalize_url("http://example.com/a")),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_normalize_url_trims_and_ignores_case() {
        assert_eq!(normalize_url("  HTTP://Example.com/path "), "https://Example.com/path");
        assert_eq!(normalize_url("httpx.dev"), "https://httpx.dev");
    }

    #[test]
    fn test_scheme_only_is_invalid() {
        let input: FormInput = [("url", "https://")].into_iter().collect();
        assert!(matches!(
            AgentForm::prepare(&input),
            Err(FormError::InvalidUrl(_))
        ));

        let input: FormInput = [("url", "my site.com")].into_iter().collect();
        assert!(AgentForm::prepare(&input).is_err());
    }

    #[test]
    fn test_interpret_join_url() {
        let reply = AgentForm::interpret(&WebhookResponse::ok(
            r#"{"joinUrl":"https://demo.example/session/123"}"#,
        ))
        .unwrap();

        assert_eq!(reply, AgentReply::Join("https://demo.example/session/123".into()));
        assert_eq!(
            AgentForm::navigate_to(&reply).as_deref(),
            Some("/demo/try?joinUrl=https%3A%2F%2Fdemo.example%2Fsession%2F123")
        );
        assert!(!AgentForm::resets_on(&reply));
    }

    #[test]
    fn test_interpret_without_join_url() {
        for body in ["{}", r#"{"joinUrl":""}"#, r#"{"joinUrl":null}"#, "[]"] {
            let reply = AgentForm::interpret(&WebhookResponse::ok(body)).unwrap();
            assert_eq!(reply, AgentReply::Provisioning, "body: {body}");
            assert!(AgentForm::navigate_to(&reply).is_none());
        }
    }

    #[test]
    fn test_interpret_rejects_non_json_body() {
        for body in ["<html>", "", "  "] {
            let err = AgentForm::interpret(&WebhookResponse::ok(body)).unwrap_err();
            assert!(matches!(err, FormError::Json(_)), "body: {body:?}");
        }
    }
}
