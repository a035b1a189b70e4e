//! Submission Adapter
//!
//! Turns a normalized request into exactly one webhook call and the
//! webhook's answer into a form reply.

use serde::Serialize;
use serde_json::Value;

use crate::error::{FormError, Result};
use crate::kind::FormKind;
use crate::webhook::{Webhook, WebhookResponse};

/// Forward a JSON payload once; any non-2xx status is a failure.
pub async fn forward(webhook: &dyn Webhook, payload: &Value) -> Result<WebhookResponse> {
    let response = webhook.deliver(payload).await?;

    if !response.is_success() {
        return Err(FormError::Status(response.status));
    }

    Ok(response)
}

/// Send a form's normalized request and interpret the reply.
pub async fn deliver<F: FormKind>(webhook: &dyn Webhook, request: &F::Request) -> Result<F::Reply> {
    let payload = to_payload(request)?;

    tracing::debug!(form = F::NAME, endpoint = webhook.endpoint(), "posting submission");

    let response = forward(webhook, &payload).await?;
    F::interpret(&response)
}

fn to_payload<T: Serialize>(request: &T) -> Result<Value> {
    Ok(serde_json::to_value(request)?)
}
