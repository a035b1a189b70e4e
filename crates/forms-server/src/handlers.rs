//! HTTP Handlers
//!
//! The relays re-run the same validation the browser runs, then forward the
//! normalized request exactly once and mirror a successful upstream reply.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use forms_core::{adapter, AgentForm, ContactForm, FormError, FormInput, FormKind, Webhook};
use forms_runtime::config::endpoint_host;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub contact_webhook: Option<String>,
    pub agent_webhook: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint. Reports webhook hosts only, never full URLs.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        contact_webhook: endpoint_host(state.contact.endpoint()).map(str::to_string),
        agent_webhook: endpoint_host(state.agent.endpoint()).map(str::to_string),
    })
}

/// Contact form relay
pub async fn contact_relay(
    State(state): State<AppState>,
    Json(input): Json<FormInput>,
) -> Result<Response, ApiError> {
    relay::<ContactForm>(state.contact.as_ref(), &input).await
}

/// Agent-creation relay
pub async fn agent_relay(
    State(state): State<AppState>,
    Json(input): Json<FormInput>,
) -> Result<Response, ApiError> {
    relay::<AgentForm>(state.agent.as_ref(), &input).await
}

async fn relay<F: FormKind>(webhook: &dyn Webhook, input: &FormInput) -> Result<Response, ApiError> {
    let request = F::prepare(input).map_err(|e| {
        tracing::info!(form = F::NAME, "Rejected submission: {}", e);
        error_response::<F>(StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", &e)
    })?;

    let payload = serde_json::to_value(&request)
        .map_err(|e| error_response::<F>(StatusCode::INTERNAL_SERVER_ERROR, "ENCODE_ERROR", &e.into()))?;

    let upstream = adapter::forward(webhook, &payload).await.map_err(|e| {
        tracing::error!(form = F::NAME, endpoint = webhook.endpoint(), "Webhook relay error: {}", e);
        error_response::<F>(StatusCode::BAD_GATEWAY, "WEBHOOK_ERROR", &e)
    })?;

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::OK);
    let content_type = if serde_json::from_str::<serde_json::Value>(&upstream.body).is_ok() {
        "application/json"
    } else {
        "text/plain; charset=utf-8"
    };

    Ok((status, [(header::CONTENT_TYPE, content_type)], upstream.body).into_response())
}

fn error_response<F: FormKind>(status: StatusCode, code: &str, err: &FormError) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: err.user_message(&F::COPY).into(),
            code: code.into(),
        }),
    )
}
