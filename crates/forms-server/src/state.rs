//! Application State

use std::sync::Arc;

use forms_core::Webhook;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Contact form webhook
    pub contact: Arc<dyn Webhook>,

    /// Agent-creation webhook
    pub agent: Arc<dyn Webhook>,
}
