//! Form Kinds
//!
//! What differs between the two forms: fields, required fields, request
//! shape, reply interpretation, and the copy shown to the user.

use std::fmt::Debug;
use std::time::Duration;

use serde::Serialize;

use crate::error::{FormError, Result};
use crate::input::FormInput;
use crate::webhook::WebhookResponse;

/// Fixed user-facing text for one form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormCopy {
    /// Submit button while idle
    pub submit_label: &'static str,
    /// Submit button while a request is in flight
    pub busy_label: &'static str,
    /// Neutral message shown while in flight, if any
    pub busy_message: Option<&'static str>,
    /// Shown for any transport or status failure
    pub failure_message: &'static str,
    /// Shown when local validation rejects the input
    pub invalid_message: &'static str,
    /// Transient messages clear after this delay
    pub clear_after: Option<Duration>,
}

/// One form's behavior
pub trait FormKind: Send + Sync + 'static {
    /// Normalized request body sent to the webhook
    type Request: Serialize + Clone + Debug + Send + Sync;

    /// Interpreted webhook reply
    type Reply: Clone + Debug + PartialEq + Send + Sync;

    /// Name used in logs
    const NAME: &'static str;

    /// Every field the form renders
    const FIELDS: &'static [&'static str];

    /// Fields that must be non-blank before any network call
    const REQUIRED: &'static [&'static str];

    const COPY: FormCopy;

    /// Build the request from input that passed the required-field check
    fn normalize(input: &FormInput) -> Result<Self::Request>;

    /// Read a 2xx response
    fn interpret(response: &WebhookResponse) -> Result<Self::Reply>;

    /// Whether the input resets after this reply
    fn resets_on(reply: &Self::Reply) -> bool;

    /// Message shown for a successful reply
    fn success_message(reply: &Self::Reply) -> &'static str;

    /// Route to navigate to after this reply
    fn navigate_to(_reply: &Self::Reply) -> Option<String> {
        None
    }

    /// Required-field check followed by normalization
    fn prepare(input: &FormInput) -> Result<Self::Request> {
        if let Some(missing) = Self::REQUIRED.iter().find(|name| input.is_blank(name)) {
            return Err(FormError::MissingField((*missing).to_string()));
        }
        Self::normalize(input)
    }
}
