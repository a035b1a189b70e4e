//! Form State Controller
//!
//! Owns one form's input and submission status. A submit is split into
//! `begin_submit` (synchronous validation, enter `Submitting`) and `finish`
//! (apply the adapter's outcome) so that UI hosts can hold the controller in
//! reactive state across the network await. `submit` runs both halves for
//! callers that own the controller outright.
//!
//! State machine:
//!
//! ```text
//! Idle ──submit(valid)──▶ Submitting ──ok───▶ Success ──edit──▶ Idle
//!   │                          │
//!   └──submit(invalid)──▶ Error ◀──fail──┘
//!                          │
//!                          └──edit──▶ Idle, resubmit──▶ Submitting
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use crate::adapter;
use crate::error::{FormError, Result};
use crate::input::FormInput;
use crate::kind::FormKind;
use crate::status::SubmissionStatus;
use crate::webhook::Webhook;

/// Permission to clear the current feedback message once a delay elapses.
///
/// Issued only for webhook outcomes; a local validation message stays until
/// the next edit or submit. Invalidated by the next submit and by teardown;
/// clearing with a stale ticket does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearTicket {
    generation: u64,
    delay: Duration,
}

impl ClearTicket {
    pub const fn delay(self) -> Duration {
        self.delay
    }
}

/// Field values plus submission status for one form instance
pub struct FormController<F: FormKind> {
    input: FormInput,
    status: SubmissionStatus<F::Reply>,
    generation: u64,
    rejected: bool,
    torn_down: bool,
    kind: PhantomData<fn() -> F>,
}

impl<F: FormKind> FormController<F> {
    pub fn new() -> Self {
        Self {
            input: FormInput::with_fields(F::FIELDS),
            status: SubmissionStatus::Idle,
            generation: 0,
            rejected: false,
            torn_down: false,
            kind: PhantomData,
        }
    }

    pub const fn input(&self) -> &FormInput {
        &self.input
    }

    pub const fn status(&self) -> &SubmissionStatus<F::Reply> {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    /// Store a field value. Editing after a result returns the form to `Idle`.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        self.input.set(name, value);

        if matches!(
            self.status,
            SubmissionStatus::Success(_) | SubmissionStatus::Error(_)
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Validate and snapshot the input, entering `Submitting`.
    ///
    /// Returns `FormError::Busy` without touching state while a request is
    /// in flight. A validation failure moves to `Error` immediately and
    /// produces no request.
    pub fn begin_submit(&mut self) -> Result<F::Request> {
        if self.status.is_submitting() {
            tracing::debug!(form = F::NAME, "submit ignored, request in flight");
            return Err(FormError::Busy);
        }

        self.generation = self.generation.wrapping_add(1);
        self.rejected = false;

        match F::prepare(&self.input) {
            Ok(request) => {
                self.status = SubmissionStatus::Submitting;
                Ok(request)
            }
            Err(err) => {
                tracing::debug!(form = F::NAME, error = %err, "submission rejected");
                self.rejected = true;
                self.status = SubmissionStatus::Error(err.user_message(&F::COPY).to_string());
                Err(err)
            }
        }
    }

    /// Apply the adapter's outcome for the request returned by `begin_submit`.
    ///
    /// Ignored after teardown or when no request is in flight.
    pub fn finish(&mut self, outcome: Result<F::Reply>) {
        match outcome {
            Ok(reply) => self.succeed(reply),
            Err(err) => self.fail(&err),
        }
    }

    /// Validate, send once, and record the outcome.
    pub async fn submit(&mut self, webhook: &dyn Webhook) -> Result<F::Reply> {
        let request = self.begin_submit()?;

        match adapter::deliver::<F>(webhook, &request).await {
            Ok(reply) => {
                self.succeed(reply.clone());
                Ok(reply)
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Ticket for clearing the current message, if this form auto-clears
    pub fn schedule_clear(&self) -> Option<ClearTicket> {
        if self.torn_down || self.rejected {
            return None;
        }

        F::COPY.clear_after.map(|delay| ClearTicket {
            generation: self.generation,
            delay,
        })
    }

    /// Drop the feedback message if `ticket` is still current.
    ///
    /// Returns whether anything changed.
    pub fn clear_message(&mut self, ticket: ClearTicket) -> bool {
        if self.torn_down || ticket.generation != self.generation {
            return false;
        }

        match self.status {
            SubmissionStatus::Success(_) | SubmissionStatus::Error(_) => {
                self.status = SubmissionStatus::Idle;
                true
            }
            SubmissionStatus::Idle | SubmissionStatus::Submitting => false,
        }
    }

    /// The view is gone: invalidate outstanding tickets and ignore late results.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.generation = self.generation.wrapping_add(1);
    }

    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn accepts_outcome(&self) -> bool {
        if self.torn_down || !self.status.is_submitting() {
            tracing::debug!(
                form = F::NAME,
                status = self.status.as_str(),
                "late submission outcome dropped"
            );
            return false;
        }
        true
    }

    fn succeed(&mut self, reply: F::Reply) {
        if !self.accepts_outcome() {
            return;
        }

        if F::resets_on(&reply) {
            self.input.clear();
        }

        tracing::info!(form = F::NAME, "submission accepted");
        self.status = SubmissionStatus::Success(reply);
    }

    fn fail(&mut self, err: &FormError) {
        if !self.accepts_outcome() {
            return;
        }

        tracing::warn!(form = F::NAME, error = %err, "webhook submission failed");
        self.status = SubmissionStatus::Error(err.user_message(&F::COPY).to_string());
    }
}

impl<F: FormKind> Default for FormController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormKind> fmt::Debug for FormController<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("form", &F::NAME)
            .field("input", &self.input)
            .field("status", &self.status)
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentForm, AgentReply};
    use crate::contact::ContactForm;
    use crate::mock::MockWebhook;
    use crate::webhook::WebhookResponse;

    fn contact_form() -> FormController<ContactForm> {
        let mut form = FormController::new();
        form.update_field("name", "Ada");
        form.update_field("email", "ada@example.com");
        form.update_field("phone", "+971 500 000 000");
        form.update_field("message", "Hello");
        form
    }

    fn agent_form(url: &str) -> FormController<AgentForm> {
        let mut form = FormController::new();
        form.update_field("url", url);
        form
    }

    #[tokio::test]
    async fn test_contact_success_clears_input() {
        let webhook = MockWebhook::new();
        let mut form = contact_form();

        form.submit(&webhook).await.unwrap();

        assert_eq!(webhook.calls(), 1);
        assert!(form.status().is_success());
        assert!(form.input().is_empty());
    }

    #[tokio::test]
    async fn test_missing_required_field_makes_no_call() {
        let webhook = MockWebhook::new();
        let mut form = contact_form();
        form.update_field("email", "");

        let err = form.submit(&webhook).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(webhook.calls(), 0);
        assert_eq!(
            form.status().error_message(),
            Some("Please fill in all required fields.")
        );
        assert_eq!(form.input().get("name"), "Ada");
    }

    #[tokio::test]
    async fn test_failure_preserves_input() {
        let webhook = MockWebhook::new().respond(WebhookResponse::new(500, "boom"));
        let mut form = contact_form();
        let before = form.input().clone();

        assert!(form.submit(&webhook).await.is_err());

        assert_eq!(form.input(), &before);
        assert_eq!(
            form.status().error_message(),
            Some("Failed to submit form. Please try again.")
        );

        // Resubmitting from Error goes straight back out.
        form.submit(&webhook).await.unwrap();
        assert_eq!(webhook.calls(), 2);
    }

    #[tokio::test]
    async fn test_transport_error_uses_fixed_message() {
        let webhook = MockWebhook::new().fail("dns failure");
        let mut form = agent_form("example.com");

        assert!(form.submit(&webhook).await.is_err());
        assert_eq!(
            form.status().error_message(),
            Some("An error occurred. Please try again.")
        );
        assert_eq!(form.input().get("url"), "example.com");
    }

    #[test]
    fn test_second_begin_while_submitting_is_busy() {
        let mut form = contact_form();

        assert!(form.begin_submit().is_ok());
        assert!(matches!(form.begin_submit(), Err(FormError::Busy)));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_begin_submit_clears_previous_error() {
        let mut form = contact_form();
        form.begin_submit().unwrap();
        form.finish(Err(FormError::Status(502)));
        assert!(form.status().error_message().is_some());

        form.begin_submit().unwrap();
        assert_eq!(form.status(), &SubmissionStatus::Submitting);
    }

    #[tokio::test]
    async fn test_agent_sends_normalized_url() {
        let webhook = MockWebhook::new();
        let mut form = agent_form("http://acme.io/about");

        let reply = form.submit(&webhook).await.unwrap();

        assert_eq!(reply, AgentReply::Provisioning);
        assert_eq!(
            webhook.payloads(),
            vec![serde_json::json!({"url": "https://acme.io/about"})]
        );
        assert_eq!(form.input().get("url"), "");
    }

    #[tokio::test]
    async fn test_agent_join_keeps_url() {
        let webhook = MockWebhook::new().respond(WebhookResponse::ok(
            r#"{"joinUrl":"https://demo.example/session/123"}"#,
        ));
        let mut form = agent_form("acme.io");

        form.submit(&webhook).await.unwrap();

        assert_eq!(form.input().get("url"), "acme.io");
        assert!(form.status().is_success());
    }

    #[tokio::test]
    async fn test_agent_empty_reply_is_failure() {
        let webhook = MockWebhook::new().respond(WebhookResponse::ok(""));
        let mut form = agent_form("acme.io");

        let err = form.submit(&webhook).await.unwrap_err();

        assert!(matches!(err, FormError::Json(_)));
        assert_eq!(
            form.status().error_message(),
            Some("An error occurred. Please try again.")
        );
        assert_eq!(form.input().get("url"), "acme.io");
    }

    #[test]
    fn test_edit_after_success_returns_to_idle() {
        let mut form = contact_form();
        form.begin_submit().unwrap();
        form.finish(Ok(()));
        assert!(form.status().is_success());

        form.update_field("name", "Grace");
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_clear_ticket_clears_message() {
        let mut form = agent_form("acme.io");
        form.begin_submit().unwrap();
        form.finish(Ok(AgentReply::Provisioning));

        let ticket = form.schedule_clear().unwrap();
        assert_eq!(ticket.delay(), Duration::from_secs(5));
        assert!(form.clear_message(ticket));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_clear_ticket_is_cancelled_by_next_submit() {
        let mut form = agent_form("acme.io");
        form.begin_submit().unwrap();
        form.finish(Err(FormError::Status(500)));
        let stale = form.schedule_clear().unwrap();

        form.begin_submit().unwrap();
        form.finish(Err(FormError::Status(500)));

        assert!(!form.clear_message(stale));
        assert!(form.status().error_message().is_some());
    }

    #[test]
    fn test_teardown_cancels_clear_and_late_results() {
        let mut form = agent_form("acme.io");
        form.begin_submit().unwrap();
        let ticket = form.schedule_clear().unwrap();

        form.teardown();
        form.finish(Ok(AgentReply::Provisioning));

        assert!(!form.clear_message(ticket));
        assert!(form.schedule_clear().is_none());
        assert_eq!(form.status(), &SubmissionStatus::Submitting);
        assert_eq!(form.input().get("url"), "acme.io");
    }

    #[test]
    fn test_validation_message_is_not_auto_cleared() {
        let mut form = agent_form("   ");

        assert!(form.begin_submit().unwrap_err().is_validation());
        assert!(form.schedule_clear().is_none());
        assert_eq!(
            form.status().error_message(),
            Some("Please enter a valid website URL.")
        );

        // A later webhook outcome is clearable again.
        form.update_field("url", "acme.io");
        form.begin_submit().unwrap();
        form.finish(Err(FormError::Status(500)));
        assert!(form.schedule_clear().is_some());
    }

    #[test]
    fn test_contact_form_never_schedules_clear() {
        assert!(contact_form().schedule_clear().is_none());
    }
}
