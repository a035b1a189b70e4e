//! Result Presenter
//!
//! Pure mapping from a controller's status to what the page shows.

use crate::controller::FormController;
use crate::kind::FormKind;
use crate::status::SubmissionStatus;

/// Color of the feedback message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Neutral,
}

impl Tone {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Neutral => "neutral",
        }
    }
}

/// Everything a page needs to draw feedback for one status
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Render {
    pub message: Option<String>,
    pub tone: Tone,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub navigate_to: Option<String>,
}

/// Render a controller's current status
pub fn present<F: FormKind>(form: &FormController<F>) -> Render {
    let copy = F::COPY;

    match form.status() {
        SubmissionStatus::Idle => Render {
            message: None,
            tone: Tone::Neutral,
            submit_label: copy.submit_label,
            submit_disabled: false,
            navigate_to: None,
        },
        SubmissionStatus::Submitting => Render {
            message: copy.busy_message.map(str::to_string),
            tone: Tone::Neutral,
            submit_label: copy.busy_label,
            submit_disabled: true,
            navigate_to: None,
        },
        SubmissionStatus::Success(reply) => Render {
            message: Some(F::success_message(reply).to_string()),
            tone: Tone::Success,
            submit_label: copy.submit_label,
            submit_disabled: false,
            navigate_to: F::navigate_to(reply),
        },
        SubmissionStatus::Error(message) => Render {
            message: Some(message.clone()),
            tone: Tone::Error,
            submit_label: copy.submit_label,
            submit_disabled: false,
            navigate_to: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentForm, AgentReply};
    use crate::contact::ContactForm;
    use crate::error::FormError;

    #[test]
    fn test_idle_contact_form() {
        let render = present(&FormController::<ContactForm>::new());
        assert_eq!(render.message, None);
        assert_eq!(render.submit_label, "Send Message");
        assert!(!render.submit_disabled);
    }

    #[test]
    fn test_submitting_disables_button() {
        let mut form = FormController::<AgentForm>::new();
        form.update_field("url", "example.com");
        form.begin_submit().unwrap();

        let render = present(&form);
        assert!(render.submit_disabled);
        assert_eq!(render.submit_label, "Submitting...");
        assert_eq!(render.message.as_deref(), Some("Submitting..."));
        assert_eq!(render.tone, Tone::Neutral);
    }

    #[test]
    fn test_join_reply_navigates() {
        let mut form = FormController::<AgentForm>::new();
        form.update_field("url", "example.com");
        form.begin_submit().unwrap();
        form.finish(Ok(AgentReply::Join("https://demo.example/session/123".into())));

        let render = present(&form);
        assert_eq!(render.tone, Tone::Success);
        assert_eq!(
            render.navigate_to.as_deref(),
            Some("/demo/try?joinUrl=https%3A%2F%2Fdemo.example%2Fsession%2F123")
        );
    }

    #[test]
    fn test_provisioning_reply_shows_message_only() {
        let mut form = FormController::<AgentForm>::new();
        form.update_field("url", "example.com");
        form.begin_submit().unwrap();
        form.finish(Ok(AgentReply::Provisioning));

        let render = present(&form);
        assert_eq!(render.navigate_to, None);
        assert!(render.message.unwrap().contains("being created"));
    }

    #[test]
    fn test_failure_re_enables_button() {
        let mut form = FormController::<ContactForm>::new();
        for field in ContactForm::REQUIRED {
            form.update_field(*field, "x");
        }
        form.begin_submit().unwrap();
        form.finish(Err(FormError::Status(500)));

        let render = present(&form);
        assert_eq!(render.tone, Tone::Error);
        assert!(!render.submit_disabled);
        assert_eq!(
            render.message.as_deref(),
            Some("Failed to submit form. Please try again.")
        );
    }
}
