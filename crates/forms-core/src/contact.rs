//! Contact Form
//!
//! Lead capture: five text fields posted as-is. Any 2xx counts as delivered.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::FormInput;
use crate::kind::{FormCopy, FormKind};
use crate::webhook::WebhookResponse;

/// Contact webhook body
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

pub struct ContactForm;

impl FormKind for ContactForm {
    type Request = ContactRequest;
    type Reply = ();

    const NAME: &'static str = "contact";
    const FIELDS: &'static [&'static str] = &["name", "email", "phone", "company", "message"];
    const REQUIRED: &'static [&'static str] = &["name", "email", "message"];

    const COPY: FormCopy = FormCopy {
        submit_label: "Send Message",
        busy_label: "Sending...",
        busy_message: None,
        failure_message: "Failed to submit form. Please try again.",
        invalid_message: "Please fill in all required fields.",
        clear_after: None,
    };

    fn normalize(input: &FormInput) -> Result<ContactRequest> {
        Ok(ContactRequest {
            name: input.get("name").to_string(),
            email: input.get("email").to_string(),
            phone: input.get("phone").to_string(),
            company: input.get("company").to_string(),
            message: input.get("message").to_string(),
        })
    }

    fn interpret(_response: &WebhookResponse) -> Result<()> {
        Ok(())
    }

    fn resets_on(_reply: &()) -> bool {
        true
    }

    fn success_message(_reply: &()) -> &'static str {
        "Thank you! Your message has been sent successfully. We'll get back to you soon."
    }
}
