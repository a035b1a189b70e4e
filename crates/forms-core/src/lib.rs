//! # forms-core
//!
//! The submission pattern shared by the contact form and the agent-creation
//! form: field storage, a tagged submission status, one outbound webhook call
//! per submit, and a pure presenter over the result.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    FormController<F>                          │
//! │  ┌─────────────┐  ┌──────────────────┐  ┌─────────────────┐  │
//! │  │  FormInput  │──│ FormKind (F)     │──│ Webhook         │  │
//! │  │  + Status   │  │ validate/normal. │  │ (Strategy)      │  │
//! │  └─────────────┘  └──────────────────┘  └─────────────────┘  │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                ▼
//!                         present() → Render
//! ```
//!
//! The `Webhook` trait keeps the transport out of this crate: the browser and
//! the relay server plug in `forms_runtime::HttpWebhook`, tests plug in
//! [`mock::MockWebhook`].

pub mod adapter;
pub mod agent;
pub mod contact;
pub mod controller;
pub mod error;
pub mod input;
pub mod kind;
pub mod mock;
pub mod presenter;
pub mod route;
pub mod status;
pub mod webhook;

pub use adapter::deliver;
pub use agent::{AgentForm, AgentReply, AgentRequest, normalize_url};
pub use contact::{ContactForm, ContactRequest};
pub use controller::{ClearTicket, FormController};
pub use error::{FormError, Result};
pub use input::FormInput;
pub use kind::{FormCopy, FormKind};
pub use presenter::{Render, Tone, present};
pub use route::demo_try_route;
pub use status::SubmissionStatus;
pub use webhook::{Webhook, WebhookResponse};
