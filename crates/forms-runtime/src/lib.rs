//! # forms-runtime
//!
//! Transport for the form pages.
//!
//! - **`HttpWebhook`** (feature `http`, default): reqwest implementation of
//!   [`forms_core::Webhook`], usable from the relay server and from the
//!   browser bundle alike.
//! - **`WebhookConfig`**: the two endpoint URLs, injected from the
//!   environment instead of hardcoded in page code.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forms_core::{ContactForm, FormController};
//! use forms_runtime::WebhookConfig;
//!
//! let config = WebhookConfig::from_env();
//! config.validate()?;
//!
//! let mut form = FormController::<ContactForm>::new();
//! form.update_field("name", "Ada");
//! form.submit(&config.contact_webhook()?).await?;
//! ```

pub mod config;
#[cfg(feature = "http")]
pub mod http;

pub use config::WebhookConfig;
#[cfg(feature = "http")]
pub use http::HttpWebhook;

// Re-export core types for convenience
pub use forms_core::{FormError, Result, Webhook, WebhookResponse};
