//! UI Components

use forms_core::Render;
use leptos::prelude::*;

/// Inline feedback under a form
#[component]
pub fn FeedbackMessage(#[prop(into)] render: Signal<Render>) -> impl IntoView {
    move || {
        let render = render.get();
        render.message.map(|message| {
            let class = format!("form-message form-message-{}", render.tone.as_str());
            view! { <p class=class role="status">{message}</p> }
        })
    }
}

/// Submit button that disables itself while a request is in flight
#[component]
pub fn SubmitButton(#[prop(into)] render: Signal<Render>) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn btn-primary"
            disabled=move || render.get().submit_disabled
        >
            {move || render.get().submit_label}
        </button>
    }
}
