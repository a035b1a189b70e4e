//! Create Agent Page
//!
//! Webhook feedback clears itself after a few seconds. The pending timer is
//! cancelled on the next submit and when the page unmounts.

use forms_core::{present, AgentForm, FormController};
use leptos::{
    ev::SubmitEvent,
    leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle},
    prelude::*,
};
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{FeedbackMessage, SubmitButton};

type AgentController = FormController<AgentForm>;

#[component]
pub fn CreateAgentPage() -> impl IntoView {
    let form = RwSignal::new(AgentController::new());
    let render = Memo::new(move |_| form.with(present));
    let clear_timer = StoredValue::new(None::<TimeoutHandle>);
    let navigate = use_navigate();

    let cancel_clear = move || {
        if let Some(handle) = clear_timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    let schedule_clear = move || {
        cancel_clear();

        let Some(ticket) = form.try_with_untracked(AgentController::schedule_clear).flatten() else {
            return;
        };

        match set_timeout_with_handle(
            move || {
                form.try_update(|f| f.clear_message(ticket));
            },
            ticket.delay(),
        ) {
            Ok(handle) => clear_timer.set_value(Some(handle)),
            Err(e) => tracing::warn!("Could not schedule message clear: {:?}", e),
        }
    };

    on_cleanup(move || {
        cancel_clear();
        form.try_update(AgentController::teardown);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        cancel_clear();

        match form.try_update(AgentController::begin_submit) {
            Some(Ok(request)) => {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let outcome = api::create_agent(request).await;
                    form.try_update(|f| f.finish(outcome));

                    let route = form
                        .try_with_untracked(|f| present(f).navigate_to)
                        .flatten();
                    if let Some(route) = route {
                        navigate(&route, Default::default());
                    }

                    schedule_clear();
                });
            }
            // Busy, or rejected locally: the validation message stays put.
            Some(Err(_)) | None => {}
        }
    };

    view! {
        <div class="create-agent">
            <a href="/demo" class="back-link">"← Back to Demo Options"</a>
            <div class="content">
                <h1>"Create Your Own Agent"</h1>
                <p class="subtitle">
                    "Provide your website URL, and our AI will learn its content to build a knowledgeable agent for you."
                </p>

                <form class="form" on:submit=on_submit novalidate>
                    <div class="input-wrapper">
                        <span class="prefix">"https://"</span>
                        <input
                            type="text"
                            name="url"
                            placeholder="your-website.com"
                            prop:value=move || form.with(|f| f.input().get("url").to_string())
                            on:input=move |ev| {
                                form.update(|f| f.update_field("url", event_target_value(&ev)));
                            }
                        />
                    </div>
                    <SubmitButton render=render />
                </form>

                <FeedbackMessage render=render />
            </div>
        </div>
    }
}
