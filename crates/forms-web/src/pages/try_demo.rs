//! Try Demo Page
//!
//! Landing spot after an agent is created: links into the live session.

use forms_runtime::config::endpoint_host;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn TryDemoPage() -> impl IntoView {
    let query = use_query_map();

    // Only http(s) session links are followed.
    let join_url = move || {
        query
            .with(|q| q.get("joinUrl"))
            .filter(|url| endpoint_host(url).is_some())
    };

    view! {
        <div class="try-demo">
            <a href="/demo" class="back-link">"← Back to Demo Options"</a>
            {move || match join_url() {
                Some(url) => view! {
                    <div class="content">
                        <h1>"Your agent is live"</h1>
                        <p class="subtitle">"Join the session to start talking to it."</p>
                        <a href=url class="btn btn-primary" target="_blank" rel="noopener">
                            "Join Live Session"
                        </a>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="content">
                        <p class="form-message form-message-error">
                            "No demo session was provided."
                        </p>
                        <a href="/demo/create-agent" class="btn">"Create an Agent"</a>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
