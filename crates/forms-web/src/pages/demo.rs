//! Demo Options Page

use leptos::prelude::*;

#[component]
pub fn DemoPage() -> impl IntoView {
    view! {
        <div class="demo">
            <a href="/" class="back-link">"← Back to Home"</a>
            <h1>"Demo Options"</h1>
            <div class="demo-options">
                <a href="/demo/create-agent" class="demo-option">
                    <h2>"Create Your Own Agent"</h2>
                    <p>"Give us your website and talk to an agent trained on it."</p>
                </a>
            </div>
        </div>
    }
}
