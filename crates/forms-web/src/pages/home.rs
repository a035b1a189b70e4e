//! Home Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"Billionets A.I"</h1>
                <p class="tagline">"Voice agents that answer your customers, day and night"</p>
                <div class="cta">
                    <a href="/demo" class="btn btn-primary">"Try a Demo"</a>
                    <a href="/contact" class="btn">"Contact Sales"</a>
                </div>
            </header>

            <section class="features">
                <div class="feature">
                    <h3>"🎙️ Natural"</h3>
                    <p>"Real-time voice conversations that sound human."</p>
                </div>
                <div class="feature">
                    <h3>"🌐 Trained on your site"</h3>
                    <p>"Point us at your website and get an agent that knows your business."</p>
                </div>
                <div class="feature">
                    <h3>"⚡ Live in minutes"</h3>
                    <p>"No scripts to write. Create an agent and talk to it right away."</p>
                </div>
            </section>
        </div>
    }
}
