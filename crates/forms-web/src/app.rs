//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{ContactPage, CreateAgentPage, DemoPage, HomePage, TryDemoPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/demo") view=DemoPage />
                    <Route path=path!("/demo/create-agent") view=CreateAgentPage />
                    <Route path=path!("/demo/try") view=TryDemoPage />
                </Routes>
            </main>
        </Router>
    }
}
