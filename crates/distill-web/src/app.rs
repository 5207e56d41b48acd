//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::Footer;
use crate::pages::{DemoPage, HomePage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/demo") view=DemoPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
