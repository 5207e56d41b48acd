//! Hero Banner

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let try_demo = move |_| {
        if let Some(section) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("demo-section"))
        {
            section.scroll_into_view();
        }
    };

    view! {
        <header class="hero">
            <div class="hero-badge">"✨ Surpassed bear-1 in LongBench v2 Performance"</div>
            <h1>"Distill"</h1>
            <p class="tagline">
                "Information-Theoretic LLM Input Compression that removes low-entropy noise while preserving deep semantic intent."
            </p>

            <div class="hero-stats">
                <div class="stat">
                    <span class="stat-value">"68%"</span>
                    <span class="stat-label">"Token Reduction"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">"1.2x"</span>
                    <span class="stat-label">"Faster than bear-1"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">"7B"</span>
                    <span class="stat-label">"Parameters"</span>
                </div>
            </div>

            <div class="cta">
                <button class="btn btn-primary" on:click=try_demo>"Try the Demo"</button>
                <a href="/demo" class="btn">"Open Full Demo"</a>
            </div>
        </header>
    }
}
