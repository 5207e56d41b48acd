//! Limitations, Future Work and Footer

use leptos::prelude::*;

use distill_report::data::{FUTURE_WORK, LIMITATIONS};

#[component]
pub fn LimitationsSection() -> impl IntoView {
    view! {
        <section class="limitations">
            <div class="column">
                <h3>"Current Limitations"</h3>
                <ul>
                    {LIMITATIONS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            </div>
            <div class="column">
                <h3>"Future Work"</h3>
                <ul>
                    {FUTURE_WORK.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"Distill · Information-theoretic prompt compression"</span>
            <span class="muted">"Benchmarks: LongBench v2 · Pricing: GPT-4o-mini sample rates"</span>
        </footer>
    }
}
