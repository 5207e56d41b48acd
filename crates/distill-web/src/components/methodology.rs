//! Evaluation Methodology

use leptos::prelude::*;

use distill_report::{MethodCard, data};

#[component]
pub fn MethodologySection() -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    view! {
        <section id="methodology" class="methodology">
            <div class="section-title">
                <h2>"Evaluation Methodology"</h2>
                <span class="badge">"Rigorous"</span>
            </div>

            <div class="grid-3">
                {data::METHODOLOGY
                    .iter()
                    .map(|card| view! { <MethodCardView card=card.clone() /> })
                    .collect_view()}
            </div>

            <div class="callout">
                <h4>"Mirroring TTC Benchmark Standards"</h4>
                <p>
                    "We have deliberately adopted the precise methodology outlined in The Token Company's Benchmark Report to ensure our head-to-head comparison with bear-1 is valid and directly comparable. All results presented are reproducible using the open-source Distill evaluation harness."
                </p>
            </div>

            <button class="btn-link" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                {move || {
                    if expanded.get() {
                        "Hide Complete Specification"
                    } else {
                        "View Complete Evaluation Specification"
                    }
                }}
            </button>

            <Show when=move || expanded.get()>
                <div class="panel grid-2">
                    <SpecList title="Hardware & Software" entries=data::HARDWARE />
                    <SpecList title="Metric Definitions" entries=data::METRIC_DEFINITIONS />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn MethodCardView(card: MethodCard) -> impl IntoView {
    view! {
        <div class="panel method-card">
            <span class="card-badge">{card.badge}</span>
            <h3>{card.title}</h3>
            <ul>
                {card.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn SpecList(title: &'static str, entries: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <div>
            <h5>{title}</h5>
            <ul class="spec-list">
                {entries
                    .iter()
                    .map(|(name, value)| view! {
                        <li>
                            <span>{*name}</span>
                            <span class="mono">{*value}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
