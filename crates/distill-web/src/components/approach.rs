//! The Information-Theoretic Approach

use leptos::prelude::*;

use distill_report::data::{ARCHITECTURE, CODE_SAMPLE, INNOVATIONS};

#[component]
pub fn ApproachSection() -> impl IntoView {
    let (show_code, set_show_code) = signal(false);
    let last = ARCHITECTURE.len().saturating_sub(1);

    view! {
        <section class="approach">
            <div class="approach-intro">
                <h2>"The Information-Theoretic Approach"</h2>
                <p>
                    "While competitors like bear-1 focus on "
                    <em>"importance"</em>
                    " weighting (identifying which tokens \"seem\" useful to the model), Distill focuses on "
                    <strong>"information density"</strong>
                    ". We calculate the conditional entropy of every token given its context window, identifying redundant signals that carry zero net-new information."
                </p>
            </div>

            <h3 class="eyebrow">"Inference Architecture"</h3>
            <div class="arch-flow">
                {ARCHITECTURE
                    .iter()
                    .enumerate()
                    .map(|(i, stage)| view! {
                        <div class={stage.kind.css_class()}>
                            <div class="stage-title">{stage.title}</div>
                            <div class="stage-sub">{stage.sub}</div>
                        </div>
                        {(i < last).then(|| view! { <span class="arch-arrow">"→"</span> })}
                    })
                    .collect_view()}
            </div>

            <div class="grid-3">
                {INNOVATIONS
                    .iter()
                    .map(|card| view! {
                        <div class="innovation">
                            <h4>{card.title}</h4>
                            <p>{card.body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <button class="btn btn-wide" on:click=move |_| set_show_code.update(|s| *s = !*s)>
                {move || {
                    if show_code.get() {
                        "Close Technical Implementation"
                    } else {
                        "View Code Implementation (PyTorch)"
                    }
                }}
            </button>

            <Show when=move || show_code.get()>
                <pre class="code">
                    <code>{CODE_SAMPLE}</code>
                </pre>
            </Show>
        </section>
    }
}
