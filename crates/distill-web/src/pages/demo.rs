//! Live Compression Demo

use leptos::prelude::*;
use leptos::task::spawn_local;

use distill_core::{
    Aggressiveness, DemoConfig, DemoMode, DemoState, Settle, Ticket, heuristic,
};

use crate::api;

/// Demo on its own page
#[component]
pub fn DemoPage() -> impl IntoView {
    view! {
        <div class="demo-page">
            <DemoSection />
            <a href="/" class="btn">"Back to results"</a>
        </div>
    }
}

/// Text in, compressed text out, re-run whenever the input settles
#[component]
pub fn DemoSection() -> impl IntoView {
    let config = StoredValue::new(api::demo_config());
    let state = RwSignal::new(DemoState::new());
    let timer = StoredValue::new(None::<TimeoutHandle>);

    let schedule = move |ticket: Ticket| {
        if let Some(pending) = timer.try_get_value().flatten() {
            pending.clear();
        }
        let delay = config.with_value(|c| c.debounce);
        let handle = set_timeout_with_handle(move || run(state, config, ticket), delay).ok();
        timer.set_value(handle);
    };

    schedule(state.with_untracked(DemoState::current_ticket));

    on_cleanup(move || {
        if let Some(pending) = timer.try_get_value().flatten() {
            pending.clear();
        }
    });

    let on_text = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        if let Some(ticket) = state.try_update(|s| s.edit_input(text)) {
            schedule(ticket);
        }
    };

    let on_slide = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev).parse::<f64>().unwrap_or_default();
        let aggressiveness = Aggressiveness::from_value(value);
        if let Some(ticket) = state.try_update(|s| s.set_aggressiveness(aggressiveness)) {
            schedule(ticket);
        }
    };

    let loading = move || state.with(DemoState::is_loading);
    let track = move || {
        let filled = state.with(|s| s.aggressiveness.track_fraction()) * 100.0;
        format!(
            "linear-gradient(to right, #3B82F6 0%, #3B82F6 {filled}%, #27272a {filled}%, #27272a 100%)"
        )
    };

    view! {
        <section id="demo-section" class="demo">
            <div class="demo-header">
                <h2>
                    "Try Distill Compression"
                    <Show when=loading>
                        <span class="spinner"></span>
                    </Show>
                </h2>
                <p>"See how Distill compresses your text while preserving semantic meaning"</p>
            </div>

            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|error| view! { <div class="demo-error">{error}</div> })
            }}

            <div class="demo-panes">
                <div class="pane">
                    <div class="pane-header">
                        <label>"Input"</label>
                        <span class="tokens">
                            {move || state.with(DemoState::display_input_tokens)}
                            " tokens"
                        </span>
                    </div>
                    <textarea
                        placeholder="Enter your text here..."
                        prop:value=move || state.with(|s| s.input_text.clone())
                        on:input=on_text
                    />
                </div>

                <div class="pane">
                    <div class="pane-header">
                        <label>"Output"</label>
                        <span class="tokens">{move || state.with(|s| s.output_tokens)} " tokens"</span>
                    </div>
                    <div class="output">
                        <textarea
                            readonly=true
                            class:dimmed=loading
                            placeholder=move || {
                                if loading() { "Compressing..." } else { "Compressed output will appear here..." }
                            }
                            prop:value=move || state.with(|s| s.output_text.clone())
                        />
                        <Show when=loading>
                            <div class="overlay">"DISTILLING..."</div>
                        </Show>
                    </div>
                </div>
            </div>

            <div class="slider">
                <div class="slider-header">
                    <label>
                        "Aggressiveness: "
                        <span class="value">{move || state.with(|s| s.aggressiveness.to_string())}</span>
                    </label>
                    <span class="hint">"Higher values remove more low-entropy tokens"</span>
                </div>
                <input
                    type="range"
                    min=Aggressiveness::MIN.value().to_string()
                    max=Aggressiveness::MAX.value().to_string()
                    step="0.1"
                    prop:value=move || state.with(|s| s.aggressiveness.value().to_string())
                    style:background=track
                    on:input=on_slide
                />
                <div class="slider-legend">
                    <span>"0.1 (low) · Maximum Retention"</span>
                    <span>"0.9 (high) · Maximum Compression"</span>
                </div>
            </div>
        </section>
    }
}

/// The debounce for `ticket` elapsed: compress if it is still current
fn run(state: RwSignal<DemoState>, config: StoredValue<DemoConfig>, ticket: Ticket) {
    let Some(Settle::Dispatch(job)) = state.try_update(|s| s.settle(ticket)) else {
        return;
    };
    let Some(mode) = config.try_with_value(|c| c.mode) else {
        return;
    };

    match mode {
        DemoMode::Local => {
            let outcome = heuristic::outcome(&job.text, job.aggressiveness);
            state.update(|s| {
                s.apply(job.ticket, Ok(outcome));
            });
        }
        DemoMode::Remote => {
            let endpoint = config.with_value(DemoConfig::endpoint);
            spawn_local(async move {
                let result = api::compress(&endpoint, &job.text, job.aggressiveness).await;
                if let Err(e) = &result {
                    leptos::logging::error!("Compression error: {e}");
                }
                if state.try_update(|s| s.apply(job.ticket, result)).is_none() {
                    leptos::logging::log!("Demo unmounted before compression finished");
                }
            });
        }
    }
}
