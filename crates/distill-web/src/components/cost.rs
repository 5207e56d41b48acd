//! Cost Savings Calculator

use leptos::prelude::*;

use distill_report::{CostModel, System, cost, format_usd};

use super::Bar;

#[component]
pub fn CostPanel() -> impl IntoView {
    let model = StoredValue::new(CostModel::default());
    let (volume, set_volume) = signal(cost::DEFAULT_MONTHLY_MILLIONS);

    let savings = move || model.with_value(|m| m.monthly(volume.get()).ok());

    let on_slide = move |ev: leptos::ev::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<u32>() {
            set_volume.set(value);
        }
    };

    view! {
        <section class="panel cost">
            <h3>"Cost Analysis"</h3>
            <p class="subtitle">"Inference time and price per 1M input tokens"</p>

            <div class="cost-bars">
                {System::ALL
                    .into_iter()
                    .map(|system| view! { <CostBar model=model system=system /> })
                    .collect_view()}
            </div>

            <div class="calculator">
                <label>
                    "Monthly volume: "
                    <span class="value">{move || format!("{}M tokens", volume.get())}</span>
                </label>
                <input
                    type="range"
                    min=cost::MIN_MONTHLY_MILLIONS.to_string()
                    max=cost::MAX_MONTHLY_MILLIONS.to_string()
                    step=cost::MONTHLY_STEP.to_string()
                    prop:value=move || volume.get().to_string()
                    on:input=on_slide
                />

                {move || savings().map(|s| view! {
                    <div class="savings">
                        <div class="line">
                            <span>"Baseline"</span>
                            <span>{format_usd(s.baseline)}</span>
                        </div>
                        <div class="line">
                            <span>"With Distill"</span>
                            <span class="distill">{format_usd(s.distill)}</span>
                        </div>
                        <div class="line net">
                            <span>"Net monthly savings"</span>
                            <span class="positive">{format_usd(s.net)}</span>
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}

#[component]
fn CostBar(model: StoredValue<CostModel>, system: System) -> impl IntoView {
    let (seconds, percent, per_million) = model.with_value(|m| {
        (m.seconds(system), m.percentage(system), m.cost_per_million(system))
    });
    let class = match system {
        System::Baseline => "bar-baseline",
        System::Bear1 => "bar-bear1",
        System::Distill => "bar-distill",
    };

    view! {
        <div class="cost-row">
            <span class="name">{system.label()}</span>
            <Bar percent=percent class=class />
            <span class="seconds">{format!("{seconds}s")}</span>
            <span class="price">{format!("${}/1M", per_million.round_dp(3))}</span>
        </div>
    }
}
