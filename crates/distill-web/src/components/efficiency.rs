//! Compression Efficiency Chart
//!
//! Accuracy delta against token reduction, drawn as positioned CSS points
//! over a fixed plot area.

use leptos::prelude::*;

use distill_report::{ScatterPoint, data};

#[component]
pub fn EfficiencyChart() -> impl IntoView {
    let (show_bear1, set_show_bear1) = signal(true);
    let distill = data::distill_scatter();
    let bear1 = StoredValue::new(data::bear1_scatter());

    view! {
        <div class="panel efficiency">
            <div class="panel-header">
                <div>
                    <h3>"Compression Efficiency"</h3>
                    <p class="subtitle">"The Accuracy vs. Token Reduction Pareto Frontier"</p>
                </div>
                <button
                    class="toggle"
                    class:active=move || show_bear1.get()
                    on:click=move |_| set_show_bear1.update(|s| *s = !*s)
                >
                    {move || if show_bear1.get() { "Comparing bear-1" } else { "Hide bear-1" }}
                </button>
            </div>

            <div class="plot">
                <div class="plot-zero"></div>
                {distill
                    .iter()
                    .map(|point| view! { <Point point=point.clone() class="point-distill" /> })
                    .collect_view()}
                <Show when=move || show_bear1.get()>
                    {move || {
                        bear1
                            .with_value(|points| {
                                points
                                    .iter()
                                    .map(|point| view! { <Point point=point.clone() class="point-bear1" /> })
                                    .collect_view()
                            })
                    }}
                </Show>
                <span class="axis-x">"Token Reduction %"</span>
                <span class="axis-y">"Accuracy Δ %"</span>
            </div>

            <div class="legend">
                <span class="point-distill">"● Distill"</span>
                <Show when=move || show_bear1.get()>
                    <span class="point-bear1">"✕ bear-1"</span>
                </Show>
            </div>

            <div class="callout">
                <h4>"Superior Efficiency Frontier"</h4>
                <p>
                    "Distill maintains positive accuracy gains even at 68% compression (θ=0.9). By using entropy-based identification, we remove tokens that are highly predictable given the context, whereas bear-1 relies on simpler importance weightings that often prune critical low-frequency semantic anchors."
                </p>
            </div>
        </div>
    }
}

#[component]
fn Point(point: ScatterPoint, class: &'static str) -> impl IntoView {
    let (left, bottom) = point.plot_position();
    let title = match point.config {
        Some(config) => format!("θ={config}: {}% reduction, {}% accuracy Δ", point.compression, point.accuracy),
        None => format!("{}% reduction, {}% accuracy Δ", point.compression, point.accuracy),
    };

    view! {
        <span
            class=format!("point {class}")
            style:left=format!("{left}%")
            style:bottom=format!("{bottom}%")
            title=title
        ></span>
    }
}
