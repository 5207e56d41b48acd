//! Latency Panel

use leptos::prelude::*;

use distill_report::{Decimal, data};

use super::Bar;

#[component]
pub fn LatencyPanel() -> impl IntoView {
    let points = data::latency();
    let slowest = points.iter().map(|p| p.total).max().unwrap_or(Decimal::ONE);

    let by_name = |name: &str| points.iter().find(|p| p.name == name).cloned();
    let speedups = match (by_name("Baseline"), by_name("bear-1"), by_name("Distill")) {
        (Some(baseline), Some(bear1), Some(distill)) => Some((
            distill.speedup_over(&baseline),
            distill.speedup_over(&bear1),
            distill.overhead_percent(),
        )),
        _ => None,
    };

    view! {
        <div class="panel latency">
            <h3>"End-to-End Latency"</h3>
            <p class="subtitle">"Compression + LLM inference, seconds"</p>

            <div class="latency-bars">
                {points
                    .iter()
                    .map(|point| {
                        let percent = if slowest.is_zero() {
                            Decimal::ZERO
                        } else {
                            point.total / slowest * Decimal::ONE_HUNDRED
                        };
                        let class = format!("bar-{}", point.name.to_ascii_lowercase().replace('-', ""));
                        view! {
                            <div class="latency-row">
                                <span class="name">{point.name}</span>
                                <Bar percent=percent class=class />
                                <span class="seconds">{format!("{}s", point.total)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {speedups.map(|(vs_baseline, vs_bear1, overhead)| view! {
                <div class="speedups">
                    <div class="stat">
                        <span class="stat-value">{format!("{vs_baseline}x")}</span>
                        <span class="stat-label">"vs Baseline"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">{format!("{vs_bear1}x")}</span>
                        <span class="stat-label">"vs bear-1"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">{format!("{overhead}%")}</span>
                        <span class="stat-label">"Compression overhead"</span>
                    </div>
                </div>
            })}

            <h4>"Scaling with Context Length"</h4>
            <table class="scaling">
                <thead>
                    <tr>
                        <th>"Context"</th>
                        <th>"Baseline"</th>
                        <th>"Distill"</th>
                    </tr>
                </thead>
                <tbody>
                    {data::scaling()
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                <td class="mono">{row.tokens}</td>
                                <td>{format!("{}s", row.baseline)}</td>
                                <td class="distill">{format!("{}s", row.distill)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
