//! Accuracy Panel

use leptos::prelude::*;

use distill_report::{Decimal, data};

use super::Bar;

#[component]
pub fn AccuracyPanel() -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let results = data::accuracy();

    let histogram = data::histogram();
    let peak = histogram.iter().map(|b| b.frequency).max().unwrap_or(1).max(1);

    view! {
        <div class="panel accuracy">
            <h3>"Accuracy Analysis"</h3>
            <p class="subtitle">"Performance delta over LongBench v2 baseline"</p>

            <table>
                <thead>
                    <tr>
                        <th>"Config"</th>
                        <th>"Mean Acc"</th>
                        <th>"Δ vs Baseline"</th>
                        <th>"Significant"</th>
                    </tr>
                </thead>
                <tbody>
                    {results
                        .into_iter()
                        .map(|row| {
                            let significance = row.significant.map(|yes| {
                                if yes {
                                    view! { <span class="pill yes">"YES"</span> }
                                } else {
                                    view! { <span class="pill no">"NO"</span> }
                                }
                            });
                            view! {
                                <tr>
                                    <td class="mono">{row.config_label()}</td>
                                    <td>
                                        {format!("{:.1}%", row.mean)}
                                        <span class="std-dev">{format!(" ±{}%", row.std_dev)}</span>
                                    </td>
                                    <td class={row.tone().css_class()}>{row.delta.unwrap_or("—")}</td>
                                    <td>{significance}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>

            <button class="btn-link" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                {move || if expanded.get() { "Hide distribution" } else { "Show bootstrap distribution" }}
            </button>

            <Show when=move || expanded.get()>
                <div class="histogram">
                    {histogram
                        .iter()
                        .map(|bin| {
                            let percent = Decimal::from(bin.frequency) * Decimal::ONE_HUNDRED
                                / Decimal::from(peak);
                            view! {
                                <div class="histogram-row">
                                    <span class="range">{bin.range}</span>
                                    <Bar percent=percent class="bar-distill" />
                                    <span class="count">{bin.frequency}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
