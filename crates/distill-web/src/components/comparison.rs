//! Head-to-Head Table

use leptos::prelude::*;

use distill_report::{Winner, data};

#[component]
pub fn ComparisonTable() -> impl IntoView {
    let rows = data::comparison();

    view! {
        <section class="comparison">
            <div class="section-title">
                <h2>"Head-to-Head: Distill vs bear-1"</h2>
                <span class="badge">"LongBench v2"</span>
            </div>

            <table>
                <thead>
                    <tr>
                        <th>"Metric"</th>
                        <th class="bear1">"bear-1 (v0.9)"</th>
                        <th class="distill">"Distill"</th>
                        <th>"Winner"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td class="metric">{row.metric}</td>
                                    <td class="bear1">{row.bear1}</td>
                                    <td class="distill">{row.distill}</td>
                                    <td>
                                        <WinnerBadge winner=row.winner delta=row.delta />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn WinnerBadge(winner: Winner, delta: Option<&'static str>) -> impl IntoView {
    let class = match winner {
        Winner::Distill => "winner winner-distill",
        Winner::Bear1 => "winner winner-bear1",
        Winner::Tie => "winner winner-tie",
        Winner::Neutral => "winner winner-neutral",
    };

    view! {
        <div class=class>
            <span class="label">{winner.label()}</span>
            {delta.map(|d| view! { <span class="delta">{d}</span> })}
        </div>
    }
}
