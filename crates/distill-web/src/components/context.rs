//! Context Utilization & Retrieval

use leptos::prelude::*;

use distill_report::data;

use super::Bar;

#[component]
pub fn ContextSection() -> impl IntoView {
    let context = data::context_multiplier();
    let study = data::case_study();

    view! {
        <section class="context">
            <h2>"Context Utilization & Retrieval"</h2>

            <div class="grid-2">
                <div class="panel">
                    <h3>"Effective Context Multiplier"</h3>
                    <div class="multiplier">
                        <Bar percent=context.native_share() class="bar-native" />
                        <div class="multiplier-labels">
                            <span>{format!("{}K Native", context.native_k)}</span>
                            <span class="effective">{format!("~{}K Effective", context.effective_k())}</span>
                        </div>
                    </div>
                    <p class="quote">
                        {format!(
                            "\"By pruning {}% of redundant input tokens, models with a {}K context window can effectively digest documents that previously required a {}K window, with zero retraining required.\"",
                            context.reduction,
                            context.native_k,
                            context.effective_k(),
                        )}
                    </p>
                </div>

                <div class="panel">
                    <h3>"Needle-in-Haystack Retrieval"</h3>
                    <table>
                        <thead>
                            <tr>
                                <th>"Context Depth"</th>
                                <th>"Baseline"</th>
                                <th class="distill">"Distill (0.9)"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {data::needle_in_haystack()
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td>{row.depth}</td>
                                        <td>{format!("{}%", row.baseline)}</td>
                                        <td class="positive">
                                            {format!("{}%", row.distill)}
                                            <span class="gain">{format!("+{}", row.gain())}</span>
                                        </td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                    <p class="footnote">
                        "Retrieval accuracy (%) tested across 1,000 document permutations at 100K context length."
                    </p>
                </div>
            </div>

            <div class="case-study">
                <h3>"Real-World Application: Enterprise Document QA"</h3>
                <div class="grid-2">
                    <div>
                        <p>
                            "We tested Distill on 300-page case files formatted as "
                            <a
                                href="https://www.ca5.uscourts.gov/documents/SampleBriefs.pdf"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "Fifth Circuit appellate briefs"
                            </a>
                            ". Previously, prompts had to be chunked across multiple calls, losing global coherence. With Distill, entire files were compressed to fit within a single 128K context window."
                        </p>
                        <div class="hero-stats">
                            <div class="stat">
                                <span class="stat-value">{format!("{}%", study.reduction_percent().round())}</span>
                                <span class="stat-label">"Cost Reduced"</span>
                            </div>
                            <div class="stat">
                                <span class="stat-value">{study.throughput}</span>
                                <span class="stat-label">"Throughput"</span>
                            </div>
                        </div>
                    </div>
                    <pre class="log">
                        <span class="comment">"# compression_stats.log"</span>
                        {study
                            .log_lines()
                            .into_iter()
                            .map(|line| view! { <span class="line">{line}</span> })
                            .collect_view()}
                    </pre>
                </div>
            </div>
        </section>
    }
}
