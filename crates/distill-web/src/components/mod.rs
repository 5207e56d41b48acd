//! UI Components

mod accuracy;
mod approach;
mod comparison;
mod context;
mod cost;
mod efficiency;
mod hero;
mod latency;
mod limitations;
mod methodology;

pub use accuracy::AccuracyPanel;
pub use approach::ApproachSection;
pub use comparison::ComparisonTable;
pub use context::ContextSection;
pub use cost::CostPanel;
pub use efficiency::EfficiencyChart;
pub use hero::Hero;
pub use latency::LatencyPanel;
pub use limitations::{Footer, LimitationsSection};
pub use methodology::MethodologySection;

use leptos::prelude::*;
use distill_report::Decimal;

/// Horizontal bar filled to `percent` of its track
#[component]
pub fn Bar(#[prop(into)] percent: Decimal, #[prop(into)] class: String) -> impl IntoView {
    let width = format!("{}%", percent.round_dp(1).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED));
    view! {
        <div class="bar-track">
            <div class=format!("bar-fill {class}") style:width=width></div>
        </div>
    }
}
