//! Landing Page

use leptos::prelude::*;

use crate::components::{
    AccuracyPanel, ApproachSection, ComparisonTable, ContextSection, CostPanel, EfficiencyChart,
    Hero, LatencyPanel, LimitationsSection, MethodologySection,
};
use crate::pages::DemoSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <DemoSection />

            <div class="sections">
                <ComparisonTable />

                <div class="grid-2">
                    <AccuracyPanel />
                    <EfficiencyChart />
                </div>

                <div class="grid-2">
                    <LatencyPanel />
                    <CostPanel />
                </div>

                <ContextSection />
                <MethodologySection />
                <ApproachSection />
                <LimitationsSection />
            </div>
        </div>
    }
}
