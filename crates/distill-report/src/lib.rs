//! # distill-report
//!
//! Benchmark figures and cost model shown on the Distill landing page.
//!
//! ## Headline: Distill vs bear-1 on LongBench v2
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  End-to-end latency (compression + LLM)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Baseline ██████████████████████████████████████████  4.2s  │
//! │  bear-1   ██████████████████████                      2.2s  │
//! │  Distill  ██████████████████                          1.8s  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All figures are fixed results from the published benchmark runs; nothing
//! here is measured at runtime.

pub mod cost;
pub mod data;
pub mod error;
pub mod model;

pub use cost::{CostModel, MonthlySavings, System, format_usd};
pub use error::{ReportError, Result};
pub use model::{
    AccuracyResult, ArchStage, Card, CaseStudy, ContextMultiplier, HistogramBin, LatencyPoint,
    MethodCard, MetricRow, NeedleResult, ScalingPoint, ScatterPoint, StageKind, Tone, Winner,
    format_count,
};

pub use rust_decimal::Decimal;
