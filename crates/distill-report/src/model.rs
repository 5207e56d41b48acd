//! Report Models
//!
//! Row types for the comparison table, accuracy panel and charts.
//! Percentages and seconds use `rust_decimal` so ratios print exactly.

use rust_decimal::Decimal;
use serde::Serialize;

/// Which system takes a comparison row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Distill,
    Bear1,
    Tie,
    Neutral,
}

impl Winner {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Distill => "Distill",
            Self::Bear1 => "bear-1",
            Self::Tie => "Statistical Tie",
            Self::Neutral => "—",
        }
    }
}

/// Sign of a signed delta string such as `+1.1%`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn of(delta: Option<&str>) -> Self {
        match delta.map(str::trim) {
            Some(d) if d.starts_with('+') => Self::Positive,
            Some(d) if d.starts_with('-') => Self::Negative,
            _ => Self::Neutral,
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// One row of the head-to-head table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MetricRow {
    pub metric: &'static str,
    pub bear1: &'static str,
    pub distill: &'static str,
    pub winner: Winner,
    pub delta: Option<&'static str>,
}

/// Mean accuracy at one entropy threshold
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccuracyResult {
    /// `baseline` or the threshold θ
    pub config: &'static str,
    pub mean: Decimal,
    pub std_dev: Decimal,
    pub delta: Option<&'static str>,
    pub significant: Option<bool>,
}

impl AccuracyResult {
    pub fn is_baseline(&self) -> bool {
        self.config == "baseline"
    }

    pub fn config_label(&self) -> String {
        if self.is_baseline() {
            self.config.to_string()
        } else {
            format!("θ={}", self.config)
        }
    }

    pub fn tone(&self) -> Tone {
        Tone::of(self.delta)
    }
}

/// Compression ratio vs accuracy delta, both in percent
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScatterPoint {
    pub compression: Decimal,
    pub accuracy: Decimal,
    pub config: Option<&'static str>,
}

/// Latency split in seconds
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LatencyPoint {
    pub name: &'static str,
    pub compression: Decimal,
    pub llm: Decimal,
    pub total: Decimal,
}

impl LatencyPoint {
    /// How many times faster this system is than `other`, end to end
    pub fn speedup_over(&self, other: &Self) -> Decimal {
        if self.total.is_zero() {
            return Decimal::ZERO;
        }
        (other.total / self.total).round_dp(1)
    }

    /// Share of the total spent compressing, 0..=100
    pub fn overhead_percent(&self) -> Decimal {
        if self.total.is_zero() {
            return Decimal::ZERO;
        }
        (self.compression / self.total * Decimal::ONE_HUNDRED).round_dp(1)
    }
}

/// Latency at one context length, seconds
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScalingPoint {
    pub tokens: &'static str,
    pub baseline: Decimal,
    pub distill: Decimal,
}

/// Bootstrap distribution bucket of the accuracy delta
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistogramBin {
    pub range: &'static str,
    pub frequency: u32,
}

/// Lowest accuracy delta on the efficiency chart, percent
pub const ACCURACY_AXIS_MIN: Decimal = Decimal::NEGATIVE_ONE;

/// Highest accuracy delta on the efficiency chart, percent
pub const ACCURACY_AXIS_MAX: Decimal = Decimal::TWO;

impl ScatterPoint {
    /// `(left, bottom)` on the efficiency chart as percentages of the plot
    /// area. Reduction spans 0..=100 %, accuracy the axis bounds above;
    /// points outside are pinned to the edge.
    pub fn plot_position(&self) -> (Decimal, Decimal) {
        let left = self.compression.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        let bottom = (self.accuracy - ACCURACY_AXIS_MIN) / (ACCURACY_AXIS_MAX - ACCURACY_AXIS_MIN)
            * Decimal::ONE_HUNDRED;
        (
            left.round_dp(1),
            bottom.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED).round_dp(1),
        )
    }
}

/// Needle-in-a-haystack retrieval accuracy at one depth, percent
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NeedleResult {
    pub depth: &'static str,
    pub baseline: u32,
    pub distill: u32,
}

impl NeedleResult {
    /// Percentage points gained over the baseline
    pub fn gain(&self) -> i64 {
        i64::from(self.distill) - i64::from(self.baseline)
    }
}

/// How far a native context window stretches once input is compressed
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContextMultiplier {
    /// Native window, thousands of tokens
    pub native_k: u32,
    /// Input tokens removed, percent
    pub reduction: Decimal,
}

impl ContextMultiplier {
    /// Raw input that fits once compressed, thousands of tokens
    pub fn effective_k(&self) -> Decimal {
        let kept = Decimal::ONE_HUNDRED - self.reduction;
        if kept <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (Decimal::from(self.native_k) * Decimal::ONE_HUNDRED / kept).round_dp(0)
    }

    /// Native window as a share of the effective one, 0..=100
    pub fn native_share(&self) -> Decimal {
        let effective = self.effective_k();
        if effective.is_zero() {
            return Decimal::ZERO;
        }
        (Decimal::from(self.native_k) / effective * Decimal::ONE_HUNDRED).round_dp(1)
    }
}

/// One compressed document from the enterprise QA trial
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub original_tokens: u32,
    pub compressed_tokens: u32,
    pub estimator_ms: u32,
    pub semantic_drift: &'static str,
    pub throughput: &'static str,
}

impl CaseStudy {
    pub fn reduction_percent(&self) -> Decimal {
        if self.original_tokens == 0 {
            return Decimal::ZERO;
        }
        let kept = Decimal::from(self.compressed_tokens) / Decimal::from(self.original_tokens);
        ((Decimal::ONE - kept) * Decimal::ONE_HUNDRED).round_dp(1)
    }

    /// Lines of the `compression_stats.log` excerpt
    pub fn log_lines(&self) -> [String; 4] {
        [
            format!("[INPUT] Original: {} tokens", format_count(self.original_tokens)),
            format!("[PROCESS] Entropy Estimator: {}ms", self.estimator_ms),
            format!("[OUTPUT] Compressed: {} tokens", format_count(self.compressed_tokens)),
            format!(
                "[RESULT] Reduction: {:.1}% | Semantic Drift: {}",
                self.reduction_percent(),
                self.semantic_drift
            ),
        ]
    }
}

/// Evaluation methodology card
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MethodCard {
    pub title: &'static str,
    pub badge: &'static str,
    pub items: &'static [&'static str],
}

/// How a stage of the architecture diagram is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Plain,
    Highlight,
    Success,
}

impl StageKind {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Plain => "stage",
            Self::Highlight => "stage stage-highlight",
            Self::Success => "stage stage-success",
        }
    }
}

/// One block of the inference architecture flow
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArchStage {
    pub title: &'static str,
    pub sub: &'static str,
    pub kind: StageKind,
}

/// Titled paragraph card
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

/// `1234567` → `1,234,567`
pub fn format_count(n: u32) -> String {
    group_thousands(&n.to_string())
}

/// Insert `,` between every group of three digits
pub fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tone_from_delta() {
        assert_eq!(Tone::of(Some("+0.9%")), Tone::Positive);
        assert_eq!(Tone::of(Some("-0.3%")), Tone::Negative);
        assert_eq!(Tone::of(Some("")), Tone::Neutral);
        assert_eq!(Tone::of(None), Tone::Neutral);
    }

    #[test]
    fn test_latency_ratios() {
        let baseline = LatencyPoint {
            name: "Baseline",
            compression: dec!(0),
            llm: dec!(4.2),
            total: dec!(4.2),
        };
        let distill = LatencyPoint {
            name: "Distill",
            compression: dec!(0.2),
            llm: dec!(1.6),
            total: dec!(1.8),
        };
        assert_eq!(distill.speedup_over(&baseline), dec!(2.3));
        assert_eq!(distill.overhead_percent(), dec!(11.1));
        assert_eq!(baseline.overhead_percent(), dec!(0));
    }

    #[test]
    fn test_winner_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Winner::Bear1).unwrap(), "\"bear1\"");
        assert_eq!(Winner::Tie.label(), "Statistical Tie");
    }

    #[test]
    fn test_scatter_plot_position() {
        let point = ScatterPoint {
            compression: dec!(68),
            accuracy: dec!(1.3),
            config: Some("0.9"),
        };
        assert_eq!(point.plot_position(), (dec!(68), dec!(76.7)));

        let off_chart = ScatterPoint {
            compression: dec!(120),
            accuracy: dec!(-3),
            config: None,
        };
        assert_eq!(off_chart.plot_position(), (dec!(100), dec!(0)));
    }

    #[test]
    fn test_context_multiplier() {
        let context = ContextMultiplier {
            native_k: 128,
            reduction: dec!(68),
        };
        assert_eq!(context.effective_k(), dec!(400));
        assert_eq!(context.native_share(), dec!(32));

        let everything_removed = ContextMultiplier {
            native_k: 128,
            reduction: dec!(100),
        };
        assert_eq!(everything_removed.effective_k(), dec!(0));
        assert_eq!(everything_removed.native_share(), dec!(0));
    }

    #[test]
    fn test_case_study_log() {
        let study = CaseStudy {
            original_tokens: 252_894,
            compressed_tokens: 80_926,
            estimator_ms: 42,
            semantic_drift: "<0.1%",
            throughput: "4x",
        };
        assert_eq!(study.reduction_percent(), dec!(68.0));
        let lines = study.log_lines();
        assert_eq!(lines[0], "[INPUT] Original: 252,894 tokens");
        assert_eq!(lines[2], "[OUTPUT] Compressed: 80,926 tokens");
        assert_eq!(lines[3], "[RESULT] Reduction: 68.0% | Semantic Drift: <0.1%");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
