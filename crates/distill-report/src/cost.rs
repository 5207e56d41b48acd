//! Cost Efficiency Model
//!
//! Cost per input token is taken as proportional to LLM inference time:
//! the faster a compressed prompt is answered, the less it costs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::{ReportError, Result};
use crate::model::group_thousands;

/// Smallest volume on the savings slider, millions of tokens per month
pub const MIN_MONTHLY_MILLIONS: u32 = 10;
/// Largest volume on the savings slider
pub const MAX_MONTHLY_MILLIONS: u32 = 1000;
/// Slider step
pub const MONTHLY_STEP: u32 = 10;
/// Slider starting point
pub const DEFAULT_MONTHLY_MILLIONS: u32 = 100;

/// Systems compared on cost
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum System {
    Baseline,
    Bear1,
    Distill,
}

impl System {
    pub const ALL: [Self; 3] = [Self::Baseline, Self::Bear1, Self::Distill];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Baseline => "Baseline",
            Self::Bear1 => "bear-1",
            Self::Distill => "Distill",
        }
    }
}

impl std::str::FromStr for System {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "baseline" => Ok(Self::Baseline),
            "bear-1" | "bear1" => Ok(Self::Bear1),
            "distill" => Ok(Self::Distill),
            _ => Err(ReportError::UnknownSystem(s.to_string())),
        }
    }
}

/// Price and inference times the cost panel is built on
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CostModel {
    /// USD per 1M input tokens at baseline (GPT-4o-mini sample pricing)
    pub price_per_million: Decimal,
    pub baseline_seconds: Decimal,
    pub bear1_seconds: Decimal,
    pub distill_seconds: Decimal,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            price_per_million: dec!(0.15),
            baseline_seconds: dec!(12.06),
            bear1_seconds: dec!(2.2),
            distill_seconds: dec!(2.11),
        }
    }
}

/// Monthly bill at one volume
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlySavings {
    pub volume_millions: u32,
    pub baseline: Decimal,
    pub distill: Decimal,
    pub net: Decimal,
}

impl CostModel {
    pub const fn seconds(&self, system: System) -> Decimal {
        match system {
            System::Baseline => self.baseline_seconds,
            System::Bear1 => self.bear1_seconds,
            System::Distill => self.distill_seconds,
        }
    }

    /// Inference time relative to baseline, 0..=100
    pub fn percentage(&self, system: System) -> Decimal {
        self.seconds(system) / self.baseline_seconds * Decimal::ONE_HUNDRED
    }

    /// USD per 1M input tokens
    pub fn cost_per_million(&self, system: System) -> Decimal {
        self.price_per_million * self.seconds(system) / self.baseline_seconds
    }

    /// Baseline vs Distill bill for `volume_millions` tokens per month
    pub fn monthly(&self, volume_millions: u32) -> Result<MonthlySavings> {
        if !(MIN_MONTHLY_MILLIONS..=MAX_MONTHLY_MILLIONS).contains(&volume_millions) {
            return Err(ReportError::VolumeOutOfRange {
                value: volume_millions,
                min: MIN_MONTHLY_MILLIONS,
                max: MAX_MONTHLY_MILLIONS,
            });
        }
        if volume_millions % MONTHLY_STEP != 0 {
            return Err(ReportError::VolumeStep {
                value: volume_millions,
                step: MONTHLY_STEP,
            });
        }

        let volume = Decimal::from(volume_millions);
        let baseline = volume * self.cost_per_million(System::Baseline);
        let distill = volume * self.cost_per_million(System::Distill);

        Ok(MonthlySavings {
            volume_millions,
            baseline,
            distill,
            net: baseline - distill,
        })
    }
}

/// `$1,234.56`
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{sign}${}.{cents}", group_thousands(whole))
}
