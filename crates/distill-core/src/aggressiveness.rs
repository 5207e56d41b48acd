//! Aggressiveness Knob
//!
//! The demo slider runs from 0.1 to 0.9 in steps of 0.1. Values are kept as
//! integer tenths so retention arithmetic stays exact.

use serde::{Deserialize, Serialize};

use crate::error::CompressError;

/// Compression aggressiveness in tenths (1..=9)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Aggressiveness(u8);

impl Aggressiveness {
    /// 0.1 (maximum retention)
    pub const MIN: Self = Self(1);

    /// 0.9 (maximum compression)
    pub const MAX: Self = Self(9);

    /// Build from tenths, rejecting anything outside 1..=9
    pub fn from_tenths(tenths: u8) -> Result<Self, CompressError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&tenths) {
            Ok(Self(tenths))
        } else {
            Err(CompressError::InvalidAggressiveness(format!(
                "{tenths} tenths is outside 1..=9"
            )))
        }
    }

    /// Slider semantics: snap to the nearest tenth and clamp into range.
    /// Non-finite input falls back to the minimum.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_value(value: f64) -> Self {
        if !value.is_finite() {
            return Self::MIN;
        }
        let tenths = (value * 10.0).round().clamp(f64::from(Self::MIN.0), f64::from(Self::MAX.0));
        Self(tenths as u8)
    }

    /// Inverse of [`Self::rate`]: the service speaks in retention rate
    pub fn from_rate(rate: f64) -> Result<Self, CompressError> {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(CompressError::InvalidAggressiveness(format!(
                "rate {rate} is outside [0, 1]"
            )));
        }
        Ok(Self::from_value(1.0 - rate))
    }

    pub const fn tenths(self) -> u8 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Fraction of the prompt the service is asked to keep
    pub fn rate(self) -> f64 {
        f64::from(10 - self.0) / 10.0
    }

    /// Position of the knob along the slider track, 0.0..=1.0
    pub fn track_fraction(self) -> f64 {
        f64::from(self.0 - Self::MIN.0) / f64::from(Self::MAX.0 - Self::MIN.0)
    }

    /// Every slider step from 0.1 to 0.9
    pub fn steps() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl Default for Aggressiveness {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<f64> for Aggressiveness {
    type Error = CompressError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || !(0.05..=0.95).contains(&value) {
            return Err(CompressError::InvalidAggressiveness(format!(
                "{value} is outside [0.1, 0.9]"
            )));
        }
        Ok(Self::from_value(value))
    }
}

impl From<Aggressiveness> for f64 {
    fn from(value: Aggressiveness) -> Self {
        value.value()
    }
}

impl std::fmt::Display for Aggressiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_snapping() {
        assert_eq!(Aggressiveness::from_value(0.34).tenths(), 3);
        assert_eq!(Aggressiveness::from_value(0.0), Aggressiveness::MIN);
        assert_eq!(Aggressiveness::from_value(1.7), Aggressiveness::MAX);
        assert_eq!(Aggressiveness::from_value(f64::NAN), Aggressiveness::MIN);
    }

    #[test]
    fn test_rate_round_trip_through_service_units() {
        for step in Aggressiveness::steps() {
            assert_eq!(Aggressiveness::from_rate(step.rate()).unwrap(), step);
        }
        assert!(Aggressiveness::from_rate(1.5).is_err());
        assert!(Aggressiveness::from_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_display_and_bounds() {
        assert_eq!(Aggressiveness::MIN.to_string(), "0.1");
        assert_eq!(Aggressiveness::MAX.to_string(), "0.9");
        assert!(Aggressiveness::from_tenths(0).is_err());
        assert!(Aggressiveness::from_tenths(10).is_err());
        assert_eq!(Aggressiveness::steps().count(), 9);
        assert!((Aggressiveness::MAX.track_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_uses_plain_numbers() {
        let json = serde_json::to_string(&Aggressiveness::from_value(0.4)).unwrap();
        assert_eq!(json, "0.4");
        let parsed: Aggressiveness = serde_json::from_str("0.7").unwrap();
        assert_eq!(parsed.tenths(), 7);
        assert!(serde_json::from_str::<Aggressiveness>("2.0").is_err());
    }
}
