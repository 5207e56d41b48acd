//! Error Types for Report Calculations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReportError {
    #[error("Monthly volume {value}M is outside {min}M..={max}M")]
    VolumeOutOfRange { value: u32, min: u32, max: u32 },

    #[error("Monthly volume {value}M is not a multiple of {step}M")]
    VolumeStep { value: u32, step: u32 },

    #[error("Unknown system: {0}")]
    UnknownSystem(String),
}
