use std::fmt;

use serde::Serialize;

use super::engine::round_to_tenth;
use super::label::Label;

/// Which point-to-grade mapping applies to a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoringMode {
    /// Official IHK key: 100-point scale, non-linear step table.
    #[serde(rename = "IHK")]
    Ihk,
    /// Arbitrary positive maximum, linear between 1.0 and 6.0.
    #[serde(rename = "custom")]
    Custom,
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Ihk => f.write_str("IHK"),
            ScoringMode::Custom => f.write_str("custom"),
        }
    }
}

/// One calculation request, already parsed from raw text by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationInput {
    pub mode: ScoringMode,
    /// Achieved points.
    pub points: u32,
    /// Maximum achievable points. Required for `Custom`. For `Ihk`, `Some`
    /// selects the scaled variant that maps `points / max_points` onto the
    /// 100-point key first.
    pub max_points: Option<u32>,
}

/// Computed grade plus its qualitative label.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GradeResult {
    /// Raw grade in [1.0, 6.0], lower is better.
    pub value: f64,
    pub label: Label,
}

impl GradeResult {
    /// Grade rounded to one decimal for display. The label is derived from
    /// the same one-decimal rounding of the raw value, so the two never
    /// disagree at a band boundary.
    pub fn display_value(&self) -> f64 {
        round_to_tenth(self.value)
    }
}
