use std::fmt;

use serde::Serialize;

use super::engine::round_to_tenth;

/// Qualitative tier for a grade, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Excellent,
    Good,
    Satisfactory,
    Sufficient,
    Poor,
    Insufficient,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Label::Excellent => "excellent",
            Label::Good => "good",
            Label::Satisfactory => "satisfactory",
            Label::Sufficient => "sufficient",
            Label::Poor => "poor",
            Label::Insufficient => "insufficient",
        };
        f.write_str(word)
    }
}

/// Classify a grade into its qualitative tier.
///
/// The grade is rounded to one decimal first so float artifacts near a band
/// edge land on the intended side. Bands follow the usual German convention;
/// note that `sufficient` only spans 3.6-4.0, half the width of the others.
///
/// | Grade       | Tier         |
/// |-------------|--------------|
/// | <= 1.5      | excellent    |
/// | <= 2.5      | good         |
/// | <= 3.5      | satisfactory |
/// | <= 4.0      | sufficient   |
/// | <= 4.9      | poor         |
/// | otherwise   | insufficient |
pub fn label_for(grade: f64) -> Label {
    let g = round_to_tenth(grade);
    match g {
        g if g <= 1.5 => Label::Excellent,
        g if g <= 2.5 => Label::Good,
        g if g <= 3.5 => Label::Satisfactory,
        g if g <= 4.0 => Label::Sufficient,
        g if g <= 4.9 => Label::Poor,
        _ => Label::Insufficient,
    }
}
