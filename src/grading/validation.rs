use super::types::{CalculationInput, ScoringMode};

/// Validate a calculation input before it reaches the engine.
/// Returns all violations at once (not just the first).
///
/// The engine itself clamps or returns NAN on bad input; this is the
/// caller-side contract that keeps those defenses from ever firing.
pub fn validate(input: &CalculationInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    match (input.mode, input.max_points) {
        (ScoringMode::Ihk, None) => {
            if input.points > 100 {
                errors.push(format!(
                    "points: {} exceeds the 100-point IHK scale",
                    input.points
                ));
            }
        }
        (ScoringMode::Ihk, Some(max)) | (ScoringMode::Custom, Some(max)) => {
            if max == 0 {
                errors.push("max_points: must be greater than zero".to_string());
            }
            if input.points > max {
                errors.push(format!(
                    "points: {} exceeds max_points {}",
                    input.points, max
                ));
            }
        }
        (ScoringMode::Custom, None) => {
            errors.push("max_points: required for custom mode".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
