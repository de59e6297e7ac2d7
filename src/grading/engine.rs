//! Pure point-to-grade mapping. No state, no allocation.

use super::label::label_for;
use super::types::{CalculationInput, GradeResult, ScoringMode};

/// Official IHK grade key (as of October 2014), indexed by achieved points.
///
/// The key is a non-linear step table over the 100-point scale; every integer
/// in 0..=100 has exactly one grade. Reproduced verbatim from the published
/// table, so a direct array lookup is both the fastest and the most
/// auditable representation.
const IHK_TABLE: [f64; 101] = [
    6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 5.9, 5.9, 5.9, 5.9, // 0-9
    5.9, 5.9, 5.8, 5.8, 5.8, 5.8, 5.8, 5.7, 5.7, 5.7, // 10-19
    5.7, 5.7, 5.7, 5.6, 5.6, 5.6, 5.6, 5.6, 5.6, 5.5, // 20-29
    5.4, 5.4, 5.3, 5.3, 5.2, 5.2, 5.1, 5.1, 5.0, 5.0, // 30-39
    5.0, 4.9, 4.9, 4.8, 4.8, 4.7, 4.7, 4.6, 4.6, 4.5, // 40-49
    4.4, 4.4, 4.3, 4.3, 4.2, 4.1, 4.1, 4.0, 4.0, 3.9, // 50-59
    3.9, 3.8, 3.7, 3.7, 3.6, 3.6, 3.5, 3.4, 3.3, 3.3, // 60-69
    3.2, 3.1, 3.1, 3.0, 2.9, 2.9, 2.8, 2.7, 2.7, 2.6, // 70-79
    2.5, 2.4, 2.3, 2.2, 2.1, 2.0, 2.0, 1.9, 1.8, 1.7, // 80-89
    1.6, 1.5, 1.4, 1.4, 1.3, 1.3, 1.2, 1.2, 1.1, 1.1, // 90-99
    1.0, // 100
];

/// Round to one decimal place, half away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Grade a score on the official IHK 100-point key.
///
/// Points above 100 are clamped to 100 before the lookup; callers are
/// expected to reject out-of-range input before getting here.
pub fn grade_for_ihk(points: u32) -> f64 {
    IHK_TABLE[points.min(100) as usize]
}

/// Grade a score on a linear key: 100% maps to 1.0, 0% to 6.0.
///
/// Returns NAN when `max_points` is zero; callers validate first
/// (see [`super::validation::validate`]). Points outside `[0, max_points]`
/// are not clamped and yield grades outside `[1.0, 6.0]`.
pub fn grade_for_custom(points: u32, max_points: u32) -> f64 {
    if max_points == 0 {
        return f64::NAN;
    }
    let percentage = points as f64 * 100.0 / max_points as f64;
    5.0 * (100.0 - percentage) / 100.0 + 1.0
}

/// IHK key over an arbitrary maximum: scale the score onto the 100-point
/// range (truncating, as the official practice does), then apply the table.
///
/// Returns NAN when `max_points` is zero.
pub fn grade_for_ihk_scaled(points: u32, max_points: u32) -> f64 {
    if max_points == 0 {
        return f64::NAN;
    }
    let scaled = (points as f64 / max_points as f64 * 100.0) as u32;
    grade_for_ihk(scaled)
}

/// Achieved percentage for display. `None` when `max_points` is zero.
pub fn percentage_of(points: u32, max_points: u32) -> Option<f64> {
    if max_points == 0 {
        return None;
    }
    Some(points as f64 * 100.0 / max_points as f64)
}

/// Compute the grade for an input the caller has already validated.
pub fn evaluate(input: &CalculationInput) -> GradeResult {
    let value = match (input.mode, input.max_points) {
        (ScoringMode::Ihk, None) => grade_for_ihk(input.points),
        (ScoringMode::Ihk, Some(max)) => grade_for_ihk_scaled(input.points, max),
        (ScoringMode::Custom, Some(max)) => grade_for_custom(input.points, max),
        // Precondition violation; validation rejects this before evaluate.
        (ScoringMode::Custom, None) => f64::NAN,
    };
    GradeResult {
        value,
        label: label_for(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::label::Label;

    // The published key as (range start, range end, grade) rows.
    const IHK_ROWS: [(u32, u32, f64); 50] = [
        (100, 100, 1.0),
        (98, 99, 1.1),
        (96, 97, 1.2),
        (94, 95, 1.3),
        (92, 93, 1.4),
        (91, 91, 1.5),
        (90, 90, 1.6),
        (89, 89, 1.7),
        (88, 88, 1.8),
        (87, 87, 1.9),
        (85, 86, 2.0),
        (84, 84, 2.1),
        (83, 83, 2.2),
        (82, 82, 2.3),
        (81, 81, 2.4),
        (80, 80, 2.5),
        (79, 79, 2.6),
        (77, 78, 2.7),
        (76, 76, 2.8),
        (74, 75, 2.9),
        (73, 73, 3.0),
        (71, 72, 3.1),
        (70, 70, 3.2),
        (68, 69, 3.3),
        (67, 67, 3.4),
        (66, 66, 3.5),
        (64, 65, 3.6),
        (62, 63, 3.7),
        (61, 61, 3.8),
        (59, 60, 3.9),
        (57, 58, 4.0),
        (55, 56, 4.1),
        (54, 54, 4.2),
        (52, 53, 4.3),
        (50, 51, 4.4),
        (49, 49, 4.5),
        (47, 48, 4.6),
        (45, 46, 4.7),
        (43, 44, 4.8),
        (41, 42, 4.9),
        (38, 40, 5.0),
        (36, 37, 5.1),
        (34, 35, 5.2),
        (32, 33, 5.3),
        (30, 31, 5.4),
        (29, 29, 5.5),
        (23, 28, 5.6),
        (17, 22, 5.7),
        (12, 16, 5.8),
        (6, 11, 5.9),
    ];

    #[test]
    fn test_ihk_table_matches_published_key_for_every_point() {
        let mut covered = [false; 101];
        for &(start, end, grade) in &IHK_ROWS {
            for p in start..=end {
                assert_eq!(
                    grade_for_ihk(p),
                    grade,
                    "points {} should map to {}",
                    p,
                    grade
                );
                covered[p as usize] = true;
            }
        }
        // 0..=5 fall through to 6.0, completing the domain.
        for p in 0..=5 {
            assert_eq!(grade_for_ihk(p), 6.0);
            covered[p as usize] = true;
        }
        assert!(covered.iter().all(|&c| c), "table rows must cover 0..=100");
    }

    #[test]
    fn test_ihk_is_deterministic() {
        for p in 0..=100 {
            assert_eq!(grade_for_ihk(p), grade_for_ihk(p));
        }
    }

    #[test]
    fn test_ihk_clamps_out_of_range_points() {
        assert_eq!(grade_for_ihk(101), 1.0);
        assert_eq!(grade_for_ihk(u32::MAX), 1.0);
    }

    #[test]
    fn test_ihk_best_and_worst() {
        assert_eq!(grade_for_ihk(100), 1.0);
        assert_eq!(grade_for_ihk(57), 4.0);
        assert_eq!(grade_for_ihk(0), 6.0);
    }

    #[test]
    fn test_custom_endpoints() {
        assert_eq!(grade_for_custom(20, 20), 1.0);
        assert_eq!(grade_for_custom(0, 20), 6.0);
        assert_eq!(grade_for_custom(7, 7), 1.0);
        assert_eq!(grade_for_custom(0, 7), 6.0);
    }

    #[test]
    fn test_custom_linear_formula() {
        // 15/20 = 75% -> 5 * 25 / 100 + 1 = 2.25
        assert_eq!(grade_for_custom(15, 20), 2.25);
        // 30/60 = 50% -> 3.5
        assert_eq!(grade_for_custom(30, 60), 3.5);
    }

    #[test]
    fn test_custom_stays_in_range_for_valid_input() {
        for max in 1..=40 {
            for p in 0..=max {
                let g = grade_for_custom(p, max);
                assert!((1.0..=6.0).contains(&g), "{}/{} gave {}", p, max, g);
            }
        }
    }

    #[test]
    fn test_custom_zero_max_is_nan() {
        assert!(grade_for_custom(10, 0).is_nan());
    }

    #[test]
    fn test_scaled_ihk_matches_plain_key_at_max_100() {
        for p in 0..=100 {
            assert_eq!(grade_for_ihk_scaled(p, 100), grade_for_ihk(p));
        }
    }

    #[test]
    fn test_scaled_ihk_truncates_percentage() {
        // 2/3 = 66.66% -> truncates to 66 points -> 3.5 (67 would be 3.4)
        assert_eq!(grade_for_ihk_scaled(2, 3), 3.5);
    }

    #[test]
    fn test_scaled_ihk_zero_max_is_nan() {
        assert!(grade_for_ihk_scaled(10, 0).is_nan());
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(15, 20), Some(75.0));
        assert_eq!(percentage_of(0, 20), Some(0.0));
        assert_eq!(percentage_of(10, 0), None);
    }

    #[test]
    fn test_round_to_tenth_half_away_from_zero() {
        assert_eq!(round_to_tenth(2.25), 2.3);
        assert_eq!(round_to_tenth(1.55), 1.6);
        assert_eq!(round_to_tenth(1.449), 1.4);
        assert_eq!(round_to_tenth(4.0), 4.0);
    }

    #[test]
    fn test_evaluate_ihk() {
        let input = CalculationInput {
            mode: ScoringMode::Ihk,
            points: 100,
            max_points: None,
        };
        let result = evaluate(&input);
        assert_eq!(result.value, 1.0);
        assert_eq!(result.label, Label::Excellent);
    }

    #[test]
    fn test_evaluate_ihk_scaled() {
        let input = CalculationInput {
            mode: ScoringMode::Ihk,
            points: 30,
            max_points: Some(60),
        };
        // 50% -> 50 points -> 4.4
        assert_eq!(evaluate(&input).value, 4.4);
    }

    #[test]
    fn test_evaluate_custom() {
        let input = CalculationInput {
            mode: ScoringMode::Custom,
            points: 15,
            max_points: Some(20),
        };
        let result = evaluate(&input);
        assert_eq!(result.value, 2.25);
        assert_eq!(result.label, Label::Good);
    }
}
