pub mod engine;
pub mod label;
pub mod types;
pub mod validation;

pub use engine::{
    evaluate, grade_for_custom, grade_for_ihk, grade_for_ihk_scaled, percentage_of,
    round_to_tenth,
};
pub use label::{label_for, Label};
pub use types::{CalculationInput, GradeResult, ScoringMode};
pub use validation::validate;
