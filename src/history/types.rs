use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::grading::{GradeResult, Label, ScoringMode};

/// Immutable snapshot of one completed calculation.
///
/// Identity is the `id` alone; two records with identical scores and grades
/// are still distinct entries (recomputing the same input twice is normal).
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub mode: ScoringMode,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_points: Option<u32>,
    pub grade: f64,
    pub label: Label,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Snapshot a finished calculation. The id and timestamp are assigned
    /// here and never change afterwards.
    pub fn new(
        mode: ScoringMode,
        points: u32,
        max_points: Option<u32>,
        result: &GradeResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            points,
            max_points,
            grade: result.value,
            label: result.label,
            created_at: Utc::now(),
        }
    }
}
