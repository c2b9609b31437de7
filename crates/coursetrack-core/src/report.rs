//! Progress report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculator::GradeCalculator;
use crate::model::{Assignment, Category, Progression, Totals};

/// Snapshot of a grading session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Student name, when known.
    #[serde(default)]
    pub student: Option<String>,
    /// Weighted totals per category.
    pub totals: Totals,
    /// Progression decision.
    pub outcome: Progression,
    /// Human-readable form of `outcome`.
    pub outcome_message: String,
    /// Formative assignments eligible for resubmission.
    pub resubmissions: Vec<AssignmentRow>,
    /// Every assignment, in the calculator's storage order.
    pub assignments: Vec<AssignmentRow>,
}

/// One assignment as it appears in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub name: String,
    pub category: Category,
    pub score: f64,
    pub weight: f64,
    pub weighted_score: f64,
}

impl From<&Assignment> for AssignmentRow {
    fn from(a: &Assignment) -> Self {
        Self {
            name: a.name().to_string(),
            category: a.category(),
            score: a.score(),
            weight: a.weight(),
            weighted_score: a.weighted_score(),
        }
    }
}

impl ProgressReport {
    /// Capture the calculator's current state.
    ///
    /// Weights are read as they are; call `calculate_weights` first.
    pub fn from_calculator(calc: &GradeCalculator, student: Option<String>) -> Self {
        let outcome = calc.check_progression();
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            student,
            totals: calc.calculate_totals(),
            outcome,
            outcome_message: outcome.message().to_string(),
            resubmissions: calc
                .resubmission_eligibility()
                .into_iter()
                .map(AssignmentRow::from)
                .collect(),
            assignments: calc.assignments().iter().map(AssignmentRow::from).collect(),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ProgressReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
