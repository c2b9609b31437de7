//! Core data model types for coursetrack.
//!
//! These are the fundamental types used to represent graded assignments,
//! their categories, and the outcomes derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GradeError;
use crate::policy;

/// Assignment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Formative assessment, contributes to the 60 point pool.
    #[serde(rename = "FA")]
    Formative,
    /// Summative assessment, contributes to the 40 point pool.
    #[serde(rename = "SA")]
    Summative,
}

impl Category {
    /// Short code used for input and display.
    pub fn code(self) -> &'static str {
        match self {
            Category::Formative => "FA",
            Category::Summative => "SA",
        }
    }

    /// Points shared among all assignments of this category.
    pub fn pool(self) -> f64 {
        match self {
            Category::Formative => policy::FORMATIVE_POOL,
            Category::Summative => policy::SUMMATIVE_POOL,
        }
    }

    /// Category total required to progress.
    pub fn pass_threshold(self) -> f64 {
        match self {
            Category::Formative => policy::FORMATIVE_PASS_THRESHOLD,
            Category::Summative => policy::SUMMATIVE_PASS_THRESHOLD,
        }
    }

    /// All categories, in display order.
    pub fn all() -> [Category; 2] {
        [Category::Formative, Category::Summative]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = GradeError;

    /// Only the exact codes `FA` and `SA` are accepted. Callers that want
    /// lenient input normalize it first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FA" => Ok(Category::Formative),
            "SA" => Ok(Category::Summative),
            other => Err(GradeError::InvalidCategory(other.to_string())),
        }
    }
}

/// A single graded assignment.
///
/// Records are only created through [`GradeCalculator`](crate::calculator::GradeCalculator),
/// which validates the score first. The weight starts at zero and is
/// overwritten every time weights are calculated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    name: String,
    category: Category,
    score: f64,
    weight: f64,
}

impl Assignment {
    /// Build a record, rejecting scores outside `[0, 100]`.
    pub(crate) fn new(
        name: impl Into<String>,
        category: Category,
        score: f64,
    ) -> Result<Self, GradeError> {
        if !(policy::MIN_SCORE..=policy::MAX_SCORE).contains(&score) {
            return Err(GradeError::ScoreOutOfRange(score));
        }
        Ok(Self {
            name: name.into(),
            category,
            score,
            weight: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Share of the category pool assigned by the last weight calculation.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Contribution of this assignment to its category total.
    pub fn weighted_score(&self) -> f64 {
        if self.weight > 0.0 {
            self.score * self.weight / 100.0
        } else {
            0.0
        }
    }
}

/// Transcript sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse a direction keyword. Only `desc` (any case) selects descending
    /// order; every other value falls back to ascending.
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

/// Per-category sum of weighted scores.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub formative: f64,
    pub summative: f64,
}

impl Totals {
    /// Total for a single category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Formative => self.formative,
            Category::Summative => self.summative,
        }
    }
}

impl From<Totals> for (f64, f64) {
    fn from(t: Totals) -> Self {
        (t.formative, t.summative)
    }
}

/// Progression decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Progression {
    Pass,
    Retake,
}

impl Progression {
    /// Fixed human-readable outcome message.
    pub fn message(self) -> &'static str {
        match self {
            Progression::Pass => policy::PASS_MESSAGE,
            Progression::Retake => policy::RETAKE_MESSAGE,
        }
    }
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
