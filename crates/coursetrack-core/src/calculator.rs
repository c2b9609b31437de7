//! Grade calculator.
//!
//! Owns the assignment list for a single session, distributes each
//! category's point pool across its assignments, and derives totals,
//! the progression decision, and the resubmission list from it.

use std::cmp::Ordering;
use std::io::{self, Write};

use crate::error::GradeError;
use crate::model::{Assignment, Category, Progression, SortOrder, Totals};
use crate::policy;
use crate::transcript;

/// In-memory grade book for one student.
#[derive(Debug, Clone, Default)]
pub struct GradeCalculator {
    assignments: Vec<Assignment>,
}

impl GradeCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assignment from raw category text.
    ///
    /// The category must be exactly `FA` or `SA` and the score must lie in
    /// `[0, 100]`. On failure nothing is recorded. Weights are not
    /// recalculated.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        category: &str,
        score: f64,
    ) -> Result<&Assignment, GradeError> {
        let category: Category = category.parse()?;
        self.add_typed(name, category, score)
    }

    /// Record an assignment whose category is already known.
    pub fn add_typed(
        &mut self,
        name: impl Into<String>,
        category: Category,
        score: f64,
    ) -> Result<&Assignment, GradeError> {
        let assignment = Assignment::new(name, category, score)?;
        tracing::debug!(
            name = assignment.name(),
            category = %category,
            score,
            "recorded assignment"
        );
        let index = self.assignments.len();
        self.assignments.push(assignment);
        Ok(&self.assignments[index])
    }

    /// Assignments in current storage order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Recompute every weight from scratch.
    ///
    /// Each category pool is split in proportion to raw score. A category
    /// whose scores sum to zero (or that has no assignments) leaves all of
    /// its weights at zero.
    pub fn calculate_weights(&mut self) {
        for category in Category::all() {
            let total: f64 = self
                .assignments
                .iter()
                .filter(|a| a.category() == category)
                .map(Assignment::score)
                .sum();

            let pool = category.pool();
            for a in self
                .assignments
                .iter_mut()
                .filter(|a| a.category() == category)
            {
                let weight = if total > 0.0 {
                    pool * a.score() / total
                } else {
                    0.0
                };
                a.set_weight(weight);
            }

            tracing::debug!(
                category = %category,
                score_sum = total,
                pool,
                "weights calculated"
            );
        }
    }

    /// Sum of weighted scores per category.
    pub fn calculate_totals(&self) -> Totals {
        let sum_for = |category: Category| -> f64 {
            self.assignments
                .iter()
                .filter(|a| a.category() == category)
                .map(Assignment::weighted_score)
                .sum()
        };
        Totals {
            formative: sum_for(Category::Formative),
            summative: sum_for(Category::Summative),
        }
    }

    /// Pass when both category totals reach their thresholds.
    pub fn check_progression(&self) -> Progression {
        let totals = self.calculate_totals();
        let passed = Category::all()
            .into_iter()
            .all(|c| totals.get(c) >= c.pass_threshold());
        if passed {
            Progression::Pass
        } else {
            Progression::Retake
        }
    }

    /// Formative assignments scoring below the resubmission cutoff, in
    /// storage order.
    pub fn resubmission_eligibility(&self) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| {
                a.category() == Category::Formative && a.score() < policy::RESUBMISSION_CUTOFF
            })
            .collect()
    }

    /// Reorder storage by raw score. Equal scores keep their relative order.
    pub fn sort_by_score(&mut self, order: SortOrder) {
        self.assignments.sort_by(|a, b| compare_scores(a, b, order));
    }

    /// Assignments ordered by raw score, leaving storage untouched.
    pub fn sorted_view(&self, order: SortOrder) -> Vec<&Assignment> {
        let mut view: Vec<&Assignment> = self.assignments.iter().collect();
        view.sort_by(|a, b| compare_scores(a, b, order));
        view
    }

    /// Sort storage in place and write the transcript to `out`.
    ///
    /// `order` is matched case-insensitively; only `desc` sorts descending.
    /// The new order persists for every later call.
    pub fn display_transcript<W: Write + ?Sized>(
        &mut self,
        order: &str,
        out: &mut W,
    ) -> io::Result<()> {
        let order = SortOrder::parse_lenient(order);
        self.sort_by_score(order);
        transcript::render(&self.assignments, out)
    }
}

fn compare_scores(a: &Assignment, b: &Assignment, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => a.score().total_cmp(&b.score()),
        SortOrder::Descending => b.score().total_cmp(&a.score()),
    }
}
