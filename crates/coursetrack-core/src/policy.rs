//! Fixed grading policy.
//!
//! Formative work shares a 60 point pool and summative work a 40 point pool.
//! A student progresses when each category total reaches half of its pool.

/// Points distributed across all formative assignments.
pub const FORMATIVE_POOL: f64 = 60.0;

/// Points distributed across all summative assignments.
pub const SUMMATIVE_POOL: f64 = 40.0;

/// Minimum formative total required to progress.
pub const FORMATIVE_PASS_THRESHOLD: f64 = FORMATIVE_POOL / 2.0;

/// Minimum summative total required to progress.
pub const SUMMATIVE_PASS_THRESHOLD: f64 = SUMMATIVE_POOL / 2.0;

/// Formative assignments scoring strictly below this may be resubmitted.
pub const RESUBMISSION_CUTOFF: f64 = 50.0;

/// Lowest accepted raw score.
pub const MIN_SCORE: f64 = 0.0;

/// Highest accepted raw score.
pub const MAX_SCORE: f64 = 100.0;

/// Message shown when the student progresses.
pub const PASS_MESSAGE: &str = "Congratulations! You passed! :)";

/// Message shown when the student has to retake the assessment.
pub const RETAKE_MESSAGE: &str = "Sorry, you need to retake the assessment. :(";
