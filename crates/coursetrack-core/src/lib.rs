//! coursetrack-core — Grade calculation engine.
//!
//! This crate holds the assignment model, the weighting and progression
//! rules, and the sheet and report formats that the coursetrack CLI
//! builds on.

pub mod calculator;
pub mod error;
pub mod model;
pub mod policy;
pub mod report;
pub mod sheet;
pub mod transcript;

pub use calculator::GradeCalculator;
pub use error::GradeError;
pub use model::{Assignment, Category, Progression, SortOrder, Totals};
