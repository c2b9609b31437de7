//! TOML assignment sheet parser.
//!
//! A sheet lists a student's assignments so they can be graded in one
//! batch instead of being typed in at the prompt.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::calculator::GradeCalculator;
use crate::error::GradeError;

/// Intermediate TOML structure for parsing sheet files.
#[derive(Debug, Deserialize)]
struct TomlSheetFile {
    #[serde(default)]
    student: Option<TomlStudent>,
    #[serde(default)]
    assignments: Vec<TomlAssignment>,
}

#[derive(Debug, Deserialize)]
struct TomlStudent {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlAssignment {
    name: String,
    category: String,
    score: f64,
}

/// A parsed, not yet validated, assignment sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Optional student name from the `[student]` table.
    pub student: Option<String>,
    /// Entries in file order.
    pub entries: Vec<SheetEntry>,
}

/// One `[[assignments]]` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetEntry {
    pub name: String,
    /// Category code, trimmed and uppercased.
    pub category: String,
    pub score: f64,
}

/// An entry the calculator refused.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetProblem {
    /// Zero-based position of the entry in the sheet.
    pub index: usize,
    /// Assignment name as written in the sheet.
    pub name: String,
    pub error: GradeError,
}

/// Parse a single TOML file into a `Sheet`.
pub fn parse_sheet(path: &Path) -> Result<Sheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read sheet file: {}", path.display()))?;

    parse_sheet_str(&content, path)
}

/// Parse a TOML string into a `Sheet` (useful for testing).
pub fn parse_sheet_str(content: &str, source_path: &Path) -> Result<Sheet> {
    let parsed: TomlSheetFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let entries = parsed
        .assignments
        .into_iter()
        .map(|a| SheetEntry {
            name: a.name,
            category: a.category.trim().to_uppercase(),
            score: a.score,
        })
        .collect();

    Ok(Sheet {
        student: parsed.student.map(|s| s.name),
        entries,
    })
}

impl Sheet {
    /// Add every entry to `calc`, returning the entries that were rejected.
    ///
    /// Rejected entries are skipped; the rest are recorded in sheet order.
    pub fn load_into(&self, calc: &mut GradeCalculator) -> Vec<SheetProblem> {
        let mut problems = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            if let Err(error) = calc.add(entry.name.as_str(), &entry.category, entry.score) {
                tracing::debug!("rejected sheet entry {} ({}): {}", index + 1, entry.name, error);
                problems.push(SheetProblem {
                    index,
                    name: entry.name.clone(),
                    error,
                });
            }
        }
        problems
    }

    /// Build a fresh calculator from this sheet.
    pub fn to_calculator(&self) -> (GradeCalculator, Vec<SheetProblem>) {
        let mut calc = GradeCalculator::new();
        let problems = self.load_into(&mut calc);
        (calc, problems)
    }
}

/// Report every entry that would be rejected, without keeping the result.
pub fn validate_sheet(sheet: &Sheet) -> Vec<SheetProblem> {
    let (_, problems) = sheet.to_calculator();
    problems
}
