//! Console rendering of grading results.

use std::io::{self, Write};

use comfy_table::{Cell, Table};

use coursetrack_core::{Category, GradeCalculator};

/// Print totals, the progression message, and the retake list.
pub fn write_results<W: Write + ?Sized>(calc: &GradeCalculator, out: &mut W) -> io::Result<()> {
    let totals = calc.calculate_totals();

    writeln!(out, "\n--- Results ---\n")?;
    writeln!(out, "Formative Total: {:.2}%", totals.formative)?;
    writeln!(out, "Summative Total: {:.2}%", totals.summative)?;
    writeln!(out, "{}", calc.check_progression())?;

    let resubmissions = calc.resubmission_eligibility();
    if resubmissions.is_empty() {
        writeln!(out, "\nGreat job! No retakes required.")?;
    } else {
        writeln!(out, "\nAssignments needed to Retake:")?;
        for a in resubmissions {
            writeln!(out, "- {}: {}%", a.name(), format_score(a.score()))?;
        }
    }

    Ok(())
}

/// Whole scores keep one decimal (`20.0`); others print as entered (`12.25`).
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        score.to_string()
    }
}

/// Per-category summary table.
pub fn category_table(calc: &GradeCalculator) -> Table {
    let totals = calc.calculate_totals();

    let mut table = Table::new();
    table.set_header(vec![
        "Category",
        "Assignments",
        "Total",
        "Pass Mark",
        "Pool",
        "Status",
    ]);

    for category in Category::all() {
        let count = calc
            .assignments()
            .iter()
            .filter(|a| a.category() == category)
            .count();
        let total = totals.get(category);
        let status = if total >= category.pass_threshold() {
            "met"
        } else {
            "below"
        };
        table.add_row(vec![
            Cell::new(category),
            Cell::new(count),
            Cell::new(format!("{total:.2}")),
            Cell::new(format!("{:.0}", category.pass_threshold())),
            Cell::new(format!("{:.0}", category.pool())),
            Cell::new(status),
        ]);
    }

    table
}
