//! The `coursetrack run` command.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;

use coursetrack_core::report::ProgressReport;
use coursetrack_core::sheet::parse_sheet;
use coursetrack_core::SortOrder;

use crate::config::load_config_from;
use crate::summary::{category_table, write_results};

pub fn execute(
    sheet_path: PathBuf,
    order: Option<String>,
    format: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let order = order.unwrap_or(config.default_order);
    let format = format.unwrap_or(config.default_format);
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format: '{format}' (expected text or json)"
    );

    let sheet = parse_sheet(&sheet_path)?;
    let (mut calc, problems) = sheet.to_calculator();
    for p in &problems {
        tracing::warn!("skipping entry {} ({}): {}", p.index + 1, p.name, p.error);
    }
    tracing::info!(
        "loaded {} assignment(s) from {}",
        calc.len(),
        sheet_path.display()
    );

    calc.calculate_weights();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if format == "json" {
        calc.sort_by_score(SortOrder::parse_lenient(&order));
    } else {
        if let Some(student) = &sheet.student {
            writeln!(out, "Student: {student}")?;
        }
        write_results(&calc, &mut out)?;
        calc.display_transcript(&order, &mut out)?;
        writeln!(out, "\n{}", category_table(&calc))?;
    }

    let report = ProgressReport::from_calculator(&calc, sheet.student.clone());
    if format == "json" {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}
