//! The `coursetrack validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(sheet_path: PathBuf) -> Result<()> {
    let sheet = coursetrack_core::sheet::parse_sheet(&sheet_path)?;

    match &sheet.student {
        Some(student) => println!(
            "Sheet: {} ({}, {} assignments)",
            sheet_path.display(),
            student,
            sheet.entries.len()
        ),
        None => println!(
            "Sheet: {} ({} assignments)",
            sheet_path.display(),
            sheet.entries.len()
        ),
    }

    let problems = coursetrack_core::sheet::validate_sheet(&sheet);
    for p in &problems {
        println!("  [#{} {}] ERROR: {}", p.index + 1, p.name, p.error);
    }

    if problems.is_empty() {
        println!("Sheet valid.");
    } else {
        println!("\n{} problem(s) found.", problems.len());
        std::process::exit(1);
    }

    Ok(())
}
