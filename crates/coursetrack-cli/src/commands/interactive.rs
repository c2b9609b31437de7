//! The `coursetrack interactive` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use coursetrack_core::GradeCalculator;

use crate::config::load_config_from;
use crate::summary::write_results;

const INVALID_INPUT: &str = "Error:Invalid input, Please try again.";

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock(), &config.default_order)
}

/// Drive one prompt session: collect assignments until `end` or EOF, then
/// print results and the transcript.
pub fn run_session<R, W>(input: &mut R, out: &mut W, default_order: &str) -> Result<()>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    writeln!(
        out,
        "\n--- Welcome to Course Progress Tracker Application! ---\n"
    )?;

    let mut calc = GradeCalculator::new();

    loop {
        let Some(name) = prompt(
            input,
            out,
            "Enter assignment name (or type 'end' to calculate transcript)\n-> : ",
        )?
        else {
            break;
        };
        if name.eq_ignore_ascii_case("end") {
            break;
        }

        let Some(category) = prompt(
            input,
            out,
            "Enter type (FA) Formative / (SA) Summative\n-> : ",
        )?
        else {
            break;
        };
        let category = category.to_uppercase();

        let Some(score) = prompt(input, out, "Enter score (0-100)\n-> : ")? else {
            break;
        };
        let Ok(score) = score.parse::<f64>() else {
            tracing::debug!("rejected score input: {score}");
            writeln!(out, "{INVALID_INPUT}")?;
            continue;
        };

        if let Err(e) = calc.add(name.as_str(), &category, score) {
            tracing::debug!("rejected assignment {name}: {e}");
            writeln!(out, "{INVALID_INPUT}")?;
        }
    }

    tracing::info!("grading {} assignment(s)", calc.len());
    calc.calculate_weights();
    write_results(&calc, out)?;

    let order = prompt(
        input,
        out,
        "\nHow would you like the transcript printed?\nAscending order (asc) / Descending order (desc): ",
    )?
    .filter(|s| !s.is_empty())
    .unwrap_or_else(|| default_order.to_string());

    calc.display_transcript(&order, out)?;
    out.flush()?;
    Ok(())
}

/// Print `message`, then read one trimmed line. `None` means end of input.
fn prompt<R, W>(input: &mut R, out: &mut W, message: &str) -> io::Result<Option<String>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
