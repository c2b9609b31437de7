//! Fixed-width transcript rendering.

use std::io::{self, Write};

use crate::model::Assignment;

const NAME_WIDTH: usize = 15;
const CATEGORY_WIDTH: usize = 10;
const NUMBER_WIDTH: usize = 8;

/// Write a transcript table for `records` in the order given.
pub fn render<'a, W, I>(records: I, out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Assignment>,
{
    writeln!(out, "\n--- Transcript ---\n")?;
    writeln!(
        out,
        "{:<NAME_WIDTH$} {:<CATEGORY_WIDTH$} {:<NUMBER_WIDTH$} {:<NUMBER_WIDTH$}",
        "Assignment", "Type", "Score", "Weight"
    )?;
    for a in records {
        writeln!(
            out,
            "{:<NAME_WIDTH$} {:<CATEGORY_WIDTH$} {:<NUMBER_WIDTH$.1} {:<NUMBER_WIDTH$.1}",
            a.name(),
            a.category().code(),
            a.score(),
            a.weight()
        )?;
    }
    Ok(())
}
