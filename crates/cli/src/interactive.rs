//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Ask for confirmation before destructive role operations.

use anyhow::Result;
use std::io::{BufRead, Write};

/// Prompt the user for delete confirmation on stdin.
///
/// Returns `Ok(true)` only for an answer of `y` or `Y`.
pub fn confirm_delete(item_name: &str, item_type: &str) -> Result<bool> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    confirm_delete_with(item_name, item_type, &mut stdin.lock(), &mut stdout.lock())
}

fn confirm_delete_with<R: BufRead, W: Write>(
    item_name: &str,
    item_type: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    write!(
        output,
        "Are you sure you want to delete {} '{}'? [y/N] ",
        item_type, item_name
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if !answer.trim().eq_ignore_ascii_case("y") {
        writeln!(output, "Delete cancelled.")?;
        return Ok(false);
    }

    Ok(true)
}
