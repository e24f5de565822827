//! Selection resolution: flags, the interactive menu, and confirmations.
//!
//! All parsing lives in pure functions over `&str`; the two prompt
//! functions are generic over `BufRead`/`Write` so tests can drive them
//! with byte slices instead of a terminal. Every function here guarantees
//! its result is a subset of the catalog, de-duplicated, in catalog order.

use crate::catalog::{GUIDES, GuideEntry};
use anyhow::{Context, Result};
use console::style;
use std::io::{BufRead, Write};

/// Map explicit key selections to catalog entries.
///
/// `all` dominates any per-key selection. Unknown keys are dropped rather
/// than errored.
pub fn from_keys(all: bool, keys: &[&str]) -> Vec<&'static GuideEntry> {
    if all {
        return GUIDES.iter().collect();
    }
    GUIDES
        .iter()
        .filter(|entry| keys.contains(&entry.key))
        .collect()
}

/// Parse one menu answer into catalog entries.
///
/// The answer is split on commas and whitespace. Valid tokens are 1-based
/// entry indices, the index of the trailing "all" menu row, or the word
/// `all` (any case). Everything else is dropped silently.
pub fn parse_choices(input: &str) -> Vec<&'static GuideEntry> {
    let mut chosen = vec![false; GUIDES.len()];
    for token in input.replace(',', " ").split_whitespace() {
        if token.eq_ignore_ascii_case("all") {
            return GUIDES.iter().collect();
        }
        let Ok(index) = token.parse::<usize>() else {
            continue;
        };
        if index == GUIDES.len() + 1 {
            return GUIDES.iter().collect();
        }
        if (1..=GUIDES.len()).contains(&index) {
            chosen[index - 1] = true;
        }
    }
    GUIDES
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| chosen[position].then_some(entry))
        .collect()
}

/// A trimmed, case-insensitive `y` or `yes` approves; everything else,
/// including an empty answer, declines.
pub fn parse_yes(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Print the numbered catalog menu and read one selection line.
pub fn prompt_for_selection(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> Result<Vec<&'static GuideEntry>> {
    writeln!(writer, "Select the guides to install:")?;
    for (position, entry) in GUIDES.iter().enumerate() {
        writeln!(
            writer,
            "  {}. {} {}",
            position + 1,
            style(format!("{:<12}", entry.file_name)).bold(),
            entry.description
        )?;
    }
    writeln!(writer, "  {}. all of the above", GUIDES.len() + 1)?;
    write!(writer, "Enter numbers separated by commas (or \"all\"): ")?;
    writer.flush()?;
    Ok(parse_choices(&read_answer(reader)?))
}

/// List the conflicting files and ask whether to overwrite them.
pub fn prompt_for_overwrite(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    conflicts: &[&GuideEntry],
) -> Result<bool> {
    writeln!(writer, "The following files already exist:")?;
    for entry in conflicts {
        writeln!(writer, "  {}", style(entry.file_name).yellow())?;
    }
    write!(writer, "Overwrite them? [y/N] ")?;
    writer.flush()?;
    Ok(parse_yes(&read_answer(reader)?))
}

// A closed input stream reads as an empty answer, never as an error.
fn read_answer(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("reading interactive answer")?;
    Ok(line)
}
