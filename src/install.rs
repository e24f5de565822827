//! The install decision procedure: plan, apply, summarize.
//!
//! Planning splits a selection into entries that can be written immediately
//! and conflicts that need a decision (a confirmation or `--force`).
//! Application copies bundled bytes verbatim, one entry at a time; a
//! failure is captured in that entry's outcome and never aborts the batch.

use crate::catalog::GuideEntry;
use log::debug;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Why a single guide could not be installed.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The bundled source is unreadable. The destination is fine; the
    /// rulekit installation itself is incomplete or corrupted.
    #[error("reading bundled guide {path}: {source}")]
    SourceRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The destination rejected the write (permissions, a directory in the
    /// way, disk full).
    #[error("writing {path}: {source}")]
    DestinationWrite {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Per-entry result of one install attempt.
#[derive(Debug)]
pub enum Outcome {
    Created,
    Overwritten,
    Skipped(String),
    Failed(InstallError),
}

/// Split of a selection into entries to write now and conflicts awaiting a
/// decision.
#[derive(Debug, Default)]
pub struct InstallPlan<'a> {
    pub to_write: Vec<&'a GuideEntry>,
    pub conflicts: Vec<&'a GuideEntry>,
}

impl<'a> InstallPlan<'a> {
    /// Fold approved conflicts into the write set.
    pub fn promote_conflicts(&mut self) {
        self.to_write.append(&mut self.conflicts);
    }

    pub fn is_write(&self, entry: &GuideEntry) -> bool {
        self.to_write.iter().any(|chosen| chosen.key == entry.key)
    }
}

/// Check each selected entry against the destination directory.
///
/// With `force` every entry lands in `to_write`; otherwise entries whose
/// file name already exists become conflicts. Purely a filesystem-state
/// function: same state and flags, same split.
pub fn plan<'a>(selection: &[&'a GuideEntry], dest: &Path, force: bool) -> InstallPlan<'a> {
    let mut plan = InstallPlan::default();
    for entry in selection {
        let target = dest.join(entry.file_name);
        if !force && target.exists() {
            debug!("{} already exists, needs a decision", target.display());
            plan.conflicts.push(entry);
        } else {
            plan.to_write.push(entry);
        }
    }
    plan
}

/// Copy one bundled guide into the destination directory, replacing any
/// existing file.
pub fn install_entry(package_root: &Path, dest: &Path, entry: &GuideEntry) -> Outcome {
    let source = package_root.join(entry.source);
    let target = dest.join(entry.file_name);

    let bytes = match fs::read(&source) {
        Ok(bytes) => bytes,
        Err(err) => {
            return Outcome::Failed(InstallError::SourceRead {
                path: source.display().to_string(),
                source: err,
            });
        }
    };

    let existed = target.exists();
    match fs::write(&target, bytes) {
        Ok(()) if existed => Outcome::Overwritten,
        Ok(()) => Outcome::Created,
        Err(err) => Outcome::Failed(InstallError::DestinationWrite {
            path: target.display().to_string(),
            source: err,
        }),
    }
}

/// Aggregate counts for the final summary line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub created: usize,
    pub overwritten: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn tally<'a>(outcomes: impl IntoIterator<Item = &'a Outcome>) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Created => summary.created += 1,
                Outcome::Overwritten => summary.overwritten += 1,
                Outcome::Skipped(_) => summary.skipped += 1,
                Outcome::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} overwritten, {} skipped, {} failed",
            self.created, self.overwritten, self.skipped, self.failed
        )
    }
}
