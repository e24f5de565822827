//! Shared plumbing for the rulekit installer.
//!
//! The library owns everything the binary needs to be testable without a
//! terminal: the guide catalog, selection parsing, the install decision
//! procedure, and discovery of the package root that holds the bundled
//! guide sources. The binary in `src/bin/rulekit.rs` is a thin pipeline
//! over these pieces.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod install;
pub mod selection;

pub use catalog::{GUIDES, GuideEntry};
pub use install::{InstallError, InstallPlan, Outcome, Summary};

/// File whose presence marks a directory as the rulekit package root.
const ROOT_SENTINEL: &str = "guides/CLAUDE.md";
const ENV_PACKAGE_ROOT: &str = "RULEKIT_ROOT";

fn is_package_root(candidate: &Path) -> bool {
    candidate.join(ROOT_SENTINEL).is_file()
}

fn package_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_package_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_package_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the directory holding the bundled `guides/`.
///
/// Checked in order: the `RULEKIT_ROOT` environment variable, an upward
/// search from the running executable, then the compile-time hint captured
/// by the build script. Invalid candidates fall through to the next source
/// rather than erroring.
pub fn find_package_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(ENV_PACKAGE_ROOT) {
        if let Some(root) = package_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("RULEKIT_ROOT_HINT") {
        if let Some(root) = package_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!("Unable to locate the rulekit package root. Set RULEKIT_ROOT to the rulekit checkout.");
}
