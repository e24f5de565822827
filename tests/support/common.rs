#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Path to the compiled rulekit binary under test.
pub fn rulekit_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rulekit"))
}

/// The checkout root; doubles as the package root for most tests.
pub fn checkout_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Bytes of a bundled guide, for byte-exactness assertions.
pub fn bundled_bytes(file_name: &str) -> Vec<u8> {
    fs::read(checkout_root().join("guides").join(file_name)).expect("bundled guide readable")
}

pub fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// A scratch destination directory with pre-wired rulekit invocations.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("allocating scratch workspace")?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn installed(&self, file_name: &str) -> PathBuf {
        self.path().join(file_name)
    }

    /// Sorted file names currently present in the workspace.
    pub fn listing(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for dir_entry in fs::read_dir(self.path())? {
            names.push(dir_entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    /// A rulekit command rooted in this workspace with the package root
    /// pinned to the checkout.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(rulekit_binary());
        cmd.current_dir(self.path())
            .env("RULEKIT_ROOT", checkout_root())
            .env_remove("RULEKIT_LOG");
        cmd
    }

    /// Run with flags and a closed stdin.
    pub fn run(&self, args: &[&str]) -> Result<Output> {
        self.command()
            .args(args)
            .stdin(Stdio::null())
            .output()
            .context("executing rulekit")
    }

    /// Run with the given bytes piped to stdin (interactive answers).
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Result<Output> {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("spawning rulekit")?;
        child
            .stdin
            .take()
            .expect("piped stdin")
            .write_all(input.as_bytes())
            .context("writing interactive answers")?;
        child.wait_with_output().context("waiting for rulekit")
    }
}

/// Build a standalone package root containing only the given guide files.
pub fn fixture_root(files: &[(&str, &str)]) -> Result<TempDir> {
    let root = TempDir::new().context("allocating fixture root")?;
    fs::create_dir(root.path().join("guides"))?;
    for (file_name, contents) in files {
        fs::write(root.path().join("guides").join(file_name), contents)?;
    }
    Ok(root)
}
