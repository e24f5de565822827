//! Install bundled AI-assistant guidance files into the current directory.
//!
//! With selection flags the run is non-interactive: conflicts are skipped
//! unless `--force` is given. With no selection flags a numbered menu is
//! shown, and existing files prompt for confirmation before being
//! overwritten.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use log::debug;
use rulekit::catalog::GuideEntry;
use rulekit::install::{self, Outcome, Summary};
use rulekit::{find_package_root, selection};
use std::env;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "rulekit")]
#[command(about = "Install AI-assistant guidance files into the current project")]
struct Cli {
    /// Install every guide.
    #[arg(long)]
    all: bool,

    /// Install CLAUDE.md, the core assistant working agreement.
    #[arg(long)]
    claude: bool,

    /// Install BACKEND.md, the backend service and API rules.
    #[arg(long)]
    backend: bool,

    /// Install FRONTEND.md, the frontend and UI component rules.
    #[arg(long)]
    frontend: bool,

    /// Overwrite existing files without asking.
    #[arg(long)]
    force: bool,
}

impl Cli {
    fn selected_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.claude {
            keys.push("claude");
        }
        if self.backend {
            keys.push("backend");
        }
        if self.frontend {
            keys.push("frontend");
        }
        keys
    }

    /// A run without selection flags is the interactive one.
    fn is_interactive(&self) -> bool {
        !self.all && self.selected_keys().is_empty()
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RULEKIT_LOG", "warn"))
        .init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let package_root = find_package_root()?;
    debug!("package root: {}", package_root.display());
    let dest = env::current_dir().context("resolving the current directory")?;

    let selection = if cli.is_interactive() {
        let stdin = io::stdin();
        selection::prompt_for_selection(&mut stdin.lock(), &mut io::stdout())?
    } else {
        selection::from_keys(cli.all, &cli.selected_keys())
    };

    if selection.is_empty() {
        println!("Nothing to install.");
        return Ok(());
    }

    let mut plan = install::plan(&selection, &dest, cli.force);
    if !plan.conflicts.is_empty() {
        if cli.is_interactive() {
            let stdin = io::stdin();
            let approved = selection::prompt_for_overwrite(
                &mut stdin.lock(),
                &mut io::stdout(),
                &plan.conflicts,
            )?;
            if !approved {
                println!("Aborted; no files were written.");
                return Ok(());
            }
            plan.promote_conflicts();
        }
        // Non-interactive conflicts stay out of the write set and are
        // reported as skipped below.
    }

    let mut outcomes = Vec::with_capacity(selection.len());
    for entry in &selection {
        let outcome = if plan.is_write(entry) {
            install::install_entry(&package_root, &dest, entry)
        } else {
            Outcome::Skipped("already exists (use --force to overwrite)".to_string())
        };
        print_status(entry, &outcome);
        outcomes.push(outcome);
    }

    let summary = Summary::tally(&outcomes);
    println!("{summary}");
    if summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn print_status(entry: &GuideEntry, outcome: &Outcome) {
    match outcome {
        Outcome::Created => {
            println!("  {} {} created", style("+").green(), entry.file_name);
        }
        Outcome::Overwritten => {
            println!("  {} {} overwritten", style("~").green(), entry.file_name);
        }
        Outcome::Skipped(reason) => {
            println!(
                "  {} {} skipped: {reason}",
                style("-").yellow(),
                entry.file_name
            );
        }
        Outcome::Failed(err) => {
            println!("  {} {} failed: {err}", style("x").red(), entry.file_name);
        }
    }
}
