//! Read-only workflow steps: check, list, show.
use crate::cli::{ListArgs, ShowArgs};
use crate::repository::Repository;
use crate::settings::Settings;
use anyhow::{anyhow, Context, Result};

/// Validate and resolve every application; any error fails the command.
pub fn run_check(settings: Settings) -> Result<()> {
    let entries = Repository::new(settings).resolve_entries()?;
    println!("{} applications resolved", entries.len());
    Ok(())
}

/// Print one summary line per entry, or a JSON array with `--json`.
pub fn run_list(settings: Settings, args: &ListArgs) -> Result<()> {
    let entries = Repository::new(settings).resolve_entries()?;
    if args.json {
        let summaries: Vec<_> = entries.iter().map(|entry| entry.summary()).collect();
        let json = serde_json::to_string_pretty(&summaries).context("serialize entries")?;
        println!("{json}");
        return Ok(());
    }
    for entry in &entries {
        println!("{entry}");
    }
    Ok(())
}

/// Print the rendered file content of the application named `args.name`.
pub fn run_show(settings: Settings, args: &ShowArgs) -> Result<()> {
    let entries = Repository::new(settings).resolve_entries()?;
    let entry = entries
        .iter()
        .find(|entry| entry.application() == args.name)
        .ok_or_else(|| anyhow!("no application named {:?}", args.name))?;
    println!("{}", entry.render());
    Ok(())
}
