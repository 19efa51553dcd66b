//! CLI argument parsing for the desktop entry workflow.
//!
//! The CLI stays thin: it resolves settings and hands off to the workflow
//! functions, which own all behavior.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "crescent",
    version,
    about = "Generate desktop entries from JSON application definitions and templates",
    after_help = "Commands:\n  init                  Create the config directory and empty apps/templates files\n  update                Resolve entries, remove leftovers, write .desktop files\n  check                 Validate and resolve every application without writing\n  list                  Print resolved entries\n  show <NAME>           Print the .desktop content of one application\n\nExamples:\n  crescent init\n  crescent update --dry-run\n  crescent update --no-notify\n  crescent list --json\n  crescent show Firefox",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Directory holding apps.json and templates.json
    #[arg(long, value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Directory receiving generated .desktop files
    #[arg(long, value_name = "DIR", global = true)]
    pub applications_dir: Option<PathBuf>,

    /// Log debug detail (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level workflow commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Init(InitArgs),
    Update(UpdateArgs),
    Check(CheckArgs),
    List(ListArgs),
    Show(ShowArgs),
}

/// Init command inputs.
#[derive(Parser, Debug)]
#[command(about = "Create the config directory and empty config files")]
pub struct InitArgs {}

/// Update command inputs.
#[derive(Parser, Debug)]
#[command(about = "Resolve entries, remove leftovers, and write .desktop files")]
pub struct UpdateArgs {
    /// Log planned deletions and writes without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the desktop database update after writing
    #[arg(long, conflicts_with = "notify_command")]
    pub no_notify: bool,

    /// Command run with the applications directory as its last argument
    #[arg(long, value_name = "CMD")]
    pub notify_command: Option<String>,
}

/// Check command inputs.
#[derive(Parser, Debug)]
#[command(about = "Validate and resolve every application without writing")]
pub struct CheckArgs {}

/// List command inputs.
#[derive(Parser, Debug)]
#[command(about = "Print resolved entries")]
pub struct ListArgs {
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Show command inputs.
#[derive(Parser, Debug)]
#[command(about = "Print the .desktop content of one application")]
pub struct ShowArgs {
    /// Application name as written in apps.json
    #[arg(value_name = "NAME")]
    pub name: String,
}
