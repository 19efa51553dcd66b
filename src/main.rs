use anyhow::Result;
use clap::Parser;

mod cli;
mod entry;
mod error;
mod logging;
mod merge;
mod repository;
mod settings;
mod template;
mod workflow;

use cli::{Command, GlobalArgs, RootArgs};
use settings::{NotifyCommand, Settings};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    logging::init(args.global.verbose)?;
    let settings = resolve_settings(&args.global)?;

    match args.command {
        Command::Init(_) => workflow::run_init(settings),
        Command::Update(update) => workflow::run_update(settings, &update),
        Command::Check(_) => workflow::run_check(settings),
        Command::List(list) => workflow::run_list(settings, &list),
        Command::Show(show) => workflow::run_show(settings, &show),
    }
}

/// Explicit directories win; the environment is only consulted for the rest.
fn resolve_settings(global: &GlobalArgs) -> Result<Settings> {
    if let (Some(config_dir), Some(applications_dir)) =
        (&global.config_dir, &global.applications_dir)
    {
        return Ok(Settings {
            config_dir: config_dir.clone(),
            applications_dir: applications_dir.clone(),
            notify: Some(NotifyCommand::default()),
        });
    }
    Ok(Settings::from_env()?
        .with_config_dir(global.config_dir.as_deref())
        .with_applications_dir(global.applications_dir.as_deref()))
}
