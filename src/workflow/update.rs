//! Workflow update step: resolve, reconcile, write, notify.
use crate::cli::UpdateArgs;
use crate::repository::{Repository, UpdateOptions};
use crate::settings::{NotifyCommand, Settings};
use anyhow::Result;

/// Run a full sync of the applications directory.
pub fn run_update(settings: Settings, args: &UpdateArgs) -> Result<()> {
    let notify = if args.no_notify {
        None
    } else if let Some(command_line) = args.notify_command.as_deref() {
        Some(NotifyCommand::parse(command_line)?)
    } else {
        settings.notify.clone()
    };
    let repository = Repository::new(settings.with_notify(notify));
    let report = repository.update(UpdateOptions {
        dry_run: args.dry_run,
    })?;

    let dir = repository.settings().applications_dir.display();
    if args.dry_run {
        println!(
            "Dry run: would delete {} and write {} entries in {dir}",
            report.deleted.len(),
            report.written.len()
        );
    } else {
        println!(
            "Deleted {} and wrote {} entries in {dir}",
            report.deleted.len(),
            report.written.len()
        );
        if report.notified {
            println!("Desktop database updated");
        }
    }
    Ok(())
}
