use crate::settings::NotifyCommand;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Ask the desktop database tool to re-index `dir`.
///
/// A program that cannot be found or spawned is an error; a non-zero exit is
/// only logged.
pub fn notify_database(command: &NotifyCommand, dir: &Path) -> Result<()> {
    let program = which::which(&command.program)
        .with_context(|| format!("locate notify command {}", command.program))?;
    let status = Command::new(&program)
        .args(&command.args)
        .arg(dir)
        .status()
        .with_context(|| format!("run {}", program.display()))?;
    if status.success() {
        tracing::info!(program = %program.display(), dir = %dir.display(), "desktop database updated");
    } else {
        tracing::warn!(
            program = %program.display(),
            code = ?status.code(),
            "desktop database update exited unsuccessfully"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_program_is_an_error() {
        let command = NotifyCommand {
            program: "crescent-definitely-missing-notify-tool".to_string(),
            args: Vec::new(),
        };
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(notify_database(&command, dir.path()).is_err());
    }

    #[test]
    fn failing_exit_status_is_not_an_error() {
        if which::which("false").is_err() {
            return;
        }
        let command = NotifyCommand {
            program: "false".to_string(),
            args: Vec::new(),
        };
        let dir = tempfile::tempdir().expect("temp dir");
        notify_database(&command, dir.path()).expect("non-zero exit is logged only");
    }
}
