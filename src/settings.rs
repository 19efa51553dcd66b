//! Path and notification settings resolved once at startup.
//!
//! Environment lookups are passed in as a closure so resolution never reads
//! process-wide state on its own.
use anyhow::{anyhow, Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Directory name used under the config and applications roots.
pub const APP_DIR_NAME: &str = "crescent";
/// Command run against the applications directory after writing entries.
pub const DEFAULT_NOTIFY_PROGRAM: &str = "update-desktop-database";

pub const APPS_FILE: &str = "apps.json";
pub const TEMPLATES_FILE: &str = "templates.json";

/// External command invoked with the applications directory as last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl NotifyCommand {
    /// Split a shell-style command line into program and arguments.
    pub fn parse(command_line: &str) -> Result<Self> {
        let mut words = shell_words::split(command_line)
            .with_context(|| format!("parse notify command {command_line:?}"))?
            .into_iter();
        let program = words
            .next()
            .ok_or_else(|| anyhow!("notify command must not be empty"))?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }
}

impl Default for NotifyCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_NOTIFY_PROGRAM.to_string(),
            args: Vec::new(),
        }
    }
}

/// Everything the repository needs to locate its inputs and outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_dir: PathBuf,
    pub applications_dir: PathBuf,
    pub notify: Option<NotifyCommand>,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::resolve(process_env, dirs::home_dir)
    }

    /// Resolve default directories.
    ///
    /// Config: `$XDG_CONFIG_HOME`, then the legacy `$XDG_CONFIG_DIR`, then
    /// `$HOME/.config`. Applications: `$XDG_DATA_HOME/applications`, then
    /// `$HOME/.local/share/applications`. Empty variables count as unset.
    pub fn resolve<E, H>(env: E, home_fallback: H) -> Result<Self>
    where
        E: Fn(&str) -> Option<OsString>,
        H: FnOnce() -> Option<PathBuf>,
    {
        let var = |name: &str| env(name).filter(|value| !value.is_empty()).map(PathBuf::from);
        let home = var("HOME").or_else(home_fallback);
        let home_join = |parts: &[&str]| -> Result<PathBuf> {
            let home = home
                .as_deref()
                .ok_or_else(|| anyhow!("cannot determine home directory"))?;
            Ok(parts.iter().fold(home.to_path_buf(), |path, part| path.join(part)))
        };

        let config_root = match var("XDG_CONFIG_HOME").or_else(|| var("XDG_CONFIG_DIR")) {
            Some(path) => path,
            None => home_join(&[".config"])?,
        };
        let data_root = match var("XDG_DATA_HOME") {
            Some(path) => path,
            None => home_join(&[".local", "share"])?,
        };

        Ok(Self {
            config_dir: config_root.join(APP_DIR_NAME),
            applications_dir: data_root.join("applications").join(APP_DIR_NAME),
            notify: Some(NotifyCommand::default()),
        })
    }

    pub fn with_config_dir(mut self, dir: Option<&Path>) -> Self {
        if let Some(dir) = dir {
            self.config_dir = dir.to_path_buf();
        }
        self
    }

    pub fn with_applications_dir(mut self, dir: Option<&Path>) -> Self {
        if let Some(dir) = dir {
            self.applications_dir = dir.to_path_buf();
        }
        self
    }

    pub fn with_notify(mut self, notify: Option<NotifyCommand>) -> Self {
        self.notify = notify;
        self
    }

    pub fn apps_path(&self) -> PathBuf {
        self.config_dir.join(APPS_FILE)
    }

    pub fn templates_path(&self) -> PathBuf {
        self.config_dir.join(TEMPLATES_FILE)
    }
}

fn process_env(name: &str) -> Option<OsString> {
    std::env::var_os(name)
}
