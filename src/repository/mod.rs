//! Entry repository: loads config documents, resolves entries, and syncs the
//! applications directory.
mod notify;
mod reconcile;
mod store;

use notify::notify_database;
use reconcile::{apply_sync, plan_sync};
use store::{read_document, write_stub};

use crate::entry::{Application, ResolvedEntry};
use crate::error::CrescentError;
use crate::merge::resolve;
use crate::settings::Settings;
use crate::template::{Template, TemplateStore};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Options for one `update` run.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Plan and log only; touch nothing and skip notification.
    pub dry_run: bool,
}

/// What an `update` run did (or would do, for a dry run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub deleted: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    pub notified: bool,
}

/// Files created by `init`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub created: Vec<PathBuf>,
}

/// Owns the settings of one run and drives load → resolve → sync.
#[derive(Debug, Clone)]
pub struct Repository {
    settings: Settings,
}

impl Repository {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Create the config directory, `{}` stubs for missing documents, and the
    /// applications directory. Existing files are never overwritten.
    pub fn init(&self) -> Result<InitReport> {
        let mut report = InitReport::default();
        fs::create_dir_all(&self.settings.config_dir)
            .with_context(|| format!("create {}", self.settings.config_dir.display()))?;
        for path in [self.settings.apps_path(), self.settings.templates_path()] {
            if write_stub(&path)? {
                tracing::info!(path = %path.display(), "created config stub");
                report.created.push(path);
            }
        }
        fs::create_dir_all(&self.settings.applications_dir)
            .with_context(|| format!("create {}", self.settings.applications_dir.display()))?;
        Ok(report)
    }

    /// Load and validate `apps.json`, in document order.
    pub fn load_applications(&self) -> Result<Vec<Application>> {
        let document = read_document(&self.settings.apps_path())?;
        document
            .iter()
            .map(|(name, raw)| {
                Application::from_raw(name, raw).with_context(|| format!("application \"{name}\""))
            })
            .collect()
    }

    /// Load and validate `templates.json`.
    pub fn load_templates(&self) -> Result<TemplateStore> {
        let path = self.settings.templates_path();
        let document = read_document(&path)?;
        let mut store = TemplateStore::default();
        for (name, raw) in &document {
            let template = Template::from_raw(name, raw)
                .with_context(|| format!("template \"{name}\" in {}", path.display()))?;
            store.add(template);
        }
        Ok(store)
    }

    /// Resolve every application against the templates.
    ///
    /// The first failing application aborts the whole batch. Two entries that
    /// map to the same file name are rejected.
    pub fn resolve_entries(&self) -> Result<Vec<ResolvedEntry>> {
        let templates = self.load_templates()?;
        let applications = self.load_applications()?;
        let entries = applications
            .iter()
            .map(|application| {
                resolve(application, &templates)
                    .with_context(|| format!("application \"{}\"", application.name()))
            })
            .collect::<Result<Vec<_>>>()?;
        check_file_names(&entries)?;
        tracing::debug!(
            applications = entries.len(),
            templates = templates.len(),
            "resolved entries"
        );
        Ok(entries)
    }

    /// Resolve, reconcile, write, and notify.
    pub fn update(&self, options: UpdateOptions) -> Result<UpdateReport> {
        let entries = self.resolve_entries()?;
        let dir = &self.settings.applications_dir;
        let plan = plan_sync(dir, &entries)?;
        let mut report = UpdateReport {
            deleted: plan.leftovers.clone(),
            written: plan.writes.iter().map(|write| write.path.clone()).collect(),
            notified: false,
        };
        if options.dry_run {
            for path in &plan.leftovers {
                tracing::info!(path = %path.display(), "would delete leftover entry");
            }
            for write in &plan.writes {
                tracing::info!(path = %write.path.display(), "would write desktop entry");
            }
            return Ok(report);
        }

        apply_sync(dir, &plan)?;
        if let Some(command) = &self.settings.notify {
            notify_database(command, dir)?;
            report.notified = true;
        }
        Ok(report)
    }
}

fn check_file_names(entries: &[ResolvedEntry]) -> Result<(), CrescentError> {
    let mut seen: BTreeMap<String, &ResolvedEntry> = BTreeMap::new();
    for entry in entries {
        let file_name = entry.file_name();
        if let Some(first) = seen.get(&file_name) {
            return Err(CrescentError::FilenameCollision {
                file_name,
                first: first.application().to_string(),
                second: entry.application().to_string(),
            });
        }
        seen.insert(file_name, entry);
    }
    Ok(())
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
