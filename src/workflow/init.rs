//! Workflow init step.
use crate::repository::Repository;
use crate::settings::Settings;
use anyhow::Result;

/// Create the config directory, empty documents, and the applications directory.
pub fn run_init(settings: Settings) -> Result<()> {
    let repository = Repository::new(settings);
    let report = repository.init()?;
    for path in &report.created {
        println!("Created {}", path.display());
    }
    if report.created.is_empty() {
        println!(
            "Config already present in {}",
            repository.settings().config_dir.display()
        );
    }
    println!(
        "Entries will be written to {}",
        repository.settings().applications_dir.display()
    );
    Ok(())
}
