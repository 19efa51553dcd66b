//! Shared test infrastructure for integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Isolated config and applications directories for one `crescent` run.
pub struct TestFixture {
    _root: TempDir,
    pub config_dir: PathBuf,
    pub applications_dir: PathBuf,
}

impl TestFixture {
    pub fn empty() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let config_dir = root.path().join("config").join("crescent");
        let applications_dir = root
            .path()
            .join("share")
            .join("applications")
            .join("crescent");
        Self {
            _root: root,
            config_dir,
            applications_dir,
        }
    }

    pub fn write_config(&self, file_name: &str, contents: &str) {
        write_file(&self.config_dir.join(file_name), contents);
    }

    pub fn write_output(&self, file_name: &str, contents: &str) {
        write_file(&self.applications_dir.join(file_name), contents);
    }

    pub fn read_output(&self, file_name: &str) -> String {
        fs::read_to_string(self.applications_dir.join(file_name)).expect("read output file")
    }

    /// Sorted file names in the applications directory.
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = match fs::read_dir(&self.applications_dir) {
            Ok(entries) => entries
                .map(|entry| {
                    entry
                        .expect("dir entry")
                        .file_name()
                        .to_string_lossy()
                        .to_string()
                })
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }

    /// Run the binary with explicit directories and a scrubbed log filter.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_crescent"))
            .args(args)
            .arg("--config-dir")
            .arg(&self.config_dir)
            .arg("--applications-dir")
            .arg(&self.applications_dir)
            .env_remove("RUST_LOG")
            .output()
            .expect("run crescent")
    }
}

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(path, contents).expect("write file");
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
