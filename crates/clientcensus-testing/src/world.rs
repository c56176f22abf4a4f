//! TestWorld pattern for CLI integration tests.
//!
//! Provides an isolated working directory holding config files, and
//! configures a binary command to run inside it.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Port nothing listens on, so connection attempts fail fast
pub const UNREACHABLE_PORT: u16 = 1;

/// Isolated test environment.
///
/// # Example
/// ```no_run
/// use clientcensus_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let config = world.write_db_config("config.json", "postgresql").unwrap();
/// assert!(config.exists());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Root of the environment, also the command's working directory
    pub fn cwd(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.cwd().join(name)
    }

    /// Write `contents` verbatim to `name`
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write a JSON config pointing at a local database that is not running
    pub fn write_db_config(&self, name: &str, db_type: &str) -> Result<PathBuf> {
        let config = serde_json::json!({
            "db": {
                "type": db_type,
                "host": "127.0.0.1",
                "port": UNREACHABLE_PORT,
                "name": "mattermost",
                "user": "mmuser",
                "password": "mostest",
            }
        });
        self.write_file(name, &serde_json::to_string_pretty(&config)?)
    }

    /// Run the command inside this environment with logging at defaults
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.cwd()).env_remove("RUST_LOG")
    }
}
