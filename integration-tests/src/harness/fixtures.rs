use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary directory of JSON Lines log files.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Writes one JSON object per line.
    pub fn write_records(&self, name: &str, records: &[Value]) -> PathBuf {
        let contents: String = records.iter().map(|r| format!("{r}\n")).collect();
        self.write_raw(name, &contents)
    }

    pub fn write_raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write log fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}
