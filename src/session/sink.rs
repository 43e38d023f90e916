//! Export destinations

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where serialized exports are written
pub trait ExportSink {
    /// Store `bytes` under `file_name`, returning where they ended up
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the bytes could not be written.
    fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf>;
}

/// Writes exports into a directory, replacing any file of the same name
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(file_name);
        let partial = self.dir.join(format!(".{file_name}.partial"));

        // Written beside the target, then renamed over it; the partial file
        // is removed on any failure.
        let result = fs::write(&partial, bytes).and_then(|()| fs::rename(&partial, &path));
        if let Err(e) = result {
            let _ = fs::remove_file(&partial);
            return Err(e);
        }

        Ok(path)
    }
}
