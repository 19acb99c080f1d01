use crate::error::{DownloadError, DownloadResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Where a finished archive ends up.
pub trait DownloadSink: Send + Sync {
    fn save(&self, file_name: &str, bytes: &[u8]) -> DownloadResult<PathBuf>;
}

/// Saves archives into a directory, overwriting a previous file of the same name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> DownloadResult<PathBuf> {
        if !self.directory.is_dir() {
            return Err(DownloadError::MissingDirectory(self.directory.clone()));
        }

        let target = self.directory.join(file_name);
        let partial = self.directory.join(format!(".{}.part", file_name));

        // The final name only ever refers to a complete archive.
        if let Err(source) = fs::write(&partial, bytes) {
            let _ = fs::remove_file(&partial);
            return Err(DownloadError::Write {
                path: partial,
                source,
            });
        }
        if let Err(source) = fs::rename(&partial, &target) {
            let _ = fs::remove_file(&partial);
            return Err(DownloadError::Write {
                path: target,
                source,
            });
        }

        log::info!("Saved {} bytes to {}", bytes.len(), target.display());
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_writes_fixed_name() {
        let dir = TempDir::new().unwrap();
        let sink = DirectorySink::new(dir.path());

        let path = sink.save("translated_files.zip", b"PK\x03\x04").unwrap();

        assert_eq!(path, dir.path().join("translated_files.zip"));
        assert_eq!(fs::read(&path).unwrap(), b"PK\x03\x04");
        // no temporary file left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let sink = DirectorySink::new(dir.path());

        sink.save("translated_files.zip", b"old").unwrap();
        let path = sink.save("translated_files.zip", b"new").unwrap();

        assert_eq!(fs::read(path).unwrap(), b"new");
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let sink = DirectorySink::new(dir.path().join("nope"));

        assert!(matches!(
            sink.save("translated_files.zip", b"x"),
            Err(DownloadError::MissingDirectory(_))
        ));
    }
}
