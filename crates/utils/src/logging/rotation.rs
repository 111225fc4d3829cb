//! Size-based log file rotation

use physocts_core::{Error, Result};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default maximum log file size before rotation (1MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;
/// Default number of backup files to keep
pub const DEFAULT_BACKUP_COUNT: usize = 5;

/// Appending file writer that rolls over once a write would push the file
/// past `max_size`.
///
/// Backups are named `<path>.1` (newest) through `<path>.<backup_count>`
/// (oldest). With `backup_count == 0` the file is truncated instead. A
/// `max_size` of zero disables rotation.
#[derive(Debug)]
pub struct RotatingFileWriter {
    path: PathBuf,
    max_size: u64,
    backup_count: usize,
    file: File,
    written: u64,
}

impl RotatingFileWriter {
    /// Open (or create) the log file, continuing from its current size
    pub fn open(path: impl Into<PathBuf>, max_size: u64, backup_count: usize) -> Result<Self> {
        let path = path.into();
        let file = open_append(&path)?;
        let written = file
            .metadata()
            .map_err(|e| Error::file_system(&path, "read log file metadata", e))?
            .len();

        Ok(Self {
            path,
            max_size,
            backup_count,
            file,
            written,
        })
    }

    /// Path of the live log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of backup number `index`
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn should_rotate(&self, incoming: usize) -> bool {
        self.max_size > 0 && self.written > 0 && self.written + incoming as u64 > self.max_size
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.backup_count == 0 {
            self.file = OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(&self.path)?;
        } else {
            for index in (1..self.backup_count).rev() {
                let older = self.backup_path(index);
                if older.exists() {
                    fs::rename(&older, self.backup_path(index + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
            self.file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
        }

        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.should_rotate(buf.len()) {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

pub(crate) fn open_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(Error::configuration(format!(
                "log file parent directory {} does not exist",
                parent.display()
            )));
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::file_system(path, "open log file", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rolls_over_into_numbered_backups() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.log");
        let mut writer = RotatingFileWriter::open(&path, 10, 2).unwrap();

        writer.write_all(b"first..\n").unwrap();
        writer.write_all(b"second.\n").unwrap();
        writer.write_all(b"third..\n").unwrap();
        writer.write_all(b"fourth.\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fourth.\n");
        assert_eq!(fs::read_to_string(writer.backup_path(1)).unwrap(), "third..\n");
        assert_eq!(fs::read_to_string(writer.backup_path(2)).unwrap(), "second.\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn test_zero_backups_truncates_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.log");
        let mut writer = RotatingFileWriter::open(&path, 6, 0).unwrap();

        writer.write_all(b"abcd\n").unwrap();
        writer.write_all(b"efgh\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "efgh\n");
        assert!(!writer.backup_path(1).exists());
    }

    #[test]
    fn test_resumes_from_existing_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.log");
        fs::write(&path, "12345678").unwrap();

        let mut writer = RotatingFileWriter::open(&path, 10, 1).unwrap();
        writer.write_all(b"xyz").unwrap();

        assert_eq!(fs::read_to_string(writer.backup_path(1)).unwrap(), "12345678");
        assert_eq!(fs::read_to_string(&path).unwrap(), "xyz");
    }

    #[test]
    fn test_missing_parent_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent").join("log.log");
        let err = RotatingFileWriter::open(&path, 10, 1).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
