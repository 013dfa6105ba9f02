//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe log sink that automatically rotates the
//! file when it exceeds a size threshold, keeping a fixed number of backups.
//! This prevents unbounded disk usage when logging is left enabled.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// `&FileWriter` implements [`io::Write`], so an `Arc<FileWriter>` can be
/// handed straight to `tracing_subscriber::fmt::layer().with_writer(..)`.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size exceeds the limit, rotate:
///    - Rename current file to `<name>.<unix_nanos>`
///    - Open a new empty file on the next write
///    - Remove the oldest backups beyond the retention limit
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits (10 MB, 3 backups).
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit rotation limits.
    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    fn write_record(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        file.write_all(buf)?;
        file.flush()
    }

    /// Closes the handle and rotates if the file has outgrown the limit.
    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();

        let mut backup_name = self.file_path.as_os_str().to_os_string();
        backup_name.push(format!(".{stamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup_name))?;
        }

        self.cleanup_old_backups()
    }

    /// Removes backups beyond the retention limit, oldest first.
    ///
    /// Backups are ordered by their numeric suffix. Individual deletion errors
    /// are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = match self.file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let Some(file_name) = self.file_path.file_name().and_then(|s| s.to_str()) else {
            return Err(io::Error::new(io::ErrorKind::Other, "Invalid file name"));
        };
        let prefix = format!("{file_name}.");

        let mut backups: Vec<(u128, PathBuf)> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name();
                let stamp = name.to_str()?.strip_prefix(&prefix)?.parse::<u128>().ok()?;
                Some((stamp, entry.path()))
            })
            .collect();

        backups.sort_by(|a, b| b.0.cmp(&a.0));

        for (_, old_backup) in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_record(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn backups_in(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("picker.log."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.log");
        let writer = FileWriter::new(path.clone());

        (&writer).write_all(b"first\n").unwrap();
        (&writer).write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn rotates_and_caps_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.log");
        let writer = FileWriter::with_limits(path.clone(), 8, 2);

        for i in 0..8 {
            (&writer).write_all(format!("line number {i}\n").as_bytes()).unwrap();
        }

        assert!(backups_in(dir.path()) <= 2);
        assert!(backups_in(dir.path()) >= 1);
        assert_eq!(fs::read_to_string(path).unwrap(), "line number 7\n");
    }
}
