//! Atomic byte sink for output files.
//!
//! Output is written to a temporary file next to the destination and only
//! renamed over it by [`AtomicFile::commit`]. An operation that fails part
//! way leaves the destination untouched, and the temporary file is removed
//! when the [`AtomicFile`] is dropped without being committed.

use crate::error::{HufpakError, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// A destination file that appears only once it is complete.
///
/// # Example
///
/// ```no_run
/// use hufpak_core::sink::AtomicFile;
/// use std::io::Write;
///
/// let mut sink = AtomicFile::create("output.huf")?;
/// sink.write_all(b"payload")?;
/// sink.commit(true)?;
/// # Ok::<(), hufpak_core::HufpakError>(())
/// ```
#[derive(Debug)]
pub struct AtomicFile {
    /// Final destination path.
    path: PathBuf,
    /// Temporary sibling being written.
    temp_path: PathBuf,
    /// Buffered handle on the temporary file; `None` once committed.
    writer: Option<BufWriter<File>>,
}

impl AtomicFile {
    /// Start writing a new file that will replace `path` on commit.
    ///
    /// # Errors
    ///
    /// Returns [`HufpakError::SinkUnavailable`] if the temporary file cannot
    /// be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let temp_path = temp_path_for(&path);
        let file =
            File::create(&temp_path).map_err(|e| HufpakError::sink_unavailable(&path, e))?;

        Ok(Self {
            path,
            temp_path,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush the output, optionally fsync it, and rename it over the
    /// destination.
    ///
    /// # Errors
    ///
    /// Returns [`HufpakError::SinkUnavailable`] if flushing, syncing or
    /// renaming fails. The temporary file is removed in that case.
    pub fn commit(mut self, sync: bool) -> Result<()> {
        let fail = |e| HufpakError::sink_unavailable(&self.path, e);

        let writer = self
            .writer
            .take()
            .ok_or_else(|| fail(io::Error::other("sink already committed")))?;
        let file = writer.into_inner().map_err(|e| fail(e.into_error()))?;
        if sync {
            file.sync_all().map_err(fail)?;
        }
        drop(file);

        fs::rename(&self.temp_path, &self.path).map_err(fail)?;
        Ok(())
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.writer
            .as_mut()
            .ok_or_else(|| io::Error::other("sink already committed"))
    }
}

impl Write for AtomicFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer()?.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.writer()?.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }
}

impl Drop for AtomicFile {
    fn drop(&mut self) {
        // Uncommitted or failed commit: discard the partial output.
        if self.temp_path.exists() {
            self.writer.take();
            let _ = fs::remove_file(&self.temp_path);
        }
    }
}

/// `dir/.name.hufpak-<pid>.tmp` for destination `dir/name`.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.hufpak-{}.tmp", name, std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dest(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hufpak_sink_test_{}", name))
    }

    #[test]
    fn test_commit_replaces_destination() {
        let path = temp_dest("commit");
        fs::write(&path, b"old contents that are longer").unwrap();

        let mut sink = AtomicFile::create(&path).unwrap();
        sink.write_all(b"new").unwrap();
        // Destination is untouched until commit.
        assert_eq!(fs::read(&path).unwrap(), b"old contents that are longer");
        sink.commit(true).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
        assert!(!temp_path_for(&path).exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_drop_without_commit_discards() {
        let path = temp_dest("discard");
        let _ = fs::remove_file(&path);

        {
            let mut sink = AtomicFile::create(&path).unwrap();
            sink.write_all(b"partial").unwrap();
            assert!(temp_path_for(&path).exists());
        }

        assert!(!path.exists());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_missing_directory() {
        let path = std::env::temp_dir()
            .join("hufpak_sink_test_no_such_dir")
            .join("out.huf");
        let err = AtomicFile::create(&path).unwrap_err();
        assert!(matches!(err, HufpakError::SinkUnavailable { .. }));
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/data/report.txt"));
        assert_eq!(temp.parent(), Some(Path::new("/data")));
        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".report.txt.hufpak-"));
        assert!(name.ends_with(".tmp"));
    }
}
