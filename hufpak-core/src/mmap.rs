//! Memory-mapped input files.
//!
//! A read-only mapping gives the codec one `&[u8]` view of the whole input,
//! which it walks twice when compressing (count, then encode) without
//! re-reading the file.
//!
//! # Safety
//!
//! Memory-mapped files can be dangerous if the underlying file is modified by
//! another process while mapped. Only read-only mappings are created here.

use memmap2::Mmap;
use std::fs::File;
use std::io;

/// A read-only memory-mapped file.
///
/// # Example
///
/// ```no_run
/// use hufpak_core::mmap::MappedFile;
/// use std::fs::File;
///
/// let file = File::open("input.bin")?;
/// let mapped = MappedFile::map(&file, false)?;
/// println!("{} bytes", mapped.len());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct MappedFile {
    /// The memory-mapped file data.
    mmap: Mmap,
}

impl MappedFile {
    /// Map an open file read-only.
    ///
    /// With `populate` set, the operating system is asked to prefault the
    /// whole mapping up front.
    ///
    /// # Errors
    ///
    /// Returns the raw [`io::Error`] if mapping fails; callers attach the
    /// path.
    pub fn map(file: &File, populate: bool) -> io::Result<Self> {
        let mmap = if populate {
            // SAFETY: Read-only mapping, caller responsible for file stability
            unsafe { memmap2::MmapOptions::new().populate().map(file)? }
        } else {
            // SAFETY: Read-only mapping, caller responsible for file stability
            unsafe { Mmap::map(file)? }
        };
        Ok(Self { mmap })
    }

    /// Get the total length of the mapped file.
    #[inline]
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    /// Check if the mapped file is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    /// Get the entire mapped contents.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.mmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    /// Create a temporary file with the given contents and return its path.
    fn create_temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hufpak_mmap_test_{}", name));
        let mut file = File::create(&path).expect("Failed to create temp file");
        file.write_all(contents)
            .expect("Failed to write to temp file");
        file.sync_all().expect("Failed to sync temp file");
        path
    }

    fn remove_temp_file(path: &Path) {
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_map_and_read() {
        let contents = b"Hello, memory-mapped world!";
        let path = create_temp_file("read_test", contents);

        let file = File::open(&path).expect("File open failed");
        let mapped = MappedFile::map(&file, false).expect("Mapping failed");
        assert_eq!(mapped.len(), contents.len());
        assert_eq!(mapped.as_slice(), contents);

        remove_temp_file(&path);
    }

    #[test]
    fn test_map_populated() {
        let contents: Vec<u8> = (0..=255).cycle().take(64 * 1024).collect();
        let path = create_temp_file("populate_test", &contents);

        let file = File::open(&path).expect("File open failed");
        let mapped = MappedFile::map(&file, true).expect("Mapping failed");
        assert_eq!(mapped.as_slice(), &contents[..]);

        remove_temp_file(&path);
    }

    #[test]
    fn test_empty_file() {
        let path = create_temp_file("empty_test", b"");

        let file = File::open(&path).expect("File open failed");
        let mapped = MappedFile::map(&file, false).expect("Mapping failed");
        assert!(mapped.is_empty());
        assert_eq!(mapped.as_slice(), b"");

        remove_temp_file(&path);
    }
}
