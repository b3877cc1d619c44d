//! Byte sources for the codec.
//!
//! A [`SourceBytes`] is a read-only view of an input file that can be walked
//! any number of times. Compression walks it twice: once to count symbol
//! frequencies and once to emit codes.

#[cfg(feature = "mmap")]
use crate::mmap::MappedFile;
use crate::error::{HufpakError, Result};
use crate::options::IoOptions;
use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

/// The full contents of an input file.
#[derive(Debug)]
pub enum SourceBytes {
    /// Read-only memory mapping of the file.
    #[cfg(feature = "mmap")]
    Mapped(MappedFile),
    /// File contents read into memory.
    Buffered(Vec<u8>),
}

impl SourceBytes {
    /// Open `path` as configured by `options`.
    ///
    /// Empty files are always buffered, since there is nothing to map.
    ///
    /// # Errors
    ///
    /// Returns [`HufpakError::SourceUnavailable`] if the file cannot be
    /// opened, mapped or read.
    pub fn open(path: impl AsRef<Path>, options: &IoOptions) -> Result<Self> {
        let path = path.as_ref();
        let fail = |e| HufpakError::source_unavailable(path, e);

        let mut file = File::open(path).map_err(fail)?;
        let len = file.metadata().map_err(fail)?.len();

        if len > 0 && options.use_mmap() {
            if let Some(mapped) = Self::map(&file, options).map_err(fail)? {
                return Ok(mapped);
            }
        }

        let mut data = Vec::with_capacity(len as usize);
        file.read_to_end(&mut data).map_err(fail)?;
        Ok(Self::Buffered(data))
    }

    #[cfg(feature = "mmap")]
    fn map(file: &File, options: &IoOptions) -> io::Result<Option<Self>> {
        let mapped = MappedFile::map(file, options.use_populate())?;
        Ok(Some(Self::Mapped(mapped)))
    }

    #[cfg(not(feature = "mmap"))]
    fn map(_file: &File, _options: &IoOptions) -> io::Result<Option<Self>> {
        Ok(None)
    }

    /// Whether the source is memory-mapped.
    pub fn is_mapped(&self) -> bool {
        match self {
            #[cfg(feature = "mmap")]
            Self::Mapped(_) => true,
            Self::Buffered(_) => false,
        }
    }
}

impl Deref for SourceBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            #[cfg(feature = "mmap")]
            Self::Mapped(mapped) => mapped.as_slice(),
            Self::Buffered(data) => data,
        }
    }
}

impl AsRef<[u8]> for SourceBytes {
    fn as_ref(&self) -> &[u8] {
        self
    }
}
