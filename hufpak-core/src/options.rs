//! I/O options for file-level compression and decompression.

/// How sources are read and sinks are committed.
///
/// # Example
///
/// ```
/// use hufpak_core::IoOptions;
///
/// let options = IoOptions::new().mmap(false).sync(false);
/// assert!(!options.use_mmap());
/// assert!(!options.use_sync());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoOptions {
    /// Memory-map the source instead of reading it into a buffer.
    mmap: bool,
    /// Prefault the mapping when memory-mapping.
    populate: bool,
    /// Fsync the temporary output before renaming it into place.
    sync: bool,
}

impl Default for IoOptions {
    fn default() -> Self {
        Self {
            mmap: cfg!(feature = "mmap"),
            populate: false,
            sync: true,
        }
    }
}

impl IoOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffered reads and no fsync, for tests and throwaway outputs.
    pub const BUFFERED: Self = Self {
        mmap: false,
        populate: false,
        sync: false,
    };

    /// Set whether to memory-map the source.
    ///
    /// Ignored when the `mmap` feature is disabled.
    pub fn mmap(mut self, mmap: bool) -> Self {
        self.mmap = mmap;
        self
    }

    /// Set whether to prefault the mapping.
    pub fn populate(mut self, populate: bool) -> Self {
        self.populate = populate;
        self
    }

    /// Set whether to fsync the output before it replaces the destination.
    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// Whether the source will be memory-mapped.
    pub fn use_mmap(&self) -> bool {
        self.mmap && cfg!(feature = "mmap")
    }

    /// Whether the mapping will be prefaulted.
    pub fn use_populate(&self) -> bool {
        self.populate
    }

    /// Whether the output is synced before commit.
    pub fn use_sync(&self) -> bool {
        self.sync
    }
}
