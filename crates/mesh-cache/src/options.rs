use zip::CompressionMethod;

/// How field entries are stored in the archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// Raw bytes. Fastest to reload.
    #[default]
    Stored,
    /// Deflate. Smaller files at the cost of decode time.
    Deflated,
}

impl Compression {
    pub(crate) fn method(self) -> CompressionMethod {
        match self {
            Compression::Stored => CompressionMethod::Stored,
            Compression::Deflated => CompressionMethod::Deflated,
        }
    }
}

/// Settings for writing cache files. Reading needs none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheOptions {
    pub compression: Compression,
}

impl CacheOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }
}
