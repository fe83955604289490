use std::io::Read;
use std::path::Path;

use crate::{DEFAULT_CHUNK_SIZE, StreamError};

/// Reads a file sequentially in fixed-size chunks.
///
/// Every chunk except the last is exactly `chunk_size` bytes; the reader
/// keeps reading past the probed size if the file grew, so the caller can
/// detect a source that changed underneath it.
#[derive(Debug)]
pub struct ChunkReader {
    file: std::fs::File,
    chunk_size: usize,
    file_size: u64,
    bytes_read: u64,
}

impl ChunkReader {
    /// Opens `path` for chunked reading and probes its total size.
    ///
    /// If `chunk_size` is 0, [`DEFAULT_CHUNK_SIZE`] (1 MiB) is used.
    /// A missing path or a non-regular file yields [`StreamError::NotFound`].
    pub fn new(path: &Path, chunk_size: usize) -> Result<Self, StreamError> {
        let file = match std::fs::File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StreamError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(StreamError::NotFound(path.to_path_buf()));
        }
        let chunk_size = if chunk_size == 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            chunk_size
        };
        Ok(Self {
            file,
            chunk_size,
            file_size: metadata.len(),
            bytes_read: 0,
        })
    }

    /// Reads the next chunk. Returns `None` at EOF.
    pub fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, StreamError> {
        let mut buf = Vec::with_capacity(self.chunk_size);
        // `take` + `read_to_end` fills the chunk completely even when the
        // underlying reader returns short reads.
        let n = (&mut self.file)
            .take(self.chunk_size as u64)
            .read_to_end(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.bytes_read += n as u64;
        Ok(Some(buf))
    }

    /// Total file size in bytes, as probed at open time.
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Bytes remaining relative to the size probe (0 if already past it).
    pub fn remaining(&self) -> u64 {
        self.file_size.saturating_sub(self.bytes_read)
    }
}
