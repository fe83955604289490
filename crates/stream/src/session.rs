use crate::{READ_BAND_END, READ_BAND_START, StreamError};

/// One in-flight transfer: source name, probed size, bytes absorbed so
/// far and the accumulated raw buffer.
///
/// The session is single-owner and mutated only by the read loop; it is
/// discarded after the buffer is handed to the encode step or on error.
pub struct TransferSession {
    file_name: String,
    total_bytes: u64,
    bytes_read: u64,
    buffer: Vec<u8>,
}

impl TransferSession {
    /// Creates an empty session for a file of `total_bytes`.
    pub fn new(file_name: impl Into<String>, total_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            total_bytes,
            bytes_read: 0,
            buffer: Vec::with_capacity(total_bytes as usize),
        }
    }

    /// Appends a chunk to the accumulated buffer.
    ///
    /// Returns the read-phase percentage after absorbing the chunk.
    /// Fails with [`StreamError::SourceChanged`] if the chunk would push
    /// `bytes_read` past the probed size, i.e. the file grew mid-read.
    pub fn absorb(&mut self, chunk: &[u8]) -> Result<u8, StreamError> {
        let new_total = self.bytes_read + chunk.len() as u64;
        if new_total > self.total_bytes {
            return Err(StreamError::SourceChanged {
                expected: self.total_bytes,
                actual: new_total,
            });
        }
        self.buffer.extend_from_slice(chunk);
        self.bytes_read = new_total;
        Ok(self.read_percent())
    }

    /// Maps bytes read onto the 10–60% read band.
    ///
    /// `floor(10 + ratio * 50)`; an empty file is already at the band
    /// ceiling (no division by zero).
    pub fn read_percent(&self) -> u8 {
        if self.total_bytes == 0 {
            return READ_BAND_END;
        }
        let span = (READ_BAND_END - READ_BAND_START) as u64;
        READ_BAND_START + (self.bytes_read * span / self.total_bytes) as u8
    }

    /// Returns `true` once exactly the probed size has been absorbed.
    pub fn is_complete(&self) -> bool {
        self.bytes_read == self.total_bytes
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Consumes the session, yielding the accumulated raw bytes.
    pub fn into_buffer(self) -> Vec<u8> {
        self.buffer
    }
}
