//! Bounded-memory file streaming for browser downloads.
//!
//! Reads a kernel-side file in fixed-size chunks, accumulates the bytes,
//! and base64-encodes them in one pass at the end, reporting monotonic
//! progress along the way. The result is a payload plus MIME type that a
//! thin front-end adapter can hand to the browser as a `data:` URI.

use std::path::PathBuf;

mod chunked;
mod encode;
mod mime;
mod session;

pub use chunked::ChunkReader;
pub use encode::{EncodedFile, stream_encode};
pub use mime::{FALLBACK_MIME, guess_mime};
pub use session::TransferSession;

/// Default chunk size: 1 MiB.
///
/// Large enough to keep syscall overhead negligible, small enough that a
/// single chunk buffer never matters next to the accumulated payload.
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Read-phase progress band: the read loop maps onto 10–60%.
///
/// The band below 10% is the MIME probe, 60–90% is the encode step, and
/// the 90–100% tail belongs to the destination handoff.
pub const READ_BAND_START: u8 = 10;
/// Upper bound of the read-phase progress band.
pub const READ_BAND_END: u8 = 60;
/// Reported just before the one-pass base64 encode.
pub const ENCODE_START: u8 = 70;
/// Reported once the encoded payload is ready for handoff.
pub const ENCODE_DONE: u8 = 90;

/// Errors produced while streaming and encoding a file.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("source file changed during read: expected {expected} bytes, read {actual}")]
    SourceChanged { expected: u64, actual: u64 },

    #[error("encoding failed: {0}")]
    Encoding(String),
}
