//! Persists browser-uploaded file payloads on the kernel side.
//!
//! The front end delivers uploaded files as name + base64 payload pairs;
//! this crate validates the names, writes the bytes under an explicit
//! destination directory and reports per-file progress. There is no
//! ambient configuration: the destination is always an argument.

mod incoming;
mod save;
mod validation;

pub use incoming::IncomingFile;
pub use save::save_files;
pub use validation::validate_file_name;

/// Errors produced while saving uploaded files.
#[derive(Debug, thiserror::Error)]
pub enum ReceiveError {
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("base64 decode failed: {0}")]
    Decode(#[from] base64::DecodeError),
}
