use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use notebridge_progress::ProgressUpdate;

use crate::chunked::ChunkReader;
use crate::mime::guess_mime;
use crate::session::TransferSession;
use crate::{ENCODE_DONE, ENCODE_START, READ_BAND_START, StreamError};

/// A fully encoded file, ready for destination handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedFile {
    /// File name component of the source path.
    pub file_name: String,
    /// Guessed MIME type (never empty; falls back to octet-stream).
    pub mime_type: String,
    /// Standard base64 encoding of the file's bytes.
    pub payload: String,
    /// Raw size of the source in bytes.
    pub size: u64,
}

/// Reads `path` in chunks of `chunk_size` bytes (0 selects the 1 MiB
/// default), accumulates the bytes and base64-encodes them in one pass.
///
/// Progress is emitted through `on_progress`: 10% after the MIME probe,
/// the 10–60% band during the read loop (one update per chunk,
/// non-decreasing), 70% before the encode and 90% once the payload is
/// ready. The 90–100% tail belongs to whoever hands the payload to its
/// destination.
///
/// On [`StreamError::NotFound`] nothing is emitted at all; any other
/// error aborts the transfer immediately and no partial payload is
/// returned. Memory during the read phase is bounded by one chunk buffer
/// plus the accumulated raw bytes; only the final encode step holds raw
/// and encoded copies at the same time.
pub fn stream_encode(
    path: &Path,
    chunk_size: usize,
    mut on_progress: impl FnMut(ProgressUpdate),
) -> Result<EncodedFile, StreamError> {
    // Existence check happens before the first sink update.
    let mut reader = ChunkReader::new(path, chunk_size)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime_type = guess_mime(path);
    let total = reader.file_size();
    debug!(file = %file_name, size = total, mime = mime_type, "starting stream encode");
    on_progress(ProgressUpdate::at(READ_BAND_START));

    let mut session = TransferSession::new(&file_name, total);
    while let Some(chunk) = reader.next_chunk()? {
        let percent = session.absorb(&chunk)?;
        on_progress(ProgressUpdate::at(percent));
    }
    // A truncated source reaches EOF early; surface it instead of handing
    // over a short payload.
    if !session.is_complete() {
        return Err(StreamError::SourceChanged {
            expected: total,
            actual: session.bytes_read(),
        });
    }

    on_progress(ProgressUpdate::at(ENCODE_START));
    let raw = session.into_buffer();
    let payload = STANDARD.encode(&raw);
    let expected_len = raw.len().div_ceil(3) * 4;
    if payload.len() != expected_len {
        return Err(StreamError::Encoding(format!(
            "encoded length {} does not match expected {} for {} raw bytes",
            payload.len(),
            expected_len,
            raw.len()
        )));
    }
    on_progress(ProgressUpdate::at(ENCODE_DONE));
    info!(file = %file_name, size = total, "file encoded for handoff");

    Ok(EncodedFile {
        file_name,
        mime_type: mime_type.to_string(),
        payload,
        size: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use notebridge_progress::TransferStatus;
    use std::io::Write;
    use std::path::PathBuf;

    const CHUNK: usize = 8;

    fn create_test_file(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(data).unwrap();
        path
    }

    fn encode_collecting(path: &Path, chunk_size: usize) -> (EncodedFile, Vec<ProgressUpdate>) {
        let mut updates = Vec::new();
        let encoded = stream_encode(path, chunk_size, |u| updates.push(u)).unwrap();
        (encoded, updates)
    }

    #[test]
    fn roundtrip_for_sizes_up_to_ten_chunks() {
        let dir = tempfile::tempdir().unwrap();
        for n in 0..=10 * CHUNK {
            let data: Vec<u8> = (0..n).map(|i| (i % 251) as u8).collect();
            let path = create_test_file(dir.path(), "data.bin", &data);

            let (encoded, _) = encode_collecting(&path, CHUNK);
            let decoded = STANDARD.decode(&encoded.payload).unwrap();
            assert_eq!(decoded, data, "size {n}");
            assert_eq!(encoded.size, n as u64);
        }
    }

    #[test]
    fn zero_length_file_yields_empty_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_file(dir.path(), "empty.bin", b"");

        let (encoded, updates) = encode_collecting(&path, CHUNK);
        assert_eq!(encoded.payload, "");
        assert_eq!(encoded.size, 0);
        // No read-band updates, just the fixed checkpoints.
        let percents: Vec<u8> = updates.iter().map(|u| u.percent).collect();
        assert_eq!(percents, vec![10, 70, 90]);
    }

    #[test]
    fn read_band_percents_are_monotonic_and_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let data = vec![7u8; 5 * CHUNK + 3];
        let path = create_test_file(dir.path(), "data.bin", &data);

        let (_, updates) = encode_collecting(&path, CHUNK);
        let mut last = 0u8;
        for u in &updates {
            assert_eq!(u.status, TransferStatus::InProgress);
            assert!(u.percent >= last);
            last = u.percent;
        }
        let read_band: Vec<u8> = updates
            .iter()
            .map(|u| u.percent)
            .filter(|p| (10..=60).contains(p))
            .collect();
        assert!(read_band.iter().all(|p| (10..=60).contains(p)));
        assert_eq!(*read_band.last().unwrap(), 60);
    }

    #[test]
    fn three_chunk_file_emits_three_read_updates() {
        let dir = tempfile::tempdir().unwrap();
        let data = vec![1u8; 3 * CHUNK];
        let path = create_test_file(dir.path(), "data.bin", &data);

        let (_, updates) = encode_collecting(&path, CHUNK);
        let percents: Vec<u8> = updates.iter().map(|u| u.percent).collect();
        // Initial 10, one update per chunk (26, 43, 60), then 70 and 90.
        assert_eq!(percents, vec![10, 26, 43, 60, 70, 90]);
    }

    #[test]
    fn missing_file_emits_nothing() {
        let mut updates = Vec::new();
        let result = stream_encode(Path::new("/no/such/file.csv"), CHUNK, |u| updates.push(u));
        assert!(matches!(result.unwrap_err(), StreamError::NotFound(_)));
        assert!(updates.is_empty());
    }

    #[test]
    fn mime_type_comes_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_file(dir.path(), "report.csv", b"a,b\n1,2\n");
        let (encoded, _) = encode_collecting(&path, CHUNK);
        assert_eq!(encoded.mime_type, "text/csv");
        assert_eq!(encoded.file_name, "report.csv");

        let path = create_test_file(dir.path(), "archive.unknownext", b"???");
        let (encoded, _) = encode_collecting(&path, CHUNK);
        assert_eq!(encoded.mime_type, "application/octet-stream");
    }

    #[test]
    fn default_chunk_size_handles_small_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_file(dir.path(), "small.txt", b"hello");
        let (encoded, _) = encode_collecting(&path, 0);
        assert_eq!(STANDARD.decode(&encoded.payload).unwrap(), b"hello");
    }

    #[test]
    fn encoded_file_serializes_camel_case() {
        let encoded = EncodedFile {
            file_name: "plot.png".into(),
            mime_type: "image/png".into(),
            payload: "AAAA".into(),
            size: 3,
        };
        let json = serde_json::to_string(&encoded).unwrap();
        assert!(json.contains("\"fileName\":\"plot.png\""));
        assert!(json.contains("\"mimeType\":\"image/png\""));
    }
}
