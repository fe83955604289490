use serde::{Deserialize, Serialize};

use crate::ReceiveError;

/// One uploaded file as delivered by the front end.
///
/// The `data` field is base64-encoded in JSON, matching how the browser
/// side ships raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingFile {
    /// Destination-relative file name.
    pub name: String,
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl IncomingFile {
    /// Builds an incoming file from a base64 payload string.
    pub fn from_base64(name: impl Into<String>, payload: &str) -> Result<Self, ReceiveError> {
        use base64::Engine;
        let data = base64::engine::general_purpose::STANDARD.decode(payload)?;
        Ok(Self {
            name: name.into(),
            data,
        })
    }

    /// Raw size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Custom base64 serde module for `Vec<u8>` fields crossing JSON.
mod base64_bytes {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        STANDARD.encode(data).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_crosses_json_as_base64() {
        let file = IncomingFile {
            name: "hello.txt".into(),
            data: b"Hello".to_vec(),
        };
        let json = serde_json::to_string(&file).unwrap();
        // "Hello" = "SGVsbG8="
        assert!(json.contains("SGVsbG8="));
        let parsed: IncomingFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, file);
    }

    #[test]
    fn from_base64_decodes_payload() {
        let file = IncomingFile::from_base64("hello.txt", "SGVsbG8=").unwrap();
        assert_eq!(file.data, b"Hello");
        assert_eq!(file.size(), 5);
    }

    #[test]
    fn from_base64_rejects_garbage() {
        let result = IncomingFile::from_base64("bad.bin", "not base64!!!");
        assert!(matches!(result.unwrap_err(), ReceiveError::Decode(_)));
    }

    #[test]
    fn empty_payload_is_valid() {
        let file = IncomingFile::from_base64("empty.bin", "").unwrap();
        assert!(file.data.is_empty());
    }
}
