// ---------------------------------------------------------------------------
// SaveError: failures reading or writing a stored record
// ---------------------------------------------------------------------------

use std::fmt;

#[derive(Debug)]
pub enum SaveError {
    /// The backing file could not be read, written or removed.
    Io(std::io::Error),
    /// The record could not be turned into JSON.
    Encode(String),
    /// The payload is not a valid record.
    Decode(String),
    /// Written by a newer build with a header layout this one cannot read.
    VersionMismatch { expected_max: u32, found: u32 },
    /// A header is present but the bytes do not agree with it.
    Corrupt(String),
    /// Keys are limited to ASCII letters, digits, `_` and `-`.
    InvalidKey(String),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "storage unavailable: {e}"),
            SaveError::Encode(msg) => write!(f, "record could not be encoded: {msg}"),
            SaveError::Decode(msg) => write!(f, "record is not valid JSON: {msg}"),
            SaveError::VersionMismatch {
                expected_max,
                found,
            } => write!(
                f,
                "record header v{found} is newer than the supported v{expected_max}"
            ),
            SaveError::Corrupt(msg) => write!(f, "record is damaged: {msg}"),
            SaveError::InvalidKey(key) => write!(f, "{key:?} is not a valid storage key"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Decode(e.to_string())
    }
}
