// ---------------------------------------------------------------------------
// file_header – Record header with magic bytes, version, and checksum
// ---------------------------------------------------------------------------
//
// Header format (24 bytes, fixed-size, little-endian):
//   [0..4]   Magic bytes: "ECOT"
//   [4..8]   Header format version (u32)
//   [8..16]  Timestamp (Unix epoch seconds, u64)
//   [16..20] Payload length (u32)
//   [20..24] xxHash32 checksum of the payload (everything after the header)
//
// On save: JSON payload -> prepend header
// On load: check magic -> validate length and checksum -> strip header
// Legacy: if the first 4 bytes != "ECOT", the whole buffer is raw JSON

use xxhash_rust::xxh32::xxh32;

use crate::save_error::SaveError;

/// Magic bytes identifying an EcoTrack record.
pub const MAGIC: [u8; 4] = *b"ECOT";

pub const HEADER_SIZE: usize = 24;

/// Current header layout version.
pub const HEADER_FORMAT_VERSION: u32 = 1;

const XXHASH_SEED: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub format_version: u32,
    pub timestamp: u64,
    pub payload_len: u32,
    pub checksum: u32,
}

impl FileHeader {
    pub fn new(payload: &[u8]) -> Self {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            format_version: HEADER_FORMAT_VERSION,
            timestamp,
            payload_len: payload.len() as u32,
            checksum: xxh32(payload, XXHASH_SEED),
        }
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&self.format_version.to_le_bytes());
        out.extend_from_slice(&self.timestamp.to_le_bytes());
        out.extend_from_slice(&self.payload_len.to_le_bytes());
        out.extend_from_slice(&self.checksum.to_le_bytes());
    }
}

/// Returns bytes: [header (24 bytes)] ++ [payload].
pub fn wrap_with_header(payload: &[u8]) -> Vec<u8> {
    let header = FileHeader::new(payload);
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    header.write_to(&mut out);
    out.extend_from_slice(payload);
    out
}

/// Result of unwrapping a stored record.
#[derive(Debug)]
pub enum UnwrapResult<'a> {
    WithHeader {
        header: FileHeader,
        payload: &'a [u8],
    },
    /// No header (a record written by the browser version); the entire
    /// buffer is the payload.
    Legacy(&'a [u8]),
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Parse and validate the header.
///
/// # Errors
///
/// - the magic is present but the buffer is shorter than a header
/// - the header version is newer than [`HEADER_FORMAT_VERSION`]
/// - the payload length or checksum does not match
pub fn unwrap_header(bytes: &[u8]) -> Result<UnwrapResult<'_>, SaveError> {
    if bytes.len() < MAGIC.len() || bytes[..MAGIC.len()] != MAGIC {
        return Ok(UnwrapResult::Legacy(bytes));
    }

    if bytes.len() < HEADER_SIZE {
        return Err(SaveError::Corrupt(format!(
            "record is too short ({} bytes, need at least {HEADER_SIZE} for header)",
            bytes.len()
        )));
    }

    let format_version = read_u32(bytes, 4);
    let timestamp = u64::from_le_bytes([
        bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
    ]);
    let payload_len = read_u32(bytes, 16);
    let checksum = read_u32(bytes, 20);

    if format_version > HEADER_FORMAT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: HEADER_FORMAT_VERSION,
            found: format_version,
        });
    }

    let payload = &bytes[HEADER_SIZE..];
    if payload.len() != payload_len as usize {
        return Err(SaveError::Corrupt(format!(
            "length mismatch (header says {payload_len} bytes, found {})",
            payload.len()
        )));
    }

    let computed = xxh32(payload, XXHASH_SEED);
    if computed != checksum {
        return Err(SaveError::Corrupt(format!(
            "checksum mismatch (expected {checksum:#010X}, got {computed:#010X})"
        )));
    }

    Ok(UnwrapResult::WithHeader {
        header: FileHeader {
            format_version,
            timestamp,
            payload_len,
            checksum,
        },
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_and_unwrap() {
        let data = br#"{"total":3042}"#;
        let wrapped = wrap_with_header(data);

        assert_eq!(&wrapped[..4], b"ECOT");
        assert_eq!(wrapped.len(), HEADER_SIZE + data.len());

        match unwrap_header(&wrapped).expect("unwrap should succeed") {
            UnwrapResult::WithHeader { header, payload } => {
                assert_eq!(header.format_version, HEADER_FORMAT_VERSION);
                assert_eq!(header.payload_len, data.len() as u32);
                assert!(header.timestamp > 0);
                assert_eq!(payload, data);
            }
            UnwrapResult::Legacy(_) => panic!("expected WithHeader, got Legacy"),
        }
    }

    #[test]
    fn test_raw_json_is_legacy() {
        let data = br#"{"transport":{}}"#;
        match unwrap_header(data).expect("unwrap should succeed") {
            UnwrapResult::Legacy(payload) => assert_eq!(payload, data.as_slice()),
            UnwrapResult::WithHeader { .. } => panic!("expected Legacy"),
        }
    }

    #[test]
    fn test_empty_data_is_legacy() {
        assert!(matches!(
            unwrap_header(b"").unwrap(),
            UnwrapResult::Legacy(payload) if payload.is_empty()
        ));
    }

    #[test]
    fn test_corrupted_payload_detected() {
        let mut wrapped = wrap_with_header(b"payload");
        let last = wrapped.len() - 1;
        wrapped[last] ^= 0xFF;

        let err = unwrap_header(&wrapped).unwrap_err();
        assert!(matches!(err, SaveError::Corrupt(_)));
        assert!(err.to_string().contains("checksum mismatch"), "got: {err}");
    }

    #[test]
    fn test_truncated_payload_detected() {
        let mut wrapped = wrap_with_header(b"payload");
        wrapped.pop();

        let err = unwrap_header(&wrapped).unwrap_err();
        assert!(err.to_string().contains("length mismatch"), "got: {err}");
    }

    #[test]
    fn test_future_header_version_rejected() {
        let mut wrapped = wrap_with_header(b"payload");
        wrapped[4..8].copy_from_slice(&999u32.to_le_bytes());

        let err = unwrap_header(&wrapped).unwrap_err();
        assert!(matches!(
            err,
            SaveError::VersionMismatch {
                expected_max: 1,
                found: 999
            }
        ));
    }

    #[test]
    fn test_truncated_header_detected() {
        let err = unwrap_header(b"ECOT\x01\x00").unwrap_err();
        assert!(err.to_string().contains("too short"), "got: {err}");
    }
}
