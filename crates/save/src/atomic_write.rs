//! Crash-safe record writes.
//!
//! The bytes go to a sibling `<record>.tmp`, are flushed to disk, and the
//! temp file is then renamed over the record. Readers see either the old
//! record or the new one.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn staging_path(record: &Path) -> PathBuf {
    let mut name = record.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Replace `record` with `bytes`, creating its directory when missing.
pub fn atomic_write(record: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(dir) = record.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let staging = staging_path(record);
    let mut out = File::create(&staging)?;
    out.write_all(bytes)?;
    out.sync_all()?;
    drop(out);

    fs::rename(&staging, record)
}
