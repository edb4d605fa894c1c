//! File I/O utilities with atomic writes
//!
//! Every store goes through these two helpers: reads recover silently and
//! writes are all-or-nothing.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::MoniError;

/// Read JSON from a file, falling back to `T::default()` when the file is
/// absent or cannot be parsed
///
/// This is the storage recovery policy: a missing or damaged file behaves
/// like empty state instead of stopping the program.
pub fn read_json_or_default<T, P>(path: P) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let file = match File::open(path.as_ref()) {
        Ok(file) => file,
        Err(_) => return T::default(),
    };

    serde_json::from_reader(BufReader::new(file)).unwrap_or_default()
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// An interrupted write leaves the previous file contents in place rather
/// than a half-written one.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), MoniError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            MoniError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // The temp file must live next to the target so the rename stays on one
    // filesystem.
    let tmp = path.with_extension("json.tmp");

    let file = File::create(&tmp)
        .map_err(|e| MoniError::Storage(format!("Failed to create {}: {}", tmp.display(), e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| MoniError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| MoniError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| MoniError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        MoniError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}
