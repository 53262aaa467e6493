// src/watch/fingerprint.rs

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use blake3::Hasher;
use tracing::debug;

use crate::errors::Result;
use crate::watch::target::WatchTarget;

/// Content fingerprints by absolute or as-given file path.
///
/// Entries for files that later disappear are deliberately left in place:
/// their last known hash lingers, so a file that is deleted and recreated
/// with identical content is *not* reported as changed. That matches the
/// behaviour this tool has always had; callers that want pruning must do it
/// themselves.
pub type Fingerprints = HashMap<PathBuf, String>;

/// Hash the raw bytes of a single file.
///
/// The digest only has to be collision-resistant enough to detect edits
/// between polls; it carries no security meaning.
pub fn hash_file(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("opening file for hashing: {:?}", path))?;

    let mut hasher = Hasher::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let hash = hasher.finalize().to_hex().to_string();
    debug!(path = ?path, hash = %hash, "hashed file");
    Ok(hash)
}

/// Fingerprint every file currently covered by `target`.
///
/// A nonexistent single-file target yields an empty map; that is not an
/// error, the file may simply not have been written yet.
pub fn snapshot(target: &WatchTarget) -> Result<Fingerprints> {
    let mut map = Fingerprints::new();
    for path in target.files()? {
        map.insert(path.clone(), hash_file(&path)?);
    }
    Ok(map)
}

/// Compare the current state of `target` against `previous`.
///
/// Returns the files whose hash differs (sorted) and the updated fingerprint
/// map. A file never seen before compares against the empty string, so first
/// observation is always reported as changed.
pub fn diff(previous: &Fingerprints, target: &WatchTarget) -> Result<(Vec<PathBuf>, Fingerprints)> {
    let mut updated = previous.clone();
    let mut changed = Vec::new();

    for path in target.files()? {
        // The file can vanish between listing and hashing; treat that like a
        // missing target and pick it up again on the next poll.
        if !path.is_file() {
            continue;
        }
        let current = hash_file(&path)?;
        let stored = previous.get(&path).map(String::as_str).unwrap_or("");

        if current != stored {
            changed.push(path.clone());
            updated.insert(path, current);
        }
    }

    changed.sort();
    Ok((changed, updated))
}
