//! JSON persistence for string-keyed caches

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CacheEntry, FetchCache};
use crate::CACHE_KEY;
use crate::clock::Timestamp;

/// On-disk form of a cache: every entry with its own fetch time, plus the
/// time the snapshot was written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheSnapshot<V> {
    pub data: HashMap<String, CacheEntry<V>>,
    pub timestamp: Timestamp,
}

/// What happened while restoring a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreReport {
    pub restored: usize,
    /// Entries past their ttl, dropped
    pub expired: usize,
    /// Entries that did not deserialize, dropped
    pub corrupted: usize,
    /// The whole snapshot was older than the ttl and ignored
    pub discarded: bool,
    /// The file was not a snapshot at all
    pub unreadable: bool,
}

/// `<dir>/pokemon-data-cache.json`
pub fn default_snapshot_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(format!("{CACHE_KEY}.json"))
}

impl<V> FetchCache<String, V>
where
    V: Clone + Send + Sync + Serialize + DeserializeOwned + 'static,
{
    /// Every stored entry, stamped with the current time
    pub fn snapshot(&self) -> CacheSnapshot<V> {
        CacheSnapshot {
            data: self.entries(),
            timestamp: self.now(),
        }
    }

    /// Merge a serialized snapshot into the cache
    ///
    /// The snapshot timestamp only decides whether the file is worth reading:
    /// a snapshot at least one ttl old is dropped wholesale. Otherwise each
    /// entry is judged by its own timestamp. Entries that fail to decode are
    /// skipped and refetched on demand.
    pub fn restore(&self, raw: &str) -> RestoreReport {
        let mut report = RestoreReport::default();

        let parsed: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Cache snapshot is not valid JSON, starting empty");
                report.unreadable = true;
                return report;
            }
        };

        let written = parsed.get("timestamp").and_then(Value::as_u64).map(Timestamp);
        let (Some(written), Some(data)) = (written, parsed.get("data").and_then(Value::as_object))
        else {
            tracing::warn!("Cache snapshot is missing data or timestamp, starting empty");
            report.unreadable = true;
            return report;
        };

        let now = self.now();
        let ttl = self.config().ttl;
        if now.since(written) >= ttl {
            tracing::info!(written = %written, "Cache snapshot expired, discarding");
            report.discarded = true;
            return report;
        }

        for (key, raw_entry) in data {
            match serde_json::from_value::<CacheEntry<V>>(raw_entry.clone()) {
                Ok(entry) if entry.is_valid(now, ttl) => {
                    self.insert_entry(key.clone(), entry);
                    report.restored += 1;
                }
                Ok(_) => report.expired += 1,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Skipping corrupt cache entry");
                    report.corrupted += 1;
                }
            }
        }

        report
    }

    /// Write the cache to `path` as JSON
    pub async fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let snapshot = self.snapshot();
        let json = serde_json::to_string(&snapshot).context("Failed to serialize cache snapshot")?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, path)
            .await
            .with_context(|| format!("Failed to move snapshot into {}", path.display()))?;

        tracing::info!(entries = snapshot.data.len(), path = %path.display(), "Saved cache snapshot");
        Ok(())
    }

    /// Restore from a file written by [`Self::save_snapshot`]
    ///
    /// A missing file is an empty restore, not an error.
    pub async fn load_snapshot(&self, path: impl AsRef<Path>) -> Result<RestoreReport> {
        let path = path.as_ref();
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No cache snapshot found");
                return Ok(RestoreReport::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        let report = self.restore(&raw);
        tracing::info!(
            restored = report.restored,
            expired = report.expired,
            corrupted = report.corrupted,
            discarded = report.discarded,
            path = %path.display(),
            "Loaded cache snapshot"
        );
        Ok(report)
    }
}
