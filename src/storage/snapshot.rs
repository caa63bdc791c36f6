use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, Ledger, LedgerError};

pub const SNAPSHOT_VERSION: &str = "1";

/// Full dump of the in-memory ledger, used to carry state across restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub accounts: Vec<Account>,
}

impl Snapshot {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            exported_at: Utc::now(),
            accounts,
        }
    }

    /// Load a snapshot from disk. Returns `None` if the file does not exist.
    pub async fn load(path: &Path) -> Result<Option<Self>> {
        let raw = match tokio::fs::read(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read snapshot {}", path.display()));
            }
        };

        let snapshot: Snapshot = serde_json::from_slice(&raw)
            .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            anyhow::bail!(
                "Unsupported snapshot version {} (expected {})",
                snapshot.version,
                SNAPSHOT_VERSION
            );
        }

        Ok(Some(snapshot))
    }

    /// Write the snapshot to disk, replacing any previous file.
    /// The data goes to a sibling temp file first and is renamed into place.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self).context("Failed to serialize snapshot")?;

        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, json)
            .await
            .with_context(|| format!("Failed to write snapshot {}", tmp.display()))?;
        tokio::fs::rename(&tmp, path)
            .await
            .with_context(|| format!("Failed to move snapshot into {}", path.display()))?;

        Ok(())
    }

    pub fn into_ledger(self) -> Result<Ledger, LedgerError> {
        Ledger::from_accounts(self.accounts)
    }
}
