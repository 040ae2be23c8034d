//! On-disk JSON snapshot of every collection.

use std::collections::BTreeMap;
use std::path::Path;

use lp_core::entities::{ActivityLog, Campaign, Outreach, Prospect, Sequence, Template};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Snapshot format version written to disk.
pub const SNAPSHOT_VERSION: u32 = 1;

/// All records, keyed by id within each collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub campaigns: BTreeMap<String, Campaign>,
    #[serde(default)]
    pub prospects: BTreeMap<String, Prospect>,
    #[serde(default)]
    pub outreach: BTreeMap<String, Outreach>,
    #[serde(default)]
    pub templates: BTreeMap<String, Template>,
    #[serde(default)]
    pub sequences: BTreeMap<String, Sequence>,
    #[serde(default)]
    pub activity: BTreeMap<String, ActivityLog>,
}

const fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

impl Snapshot {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            ..Self::default()
        }
    }

    /// Read a snapshot file. A missing file is an empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] on read failure or [`StoreError::Serde`] if
    /// the file is not a valid snapshot.
    pub fn read(path: &Path) -> Result<Self, StoreError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::empty()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the snapshot next to `path` and rename it into place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or file cannot be written.
    pub fn write(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(self)?)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}
