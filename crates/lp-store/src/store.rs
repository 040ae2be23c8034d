//! The record store seam and its in-memory implementation.

use std::path::{Path, PathBuf};

use lp_schema::SchemaRegistry;

use crate::error::StoreError;
use crate::record::Record;
use crate::snapshot::Snapshot;

/// Owner-scoped CRUD over every record type.
///
/// A record owned by someone else is indistinguishable from a missing one:
/// every lookup for it fails with [`StoreError::NotFound`].
pub trait RecordStore {
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when no record with `id` belongs to `owner`.
    fn get<R: Record>(&self, owner: &str, id: &str) -> Result<R, StoreError>;

    /// Records owned by `owner` that match `filter`, newest first.
    fn list_where<R: Record>(&self, owner: &str, filter: impl Fn(&R) -> bool) -> Vec<R>;

    /// # Errors
    ///
    /// [`StoreError::Duplicate`] when the id is already taken.
    fn create<R: Record>(&mut self, record: R) -> Result<R, StoreError>;

    /// Replace a stored record with the same id and owner.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when no such record belongs to the owner.
    fn update<R: Record>(&mut self, record: R) -> Result<R, StoreError>;

    /// # Errors
    ///
    /// [`StoreError::NotFound`] when no record with `id` belongs to `owner`.
    fn delete<R: Record>(&mut self, owner: &str, id: &str) -> Result<R, StoreError>;

    /// All records owned by `owner`, newest first.
    fn list<R: Record>(&self, owner: &str) -> Vec<R> {
        self.list_where(owner, |_| true)
    }
}

/// [`RecordStore`] held in memory, optionally backed by a JSON snapshot file.
pub struct MemoryStore {
    snapshot: Snapshot,
    path: Option<PathBuf>,
    schema: SchemaRegistry,
    dirty: bool,
}

impl MemoryStore {
    /// A store that never touches disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            snapshot: Snapshot::empty(),
            path: None,
            schema: SchemaRegistry::new(),
            dirty: false,
        }
    }

    /// Load the snapshot at `path`, or start empty when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let snapshot = Snapshot::read(&path)?;
        tracing::debug!(path = %path.display(), "opened record store");
        Ok(Self {
            snapshot,
            path: Some(path),
            schema: SchemaRegistry::new(),
            dirty: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Write pending changes to the snapshot file. No-op when in memory only
    /// or nothing changed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if !self.dirty {
            return Ok(());
        }
        self.snapshot.write(path)?;
        tracing::debug!(path = %path.display(), "saved record store");
        self.dirty = false;
        Ok(())
    }

    /// Check a record against its registered schema. Warn-only.
    fn check_schema<R: Record>(&self, record: &R) {
        let value = match serde_json::to_value(record) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(entity = R::ENTITY, error = %e, "record did not serialize");
                return;
            }
        };
        if let Err(e) = self.schema.validate(R::ENTITY, &value) {
            tracing::warn!(entity = R::ENTITY, id = record.id(), error = %e, "record failed schema validation");
        }
    }

    fn not_found<R: Record>(id: &str) -> StoreError {
        StoreError::NotFound {
            entity_type: R::ENTITY,
            id: id.to_string(),
        }
    }
}

impl RecordStore for MemoryStore {
    fn get<R: Record>(&self, owner: &str, id: &str) -> Result<R, StoreError> {
        R::collection(&self.snapshot)
            .get(id)
            .filter(|r| r.owner() == owner)
            .cloned()
            .ok_or_else(|| Self::not_found::<R>(id))
    }

    fn list_where<R: Record>(&self, owner: &str, filter: impl Fn(&R) -> bool) -> Vec<R> {
        let mut records: Vec<R> = R::collection(&self.snapshot)
            .values()
            .filter(|r| r.owner() == owner && filter(*r))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        records
    }

    fn create<R: Record>(&mut self, record: R) -> Result<R, StoreError> {
        if R::collection(&self.snapshot).contains_key(record.id()) {
            return Err(StoreError::Duplicate {
                entity_type: R::ENTITY,
                id: record.id().to_string(),
            });
        }
        self.check_schema(&record);
        R::collection_mut(&mut self.snapshot).insert(record.id().to_string(), record.clone());
        self.dirty = true;
        tracing::debug!(entity = R::ENTITY, id = record.id(), "created");
        Ok(record)
    }

    fn update<R: Record>(&mut self, record: R) -> Result<R, StoreError> {
        let owned = R::collection(&self.snapshot)
            .get(record.id())
            .is_some_and(|existing| existing.owner() == record.owner());
        if !owned {
            return Err(Self::not_found::<R>(record.id()));
        }
        self.check_schema(&record);
        R::collection_mut(&mut self.snapshot).insert(record.id().to_string(), record.clone());
        self.dirty = true;
        tracing::debug!(entity = R::ENTITY, id = record.id(), "updated");
        Ok(record)
    }

    fn delete<R: Record>(&mut self, owner: &str, id: &str) -> Result<R, StoreError> {
        self.get::<R>(owner, id)?;
        let removed = R::collection_mut(&mut self.snapshot)
            .remove(id)
            .ok_or_else(|| Self::not_found::<R>(id))?;
        self.dirty = true;
        tracing::debug!(entity = R::ENTITY, id, "deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use lp_core::entities::{Prospect, ProspectInput};
    use pretty_assertions::assert_eq;

    fn prospect(id: &str, owner: &str, age_days: i64) -> Prospect {
        Prospect::new(
            id.into(),
            owner.into(),
            None,
            ProspectInput {
                email: format!("{id}@example.com"),
                ..ProspectInput::default()
            },
            Utc::now() - Duration::days(age_days),
        )
    }

    #[test]
    fn records_are_owner_scoped() {
        let mut store = MemoryStore::in_memory();
        store.create(prospect("prs-1", "usr-a", 0)).unwrap();

        assert!(store.get::<Prospect>("usr-a", "prs-1").is_ok());
        let err = store.get::<Prospect>("usr-b", "prs-1").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity_type: "prospect", .. }));
        assert!(store.list::<Prospect>("usr-b").is_empty());
        assert!(store.delete::<Prospect>("usr-b", "prs-1").is_err());
    }

    #[test]
    fn list_is_newest_first() {
        let mut store = MemoryStore::in_memory();
        store.create(prospect("prs-old", "usr-a", 5)).unwrap();
        store.create(prospect("prs-new", "usr-a", 0)).unwrap();
        store.create(prospect("prs-mid", "usr-a", 2)).unwrap();

        let ids: Vec<String> = store.list::<Prospect>("usr-a").into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["prs-new", "prs-mid", "prs-old"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut store = MemoryStore::in_memory();
        store.create(prospect("prs-1", "usr-a", 0)).unwrap();
        let err = store.create(prospect("prs-1", "usr-a", 0)).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
    }

    #[test]
    fn update_cannot_change_owner() {
        let mut store = MemoryStore::in_memory();
        store.create(prospect("prs-1", "usr-a", 0)).unwrap();
        let mut stolen = prospect("prs-1", "usr-b", 0);
        stolen.notes = Some("mine now".into());
        assert!(store.update(stolen).is_err());
        assert_eq!(store.get::<Prospect>("usr-a", "prs-1").unwrap().notes, None);
    }

    #[test]
    fn mutations_mark_dirty() {
        let mut store = MemoryStore::in_memory();
        assert!(!store.is_dirty());
        store.create(prospect("prs-1", "usr-a", 0)).unwrap();
        assert!(store.is_dirty());
        store.save().unwrap();
        assert!(store.is_dirty(), "in-memory save keeps the flag");
    }
}
