// Form auto-save: periodic snapshots of in-progress form input, persisted
// through a host-supplied key-value store and restored when the form is
// reopened. The store is the native analog of the browser's localStorage.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// String key-value persistence supplied by the host.
pub trait FormStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), UiError>;
    fn remove(&mut self, key: &str) -> Result<(), UiError>;
}

/// In-memory store, used in tests and by hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryFormStore {
    entries: HashMap<String, String>,
}

impl MemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormStore for MemoryFormStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), UiError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), UiError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One saved form state: field name to entered value, plus when it was taken.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormSnapshot {
    pub saved_at: DateTime<Utc>,
    pub fields: HashMap<String, String>,
}

impl FormSnapshot {
    pub fn now(fields: HashMap<String, String>) -> Self {
        FormSnapshot {
            saved_at: Utc::now(),
            fields,
        }
    }
}

/// Saves, restores and clears form snapshots. Keys are namespaced with a
/// fixed prefix so form ids never collide with other store users.
pub struct FormAutoSave<S: FormStore> {
    store: S,
    key_prefix: String,
}

impl<S: FormStore> FormAutoSave<S> {
    pub fn new(store: S) -> Self {
        Self::with_prefix(store, "autosave_")
    }

    pub fn with_prefix(store: S, key_prefix: impl Into<String>) -> Self {
        FormAutoSave {
            store,
            key_prefix: key_prefix.into(),
        }
    }

    fn key(&self, form_id: &str) -> String {
        format!("{}{}", self.key_prefix, form_id)
    }

    /// Snapshots the given field values under the form's key, replacing any
    /// previous snapshot.
    pub fn save(&mut self, form_id: &str, fields: HashMap<String, String>) -> Result<(), UiError> {
        let snapshot = FormSnapshot::now(fields);
        let payload = serde_json::to_string(&snapshot)?;
        self.store.set(&self.key(form_id), &payload)?;
        tracing::debug!(form_id, fields = snapshot.fields.len(), "Form state saved");
        Ok(())
    }

    /// Returns the latest snapshot for the form, if one exists. A snapshot
    /// that fails to deserialize is treated as absent and discarded, so a
    /// corrupt entry can never wedge the form.
    pub fn restore(&mut self, form_id: &str) -> Result<Option<FormSnapshot>, UiError> {
        let key = self.key(form_id);
        let Some(payload) = self.store.get(&key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&payload) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                tracing::warn!(form_id, error = %e, "Discarding unreadable form snapshot");
                self.store.remove(&key)?;
                Ok(None)
            }
        }
    }

    /// Like [`FormAutoSave::restore`], but ignores snapshots older than
    /// `max_age` so a form abandoned days ago does not resurface stale input.
    pub fn restore_recent(
        &mut self,
        form_id: &str,
        max_age: Duration,
    ) -> Result<Option<FormSnapshot>, UiError> {
        match self.restore(form_id)? {
            Some(snapshot) if Utc::now() - snapshot.saved_at <= max_age => Ok(Some(snapshot)),
            Some(_) => {
                tracing::debug!(form_id, "Ignoring stale form snapshot");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Drops the form's snapshot, typically right after a successful submit.
    pub fn clear(&mut self, form_id: &str) -> Result<(), UiError> {
        self.store.remove(&self.key(form_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_save_and_restore_round_trip() {
        let mut autosave = FormAutoSave::new(MemoryFormStore::new());
        autosave
            .save("product_add", fields(&[("code", "P001"), ("name", "Widget")]))
            .unwrap();

        let snapshot = autosave.restore("product_add").unwrap().unwrap();
        assert_eq!(snapshot.fields.get("code").unwrap(), "P001");
        assert_eq!(snapshot.fields.get("name").unwrap(), "Widget");
    }

    #[test]
    fn test_restore_unknown_form_is_none() {
        let mut autosave = FormAutoSave::new(MemoryFormStore::new());
        assert!(autosave.restore("nope").unwrap().is_none());
    }

    #[test]
    fn test_clear_removes_snapshot() {
        let mut autosave = FormAutoSave::new(MemoryFormStore::new());
        autosave.save("sale_add", fields(&[("qty", "5")])).unwrap();
        autosave.clear("sale_add").unwrap();
        assert!(autosave.restore("sale_add").unwrap().is_none());
    }

    #[test]
    fn test_forms_are_isolated_by_key() {
        let mut autosave = FormAutoSave::new(MemoryFormStore::new());
        autosave.save("form_a", fields(&[("x", "1")])).unwrap();
        autosave.save("form_b", fields(&[("x", "2")])).unwrap();

        assert_eq!(
            autosave.restore("form_a").unwrap().unwrap().fields["x"],
            "1"
        );
        assert_eq!(
            autosave.restore("form_b").unwrap().unwrap().fields["x"],
            "2"
        );
    }

    #[test]
    fn test_corrupt_snapshot_is_discarded() {
        let mut store = MemoryFormStore::new();
        store.set("autosave_broken", "not json").unwrap();
        let mut autosave = FormAutoSave::new(store);

        assert!(autosave.restore("broken").unwrap().is_none());
        // A second restore sees the entry gone, not the same parse failure.
        assert!(autosave.restore("broken").unwrap().is_none());
    }

    #[test]
    fn test_restore_recent_rejects_stale_snapshot() {
        let mut autosave = FormAutoSave::new(MemoryFormStore::new());
        autosave.save("form", fields(&[("x", "1")])).unwrap();

        // Fresh snapshot is returned
        assert!(autosave
            .restore_recent("form", Duration::hours(1))
            .unwrap()
            .is_some());

        // The public API always stamps the current time, so write an aged
        // payload into the store directly.
        let old = FormSnapshot {
            saved_at: Utc::now() - Duration::hours(2),
            fields: fields(&[("x", "1")]),
        };
        let payload = serde_json::to_string(&old).unwrap();
        let mut store = MemoryFormStore::new();
        store.set("autosave_form", &payload).unwrap();
        let mut autosave = FormAutoSave::new(store);

        assert!(autosave
            .restore_recent("form", Duration::hours(1))
            .unwrap()
            .is_none());
    }
}
