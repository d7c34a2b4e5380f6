//! Preview handles — revocable, locally served copies of the selected PDF.
//!
//! A `PreviewHandle` owns one entry in the shared `PreviewStore`. Dropping the
//! handle revokes the entry, so replacing a selection or tearing down the
//! upload view releases the previous preview without any explicit call.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bytes::Bytes;
use tracing::debug;
use uuid::Uuid;

use crate::models::SelectedFile;

/// The bytes served back to the page for inline display.
#[derive(Debug, Clone)]
pub struct PreviewBlob {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Registry of live previews, shared between the session and the
/// `/preview/:id` route.
#[derive(Debug, Clone, Default)]
pub struct PreviewStore {
    entries: Arc<Mutex<HashMap<Uuid, PreviewBlob>>>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a preview for `file` and returns the guard that owns it.
    pub fn create(&self, file: &SelectedFile) -> PreviewHandle {
        let id = Uuid::new_v4();
        self.lock().insert(
            id,
            PreviewBlob {
                file_name: file.file_name.clone(),
                bytes: file.bytes.clone(),
            },
        );
        debug!("Preview {id} created for '{}'", file.file_name);
        PreviewHandle {
            id,
            store: self.clone(),
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<PreviewBlob> {
        self.lock().get(id).cloned()
    }

    pub fn live_count(&self) -> usize {
        self.lock().len()
    }

    fn revoke(&self, id: &Uuid) -> bool {
        self.lock().remove(id).is_some()
    }

    // A panic while holding the lock leaves the map itself consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, PreviewBlob>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Exclusive owner of one preview entry. Not `Clone`: there is exactly one
/// owner per selection, and the entry is revoked when it drops.
#[derive(Debug)]
pub struct PreviewHandle {
    id: Uuid,
    store: PreviewStore,
}

impl PreviewHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> String {
        format!("/preview/{}", self.id())
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if self.store.revoke(&self.id) {
            debug!("Preview {} revoked", self.id);
        }
    }
}
