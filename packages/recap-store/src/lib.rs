//! Session-wide state store for folders and notes.
//!
//! The store is the single source of truth within a session: every remote
//! call goes through it, and the local collections hold the last known server
//! state. It is constructed once at session start and passed by handle to all
//! consumers; there are no statics and no implicit context lookup.

mod entries;
mod folders;
mod notes;

use std::sync::{Arc, RwLock};

use recap_api::RemoteApi;
use recap_domain::{Folder, Note};

pub struct Store {
	api: Arc<dyn RemoteApi>,
	folders: RwLock<Vec<Folder>>,
	notes: RwLock<Vec<Note>>,
}
impl Store {
	pub fn new(api: Arc<dyn RemoteApi>) -> Self {
		Self { api, folders: RwLock::new(Vec::new()), notes: RwLock::new(Vec::new()) }
	}

	/// Initial folder fetch. A failure leaves the collection empty; it has
	/// already been logged by [`Store::fetch_folders`].
	pub async fn bootstrap(&self) {
		self.fetch_folders().await;
	}

	/// Snapshot of the folder collection.
	pub fn folders(&self) -> Vec<Folder> {
		self.folders.read().unwrap_or_else(|err| err.into_inner()).clone()
	}

	/// Snapshot of the notes collection.
	pub fn notes(&self) -> Vec<Note> {
		self.notes.read().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub(crate) fn folders_mut(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Folder>> {
		self.folders.write().unwrap_or_else(|err| err.into_inner())
	}

	pub(crate) fn notes_mut(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Note>> {
		self.notes.write().unwrap_or_else(|err| err.into_inner())
	}
}
