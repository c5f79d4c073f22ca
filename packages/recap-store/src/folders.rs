//! Folder operations. Every remote failure is logged and swallowed; callers
//! observe the outcome only through subsequent local state.

use tracing::warn;

use recap_domain::{Folder, FolderId};

use crate::Store;

impl Store {
	/// Creates a folder remotely and appends the confirmed record. Local
	/// state is untouched until the server responds.
	pub async fn add_folder(&self, name: &str) {
		let created = match self.api.create_folder(name).await {
			Ok(created) => created,
			Err(err) => {
				warn!(error = %err, "Failed to create folder.");

				return;
			},
		};

		self.folders_mut().push(Folder {
			id: created.id,
			name: name.to_string(),
			created_at: created.created_at,
			updated_at: None,
		});
	}

	/// Replaces the folder collection with the server's full list. Used at
	/// bootstrap and for manual refresh.
	pub async fn fetch_folders(&self) {
		match self.api.list_folders().await {
			Ok(folders) => *self.folders_mut() = folders,
			Err(err) => warn!(error = %err, "Failed to fetch folders."),
		}
	}

	/// Renames a folder remotely, then patches the matching local record.
	/// An id with no local match is a no-op after the response.
	pub async fn update_folder(&self, id: FolderId, name: &str) {
		let renamed = match self.api.rename_folder(id, name).await {
			Ok(renamed) => renamed,
			Err(err) => {
				warn!(error = %err, "Failed to rename folder.");

				return;
			},
		};
		let mut folders = self.folders_mut();

		if let Some(folder) = folders.iter_mut().find(|folder| folder.id == id) {
			folder.name = name.to_string();
			folder.updated_at = Some(renamed.updated_at);
		}
	}

	/// Deletes a folder remotely, then removes it and every note it owned
	/// from local state. The server is assumed to invalidate the notes on its
	/// side; this layer does not issue per-note deletes.
	pub async fn delete_folder(&self, id: FolderId) {
		if let Err(err) = self.api.delete_folder(id).await {
			warn!(error = %err, "Failed to delete folder.");

			return;
		}

		self.folders_mut().retain(|folder| folder.id != id);
		self.notes_mut().retain(|note| note.folder_id != id);
	}
}
