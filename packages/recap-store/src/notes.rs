use tracing::warn;

use recap_domain::{FolderId, Note, NoteId};

use crate::Store;

impl Store {
	/// Creates a note remotely and appends the confirmed record, with empty
	/// entry sequences and display strings derived from the server timestamp.
	/// Returns the created note, or `None` on failure.
	pub async fn add_note(&self, folder_id: FolderId, name: &str) -> Option<Note> {
		let created = match self.api.create_note(folder_id, name).await {
			Ok(created) => created,
			Err(err) => {
				warn!(error = %err, "Failed to create note.");

				return None;
			},
		};
		let note = Note::created(created.id, folder_id, name, created.created_at);

		self.notes_mut().push(note.clone());

		Some(note)
	}

	/// Fetches notes for one folder (or all folders with `None`) and replaces
	/// the entire notes collection with the response. Returns the fetched
	/// list; on failure the collection is untouched and the result is empty.
	///
	/// Overlapping fetches for different folders race: the last response to
	/// land wins the shared collection. Callers that only need the list
	/// should use the return value.
	pub async fn fetch_notes(&self, folder_id: Option<FolderId>) -> Vec<Note> {
		match self.api.list_notes(folder_id).await {
			Ok(notes) => {
				*self.notes_mut() = notes.clone();

				notes
			},
			Err(err) => {
				warn!(error = %err, "Failed to fetch notes.");

				Vec::new()
			},
		}
	}

	/// Local-only removal. The remote API has no note delete endpoint;
	/// server-side deletion is handled elsewhere.
	pub fn delete_note(&self, id: NoteId) {
		self.notes_mut().retain(|note| note.id != id);
	}

	/// Local-only title replacement on the matching note.
	pub fn update_note_title(&self, id: NoteId, new_title: &str) {
		let mut notes = self.notes_mut();

		if let Some(note) = notes.iter_mut().find(|note| note.id == id) {
			note.name = new_title.to_string();
		}
	}

	/// Local-only one-line-summary replacement on the matching note.
	pub fn update_note_one_line(&self, id: NoteId, new_one_line: &str) {
		let mut notes = self.notes_mut();

		if let Some(note) = notes.iter_mut().find(|note| note.id == id) {
			note.one_line_summary = new_one_line.to_string();
		}
	}
}
