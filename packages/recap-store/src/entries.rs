//! Entry edits within a single note. All three kinds share one contract:
//! update replaces only the content field, delete filters the entry out and
//! keeps sibling order. Unknown note or entry ids are no-ops. These edits are
//! local-only; the server is not re-queried.

use recap_domain::{EntryId, EntryKind, NoteId};

use crate::Store;

impl Store {
	pub fn update_script_item(&self, note_id: NoteId, entry_id: EntryId, content: &str) {
		self.update_entry(EntryKind::Script, note_id, entry_id, content);
	}

	pub fn delete_script_item(&self, note_id: NoteId, entry_id: EntryId) {
		self.delete_entry(EntryKind::Script, note_id, entry_id);
	}

	pub fn update_summary_item(&self, note_id: NoteId, entry_id: EntryId, content: &str) {
		self.update_entry(EntryKind::Summary, note_id, entry_id, content);
	}

	pub fn delete_summary_item(&self, note_id: NoteId, entry_id: EntryId) {
		self.delete_entry(EntryKind::Summary, note_id, entry_id);
	}

	pub fn update_todo_item(&self, note_id: NoteId, entry_id: EntryId, content: &str) {
		self.update_entry(EntryKind::Todo, note_id, entry_id, content);
	}

	pub fn delete_todo_item(&self, note_id: NoteId, entry_id: EntryId) {
		self.delete_entry(EntryKind::Todo, note_id, entry_id);
	}

	fn update_entry(&self, kind: EntryKind, note_id: NoteId, entry_id: EntryId, content: &str) {
		let mut notes = self.notes_mut();
		let Some(note) = notes.iter_mut().find(|note| note.id == note_id) else {
			return;
		};

		if let Some(entry) =
			note.entries_mut(kind).iter_mut().find(|entry| entry.id == entry_id)
		{
			entry.content = content.to_string();
		}
	}

	fn delete_entry(&self, kind: EntryKind, note_id: NoteId, entry_id: EntryId) {
		let mut notes = self.notes_mut();
		let Some(note) = notes.iter_mut().find(|note| note.id == note_id) else {
			return;
		};

		note.entries_mut(kind).retain(|entry| entry.id != entry_id);
	}
}
