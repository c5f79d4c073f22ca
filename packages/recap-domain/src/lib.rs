pub mod display;

use time::OffsetDateTime;

/// Server-assigned folder identifier.
pub type FolderId = i64;
/// Server-assigned note identifier.
pub type NoteId = i64;
/// Entry identifier, unique per (note, entry kind) pair.
pub type EntryId = i64;

/// A named grouping container for notes.
///
/// Identifiers and timestamps are assigned by the server; the client never
/// fabricates them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
	pub id: FolderId,
	pub name: String,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub updated_at: Option<OffsetDateTime>,
}

/// One transcribed session, owned by exactly one folder.
///
/// `date`, `time`, and `day` are display strings derived from `created_at`;
/// the server echoes them back on listing, and [`Note::created`] derives them
/// locally for freshly confirmed notes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
	pub id: NoteId,
	pub name: String,
	pub folder_id: FolderId,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	#[serde(default)]
	pub date: String,
	#[serde(default)]
	pub time: String,
	#[serde(default)]
	pub day: String,
	#[serde(default)]
	pub one_line_summary: String,
	#[serde(default)]
	pub script: Vec<Entry>,
	#[serde(default)]
	pub summary: Vec<Entry>,
	#[serde(default)]
	pub todo: Vec<Entry>,
}
impl Note {
	/// Builds a note from a confirmed create response: empty entry sequences,
	/// display strings derived from the server timestamp.
	pub fn created(
		id: NoteId,
		folder_id: FolderId,
		name: impl Into<String>,
		created_at: OffsetDateTime,
	) -> Self {
		Self {
			id,
			name: name.into(),
			folder_id,
			created_at,
			date: display::display_date(created_at),
			time: display::display_time(created_at),
			day: display::display_day(created_at),
			one_line_summary: String::new(),
			script: Vec::new(),
			summary: Vec::new(),
			todo: Vec::new(),
		}
	}

	pub fn entries(&self, kind: EntryKind) -> &[Entry] {
		match kind {
			EntryKind::Script => &self.script,
			EntryKind::Summary => &self.summary,
			EntryKind::Todo => &self.todo,
		}
	}

	pub fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
		match kind {
			EntryKind::Script => &mut self.script,
			EntryKind::Summary => &mut self.summary,
			EntryKind::Todo => &mut self.todo,
		}
	}
}

/// A speaker-attributed content unit within one of a note's sequences.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
	pub id: EntryId,
	pub speaker: String,
	pub content: String,
}

/// Addresses one of the three entry sequences of a note.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
	Script,
	Summary,
	Todo,
}
