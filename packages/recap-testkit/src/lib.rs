//! Scripted [`RemoteApi`] double for store and view tests.
//!
//! Each endpoint pops from its own response queue; an unscripted call fails
//! with an [`Error::InvalidResponse`], so a test that expects no remote
//! traffic can simply assert on the recorded call log. Responses can carry a
//! delay to exercise arrival-order races.

use std::{
	collections::VecDeque,
	sync::Mutex,
	time::Duration,
};

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use recap_api::{BoxFuture, Error, FolderCreated, FolderRenamed, NoteCreated, RemoteApi, Result};
use recap_domain::{Entry, EntryId, Folder, FolderId, Note, NoteId};

/// One recorded endpoint invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
	CreateFolder { name: String },
	ListFolders,
	RenameFolder { id: FolderId, name: String },
	DeleteFolder { id: FolderId },
	CreateNote { folder_id: FolderId, name: String },
	ListNotes { folder_id: Option<FolderId> },
}

struct Scripted<T> {
	result: Result<T>,
	delay: Option<Duration>,
}

#[derive(Default)]
pub struct MockApi {
	calls: Mutex<Vec<Call>>,
	create_folder: Mutex<VecDeque<Scripted<FolderCreated>>>,
	list_folders: Mutex<VecDeque<Scripted<Vec<Folder>>>>,
	rename_folder: Mutex<VecDeque<Scripted<FolderRenamed>>>,
	delete_folder: Mutex<VecDeque<Scripted<()>>>,
	create_note: Mutex<VecDeque<Scripted<NoteCreated>>>,
	list_notes: Mutex<VecDeque<Scripted<Vec<Note>>>>,
}
impl MockApi {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn calls(&self) -> Vec<Call> {
		self.calls.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub fn script_create_folder(&self, result: Result<FolderCreated>) {
		push(&self.create_folder, result, None);
	}

	pub fn script_list_folders(&self, result: Result<Vec<Folder>>) {
		push(&self.list_folders, result, None);
	}

	pub fn script_rename_folder(&self, result: Result<FolderRenamed>) {
		push(&self.rename_folder, result, None);
	}

	pub fn script_delete_folder(&self, result: Result<()>) {
		push(&self.delete_folder, result, None);
	}

	pub fn script_create_note(&self, result: Result<NoteCreated>) {
		push(&self.create_note, result, None);
	}

	pub fn script_list_notes(&self, result: Result<Vec<Note>>) {
		push(&self.list_notes, result, None);
	}

	/// Scripts a notes listing whose response resolves only after `delay`.
	pub fn script_list_notes_delayed(&self, result: Result<Vec<Note>>, delay: Duration) {
		push(&self.list_notes, result, Some(delay));
	}

	fn record(&self, call: Call) {
		self.calls.lock().unwrap_or_else(|err| err.into_inner()).push(call);
	}
}
impl RemoteApi for MockApi {
	fn create_folder<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<FolderCreated>> {
		self.record(Call::CreateFolder { name: name.to_string() });

		respond(pop(&self.create_folder, "create_folder"))
	}

	fn list_folders(&self) -> BoxFuture<'_, Result<Vec<Folder>>> {
		self.record(Call::ListFolders);

		respond(pop(&self.list_folders, "list_folders"))
	}

	fn rename_folder<'a>(
		&'a self,
		id: FolderId,
		name: &'a str,
	) -> BoxFuture<'a, Result<FolderRenamed>> {
		self.record(Call::RenameFolder { id, name: name.to_string() });

		respond(pop(&self.rename_folder, "rename_folder"))
	}

	fn delete_folder(&self, id: FolderId) -> BoxFuture<'_, Result<()>> {
		self.record(Call::DeleteFolder { id });

		respond(pop(&self.delete_folder, "delete_folder"))
	}

	fn create_note<'a>(
		&'a self,
		folder_id: FolderId,
		name: &'a str,
	) -> BoxFuture<'a, Result<NoteCreated>> {
		self.record(Call::CreateNote { folder_id, name: name.to_string() });

		respond(pop(&self.create_note, "create_note"))
	}

	fn list_notes(&self, folder_id: Option<FolderId>) -> BoxFuture<'_, Result<Vec<Note>>> {
		self.record(Call::ListNotes { folder_id });

		respond(pop(&self.list_notes, "list_notes"))
	}
}

fn push<T>(queue: &Mutex<VecDeque<Scripted<T>>>, result: Result<T>, delay: Option<Duration>) {
	queue.lock().unwrap_or_else(|err| err.into_inner()).push_back(Scripted { result, delay });
}

fn pop<T>(queue: &Mutex<VecDeque<Scripted<T>>>, endpoint: &str) -> Result<Scripted<T>> {
	queue
		.lock()
		.unwrap_or_else(|err| err.into_inner())
		.pop_front()
		.ok_or_else(|| Error::InvalidResponse {
			message: format!("No scripted response for {endpoint}."),
		})
}

fn respond<T>(scripted: Result<Scripted<T>>) -> BoxFuture<'static, Result<T>>
where
	T: Send + 'static,
{
	Box::pin(async move {
		let scripted = scripted?;

		if let Some(delay) = scripted.delay {
			tokio::time::sleep(delay).await;
		}

		scripted.result
	})
}

/// A transport-level failure for scripting error paths.
pub fn remote_failure() -> Error {
	Error::InvalidResponse { message: "scripted transport failure".to_string() }
}

/// Parses an RFC 3339 timestamp; test fixtures only.
pub fn ts(raw: &str) -> OffsetDateTime {
	OffsetDateTime::parse(raw, &Rfc3339).expect("timestamp must be RFC 3339")
}

pub fn folder(id: FolderId, name: &str, created_at: &str) -> Folder {
	Folder { id, name: name.to_string(), created_at: ts(created_at), updated_at: None }
}

pub fn note(id: NoteId, folder_id: FolderId, name: &str, created_at: &str) -> Note {
	Note::created(id, folder_id, name, ts(created_at))
}

pub fn entry(id: EntryId, speaker: &str, content: &str) -> Entry {
	Entry { id, speaker: speaker.to_string(), content: content.to_string() }
}
