mod error;
mod http;

pub use error::{Error, Result};
pub use http::HttpApi;

use std::{future::Future, pin::Pin};

use time::OffsetDateTime;

use recap_domain::{Folder, FolderId, Note};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Confirmation payload of a folder create request.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderCreated {
	pub id: FolderId,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}

/// Confirmation payload of a folder rename request.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRenamed {
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Confirmation payload of a note create request.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCreated {
	pub id: recap_domain::NoteId,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}

/// The remote folders/notes API, as the store consumes it.
///
/// Object-safe so the store can hold `Arc<dyn RemoteApi>` and tests can swap
/// in a scripted double.
pub trait RemoteApi
where
	Self: Send + Sync,
{
	fn create_folder<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<FolderCreated>>;

	fn list_folders(&self) -> BoxFuture<'_, Result<Vec<Folder>>>;

	fn rename_folder<'a>(
		&'a self,
		id: FolderId,
		name: &'a str,
	) -> BoxFuture<'a, Result<FolderRenamed>>;

	fn delete_folder(&self, id: FolderId) -> BoxFuture<'_, Result<()>>;

	fn create_note<'a>(
		&'a self,
		folder_id: FolderId,
		name: &'a str,
	) -> BoxFuture<'a, Result<NoteCreated>>;

	/// `None` lists notes across all folders.
	fn list_notes(&self, folder_id: Option<FolderId>) -> BoxFuture<'_, Result<Vec<Note>>>;
}
