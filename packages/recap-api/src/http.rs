use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use recap_domain::{Folder, FolderId, Note};

use crate::{BoxFuture, Error, FolderCreated, FolderRenamed, NoteCreated, RemoteApi, Result};

/// Response envelope. The wire also carries an `isSuccess` flag; only
/// transport errors and a missing `result` are interpreted on this side.
#[derive(Debug, serde::Deserialize)]
struct Envelope<T> {
	result: Option<T>,
}

#[derive(Debug, serde::Deserialize)]
struct FolderListing {
	#[serde(default)]
	folders: Vec<Folder>,
}

#[derive(Debug, serde::Deserialize)]
struct NoteListing {
	#[serde(default)]
	notes: Vec<Note>,
}

/// Reqwest-backed [`RemoteApi`] implementation.
pub struct HttpApi {
	client: Client,
	base_url: String,
}
impl HttpApi {
	pub fn new(cfg: &recap_config::Api) -> Result<Self> {
		let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;

		Ok(Self { client, base_url: cfg.base_url.clone() })
	}

	fn url(&self, path: &str) -> String {
		format!("{}{path}", self.base_url)
	}

	async fn parse<T: DeserializeOwned>(res: reqwest::Response, what: &str) -> Result<T> {
		let body: Value = res.error_for_status()?.json().await?;

		unwrap_result(body, what)
	}
}
impl RemoteApi for HttpApi {
	fn create_folder<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<FolderCreated>> {
		Box::pin(async move {
			let res = self
				.client
				.post(self.url("/folders"))
				.json(&serde_json::json!({ "name": name }))
				.send()
				.await?;

			Self::parse(res, "create folder").await
		})
	}

	fn list_folders(&self) -> BoxFuture<'_, Result<Vec<Folder>>> {
		Box::pin(async move {
			let res = self.client.get(self.url("/folders/all")).send().await?;
			let listing: FolderListing = Self::parse(res, "list folders").await?;

			Ok(listing.folders)
		})
	}

	fn rename_folder<'a>(
		&'a self,
		id: FolderId,
		name: &'a str,
	) -> BoxFuture<'a, Result<FolderRenamed>> {
		Box::pin(async move {
			let res = self
				.client
				.patch(self.url(&format!("/folders/{id}")))
				.json(&serde_json::json!({ "name": name }))
				.send()
				.await?;

			Self::parse(res, "rename folder").await
		})
	}

	fn delete_folder(&self, id: FolderId) -> BoxFuture<'_, Result<()>> {
		Box::pin(async move {
			let res = self.client.delete(self.url(&format!("/folders/{id}"))).send().await?;

			res.error_for_status()?;

			Ok(())
		})
	}

	fn create_note<'a>(
		&'a self,
		folder_id: FolderId,
		name: &'a str,
	) -> BoxFuture<'a, Result<NoteCreated>> {
		Box::pin(async move {
			let res = self
				.client
				.post(self.url("/notes"))
				.json(&serde_json::json!({ "folderId": folder_id, "name": name }))
				.send()
				.await?;

			Self::parse(res, "create note").await
		})
	}

	fn list_notes(&self, folder_id: Option<FolderId>) -> BoxFuture<'_, Result<Vec<Note>>> {
		Box::pin(async move {
			let mut req = self.client.get(self.url("/notes"));

			if let Some(folder_id) = folder_id {
				req = req.query(&[("folderId", folder_id)]);
			}

			let listing: NoteListing = Self::parse(req.send().await?, "list notes").await?;

			Ok(listing.notes)
		})
	}
}

fn unwrap_result<T: DeserializeOwned>(body: Value, what: &str) -> Result<T> {
	let envelope: Envelope<T> = serde_json::from_value(body)?;

	envelope
		.result
		.ok_or_else(|| Error::InvalidResponse { message: format!("{what} response is missing result.") })
}
