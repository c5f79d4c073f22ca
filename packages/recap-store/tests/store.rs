use std::{sync::Arc, time::Duration};

use recap_api::{FolderCreated, FolderRenamed, NoteCreated};
use recap_store::Store;
use recap_testkit::{Call, MockApi, entry, folder, note, remote_failure, ts};

fn store_with(api: &Arc<MockApi>) -> Store {
	Store::new(api.clone())
}

#[tokio::test]
async fn add_folder_appends_confirmed_record() {
	let api = Arc::new(MockApi::new());

	api.script_create_folder(Ok(FolderCreated { id: 1, created_at: ts("2024-01-01T00:00:00Z") }));

	let store = store_with(&api);

	store.add_folder("Work").await;

	let folders = store.folders();

	assert_eq!(folders.len(), 1);
	assert_eq!(folders[0].id, 1);
	assert_eq!(folders[0].name, "Work");
	assert_eq!(folders[0].created_at, ts("2024-01-01T00:00:00Z"));
	assert!(folders[0].updated_at.is_none());
}

#[tokio::test]
async fn each_successful_add_grows_by_one() {
	let api = Arc::new(MockApi::new());

	for id in 1..=3 {
		api.script_create_folder(Ok(FolderCreated {
			id,
			created_at: ts("2024-01-01T00:00:00Z"),
		}));
	}

	let store = store_with(&api);

	for name in ["a", "b", "c"] {
		let before = store.folders().len();

		store.add_folder(name).await;

		assert_eq!(store.folders().len(), before + 1);
		assert!(store.folders().iter().any(|folder| folder.name == name));
	}
}

#[tokio::test]
async fn add_folder_failure_leaves_state_unchanged() {
	let api = Arc::new(MockApi::new());

	api.script_create_folder(Err(remote_failure()));

	let store = store_with(&api);

	store.add_folder("Work").await;

	assert!(store.folders().is_empty());
}

#[tokio::test]
async fn bootstrap_populates_folders_and_survives_failure() {
	let api = Arc::new(MockApi::new());

	api.script_list_folders(Ok(vec![folder(1, "Work", "2024-01-01T00:00:00Z")]));

	let store = store_with(&api);

	store.bootstrap().await;

	assert_eq!(store.folders().len(), 1);

	let failing = Arc::new(MockApi::new());

	failing.script_list_folders(Err(remote_failure()));

	let empty_store = store_with(&failing);

	empty_store.bootstrap().await;

	assert!(empty_store.folders().is_empty());
}

#[tokio::test]
async fn fetch_folders_replaces_wholesale() {
	let api = Arc::new(MockApi::new());

	api.script_list_folders(Ok(vec![
		folder(1, "Work", "2024-01-01T00:00:00Z"),
		folder(2, "Home", "2024-01-02T00:00:00Z"),
	]));
	api.script_list_folders(Ok(vec![folder(3, "Archive", "2024-01-03T00:00:00Z")]));

	let store = store_with(&api);

	store.fetch_folders().await;

	assert_eq!(store.folders().len(), 2);

	store.fetch_folders().await;

	let folders = store.folders();

	assert_eq!(folders.len(), 1);
	assert_eq!(folders[0].name, "Archive");
}

#[tokio::test]
async fn update_folder_touches_only_the_target() {
	let api = Arc::new(MockApi::new());

	api.script_list_folders(Ok(vec![
		folder(1, "Work", "2024-01-01T00:00:00Z"),
		folder(2, "Home", "2024-01-02T00:00:00Z"),
	]));
	api.script_rename_folder(Ok(FolderRenamed { updated_at: ts("2024-02-01T00:00:00Z") }));

	let store = store_with(&api);

	store.fetch_folders().await;

	let before = store.folders();

	store.update_folder(1, "Office").await;

	let after = store.folders();

	assert_eq!(after[0].name, "Office");
	assert_eq!(after[0].updated_at, Some(ts("2024-02-01T00:00:00Z")));
	assert_eq!(after[1], before[1]);
}

#[tokio::test]
async fn update_folder_unknown_id_is_a_noop() {
	let api = Arc::new(MockApi::new());

	api.script_list_folders(Ok(vec![folder(1, "Work", "2024-01-01T00:00:00Z")]));
	api.script_rename_folder(Ok(FolderRenamed { updated_at: ts("2024-02-01T00:00:00Z") }));

	let store = store_with(&api);

	store.fetch_folders().await;
	store.update_folder(99, "Ghost").await;

	assert_eq!(store.folders(), vec![folder(1, "Work", "2024-01-01T00:00:00Z")]);
}

#[tokio::test]
async fn delete_folder_cascades_to_its_notes_only() {
	let api = Arc::new(MockApi::new());

	api.script_list_folders(Ok(vec![
		folder(1, "Work", "2024-01-01T00:00:00Z"),
		folder(2, "Home", "2024-01-02T00:00:00Z"),
	]));
	api.script_list_notes(Ok(vec![
		note(10, 1, "Standup", "2024-01-05T09:00:00Z"),
		note(11, 2, "Groceries", "2024-01-05T10:00:00Z"),
		note(12, 1, "Retro", "2024-01-06T09:00:00Z"),
	]));
	api.script_delete_folder(Ok(()));

	let store = store_with(&api);

	store.fetch_folders().await;
	store.fetch_notes(None).await;
	store.delete_folder(1).await;

	assert_eq!(store.folders().len(), 1);
	assert_eq!(store.folders()[0].id, 2);

	let notes = store.notes();

	assert_eq!(notes.len(), 1);
	assert_eq!(notes[0].id, 11);
}

#[tokio::test]
async fn delete_folder_failure_removes_nothing() {
	let api = Arc::new(MockApi::new());

	api.script_list_folders(Ok(vec![folder(1, "Work", "2024-01-01T00:00:00Z")]));
	api.script_delete_folder(Err(remote_failure()));

	let store = store_with(&api);

	store.fetch_folders().await;
	store.delete_folder(1).await;

	assert_eq!(store.folders().len(), 1);
}

#[tokio::test]
async fn add_note_returns_the_built_record() {
	let api = Arc::new(MockApi::new());

	api.script_create_note(Ok(NoteCreated { id: 5, created_at: ts("2024-03-15T14:30:00Z") }));

	let store = store_with(&api);
	let created = store.add_note(2, "Weekly sync").await.expect("add_note must succeed");

	assert_eq!(created.id, 5);
	assert_eq!(created.folder_id, 2);
	assert_eq!(created.date, "2024.03.15");
	assert_eq!(created.time, "14:30");
	assert_eq!(created.day, "Friday");
	assert!(created.script.is_empty());
	assert_eq!(store.notes(), vec![created]);
}

#[tokio::test]
async fn add_note_failure_returns_none() {
	let api = Arc::new(MockApi::new());

	api.script_create_note(Err(remote_failure()));

	let store = store_with(&api);

	assert!(store.add_note(2, "Weekly sync").await.is_none());
	assert!(store.notes().is_empty());
}

#[tokio::test]
async fn fetch_notes_failure_returns_empty_and_keeps_state() {
	let api = Arc::new(MockApi::new());

	api.script_list_notes(Ok(vec![note(10, 1, "Standup", "2024-01-05T09:00:00Z")]));
	api.script_list_notes(Err(remote_failure()));

	let store = store_with(&api);

	store.fetch_notes(Some(1)).await;

	let fetched = store.fetch_notes(Some(2)).await;

	assert!(fetched.is_empty());
	// The failed fetch does not clear the previous snapshot.
	assert_eq!(store.notes().len(), 1);
}

#[tokio::test]
async fn overlapping_fetches_resolve_last_write_wins() {
	let api = Arc::new(MockApi::new());

	// The folder-1 response is delayed, so it lands after the folder-2
	// response and wins the shared collection.
	api.script_list_notes_delayed(
		Ok(vec![note(10, 1, "Standup", "2024-01-05T09:00:00Z")]),
		Duration::from_millis(50),
	);
	api.script_list_notes(Ok(vec![note(20, 2, "Groceries", "2024-01-05T10:00:00Z")]));

	let store = store_with(&api);
	// join! polls in declaration order, so the folder-1 request is issued
	// first and its delayed response resolves second.
	let (first, second) = tokio::join!(store.fetch_notes(Some(1)), store.fetch_notes(Some(2)));

	assert_eq!(first[0].folder_id, 1);
	assert_eq!(second[0].folder_id, 2);

	let notes = store.notes();

	assert_eq!(notes.len(), 1);
	assert_eq!(notes[0].folder_id, 1);
}

#[tokio::test]
async fn delete_note_is_local_only() {
	let api = Arc::new(MockApi::new());

	api.script_list_notes(Ok(vec![
		note(10, 1, "Standup", "2024-01-05T09:00:00Z"),
		note(11, 1, "Retro", "2024-01-06T09:00:00Z"),
	]));

	let store = store_with(&api);

	store.fetch_notes(Some(1)).await;
	store.delete_note(10);

	assert_eq!(store.notes().len(), 1);
	assert_eq!(store.notes()[0].id, 11);
	// No remote delete traffic.
	assert_eq!(api.calls(), vec![Call::ListNotes { folder_id: Some(1) }]);
}

#[tokio::test]
async fn note_field_updates_target_one_note() {
	let api = Arc::new(MockApi::new());

	api.script_list_notes(Ok(vec![
		note(10, 1, "Standup", "2024-01-05T09:00:00Z"),
		note(11, 1, "Retro", "2024-01-06T09:00:00Z"),
	]));

	let store = store_with(&api);

	store.fetch_notes(Some(1)).await;
	store.update_note_title(10, "Daily standup");
	store.update_note_one_line(11, "What went well");

	let notes = store.notes();

	assert_eq!(notes[0].name, "Daily standup");
	assert!(notes[0].one_line_summary.is_empty());
	assert_eq!(notes[1].name, "Retro");
	assert_eq!(notes[1].one_line_summary, "What went well");
}

fn seeded_note() -> recap_domain::Note {
	let mut seeded = note(10, 1, "Standup", "2024-01-05T09:00:00Z");

	seeded.script = vec![entry(1, "Alice", "hello"), entry(2, "Bob", "hi")];
	seeded.summary = vec![entry(1, "Alice", "greeted")];
	seeded.todo = vec![entry(1, "Bob", "follow up")];

	seeded
}

#[tokio::test]
async fn update_script_item_touches_only_that_entry() {
	let api = Arc::new(MockApi::new());

	api.script_list_notes(Ok(vec![seeded_note()]));

	let store = store_with(&api);

	store.fetch_notes(Some(1)).await;
	store.update_script_item(10, 2, "hi there");

	let notes = store.notes();

	assert_eq!(notes[0].script, vec![entry(1, "Alice", "hello"), entry(2, "Bob", "hi there")]);
	assert_eq!(notes[0].summary, vec![entry(1, "Alice", "greeted")]);
	assert_eq!(notes[0].todo, vec![entry(1, "Bob", "follow up")]);
}

#[tokio::test]
async fn delete_script_item_preserves_sibling_order() {
	let api = Arc::new(MockApi::new());

	api.script_list_notes(Ok(vec![seeded_note()]));

	let store = store_with(&api);

	store.fetch_notes(Some(1)).await;
	store.delete_script_item(10, 1);

	assert_eq!(store.notes()[0].script, vec![entry(2, "Bob", "hi")]);

	// Updating the deleted entry is a no-op.
	store.update_script_item(10, 1, "resurrected");

	assert_eq!(store.notes()[0].script, vec![entry(2, "Bob", "hi")]);
}

#[tokio::test]
async fn summary_and_todo_edits_share_the_contract() {
	let api = Arc::new(MockApi::new());

	api.script_list_notes(Ok(vec![seeded_note()]));

	let store = store_with(&api);

	store.fetch_notes(Some(1)).await;
	store.update_summary_item(10, 1, "greeted everyone");
	store.update_todo_item(10, 1, "follow up by Friday");

	let notes = store.notes();

	assert_eq!(notes[0].summary[0].content, "greeted everyone");
	assert_eq!(notes[0].summary[0].speaker, "Alice");
	assert_eq!(notes[0].todo[0].content, "follow up by Friday");

	store.delete_summary_item(10, 1);
	store.delete_todo_item(10, 1);

	let notes = store.notes();

	assert!(notes[0].summary.is_empty());
	assert!(notes[0].todo.is_empty());
	assert_eq!(notes[0].script.len(), 2);
}
