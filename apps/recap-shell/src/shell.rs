//! Line-oriented session shell over the store and the folder panel.

use std::{
	io::{self, BufRead, Write},
	sync::Arc,
};

use recap_domain::FolderId;
use recap_store::Store;
use recap_views::{FolderPanel, PanelEffect, PanelEvent};

const HELP: &str = "\
commands:
  folders                 list cached folders
  refresh                 re-fetch the folder list
  new <name>              create a folder
  rename <id> <name>      rename a folder
  rmfolder <id>           delete a folder (and its cached notes)
  all                     select all folders (fetches every note)
  select <id>             select one folder
  notes                   list cached notes
  mknote <folder> <name>  create a note in a folder
  rmnote <id>             drop a note from the cache
  title <id> <text>       retitle a cached note
  oneline <id> <text>     set a note's one-line summary
  quit";

pub async fn run(store: Arc<Store>) -> color_eyre::Result<()> {
	let mut panel = FolderPanel::new(store.clone());
	let mut selected: Option<FolderId> = None;
	let stdin = io::stdin();

	println!("{HELP}");
	prompt(selected)?;

	for line in stdin.lock().lines() {
		let line = line?;
		let line = line.trim();
		let mut parts = line.split_whitespace();
		let Some(command) = parts.next() else {
			prompt(selected)?;

			continue;
		};
		let rest = line[command.len()..].trim();

		match command {
			"folders" => {
				for folder in store.folders() {
					println!("{:>4}  {}", folder.id, folder.name);
				}
			},
			"refresh" => store.fetch_folders().await,
			"new" => {
				// Drive the panel the way a view would: activate, type, commit.
				panel.handle(PanelEvent::NewFolder).await;
				panel.handle(PanelEvent::DraftChanged(rest.to_string())).await;
				panel.handle(PanelEvent::Commit).await;

				if panel.is_composing() {
					println!("folder name must be non-empty");
					panel.handle(PanelEvent::Cancel).await;
				}
			},
			"rename" => {
				if let Some((id, name)) = id_and_text(rest) {
					store.update_folder(id, name).await;
				} else {
					println!("usage: rename <id> <name>");
				}
			},
			"rmfolder" => match rest.parse::<FolderId>() {
				Ok(id) => store.delete_folder(id).await,
				Err(_) => println!("usage: rmfolder <id>"),
			},
			"all" => {
				selected = apply(&mut panel, PanelEvent::SelectAll, selected).await;
			},
			"select" => match rest.parse::<FolderId>() {
				Ok(id) => {
					selected = apply(&mut panel, PanelEvent::SelectFolder(id), selected).await;
					store.fetch_notes(Some(id)).await;
				},
				Err(_) => println!("usage: select <id>"),
			},
			"notes" => {
				for note in store.notes() {
					println!("{:>4}  [{}] {} ({} {})", note.id, note.folder_id, note.name, note.date, note.time);
				}
			},
			"mknote" => {
				if let Some((folder_id, name)) = id_and_text(rest) {
					match store.add_note(folder_id, name).await {
						Some(note) => println!("created note {}", note.id),
						None => println!("note creation failed"),
					}
				} else {
					println!("usage: mknote <folder> <name>");
				}
			},
			"rmnote" => match rest.parse::<i64>() {
				Ok(id) => store.delete_note(id),
				Err(_) => println!("usage: rmnote <id>"),
			},
			"title" => {
				if let Some((id, text)) = id_and_text(rest) {
					store.update_note_title(id, text);
				} else {
					println!("usage: title <id> <text>");
				}
			},
			"oneline" => {
				if let Some((id, text)) = id_and_text(rest) {
					store.update_note_one_line(id, text);
				} else {
					println!("usage: oneline <id> <text>");
				}
			},
			"quit" | "exit" => break,
			_ => println!("{HELP}"),
		}

		prompt(selected)?;
	}

	Ok(())
}

async fn apply(
	panel: &mut FolderPanel,
	event: PanelEvent,
	mut selected: Option<FolderId>,
) -> Option<FolderId> {
	for effect in panel.handle(event).await {
		match effect {
			PanelEffect::SelectionChanged(id) => {
				selected = id;

				match id {
					Some(id) => println!("selected folder {id}"),
					None => println!("selected all folders"),
				}
			},
			PanelEffect::NavigateToList => println!("-> note list"),
		}
	}

	selected
}

fn id_and_text(rest: &str) -> Option<(i64, &str)> {
	let (id, text) = rest.split_once(char::is_whitespace)?;
	let id = id.parse().ok()?;
	let text = text.trim();

	(!text.is_empty()).then_some((id, text))
}

fn prompt(selected: Option<FolderId>) -> io::Result<()> {
	match selected {
		Some(id) => print!("recap[{id}]> "),
		None => print!("recap> "),
	}

	io::stdout().flush()
}
