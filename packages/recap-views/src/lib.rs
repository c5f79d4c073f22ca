//! Folder navigation panel: an event-driven layer over the store.
//!
//! Rendering belongs to the embedding layer; the panel only runs the
//! compose-mode state machine and translates selection events into store
//! calls and effects.

use std::sync::Arc;

use recap_domain::FolderId;
use recap_store::Store;

/// Inputs from the embedding layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelEvent {
	/// Activate the new-folder input.
	NewFolder,
	/// Leave the input, discarding the draft.
	Cancel,
	/// Replace the draft text.
	DraftChanged(String),
	/// Multi-keystroke text composition began (IME).
	CompositionStart,
	CompositionEnd,
	/// Commit the draft as a new folder name.
	Commit,
	/// The "all folders" affordance.
	SelectAll,
	SelectFolder(FolderId),
}

/// Outputs for the embedding layer to interpret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelEffect {
	SelectionChanged(Option<FolderId>),
	/// Navigate to the note list route.
	NavigateToList,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ComposeMode {
	Idle,
	Composing { draft: String, ime_active: bool },
}

pub struct FolderPanel {
	store: Arc<Store>,
	mode: ComposeMode,
}
impl FolderPanel {
	pub fn new(store: Arc<Store>) -> Self {
		Self { store, mode: ComposeMode::Idle }
	}

	pub fn is_composing(&self) -> bool {
		matches!(self.mode, ComposeMode::Composing { .. })
	}

	pub fn draft(&self) -> Option<&str> {
		match &self.mode {
			ComposeMode::Composing { draft, .. } => Some(draft),
			ComposeMode::Idle => None,
		}
	}

	pub async fn handle(&mut self, event: PanelEvent) -> Vec<PanelEffect> {
		match event {
			PanelEvent::NewFolder => {
				self.mode = ComposeMode::Composing { draft: String::new(), ime_active: false };

				Vec::new()
			},
			PanelEvent::Cancel => {
				self.mode = ComposeMode::Idle;

				Vec::new()
			},
			PanelEvent::DraftChanged(text) => {
				if let ComposeMode::Composing { draft, .. } = &mut self.mode {
					*draft = text;
				}

				Vec::new()
			},
			PanelEvent::CompositionStart => {
				if let ComposeMode::Composing { ime_active, .. } = &mut self.mode {
					*ime_active = true;
				}

				Vec::new()
			},
			PanelEvent::CompositionEnd => {
				if let ComposeMode::Composing { ime_active, .. } = &mut self.mode {
					*ime_active = false;
				}

				Vec::new()
			},
			PanelEvent::Commit => {
				let ComposeMode::Composing { draft, ime_active } = &self.mode else {
					return Vec::new();
				};

				// A commit that lands mid-composition would double-submit
				// the in-flight IME text.
				if *ime_active {
					return Vec::new();
				}

				let name = draft.trim().to_string();

				if name.is_empty() {
					return Vec::new();
				}

				self.store.add_folder(&name).await;
				self.mode = ComposeMode::Idle;

				Vec::new()
			},
			PanelEvent::SelectAll => {
				self.store.fetch_notes(None).await;

				vec![PanelEffect::SelectionChanged(None), PanelEffect::NavigateToList]
			},
			PanelEvent::SelectFolder(id) => {
				// No implicit fetch; the folder item view owns that.
				vec![PanelEffect::SelectionChanged(Some(id))]
			},
		}
	}
}
