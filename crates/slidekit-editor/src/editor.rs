//! The sidebar editor.
//!
//! Owns the read-only original presentation, the current state snapshot,
//! and the derived modified presentation. The modified presentation is
//! rebuilt after every state change and whenever the original is replaced.

use slidekit_core::{PresentationConfig, Result, SlideKitError};
use tracing::debug;

use crate::action::{reduce, EditorAction};
use crate::history::SnapshotHistory;
use crate::state::{ItemPatch, SectionKind, SidebarEditorState};

/// Editor for the sidebar of one slide.
#[derive(Debug, Clone)]
pub struct SidebarEditor {
    original: PresentationConfig,
    slide_index: usize,
    /// State derived from `original`; the target of `Reset`.
    baseline: SidebarEditorState,
    state: SidebarEditorState,
    modified: PresentationConfig,
    history: SnapshotHistory,
}

impl SidebarEditor {
    /// Create an editor for the slide at `slide_index`.
    pub fn new(original: PresentationConfig, slide_index: usize) -> Result<Self> {
        let baseline = derive_baseline(&original, slide_index)?;
        let mut editor = Self {
            modified: original.clone(),
            original,
            slide_index,
            state: baseline.clone(),
            baseline,
            history: SnapshotHistory::default(),
        };
        editor.recompute();
        Ok(editor)
    }

    /// Current state snapshot.
    pub fn state(&self) -> &SidebarEditorState {
        &self.state
    }

    /// The original presentation with the edited sidebar overlaid.
    pub fn modified_config(&self) -> &PresentationConfig {
        &self.modified
    }

    pub fn original(&self) -> &PresentationConfig {
        &self.original
    }

    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    /// Whether the state differs from the one derived from the original.
    pub fn is_dirty(&self) -> bool {
        self.state != self.baseline
    }

    /// Apply an action. Actions that leave the state unchanged are not
    /// recorded in history.
    pub fn dispatch(&mut self, action: EditorAction) {
        let next = reduce(&self.state, &action, &self.baseline);
        if next == self.state {
            debug!(action = action.name(), "editor action had no effect");
            return;
        }
        debug!(action = action.name(), slide = self.slide_index, "editor action");
        let previous = std::mem::replace(&mut self.state, next);
        self.history.push(previous);
        self.recompute();
    }

    pub fn set_max_items(&mut self, section: SectionKind, count: i64) {
        self.dispatch(EditorAction::SetMaxItems { section, count });
    }

    pub fn set_font_size(&mut self, section: SectionKind, size: f64) {
        self.dispatch(EditorAction::SetFontSize { section, size });
    }

    pub fn update_item(&mut self, id: impl Into<String>, patch: ItemPatch) {
        self.dispatch(EditorAction::UpdateItem {
            id: id.into(),
            patch,
        });
    }

    /// Append a placeholder item and return its identifier.
    pub fn add_item(&mut self, section: SectionKind) -> String {
        self.dispatch(EditorAction::AddItem { section });
        let items = self.state.items(section);
        let ids = items.ids();
        ids.last().map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn remove_item(&mut self, section: SectionKind, id: impl Into<String>) {
        self.dispatch(EditorAction::RemoveItem {
            section,
            id: id.into(),
        });
    }

    pub fn reset(&mut self) {
        self.dispatch(EditorAction::Reset);
    }

    pub fn undo(&mut self) -> bool {
        let current = self.state.clone();
        match self.history.undo(current) {
            Some(previous) => {
                self.state = previous;
                self.recompute();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let current = self.state.clone();
        match self.history.redo(current) {
            Some(next) => {
                self.state = next;
                self.recompute();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the original presentation. The current edits are kept and
    /// overlaid onto the new original; `Reset` now targets the new one.
    pub fn set_original(&mut self, original: PresentationConfig) -> Result<()> {
        let baseline = derive_baseline(&original, self.slide_index)?;
        self.original = original;
        self.baseline = baseline;
        self.recompute();
        Ok(())
    }

    /// Retarget the editor at another slide, discarding edits and history.
    pub fn select_slide(&mut self, slide_index: usize) -> Result<()> {
        let baseline = derive_baseline(&self.original, slide_index)?;
        self.slide_index = slide_index;
        self.state = baseline.clone();
        self.baseline = baseline;
        self.history.clear();
        self.recompute();
        Ok(())
    }

    fn recompute(&mut self) {
        let mut modified = self.original.clone();
        if let Some(slide) = modified.slides.get_mut(self.slide_index) {
            self.state.overlay_onto(slide);
        }
        self.modified = modified;
    }
}

fn derive_baseline(config: &PresentationConfig, slide_index: usize) -> Result<SidebarEditorState> {
    config
        .slides
        .get(slide_index)
        .map(SidebarEditorState::from_slide)
        .ok_or_else(|| {
            SlideKitError::InvalidParameter(format!(
                "slide index {} out of range ({} slides)",
                slide_index,
                config.slides.len()
            ))
        })
}
