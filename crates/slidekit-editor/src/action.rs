//! Editor actions.
//!
//! Every change to the sidebar is an [`EditorAction`]. [`reduce`] turns the
//! current snapshot and an action into the next snapshot without touching
//! the input.

use serde::{Deserialize, Serialize};
use slidekit_core::{clamp_font_size, clamp_max_items, ContentSection};

use crate::state::{fresh_id, ItemPatch, SectionItem, SectionKind, SidebarEditorState};

/// A change to the sidebar editor state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorAction {
    /// Set the visible item count; clamped to `[1, 5]`.
    SetMaxItems { section: SectionKind, count: i64 },
    /// Set the font scale; clamped to `[0.5, 1.2]`.
    SetFontSize { section: SectionKind, size: f64 },
    /// Patch the item with `id` in the section the patch names.
    UpdateItem { id: String, patch: ItemPatch },
    /// Append a placeholder item with a fresh identifier.
    AddItem { section: SectionKind },
    /// Remove the item with `id`.
    RemoveItem { section: SectionKind, id: String },
    /// Restore both sections from the original configuration.
    Reset,
}

impl EditorAction {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetMaxItems { .. } => "set_max_items",
            Self::SetFontSize { .. } => "set_font_size",
            Self::UpdateItem { .. } => "update_item",
            Self::AddItem { .. } => "add_item",
            Self::RemoveItem { .. } => "remove_item",
            Self::Reset => "reset",
        }
    }
}

fn update_in<T: SectionItem>(
    section: &ContentSection<T>,
    id: &str,
    patch: &T::Patch,
) -> ContentSection<T> {
    let mut next = section.clone();
    if let Some(item) = next.items.iter_mut().find(|item| item.id() == id) {
        item.apply_patch(patch);
    }
    next
}

fn add_to<T: SectionItem>(section: &ContentSection<T>) -> ContentSection<T> {
    let mut next = section.clone();
    let id = fresh_id(&next.items);
    next.items.push(T::placeholder(id));
    next
}

fn remove_from<T: SectionItem>(section: &ContentSection<T>, id: &str) -> ContentSection<T> {
    let mut next = section.clone();
    next.items.retain(|item| item.id() != id);
    next
}

/// Compute the snapshot that follows `state` under `action`.
///
/// `baseline` is the state derived from the original configuration; only
/// [`EditorAction::Reset`] reads it.
pub fn reduce(
    state: &SidebarEditorState,
    action: &EditorAction,
    baseline: &SidebarEditorState,
) -> SidebarEditorState {
    let mut next = state.clone();
    match action {
        EditorAction::SetMaxItems { section, count } => {
            let count = clamp_max_items(*count);
            match section {
                SectionKind::Vocabulary => next.vocabulary.max_items = count,
                SectionKind::Concepts => next.concepts.max_items = count,
            }
        }
        EditorAction::SetFontSize { section, size } => {
            let size = clamp_font_size(*size);
            match section {
                SectionKind::Vocabulary => next.vocabulary.font_size = size,
                SectionKind::Concepts => next.concepts.font_size = size,
            }
        }
        EditorAction::UpdateItem { id, patch } => match patch {
            ItemPatch::Vocabulary(p) => next.vocabulary = update_in(&state.vocabulary, id, p),
            ItemPatch::Concept(p) => next.concepts = update_in(&state.concepts, id, p),
        },
        EditorAction::AddItem { section } => match section {
            SectionKind::Vocabulary => next.vocabulary = add_to(&state.vocabulary),
            SectionKind::Concepts => next.concepts = add_to(&state.concepts),
        },
        EditorAction::RemoveItem { section, id } => match section {
            SectionKind::Vocabulary => next.vocabulary = remove_from(&state.vocabulary, id),
            SectionKind::Concepts => next.concepts = remove_from(&state.concepts, id),
        },
        EditorAction::Reset => next = baseline.clone(),
    }
    next
}
