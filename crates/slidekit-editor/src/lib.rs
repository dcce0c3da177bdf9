//! SlideKit Editor - Sidebar editing for presentations
//!
//! Provides:
//! - Immutable sidebar state snapshots with typed sections
//! - An action set applied by a pure reducer
//! - The editor that derives a modified presentation from its state
//! - Snapshot undo/redo
//! - A headless model of the settings panel

pub mod action;
pub mod editor;
pub mod history;
pub mod panel;
pub mod state;

pub use action::{reduce, EditorAction};
pub use editor::SidebarEditor;
pub use history::SnapshotHistory;
pub use panel::{EditorPanel, PanelControl, PanelTab, PanelView};
pub use state::{
    ConceptPatch, ItemPatch, SectionItem, SectionItems, SectionKind, SidebarEditorState,
    VocabularyPatch,
};
