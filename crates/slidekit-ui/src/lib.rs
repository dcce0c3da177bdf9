//! SlideKit UI - egui rendering of the sidebar editor
//!
//! Provides:
//! - The sidebar settings panel drawn over [`slidekit_editor::EditorPanel`]
//! - A dark glass theme
//! - Painted sliders and text fields

pub mod sidebar_panel;
pub mod theme;
pub mod widgets;

pub use sidebar_panel::{apply_events, show_sidebar_panel, PanelEvent};
pub use theme::Theme;
