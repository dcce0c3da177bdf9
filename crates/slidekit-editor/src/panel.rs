//! Headless model of the sidebar settings panel.
//!
//! The panel only knows whether it is shown and which tab is active. Every
//! control that changes content maps to exactly one [`EditorAction`].

use crate::action::EditorAction;
use crate::editor::SidebarEditor;
use crate::state::{ItemPatch, SectionItems, SectionKind};

/// A tab of the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelTab {
    #[default]
    Vocabulary,
    Concepts,
}

impl PanelTab {
    pub const ALL: [PanelTab; 2] = [Self::Vocabulary, Self::Concepts];

    pub fn section(self) -> SectionKind {
        match self {
            Self::Vocabulary => SectionKind::Vocabulary,
            Self::Concepts => SectionKind::Concepts,
        }
    }

    pub fn label(self) -> &'static str {
        self.section().label()
    }
}

/// A user interaction with the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelControl {
    ToggleVisibility,
    SelectTab(PanelTab),
    MaxItems(i64),
    FontSize(f64),
    EditItem { id: String, patch: ItemPatch },
    AddItem,
    RemoveItem(String),
    Reset,
}

/// What the panel shows for the active tab.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView<'a> {
    pub tab: PanelTab,
    pub max_items: u32,
    pub font_size: f64,
    pub items: SectionItems<'a>,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// View state of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPanel {
    visible: bool,
    active_tab: PanelTab,
}

impl Default for EditorPanel {
    fn default() -> Self {
        Self {
            visible: true,
            active_tab: PanelTab::default(),
        }
    }
}

impl EditorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn active_tab(&self) -> PanelTab {
        self.active_tab
    }

    /// Update view state for `control` and return the editor action it
    /// writes through, if any.
    pub fn handle(&mut self, control: PanelControl) -> Option<EditorAction> {
        let section = self.active_tab.section();
        match control {
            PanelControl::ToggleVisibility => {
                self.visible = !self.visible;
                None
            }
            PanelControl::SelectTab(tab) => {
                self.active_tab = tab;
                None
            }
            PanelControl::MaxItems(count) => Some(EditorAction::SetMaxItems { section, count }),
            PanelControl::FontSize(size) => Some(EditorAction::SetFontSize { section, size }),
            PanelControl::EditItem { id, patch } => Some(EditorAction::UpdateItem { id, patch }),
            PanelControl::AddItem => Some(EditorAction::AddItem { section }),
            PanelControl::RemoveItem(id) => Some(EditorAction::RemoveItem { section, id }),
            PanelControl::Reset => Some(EditorAction::Reset),
        }
    }

    /// Handle `control` and forward the resulting action to `editor`.
    pub fn apply(&mut self, editor: &mut SidebarEditor, control: PanelControl) {
        if let Some(action) = self.handle(control) {
            editor.dispatch(action);
        }
    }

    /// Controls for the active tab, or `None` while the panel is hidden.
    pub fn view<'a>(&self, editor: &'a SidebarEditor) -> Option<PanelView<'a>> {
        if !self.visible {
            return None;
        }
        let section = self.active_tab.section();
        let state = editor.state();
        Some(PanelView {
            tab: self.active_tab,
            max_items: state.max_items(section),
            font_size: state.font_size(section),
            items: state.items(section),
            can_undo: editor.can_undo(),
            can_redo: editor.can_redo(),
        })
    }
}
