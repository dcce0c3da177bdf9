//! Sidebar editor state.
//!
//! The state is a pair of typed sections. A section is selected explicitly
//! by [`SectionKind`]; item fields are never looked up by name.

use serde::{Deserialize, Serialize};
use slidekit_core::{
    clamp_font_size, clamp_max_items, ConceptItem, ContentSection, ItemStyle, Slide,
    VocabularyItem,
};
use std::collections::HashSet;
use uuid::Uuid;

/// Which sidebar section an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Vocabulary,
    Concepts,
}

impl SectionKind {
    pub const ALL: [SectionKind; 2] = [Self::Vocabulary, Self::Concepts];

    pub fn label(self) -> &'static str {
        match self {
            Self::Vocabulary => "Vocabulary",
            Self::Concepts => "Concepts",
        }
    }
}

// ── Item patches ────────────────────────────────────────────────

/// Field changes for a vocabulary item. `None` leaves a field as is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VocabularyPatch {
    pub term: Option<String>,
    pub definition: Option<String>,
    pub style: Option<ItemStyle>,
}

/// Field changes for a concept item. `None` leaves a field as is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConceptPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub style: Option<ItemStyle>,
}

/// A patch for one item. The variant selects the section it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemPatch {
    Vocabulary(VocabularyPatch),
    Concept(ConceptPatch),
}

impl ItemPatch {
    pub fn section(&self) -> SectionKind {
        match self {
            Self::Vocabulary(_) => SectionKind::Vocabulary,
            Self::Concept(_) => SectionKind::Concepts,
        }
    }
}

// ── Section items ───────────────────────────────────────────────

/// Behaviour shared by the item types of both sections.
pub trait SectionItem: Clone {
    type Patch;

    /// Prefix for generated identifiers.
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    /// A new item with default fields.
    fn placeholder(id: String) -> Self;
    fn apply_patch(&mut self, patch: &Self::Patch);
}

impl SectionItem for VocabularyItem {
    type Patch = VocabularyPatch;
    const ID_PREFIX: &'static str = "vocab";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn placeholder(id: String) -> Self {
        VocabularyItem::new(id, "New term", "")
    }

    fn apply_patch(&mut self, patch: &VocabularyPatch) {
        if let Some(term) = &patch.term {
            self.term = term.clone();
        }
        if let Some(definition) = &patch.definition {
            self.definition = definition.clone();
        }
        if let Some(style) = &patch.style {
            self.style = Some(style.clone());
        }
    }
}

impl SectionItem for ConceptItem {
    type Patch = ConceptPatch;
    const ID_PREFIX: &'static str = "concept";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn placeholder(id: String) -> Self {
        ConceptItem::new(id, "New concept", "")
    }

    fn apply_patch(&mut self, patch: &ConceptPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(style) = &patch.style {
            self.style = Some(style.clone());
        }
    }
}

/// Generate an identifier not present in `items`.
pub fn fresh_id<T: SectionItem>(items: &[T]) -> String {
    loop {
        let id = format!("{}-{}", T::ID_PREFIX, Uuid::new_v4().simple());
        if !items.iter().any(|item| item.id() == id) {
            return id;
        }
    }
}

/// Copy a section, clamping its bounds and making identifiers unique.
///
/// A repeated identifier gets a numeric suffix (`a`, `a-2`, `a-3`, ...), so
/// deriving twice from the same input yields the same state.
fn derive_section<T: SectionItem>(section: &ContentSection<T>) -> ContentSection<T> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut items = Vec::with_capacity(section.items.len());
    for item in &section.items {
        let mut item = item.clone();
        if seen.contains(item.id()) {
            let base = item.id().to_string();
            let mut n = 2;
            while seen.contains(&format!("{base}-{n}")) {
                n += 1;
            }
            let renamed = format!("{base}-{n}");
            tracing::warn!(id = %base, renamed = %renamed, "duplicate sidebar item id");
            item.set_id(renamed);
        }
        seen.insert(item.id().to_string());
        items.push(item);
    }
    ContentSection {
        max_items: clamp_max_items(section.max_items as i64),
        font_size: clamp_font_size(section.font_size),
        items,
    }
}

// ── Editor state ────────────────────────────────────────────────

/// Immutable snapshot of both sidebar sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarEditorState {
    pub vocabulary: ContentSection<VocabularyItem>,
    pub concepts: ContentSection<ConceptItem>,
}

/// Read-only view of one section's items, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionItems<'a> {
    Vocabulary(&'a [VocabularyItem]),
    Concepts(&'a [ConceptItem]),
}

impl SectionItems<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::Vocabulary(items) => items.len(),
            Self::Concepts(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::Vocabulary(items) => items.iter().map(|i| i.id.as_str()).collect(),
            Self::Concepts(items) => items.iter().map(|i| i.id.as_str()).collect(),
        }
    }
}

impl SidebarEditorState {
    /// Derive editor state from a slide's sidebar content.
    pub fn from_slide(slide: &Slide) -> Self {
        Self {
            vocabulary: derive_section(&slide.content.vocabulary),
            concepts: derive_section(&slide.content.concepts),
        }
    }

    pub fn max_items(&self, section: SectionKind) -> u32 {
        match section {
            SectionKind::Vocabulary => self.vocabulary.max_items,
            SectionKind::Concepts => self.concepts.max_items,
        }
    }

    pub fn font_size(&self, section: SectionKind) -> f64 {
        match section {
            SectionKind::Vocabulary => self.vocabulary.font_size,
            SectionKind::Concepts => self.concepts.font_size,
        }
    }

    pub fn items(&self, section: SectionKind) -> SectionItems<'_> {
        match section {
            SectionKind::Vocabulary => SectionItems::Vocabulary(&self.vocabulary.items),
            SectionKind::Concepts => SectionItems::Concepts(&self.concepts.items),
        }
    }

    pub fn item_count(&self, section: SectionKind) -> usize {
        self.items(section).len()
    }

    /// Write both sections into a slide's content.
    pub fn overlay_onto(&self, slide: &mut Slide) {
        slide.content.vocabulary = self.vocabulary.clone();
        slide.content.concepts = self.concepts.clone();
    }
}
