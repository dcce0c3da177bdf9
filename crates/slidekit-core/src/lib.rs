//! SlideKit Core - Foundation types for presentation authoring
//!
//! This crate provides the types shared by every SlideKit crate:
//! - The presentation data model (slides, sidebar content, layout segments)
//! - Timing helpers for segment lookup and progress
//! - Cubic Bézier easing curves
//! - Versioned presentation files

pub mod easing;
pub mod error;
pub mod file;
pub mod presentation;
pub mod timing;

pub use easing::CubicBezier;
pub use error::{Result, SlideKitError};
pub use file::PresentationFile;
pub use presentation::{
    audio_asset_path, clamp_font_size, clamp_max_items, ConceptItem, ContentSection, ItemStyle,
    LayoutSegment, PresentationConfig, PresetName, Slide, SlideAudio, SlideContent,
    VocabularyItem, MAX_FONT_SIZE, MAX_ITEMS, MIN_FONT_SIZE, MIN_ITEMS,
};
pub use timing::{active_segment, active_segment_index, progress_fraction};
