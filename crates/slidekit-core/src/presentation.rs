//! Presentation data model.
//!
//! A presentation is an ordered list of slides. Each slide carries its
//! sidebar content (vocabulary and concept lists), the timed layout segments
//! that play while its narration runs, and the narration audio itself.
//! Field names serialize in camelCase so the same JSON is read by the
//! exported browser runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SlideKitError};

/// Lower bound for a section's visible item count.
pub const MIN_ITEMS: u32 = 1;
/// Upper bound for a section's visible item count.
pub const MAX_ITEMS: u32 = 5;
/// Lower bound for a section's font scale.
pub const MIN_FONT_SIZE: f64 = 0.5;
/// Upper bound for a section's font scale.
pub const MAX_FONT_SIZE: f64 = 1.2;

/// Clamp a requested item count into `[MIN_ITEMS, MAX_ITEMS]`.
pub fn clamp_max_items(count: i64) -> u32 {
    count.clamp(MIN_ITEMS as i64, MAX_ITEMS as i64) as u32
}

/// Clamp a requested font scale into `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
/// NaN maps to the lower bound.
pub fn clamp_font_size(size: f64) -> f64 {
    if size.is_nan() {
        return MIN_FONT_SIZE;
    }
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

// ── Presentation ────────────────────────────────────────────────

/// A complete presentation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationConfig {
    #[serde(default)]
    pub title: String,
    pub slides: Vec<Slide>,
}

impl PresentationConfig {
    /// Create an empty presentation.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slides: Vec::new(),
        }
    }

    /// Append a slide.
    pub fn push_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Sum of every slide's declared duration, in seconds.
    pub fn total_duration(&self) -> f64 {
        self.slides.iter().map(Slide::duration).sum()
    }

    /// Find a slide by its identifier.
    pub fn slide_by_id(&self, id: u32) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    /// Number of slides that carry an audio source.
    pub fn audio_slide_count(&self) -> usize {
        self.slides.iter().filter(|s| s.audio.src.is_some()).count()
    }
}

// ── Slide ───────────────────────────────────────────────────────

/// One slide of a presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: u32,
    #[serde(default)]
    pub content: SlideContent,
    #[serde(default)]
    pub layout: Vec<LayoutSegment>,
    #[serde(default)]
    pub audio: SlideAudio,
}

impl Slide {
    /// Create a slide with empty content, no layout and no audio.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            content: SlideContent::default(),
            layout: Vec::new(),
            audio: SlideAudio::default(),
        }
    }

    /// Builder: set narration audio.
    pub fn with_audio(mut self, src: impl Into<String>, duration: f64) -> Self {
        self.audio = SlideAudio {
            src: Some(src.into()),
            duration,
        };
        self
    }

    /// Builder: append a layout segment.
    pub fn with_segment(mut self, segment: LayoutSegment) -> Self {
        self.layout.push(segment);
        self
    }

    /// Builder: replace the content payload.
    pub fn with_content(mut self, content: SlideContent) -> Self {
        self.content = content;
        self
    }

    /// Declared duration of the slide in seconds (the narration length).
    pub fn duration(&self) -> f64 {
        self.audio.duration
    }

    /// Bundle path of this slide's staged narration.
    pub fn audio_asset_path(&self) -> String {
        audio_asset_path(self.id)
    }
}

/// Bundle path used for a slide's narration audio.
pub fn audio_asset_path(slide_id: u32) -> String {
    format!("audio/slide-{}.mp3", slide_id)
}

/// Narration attached to a slide.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideAudio {
    /// Where to fetch the audio from. `None` means a silent slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Declared length in seconds.
    #[serde(default)]
    pub duration: f64,
}

// ── Layout segments ─────────────────────────────────────────────

/// A layout that is active for a window of time within its slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSegment {
    /// Offset from slide start, in seconds.
    pub start_time: f64,
    /// Length in seconds.
    pub duration: f64,
    /// Layout name; the runtime applies it as a `layout-<name>` class.
    #[serde(default = "default_layout")]
    pub layout: String,
    /// Animation used when the segment becomes active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<PresetName>,
}

fn default_layout() -> String {
    "default".to_string()
}

impl LayoutSegment {
    pub fn new(start_time: f64, duration: f64, layout: impl Into<String>) -> Self {
        Self {
            start_time,
            duration,
            layout: layout.into(),
            animation: None,
        }
    }

    pub fn with_animation(mut self, animation: PresetName) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Exclusive end of the segment.
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Whether `elapsed` falls within `[start, start + duration)`.
    pub fn contains(&self, elapsed: f64) -> bool {
        elapsed >= self.start_time && elapsed < self.end_time()
    }
}

/// Named animation presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresetName {
    FadeIn,
    SlideUp,
    SlideLeft,
    ScaleIn,
    Stagger,
    Bounce,
    None,
}

impl PresetName {
    pub const ALL: [PresetName; 7] = [
        Self::FadeIn,
        Self::SlideUp,
        Self::SlideLeft,
        Self::ScaleIn,
        Self::Stagger,
        Self::Bounce,
        Self::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FadeIn => "fadeIn",
            Self::SlideUp => "slideUp",
            Self::SlideLeft => "slideLeft",
            Self::ScaleIn => "scaleIn",
            Self::Stagger => "stagger",
            Self::Bounce => "bounce",
            Self::None => "none",
        }
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetName {
    type Err = SlideKitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                SlideKitError::InvalidParameter(format!("unknown animation preset: {s}"))
            })
    }
}

// ── Sidebar content ─────────────────────────────────────────────

/// Sidebar content shown next to a slide.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub vocabulary: ContentSection<VocabularyItem>,
    #[serde(default)]
    pub concepts: ContentSection<ConceptItem>,
}

/// A list of sidebar items with its display bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection<T> {
    #[serde(default = "default_max_items")]
    pub max_items: u32,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

fn default_max_items() -> u32 {
    3
}

fn default_font_size() -> f64 {
    1.0
}

impl<T> Default for ContentSection<T> {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            font_size: default_font_size(),
            items: Vec::new(),
        }
    }
}

impl<T> ContentSection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Items the sidebar actually shows (the first `max_items`).
    pub fn visible_items(&self) -> &[T] {
        let n = (self.max_items as usize).min(self.items.len());
        &self.items[..n]
    }
}

/// Optional styling hints for a sidebar item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub emphasis: bool,
}

/// A vocabulary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub id: String,
    pub term: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ItemStyle>,
}

impl VocabularyItem {
    pub fn new(
        id: impl Into<String>,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            term: term.into(),
            definition: definition.into(),
            style: None,
        }
    }
}

/// A concept entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ItemStyle>,
}

impl ConceptItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            style: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_slides() -> PresentationConfig {
        let mut config = PresentationConfig::new("Durations");
        config.push_slide(Slide::new(1).with_audio("a.mp3", 10.0));
        config.push_slide(Slide::new(2).with_audio("b.mp3", 15.0));
        config.push_slide(Slide::new(3).with_audio("c.mp3", 7.0));
        config
    }

    #[test]
    fn test_total_duration() {
        assert_eq!(three_slides().total_duration(), 32.0);
    }

    #[test]
    fn test_silent_slide_has_zero_duration() {
        assert_eq!(Slide::new(4).duration(), 0.0);
    }

    #[test]
    fn test_audio_asset_path() {
        assert_eq!(Slide::new(7).audio_asset_path(), "audio/slide-7.mp3");
    }

    #[test]
    fn test_segment_interval_is_half_open() {
        let seg = LayoutSegment::new(5.0, 10.0, "split");
        assert!(!seg.contains(4.999));
        assert!(seg.contains(5.0));
        assert!(seg.contains(14.999));
        assert!(!seg.contains(15.0));
    }

    #[test]
    fn test_clamps() {
        assert_eq!(clamp_max_items(-3), 1);
        assert_eq!(clamp_max_items(4), 4);
        assert_eq!(clamp_max_items(99), 5);
        assert_eq!(clamp_font_size(0.1), 0.5);
        assert_eq!(clamp_font_size(0.8), 0.8);
        assert_eq!(clamp_font_size(3.0), 1.2);
        assert_eq!(clamp_font_size(f64::NAN), 0.5);
    }

    #[test]
    fn test_visible_items() {
        let mut section = ContentSection::new(vec![1, 2, 3, 4]);
        section.max_items = 2;
        assert_eq!(section.visible_items(), &[1, 2]);
        section.max_items = 5;
        assert_eq!(section.visible_items().len(), 4);
    }

    #[test]
    fn test_preset_name_parsing() {
        assert_eq!("slideUp".parse::<PresetName>().unwrap(), PresetName::SlideUp);
        assert!("wobble".parse::<PresetName>().is_err());
        for name in PresetName::ALL {
            assert_eq!(name.as_str().parse::<PresetName>().unwrap(), name);
        }
    }

    #[test]
    fn test_camel_case_json() {
        let json = serde_json::json!({
            "title": "Lesson",
            "slides": [{
                "id": 1,
                "content": {
                    "title": "Intro",
                    "vocabulary": {
                        "maxItems": 2,
                        "fontSize": 0.9,
                        "items": [{ "id": "v1", "term": "Atom" }]
                    }
                },
                "layout": [{ "startTime": 0, "duration": 20, "animation": "fadeIn" }],
                "audio": { "src": "narration/1.mp3", "duration": 20 }
            }]
        });
        let config: PresentationConfig = serde_json::from_value(json).unwrap();
        let slide = &config.slides[0];
        assert_eq!(slide.content.vocabulary.max_items, 2);
        assert_eq!(slide.content.vocabulary.items[0].term, "Atom");
        assert_eq!(slide.content.concepts.max_items, 3);
        assert_eq!(slide.layout[0].layout, "default");
        assert_eq!(slide.layout[0].animation, Some(PresetName::FadeIn));
        assert_eq!(slide.duration(), 20.0);

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["slides"][0]["layout"][0]["startTime"], 0.0);
        assert_eq!(back["slides"][0]["content"]["vocabulary"]["fontSize"], 0.9);
    }
}
