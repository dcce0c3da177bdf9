//! Playback model.
//!
//! [`PlaybackController`] follows the same rules as the exported `app.js`
//! player: one slide and at most one audio cue at a time, progress saved on
//! every slide load, keyboard navigation bounded at both ends.

use serde::{Deserialize, Serialize};
use slidekit_core::{active_segment_index, progress_fraction, PresentationConfig, Slide};

use crate::options::{ExportOptions, OnAudioEnd};

/// Persisted resume point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProgress {
    pub slide_index: usize,
    /// Milliseconds since the Unix epoch when the slide was loaded.
    pub timestamp: i64,
}

/// The part of a stored entry that is read back. Other fields are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredIndex {
    slide_index: usize,
}

/// Key/value persistence for progress, the `localStorage` of the model.
pub trait ProgressStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: String);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryProgressStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Parsed progress stored under `key`, if any.
    pub fn progress(&self, key: &str) -> Option<StoredProgress> {
        self.entries
            .get(key)
            .and_then(|raw| serde_json::from_str(raw).ok())
    }
}

impl ProgressStore for MemoryProgressStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Keys the player reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowRight,
    ArrowLeft,
}

/// The audio element of the current slide.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioCue {
    pub slide_id: u32,
    pub path: String,
    pub playing: bool,
}

/// Result of advancing the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub elapsed: f64,
    pub active_segment: Option<usize>,
    /// Whether the active segment differs from the previous tick.
    pub segment_changed: bool,
    pub progress: f64,
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub struct PlaybackController<S: ProgressStore> {
    config: PresentationConfig,
    storage_key: String,
    on_audio_end: OnAudioEnd,
    store: S,
    clock: fn() -> i64,
    slide_index: usize,
    playing: bool,
    elapsed: f64,
    active_segment: Option<usize>,
    audio: Option<AudioCue>,
}

impl<S: ProgressStore> PlaybackController<S> {
    pub fn new(config: PresentationConfig, options: &ExportOptions, store: S) -> Self {
        Self {
            config,
            storage_key: options.storage_key.clone(),
            on_audio_end: options.on_audio_end,
            store,
            clock: now_millis,
            slide_index: 0,
            playing: false,
            elapsed: 0.0,
            active_segment: None,
            audio: None,
        }
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Resume from stored progress, or start at the first slide.
    ///
    /// Unreadable or out-of-range progress is ignored.
    pub fn start(&mut self) {
        if self.config.slides.is_empty() {
            return;
        }
        let index = self.stored_index().unwrap_or(0);
        self.load_slide(index);
    }

    fn stored_index(&self) -> Option<usize> {
        let raw = self.store.load(&self.storage_key)?;
        match serde_json::from_str::<StoredIndex>(&raw) {
            Ok(progress) if progress.slide_index < self.config.slide_count() => {
                tracing::debug!(slide_index = progress.slide_index, "Resuming stored progress");
                Some(progress.slide_index)
            }
            Ok(progress) => {
                tracing::warn!(
                    slide_index = progress.slide_index,
                    slides = self.config.slide_count(),
                    "Ignoring out-of-range stored progress"
                );
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed stored progress");
                None
            }
        }
    }

    /// Show the slide at `index`. Out-of-range indices are ignored.
    pub fn load_slide(&mut self, index: usize) -> bool {
        let Some(slide) = self.config.slides.get(index) else {
            return false;
        };
        self.audio = slide.audio.src.as_ref().map(|_| AudioCue {
            slide_id: slide.id,
            path: slide.audio_asset_path(),
            playing: self.playing,
        });
        self.active_segment = active_segment_index(&slide.layout, 0.0);
        self.slide_index = index;
        self.elapsed = 0.0;
        self.save_progress();
        true
    }

    fn save_progress(&mut self) {
        let progress = StoredProgress {
            slide_index: self.slide_index,
            timestamp: (self.clock)(),
        };
        match serde_json::to_string(&progress) {
            Ok(value) => self.store.save(&self.storage_key, value),
            Err(e) => tracing::warn!(error = %e, "Could not save progress"),
        }
    }

    pub fn play(&mut self) {
        if self.playing || self.config.slides.is_empty() {
            return;
        }
        self.playing = true;
        if let Some(audio) = &mut self.audio {
            audio.playing = true;
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
        if let Some(audio) = &mut self.audio {
            audio.playing = false;
        }
    }

    pub fn toggle_play(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn next(&mut self) -> bool {
        self.slide_index + 1 < self.config.slide_count() && self.load_slide(self.slide_index + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.slide_index > 0 && self.load_slide(self.slide_index - 1)
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Space => self.toggle_play(),
            Key::ArrowRight => {
                self.next();
            }
            Key::ArrowLeft => {
                self.prev();
            }
        }
    }

    /// Advance the clock by `dt` seconds. Time only passes while playing.
    pub fn tick(&mut self, dt: f64) -> Tick {
        if self.playing && dt > 0.0 {
            self.elapsed += dt;
        }
        let (active, duration) = match self.current_slide() {
            Some(slide) => (active_segment_index(&slide.layout, self.elapsed), slide.duration()),
            None => (None, 0.0),
        };
        let segment_changed = active != self.active_segment;
        self.active_segment = active;
        Tick {
            elapsed: self.elapsed,
            active_segment: active,
            segment_changed,
            progress: progress_fraction(self.elapsed, duration),
        }
    }

    /// The current slide's audio finished.
    pub fn on_audio_ended(&mut self) {
        let advanced = self.on_audio_end == OnAudioEnd::Advance && self.next();
        if !advanced {
            self.pause();
        }
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.config.slides.get(self.slide_index)
    }

    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn audio(&self) -> Option<&AudioCue> {
        self.audio.as_ref()
    }

    /// Name of the active layout, `"default"` between segments.
    pub fn active_layout(&self) -> &str {
        self.current_slide()
            .zip(self.active_segment)
            .and_then(|(slide, i)| slide.layout.get(i))
            .map(|segment| segment.layout.as_str())
            .unwrap_or("default")
    }

    /// Text of the slide counter, `"<n> / <total>"`.
    pub fn counter(&self) -> String {
        let total = self.config.slide_count();
        let current = if total == 0 { 0 } else { self.slide_index + 1 };
        format!("{} / {}", current, total)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
