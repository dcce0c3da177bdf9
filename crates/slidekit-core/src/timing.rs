//! Playback timing helpers shared by the playback model and the exporter.

use crate::presentation::LayoutSegment;

/// Index of the segment whose `[start, start + duration)` window contains
/// `elapsed`. Overlapping segments resolve to the first in list order.
pub fn active_segment_index(segments: &[LayoutSegment], elapsed: f64) -> Option<usize> {
    segments.iter().position(|s| s.contains(elapsed))
}

/// The segment active at `elapsed`, if any.
pub fn active_segment(segments: &[LayoutSegment], elapsed: f64) -> Option<&LayoutSegment> {
    active_segment_index(segments, elapsed).map(|i| &segments[i])
}

/// Fraction of the slide played, in `[0, 1]`. Zero-length slides report 0.
pub fn progress_fraction(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}
