//! SlideKit Anim - Animation preset table
//!
//! Named entry animations for sidebar lists, a shallow merge for
//! per-segment tweaks, and a reduced-motion fallback.

pub mod presets;

pub use presets::{
    merge, preset, preset_table, reduced_motion, AnimationConfig, AnimationOverrides, MotionState,
    VariantBlock, VariantOverrides,
};
pub use slidekit_core::{CubicBezier, PresetName};
