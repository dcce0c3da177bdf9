//! The preset table.
//!
//! Every preset describes two variant blocks: the container that wraps a
//! sidebar list and the items inside it. Items enter one after the other,
//! `stagger` seconds apart.

use serde::{Deserialize, Serialize};
use slidekit_core::{CubicBezier, PresetName};
use std::collections::BTreeMap;

// ── Types ───────────────────────────────────────────────────────

/// Visual state of an element at one end of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionState {
    pub opacity: f64,
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
    pub scale: f64,
}

impl MotionState {
    /// Fully visible, untransformed.
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Transparent, untransformed.
    pub const TRANSPARENT: Self = Self {
        opacity: 0.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const fn offset(opacity: f64, x: f64, y: f64) -> Self {
        Self {
            opacity,
            x,
            y,
            scale: 1.0,
        }
    }

    pub const fn scaled(opacity: f64, scale: f64) -> Self {
        Self {
            opacity,
            x: 0.0,
            y: 0.0,
            scale,
        }
    }

    /// Inline CSS for this state.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

/// Hidden and visible states of one element, plus its entry delay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantBlock {
    pub hidden: MotionState,
    pub visible: MotionState,
    /// Seconds before the transition starts.
    pub delay: f64,
}

/// Complete timing/easing configuration of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    pub container: VariantBlock,
    pub item: VariantBlock,
    /// Seconds between consecutive items.
    pub stagger: f64,
    /// Seconds per item transition.
    pub duration: f64,
    pub ease: CubicBezier,
}

impl AnimationConfig {
    /// CSS `transition` value for an item.
    pub fn css_transition(&self) -> String {
        let ease = self.ease.to_css();
        format!(
            "opacity {d}s {e}, transform {d}s {e}",
            d = self.duration,
            e = ease
        )
    }

    /// Entry delay of the item at `index`, in seconds.
    pub fn item_delay(&self, index: usize) -> f64 {
        self.container.delay + self.item.delay + self.stagger * index as f64
    }

    /// Time until the last of `count` items has finished entering.
    pub fn total_duration(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        self.item_delay(count - 1) + self.duration
    }
}

/// Partial overrides for a [`VariantBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantOverrides {
    pub hidden: Option<MotionState>,
    pub visible: Option<MotionState>,
    pub delay: Option<f64>,
}

/// Partial overrides for an [`AnimationConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationOverrides {
    pub container: Option<VariantOverrides>,
    pub item: Option<VariantOverrides>,
    pub stagger: Option<f64>,
    pub duration: Option<f64>,
    pub ease: Option<CubicBezier>,
}

// ── Table ───────────────────────────────────────────────────────

const CONTAINER_FADE: VariantBlock = VariantBlock {
    hidden: MotionState::TRANSPARENT,
    visible: MotionState::REST,
    delay: 0.0,
};

/// Fixed configuration for a preset.
pub fn preset(name: PresetName) -> AnimationConfig {
    match name {
        PresetName::FadeIn => AnimationConfig {
            container: CONTAINER_FADE,
            item: VariantBlock {
                hidden: MotionState::TRANSPARENT,
                visible: MotionState::REST,
                delay: 0.0,
            },
            stagger: 0.1,
            duration: 0.5,
            ease: CubicBezier::EASE_OUT,
        },
        PresetName::SlideUp => AnimationConfig {
            container: CONTAINER_FADE,
            item: VariantBlock {
                hidden: MotionState::offset(0.0, 0.0, 20.0),
                visible: MotionState::REST,
                delay: 0.0,
            },
            stagger: 0.1,
            duration: 0.5,
            ease: CubicBezier::EASE_OUT,
        },
        PresetName::SlideLeft => AnimationConfig {
            container: CONTAINER_FADE,
            item: VariantBlock {
                hidden: MotionState::offset(0.0, 30.0, 0.0),
                visible: MotionState::REST,
                delay: 0.0,
            },
            stagger: 0.12,
            duration: 0.45,
            ease: CubicBezier::EASE_IN_OUT,
        },
        PresetName::ScaleIn => AnimationConfig {
            container: CONTAINER_FADE,
            item: VariantBlock {
                hidden: MotionState::scaled(0.0, 0.8),
                visible: MotionState::REST,
                delay: 0.0,
            },
            stagger: 0.08,
            duration: 0.4,
            ease: CubicBezier::EASE,
        },
        PresetName::Stagger => AnimationConfig {
            container: VariantBlock {
                delay: 0.2,
                ..CONTAINER_FADE
            },
            item: VariantBlock {
                hidden: MotionState::offset(0.0, 0.0, 10.0),
                visible: MotionState::REST,
                delay: 0.0,
            },
            stagger: 0.25,
            duration: 0.6,
            ease: CubicBezier::EXPO_OUT,
        },
        PresetName::Bounce => AnimationConfig {
            container: CONTAINER_FADE,
            item: VariantBlock {
                hidden: MotionState {
                    opacity: 0.0,
                    x: 0.0,
                    y: 40.0,
                    scale: 0.9,
                },
                visible: MotionState::REST,
                delay: 0.0,
            },
            stagger: 0.1,
            duration: 0.7,
            ease: CubicBezier::BACK_OUT,
        },
        PresetName::None => AnimationConfig {
            container: VariantBlock {
                hidden: MotionState::REST,
                visible: MotionState::REST,
                delay: 0.0,
            },
            item: VariantBlock {
                hidden: MotionState::REST,
                visible: MotionState::REST,
                delay: 0.0,
            },
            stagger: 0.0,
            duration: 0.0,
            ease: CubicBezier::LINEAR,
        },
    }
}

/// Every preset keyed by its name, as embedded in exported bundles.
pub fn preset_table() -> BTreeMap<&'static str, AnimationConfig> {
    PresetName::ALL
        .into_iter()
        .map(|name| (name.as_str(), preset(name)))
        .collect()
}

// ── Merge / accessibility ──────────────────────────────────────

fn merge_block(base: VariantBlock, overrides: Option<VariantOverrides>) -> VariantBlock {
    let Some(o) = overrides else {
        return base;
    };
    VariantBlock {
        hidden: o.hidden.unwrap_or(base.hidden),
        visible: o.visible.unwrap_or(base.visible),
        delay: o.delay.unwrap_or(base.delay),
    }
}

/// Apply `overrides` on top of `base`.
///
/// Container and item blocks merge independently, field by field; the
/// top-level scalars replace the base values when present.
pub fn merge(base: &AnimationConfig, overrides: &AnimationOverrides) -> AnimationConfig {
    AnimationConfig {
        container: merge_block(base.container, overrides.container),
        item: merge_block(base.item, overrides.item),
        stagger: overrides.stagger.unwrap_or(base.stagger),
        duration: overrides.duration.unwrap_or(base.duration),
        ease: overrides.ease.unwrap_or(base.ease),
    }
}

/// Low-motion configuration for users who prefer reduced motion.
///
/// Independent of `base`: a short opacity fade with no movement.
pub fn reduced_motion(_base: &AnimationConfig) -> AnimationConfig {
    AnimationConfig {
        container: CONTAINER_FADE,
        item: VariantBlock {
            hidden: MotionState::TRANSPARENT,
            visible: MotionState::REST,
            delay: 0.0,
        },
        stagger: 0.0,
        duration: 0.2,
        ease: CubicBezier::LINEAR,
    }
}
