//! Projection of the scroll offset onto per-item visual attributes.
//!
//! Everything here is a pure function of its inputs.

use crate::config::WheelConfig;
use crate::easing::TransitionConfig;
use crate::phase::PhaseKind;

/// What the surface needs to draw one item in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemAttributes {
    /// Vertical displacement from the pointer, in offset units.
    pub translate_y: f64,
    pub opacity: f64,
    pub scale: f64,
    /// Smoothing to apply to attribute changes; `None` means instantaneous.
    pub transition: Option<TransitionConfig>,
}

impl ItemAttributes {
    pub fn transition_enabled(&self) -> bool {
        self.transition.is_some()
    }
}

/// Offset the surface should render with.
///
/// While stopped on an item the offset is snapped to the nearest item
/// center, removing sub-unit residue. Otherwise it passes through.
pub fn display_offset(phase: PhaseKind, offset: f64, item_height: f64, centering_offset: f64) -> f64 {
    if phase.is_stopped() {
        ((offset - centering_offset) / item_height).round() * item_height + centering_offset
    } else {
        offset
    }
}

/// Signed distance of item `index` from the pointer, wrapped onto the
/// shortest path around the loop. Lies in `(-total_height/2, total_height/2]`.
pub fn position(index: usize, display_offset: f64, item_height: f64, total_height: f64) -> f64 {
    if total_height <= 0.0 {
        return 0.0;
    }

    let half = total_height / 2.0;
    let mut p = (index as f64 * item_height - display_offset) % total_height;
    if p <= -half {
        p += total_height;
    }
    if p > half {
        p -= total_height;
    }
    p
}

/// Fade and shrink an item by its distance from the pointer.
pub fn visual_attributes(position: f64, phase: PhaseKind, config: &WheelConfig) -> ItemAttributes {
    let distance = position.abs();
    let opacity = (1.0 - distance / config.fade_distance).max(config.min_opacity);
    let scale = (1.0 - distance / config.shrink_distance).max(config.min_scale);

    ItemAttributes {
        translate_y: position,
        opacity,
        scale,
        transition: match phase {
            PhaseKind::Spinning => None,
            _ => Some(config.settle_transition),
        },
    }
}

/// Attributes of item `index` in a list of `n` items at `offset`.
pub fn project(index: usize, n: usize, offset: f64, phase: PhaseKind, config: &WheelConfig) -> ItemAttributes {
    let shown = display_offset(phase, offset, config.item_height, config.centering_offset);
    let total_height = n as f64 * config.item_height;
    let p = position(index, shown, config.item_height, total_height);
    visual_attributes(p, phase, config)
}
