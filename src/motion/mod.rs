// SPDX-License-Identifier: MPL-2.0
//! Animation capability interface.
//!
//! Controllers never drive pixels themselves. They describe property changes on
//! host-owned [`Node`]s and hand them to an [`Animator`], which runs them on its
//! own schedule and reports completion later by handing back the payload given
//! in [`Tween::on_complete`].
//!
//! # Available Engines
//!
//! - [`Engine`]: tick-driven interpolation used by the desktop host
//! - [`RecordingAnimator`]: records commands and lets the caller settle
//!   completions in any order (headless hosts, tests)
//!
//! # Completion Payloads
//!
//! `Animator<C>` is generic over the completion payload so that each controller
//! keeps its own typed `Settled` enum. A host with a single engine implements
//! the trait for every payload that converts into its own message type.
//!
//! ```
//! use std::time::Duration;
//! use vitrina::motion::{Animator, Height, Node, Props, RecordingAnimator, Tween};
//!
//! let mut animator: RecordingAnimator<&'static str> = RecordingAnimator::new();
//! let body = Node::new(1);
//!
//! animator.animate(
//!     body,
//!     Props::new().height(Height::Px(0.0)).opacity(0.0),
//!     Tween::new(Duration::from_millis(300)).on_complete("closed"),
//! );
//!
//! assert_eq!(animator.settle_all(), vec!["closed"]);
//! ```

pub mod engine;
pub mod recording;

pub use engine::{Engine, NodeValues};
pub use recording::{Command, RecordingAnimator};

use std::time::Duration;

// =============================================================================
// Node
// =============================================================================

/// Opaque handle to an animatable region owned by the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node(u32);

impl Node {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

// =============================================================================
// Props
// =============================================================================

/// Height of a collapsible region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Height {
    /// Literal height in logical pixels.
    Px(f32),
    /// Intrinsic height of the content.
    Auto,
}

/// Set of animatable properties. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Props {
    pub height: Option<Height>,
    pub opacity: Option<f32>,
    /// Rotation in degrees.
    pub rotation: Option<f32>,
    pub scale: Option<f32>,
}

impl Props {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            height: None,
            opacity: None,
            rotation: None,
            scale: None,
        }
    }

    #[must_use]
    pub fn height(mut self, height: Height) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    #[must_use]
    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Zero height, fully transparent.
    #[must_use]
    pub fn collapsed() -> Self {
        Self::new().height(Height::Px(0.0)).opacity(0.0)
    }

    /// Intrinsic height, fully opaque. Also the neutral baseline a collapsed
    /// region must return to before it can be measured again.
    #[must_use]
    pub fn expanded() -> Self {
        Self::new().height(Height::Auto).opacity(1.0)
    }

    /// Returns true if no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.height.is_none()
            && self.opacity.is_none()
            && self.rotation.is_none()
            && self.scale.is_none()
    }

    /// Returns true if both sets touch at least one common property.
    #[must_use]
    pub fn overlaps(&self, other: &Props) -> bool {
        (self.height.is_some() && other.height.is_some())
            || (self.opacity.is_some() && other.opacity.is_some())
            || (self.rotation.is_some() && other.rotation.is_some())
            || (self.scale.is_some() && other.scale.is_some())
    }

    /// Returns a copy with every property set in `other` removed.
    #[must_use]
    pub fn without(&self, other: &Props) -> Props {
        Props {
            height: if other.height.is_some() { None } else { self.height },
            opacity: if other.opacity.is_some() { None } else { self.opacity },
            rotation: if other.rotation.is_some() { None } else { self.rotation },
            scale: if other.scale.is_some() { None } else { self.scale },
        }
    }

    /// Overlays the properties set in `other` onto `self`.
    pub fn merge(&mut self, other: &Props) {
        if other.height.is_some() {
            self.height = other.height;
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.rotation.is_some() {
            self.rotation = other.rotation;
        }
        if other.scale.is_some() {
            self.scale = other.scale;
        }
    }
}

// =============================================================================
// Easing
// =============================================================================

/// Named easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    #[default]
    Power2InOut,
    Power3InOut,
    Power3Out,
}

impl Ease {
    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

// =============================================================================
// Tween
// =============================================================================

/// Timing options for one animation, plus its optional completion payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<C> {
    pub duration: Duration,
    pub ease: Ease,
    pub on_complete: Option<C>,
}

impl<C> Tween<C> {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ease: Ease::default(),
            on_complete: None,
        }
    }

    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    #[must_use]
    pub fn on_complete(mut self, completion: C) -> Self {
        self.on_complete = Some(completion);
        self
    }

    /// Converts the completion payload.
    pub fn map<D>(self, f: impl FnOnce(C) -> D) -> Tween<D> {
        Tween {
            duration: self.duration,
            ease: self.ease,
            on_complete: self.on_complete.map(f),
        }
    }
}

// =============================================================================
// Animator Port
// =============================================================================

/// Capability interface of an animation engine.
///
/// Every method returns immediately. Completions are delivered later, out of
/// band, by whatever scheduler drives the implementation; callers must not
/// assume any completion order across different nodes.
pub trait Animator<C> {
    /// Animates `node` from its current values to `to`.
    fn animate(&mut self, node: Node, to: Props, tween: Tween<C>);

    /// Applies `from` immediately, then animates to `to`.
    fn animate_from_to(&mut self, node: Node, from: Props, to: Props, tween: Tween<C>);

    /// Applies `props` without animation.
    fn set_immediate(&mut self, node: Node, props: Props);

    /// Delivers `completion` after `delay`.
    fn delayed_call(&mut self, delay: Duration, completion: C);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn collapsed_and_expanded_presets() {
        let collapsed = Props::collapsed();
        assert_eq!(collapsed.height, Some(Height::Px(0.0)));
        assert_eq!(collapsed.opacity, Some(0.0));

        let expanded = Props::expanded();
        assert_eq!(expanded.height, Some(Height::Auto));
        assert_eq!(expanded.opacity, Some(1.0));
        assert!(expanded.rotation.is_none());
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(Props::new().opacity(3.0).opacity, Some(1.0));
        assert_eq!(Props::new().opacity(-1.0).opacity, Some(0.0));
    }

    #[test]
    fn without_removes_overlapping_properties() {
        let body = Props::collapsed().rotation(90.0);
        let remaining = body.without(&Props::new().opacity(1.0));
        assert_eq!(remaining.opacity, None);
        assert_eq!(remaining.height, Some(Height::Px(0.0)));
        assert_eq!(remaining.rotation, Some(90.0));
    }

    #[test]
    fn overlaps_detects_shared_properties() {
        assert!(Props::collapsed().overlaps(&Props::new().opacity(1.0)));
        assert!(!Props::collapsed().overlaps(&Props::new().rotation(0.0)));
        assert!(!Props::new().overlaps(&Props::new()));
    }

    #[test]
    fn merge_overlays_set_fields() {
        let mut props = Props::collapsed();
        props.merge(&Props::new().opacity(0.5).scale(2.0));
        assert_eq!(props.height, Some(Height::Px(0.0)));
        assert_eq!(props.opacity, Some(0.5));
        assert_eq!(props.scale, Some(2.0));
    }

    #[test]
    fn easing_curves_hit_endpoints() {
        for ease in [
            Ease::Linear,
            Ease::Power2InOut,
            Ease::Power3InOut,
            Ease::Power3Out,
        ] {
            assert_abs_diff_eq!(ease.apply(0.0), 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(ease.apply(1.0), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn in_out_curves_are_symmetric_at_midpoint() {
        assert_abs_diff_eq!(Ease::Power2InOut.apply(0.5), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(Ease::Power3InOut.apply(0.5), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn easing_clamps_out_of_range_progress() {
        assert_abs_diff_eq!(Ease::Power3Out.apply(2.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Ease::Linear.apply(-1.0), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn tween_map_converts_payload() {
        let tween = Tween::new(Duration::from_millis(10)).on_complete(3_u8);
        let mapped = tween.map(|n| u32::from(n) * 2);
        assert_eq!(mapped.on_complete, Some(6));
        assert_eq!(mapped.duration, Duration::from_millis(10));
    }
}
