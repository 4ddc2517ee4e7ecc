// SPDX-License-Identifier: MPL-2.0
//! Tick-driven animation engine.
//!
//! The engine owns the current animated values of every node it has touched.
//! The host calls [`Engine::tick`] once per frame; finished tweens and elapsed
//! delayed calls hand their completion payloads back from that call.
//!
//! A tween captures its start values on the first tick after it was issued.
//! Issuing a tween on a node cancels the overlapping properties of older
//! tweens on the same node; an older tween left with no properties is dropped
//! and its completion never fires.

use super::{Animator, Ease, Height, Node, Props, Tween};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Current values of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeValues {
    pub height: Height,
    pub opacity: f32,
    pub rotation: f32,
    pub scale: f32,
}

impl Default for NodeValues {
    fn default() -> Self {
        Self {
            height: Height::Auto,
            opacity: 1.0,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl NodeValues {
    fn apply(&mut self, props: &Props) {
        if let Some(height) = props.height {
            self.height = height;
        }
        if let Some(opacity) = props.opacity {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(rotation) = props.rotation {
            self.rotation = rotation;
        }
        if let Some(scale) = props.scale {
            self.scale = scale;
        }
    }

    /// Current values for the properties present in `keys`.
    fn capture(&self, keys: &Props) -> Props {
        Props {
            height: keys.height.map(|_| self.height),
            opacity: keys.opacity.map(|_| self.opacity),
            rotation: keys.rotation.map(|_| self.rotation),
            scale: keys.scale.map(|_| self.scale),
        }
    }
}

#[derive(Debug, Default)]
struct NodeState {
    values: NodeValues,
    natural_height: Option<f32>,
}

#[derive(Debug)]
struct ActiveTween<C> {
    node: Node,
    from: Option<Props>,
    to: Props,
    duration: Duration,
    ease: Ease,
    started: Option<Instant>,
    on_complete: Option<C>,
}

#[derive(Debug)]
struct PendingCall<C> {
    delay: Duration,
    deadline: Option<Instant>,
    completion: C,
}

/// Frame-driven implementation of [`Animator`].
#[derive(Debug)]
pub struct Engine<C> {
    nodes: HashMap<Node, NodeState>,
    tweens: Vec<ActiveTween<C>>,
    calls: Vec<PendingCall<C>>,
}

impl<C> Default for Engine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Engine<C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            tweens: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Registers the intrinsic height `Height::Auto` resolves to for `node`.
    pub fn set_natural_height(&mut self, node: Node, px: f32) {
        self.nodes.entry(node).or_default().natural_height = Some(px.max(0.0));
    }

    /// Current values of `node`; untouched nodes report the neutral baseline.
    #[must_use]
    pub fn values(&self, node: Node) -> NodeValues {
        self.nodes
            .get(&node)
            .map(|state| state.values)
            .unwrap_or_default()
    }

    /// Current literal height of `node`, or `None` when it sits at `Auto`.
    #[must_use]
    pub fn literal_height(&self, node: Node) -> Option<f32> {
        match self.values(node).height {
            Height::Px(px) => Some(px),
            Height::Auto => None,
        }
    }

    /// Returns true when no tween or delayed call is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty() && self.calls.is_empty()
    }

    /// Number of tweens still running.
    #[must_use]
    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    /// Advances every tween and delayed call to `now`, returning the
    /// completions that became due.
    pub fn tick(&mut self, now: Instant) -> Vec<C> {
        let mut completed = Vec::new();
        let nodes = &mut self.nodes;

        self.tweens.retain_mut(|tween| {
            let state = nodes.entry(tween.node).or_default();
            let started = *tween.started.get_or_insert(now);
            let from = *tween
                .from
                .get_or_insert_with(|| state.values.capture(&tween.to));

            let progress = if tween.duration.is_zero() {
                1.0
            } else {
                now.saturating_duration_since(started).as_secs_f32()
                    / tween.duration.as_secs_f32()
            };

            if progress >= 1.0 {
                state.values.apply(&tween.to);
                if let Some(completion) = tween.on_complete.take() {
                    completed.push(completion);
                }
                false
            } else {
                let eased = tween.ease.apply(progress);
                let frame = interpolate(&from, &tween.to, eased, state.natural_height);
                state.values.apply(&frame);
                true
            }
        });

        let mut waiting = Vec::with_capacity(self.calls.len());
        for mut call in self.calls.drain(..) {
            let deadline = *call.deadline.get_or_insert(now + call.delay);
            if now >= deadline {
                completed.push(call.completion);
            } else {
                waiting.push(call);
            }
        }
        self.calls = waiting;

        completed
    }

    /// Applies `props` to `node` without animation, cancelling overlapping
    /// in-flight tweens.
    pub fn set_immediate(&mut self, node: Node, props: Props) {
        self.overwrite(node, &props);
        self.nodes.entry(node).or_default().values.apply(&props);
    }

    fn overwrite(&mut self, node: Node, props: &Props) {
        let before = self.tweens.len();
        for tween in self
            .tweens
            .iter_mut()
            .filter(|t| t.node == node && t.to.overlaps(props))
        {
            tween.to = tween.to.without(props);
        }
        self.tweens.retain(|t| !t.to.is_empty());
        let dropped = before - self.tweens.len();
        if dropped > 0 {
            tracing::trace!(node = node.raw(), dropped, "overwrote in-flight tweens");
        }
    }

    fn push_tween(&mut self, node: Node, to: Props, tween: Tween<C>) {
        self.overwrite(node, &to);
        self.tweens.push(ActiveTween {
            node,
            from: None,
            to,
            duration: tween.duration,
            ease: tween.ease,
            started: None,
            on_complete: tween.on_complete,
        });
    }
}

impl<C, D: Into<C>> Animator<D> for Engine<C> {
    fn animate(&mut self, node: Node, to: Props, tween: Tween<D>) {
        self.push_tween(node, to, tween.map(Into::into));
    }

    fn animate_from_to(&mut self, node: Node, from: Props, to: Props, tween: Tween<D>) {
        self.overwrite(node, &from);
        self.nodes.entry(node).or_default().values.apply(&from);
        self.push_tween(node, to, tween.map(Into::into));
    }

    fn set_immediate(&mut self, node: Node, props: Props) {
        Engine::set_immediate(self, node, props);
    }

    fn delayed_call(&mut self, delay: Duration, completion: D) {
        self.calls.push(PendingCall {
            delay,
            deadline: None,
            completion: completion.into(),
        });
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp_opt(a: Option<f32>, b: Option<f32>, t: f32) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(lerp(a, b, t)),
        (None, b) => b,
        (Some(_), None) => None,
    }
}

fn resolve(height: Height, natural: Option<f32>) -> Option<f32> {
    match height {
        Height::Px(px) => Some(px),
        Height::Auto => natural,
    }
}

fn interpolate(from: &Props, to: &Props, t: f32, natural: Option<f32>) -> Props {
    let height = match (from.height, to.height) {
        (Some(a), Some(b)) => Some(match (resolve(a, natural), resolve(b, natural)) {
            (Some(a), Some(b)) => Height::Px(lerp(a, b, t)),
            // Unmeasured intrinsic height: jump straight to the target.
            _ => b,
        }),
        (None, b) => b,
        (Some(_), None) => None,
    };

    Props {
        height,
        opacity: lerp_opt(from.opacity, to.opacity, t),
        rotation: lerp_opt(from.rotation, to.rotation, t),
        scale: lerp_opt(from.scale, to.scale, t),
    }
}
