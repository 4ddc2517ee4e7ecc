// SPDX-License-Identifier: MPL-2.0
//! Mutually exclusive disclosure group ("accordion").
//!
//! The group owns the state of every registered item and drives their
//! transitions through an [`Animator`]. Opening an item closes every other
//! open item; activating the open item closes it.
//!
//! # State
//!
//! - `is_open` is the committed flag of an item. It turns `true` as soon as an
//!   open starts and turns `false` only when the close transition reports
//!   [`Settled`] back through [`DisclosureGroup::on_settled`].
//! - `open_item` is the item the group is converging to. It is updated in the
//!   same turn as the activation and is never re-derived by scanning items.
//!
//! Each close carries a generation number in its completion payload, and a
//! completion only ever touches the item it names. Completions for different
//! items may therefore arrive in any order.

use crate::config::{
    INDICATOR_COLLAPSED_DEGREES, INDICATOR_EXPANDED_DEGREES, DEFAULT_DISCLOSURE_MS,
};
use crate::motion::{Animator, Ease, Node, Props, Tween};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Stable identity of a disclosure item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Registration record for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct DisclosureItem {
    pub id: ItemId,
    /// Collapsible region. An item without a body ignores activation.
    pub body: Option<Node>,
    /// Rotating icon next to the summary.
    pub indicator: Option<Node>,
    pub initially_open: bool,
}

impl DisclosureItem {
    #[must_use]
    pub fn new(id: ItemId, body: Option<Node>) -> Self {
        Self {
            id,
            body,
            indicator: None,
            initially_open: false,
        }
    }

    #[must_use]
    pub fn with_indicator(mut self, indicator: Node) -> Self {
        self.indicator = Some(indicator);
        self
    }

    #[must_use]
    pub fn initially_open(mut self) -> Self {
        self.initially_open = true;
        self
    }
}

/// Completion payload of a close transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    pub item: ItemId,
    pub generation: u64,
}

#[derive(Debug, Clone)]
struct ItemState {
    id: ItemId,
    body: Option<Node>,
    indicator: Option<Node>,
    is_open: bool,
    /// Generation of the close transition in flight, if any.
    closing: Option<u64>,
}

/// Read-only view of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub is_open: bool,
    pub is_closing: bool,
}

#[derive(Debug, Clone)]
pub struct DisclosureGroup {
    items: Vec<ItemState>,
    positions: HashMap<ItemId, usize>,
    open_item: Option<ItemId>,
    next_generation: u64,
    duration: Duration,
    ease: Ease,
}

impl DisclosureGroup {
    /// Registers `items` in document order.
    ///
    /// A repeated id is ignored. Only the first initially-open item that has
    /// a body starts open.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = DisclosureItem>) -> Self {
        let mut group = Self {
            items: Vec::new(),
            positions: HashMap::new(),
            open_item: None,
            next_generation: 0,
            duration: Duration::from_millis(DEFAULT_DISCLOSURE_MS),
            ease: Ease::Power2InOut,
        };

        for item in items {
            if group.positions.contains_key(&item.id) {
                tracing::debug!(item = %item.id, "duplicate disclosure item ignored");
                continue;
            }
            let is_open =
                item.initially_open && item.body.is_some() && group.open_item.is_none();
            if is_open {
                group.open_item = Some(item.id);
            }
            group.positions.insert(item.id, group.items.len());
            group.items.push(ItemState {
                id: item.id,
                body: item.body,
                indicator: item.indicator,
                is_open,
                closing: None,
            });
        }

        group
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Applies the resting styles of every item.
    pub fn mount<A>(&self, animator: &mut A)
    where
        A: Animator<Settled> + ?Sized,
    {
        for item in &self.items {
            if let Some(body) = item.body {
                animator.set_immediate(body, Props::expanded());
            }
            if let Some(indicator) = item.indicator {
                let degrees = if item.is_open {
                    INDICATOR_EXPANDED_DEGREES
                } else {
                    INDICATOR_COLLAPSED_DEGREES
                };
                animator.set_immediate(indicator, Props::new().rotation(degrees));
            }
        }
    }

    /// Toggles `id`, closing whichever other item is open.
    ///
    /// Unknown ids and items without a body are ignored.
    pub fn handle_activate<A>(&mut self, id: ItemId, animator: &mut A)
    where
        A: Animator<Settled> + ?Sized,
    {
        let Some(&position) = self.positions.get(&id) else {
            tracing::debug!(item = %id, "activation of unknown disclosure item ignored");
            return;
        };
        let Some(body) = self.items[position].body else {
            tracing::debug!(item = %id, "disclosure item has no body, activation ignored");
            return;
        };

        let was_open = self.items[position].is_open;

        if let Some(other) = self.open_item.filter(|&open| open != id) {
            if let Some(&other_position) = self.positions.get(&other) {
                self.begin_close(other_position, animator);
            }
        }

        if !was_open {
            let item = &mut self.items[position];
            item.is_open = true;
            self.open_item = Some(id);
            tracing::debug!(item = %id, "disclosure item opening");

            animator.animate_from_to(
                body,
                Props::collapsed(),
                Props::expanded(),
                Tween::new(self.duration).ease(self.ease),
            );
            if let Some(indicator) = item.indicator {
                animator.animate(
                    indicator,
                    Props::new().rotation(INDICATOR_EXPANDED_DEGREES),
                    Tween::new(self.duration).ease(self.ease),
                );
            }
        } else if self.items[position].closing.is_none() {
            self.begin_close(position, animator);
        } else {
            tracing::debug!(item = %id, "disclosure item already closing");
        }
    }

    /// Finalizes a close transition.
    ///
    /// Completions whose generation no longer matches the item are ignored.
    pub fn on_settled<A>(&mut self, settled: Settled, animator: &mut A)
    where
        A: Animator<Settled> + ?Sized,
    {
        let Some(&position) = self.positions.get(&settled.item) else {
            tracing::debug!(item = %settled.item, "completion for unknown disclosure item");
            return;
        };
        let item = &mut self.items[position];
        if item.closing != Some(settled.generation) {
            tracing::debug!(
                item = %settled.item,
                generation = settled.generation,
                "stale disclosure completion ignored"
            );
            return;
        }

        item.is_open = false;
        item.closing = None;
        // A body left at a literal zero height cannot be measured for the next open.
        if let Some(body) = item.body {
            animator.set_immediate(body, Props::expanded());
        }
        tracing::debug!(item = %settled.item, "disclosure item closed");
    }

    fn begin_close<A>(&mut self, position: usize, animator: &mut A)
    where
        A: Animator<Settled> + ?Sized,
    {
        let generation = self.next_generation;
        let item = &mut self.items[position];
        if item.closing.is_some() {
            return;
        }
        let Some(body) = item.body else {
            return;
        };
        self.next_generation += 1;
        item.closing = Some(generation);
        if self.open_item == Some(item.id) {
            self.open_item = None;
        }
        tracing::debug!(item = %item.id, generation, "disclosure item closing");

        animator.animate(
            body,
            Props::collapsed(),
            Tween::new(self.duration).ease(self.ease).on_complete(Settled {
                item: item.id,
                generation,
            }),
        );
        if let Some(indicator) = item.indicator {
            animator.animate(
                indicator,
                Props::new().rotation(INDICATOR_COLLAPSED_DEGREES),
                Tween::new(self.duration).ease(self.ease),
            );
        }
    }

    /// Committed open flag. `false` for unknown ids.
    #[must_use]
    pub fn is_open(&self, id: ItemId) -> bool {
        self.item(id).is_some_and(|item| item.is_open)
    }

    /// Returns true while a close transition of `id` is in flight.
    #[must_use]
    pub fn is_closing(&self, id: ItemId) -> bool {
        self.item(id).is_some_and(|item| item.closing.is_some())
    }

    /// The item the group is converging to.
    #[must_use]
    pub fn open_item(&self) -> Option<ItemId> {
        self.open_item
    }

    /// Returns true while any close transition is in flight.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.items.iter().any(|item| item.closing.is_some())
    }

    /// Number of items whose committed flag is set.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_open).count()
    }

    pub fn items(&self) -> impl Iterator<Item = ItemSnapshot> + '_ {
        self.items.iter().map(|item| ItemSnapshot {
            id: item.id,
            is_open: item.is_open,
            is_closing: item.closing.is_some(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn item(&self, id: ItemId) -> Option<&ItemState> {
        self.positions.get(&id).map(|&position| &self.items[position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Command, Height, RecordingAnimator};

    fn body(n: u32) -> Node {
        Node::new(n * 10)
    }

    fn indicator(n: u32) -> Node {
        Node::new(n * 10 + 1)
    }

    fn group_of(count: u32) -> DisclosureGroup {
        DisclosureGroup::new((1..=count).map(|n| {
            DisclosureItem::new(ItemId(n), Some(body(n))).with_indicator(indicator(n))
        }))
    }

    fn recorder() -> RecordingAnimator<Settled> {
        RecordingAnimator::new()
    }

    fn settle(group: &mut DisclosureGroup, animator: &mut RecordingAnimator<Settled>) {
        for settled in animator.settle_all() {
            group.on_settled(settled, animator);
        }
    }

    #[test]
    fn opening_an_item_marks_it_open_immediately() {
        let mut group = group_of(3);
        let mut animator = recorder();

        group.handle_activate(ItemId(1), &mut animator);

        assert!(group.is_open(ItemId(1)));
        assert_eq!(group.open_item(), Some(ItemId(1)));
        assert!(animator.is_settled());
        assert_eq!(animator.target(body(1)).height, Some(Height::Auto));
        assert_eq!(animator.target(indicator(1)).rotation, Some(180.0));
    }

    #[test]
    fn opening_animates_from_collapsed() {
        let mut group = group_of(1);
        let mut animator = recorder();

        group.handle_activate(ItemId(1), &mut animator);

        let first = animator.commands_for(body(1)).next().cloned();
        assert!(matches!(
            first,
            Some(Command::AnimateFromTo { from, .. }) if from == Props::collapsed()
        ));
    }

    #[test]
    fn switching_items_closes_the_previous_one_after_settle() {
        let mut group = group_of(3);
        let mut animator = recorder();

        group.handle_activate(ItemId(1), &mut animator);
        group.handle_activate(ItemId(2), &mut animator);

        // F1 keeps its committed flag until its close settles.
        assert!(group.is_open(ItemId(1)));
        assert!(group.is_closing(ItemId(1)));
        assert_eq!(group.open_item(), Some(ItemId(2)));

        settle(&mut group, &mut animator);

        assert!(!group.is_open(ItemId(1)));
        assert!(group.is_open(ItemId(2)));
        assert!(!group.is_open(ItemId(3)));
        assert_eq!(group.open_count(), 1);
        assert_eq!(animator.target(indicator(1)).rotation, Some(0.0));
    }

    #[test]
    fn close_resets_body_to_intrinsic_baseline() {
        let mut group = group_of(1);
        let mut animator = recorder();

        group.handle_activate(ItemId(1), &mut animator);
        group.handle_activate(ItemId(1), &mut animator);
        assert_eq!(animator.target(body(1)).height, Some(Height::Px(0.0)));

        settle(&mut group, &mut animator);

        assert_eq!(animator.target(body(1)), Props::expanded());
        assert!(matches!(
            animator.commands().last(),
            Some(Command::Set { props, .. }) if *props == Props::expanded()
        ));
    }

    #[test]
    fn toggling_twice_restores_initial_state() {
        let mut group = group_of(2);
        let mut animator = recorder();

        group.handle_activate(ItemId(2), &mut animator);
        settle(&mut group, &mut animator);
        group.handle_activate(ItemId(2), &mut animator);
        settle(&mut group, &mut animator);

        assert_eq!(group.open_count(), 0);
        assert_eq!(group.open_item(), None);
        assert!(!group.is_settling());
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut group = group_of(2);
        let mut animator = recorder();

        group.handle_activate(ItemId(1), &mut animator);
        let issued = animator.commands().len();
        group.handle_activate(ItemId(99), &mut animator);

        assert_eq!(animator.commands().len(), issued);
        assert_eq!(group.open_item(), Some(ItemId(1)));
    }

    #[test]
    fn item_without_body_is_ignored() {
        let mut group = DisclosureGroup::new([
            DisclosureItem::new(ItemId(1), Some(body(1))),
            DisclosureItem::new(ItemId(2), None),
        ]);
        let mut animator = recorder();

        group.handle_activate(ItemId(1), &mut animator);
        group.handle_activate(ItemId(2), &mut animator);

        assert!(group.is_open(ItemId(1)));
        assert!(!group.is_closing(ItemId(1)));
        assert!(!group.is_open(ItemId(2)));
    }

    #[test]
    fn completions_in_reverse_order_only_touch_their_own_item() {
        let mut group = group_of(3);
        let mut animator = recorder();

        group.handle_activate(ItemId(1), &mut animator);
        group.handle_activate(ItemId(2), &mut animator);
        group.handle_activate(ItemId(3), &mut animator);

        for settled in animator.settle_all_reversed() {
            group.on_settled(settled, &mut animator);
        }

        assert!(!group.is_open(ItemId(1)));
        assert!(!group.is_open(ItemId(2)));
        assert!(group.is_open(ItemId(3)));
        assert_eq!(group.open_count(), 1);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut group = group_of(1);
        let mut animator = recorder();

        group.handle_activate(ItemId(1), &mut animator);
        group.handle_activate(ItemId(1), &mut animator);
        let settled = animator.settle_all();
        assert_eq!(settled.len(), 1);

        group.on_settled(settled[0], &mut animator);
        group.handle_activate(ItemId(1), &mut animator);
        // Replaying the old completion must not close the reopened item.
        group.on_settled(settled[0], &mut animator);

        assert!(group.is_open(ItemId(1)));
        assert_eq!(group.open_item(), Some(ItemId(1)));
    }

    #[test]
    fn activating_a_closing_item_does_not_restart_its_close() {
        let mut group = group_of(1);
        let mut animator = recorder();

        group.handle_activate(ItemId(1), &mut animator);
        group.handle_activate(ItemId(1), &mut animator);
        group.handle_activate(ItemId(1), &mut animator);

        assert_eq!(animator.pending().len(), 1);
    }

    #[test]
    fn only_first_initially_open_item_is_kept() {
        let group = DisclosureGroup::new([
            DisclosureItem::new(ItemId(1), Some(body(1))),
            DisclosureItem::new(ItemId(2), Some(body(2))).initially_open(),
            DisclosureItem::new(ItemId(3), Some(body(3))).initially_open(),
            DisclosureItem::new(ItemId(2), Some(body(4))),
        ]);

        assert_eq!(group.len(), 3);
        assert_eq!(group.open_item(), Some(ItemId(2)));
        assert!(!group.is_open(ItemId(3)));
    }

    #[test]
    fn mount_applies_resting_styles() {
        let group = DisclosureGroup::new([
            DisclosureItem::new(ItemId(1), Some(body(1)))
                .with_indicator(indicator(1))
                .initially_open(),
            DisclosureItem::new(ItemId(2), Some(body(2))).with_indicator(indicator(2)),
        ]);
        let mut animator = recorder();

        group.mount(&mut animator);

        assert_eq!(animator.target(body(2)), Props::expanded());
        assert_eq!(animator.target(indicator(1)).rotation, Some(180.0));
        assert_eq!(animator.target(indicator(2)).rotation, Some(0.0));
    }

    #[test]
    fn configured_duration_is_used() {
        let mut group = group_of(1).with_duration(Duration::from_millis(120));
        let mut animator = recorder();

        group.handle_activate(ItemId(1), &mut animator);

        assert!(animator.commands().iter().all(|command| matches!(
            command,
            Command::AnimateFromTo { duration, ease: Ease::Power2InOut, .. }
                | Command::Animate { duration, ease: Ease::Power2InOut, .. }
                if *duration == Duration::from_millis(120)
        )));
    }
}
