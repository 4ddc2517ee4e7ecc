// SPDX-License-Identifier: MPL-2.0
//! Recording animation engine.
//!
//! Nothing moves: every command is logged, the final value of each property is
//! applied at once, and completion payloads queue up until the caller settles
//! them. The caller picks the settle order, which makes this the tool for
//! exercising completion races. Unlike [`super::Engine`], nothing is ever
//! overwritten, so every issued completion is eventually handed back.

use super::{Animator, Ease, Node, Props, Tween};
use std::collections::HashMap;
use std::time::Duration;

/// One call made on a [`RecordingAnimator`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Animate {
        node: Node,
        to: Props,
        duration: Duration,
        ease: Ease,
        has_completion: bool,
    },
    AnimateFromTo {
        node: Node,
        from: Props,
        to: Props,
        duration: Duration,
        ease: Ease,
        has_completion: bool,
    },
    Set {
        node: Node,
        props: Props,
    },
    Delay {
        delay: Duration,
    },
}

impl Command {
    /// Node the command targets, if any.
    #[must_use]
    pub fn node(&self) -> Option<Node> {
        match self {
            Command::Animate { node, .. }
            | Command::AnimateFromTo { node, .. }
            | Command::Set { node, .. } => Some(*node),
            Command::Delay { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct RecordingAnimator<C> {
    commands: Vec<Command>,
    pending: Vec<C>,
    targets: HashMap<Node, Props>,
}

impl<C> Default for RecordingAnimator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> RecordingAnimator<C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            pending: Vec::new(),
            targets: HashMap::new(),
        }
    }

    /// Every command issued so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Drains the command log.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Commands that targeted `node`.
    pub fn commands_for(&self, node: Node) -> impl Iterator<Item = &Command> {
        self.commands
            .iter()
            .filter(move |command| command.node() == Some(node))
    }

    /// Completions issued but not yet settled, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[C] {
        &self.pending
    }

    /// Returns true if no completion is waiting.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending.is_empty()
    }

    /// Hands back every pending completion in issue order.
    pub fn settle_all(&mut self) -> Vec<C> {
        std::mem::take(&mut self.pending)
    }

    /// Hands back every pending completion, newest first.
    pub fn settle_all_reversed(&mut self) -> Vec<C> {
        let mut settled = self.settle_all();
        settled.reverse();
        settled
    }

    /// Hands back the pending completions matching `predicate`, keeping the rest.
    pub fn settle_where(&mut self, mut predicate: impl FnMut(&C) -> bool) -> Vec<C> {
        let (matched, kept): (Vec<C>, Vec<C>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|c| predicate(c));
        self.pending = kept;
        matched
    }

    /// Final values requested for `node` so far.
    #[must_use]
    pub fn target(&self, node: Node) -> Props {
        self.targets.get(&node).copied().unwrap_or_default()
    }

    /// Logs and applies `props` to `node` without animation.
    pub fn set_immediate(&mut self, node: Node, props: Props) {
        self.commands.push(Command::Set { node, props });
        self.record_target(node, &props);
    }

    fn record_target(&mut self, node: Node, props: &Props) {
        self.targets.entry(node).or_default().merge(props);
    }
}

impl<C, D: Into<C>> Animator<D> for RecordingAnimator<C> {
    fn animate(&mut self, node: Node, to: Props, tween: Tween<D>) {
        self.commands.push(Command::Animate {
            node,
            to,
            duration: tween.duration,
            ease: tween.ease,
            has_completion: tween.on_complete.is_some(),
        });
        self.record_target(node, &to);
        if let Some(completion) = tween.on_complete {
            self.pending.push(completion.into());
        }
    }

    fn animate_from_to(&mut self, node: Node, from: Props, to: Props, tween: Tween<D>) {
        self.commands.push(Command::AnimateFromTo {
            node,
            from,
            to,
            duration: tween.duration,
            ease: tween.ease,
            has_completion: tween.on_complete.is_some(),
        });
        self.record_target(node, &from);
        self.record_target(node, &to);
        if let Some(completion) = tween.on_complete {
            self.pending.push(completion.into());
        }
    }

    fn set_immediate(&mut self, node: Node, props: Props) {
        RecordingAnimator::set_immediate(self, node, props);
    }

    fn delayed_call(&mut self, delay: Duration, completion: D) {
        self.commands.push(Command::Delay { delay });
        self.pending.push(completion.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Height;

    const BODY: Node = Node::new(10);

    #[test]
    fn records_commands_in_order() {
        let mut animator: RecordingAnimator<u8> = RecordingAnimator::new();
        animator.set_immediate(BODY, Props::expanded());
        animator.animate(
            BODY,
            Props::collapsed(),
            Tween::new(Duration::from_millis(300)).on_complete(1_u8),
        );

        let commands = animator.commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], Command::Set { .. }));
        assert!(matches!(
            commands[1],
            Command::Animate {
                has_completion: true,
                ..
            }
        ));
    }

    #[test]
    fn target_tracks_final_values() {
        let mut animator: RecordingAnimator<u8> = RecordingAnimator::new();
        animator.animate_from_to(
            BODY,
            Props::collapsed(),
            Props::expanded(),
            Tween::<u8>::new(Duration::from_millis(300)),
        );
        assert_eq!(animator.target(BODY).height, Some(Height::Auto));
        assert_eq!(animator.target(BODY).opacity, Some(1.0));
        assert!(animator.is_settled());
    }

    #[test]
    fn settle_where_keeps_unmatched() {
        let mut animator: RecordingAnimator<u8> = RecordingAnimator::new();
        for n in 1..=4_u8 {
            animator.delayed_call(Duration::ZERO, n);
        }
        assert_eq!(animator.settle_where(|n| n % 2 == 0), vec![2, 4]);
        assert_eq!(animator.pending(), &[1, 3]);
        assert_eq!(animator.settle_all_reversed(), vec![3, 1]);
    }

    #[test]
    fn commands_for_filters_by_node() {
        let mut animator: RecordingAnimator<u8> = RecordingAnimator::new();
        animator.set_immediate(BODY, Props::expanded());
        animator.set_immediate(Node::new(11), Props::expanded());
        animator.delayed_call(Duration::ZERO, 1_u8);
        assert_eq!(animator.commands_for(BODY).count(), 1);
    }
}
