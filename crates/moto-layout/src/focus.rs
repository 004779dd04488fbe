// ABOUTME: Depth-first focus cycling across nested splits.
// ABOUTME: Each split accepts focus or hands it back to its parent when exhausted.

use crate::split::{Node, SecondaryState, SplitNode};
use crate::Pane;

/// Result of asking a subtree to advance its focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CycleOutcome {
    /// Focus moved to the next pane inside the subtree
    Moved,
    /// The subtree has visited all its panes and wrapped to its first one;
    /// the parent should move focus on
    Exhausted,
}

impl<P: Pane> Node<P> {
    /// A leaf holds a single pane, so it is exhausted as soon as it is asked
    pub(crate) fn cycle_focus(&mut self) -> CycleOutcome {
        match self {
            Node::Leaf(_) => CycleOutcome::Exhausted,
            Node::Split(split) => split.cycle_focus(),
        }
    }

    /// Rewind every split in the subtree to focus its first pane
    pub(crate) fn reset_focus(&mut self) {
        if let Node::Split(split) = self {
            if split.secondary_state == SecondaryState::Focused {
                split.secondary_state = SecondaryState::Unfocused;
            }
            split.primary.reset_focus();
            split.secondary.reset_focus();
        }
    }
}

impl<P: Pane> SplitNode<P> {
    /// Advance focus to the next pane in depth-first order.
    ///
    /// Focus walks the primary subtree, then the secondary subtree, then
    /// reports [`CycleOutcome::Exhausted`] after wrapping back to the first
    /// pane. A hidden secondary is never entered. Only the secondary state
    /// changes here; [`crate::LayoutTree::cycle_focus`] then notifies panes.
    pub(crate) fn cycle_focus(&mut self) -> CycleOutcome {
        match self.secondary_state {
            SecondaryState::Hidden => self.primary.cycle_focus(),
            SecondaryState::Unfocused => {
                if self.primary.cycle_focus() == CycleOutcome::Moved {
                    return CycleOutcome::Moved;
                }
                self.secondary_state = SecondaryState::Focused;
                CycleOutcome::Moved
            }
            SecondaryState::Focused => {
                if self.secondary.cycle_focus() == CycleOutcome::Moved {
                    return CycleOutcome::Moved;
                }
                self.secondary_state = SecondaryState::Unfocused;
                CycleOutcome::Exhausted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::tests::Label;

    fn cycle(split: &mut SplitNode<Label>) -> (&'static str, CycleOutcome) {
        let outcome = split.cycle_focus();
        split.focus(true);
        (split.focused_pane().name, outcome)
    }

    #[test]
    fn two_leaves_alternate() {
        let mut split = SplitNode::horizontal(Label::node("a"), Label::node("b"), 1, 1);
        assert_eq!(cycle(&mut split), ("b", CycleOutcome::Moved));
        assert_eq!(cycle(&mut split), ("a", CycleOutcome::Exhausted));
        assert_eq!(cycle(&mut split), ("b", CycleOutcome::Moved));
    }

    #[test]
    fn nested_secondary_is_walked_before_wrapping() {
        let inner = SplitNode::vertical(Label::node("b"), Label::node("c"), 1, 1);
        let mut root = SplitNode::horizontal(Label::node("a"), inner.into(), 1, 1);
        root.focus(true);
        assert_eq!(root.focused_pane().name, "a");

        assert_eq!(cycle(&mut root), ("b", CycleOutcome::Moved));
        assert_eq!(cycle(&mut root), ("c", CycleOutcome::Moved));
        assert_eq!(cycle(&mut root), ("a", CycleOutcome::Exhausted));
        assert_eq!(cycle(&mut root), ("b", CycleOutcome::Moved));
    }

    #[test]
    fn nested_primary_is_walked_too() {
        let inner = SplitNode::vertical(Label::node("a"), Label::node("b"), 1, 1);
        let mut root = SplitNode::horizontal(inner.into(), Label::node("c"), 1, 1);

        let order: Vec<_> = (0..4).map(|_| cycle(&mut root).0).collect();
        assert_eq!(order, vec!["b", "c", "a", "b"]);
    }

    #[test]
    fn hidden_secondary_keeps_focus_on_primary() {
        let mut split = SplitNode::horizontal(Label::node("a"), Label::node("b"), 1, 1);
        split.toggle_secondary();
        assert_eq!(cycle(&mut split), ("a", CycleOutcome::Exhausted));
        assert_eq!(split.secondary_state(), SecondaryState::Hidden);
    }

    #[test]
    fn exactly_one_leaf_is_focused() {
        let inner = SplitNode::vertical(Label::node("b"), Label::node("c"), 1, 1);
        let mut root = SplitNode::horizontal(Label::node("a"), inner.into(), 1, 1);
        for _ in 0..5 {
            cycle(&mut root);
            let mut focused = Vec::new();
            root.for_each_pane(&mut |p| {
                if p.focused {
                    focused.push(p.name);
                }
            });
            assert_eq!(focused, vec![root.focused_pane().name]);
        }
    }
}
