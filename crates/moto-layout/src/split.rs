// ABOUTME: Binary split node dividing its area between two children.
// ABOUTME: Handles resize propagation, split moves, secondary hiding, and rendering.

use moto_render::{bordered, join_horizontal, join_vertical, Theme};

use crate::{Axis, Division, Pane};

/// Visibility and focus of a split's secondary child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecondaryState {
    /// Visible; focus is somewhere in the primary
    #[default]
    Unfocused,
    /// Not shown; the primary takes the whole area
    Hidden,
    /// Visible and holding focus
    Focused,
}

/// A leaf pane plus the outer size the layout assigned to it
#[derive(Debug)]
pub struct Leaf<P> {
    pane: P,
    width: u16,
    height: u16,
    focused: bool,
}

impl<P> Leaf<P> {
    pub fn pane(&self) -> &P {
        &self.pane
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// A child of a split: either pane content or another split
#[derive(Debug)]
pub enum Node<P> {
    Leaf(Leaf<P>),
    Split(Box<SplitNode<P>>),
}

impl<P> From<SplitNode<P>> for Node<P> {
    fn from(split: SplitNode<P>) -> Self {
        Node::Split(Box::new(split))
    }
}

impl<P: Pane> Node<P> {
    pub fn leaf(pane: P) -> Self {
        Node::Leaf(Leaf {
            pane,
            width: 0,
            height: 0,
            focused: false,
        })
    }

    /// Assign an outer size; splits decompose it along their own axis
    pub fn resize(&mut self, width: u16, height: u16) {
        match self {
            Node::Leaf(leaf) => {
                leaf.width = width;
                leaf.height = height;
                leaf.pane.resize(width.saturating_sub(2), height.saturating_sub(2));
            }
            Node::Split(split) => {
                let (total, other) = split.axis.decompose(width, height);
                split.resize(total, other);
            }
        }
    }

    /// Outer (width, height) last assigned to this node
    pub fn size(&self) -> (u16, u16) {
        match self {
            Node::Leaf(leaf) => (leaf.width, leaf.height),
            Node::Split(split) => split.axis.compose(split.division.total(), split.other),
        }
    }

    pub fn render(&self, theme: &Theme) -> String {
        match self {
            Node::Leaf(leaf) => bordered(
                &leaf.pane.render(theme),
                leaf.width.into(),
                leaf.height.into(),
                theme.border(leaf.focused),
                leaf.pane.title(),
            ),
            Node::Split(split) => split.render(theme),
        }
    }

    /// Mark this subtree active or not; within an active split the focus
    /// follows the secondary state down to exactly one leaf
    pub fn focus(&mut self, active: bool) {
        match self {
            Node::Leaf(leaf) => {
                leaf.focused = active;
                leaf.pane.focus(active);
            }
            Node::Split(split) => split.focus(active),
        }
    }

    /// The pane focus would land on if this subtree were active
    pub fn focused_pane(&self) -> &P {
        match self {
            Node::Leaf(leaf) => &leaf.pane,
            Node::Split(split) => split.focused_pane(),
        }
    }

    pub fn for_each_pane<'a>(&'a self, f: &mut dyn FnMut(&'a P)) {
        match self {
            Node::Leaf(leaf) => f(&leaf.pane),
            Node::Split(split) => split.for_each_pane(f),
        }
    }

    pub fn for_each_pane_mut(&mut self, f: &mut dyn FnMut(&mut P)) {
        match self {
            Node::Leaf(leaf) => f(&mut leaf.pane),
            Node::Split(split) => split.for_each_pane_mut(f),
        }
    }

    pub(crate) fn as_split_mut(&mut self) -> Option<&mut SplitNode<P>> {
        match self {
            Node::Leaf(_) => None,
            Node::Split(split) => Some(&mut **split),
        }
    }
}

/// Operation addressed to splits of one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SplitOp {
    Move(i32),
    ToggleSecondary,
}

/// Two children sharing an area along one axis.
///
/// The primary sits left of (horizontal) or above (vertical) the secondary.
/// The tree shape is fixed at construction; only sizes, visibility and focus
/// change afterwards.
#[derive(Debug)]
pub struct SplitNode<P> {
    pub(crate) axis: Axis,
    pub(crate) primary: Node<P>,
    pub(crate) secondary: Node<P>,
    pub(crate) division: Division,
    /// Size of the dimension the split does not divide
    pub(crate) other: u16,
    pub(crate) secondary_state: SecondaryState,
}

impl<P: Pane> SplitNode<P> {
    pub fn new(
        axis: Axis,
        primary: Node<P>,
        secondary: Node<P>,
        primary_min: u16,
        secondary_min: u16,
    ) -> Self {
        Self {
            axis,
            primary,
            secondary,
            division: Division::new(primary_min, secondary_min),
            other: 0,
            secondary_state: SecondaryState::Unfocused,
        }
    }

    /// Side-by-side split: primary left, secondary right
    pub fn horizontal(
        primary: Node<P>,
        secondary: Node<P>,
        primary_min: u16,
        secondary_min: u16,
    ) -> Self {
        Self::new(Axis::Horizontal, primary, secondary, primary_min, secondary_min)
    }

    /// Stacked split: primary on top, secondary below
    pub fn vertical(
        primary: Node<P>,
        secondary: Node<P>,
        primary_min: u16,
        secondary_min: u16,
    ) -> Self {
        Self::new(Axis::Vertical, primary, secondary, primary_min, secondary_min)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn secondary_state(&self) -> SecondaryState {
        self.secondary_state
    }

    /// The remembered division, unaffected by hiding
    pub fn division(&self) -> &Division {
        &self.division
    }

    pub fn primary(&self) -> &Node<P> {
        &self.primary
    }

    pub fn secondary(&self) -> &Node<P> {
        &self.secondary
    }

    /// Size along the axis actually given to the primary
    pub fn primary_size(&self) -> u16 {
        if self.secondary_state == SecondaryState::Hidden {
            self.division.total()
        } else {
            self.division.primary()
        }
    }

    /// Size along the axis actually given to the secondary; zero when hidden
    pub fn secondary_size(&self) -> u16 {
        if self.secondary_state == SecondaryState::Hidden {
            0
        } else {
            self.division.secondary()
        }
    }

    /// Fit the split to `total` cells along its axis and `other` across it
    pub fn resize(&mut self, total: u16, other: u16) {
        self.other = other;
        self.division.resize(total);
        self.resize_children();
    }

    /// Move the dividing line; does nothing while the secondary is hidden
    pub fn move_by(&mut self, delta: i32) {
        if self.secondary_state == SecondaryState::Hidden {
            return;
        }
        self.division.move_by(delta);
        tracing::debug!(
            axis = ?self.axis,
            primary = self.division.primary(),
            secondary = self.division.secondary(),
            "moved split"
        );
        self.resize_children();
    }

    /// Hide or show the secondary. Hiding a focused secondary hands focus
    /// back to the primary; panes learn of it on the next [`SplitNode::focus`].
    pub(crate) fn toggle_secondary(&mut self) {
        self.secondary_state = match self.secondary_state {
            SecondaryState::Unfocused => SecondaryState::Hidden,
            SecondaryState::Focused => {
                self.secondary.reset_focus();
                SecondaryState::Hidden
            }
            SecondaryState::Hidden => SecondaryState::Unfocused,
        };
        tracing::debug!(axis = ?self.axis, state = ?self.secondary_state, "toggled secondary");
        self.resize_children();
    }

    pub fn focus(&mut self, active: bool) {
        let secondary_focused = self.secondary_state == SecondaryState::Focused;
        self.primary.focus(active && !secondary_focused);
        self.secondary.focus(active && secondary_focused);
    }

    pub fn focused_pane(&self) -> &P {
        match self.secondary_state {
            SecondaryState::Focused => self.secondary.focused_pane(),
            SecondaryState::Unfocused | SecondaryState::Hidden => self.primary.focused_pane(),
        }
    }

    pub fn render(&self, theme: &Theme) -> String {
        let primary = self.primary.render(theme);
        if self.secondary_state == SecondaryState::Hidden {
            return primary;
        }
        let secondary = self.secondary.render(theme);
        match self.axis {
            Axis::Horizontal => join_horizontal(&[&primary, &secondary]),
            Axis::Vertical => join_vertical(&[&primary, &secondary]),
        }
    }

    pub fn for_each_pane<'a>(&'a self, f: &mut dyn FnMut(&'a P)) {
        self.primary.for_each_pane(f);
        self.secondary.for_each_pane(f);
    }

    pub fn for_each_pane_mut(&mut self, f: &mut dyn FnMut(&mut P)) {
        self.primary.for_each_pane_mut(f);
        self.secondary.for_each_pane_mut(f);
    }

    /// Apply `op` to the outermost splits of `axis`, skipping hidden secondaries
    pub(crate) fn route(&mut self, axis: Axis, op: SplitOp) {
        if self.axis == axis {
            match op {
                SplitOp::Move(delta) => self.move_by(delta),
                SplitOp::ToggleSecondary => self.toggle_secondary(),
            }
            return;
        }
        if let Some(split) = self.primary.as_split_mut() {
            split.route(axis, op);
        }
        if self.secondary_state != SecondaryState::Hidden {
            if let Some(split) = self.secondary.as_split_mut() {
                split.route(axis, op);
            }
        }
    }

    fn resize_children(&mut self) {
        let primary = self.axis.compose(self.primary_size(), self.other);
        let secondary = self.axis.compose(self.secondary_size(), self.other);
        self.primary.resize(primary.0, primary.1);
        self.secondary.resize(secondary.0, secondary.1);
    }
}
