// ABOUTME: Binary tree structure for terminal pane layout.
// ABOUTME: Entry point for resize, split moves, hiding, and focus cycling.

use moto_render::Theme;

use crate::split::SplitOp;
use crate::{Axis, Layout, LayoutEvent, Pane, SplitNode};

#[derive(Debug)]
pub struct LayoutTree<P> {
    root: SplitNode<P>,
    width: u16,
    height: u16,
}

impl<P: Pane> LayoutTree<P> {
    /// Build a tree around its root split; focus starts on the first pane
    pub fn new(mut root: SplitNode<P>) -> Self {
        root.focus(true);
        Self {
            root,
            width: 0,
            height: 0,
        }
    }

    pub fn root(&self) -> &SplitNode<P> {
        &self.root
    }

    /// Terminal size last applied
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let (total, other) = self.root.axis().decompose(width, height);
        self.root.resize(total, other);
        tracing::debug!(width, height, "resized layout");
    }

    /// Move the outermost split(s) of `axis` by `delta` cells
    pub fn move_split(&mut self, axis: Axis, delta: i32) {
        self.root.route(axis, SplitOp::Move(delta));
    }

    /// Hide or show the secondary of the outermost split(s) of `axis`
    pub fn toggle_secondary(&mut self, axis: Axis) {
        self.root.route(axis, SplitOp::ToggleSecondary);
        self.root.focus(true);
    }

    pub fn cycle_focus(&mut self) {
        self.root.cycle_focus();
        self.root.focus(true);
    }

    /// All panes in depth-first order, primary before secondary
    pub fn panes(&self) -> Vec<&P> {
        let mut result = Vec::new();
        self.root.for_each_pane(&mut |pane| result.push(pane));
        result
    }
}

impl<P: Pane> Layout<P> for LayoutTree<P> {
    fn handle(&mut self, event: LayoutEvent) {
        match event {
            LayoutEvent::Resize { width, height } => self.resize(width, height),
            LayoutEvent::ShrinkPrimary(axis) => self.move_split(axis, -1),
            LayoutEvent::GrowPrimary(axis) => self.move_split(axis, 1),
            LayoutEvent::ToggleSecondary(axis) => self.toggle_secondary(axis),
            LayoutEvent::SwitchFocus => self.cycle_focus(),
            // Panes in a split tree are hidden with ToggleSecondary instead.
            LayoutEvent::ClosePane => {}
        }
    }

    fn render(&self, theme: &Theme) -> String {
        self.root.render(theme)
    }

    fn focused_pane(&self) -> &P {
        self.root.focused_pane()
    }

    fn for_each_pane_mut(&mut self, f: &mut dyn FnMut(&mut P)) {
        self.root.for_each_pane_mut(f);
    }
}
