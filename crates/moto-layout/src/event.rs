// ABOUTME: Events the layout reacts to and the interface shared by layouts.
// ABOUTME: Both the split tree and the fixed arrangement implement `Layout`.

use moto_render::Theme;

use crate::{Axis, Pane};

/// An input the layout applies in full before the next one arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    /// The terminal changed size
    Resize { width: u16, height: u16 },
    /// Move the division of the relevant split one cell toward the primary
    ShrinkPrimary(Axis),
    /// Move the division of the relevant split one cell toward the secondary
    GrowPrimary(Axis),
    /// Hide or show the secondary of the relevant split
    ToggleSecondary(Axis),
    SwitchFocus,
    /// Hide the active pane for the rest of the run (fixed arrangement only)
    ClosePane,
}

pub trait Layout<P: Pane> {
    fn handle(&mut self, event: LayoutEvent);

    fn render(&self, theme: &Theme) -> String;

    fn focused_pane(&self) -> &P;

    /// Visit every pane, e.g. to deliver content updates
    fn for_each_pane_mut(&mut self, f: &mut dyn FnMut(&mut P));
}
