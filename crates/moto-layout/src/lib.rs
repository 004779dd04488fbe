// ABOUTME: Pane layout management for the moto terminal UI.
// ABOUTME: Recursive resizable splits plus a fixed three-pane arrangement.

mod division;
mod event;
mod fixed;
mod focus;
mod pane;
mod split;
mod tree;

pub use division::Division;
pub use event::{Layout, LayoutEvent};
pub use fixed::{FixedLayout, PanePosition};
pub use pane::{Axis, Pane};
pub use split::{Leaf, Node, SecondaryState, SplitNode};
pub use tree::LayoutTree;
