// ABOUTME: The capability contract between the layout and pane content.
// ABOUTME: Also defines the split axis and how it maps sizes to width/height.

use moto_render::Theme;

/// Content occupying one region of the layout.
///
/// The layout frames every pane in a border, so the size handed to `resize`
/// is the inner area. Zero-sized areas are valid and must not fail.
pub trait Pane {
    fn resize(&mut self, width: u16, height: u16);

    /// Render the pane body; should be `width` x `height` from the last resize
    fn render(&self, theme: &Theme) -> String;

    /// Purely visual; called with `true` on exactly one pane at a time
    fn focus(&mut self, active: bool);

    /// Label drawn into the pane's top border
    fn title(&self) -> Option<&str> {
        None
    }
}

/// Direction along which a split divides its space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Primary on the left, secondary on the right; divides the width
    Horizontal,
    /// Primary on top, secondary below; divides the height
    Vertical,
}

impl Axis {
    /// Split a width/height pair into (split dimension, carried dimension)
    pub fn decompose(self, width: u16, height: u16) -> (u16, u16) {
        match self {
            Axis::Horizontal => (width, height),
            Axis::Vertical => (height, width),
        }
    }

    /// Inverse of [`Axis::decompose`]: back to (width, height)
    pub fn compose(self, size: u16, other: u16) -> (u16, u16) {
        match self {
            Axis::Horizontal => (size, other),
            Axis::Vertical => (other, size),
        }
    }
}
