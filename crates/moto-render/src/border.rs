// ABOUTME: Box-drawing borders around text blocks.
// ABOUTME: Maps configured border kinds to glyph sets and frames pane bodies.

use moto_core::BorderKind;

use crate::text::{block_width, fit, truncate};

/// Glyphs for each edge and corner of a border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top: char,
    pub top_right: char,
    pub left: char,
    pub right: char,
    pub bottom_left: char,
    pub bottom: char,
    pub bottom_right: char,
}

impl BorderSet {
    const fn new(corners: [char; 4], horizontal: char, vertical: char) -> Self {
        Self {
            top_left: corners[0],
            top: horizontal,
            top_right: corners[1],
            left: vertical,
            right: vertical,
            bottom_left: corners[2],
            bottom: horizontal,
            bottom_right: corners[3],
        }
    }

    pub const NORMAL: Self = Self::new(['┌', '┐', '└', '┘'], '─', '│');
    pub const THICK: Self = Self::new(['┏', '┓', '┗', '┛'], '━', '┃');
    pub const ROUNDED: Self = Self::new(['╭', '╮', '╰', '╯'], '─', '│');
    pub const DOUBLE: Self = Self::new(['╔', '╗', '╚', '╝'], '═', '║');
}

impl From<BorderKind> for BorderSet {
    fn from(kind: BorderKind) -> Self {
        match kind {
            BorderKind::Normal => Self::NORMAL,
            BorderKind::Thick => Self::THICK,
            BorderKind::Rounded => Self::ROUNDED,
            BorderKind::Double => Self::DOUBLE,
        }
    }
}

/// Frame `body` in a border, producing a block of exactly `width` x `height`.
///
/// The body is cropped or padded to the inner (width-2) x (height-2) area.
/// An optional title is drawn into the top edge. Areas too small to hold a
/// border come back blank.
pub fn bordered(
    body: &str,
    width: usize,
    height: usize,
    set: &BorderSet,
    title: Option<&str>,
) -> String {
    if width < 2 || height < 2 {
        return fit("", width, height);
    }
    let inner_width = width - 2;

    let label = title.map(|t| truncate(t, inner_width)).unwrap_or_default();
    let mut top = String::new();
    top.push(set.top_left);
    top.push_str(&label);
    let label_width = block_width(&label);
    top.extend(std::iter::repeat(set.top).take(inner_width - label_width));
    top.push(set.top_right);

    let mut out = vec![top];
    let inner = fit(body, inner_width, height - 2);
    if height > 2 {
        for line in inner.split('\n') {
            out.push(format!("{}{}{}", set.left, line, set.right));
        }
    }

    let mut bottom = String::new();
    bottom.push(set.bottom_left);
    bottom.extend(std::iter::repeat(set.bottom).take(inner_width));
    bottom.push(set.bottom_right);
    out.push(bottom);

    out.join("\n")
}
