// ABOUTME: Border kinds selectable from configuration.
// ABOUTME: The renderer maps each kind to its box-drawing glyphs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BorderKind {
    /// Single thin line: ┌─┐
    #[default]
    Normal,
    /// Heavy line: ┏━┓
    Thick,
    /// Thin line with rounded corners: ╭─╮
    Rounded,
    /// Double line: ╔═╗
    Double,
}

impl BorderKind {
    pub fn label(&self) -> &'static str {
        match self {
            BorderKind::Normal => "normal",
            BorderKind::Thick => "thick",
            BorderKind::Rounded => "rounded",
            BorderKind::Double => "double",
        }
    }
}
