// ABOUTME: Render-time styling passed explicitly down the layout tree.
// ABOUTME: Holds the border glyphs for focused and unfocused panes.

use moto_core::BorderKind;

use crate::BorderSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub active: BorderSet,
    pub inactive: BorderSet,
}

impl Theme {
    pub fn new(active: BorderKind, inactive: BorderKind) -> Self {
        Self {
            active: active.into(),
            inactive: inactive.into(),
        }
    }

    /// Border for a pane in the given focus state
    pub fn border(&self, focused: bool) -> &BorderSet {
        if focused {
            &self.active
        } else {
            &self.inactive
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(BorderKind::Thick, BorderKind::Normal)
    }
}
