// ABOUTME: Fixed three-pane arrangement: left, top-right and bottom-right.
// ABOUTME: Sizes each axis with a Division and cycles an active-pane cursor.

use moto_render::{bordered, join_horizontal, join_vertical, Theme};

use crate::{Axis, Division, Layout, LayoutEvent, Pane};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanePosition {
    Left,
    TopRight,
    BottomRight,
}

impl PanePosition {
    /// Canonical order used when switching panes
    pub const ALL: [PanePosition; 3] = [
        PanePosition::Left,
        PanePosition::TopRight,
        PanePosition::BottomRight,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug)]
struct Slot<P> {
    pane: P,
    width: u16,
    height: u16,
    visible: bool,
}

/// Three panes: the left one spans the full height, the right column is
/// divided between a top and a bottom pane.
///
/// Closed panes stay closed for the rest of the run and at least one pane
/// always remains visible.
#[derive(Debug)]
pub struct FixedLayout<P> {
    slots: [Slot<P>; 3],
    active: PanePosition,
    /// Left pane | right column
    columns: Division,
    /// Top-right pane / bottom-right pane
    rows: Division,
    width: u16,
    height: u16,
}

impl<P: Pane> FixedLayout<P> {
    pub fn new(left: P, top_right: P, bottom_right: P, min_width: u16, min_height: u16) -> Self {
        let slot = |pane| Slot {
            pane,
            width: 0,
            height: 0,
            visible: true,
        };
        let mut layout = Self {
            slots: [slot(left), slot(top_right), slot(bottom_right)],
            active: PanePosition::Left,
            columns: Division::new(min_width, min_width),
            rows: Division::new(min_height, min_height),
            width: 0,
            height: 0,
        };
        layout.sync_focus();
        layout
    }

    pub fn active(&self) -> PanePosition {
        self.active
    }

    pub fn pane(&self, position: PanePosition) -> &P {
        &self.slots[position.index()].pane
    }

    pub fn is_visible(&self, position: PanePosition) -> bool {
        self.slots[position.index()].visible
    }

    /// Outer size of the pane at `position`, border included
    pub fn pane_size(&self, position: PanePosition) -> (u16, u16) {
        let slot = &self.slots[position.index()];
        (slot.width, slot.height)
    }

    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|s| s.visible).count()
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.columns.resize(width);
        self.rows.resize(height);
        self.apply_sizes();
    }

    /// Grow (positive) or shrink the active pane's width.
    ///
    /// The right-hand panes share a column, so for them growing moves the
    /// dividing line left.
    pub fn change_active_width(&mut self, delta: i32) {
        if !self.columns_divided() {
            return;
        }
        let delta = match self.active {
            PanePosition::Left => delta,
            PanePosition::TopRight | PanePosition::BottomRight => delta.saturating_neg(),
        };
        self.columns.move_by(delta);
        self.apply_sizes();
    }

    /// Grow (positive) or shrink the active pane's height. The left pane
    /// already spans the full height.
    pub fn change_active_height(&mut self, delta: i32) {
        let delta = match self.active {
            PanePosition::Left => return,
            PanePosition::TopRight => delta,
            PanePosition::BottomRight => delta.saturating_neg(),
        };
        if !self.rows_divided() {
            return;
        }
        self.rows.move_by(delta);
        self.apply_sizes();
    }

    /// Make the next visible pane, in canonical order, the active one
    pub fn switch_pane(&mut self) {
        let start = self.active.index();
        let next = (1..=PanePosition::ALL.len())
            .map(|step| PanePosition::ALL[(start + step) % PanePosition::ALL.len()])
            .find(|p| self.is_visible(*p));
        if let Some(next) = next {
            self.active = next;
        }
        self.sync_focus();
    }

    /// Hide the active pane and move on to the next visible one.
    /// The last visible pane cannot be closed.
    pub fn close_pane(&mut self) {
        if self.visible_count() <= 1 {
            return;
        }
        let closed = self.active;
        self.slots[closed.index()].visible = false;
        self.switch_pane();
        self.apply_sizes();
        tracing::debug!(?closed, active = ?self.active, "closed pane");
    }

    fn columns_divided(&self) -> bool {
        self.is_visible(PanePosition::Left)
            && (self.is_visible(PanePosition::TopRight)
                || self.is_visible(PanePosition::BottomRight))
    }

    fn rows_divided(&self) -> bool {
        self.is_visible(PanePosition::TopRight) && self.is_visible(PanePosition::BottomRight)
    }

    fn apply_sizes(&mut self) {
        let right_visible =
            self.is_visible(PanePosition::TopRight) || self.is_visible(PanePosition::BottomRight);
        let (left_width, right_width) = match (self.is_visible(PanePosition::Left), right_visible)
        {
            (true, true) => (self.columns.primary(), self.columns.secondary()),
            (true, false) => (self.width, 0),
            (false, _) => (0, self.width),
        };
        let (top_height, bottom_height) = match (
            self.is_visible(PanePosition::TopRight),
            self.is_visible(PanePosition::BottomRight),
        ) {
            (true, true) => (self.rows.primary(), self.rows.secondary()),
            (true, false) => (self.height, 0),
            (false, _) => (0, self.height),
        };

        let sizes = [
            (left_width, self.height),
            (right_width, top_height),
            (right_width, bottom_height),
        ];
        for (slot, (width, height)) in self.slots.iter_mut().zip(sizes) {
            let (width, height) = if slot.visible { (width, height) } else { (0, 0) };
            slot.width = width;
            slot.height = height;
            slot.pane
                .resize(width.saturating_sub(2), height.saturating_sub(2));
        }
    }

    fn sync_focus(&mut self) {
        let active = self.active;
        for (slot, position) in self.slots.iter_mut().zip(PanePosition::ALL) {
            slot.pane.focus(position == active);
        }
    }

    fn render_slot(&self, position: PanePosition, theme: &Theme) -> String {
        let slot = &self.slots[position.index()];
        if !slot.visible {
            return String::new();
        }
        bordered(
            &slot.pane.render(theme),
            slot.width.into(),
            slot.height.into(),
            theme.border(position == self.active),
            slot.pane.title(),
        )
    }
}

impl<P: Pane> Layout<P> for FixedLayout<P> {
    fn handle(&mut self, event: LayoutEvent) {
        match event {
            LayoutEvent::Resize { width, height } => self.resize(width, height),
            LayoutEvent::ShrinkPrimary(Axis::Horizontal) => self.change_active_width(-1),
            LayoutEvent::GrowPrimary(Axis::Horizontal) => self.change_active_width(1),
            LayoutEvent::ShrinkPrimary(Axis::Vertical) => self.change_active_height(-1),
            LayoutEvent::GrowPrimary(Axis::Vertical) => self.change_active_height(1),
            LayoutEvent::SwitchFocus => self.switch_pane(),
            LayoutEvent::ClosePane => self.close_pane(),
            // Closed panes never come back.
            LayoutEvent::ToggleSecondary(_) => {}
        }
    }

    fn render(&self, theme: &Theme) -> String {
        let left = self.render_slot(PanePosition::Left, theme);
        let top_right = self.render_slot(PanePosition::TopRight, theme);
        let bottom_right = self.render_slot(PanePosition::BottomRight, theme);
        let right = join_vertical(&[&top_right, &bottom_right]);
        join_horizontal(&[&left, &right])
    }

    fn focused_pane(&self) -> &P {
        self.pane(self.active)
    }

    fn for_each_pane_mut(&mut self, f: &mut dyn FnMut(&mut P)) {
        for slot in &mut self.slots {
            f(&mut slot.pane);
        }
    }
}
