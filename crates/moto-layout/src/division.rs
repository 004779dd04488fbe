// ABOUTME: Sizing of one divided dimension between a primary and a secondary region.
// ABOUTME: Shared by split nodes and the fixed arrangement; every input is clamped.

/// One dimension divided between a primary and a secondary region.
///
/// Invariants kept by every operation:
/// - `primary >= primary_min` and `secondary >= secondary_min`
/// - `primary + secondary == total` whenever `total >= primary_min + secondary_min`
/// - `primary <= primary_max`
///
/// `primary_max` is a ratchet: only [`Division::move_by`] changes it, so a
/// terminal that shrinks and grows back restores the size the user chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    primary_min: u16,
    secondary_min: u16,
    primary_max: u16,
    primary: u16,
    secondary: u16,
    total: u16,
}

fn clamp(value: i32, low: i32, high: i32) -> i32 {
    // Low bound wins when the range is empty.
    value.min(high).max(low)
}

impl Division {
    pub fn new(primary_min: u16, secondary_min: u16) -> Self {
        Self {
            primary_min,
            secondary_min,
            primary_max: primary_min,
            primary: primary_min,
            secondary: secondary_min,
            total: 0,
        }
    }

    pub fn primary(&self) -> u16 {
        self.primary
    }

    pub fn secondary(&self) -> u16 {
        self.secondary
    }

    pub fn primary_min(&self) -> u16 {
        self.primary_min
    }

    pub fn secondary_min(&self) -> u16 {
        self.secondary_min
    }

    pub fn primary_max(&self) -> u16 {
        self.primary_max
    }

    pub fn total(&self) -> u16 {
        self.total
    }

    /// Fit the division to a new total.
    ///
    /// Shrinking takes space from the secondary first, then the primary.
    /// Growing gives space to the primary up to `primary_max`, then the rest
    /// to the secondary. Below the sum of the minimums both regions stay at
    /// their minimum and overflow the total.
    pub fn resize(&mut self, total: u16) {
        self.total = total;

        let total = i32::from(total);
        let mut primary = i32::from(self.primary);
        let mut secondary = i32::from(self.secondary);

        if total < primary + secondary {
            secondary = (total - primary).max(self.secondary_min.into());
            if primary + secondary > total {
                primary = (total - secondary).max(self.primary_min.into());
            }
        } else if total > primary + secondary {
            primary = (total - secondary).min(self.primary_max.into());
            secondary = total - primary;
        }

        self.primary = primary as u16;
        self.secondary = secondary as u16;
    }

    /// Move the dividing line by `delta` cells (positive grows the primary)
    /// and remember the result as the new `primary_max`.
    pub fn move_by(&mut self, delta: i32) {
        let total = i32::from(self.total);
        let primary_min = i32::from(self.primary_min);
        let secondary_min = i32::from(self.secondary_min);

        let primary = clamp(
            i32::from(self.primary).saturating_add(delta),
            primary_min,
            total - secondary_min,
        );
        let secondary = clamp(total - primary, secondary_min, total - primary_min);

        self.primary = primary as u16;
        self.secondary = secondary as u16;
        self.primary_max = self.primary;
    }
}
