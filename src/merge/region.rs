/// Overlap between a base buffer and an overlay placed at `(dx, dy)`.
///
/// Negative offsets clip the overlay's own origin, positive ones the base's.
/// Empty overlaps are normalized to all-zero fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeRegion {
    /// First overlay column inside the overlap.
    pub above_x: u32,
    /// First overlay row inside the overlap.
    pub above_y: u32,
    /// First base column inside the overlap.
    pub below_x: u32,
    /// First base row inside the overlap.
    pub below_y: u32,
    /// Overlap width in pixels.
    pub width: u32,
    /// Overlap height in pixels.
    pub height: u32,
}

impl MergeRegion {
    /// Intersect a `base_width x base_height` buffer with an overlay at `(dx, dy)`.
    pub fn compute(
        base_width: u32,
        base_height: u32,
        overlay_width: u32,
        overlay_height: u32,
        dx: i32,
        dy: i32,
    ) -> Self {
        let (above_x, below_x, width) = axis(base_width, overlay_width, dx);
        let (above_y, below_y, height) = axis(base_height, overlay_height, dy);
        if width == 0 || height == 0 {
            return Self::default();
        }
        Self {
            above_x,
            above_y,
            below_x,
            below_y,
            width,
            height,
        }
    }

    /// `true` when no pixel is shared.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels in the overlap.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// `(above_offset, below_offset, extent)` along one axis.
fn axis(base_len: u32, overlay_len: u32, d: i32) -> (u32, u32, u32) {
    let d = i64::from(d);
    let above = (-d).max(0);
    let below = d.max(0);
    let extent = (i64::from(overlay_len) - above).min(i64::from(base_len) - below);
    if extent <= 0 {
        return (0, 0, 0);
    }
    // extent > 0 implies both offsets are inside their u32-sized buffers.
    (above as u32, below as u32, extent as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/merge/region.rs"]
mod tests;
