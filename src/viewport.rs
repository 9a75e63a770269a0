//! Inverse projection for a scrolled list.
//!
//! Given a pixel offset into a list of N fixed-height rows, recover the row
//! indices at the top and bottom of the visible window with two `atan`
//! evaluations, independent of N.

use crate::constants::{
    DEFAULT_ITEM_HEIGHT_PX, DEFAULT_VIEWPORT_HEIGHT_PX, DEFAULT_VIEWPORT_ITEMS, PI,
    RESTORATION_CONST, VIEWPORT_CLAMP_MAX, VIEWPORT_CLAMP_MIN,
};
use crate::error::{ObserverError, Result};
use serde::Serialize;

/// Geometry of a scrolled list
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub total_items: u64,
    pub item_height: f64,
    pub viewport_height: f64,
    /// Offset of the top edge of the window, in pixels
    pub scroll_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        let total_items = DEFAULT_VIEWPORT_ITEMS;
        let item_height = DEFAULT_ITEM_HEIGHT_PX;
        Self {
            total_items,
            item_height,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT_PX,
            scroll_y: Viewport::middle_scroll(total_items, item_height),
        }
    }
}

impl Viewport {
    /// Scroll offset of the middle of the content
    pub fn middle_scroll(total_items: u64, item_height: f64) -> f64 {
        (total_items as f64 * item_height) / 2.0
    }

    /// Total scrollable height in pixels
    pub fn content_height(&self) -> f64 {
        self.total_items as f64 * self.item_height
    }

    fn validate(&self) -> Result<()> {
        if self.total_items == 0 {
            return Err(ObserverError::InvalidViewport("list has no items".into()));
        }
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            return Err(ObserverError::InvalidViewport(format!(
                "item height must be positive, got {}",
                self.item_height
            )));
        }
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(ObserverError::InvalidViewport(format!(
                "viewport height must be positive, got {}",
                self.viewport_height
            )));
        }
        if !self.scroll_y.is_finite() || self.scroll_y < 0.0 {
            return Err(ObserverError::InvalidViewport(format!(
                "scroll offset must be non-negative, got {}",
                self.scroll_y
            )));
        }
        Ok(())
    }
}

/// Rows at the edges of the visible window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleRange {
    pub start_index: u64,
    pub end_index: u64,
    /// `|start_index - total_items / 2|`
    pub distance_from_center: u64,
}

impl VisibleRange {
    pub fn len(&self) -> u64 {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Map a pixel offset back to a row index.
///
/// The normalized position is clamped to
/// [`VIEWPORT_CLAMP_MIN`, `VIEWPORT_CLAMP_MAX`] before `atan`, so offsets far
/// outside the projected extent saturate instead of blowing up.
pub fn invert(target_y: f64, total_items: u64, extent: f64, center_offset: f64) -> u64 {
    let normalized = (target_y + center_offset) / extent;
    let clamped = normalized.clamp(VIEWPORT_CLAMP_MIN, VIEWPORT_CLAMP_MAX);

    let angle = (clamped * 2.0 - 1.0).atan();
    // Shift [-π/2, π/2] to [0, π]
    let shifted = angle + PI / 2.0;

    // Saturating float-to-int; shifted is at most π so this never exceeds total_items
    ((shifted / PI) * total_items as f64).floor() as u64
}

/// Indices at the top and bottom edges of `viewport`
pub fn visible_range(viewport: &Viewport) -> Result<VisibleRange> {
    viewport.validate()?;

    let extent = viewport.content_height() * RESTORATION_CONST;
    let center_offset = extent * 0.5;

    let top = viewport.scroll_y;
    let bottom = viewport.scroll_y + viewport.viewport_height;

    let start_index = invert(top, viewport.total_items, extent, center_offset);
    let end_index = invert(bottom, viewport.total_items, extent, center_offset);
    let distance_from_center = start_index.abs_diff(viewport.total_items / 2);

    tracing::debug!(
        total_items = viewport.total_items,
        start_index,
        end_index,
        "inverted viewport"
    );

    Ok(VisibleRange {
        start_index,
        end_index,
        distance_from_center,
    })
}
