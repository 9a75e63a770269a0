//! Closed-form projection of an index onto the tangent line.
//!
//! An index range of size N is laid out on one full turn centred on zero:
//! index T sits at angle `(T - N/2) * 2π/N`. The tangent of that angle,
//! rescaled by 2/π, is the projected value. No iteration is involved.
//!
//! The tangent diverges at ±π/2 (T = N/4 and T = 3N/4). In f64 those angles
//! round to just below π/2, so the result is very large but finite; genuine
//! infinities and NaN only appear for degenerate inputs such as an empty range.

use crate::constants::{RESTORATION_CONST, UNIVERSE_CYCLE};
use crate::error::{ObserverError, Result};
use serde::Serialize;

/// The three stages of a single projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    /// Angle of the target on the index circle, in radians
    pub angle: f64,
    /// `tan(angle)` before restoration
    pub raw: f64,
    /// `raw * 2/π`
    pub restored: f64,
}

impl Projection {
    pub fn is_finite(&self) -> bool {
        self.restored.is_finite()
    }
}

/// Angle of `target` on a circle of `range_size` evenly spaced indices
pub fn angle_of(range_size: u64, target: u64) -> f64 {
    let n = range_size as f64;
    (target as f64 - n / 2.0) * (UNIVERSE_CYCLE / n)
}

/// Scale a raw tangent value by an arbitrary restoration factor
#[inline]
pub fn restore(raw: f64, factor: f64) -> f64 {
    raw * factor
}

/// Project `target` without any guard.
///
/// Pure and O(1). Non-finite values propagate unchanged; use
/// [`project_checked`] to turn them into an error.
pub fn project(range_size: u64, target: u64) -> Projection {
    let angle = angle_of(range_size, target);
    let raw = angle.tan();
    let restored = restore(raw, RESTORATION_CONST);

    tracing::debug!(range_size, target_index = target, angle, raw, restored, "projected index");

    Projection {
        angle,
        raw,
        restored,
    }
}

/// Project `target`, rejecting empty ranges and non-finite results
pub fn project_checked(range_size: u64, target: u64) -> Result<Projection> {
    if range_size == 0 {
        return Err(ObserverError::EmptyRange);
    }

    let projection = project(range_size, target);
    if !projection.is_finite() {
        tracing::warn!(range_size, target_index = target, value = projection.restored, "projection is not finite");
        return Err(ObserverError::NonFiniteProjection {
            range_size,
            target,
            value: projection.restored,
        });
    }

    Ok(projection)
}
