/// Mathematical and sample-run constants used by the scan and projection routines

/// Pi, re-exported so callers do not need to reach into `std::f64::consts`
pub const PI: f64 = std::f64::consts::PI;

/// One full turn of the index circle (2π)
///
/// An index range of size N is mapped onto one full turn, so each index
/// advances the angle by `UNIVERSE_CYCLE / N`.
pub const UNIVERSE_CYCLE: f64 = std::f64::consts::TAU;

/// Restoration factor applied to the raw tangent value (2/π)
///
/// Value: 0.6366197723675814
///
/// Rescales `tan(angle)` back into the index domain. It is also the factor
/// that minimises the closure gap measured by the closure benchmark.
pub const RESTORATION_CONST: f64 = std::f64::consts::FRAC_2_PI;

/// Range size used by the fixed sample run
pub const DEFAULT_RANGE_SIZE: u64 = 100_000_000;

/// Target index used by the fixed sample run
pub const DEFAULT_TARGET_INDEX: u64 = 8_675_309;

// Closure benchmark constants

/// Largest closure gap still considered "closed"
pub const CLOSURE_TOLERANCE: f64 = 5e-16;

/// Scale used when comparing candidate restoration factors
pub const CLOSURE_REFERENCE_SCALE: f64 = 1e9;

/// Golden ratio conjugate, used as a non-special comparison candidate
pub const GOLDEN_CONJUGATE: f64 = 0.6180339887;

// Viewport constants

/// Lower clamp for the normalized viewport position
///
/// Keeps `atan` away from the edges of the projection where neighbouring
/// indices collapse onto the same angle.
pub const VIEWPORT_CLAMP_MIN: f64 = 0.001;

/// Upper clamp for the normalized viewport position
pub const VIEWPORT_CLAMP_MAX: f64 = 0.999;

/// Item count of the sample viewport (one trillion rows)
pub const DEFAULT_VIEWPORT_ITEMS: u64 = 1_000_000_000_000;

/// Height of a single row in pixels
pub const DEFAULT_ITEM_HEIGHT_PX: f64 = 50.0;

/// Height of the visible window in pixels
pub const DEFAULT_VIEWPORT_HEIGHT_PX: f64 = 1000.0;
