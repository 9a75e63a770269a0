// Closure benchmark: does the projection of the first and one-past-last
// index meet again after the restoration factor is applied?
use crate::constants::{
    CLOSURE_REFERENCE_SCALE, CLOSURE_TOLERANCE, GOLDEN_CONJUGATE, RESTORATION_CONST,
    UNIVERSE_CYCLE,
};
use crate::error::{ObserverError, Result};
use crate::projection::restore;
use serde::Serialize;

/// Gap measured at one scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClosureRow {
    pub scale: f64,
    pub gap: f64,
    /// `gap < CLOSURE_TOLERANCE`
    pub closed: bool,
}

/// Gap measured for one candidate restoration factor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniquenessRow {
    pub name: String,
    pub factor: f64,
    pub gap: f64,
    /// Gap relative to the unscaled (factor 1.0) control
    pub ratio_to_control: f64,
}

/// A named restoration factor to compare
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub factor: f64,
}

impl Candidate {
    pub fn new(name: impl Into<String>, factor: f64) -> Self {
        Self {
            name: name.into(),
            factor,
        }
    }
}

/// Control, golden ratio conjugate and 2/π
pub fn default_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("Control (1.0)", 1.0),
        Candidate::new("Golden (0.618)", GOLDEN_CONJUGATE),
        Candidate::new("Restoration (2/pi)", RESTORATION_CONST),
    ]
}

/// Scales 10^3, 10^6, ... 10^15
pub fn default_scales() -> Vec<f64> {
    (1..=5).map(|k| 10f64.powi(3 * k)).collect()
}

fn validate_scale(scale: f64) -> Result<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ObserverError::InvalidScale(scale));
    }
    Ok(())
}

/// `|tan(θ_start)·factor − tan(θ_end)·factor|` where the two angles are
/// the projections of index 0 and index `scale` on a circle of `scale` indices.
pub fn closure_gap(scale: f64, factor: f64) -> Result<f64> {
    validate_scale(scale)?;

    let step = UNIVERSE_CYCLE / scale;
    let theta_start = (0.0 - scale / 2.0) * step;
    let theta_end = (scale - scale / 2.0) * step;

    let start = restore(theta_start.tan(), factor);
    let end = restore(theta_end.tan(), factor);

    Ok((start - end).abs())
}

/// Closure gap for `factor` at every scale in `scales`
pub fn scale_invariance(scales: &[f64], factor: f64) -> Result<Vec<ClosureRow>> {
    scales
        .iter()
        .map(|&scale| {
            let gap = closure_gap(scale, factor)?;
            tracing::debug!(scale, gap, "closure gap");
            Ok(ClosureRow {
                scale,
                gap,
                closed: gap < CLOSURE_TOLERANCE,
            })
        })
        .collect()
}

/// Compare candidate factors at `reference_scale` against the factor 1.0 control
pub fn constant_uniqueness(
    reference_scale: f64,
    candidates: &[Candidate],
) -> Result<Vec<UniquenessRow>> {
    let control = closure_gap(reference_scale, 1.0)?;

    candidates
        .iter()
        .map(|candidate| {
            let gap = closure_gap(reference_scale, candidate.factor)?;
            Ok(UniquenessRow {
                name: candidate.name.clone(),
                factor: candidate.factor,
                gap,
                ratio_to_control: gap / control,
            })
        })
        .collect()
}

/// [`constant_uniqueness`] with the default candidates and reference scale
pub fn default_uniqueness() -> Result<Vec<UniquenessRow>> {
    constant_uniqueness(CLOSURE_REFERENCE_SCALE, &default_candidates())
}
