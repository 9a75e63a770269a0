//! # Bounded Observer
//!
//! Compares two ways of locating an index in a large range: an O(N) linear
//! scan and an O(1) closed-form tangent projection.

// Re-export the main types and functions
pub use error::{ObserverError, Result};
pub use linear_scan::{scan_linear, ScanOutcome};
pub use projection::{angle_of, project, project_checked, restore, Projection};
pub use closure::{
    closure_gap, constant_uniqueness, default_candidates, default_scales, default_uniqueness,
    scale_invariance, Candidate, ClosureRow, UniquenessRow,
};
pub use viewport::{invert, visible_range, Viewport, VisibleRange};
pub use report::{render_text, run_simulation, SimulationReport, CONCLUSION};

// Module declarations
pub mod constants;
mod error;
mod linear_scan;
mod projection;
mod closure;
mod viewport;
mod report;

/// Install the stderr `tracing` subscriber used by both binaries.
///
/// Honours `RUST_LOG`; defaults to `warn` so stdout carries only the report.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
