// Simulation report: runs both methods and renders the console transcript
use crate::linear_scan::{scan_linear, ScanOutcome};
use crate::projection::{project, Projection};
use serde::Serialize;
use std::io::{self, Write};

pub const CONCLUSION: &str = "The Universe uses Pointer Casting, not Pointer Arithmetic.";

/// Outcome of running both methods against one (range, target) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationReport {
    pub range_size: u64,
    pub target: u64,
    pub scan: ScanOutcome,
    pub projection: Projection,
}

/// Linear scan first, then the projection
pub fn run_simulation(range_size: u64, target: u64) -> SimulationReport {
    tracing::info!(range_size, target_index = target, "running simulation");

    let scan = scan_linear(range_size, target);
    let projection = project(range_size, target);
    if !projection.is_finite() {
        tracing::warn!(value = projection.restored, "projection produced a non-finite value");
    }

    SimulationReport {
        range_size,
        target,
        scan,
        projection,
    }
}

/// Write the human-readable transcript of `report` to `out`
pub fn render_text<W: Write>(report: &SimulationReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "--- SIMULATION START: UNIVERSE SIZE {} ---", report.range_size)?;
    writeln!(out)?;

    writeln!(out, "[Method 1: Linear Scan] Walking the heap...")?;
    match report.scan {
        ScanOutcome::Found { offset, steps } => {
            writeln!(out, " -> Found at offset {offset} after {steps} steps.")?;
        }
        ScanOutcome::NotFound { steps, .. } => {
            writeln!(out, " -> Target {} not found after {steps} steps.", report.target)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "[Method 2: Geometric Cast] Projecting coordinates...")?;
    writeln!(out, " -> Calculated Projection: {:.16}", report.projection.restored)?;
    writeln!(out, " -> Energy Cost: O(1) (Zero Iterations)")?;

    writeln!(out)?;
    writeln!(out, "--- SIMULATION END ---")?;
    writeln!(out, "Conclusion: {CONCLUSION}")?;
    Ok(())
}
