use serde::Serialize;
use std::time::Instant;

/// Result of walking the index range one step at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// The target was reached; `steps` counts every index visited, the target included
    Found { offset: u64, steps: u64 },
    /// The target lies outside the range; every index was visited without a match
    NotFound { range_size: u64, steps: u64 },
}

impl ScanOutcome {
    /// Number of indices visited
    pub fn steps(&self) -> u64 {
        match *self {
            ScanOutcome::Found { steps, .. } | ScanOutcome::NotFound { steps, .. } => steps,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ScanOutcome::Found { .. })
    }
}

/// Walk `0..range_size` counting steps until `target` is reached.
///
/// O(target) time, O(1) space. A target at or beyond `range_size` costs a
/// full pass and yields [`ScanOutcome::NotFound`].
pub fn scan_linear(range_size: u64, target: u64) -> ScanOutcome {
    let started = Instant::now();
    tracing::debug!(range_size, target_index = target, "starting linear scan");

    let mut steps: u64 = 0;
    for index in 0..range_size {
        steps += 1;
        if index == target {
            tracing::debug!(
                offset = index,
                steps,
                elapsed_us = started.elapsed().as_micros() as u64,
                "linear scan matched"
            );
            return ScanOutcome::Found { offset: index, steps };
        }
    }

    tracing::warn!(range_size, target_index = target, steps, "linear scan exhausted range without a match");
    ScanOutcome::NotFound { range_size, steps }
}
