//! Fixed sample run: linear scan versus geometric projection

use bounded_observer::constants::{DEFAULT_RANGE_SIZE, DEFAULT_TARGET_INDEX};
use bounded_observer::{render_text, run_simulation};
use std::io::Write;

fn main() {
    bounded_observer::init_tracing();

    let report = run_simulation(DEFAULT_RANGE_SIZE, DEFAULT_TARGET_INDEX);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    // A closed stdout (e.g. piped into `head`) is not a failure of the run
    if let Err(e) = render_text(&report, &mut out).and_then(|_| out.flush()) {
        tracing::debug!(error = %e, "stdout closed before the transcript was written");
    }
}
