#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the Ampnode process.
//!
//! Takes no arguments and no flags. Initializes the runtime, reports the detected parallelism
//! on standard output and returns control to the host. Covered by the integration tests in
//! `tests/` rather than unit tests, since the interesting behavior is process output and exit
//! code.

use std::process::ExitCode;

use amp_runtime::Runtime;

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    // Run Ampnode on multiple processors if possible.
    let config = Runtime::init();

    println!("Running Ampnode with {} CPUs.", config.cpu_count());

    ExitCode::SUCCESS
}
