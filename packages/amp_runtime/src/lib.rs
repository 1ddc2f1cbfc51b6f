#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime bootstrap and hardware-topology discovery for Ampnode.
//!
//! At process start, before any concurrent work is scheduled, a process wants to know how much
//! parallelism the host actually offers and to configure itself accordingly. This package is the
//! piece responsible for that handoff: it detects the number of logical processors available to
//! the current process and records the result as the process-wide runtime configuration.
//!
//! # Quick start
//!
//! The typical caller is a process entry point that initializes the runtime once and reports the
//! detected parallelism:
//!
//! ```rust
//! use amp_runtime::Runtime;
//!
//! let config = Runtime::init();
//! println!("Running with {} CPUs.", config.cpu_count());
//! ```
//!
//! [`Runtime::init()`] always succeeds. If the host cannot report a processor count, the runtime
//! degrades to a single-processor configuration instead of failing, because a caller this early
//! in process startup has no recovery path anyway.
//!
//! # Detection without process-wide state
//!
//! Code that wants an isolated configuration (for example, to remain testable) can skip the
//! process-wide singleton and construct one directly from a detector:
//!
//! ```rust
//! use amp_runtime::{RuntimeConfig, TopologyDetector};
//!
//! let config = RuntimeConfig::detect_with(&TopologyDetector::new());
//! assert!(config.cpu_count().get() >= 1);
//! ```
//!
//! # Testing with fake topologies
//!
//! The `test-util` Cargo feature enables the [`fake`] module, which can simulate hosts with any
//! processor count, including hosts that cannot report one at all. To make your code testable,
//! accept a [`TopologyDetector`] (or a [`RuntimeConfig`]) as a value instead of always going
//! through [`Runtime::init()`]. See the [`fake`] module for examples.
//!
//! # Operating system compatibility
//!
//! On Linux, the processor count is read from the current process affinity mask, so constraints
//! applied via `taskset` or cgroups are respected. On other operating systems (and under Miri),
//! a fallback implementation queries `std::thread::available_parallelism()` instead. Both paths
//! degrade to a count of one if the host reports nothing.

mod runtime;
mod runtime_config;
mod topology;

#[cfg(any(test, feature = "test-util"))]
pub mod fake;

pub use runtime::Runtime;
pub use runtime_config::RuntimeConfig;
pub use topology::TopologyDetector;

mod pal;
