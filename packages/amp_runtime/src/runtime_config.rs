use std::num::NonZero;

use crate::TopologyDetector;

/// The resolved runtime configuration: how much parallelism this process has configured
/// itself to use.
///
/// A `RuntimeConfig` is created once, during initialization, and is immutable thereafter.
/// The process-wide instance is owned by [`Runtime`][crate::Runtime]; isolated instances can
/// be constructed directly via [`detect_with()`][Self::detect_with], which is the form to
/// prefer when the configuration is passed down to components explicitly.
///
/// # Example
///
/// ```
/// use amp_runtime::{RuntimeConfig, TopologyDetector};
///
/// let config = RuntimeConfig::detect_with(&TopologyDetector::new());
/// assert_eq!(config.max_parallelism(), config.cpu_count());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RuntimeConfig {
    cpu_count: NonZero<usize>,
}

impl RuntimeConfig {
    /// Builds a configuration from the processor count reported by the given detector.
    ///
    /// Always succeeds: if the host cannot report a count, the detector degrades to a
    /// single-processor configuration.
    #[must_use]
    pub fn detect_with(detector: &TopologyDetector) -> Self {
        Self {
            cpu_count: detector.detect_cpu_count(),
        }
    }

    /// Builds a configuration from the real hardware of the build target platform.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_with(&TopologyDetector::new())
    }

    /// The number of logical processors the runtime has configured itself to use.
    ///
    /// Never zero - detection degrades to one when the host reports nothing.
    #[inline]
    #[must_use]
    pub fn cpu_count(&self) -> NonZero<usize> {
        self.cpu_count
    }

    /// The configured parallelism ceiling: the maximum number of concurrently scheduled
    /// execution threads the runtime will use for its internal work-scheduling.
    ///
    /// The native-thread execution model has no settable process-global limit, so recording
    /// the ceiling here is the whole of the configuration step. By construction this equals
    /// [`cpu_count()`][Self::cpu_count].
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[inline]
    #[must_use]
    pub fn max_parallelism(&self) -> NonZero<usize> {
        self.cpu_count
    }
}
