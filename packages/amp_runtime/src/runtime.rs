use std::marker::PhantomData;
use std::num::NonZero;
use std::sync::OnceLock;

use crate::RuntimeConfig;

/// The process-wide runtime configuration, initialized on first access.
static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

/// One-time process-wide runtime setup.
///
/// [`init()`][Self::init] is expected to run exactly once at process start, before any
/// concurrent work is scheduled. It detects the hardware topology, configures the runtime's
/// parallelism ceiling to the detected processor count and records the result in the
/// process-wide [`RuntimeConfig`], readable by any caller thereafter.
///
/// The transition fires exactly once. Later calls (and [`cpu_count()`][Self::cpu_count])
/// observe the configuration recorded by the first call - the value never changes for the
/// remaining lifetime of the process.
///
/// # Example
///
/// ```
/// use amp_runtime::Runtime;
///
/// let config = Runtime::init();
///
/// // From here on, every reader sees the same value.
/// assert_eq!(Runtime::cpu_count(), config.cpu_count());
/// ```
#[derive(Debug)]
pub struct Runtime {
    _no_ctor: PhantomData<()>,
}

impl Runtime {
    /// Performs one-time process-wide setup and returns the resulting configuration.
    ///
    /// Always succeeds. If the hardware topology cannot be determined, the runtime falls back
    /// to a single-threaded configuration instead of failing.
    pub fn init() -> &'static RuntimeConfig {
        RUNTIME_CONFIG.get_or_init(RuntimeConfig::detect)
    }

    /// The number of logical processors the runtime is configured to use.
    ///
    /// Initializes the runtime on first access if [`init()`][Self::init] has not run yet.
    #[must_use]
    pub fn cpu_count() -> NonZero<usize> {
        Self::init().cpu_count()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot call platform APIs.
    fn init_is_write_once() {
        let first = Runtime::init();
        let second = Runtime::init();

        // Both references must point at the same process-wide value.
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot call platform APIs.
    fn cpu_count_matches_recorded_config() {
        let config = Runtime::init();

        assert_eq!(Runtime::cpu_count(), config.cpu_count());
        assert!(Runtime::cpu_count().get() >= 1);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot call platform APIs.
    fn concurrent_readers_observe_one_value() {
        // Readers racing with initialization must all observe the same configuration.
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| Runtime::cpu_count()))
            .collect();

        let counts: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().expect("reader thread panicked"))
            .collect();

        assert!(counts.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
