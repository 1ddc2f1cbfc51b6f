use std::num::NonZero;

use crate::pal::Platform;

mod bindings;

use bindings::{Bindings, BindingsFacade};
#[cfg(test)]
pub(crate) use bindings::MockBindings;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform =
    BuildTargetPlatform::new(BindingsFacade::target());

/// The platform that matches the crate's build target (Linux).
///
/// The processor count is the number of set bits in the process affinity mask, so constraints
/// applied via `taskset`, cpusets or container runtimes are respected. If the affinity mask
/// cannot be read, we consult `std::thread::available_parallelism()` before giving up.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    bindings: BindingsFacade,
}

impl BuildTargetPlatform {
    pub(crate) const fn new(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }

    fn affinity_mask_processor_count(&self) -> Option<NonZero<usize>> {
        let cpuset = self.bindings.sched_getaffinity_current().ok()?;

        // SAFETY: `cpuset` is a valid, initialized cpu_set_t obtained from the bindings.
        let count = usize::try_from(unsafe { libc::CPU_COUNT(&cpuset) }).ok()?;
        NonZero::new(count)
    }
}

impl Platform for BuildTargetPlatform {
    fn processor_count(&self) -> Option<NonZero<usize>> {
        self.affinity_mask_processor_count()
            .or_else(|| std::thread::available_parallelism().ok())
    }
}
