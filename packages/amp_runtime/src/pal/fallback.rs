use std::num::NonZero;

use crate::pal::Platform;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform::new();

/// Fallback platform implementation for operating systems without native support.
///
/// This implementation provides graceful degradation by using
/// `std::thread::available_parallelism()` to determine the processor count. It allows code to
/// compile and run on any platform, though without respecting platform-specific constraint
/// mechanisms the standard library does not know about.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl BuildTargetPlatform {
    pub(crate) const fn new() -> Self {
        Self
    }
}

impl Platform for BuildTargetPlatform {
    #[cfg_attr(test, mutants::skip)] // Trivial layer over the standard library.
    fn processor_count(&self) -> Option<NonZero<usize>> {
        std::thread::available_parallelism().ok()
    }
}
