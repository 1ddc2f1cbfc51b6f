#[cfg(any(test, feature = "test-util"))]
use std::borrow::Borrow;
use std::num::NonZero;

use new_zealand::nz;

#[cfg(any(test, feature = "test-util"))]
use crate::fake::{FakePlatform, TopologyBuilder};
use crate::pal::{Platform, PlatformFacade};

/// Determines how many logical processors are available to the current process.
///
/// This is the leaf component of runtime initialization: it has no side effects and cannot
/// fail. If the host cannot report a processor count, detection degrades to a count of one
/// instead of signaling an error, because the initializer calling this has no recovery path
/// for that condition.
///
/// # Example
///
/// ```
/// use amp_runtime::TopologyDetector;
///
/// let detector = TopologyDetector::new();
/// let cpu_count = detector.detect_cpu_count();
/// println!("This process may use {cpu_count} logical processors");
/// ```
#[derive(Clone, Debug)]
pub struct TopologyDetector {
    platform: PlatformFacade,
}

impl TopologyDetector {
    /// Creates a detector that queries the real hardware of the build target platform.
    #[must_use]
    pub fn new() -> Self {
        Self::from_platform(PlatformFacade::target())
    }

    /// Creates a detector over a fake hardware topology.
    ///
    /// This method is only available when the `test-util` feature is enabled. It allows
    /// testing code under simulated topologies without requiring the actual hardware.
    ///
    /// # Example
    ///
    /// ```
    /// use amp_runtime::TopologyDetector;
    /// use amp_runtime::fake::TopologyBuilder;
    /// use new_zealand::nz;
    ///
    /// let detector = TopologyDetector::fake(TopologyBuilder::from_count(nz!(4)));
    /// assert_eq!(detector.detect_cpu_count(), nz!(4));
    /// ```
    #[cfg(any(test, feature = "test-util"))]
    #[must_use]
    pub fn fake(builder: impl Borrow<TopologyBuilder>) -> Self {
        let platform = FakePlatform::from_builder(builder.borrow());
        Self::from_platform(PlatformFacade::from_fake(platform))
    }

    pub(crate) fn from_platform(platform: PlatformFacade) -> Self {
        Self { platform }
    }

    /// The number of logical processors available to the current process.
    ///
    /// Returns the host-reported count, or a conservative fallback of one if the host cannot
    /// report it. Never fails and never returns zero.
    #[must_use]
    pub fn detect_cpu_count(&self) -> NonZero<usize> {
        self.platform.processor_count().unwrap_or(nz!(1))
    }
}

impl Default for TopologyDetector {
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::pal::MockPlatform;
    use crate::pal::fallback::BUILD_TARGET_PLATFORM as FALLBACK_PLATFORM;

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot call platform APIs.
    fn real_hardware_has_at_least_one_processor() {
        let detector = TopologyDetector::new();

        assert!(detector.detect_cpu_count().get() >= 1);
    }

    #[test]
    fn reports_platform_count_verbatim() {
        let mut platform = MockPlatform::new();
        platform
            .expect_processor_count()
            .times(1)
            .returning(|| NonZero::new(16));

        let detector = TopologyDetector::from_platform(PlatformFacade::from_mock(platform));

        assert_eq!(detector.detect_cpu_count(), nz!(16));
    }

    #[test]
    fn degrades_to_one_when_host_cannot_report() {
        let mut platform = MockPlatform::new();
        platform
            .expect_processor_count()
            .times(1)
            .returning(|| None);

        let detector = TopologyDetector::from_platform(PlatformFacade::from_mock(platform));

        assert_eq!(detector.detect_cpu_count(), nz!(1));
    }

    #[test]
    fn fallback_platform_has_at_least_one_processor() {
        let detector =
            TopologyDetector::from_platform(PlatformFacade::Fallback(&FALLBACK_PLATFORM));

        assert!(detector.detect_cpu_count().get() >= 1);
    }

    #[test]
    fn fake_topology_reports_configured_count() {
        let detector = TopologyDetector::fake(TopologyBuilder::from_count(nz!(4)));

        assert_eq!(detector.detect_cpu_count(), nz!(4));
    }

    #[test]
    fn undetectable_fake_topology_degrades_to_one() {
        let detector = TopologyDetector::fake(TopologyBuilder::undetectable());

        assert_eq!(detector.detect_cpu_count(), nz!(1));
    }
}
