//! Fake hardware topology for testing.
//!
//! This module simulates hardware topologies so that code depending on processor counts can be
//! tested deterministically, including the case where the host cannot report a count at all.
//!
//! Only available when the `test-util` feature is enabled.
//!
//! # Basic usage
//!
//! ```
//! use amp_runtime::{RuntimeConfig, TopologyDetector};
//! use amp_runtime::fake::TopologyBuilder;
//! use new_zealand::nz;
//!
//! let detector = TopologyDetector::fake(TopologyBuilder::from_count(nz!(4)));
//! let config = RuntimeConfig::detect_with(&detector);
//!
//! assert_eq!(config.cpu_count(), nz!(4));
//! ```
//!
//! # Simulating an undetectable topology
//!
//! ```
//! use amp_runtime::{RuntimeConfig, TopologyDetector};
//! use amp_runtime::fake::TopologyBuilder;
//! use new_zealand::nz;
//!
//! let detector = TopologyDetector::fake(TopologyBuilder::undetectable());
//! let config = RuntimeConfig::detect_with(&detector);
//!
//! // Detection degrades to a single-processor configuration instead of failing.
//! assert_eq!(config.cpu_count(), nz!(1));
//! ```
//!
//! # Designing testable code
//!
//! To make your code testable with fake topologies, accept a
//! [`TopologyDetector`][crate::TopologyDetector] or a [`RuntimeConfig`][crate::RuntimeConfig]
//! as a value instead of always calling [`Runtime::init()`][crate::Runtime::init]. This allows
//! tests to substitute fake hardware while production code uses the real thing.

use std::num::NonZero;

use crate::pal::Platform;

/// Describes a fake hardware topology for
/// [`TopologyDetector::fake()`][crate::TopologyDetector::fake].
///
/// Each fake topology is independent, so multiple fakes can coexist in parallel tests
/// without interference.
#[derive(Clone, Debug)]
pub struct TopologyBuilder {
    processor_count: Option<NonZero<usize>>,
}

impl TopologyBuilder {
    /// A fake topology on which the host reports the given number of logical processors.
    #[must_use]
    pub fn from_count(processor_count: NonZero<usize>) -> Self {
        Self {
            processor_count: Some(processor_count),
        }
    }

    /// A fake topology on which the host cannot report a processor count.
    ///
    /// Detection over such a topology degrades to a count of one.
    #[must_use]
    pub fn undetectable() -> Self {
        Self {
            processor_count: None,
        }
    }

    pub(crate) fn build_processor_count(&self) -> Option<NonZero<usize>> {
        self.processor_count
    }
}

/// Fake platform backend that reports whatever topology it was built from.
#[derive(Debug)]
pub(crate) struct FakePlatform {
    processor_count: Option<NonZero<usize>>,
}

impl FakePlatform {
    pub(crate) fn from_builder(builder: &TopologyBuilder) -> Self {
        Self {
            processor_count: builder.build_processor_count(),
        }
    }
}

impl Platform for FakePlatform {
    fn processor_count(&self) -> Option<NonZero<usize>> {
        self.processor_count
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use new_zealand::nz;

    use super::*;

    #[test]
    fn builder_passes_count_through() {
        let platform = FakePlatform::from_builder(&TopologyBuilder::from_count(nz!(32)));

        assert_eq!(platform.processor_count(), NonZero::new(32));
    }

    #[test]
    fn undetectable_builder_reports_nothing() {
        let platform = FakePlatform::from_builder(&TopologyBuilder::undetectable());

        assert_eq!(platform.processor_count(), None);
    }
}
