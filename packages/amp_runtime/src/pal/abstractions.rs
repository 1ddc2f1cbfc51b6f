use std::fmt::Debug;
use std::num::NonZero;

/// The single seam between topology detection and the operating system.
///
/// All platform queries must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// The number of logical processors available to the current process, or `None` if the
    /// host cannot report it.
    ///
    /// Absence of information is not an error here; the caller decides how to degrade.
    fn processor_count(&self) -> Option<NonZero<usize>>;
}
