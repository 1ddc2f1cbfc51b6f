//! Platform Abstraction Layer (PAL). This is private API - all topology queries from public
//! types must go through here so they can be exercised against mock and fake platforms.

mod abstractions;
pub(crate) use abstractions::*;

mod facade;
pub(crate) use facade::*;

#[cfg(all(target_os = "linux", not(miri)))]
mod linux;
#[cfg(all(target_os = "linux", not(miri)))]
pub(crate) use linux::*;

// The fallback module is compiled in test mode on all platforms, under Miri, and as the primary
// implementation on operating systems without native support. We only glob-import it when it is
// the primary implementation; on Linux in test mode it must be accessed via the explicit path
// `fallback::` to avoid ambiguity with the platform-specific implementation.
#[cfg(any(test, miri, not(target_os = "linux")))]
pub(crate) mod fallback;

#[cfg(any(miri, not(target_os = "linux")))]
pub(crate) use fallback::*;
