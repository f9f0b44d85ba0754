//! Conditional logging macros.
//!
//! With the `tracing` feature these are the `tracing` macros, so generation
//! and render events reach whatever subscriber the host installed. Without
//! it they expand to nothing and the arguments are never evaluated.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
