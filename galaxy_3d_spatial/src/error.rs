//! Error types for the Galaxy3D spatial index
//!
//! Construction of an octree is the only fallible operation. Every other
//! operation degrades to a no-op (see `Octree::remove`).

use std::fmt;

/// Result type for Galaxy3D spatial operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D spatial errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// World bounds are not usable (non-finite, or min > max on some axis)
    InvalidBounds(String),

    /// Octree configuration is not usable (zero capacity, etc.)
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBounds(msg) => write!(f, "Invalid bounds: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and return early with the given error variant
///
/// # Example
///
/// ```ignore
/// spatial_bail!("galaxy3d::Octree", InvalidConfig, "capacity must be >= 1, got {}", n);
/// ```
#[macro_export]
macro_rules! spatial_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::spatial_error!($source, "{}", message);
        return Err($crate::galaxy3d::Error::$variant(message));
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
