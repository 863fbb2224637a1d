// ---------------------------------------------------------------------------
// GeometryError: precondition failures in the numeric kernel
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised by kernel operations whose input cannot be processed at all.
///
/// These are fatal for the single call that produced them: nothing is built
/// and nothing is partially returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Inner and outer borders passed to mesh stitching differ in point count.
    BorderLengthMismatch { inner: usize, outer: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::BorderLengthMismatch { inner, outer } => write!(
                f,
                "Border length mismatch: outer and inner border must have equal point counts (inner {inner}, outer {outer})"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}
