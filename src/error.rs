use thiserror::Error;

/// Errors produced by this crate.
///
/// The tracking core is deliberately error-light: uninitialized calls
/// return sentinel points and gating rejections are silent policy
/// outcomes. Out-of-range trajectory indexing is the one hard failure,
/// since it indicates a caller bug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("trajectory index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
