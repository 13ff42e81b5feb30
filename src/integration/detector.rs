//! Trait for object detection inference backends.

use crate::tracker::Candidate;

/// Trait for object detection inference backends.
///
/// Implement this trait to feed any detection model into the tracker.
/// Implementations own their confidence thresholding and non-maximum
/// suppression; the candidates they return are expected to be already
/// deduplicated.
///
/// # Example
///
/// ```ignore
/// use balltrack_rs::{Detector, Candidate};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl Detector for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<Candidate>, Self::Error> {
///         // Run inference and return candidates
///         Ok(vec![])
///     }
/// }
/// ```
pub trait Detector {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return candidates.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Candidate>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `Candidate`.
pub trait IntoCandidates {
    /// Convert the output into a vector of candidates.
    fn into_candidates(self) -> Vec<Candidate>;
}

impl IntoCandidates for Vec<Candidate> {
    fn into_candidates(self) -> Vec<Candidate> {
        self
    }
}
