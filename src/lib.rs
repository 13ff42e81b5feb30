//! Single-object ball tracking for video streams.
//!
//! Fuses noisy per-frame detector candidates with a constant-velocity
//! Kalman filter, producing a smoothed position estimate and a bounded
//! trajectory history. The tracker decides frame by frame whether a
//! candidate is plausibly the same object, coasts on predictions through
//! short detection gaps, and re-acquires after losing the track.

pub mod error;
pub mod integration;
pub mod tracker;

pub use error::Error;
pub use integration::{CandidateBuilder, Detector, FrameReport, IntoCandidates, TrackingPipeline};
pub use tracker::{
    BallTracker, BoundingBox, Candidate, MotionFilter, Point, TrackState, TrackerConfig,
    Trajectory, select_candidate,
};
