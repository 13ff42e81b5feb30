//! Integration module for connecting object detection backends with the
//! ball tracker.
//!
//! Provides the detector capability trait, a candidate builder for the
//! common box formats, and a pipeline running the full per-frame loop.

mod builder;
mod detector;
mod pipeline;

pub use builder::CandidateBuilder;
pub use detector::{Detector, IntoCandidates};
pub use pipeline::{FrameReport, TrackingPipeline};
