//! TrackingPipeline for combining detection with single-object tracking.

use log::trace;

use crate::tracker::{BallTracker, Point, TrackerConfig, select_candidate};

use super::Detector;

/// Per-frame tracking outputs.
#[derive(Debug, Clone, Copy)]
pub struct FrameReport {
    /// Corrected position when a candidate was accepted, otherwise the
    /// predicted position (the invalid sentinel while no track exists)
    pub position: Point,
    /// Track liveness after this frame
    pub active: bool,
    /// Track stability after this frame
    pub stable: bool,
    /// Running count of accepted detections
    pub total_detections: u64,
    /// Number of candidates the detector produced this frame
    pub candidate_count: usize,
}

/// A combined tracker that bundles detection inference with the
/// single-ball tracker.
///
/// Runs the whole per-frame loop: predict, detect, filter to the target
/// classes, select the best candidate against the prediction, then
/// either correct the tracker or coast.
pub struct TrackingPipeline<D: Detector> {
    detector: D,
    tracker: BallTracker,
    /// Detector classes eligible for tracking; `None` accepts all.
    target_classes: Option<Vec<i32>>,
}

impl<D: Detector> TrackingPipeline<D> {
    /// Create a new tracking pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Self {
        Self {
            detector,
            tracker: BallTracker::new(config),
            target_classes: None,
        }
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self::new(detector, TrackerConfig::default())
    }

    /// Restrict tracking to candidates of the given detector classes.
    pub fn with_target_classes(mut self, classes: Vec<i32>) -> Self {
        self.target_classes = Some(classes);
        self
    }

    /// Process a single frame.
    ///
    /// Detection errors surface to the caller; everything downstream of
    /// detection (gating rejections, missing candidates) is a silent
    /// coast step.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<FrameReport, D::Error> {
        let predicted = self.tracker.predict();

        let candidates = self.detector.detect(input, width, height)?;
        let candidate_count = candidates.len();

        let eligible: Vec<_> = match &self.target_classes {
            Some(classes) => candidates
                .into_iter()
                .filter(|c| classes.contains(&c.class_id))
                .collect(),
            None => candidates,
        };

        let best = select_candidate(
            &eligible,
            predicted,
            self.tracker.is_active(),
            self.tracker.config(),
        );

        let position = match best {
            Some(candidate) => {
                trace!(
                    "selected candidate class {} conf {:.2}",
                    candidate.class_id, candidate.confidence
                );
                self.tracker.update(candidate.center, candidate.size())
            }
            None => self.tracker.update_without_measurement(),
        };

        Ok(FrameReport {
            position,
            active: self.tracker.is_active(),
            stable: self.tracker.is_stable(),
            total_detections: self.tracker.total_detections(),
            candidate_count,
        })
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &BallTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut BallTracker {
        &mut self.tracker
    }
}
