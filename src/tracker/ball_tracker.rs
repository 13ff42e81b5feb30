//! The per-frame ball tracking state machine.

use log::{debug, trace};

use crate::tracker::gating;
use crate::tracker::kalman_filter::MotionFilter;
use crate::tracker::rect::Point;
use crate::tracker::track_state::TrackState;
use crate::tracker::trajectory::Trajectory;

/// Tracking thresholds, immutable after construction.
///
/// Validity of the thresholds themselves (e.g. max >= min) is the
/// caller's responsibility.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Max plausible displacement per frame, in pixels
    pub max_velocity: f32,
    /// Smallest accepted object size ((width + height) / 2)
    pub min_ball_size: f32,
    /// Largest accepted object size
    pub max_ball_size: f32,
    /// Smallest accepted width/height ratio
    pub min_aspect_ratio: f32,
    /// Largest accepted width/height ratio
    pub max_aspect_ratio: f32,
    /// Consecutive missed frames tolerated before the track is dropped
    pub max_frames_without_detection: u32,
    /// Trajectory history capacity
    pub max_trajectory_length: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_velocity: 70.0,
            min_ball_size: 5.0,
            max_ball_size: 120.0,
            min_aspect_ratio: 0.3,
            max_aspect_ratio: 3.0,
            max_frames_without_detection: 40,
            max_trajectory_length: 50,
        }
    }
}

/// Missed-frame count beyond which a coasting track starts losing
/// accumulated confidence.
const CONFIDENCE_DECAY_AFTER_FRAMES: u32 = 10;

/// Confidence floor below which coasting no longer decays the counter.
const CONFIDENCE_DECAY_FLOOR: u32 = 5;

/// Single-object tracker: a constant-velocity motion filter plus a
/// bounded trajectory, driven by one measurement (or none) per frame.
///
/// Lifecycle: uninitialized until `init` (or the first `update`), then
/// active while gated detections keep arriving; missed frames advance it
/// through coasting until `max_frames_without_detection` is exceeded,
/// at which point the next coast step resets it back to uninitialized.
#[derive(Debug, Clone)]
pub struct BallTracker {
    filter: MotionFilter,
    trajectory: Trajectory,
    initialized: bool,
    frames_without_detection: u32,
    last_position: Point,
    last_size: f32,
    consecutive_good_detections: u32,
    total_detections: u64,
    config: TrackerConfig,
}

impl BallTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            filter: MotionFilter::new(),
            trajectory: Trajectory::with_capacity(config.max_trajectory_length),
            initialized: false,
            frames_without_detection: 0,
            last_position: Point::invalid(),
            last_size: 0.0,
            consecutive_good_detections: 0,
            total_detections: 0,
            config,
        }
    }

    /// Start a track at the given position and size, from any state.
    pub fn init(&mut self, point: Point, size: f32) {
        debug!("track init at ({:.1}, {:.1}), size {:.1}", point.x, point.y, size);

        self.filter.initialize(point);
        self.initialized = true;
        self.frames_without_detection = 0;
        self.last_position = point;
        self.last_size = size;
        self.consecutive_good_detections = 1;
        self.total_detections = 1;

        self.trajectory = Trajectory::with_capacity(self.config.max_trajectory_length);
        self.trajectory.append(point);
    }

    /// Advance the motion filter and return the predicted position.
    /// Returns the invalid-point sentinel while uninitialized, with no
    /// state change.
    pub fn predict(&mut self) -> Point {
        if !self.initialized {
            return Point::invalid();
        }
        self.filter.predict()
    }

    /// Feed one measurement for this frame.
    ///
    /// An uninitialized tracker treats this as `init`. Otherwise the
    /// candidate runs through gating against the filter's prediction:
    /// on pass the filter is corrected and the corrected point recorded;
    /// on failure the candidate is silently discarded and this frame
    /// becomes a coast step, exactly as if no measurement had arrived.
    pub fn update(&mut self, measurement: Point, size: f32) -> Point {
        if !self.initialized {
            self.init(measurement, size);
            return measurement;
        }

        let predicted = self.filter.predict();

        if !self.is_admissible(measurement, size, predicted) {
            trace!(
                "rejected candidate at ({:.1}, {:.1}), size {:.1}",
                measurement.x, measurement.y, size
            );
            return self.coast(predicted);
        }

        let corrected = self.filter.correct(measurement);

        self.trajectory.append(corrected);
        self.frames_without_detection = 0;
        self.consecutive_good_detections += 1;
        self.total_detections += 1;
        self.last_position = corrected;
        self.last_size = size;

        corrected
    }

    /// Advance one frame with no measurement: predict, record the
    /// prediction while the track is still within its missed-frame
    /// budget, reset once the budget is exceeded. Always returns the
    /// prediction (the sentinel while uninitialized).
    pub fn update_without_measurement(&mut self) -> Point {
        if !self.initialized {
            return Point::invalid();
        }

        let predicted = self.filter.predict();
        self.coast(predicted)
    }

    /// Shared coast step for missed frames and rejected candidates.
    fn coast(&mut self, predicted: Point) -> Point {
        self.frames_without_detection += 1;

        if self.consecutive_good_detections > CONFIDENCE_DECAY_FLOOR
            && self.frames_without_detection > CONFIDENCE_DECAY_AFTER_FRAMES
        {
            self.consecutive_good_detections -= 1;
        }

        if self.frames_without_detection <= self.config.max_frames_without_detection {
            self.trajectory.append(predicted);
            self.last_position = predicted;
        } else {
            debug!(
                "track lost after {} missed frames, resetting",
                self.frames_without_detection
            );
            self.reset();
        }

        predicted
    }

    /// Gating for one candidate, using the already-computed prediction.
    fn is_admissible(&self, measurement: Point, size: f32, predicted: Point) -> bool {
        if !gating::size_valid(&self.config, size) {
            return false;
        }

        if !gating::size_consistent(size, self.last_size) {
            return false;
        }

        // After a long gap the prediction is unreliable and must not
        // veto a re-acquisition.
        if self.frames_without_detection < gating::VELOCITY_GATE_SKIP_FRAMES
            && !gating::velocity_valid(
                measurement,
                predicted,
                self.consecutive_good_detections,
                self.config.max_velocity,
            )
        {
            return false;
        }

        true
    }

    /// Drop the track and clear all state back to uninitialized. The
    /// trajectory is replaced by an empty one of the same capacity.
    pub fn reset(&mut self) {
        self.initialized = false;
        self.frames_without_detection = 0;
        self.consecutive_good_detections = 0;
        self.total_detections = 0;
        self.last_position = Point::invalid();
        self.last_size = 0.0;
        self.trajectory = Trajectory::with_capacity(self.config.max_trajectory_length);
    }

    /// Whether the track is live: initialized and within its
    /// missed-frame budget.
    pub fn is_active(&self) -> bool {
        self.initialized
            && self.frames_without_detection <= self.config.max_frames_without_detection
    }

    /// Whether the track has ever received a detection.
    ///
    /// Deliberately weak; `consecutive_good_detections` carries the
    /// richer stability signal when callers need one.
    pub fn is_stable(&self) -> bool {
        self.total_detections >= 1
    }

    pub fn state(&self) -> TrackState {
        if !self.initialized {
            TrackState::Uninitialized
        } else if self.frames_without_detection == 0 {
            TrackState::Tracking
        } else if self.frames_without_detection <= self.config.max_frames_without_detection {
            TrackState::Coasting
        } else {
            TrackState::Uninitialized
        }
    }

    #[inline]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    #[inline]
    pub fn last_position(&self) -> Point {
        self.last_position
    }

    #[inline]
    pub fn total_detections(&self) -> u64 {
        self.total_detections
    }

    #[inline]
    pub fn frames_without_detection(&self) -> u32 {
        self.frames_without_detection
    }

    #[inline]
    pub fn consecutive_good_detections(&self) -> u32 {
        self.consecutive_good_detections
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_activates_track() {
        let mut tracker = BallTracker::new(TrackerConfig::default());
        assert!(!tracker.is_active());
        assert!(!tracker.is_stable());
        assert_eq!(tracker.total_detections(), 0);

        tracker.init(Point::new(100.0, 200.0), 20.0);

        assert!(tracker.is_active());
        assert!(tracker.is_stable());
        assert_eq!(tracker.total_detections(), 1);
        assert_eq!(tracker.trajectory().len(), 1);
        assert_eq!(tracker.last_position(), Point::new(100.0, 200.0));
        assert_eq!(tracker.state(), TrackState::Tracking);
    }

    #[test]
    fn test_update_before_init_behaves_as_init() {
        let mut tracker = BallTracker::new(TrackerConfig::default());
        let returned = tracker.update(Point::new(50.0, 60.0), 15.0);

        assert_eq!(returned, Point::new(50.0, 60.0));
        assert!(tracker.is_active());
        assert_eq!(tracker.total_detections(), 1);
    }

    #[test]
    fn test_predict_before_init_is_sentinel() {
        let mut tracker = BallTracker::new(TrackerConfig::default());
        assert!(!tracker.predict().is_valid());
        assert!(!tracker.update_without_measurement().is_valid());
        assert_eq!(tracker.state(), TrackState::Uninitialized);
    }

    #[test]
    fn test_active_at_budget_boundary() {
        let config = TrackerConfig {
            max_frames_without_detection: 3,
            ..TrackerConfig::default()
        };
        let mut tracker = BallTracker::new(config);
        tracker.init(Point::new(100.0, 100.0), 20.0);

        for _ in 0..3 {
            tracker.update_without_measurement();
        }
        // Exactly at the budget: still active, coasting.
        assert_eq!(tracker.frames_without_detection(), 3);
        assert!(tracker.is_active());
        assert_eq!(tracker.state(), TrackState::Coasting);

        // One more coast step exceeds the budget and auto-resets.
        tracker.update_without_measurement();
        assert!(!tracker.is_active());
        assert_eq!(tracker.total_detections(), 0);
        assert_eq!(tracker.state(), TrackState::Uninitialized);
    }

    #[test]
    fn test_confidence_decay_while_coasting() {
        let config = TrackerConfig {
            max_frames_without_detection: 40,
            ..TrackerConfig::default()
        };
        let mut tracker = BallTracker::new(config);
        tracker.init(Point::new(100.0, 100.0), 20.0);

        // Build up confidence with stationary detections.
        for _ in 0..9 {
            tracker.update(Point::new(100.0, 100.0), 20.0);
        }
        assert_eq!(tracker.consecutive_good_detections(), 10);

        // First 10 missed frames do not decay; afterwards one per frame.
        for _ in 0..10 {
            tracker.update_without_measurement();
        }
        assert_eq!(tracker.consecutive_good_detections(), 10);

        for _ in 0..3 {
            tracker.update_without_measurement();
        }
        assert_eq!(tracker.consecutive_good_detections(), 7);
    }

    #[test]
    fn test_reset_round_trip() {
        let mut tracker = BallTracker::new(TrackerConfig::default());
        tracker.init(Point::new(100.0, 100.0), 20.0);
        tracker.update(Point::new(105.0, 102.0), 21.0);
        tracker.update_without_measurement();

        tracker.reset();

        assert!(!tracker.is_active());
        assert!(!tracker.is_stable());
        assert_eq!(tracker.total_detections(), 0);
        assert_eq!(tracker.frames_without_detection(), 0);
        assert_eq!(tracker.consecutive_good_detections(), 0);
        assert!(tracker.trajectory().is_empty());
        assert_eq!(
            tracker.trajectory().capacity(),
            tracker.config().max_trajectory_length
        );
        assert!(!tracker.last_position().is_valid());
    }

    #[test]
    fn test_size_jump_is_rejected() {
        let mut tracker = BallTracker::new(TrackerConfig::default());
        tracker.init(Point::new(100.0, 100.0), 20.0);

        // Ratio 110/20 = 5.5 > 5.0: rejected, becomes a coast step.
        tracker.update(Point::new(101.0, 100.0), 110.0);

        assert_eq!(tracker.total_detections(), 1);
        assert_eq!(tracker.frames_without_detection(), 1);
    }

    #[test]
    fn test_velocity_gate_skipped_after_long_gap() {
        let config = TrackerConfig {
            max_velocity: 10.0,
            max_frames_without_detection: 40,
            ..TrackerConfig::default()
        };
        let mut tracker = BallTracker::new(config);
        tracker.init(Point::new(100.0, 100.0), 20.0);

        for _ in 0..15 {
            tracker.update_without_measurement();
        }
        assert_eq!(tracker.frames_without_detection(), 15);

        // Far beyond max_velocity * 2, but the gap disables the gate.
        let corrected = tracker.update(Point::new(500.0, 500.0), 20.0);

        assert_eq!(tracker.total_detections(), 2);
        assert_eq!(tracker.frames_without_detection(), 0);
        assert!(corrected.is_valid());
    }
}
