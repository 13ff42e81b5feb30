//! Plausibility gates applied to a candidate before it may correct the
//! motion filter.
//!
//! All checks are pure functions over explicit arguments; none of them
//! touches tracker or filter state. The tracker evaluates the applicable
//! subset before every correction attempt and silently coasts when a
//! candidate fails.

use crate::tracker::ball_tracker::TrackerConfig;
use crate::tracker::rect::Point;

/// Missed-frame count at which the velocity gate stops applying: after a
/// long gap the prediction itself is unreliable and must not veto a
/// re-acquisition.
pub(crate) const VELOCITY_GATE_SKIP_FRAMES: u32 = 15;

/// Consecutive good detections after which the velocity gate tightens.
const ESTABLISHED_TRACK_DETECTIONS: u32 = 20;

/// Allowed ratio between consecutive object sizes; jumps outside this
/// window usually mean a near/far object confusion.
const SIZE_RATIO_MIN: f32 = 0.2;
const SIZE_RATIO_MAX: f32 = 5.0;

/// Object size within the configured [min, max] window, bounds inclusive.
#[inline]
pub fn size_valid(config: &TrackerConfig, size: f32) -> bool {
    size >= config.min_ball_size && size <= config.max_ball_size
}

/// Width/height ratio within the configured window, bounds inclusive.
#[inline]
pub fn aspect_ratio_valid(config: &TrackerConfig, width: f32, height: f32) -> bool {
    let aspect_ratio = width / height;
    aspect_ratio >= config.min_aspect_ratio && aspect_ratio <= config.max_aspect_ratio
}

/// New size within a plausible ratio of the previously accepted size.
/// Trivially true until a size has been recorded.
#[inline]
pub fn size_consistent(new_size: f32, last_size: f32) -> bool {
    if last_size > 0.0 {
        let ratio = new_size / last_size;
        ratio >= SIZE_RATIO_MIN && ratio <= SIZE_RATIO_MAX
    } else {
        true
    }
}

/// Candidate displacement from the prediction within the per-frame
/// velocity bound: `max_velocity * 2.0`, tightened to `* 1.2` once the
/// track has more than 20 consecutive good detections.
pub fn velocity_valid(
    new_point: Point,
    predicted: Point,
    consecutive_good_detections: u32,
    max_velocity: f32,
) -> bool {
    let distance = new_point.distance_to(predicted);

    let max_allowed = if consecutive_good_detections > ESTABLISHED_TRACK_DETECTIONS {
        max_velocity * 1.2
    } else {
        max_velocity * 2.0
    };

    distance < max_allowed
}
