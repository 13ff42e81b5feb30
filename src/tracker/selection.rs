//! Per-frame detector candidates and the best-candidate selection policy.

use crate::tracker::ball_tracker::TrackerConfig;
use crate::tracker::gating;
use crate::tracker::rect::{BoundingBox, Point};

/// One detector output for one frame: produced fresh every frame, never
/// mutated, discarded after the frame's association decision.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Detector class id
    pub class_id: i32,
    /// Detection confidence in [0, 1]
    pub confidence: f32,
    /// Axis-aligned box in pixel coordinates
    pub bbox: BoundingBox,
    /// Center point derived from the box
    pub center: Point,
}

impl Candidate {
    pub fn new(class_id: i32, confidence: f32, bbox: BoundingBox) -> Self {
        Self {
            class_id,
            confidence,
            bbox,
            center: bbox.center(),
        }
    }

    /// Scalar object size used by the gating checks.
    #[inline]
    pub fn size(&self) -> f32 {
        self.bbox.size()
    }
}

/// Radius multiplier restricting the search around the predicted point
/// while the track is active.
const SEARCH_RADIUS_FACTOR: f32 = 4.0;

/// Select at most one candidate for this frame.
///
/// While the track is active, only candidates within
/// `max_velocity * 4.0` of the predicted point are considered and the
/// one maximizing `confidence * 100 - distance * 0.5` wins, so a nearby
/// mid-confidence detection beats a distant high-confidence one. While
/// the track is inactive the highest-confidence candidate wins outright.
///
/// Candidates failing the size or aspect-ratio prefilters are never
/// eligible. Pure function; the caller owns all tracker state.
pub fn select_candidate<'a>(
    candidates: &'a [Candidate],
    predicted: Point,
    track_active: bool,
    config: &TrackerConfig,
) -> Option<&'a Candidate> {
    let mut best: Option<&Candidate> = None;
    let mut best_confidence = 0.0f32;
    let mut best_distance = f32::MAX;

    for candidate in candidates {
        if !gating::aspect_ratio_valid(
            config,
            candidate.bbox.width as f32,
            candidate.bbox.height as f32,
        ) {
            continue;
        }
        if !gating::size_valid(config, candidate.size()) {
            continue;
        }

        if track_active {
            let distance = candidate.center.distance_to(predicted);
            let max_search_radius = config.max_velocity * SEARCH_RADIUS_FACTOR;

            if distance < max_search_radius {
                let score = candidate.confidence * 100.0 - distance * 0.5;
                let current_best = best_confidence * 100.0 - best_distance * 0.5;

                if score > current_best {
                    best_distance = distance;
                    best_confidence = candidate.confidence;
                    best = Some(candidate);
                }
            }
        } else if candidate.confidence > best_confidence {
            best_confidence = candidate.confidence;
            best = Some(candidate);
        }
    }

    best
}
