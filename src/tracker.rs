mod ball_tracker;
mod gating;
mod kalman_filter;
mod rect;
mod selection;
mod track_state;
mod trajectory;

pub use ball_tracker::{BallTracker, TrackerConfig};
pub use gating::{aspect_ratio_valid, size_consistent, size_valid, velocity_valid};
pub use kalman_filter::MotionFilter;
pub use rect::{BoundingBox, Point};
pub use selection::{Candidate, select_candidate};
pub use track_state::TrackState;
pub use trajectory::Trajectory;
