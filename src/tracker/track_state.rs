/// Track lifecycle state, derived from the tracker's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// No track; the next valid detection starts one
    #[default]
    Uninitialized,
    /// Corrected by a gated detection this frame
    Tracking,
    /// Running on predictions while detections are missing
    Coasting,
}
