//! Builder for creating Candidate objects from various input formats.

use crate::tracker::{BoundingBox, Candidate};

/// Builder for creating `Candidate` objects from various box formats.
#[derive(Debug, Clone, Default)]
pub struct CandidateBuilder {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    class_id: i32,
    confidence: f32,
}

impl CandidateBuilder {
    /// Create a new candidate builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLWH format (top-left x, top-left y, width, height).
    pub fn tlwh(mut self, x: i32, y: i32, width: i32, height: i32) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Set bounding box in TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    pub fn tlbr(mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        self.x = x1;
        self.y = y1;
        self.width = x2 - x1;
        self.height = y2 - y1;
        self
    }

    /// Set bounding box in XYWH format (center x, center y, width, height).
    pub fn xywh(mut self, cx: i32, cy: i32, w: i32, h: i32) -> Self {
        self.x = cx - w / 2;
        self.y = cy - h / 2;
        self.width = w;
        self.height = h;
        self
    }

    /// Set the detector class id.
    pub fn class_id(mut self, class_id: i32) -> Self {
        self.class_id = class_id;
        self
    }

    /// Set the confidence score.
    pub fn confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Build the final `Candidate`.
    pub fn build(self) -> Candidate {
        Candidate::new(
            self.class_id,
            self.confidence,
            BoundingBox::new(self.x, self.y, self.width, self.height),
        )
    }
}
