//! Bounded position history for the tracked object.

use std::collections::VecDeque;
use std::fmt;

use crate::error::Error;
use crate::tracker::rect::Point;

/// Default number of retained trajectory points.
pub const DEFAULT_CAPACITY: usize = 50;

/// Fixed-capacity FIFO of accepted/estimated positions, newest last.
///
/// Appending at capacity evicts the oldest point. The capacity is set at
/// construction and survives `clear`.
#[derive(Clone)]
pub struct Trajectory {
    points: VecDeque<Point>,
    capacity: usize,
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl fmt::Debug for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trajectory[{} points]", self.len())
    }
}

impl Trajectory {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, evicting the oldest one when at capacity.
    pub fn append(&mut self, point: Point) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Random access by index, oldest first.
    pub fn at(&self, index: usize) -> Result<Point, Error> {
        self.points.get(index).copied().ok_or(Error::IndexOutOfRange {
            index,
            len: self.points.len(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.back().copied()
    }

    /// Forward iterator over the current contents, oldest first.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'_ Point> {
        self.points.iter()
    }

    /// Remove all points; capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point;
    type IntoIter = std::collections::vec_deque::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_access() {
        let mut traj = Trajectory::with_capacity(10);
        assert!(traj.is_empty());

        traj.append(Point::new(1.0, 2.0));
        traj.append(Point::new(3.0, 4.0));

        assert_eq!(traj.len(), 2);
        assert_eq!(traj.at(0).unwrap(), Point::new(1.0, 2.0));
        assert_eq!(traj.at(1).unwrap(), Point::new(3.0, 4.0));
        assert_eq!(traj.last(), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_out_of_range() {
        let mut traj = Trajectory::with_capacity(10);
        traj.append(Point::new(1.0, 1.0));

        assert_eq!(
            traj.at(1),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_eviction_keeps_last_capacity_points() {
        let capacity = 5;
        let mut traj = Trajectory::with_capacity(capacity);

        for i in 0..12 {
            traj.append(Point::new(i as f32, 0.0));
        }

        assert_eq!(traj.len(), capacity);
        // Contents are the last `capacity` appended points, in order.
        for (idx, point) in traj.iter().enumerate() {
            assert_eq!(point.x, (12 - capacity + idx) as f32);
        }
    }

    #[test]
    fn test_clear_preserves_capacity() {
        let mut traj = Trajectory::with_capacity(3);
        traj.append(Point::new(1.0, 1.0));
        traj.clear();

        assert!(traj.is_empty());
        assert_eq!(traj.capacity(), 3);
    }
}
