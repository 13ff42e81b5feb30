//! Constant-velocity Kalman filter using ndarray and a nalgebra-based inverse.

use ndarray::{Array1, Array2};

use crate::tracker::rect::Point;

const STATE_DIM: usize = 4;
const MEAS_DIM: usize = 2;

/// Recursive position/velocity estimator over the state [x, y, vx, vy].
///
/// The transition model is constant velocity (x' = x + vx, y' = y + vy);
/// only (x, y) is observed. Noise covariances are fixed: small process
/// noise so predictions smooth a settled track, moderate measurement
/// noise so corrections dominate early.
///
/// The filter owns its mean and covariance exclusively; they are only
/// meaningful between `initialize` and the next `reset` of the owning
/// tracker. `predict` and `correct` must be called in that order within
/// one frame step.
#[derive(Debug, Clone)]
pub struct MotionFilter {
    motion_mat: Array2<f64>,
    update_mat: Array2<f64>,
    process_noise: Array2<f64>,
    measurement_noise: Array2<f64>,
    mean: Array1<f64>,
    covariance: Array2<f64>,
    initialized: bool,
}

impl Default for MotionFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionFilter {
    pub fn new() -> Self {
        let mut motion_mat = Array2::eye(STATE_DIM);
        for i in 0..MEAS_DIM {
            motion_mat[[i, MEAS_DIM + i]] = 1.0;
        }

        let mut update_mat = Array2::zeros((MEAS_DIM, STATE_DIM));
        for i in 0..MEAS_DIM {
            update_mat[[i, i]] = 1.0;
        }

        Self {
            motion_mat,
            update_mat,
            process_noise: Array2::eye(STATE_DIM) * 1e-1,
            measurement_noise: Array2::eye(MEAS_DIM) * 2e-1,
            mean: Array1::zeros(STATE_DIM),
            covariance: Array2::eye(STATE_DIM),
            initialized: false,
        }
    }

    /// Set the state to the given position with zero velocity and reset
    /// the covariance to the identity prior.
    pub fn initialize(&mut self, point: Point) {
        self.mean = Array1::zeros(STATE_DIM);
        self.mean[0] = point.x as f64;
        self.mean[1] = point.y as f64;
        self.covariance = Array2::eye(STATE_DIM);
        self.initialized = true;
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Advance the state one step by the transition model and return the
    /// predicted position. Returns the invalid-point sentinel when the
    /// filter has not been initialized.
    pub fn predict(&mut self) -> Point {
        if !self.initialized {
            return Point::invalid();
        }

        self.mean = self.motion_mat.dot(&self.mean);
        self.covariance =
            self.motion_mat.dot(&self.covariance).dot(&self.motion_mat.t()) + &self.process_noise;

        Point::new(self.mean[0] as f32, self.mean[1] as f32)
    }

    /// Apply the Kalman correction step with a 2D position observation
    /// and return the corrected position. Requires a prior `predict` in
    /// the same frame step.
    pub fn correct(&mut self, measurement: Point) -> Point {
        if !self.initialized {
            return Point::invalid();
        }

        let projected_mean = self.update_mat.dot(&self.mean);
        let projected_cov =
            self.update_mat.dot(&self.covariance).dot(&self.update_mat.t())
                + &self.measurement_noise;

        let z = Array1::from_vec(vec![measurement.x as f64, measurement.y as f64]);
        let innovation = z - projected_mean;

        // K = P * H^T * S^-1
        // Since H is [I 0], P * H^T is the first 2 columns of P (4x2).
        // S is projected_cov (2x2).

        // We use nalgebra internally for 2x2 inversion to avoid BLAS/LAPACK.
        let s_inv = invert_2x2(&projected_cov);

        let pht = self.covariance.dot(&self.update_mat.t()); // 4x2
        let kalman_gain = pht.dot(&s_inv); // 4x2

        self.mean = &self.mean + kalman_gain.dot(&innovation);
        self.covariance =
            &self.covariance - kalman_gain.dot(&projected_cov).dot(&kalman_gain.t());

        Point::new(self.mean[0] as f32, self.mean[1] as f32)
    }
}

/// Helper to invert a 2x2 matrix using nalgebra (pure Rust).
fn invert_2x2(m: &Array2<f64>) -> Array2<f64> {
    let nm = nalgebra::Matrix2::new(m[[0, 0]], m[[0, 1]], m[[1, 0]], m[[1, 1]]);
    let inv = nm.try_inverse().expect("2x2 matrix inversion failed");
    let mut res = Array2::zeros((MEAS_DIM, MEAS_DIM));
    for i in 0..MEAS_DIM {
        for j in 0..MEAS_DIM {
            res[[i, j]] = inv[(i, j)];
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_predict_is_sentinel() {
        let mut filter = MotionFilter::new();
        assert!(!filter.predict().is_valid());
        assert!(!filter.is_initialized());
    }

    #[test]
    fn test_initialize_sets_position() {
        let mut filter = MotionFilter::new();
        filter.initialize(Point::new(100.0, 200.0));

        // Zero initial velocity: first prediction stays at the position.
        let predicted = filter.predict();
        assert!((predicted.x - 100.0).abs() < 1e-4);
        assert!((predicted.y - 200.0).abs() < 1e-4);
    }

    #[test]
    fn test_correction_moves_toward_measurement() {
        let mut filter = MotionFilter::new();
        filter.initialize(Point::new(100.0, 100.0));

        filter.predict();
        let corrected = filter.correct(Point::new(110.0, 105.0));

        // With identity prior and moderate measurement noise the
        // correction lands between prediction and measurement, closer
        // to the measurement.
        assert!(corrected.x > 105.0 && corrected.x < 110.0);
        assert!(corrected.y > 102.5 && corrected.y < 105.0);
    }

    #[test]
    fn test_velocity_is_learned() {
        let mut filter = MotionFilter::new();
        filter.initialize(Point::new(100.0, 100.0));

        // Object moving +10 per frame in x.
        for i in 1..=5 {
            filter.predict();
            filter.correct(Point::new(100.0 + 10.0 * i as f32, 100.0));
        }

        // Prediction now extrapolates ahead of the last measurement.
        let predicted = filter.predict();
        assert!(predicted.x > 150.0);
        assert!((predicted.y - 100.0).abs() < 2.0);
    }
}
