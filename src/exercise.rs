// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Exercise types and the posture-based classifier.
//!
//! A person is classified per frame from the orientation of the torso: an
//! upright torso (shoulders stacked above hips) is a squat, a horizontal one
//! is a push-up.

use std::fmt;

use ndarray::ArrayView2;
use serde::Serialize;

use crate::keypoints::{
    LEFT_HIP, LEFT_SHOULDER, NUM_KEYPOINTS, RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE,
    RIGHT_SHOULDER, RIGHT_WRIST,
};

/// Exercise types recognized by the gym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Exercise {
    /// Squat - counted on the right hip/knee/ankle angle.
    Squat,
    /// Push-up - counted on the right shoulder/elbow/wrist angle.
    PushUp,
    /// Not yet classified, or classification failed.
    #[default]
    Unknown,
}

impl Exercise {
    /// Returns the string key used in counts and overlay text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::PushUp => "pushup",
            Self::Unknown => "unknown",
        }
    }

    /// Returns whether this is a countable exercise.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Keypoint indices (outer, vertex, outer) used for this exercise's joint angle.
    ///
    /// # Returns
    ///
    /// * `None` for [`Exercise::Unknown`].
    #[must_use]
    pub const fn landmarks(&self) -> Option<[usize; 3]> {
        match self {
            Self::Squat => Some([RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE]),
            Self::PushUp => Some([RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST]),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keypoint indices for the joint angle of `exercise`.
#[must_use]
pub const fn landmarks_for(exercise: Exercise) -> Option<[usize; 3]> {
    exercise.landmarks()
}

/// Classify a person's exercise from a `(17, 2|3)` keypoint view.
///
/// Compares the horizontal offset `dx` between the shoulder and hip
/// midpoints with their vertical offset `dy`. `dx < dy` is a squat,
/// anything else (including `dx == dy`) is a push-up.
///
/// # Returns
///
/// * [`Exercise::Unknown`] if the layout is incomplete or any of the
///   shoulder/hip coordinates is not finite.
#[must_use]
pub fn classify(kpts: &ArrayView2<'_, f32>) -> Exercise {
    if kpts.nrows() < NUM_KEYPOINTS || kpts.ncols() < 2 {
        return Exercise::Unknown;
    }

    let shoulder_x = f32::midpoint(kpts[[LEFT_SHOULDER, 0]], kpts[[RIGHT_SHOULDER, 0]]);
    let shoulder_y = f32::midpoint(kpts[[LEFT_SHOULDER, 1]], kpts[[RIGHT_SHOULDER, 1]]);
    let hip_x = f32::midpoint(kpts[[LEFT_HIP, 0]], kpts[[RIGHT_HIP, 0]]);
    let hip_y = f32::midpoint(kpts[[LEFT_HIP, 1]], kpts[[RIGHT_HIP, 1]]);

    let dy = (shoulder_y - hip_y).abs();
    let dx = (shoulder_x - hip_x).abs();
    if !dx.is_finite() || !dy.is_finite() {
        return Exercise::Unknown;
    }

    if dx < dy {
        Exercise::Squat
    } else {
        Exercise::PushUp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn torso(shoulder: [f32; 2], hip: [f32; 2]) -> Array2<f32> {
        let mut kpts = Array2::zeros((NUM_KEYPOINTS, 3));
        for idx in [LEFT_SHOULDER, RIGHT_SHOULDER] {
            kpts[[idx, 0]] = shoulder[0];
            kpts[[idx, 1]] = shoulder[1];
        }
        for idx in [LEFT_HIP, RIGHT_HIP] {
            kpts[[idx, 0]] = hip[0];
            kpts[[idx, 1]] = hip[1];
        }
        kpts
    }

    #[test]
    fn test_upright_is_squat() {
        let kpts = torso([100.0, 100.0], [105.0, 200.0]);
        assert_eq!(classify(&kpts.view()), Exercise::Squat);
    }

    #[test]
    fn test_horizontal_is_pushup() {
        let kpts = torso([100.0, 300.0], [250.0, 310.0]);
        assert_eq!(classify(&kpts.view()), Exercise::PushUp);
    }

    #[test]
    fn test_equal_offsets_is_pushup() {
        let kpts = torso([0.0, 0.0], [50.0, 50.0]);
        assert_eq!(classify(&kpts.view()), Exercise::PushUp);
    }

    #[test]
    fn test_uses_midpoints() {
        let mut kpts = torso([0.0, 0.0], [0.0, 100.0]);
        // Shoulders spread apart horizontally but centered over the hips.
        kpts[[LEFT_SHOULDER, 0]] = -80.0;
        kpts[[RIGHT_SHOULDER, 0]] = 80.0;
        assert_eq!(classify(&kpts.view()), Exercise::Squat);
    }

    #[test]
    fn test_missing_keypoints_is_unknown() {
        let short = Array2::<f32>::zeros((12, 3));
        assert_eq!(classify(&short.view()), Exercise::Unknown);

        let one_column = Array2::<f32>::zeros((NUM_KEYPOINTS, 1));
        assert_eq!(classify(&one_column.view()), Exercise::Unknown);
    }

    #[test]
    fn test_nan_is_unknown() {
        let mut kpts = torso([0.0, 0.0], [0.0, 100.0]);
        kpts[[RIGHT_HIP, 1]] = f32::NAN;
        assert_eq!(classify(&kpts.view()), Exercise::Unknown);
    }

    #[test]
    fn test_landmarks() {
        assert_eq!(landmarks_for(Exercise::Squat), Some([12, 14, 16]));
        assert_eq!(landmarks_for(Exercise::PushUp), Some([6, 8, 10]));
        assert_eq!(landmarks_for(Exercise::Unknown), None);
    }

    #[test]
    fn test_exercise_display() {
        assert_eq!(Exercise::Squat.to_string(), "squat");
        assert_eq!(Exercise::PushUp.to_string(), "pushup");
        assert!(!Exercise::default().is_known());
    }
}
