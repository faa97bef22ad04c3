// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! COCO-Pose keypoint layout and the per-frame keypoint container.
//!
//! Pose models emit 17 keypoints per person in a fixed order. The indices
//! below name the landmarks the workout logic reads.

use ndarray::{Array3, ArrayView2, Axis};

/// Number of keypoints in the COCO-Pose layout.
pub const NUM_KEYPOINTS: usize = 17;

/// Left shoulder index.
pub const LEFT_SHOULDER: usize = 5;
/// Right shoulder index.
pub const RIGHT_SHOULDER: usize = 6;
/// Left elbow index.
pub const LEFT_ELBOW: usize = 7;
/// Right elbow index.
pub const RIGHT_ELBOW: usize = 8;
/// Left wrist index.
pub const LEFT_WRIST: usize = 9;
/// Right wrist index.
pub const RIGHT_WRIST: usize = 10;
/// Left hip index.
pub const LEFT_HIP: usize = 11;
/// Right hip index.
pub const RIGHT_HIP: usize = 12;
/// Left knee index.
pub const LEFT_KNEE: usize = 13;
/// Right knee index.
pub const RIGHT_KNEE: usize = 14;
/// Left ankle index.
pub const LEFT_ANKLE: usize = 15;
/// Right ankle index.
pub const RIGHT_ANKLE: usize = 16;

/// Pose keypoints for every tracked person in a frame.
///
/// Rows of the first axis line up with the track ids reported by the tracker.
#[derive(Debug, Clone)]
pub struct Keypoints {
    /// Raw keypoint data with shape (N, K, 2) or (N, K, 3) if confidence included.
    pub data: Array3<f32>,
}

impl Keypoints {
    /// Create a new Keypoints instance.
    ///
    /// # Arguments
    ///
    /// * `data` - Raw keypoint data.
    ///
    /// # Returns
    ///
    /// * A new `Keypoints` instance.
    #[must_use]
    pub fn new(data: Array3<f32>) -> Self {
        Self { data }
    }

    /// Build a `(N, 17, 3)` array from per-person keypoint rows.
    ///
    /// Missing trailing keypoints are filled with `NaN` so that downstream
    /// classification treats them as absent rather than as the origin.
    #[must_use]
    pub fn from_rows(people: &[Vec<[f32; 3]>]) -> Self {
        let mut data = Array3::from_elem((people.len(), NUM_KEYPOINTS, 3), f32::NAN);
        for (i, rows) in people.iter().enumerate() {
            for (k, kpt) in rows.iter().take(NUM_KEYPOINTS).enumerate() {
                for (c, v) in kpt.iter().enumerate() {
                    data[[i, k, c]] = *v;
                }
            }
        }
        Self::new(data)
    }

    /// Get the number of people with keypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.shape()[0]
    }

    /// Check if there are no keypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Keypoints of the `i`-th person as a `(K, 2|3)` view.
    ///
    /// # Returns
    ///
    /// * `None` if `i` is out of range.
    #[must_use]
    pub fn person(&self, i: usize) -> Option<ArrayView2<'_, f32>> {
        (i < self.len()).then(|| self.data.index_axis(Axis(0), i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_pads_missing() {
        let people = vec![vec![[1.0, 2.0, 0.9]; NUM_KEYPOINTS], vec![[3.0, 4.0, 0.5]; 5]];
        let kpts = Keypoints::from_rows(&people);

        assert_eq!(kpts.len(), 2);
        assert_eq!(kpts.data.shape(), &[2, NUM_KEYPOINTS, 3]);
        assert!((kpts.data[[0, 16, 1]] - 2.0).abs() < 1e-6);
        assert!((kpts.data[[1, 4, 0]] - 3.0).abs() < 1e-6);
        assert!(kpts.data[[1, 5, 0]].is_nan());
    }

    #[test]
    fn test_person_view() {
        let kpts = Keypoints::from_rows(&[vec![[7.0, 8.0, 1.0]; NUM_KEYPOINTS]]);
        let person = kpts.person(0).unwrap();
        assert_eq!(person.shape(), &[NUM_KEYPOINTS, 3]);
        assert!((person[[RIGHT_KNEE, 0]] - 7.0).abs() < 1e-6);
        assert!(kpts.person(1).is_none());
    }

    #[test]
    fn test_xy_only_view() {
        let kpts = Keypoints::new(Array3::zeros((2, NUM_KEYPOINTS, 2)));
        assert_eq!(kpts.len(), 2);
        assert_eq!(kpts.person(1).unwrap().shape(), &[NUM_KEYPOINTS, 2]);
    }

    #[test]
    fn test_empty() {
        let kpts = Keypoints::from_rows(&[]);
        assert!(kpts.is_empty());
        assert_eq!(kpts.len(), 0);
    }
}
