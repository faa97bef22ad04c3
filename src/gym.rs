// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Frame-by-frame workout monitoring.
//!
//! [`AIGym`] consumes the tracked poses of one frame at a time. For every
//! person it classifies the exercise, measures the joint angle that exercise
//! is counted on, and advances that person's repetition state. People whose
//! keypoints cannot be classified are skipped for the frame and keep their
//! previous state. Track ids at or above [`GymConfig::max_identities`] are
//! ignored entirely.
//!
//! Nothing here prints. The returned [`WorkoutResults`] carries an overlay
//! for each person updated on the frame, which callers can report on.

use ndarray::ArrayView2;
use serde::Deserialize;

use crate::config::GymConfig;
use crate::counter::RepCounter;
use crate::error::Result;
use crate::exercise::classify;
use crate::geometry::{joint_angle, landmark_points};
use crate::keypoints::Keypoints;
use crate::registry::{PersonRegistry, PersonState};
use crate::results::{Overlay, WorkoutResults};

/// Keypoints of one tracked person in one frame.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackedPose {
    /// Track id assigned by the pose tracker.
    pub id: usize,
    /// Keypoints as (x, y, confidence) rows in COCO-Pose order.
    pub keypoints: Vec<[f32; 3]>,
}

/// Multi-person squat and push-up counter.
///
/// # Example
///
/// ```rust
/// use ultralytics_aigym::{AIGym, GymConfig};
///
/// let mut gym = AIGym::new(GymConfig::default()).unwrap();
/// let results = gym.process(&[]);
/// assert_eq!(results.total_identities, 0);
/// ```
#[derive(Debug, Clone)]
pub struct AIGym {
    config: GymConfig,
    counter: RepCounter,
    registry: PersonRegistry,
}

impl AIGym {
    /// Create a gym with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GymError::ConfigError`] if the configuration is invalid.
    pub fn new(config: GymConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            counter: RepCounter::from_config(&config),
            registry: PersonRegistry::with_limit(config.max_identities),
            config,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GymConfig {
        &self.config
    }

    /// State of every identity observed so far.
    #[must_use]
    pub const fn registry(&self) -> &PersonRegistry {
        &self.registry
    }

    /// State of a single identity.
    #[must_use]
    pub fn person(&self, id: usize) -> Option<&PersonState> {
        self.registry.get(id)
    }

    /// Process one frame of tracked poses.
    ///
    /// # Arguments
    ///
    /// * `poses` - Every person tracked in the frame.
    ///
    /// # Returns
    ///
    /// * Snapshot of all identities after the frame.
    pub fn process(&mut self, poses: &[TrackedPose]) -> WorkoutResults {
        let ids: Vec<usize> = poses.iter().map(|p| p.id).collect();
        let rows: Vec<Vec<[f32; 3]>> = poses.iter().map(|p| p.keypoints.clone()).collect();
        self.process_keypoints(&ids, &Keypoints::from_rows(&rows))
    }

    /// Process one frame given track ids and their keypoints.
    ///
    /// `ids[i]` is the track id of row `i` of `keypoints`. Ids without a
    /// keypoint row are registered but not updated. Ids that are not below
    /// `max_identities` are neither registered nor updated.
    ///
    /// # Arguments
    ///
    /// * `ids` - Track ids in detection order.
    /// * `keypoints` - Keypoints with shape `(N, 17, 2|3)`.
    ///
    /// # Returns
    ///
    /// * Snapshot of all identities after the frame.
    pub fn process_keypoints(&mut self, ids: &[usize], keypoints: &Keypoints) -> WorkoutResults {
        let mut overlays = Vec::with_capacity(ids.len());

        for (i, &id) in ids.iter().enumerate() {
            if self.registry.ensure(id).is_none() {
                continue;
            }
            let Some(kpts) = keypoints.person(i) else {
                continue;
            };
            if let Some(overlay) = self.update_person(id, &kpts) {
                overlays.push(overlay);
            }
        }

        WorkoutResults::from_registry(&self.registry, overlays)
    }

    /// Advance one person's state. Returns `None` if the frame is skipped.
    fn update_person(&mut self, id: usize, kpts: &ArrayView2<'_, f32>) -> Option<Overlay> {
        let exercise = classify(kpts);
        let indices = exercise.landmarks()?;
        let points = landmark_points(kpts, indices)?;
        let angle = joint_angle(points[0], points[1], points[2]);

        let person = self.registry.ensure(id)?;
        self.counter.update(person, exercise, angle);

        Some(Overlay::new(person, indices, points, self.config.line_width))
    }
}
