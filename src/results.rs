// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-frame workout results.
//!
//! [`WorkoutResults`] is an owned snapshot of the registry taken after every
//! person in a frame has been updated. It also carries [`Overlay`]
//! instructions an annotator can draw onto the frame.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::counter::Stage;
use crate::exercise::Exercise;
use crate::registry::{PersonRegistry, PersonState};
use crate::utils::pluralize;

/// Drawing instructions for one person updated this frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    /// Track id of the person.
    pub id: usize,
    /// Exercise classified on this frame.
    pub exercise: Exercise,
    /// Keypoint indices (outer, vertex, outer) to highlight.
    pub kpts_indices: [usize; 3],
    /// Coordinates of the highlighted keypoints, in the same order.
    pub points: [[f32; 2]; 3],
    /// Radius for the highlighted keypoints, three times the line width.
    pub radius: u32,
    /// Angle label, e.g. `"87.52"`.
    pub angle_text: String,
    /// Count label, e.g. `"Squats:3 Push-ups:0"`.
    pub count_text: String,
    /// Stage label, e.g. `"down (squat) [Person-ID 2]"`.
    pub stage_text: String,
}

impl Overlay {
    /// Build the overlay for `person` after this frame's update.
    ///
    /// # Arguments
    ///
    /// * `person` - Updated state.
    /// * `kpts_indices` - Keypoint indices used for the angle.
    /// * `points` - Their coordinates.
    /// * `line_width` - Annotation line width.
    #[must_use]
    pub fn new(
        person: &PersonState,
        kpts_indices: [usize; 3],
        points: [[f32; 2]; 3],
        line_width: u32,
    ) -> Self {
        Self {
            id: person.id,
            exercise: person.exercise,
            kpts_indices,
            points,
            radius: line_width.saturating_mul(3),
            angle_text: format!("{:.2}", person.angle),
            count_text: format!(
                "Squats:{} Push-ups:{}",
                person.squat_count, person.pushup_count
            ),
            stage_text: format!(
                "{} ({}) [Person-ID {}]",
                person.stage, person.exercise, person.id
            ),
        }
    }
}

/// Snapshot of every person's workout state after a frame.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkoutResults {
    /// Repetition counts per exercise name (`"squat"`, `"pushup"`), indexed by track id.
    pub counts: BTreeMap<String, Vec<u32>>,
    /// Stage per track id.
    pub stages: Vec<Stage>,
    /// Last joint angle per track id.
    pub angles: Vec<f32>,
    /// Number of identities initialized so far.
    pub total_identities: usize,
    /// Overlays for the people updated on this frame.
    pub overlays: Vec<Overlay>,
}

impl WorkoutResults {
    /// Read the current state of `registry`.
    ///
    /// # Arguments
    ///
    /// * `registry` - Registry after the frame's updates.
    /// * `overlays` - Overlays produced while updating.
    #[must_use]
    pub fn from_registry(registry: &PersonRegistry, overlays: Vec<Overlay>) -> Self {
        let mut squats = Vec::with_capacity(registry.len());
        let mut pushups = Vec::with_capacity(registry.len());
        let mut stages = Vec::with_capacity(registry.len());
        let mut angles = Vec::with_capacity(registry.len());

        for person in registry.iter() {
            squats.push(person.squat_count);
            pushups.push(person.pushup_count);
            stages.push(person.stage);
            angles.push(person.angle);
        }

        let counts = BTreeMap::from([
            (Exercise::Squat.as_str().to_string(), squats),
            (Exercise::PushUp.as_str().to_string(), pushups),
        ]);

        Self {
            counts,
            stages,
            angles,
            total_identities: registry.len(),
            overlays,
        }
    }

    /// Per-identity counts for `exercise`.
    ///
    /// # Returns
    ///
    /// * An empty slice for [`Exercise::Unknown`].
    #[must_use]
    pub fn counts_for(&self, exercise: Exercise) -> &[u32] {
        self.counts
            .get(exercise.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total repetitions of `exercise` across all identities.
    #[must_use]
    pub fn total(&self, exercise: Exercise) -> u32 {
        self.counts_for(exercise).iter().sum()
    }

    /// Number of identities in the snapshot.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total_identities
    }

    /// Check if no identity has been observed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_identities == 0
    }

    /// Generate a one-line summary (e.g., "2 people, 5 squats, 1 push-up").
    #[must_use]
    pub fn verbose(&self) -> String {
        if self.is_empty() {
            return "(no people)".to_string();
        }
        let parts = [
            ("person", u64::try_from(self.total_identities).unwrap_or(u64::MAX)),
            ("squat", u64::from(self.total(Exercise::Squat))),
            ("push-up", u64::from(self.total(Exercise::PushUp))),
        ];
        parts
            .iter()
            .map(|(word, n)| {
                if *n == 1 {
                    format!("{n} {word}")
                } else {
                    format!("{n} {}", pluralize(word))
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Serialize the snapshot to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
