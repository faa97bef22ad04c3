// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-identity workout state.

use crate::config::DEFAULT_MAX_IDENTITIES;
use crate::counter::Stage;
use crate::exercise::Exercise;

/// Running workout state of one tracked person.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonState {
    /// Track id assigned by the pose tracker.
    pub id: usize,
    /// Last successfully classified exercise.
    pub exercise: Exercise,
    /// Current repetition stage.
    pub stage: Stage,
    /// Last computed joint angle in degrees.
    pub angle: f32,
    /// Completed squats.
    pub squat_count: u32,
    /// Completed push-ups.
    pub pushup_count: u32,
}

impl PersonState {
    /// Fresh state for a newly observed identity.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self {
            id,
            exercise: Exercise::Unknown,
            stage: Stage::Neutral,
            angle: 0.0,
            squat_count: 0,
            pushup_count: 0,
        }
    }

    /// Repetitions completed for `exercise`.
    #[must_use]
    pub const fn count(&self, exercise: Exercise) -> u32 {
        match exercise {
            Exercise::Squat => self.squat_count,
            Exercise::PushUp => self.pushup_count,
            Exercise::Unknown => 0,
        }
    }
}

/// Owns the state of every identity seen so far.
///
/// Storage is indexed by track id. Observing id `n` initializes every id in
/// `0..=n` that has not been seen yet, so `len()` is one past the highest id
/// observed. Ids at or above the registry's limit are refused. Entries are
/// never removed.
#[derive(Debug, Clone)]
pub struct PersonRegistry {
    people: Vec<PersonState>,
    limit: usize,
}

impl Default for PersonRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonRegistry {
    /// Create an empty registry accepting ids below [`DEFAULT_MAX_IDENTITIES`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_IDENTITIES)
    }

    /// Create an empty registry accepting ids below `limit`.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            people: Vec::new(),
            limit,
        }
    }

    /// Make sure state exists for `id`, growing storage as needed.
    ///
    /// # Returns
    ///
    /// * Mutable access to the person's state.
    /// * `None` if `id` is not below the limit. The registry is left untouched.
    pub fn ensure(&mut self, id: usize) -> Option<&mut PersonState> {
        if id >= self.limit {
            return None;
        }
        if id >= self.people.len() {
            let start = self.people.len();
            self.people.extend((start..=id).map(PersonState::new));
        }
        self.people.get_mut(id)
    }

    /// Look up a person by track id.
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&PersonState> {
        self.people.get(id)
    }

    /// Number of initialized identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Check if no identity has been observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterate over all states in id order.
    pub fn iter(&self) -> impl Iterator<Item = &PersonState> {
        self.people.iter()
    }
}
