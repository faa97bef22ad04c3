// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Repetition counting state machine.
//!
//! Each person moves between [`Stage::Up`] and [`Stage::Down`] as their joint
//! angle crosses `up_angle` and `down_angle`. A repetition is counted on the
//! Up→Down edge only, so the person has to reach full extension before a
//! flexion counts. Angles inside the band between the two thresholds leave
//! the stage untouched.
//!
//! The repetition is credited to the exercise classified on the frame that
//! crosses `down_angle`. If classification flips between reaching `Up` and
//! going `Down`, the new label gets the count.

use std::fmt;

use serde::Serialize;

use crate::config::GymConfig;
use crate::exercise::Exercise;
use crate::registry::PersonState;

/// Phase of a repetition cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Stage {
    /// Joint extended past `up_angle`.
    #[serde(rename = "up")]
    Up,
    /// Joint flexed below `down_angle`.
    #[serde(rename = "down")]
    Down,
    /// No angle has crossed a threshold yet.
    #[default]
    #[serde(rename = "-")]
    Neutral,
}

impl Stage {
    /// Returns the label drawn on overlays.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Neutral => "-",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Threshold pair driving stage transitions.
#[derive(Debug, Clone, Copy)]
pub struct RepCounter {
    up_angle: f32,
    down_angle: f32,
}

impl RepCounter {
    /// Create a counter from explicit thresholds.
    #[must_use]
    pub const fn new(up_angle: f32, down_angle: f32) -> Self {
        Self {
            up_angle,
            down_angle,
        }
    }

    /// Create a counter from a [`GymConfig`].
    #[must_use]
    pub const fn from_config(config: &GymConfig) -> Self {
        Self::new(config.up_angle, config.down_angle)
    }

    /// Apply one frame's classification and angle to a person's state.
    ///
    /// Writes `exercise` and `angle` into `person`, then updates stage and
    /// counts. [`Exercise::Unknown`] leaves the state untouched.
    ///
    /// # Returns
    ///
    /// * `true` if a repetition was counted on this frame.
    pub fn update(&self, person: &mut PersonState, exercise: Exercise, angle: f32) -> bool {
        if !exercise.is_known() {
            return false;
        }
        person.exercise = exercise;
        person.angle = angle;

        if angle < self.down_angle {
            let counted = person.stage == Stage::Up;
            if counted {
                match exercise {
                    Exercise::Squat => person.squat_count += 1,
                    Exercise::PushUp => person.pushup_count += 1,
                    Exercise::Unknown => {}
                }
            }
            person.stage = Stage::Down;
            counted
        } else if angle > self.up_angle {
            person.stage = Stage::Up;
            false
        } else {
            false
        }
    }
}

impl Default for RepCounter {
    fn default() -> Self {
        Self::from_config(&GymConfig::default())
    }
}
