// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Ultralytics AI Gym
//!
//! Real-time squat and push-up repetition counting from YOLO pose keypoints.
//!
//! A pose model with tracking (e.g. `yolo11n-pose` with ByteTrack) supplies,
//! for every frame, a track id and 17 COCO-Pose keypoints per person. The
//! gym classifies each person's exercise from their torso orientation,
//! measures the joint angle that exercise is counted on, and counts a
//! repetition every time the angle goes from above `up_angle` to below
//! `down_angle`. Many people can be tracked at once, each doing a different
//! exercise.
//!
//! ## Quick Start
//!
//! ```rust
//! use ultralytics_aigym::{AIGym, Exercise, GymConfig, TrackedPose};
//!
//! let mut gym = AIGym::new(GymConfig::default())?;
//!
//! // One frame with one person; keypoints would come from the pose model.
//! let pose = TrackedPose { id: 0, keypoints: vec![[0.0, 0.0, 0.0]; 17] };
//! let results = gym.process(&[pose]);
//!
//! println!("squats: {:?}", results.counts_for(Exercise::Squat));
//! println!("stages: {:?}", results.stages);
//! # Ok::<(), ultralytics_aigym::GymError>(())
//! ```
//!
//! ## CLI Usage
//!
//! Recorded keypoints can be replayed from a JSON Lines file:
//!
//! ```bash
//! ultralytics-aigym count --source poses.jsonl
//! ultralytics-aigym count -s poses.jsonl --up-angle 150 --down-angle 100 --json
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`gym`] | [`AIGym`] frame driver |
//! | [`exercise`] | [`Exercise`] types and the posture classifier |
//! | [`counter`] | [`RepCounter`] stage machine and [`Stage`] |
//! | [`registry`] | Per-identity [`PersonState`] storage |
//! | [`results`] | [`WorkoutResults`] snapshot and [`Overlay`] instructions |
//! | [`geometry`] | Joint angle computation |
//! | [`keypoints`] | COCO-Pose layout and [`Keypoints`] container |
//! | [`source`] | JSON Lines keypoint replay |
//! | [`config`] | [`GymConfig`] |
//! | [`error`] | Error types ([`GymError`], [`Result`]) |

// Modules
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod exercise;
pub mod geometry;
pub mod gym;
pub mod keypoints;
pub mod registry;
pub mod results;
pub mod source;
pub mod utils;

// Re-export main types for convenience
pub use config::GymConfig;
pub use counter::{RepCounter, Stage};
pub use error::{GymError, Result};
pub use exercise::{Exercise, classify, landmarks_for};
pub use geometry::joint_angle;
pub use gym::{AIGym, TrackedPose};
pub use keypoints::Keypoints;
pub use registry::{PersonRegistry, PersonState};
pub use results::{Overlay, WorkoutResults};
pub use source::{Frame, KeypointSource};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
