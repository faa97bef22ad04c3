// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use crate::cli::args::CountArgs;
use crate::error::Result;
use crate::exercise::Exercise;
use crate::source::{Frame, KeypointSource};
use crate::{AIGym, GymConfig, VERSION, WorkoutResults};
use crate::{error, info, section, success, verbose, warn};

/// Replay a keypoint file through the gym and print the final counts.
pub fn run_count(args: &CountArgs) {
    crate::cli::logging::set_verbose(args.show_progress());

    let config = GymConfig::new()
        .with_up_angle(args.up_angle)
        .with_down_angle(args.down_angle)
        .with_line_width(args.line_width)
        .with_max_identities(args.max_identities);

    let mut gym = match AIGym::new(config) {
        Ok(gym) => gym,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    if !args.json {
        let config = gym.config();
        info!(
            "Ultralytics AI Gym {VERSION} 🚀 up_angle={} down_angle={} max_identities={}",
            config.up_angle, config.down_angle, config.max_identities
        );
    }

    let results = match replay(&mut gym, &args.source) {
        Ok(results) => results,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    if args.json {
        match results.to_json() {
            Ok(json) => info!("{json}"),
            Err(e) => {
                error!("{e}");
                process::exit(1);
            }
        }
        return;
    }

    section!("Workout summary");
    for line in format_people(&gym) {
        info!("{line}");
    }
    success!("{}", results.verbose());
}

/// Feed every frame of `source` to `gym`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a frame cannot be parsed.
pub fn replay(gym: &mut AIGym, source: &str) -> Result<WorkoutResults> {
    let mut results = WorkoutResults::default();
    let mut frames = 0usize;
    let max = gym.config().max_identities;

    for frame in KeypointSource::open(source)? {
        let frame = frame?;
        results = gym.process(&frame.people);
        frames += 1;
        let index = frame.frame.unwrap_or(frames - 1);

        let ignored = frame.people.iter().filter(|p| p.id >= max).count();
        if ignored > 0 {
            warn!("frame {index}: ignored {ignored} track ids not below max_identities ({max})");
        }
        verbose!(
            "frame {index}: {} tracked, {}",
            frame.people.len(),
            results.verbose()
        );
        for line in frame_progress(gym, &frame, &results) {
            verbose!("{line}");
        }
    }

    verbose!("Processed {frames} frames from {source}");
    Ok(results)
}

/// One progress line per person tracked in `frame`.
fn frame_progress(gym: &AIGym, frame: &Frame, results: &WorkoutResults) -> Vec<String> {
    let max = gym.config().max_identities;
    frame
        .people
        .iter()
        .map(|pose| {
            let id = pose.id;
            if id >= max {
                return format!("[ID {id}] track id is not below max_identities ({max}), skipping");
            }
            match (
                results.overlays.iter().any(|o| o.id == id),
                gym.person(id),
            ) {
                (true, Some(person)) => format!(
                    "[ID {id}] exercise: {}, Squat: {}, Pushup: {}",
                    person.exercise,
                    person.count(Exercise::Squat),
                    person.count(Exercise::PushUp)
                ),
                _ => format!("[ID {id}] exercise could not be classified, skipping"),
            }
        })
        .collect()
}

/// One summary line per identity (e.g., "Person-ID 0: squat, Squats:3 Push-ups:0, stage up").
fn format_people(gym: &AIGym) -> Vec<String> {
    gym.registry()
        .iter()
        .map(|p| {
            format!(
                "Person-ID {}: {}, Squats:{} Push-ups:{}, stage {}",
                p.id,
                p.exercise,
                p.count(Exercise::Squat),
                p.count(Exercise::PushUp),
                p.stage
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gym::TrackedPose;
    use crate::keypoints::{
        LEFT_HIP, LEFT_SHOULDER, NUM_KEYPOINTS, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER,
    };

    fn standing(id: usize) -> TrackedPose {
        let mut keypoints = vec![[0.0, 0.0, 0.9]; NUM_KEYPOINTS];
        keypoints[LEFT_SHOULDER] = [100.0, 100.0, 0.9];
        keypoints[RIGHT_SHOULDER] = [120.0, 100.0, 0.9];
        keypoints[LEFT_HIP] = [100.0, 200.0, 0.9];
        keypoints[RIGHT_HIP] = [120.0, 200.0, 0.9];
        keypoints[RIGHT_KNEE] = [120.0, 300.0, 0.9];
        keypoints[RIGHT_ANKLE] = [120.0, 400.0, 0.9];
        TrackedPose { id, keypoints }
    }

    #[test]
    fn test_format_people() {
        let mut gym = AIGym::new(GymConfig::default()).unwrap();
        gym.process(&[TrackedPose {
            id: 1,
            keypoints: vec![[0.0, 0.0, 0.0]; NUM_KEYPOINTS],
        }]);

        let lines = format_people(&gym);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Person-ID 0: unknown, Squats:0 Push-ups:0, stage -");
    }

    #[test]
    fn test_frame_progress() {
        let mut gym = AIGym::new(GymConfig::new().with_max_identities(8)).unwrap();
        let frame = Frame {
            frame: Some(0),
            people: vec![
                standing(0),
                TrackedPose {
                    id: 1,
                    keypoints: Vec::new(),
                },
                standing(8),
            ],
        };
        let results = gym.process(&frame.people);

        let lines = frame_progress(&gym, &frame, &results);
        assert_eq!(
            lines,
            vec![
                "[ID 0] exercise: squat, Squat: 0, Pushup: 0".to_string(),
                "[ID 1] exercise could not be classified, skipping".to_string(),
                "[ID 8] track id is not below max_identities (8), skipping".to_string(),
            ]
        );
    }

    #[test]
    fn test_replay_missing_file() {
        let mut gym = AIGym::new(GymConfig::default()).unwrap();
        assert!(replay(&mut gym, "missing/poses.jsonl").is_err());
    }
}
