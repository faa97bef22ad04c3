// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_MAX_IDENTITIES;

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Count Options:
    --source, -s <SOURCE>      JSON Lines file of tracked pose keypoints
    --up-angle <UP_ANGLE>      Joint angle above which a person is "up" [default: 160]
    --down-angle <DOWN_ANGLE>  Joint angle below which a person is "down" [default: 90]
    --line-width <LINE_WIDTH>  Overlay line width [default: 2]
    --max-identities <N>       Track ids must be lower than this [default: 10000]
    --json                     Print the final snapshot as JSON (implies --verbose false)
    --verbose                  Show per-frame progress

Examples:
    ultralytics-aigym count --source poses.jsonl
    ultralytics-aigym count -s poses.jsonl --up-angle 150 --down-angle 100
    ultralytics-aigym count -s poses.jsonl --json --verbose false"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count squats and push-ups from recorded pose keypoints
    Count(CountArgs),
}

/// Arguments for the count command.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// JSON Lines file of tracked pose keypoints
    #[arg(short, long)]
    pub source: String,

    /// Joint angle above which a person is in the "up" position
    #[arg(long, default_value_t = 160.0)]
    pub up_angle: f32,

    /// Joint angle below which a person is in the "down" position
    #[arg(long, default_value_t = 90.0)]
    pub down_angle: f32,

    /// Overlay line width
    #[arg(long, default_value_t = 2)]
    pub line_width: u32,

    /// Track ids must be lower than this
    #[arg(long, default_value_t = DEFAULT_MAX_IDENTITIES)]
    pub max_identities: usize,

    /// Print the final snapshot as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show per-frame progress
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

impl CountArgs {
    /// Whether progress lines are printed. Off under `--json` so stdout
    /// carries only the snapshot.
    #[must_use]
    pub const fn show_progress(&self) -> bool {
        self.verbose && !self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_count_args_defaults() {
        let args = Cli::parse_from(["app", "count", "--source", "poses.jsonl"]);
        match args.command {
            Commands::Count(count_args) => {
                assert_eq!(count_args.source, "poses.jsonl");
                assert!((count_args.up_angle - 160.0).abs() < f32::EPSILON);
                assert!((count_args.down_angle - 90.0).abs() < f32::EPSILON);
                assert_eq!(count_args.line_width, 2);
                assert_eq!(count_args.max_identities, DEFAULT_MAX_IDENTITIES);
                assert!(!count_args.json);
                assert!(count_args.verbose);
                assert!(count_args.show_progress());
            }
        }
    }

    #[test]
    fn test_count_args_custom() {
        let args = Cli::parse_from([
            "app",
            "count",
            "-s",
            "gym.jsonl",
            "--up-angle",
            "150",
            "--down-angle",
            "100",
            "--max-identities",
            "64",
            "--json",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Count(count_args) => {
                assert_eq!(count_args.source, "gym.jsonl");
                assert!((count_args.up_angle - 150.0).abs() < f32::EPSILON);
                assert!((count_args.down_angle - 100.0).abs() < f32::EPSILON);
                assert_eq!(count_args.max_identities, 64);
                assert!(count_args.json);
                assert!(!count_args.verbose);
            }
        }
    }

    #[test]
    fn test_json_silences_progress() {
        let args = Cli::parse_from(["app", "count", "-s", "gym.jsonl", "--json"]);
        match args.command {
            Commands::Count(count_args) => {
                assert!(count_args.verbose);
                assert!(!count_args.show_progress());
            }
        }
    }

    #[test]
    fn test_source_is_required() {
        assert!(Cli::try_parse_from(["app", "count"]).is_err());
    }
}
