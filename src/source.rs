// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Keypoint replay source.
//!
//! Tracked poses recorded from a pose model can be replayed through the gym
//! from a JSON Lines file. Every non-empty line holds one frame:
//!
//! ```json
//! {"frame": 0, "people": [{"id": 0, "keypoints": [[x, y, conf], ...]}]}
//! ```
//!
//! `frame` is optional and defaults to the position of the frame in the file.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GymError, Result};
use crate::gym::TrackedPose;

/// One frame of tracked poses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Frame {
    /// Frame index.
    #[serde(default)]
    pub frame: Option<usize>,
    /// Every person tracked in the frame.
    #[serde(default)]
    pub people: Vec<TrackedPose>,
}

/// Iterator over frames from a JSON Lines reader.
pub struct KeypointSource<R> {
    lines: Lines<R>,
    line_no: usize,
    frame_idx: usize,
    path: Option<PathBuf>,
}

impl KeypointSource<BufReader<File>> {
    /// Open a JSON Lines keypoint file.
    ///
    /// # Errors
    ///
    /// Returns [`GymError::SourceError`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GymError::SourceError(format!("cannot open {}: {e}", path.display()))
        })?;
        let mut source = Self::from_reader(BufReader::new(file));
        source.path = Some(path.to_path_buf());
        Ok(source)
    }
}

impl<R: BufRead> KeypointSource<R> {
    /// Read frames from any buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            frame_idx: 0,
            path: None,
        }
    }

    fn location(&self) -> String {
        self.path.as_ref().map_or_else(
            || format!("line {}", self.line_no),
            |p| format!("{}:{}", p.display(), self.line_no),
        )
    }
}

impl<R: BufRead> Iterator for KeypointSource<R> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(GymError::Io(e))),
            };
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let parsed = serde_json::from_str::<Frame>(trimmed)
                .map_err(|e| GymError::ParseError(format!("{}: {e}", self.location())))
                .map(|mut frame| {
                    frame.frame = frame.frame.or(Some(self.frame_idx));
                    frame
                });
            self.frame_idx += 1;
            return Some(parsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_frames() {
        let data = concat!(
            r#"{"frame": 7, "people": [{"id": 2, "keypoints": [[1.0, 2.0, 0.5]]}]}"#,
            "\n\n",
            r#"{"people": []}"#,
            "\n",
        );
        let frames: Vec<Frame> = KeypointSource::from_reader(Cursor::new(data))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].frame, Some(7));
        assert_eq!(frames[0].people[0].id, 2);
        assert_eq!(frames[0].people[0].keypoints, vec![[1.0, 2.0, 0.5]]);
        assert_eq!(frames[1].frame, Some(1));
        assert!(frames[1].people.is_empty());
    }

    #[test]
    fn test_parse_error_reports_line() {
        let data = "{\"people\": []}\nnot json\n";
        let mut source = KeypointSource::from_reader(Cursor::new(data));

        assert!(source.next().unwrap().is_ok());
        let err = source.next().unwrap().unwrap_err();
        assert!(matches!(err, GymError::ParseError(_)));
        assert!(err.to_string().contains("line 2"));
        assert!(source.next().is_none());
    }

    #[test]
    fn test_open_missing_file() {
        let result = KeypointSource::open("does/not/exist.jsonl");
        assert!(matches!(result, Err(GymError::SourceError(_))));
    }
}
