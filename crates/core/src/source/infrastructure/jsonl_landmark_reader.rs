//! Replays recorded landmark streams stored as JSON Lines.
//!
//! One object per line: `{"t_ms": 33.3, "landmarks": [[x, y], ...]}`, with
//! `"landmarks": null` for frames without a face. Blank lines are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::shared::landmark_frame::LandmarkFrame;
use crate::source::domain::landmark_source::{LandmarkSample, LandmarkSource};

#[derive(Error, Debug)]
pub enum LandmarkReadError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("malformed sample on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid timestamp {t_ms} on line {line}")]
    Timestamp { line: usize, t_ms: f64 },
}

#[derive(Deserialize)]
struct RawSample {
    t_ms: f64,
    landmarks: Option<Vec<(f64, f64)>>,
}

pub struct JsonlLandmarkReader {
    lines: io::Lines<Box<dyn BufRead + Send>>,
    line: usize,
}

impl JsonlLandmarkReader {
    pub fn open(path: &Path) -> Result<Self, LandmarkReadError> {
        let file = File::open(path).map_err(|e| LandmarkReadError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    pub fn from_reader(reader: impl BufRead + Send + 'static) -> Self {
        let boxed: Box<dyn BufRead + Send> = Box::new(reader);
        Self {
            lines: boxed.lines(),
            line: 0,
        }
    }

    /// Reads up to the next non-blank line and decodes it.
    pub fn read_sample(&mut self) -> Option<Result<LandmarkSample, LandmarkReadError>> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => {
                    return Some(Err(LandmarkReadError::Io {
                        line: self.line + 1,
                        source: e,
                    }))
                }
            };
            self.line += 1;
            if text.trim().is_empty() {
                continue;
            }
            return Some(self.decode(&text));
        }
    }

    fn decode(&self, text: &str) -> Result<LandmarkSample, LandmarkReadError> {
        let raw: RawSample = serde_json::from_str(text).map_err(|e| LandmarkReadError::Parse {
            line: self.line,
            source: e,
        })?;
        if !raw.t_ms.is_finite() || raw.t_ms < 0.0 {
            return Err(LandmarkReadError::Timestamp {
                line: self.line,
                t_ms: raw.t_ms,
            });
        }
        Ok(LandmarkSample {
            timestamp: Duration::from_nanos((raw.t_ms * 1e6).round() as u64),
            frame: raw.landmarks.map(LandmarkFrame::from),
        })
    }
}

impl LandmarkSource for JsonlLandmarkReader {
    fn next_sample(&mut self) -> Option<Result<LandmarkSample, Box<dyn std::error::Error>>> {
        self.read_sample().map(|r| r.map_err(|e| e.into()))
    }
}
