//! Detection and camera-frame delivery from the external hand-landmark
//! helper process.
//!
//! The helper owns the camera and the pose model; this side only spawns it,
//! reads JSON lines from its stdout, and drops the decoded payloads into
//! single-slot last-write-wins mailboxes. The render loop reads whatever is
//! current — a delayed or dropped line just means a frame with stale hand
//! data, never an error.

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use egui::{ColorImage, pos2};
use parking_lot::Mutex;
use serde::Deserialize;
use thiserror::Error;

use crate::hand::{Hand, landmark};
use crate::panels::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Environment variable overriding the helper command line.
pub const TRACKER_ENV: &str = "FINGERPAINT_TRACKER";
pub const DEFAULT_TRACKER_COMMAND: &str = "python3 hand_tracker.py";

const MIN_SCORE: f32 = 0.5;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("failed to spawn tracker command `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("tracker command is empty")]
    EmptyCommand,
    #[error("tracker process has no stdout pipe")]
    MissingStdout,
}

/// Most-recent detection set. The reader thread overwrites; the render loop
/// snapshots once per frame.
#[derive(Clone, Default)]
pub struct DetectionFeed {
    inner: Arc<Mutex<Vec<Hand>>>,
}

impl DetectionFeed {
    pub fn store(&self, hands: Vec<Hand>) {
        *self.inner.lock() = hands;
    }

    pub fn snapshot(&self) -> Vec<Hand> {
        self.inner.lock().clone()
    }
}

/// Most-recent camera frame. `take` hands the frame out so the app only
/// re-uploads when a new one arrived.
#[derive(Clone, Default)]
pub struct FrameFeed {
    inner: Arc<Mutex<Option<ColorImage>>>,
}

impl FrameFeed {
    pub fn store(&self, image: ColorImage) {
        *self.inner.lock() = Some(image);
    }

    pub fn take(&self) -> Option<ColorImage> {
        self.inner.lock().take()
    }
}

// Wire format: one JSON object per stdout line.
#[derive(Deserialize)]
struct LandmarkWire {
    x: f32,
    y: f32,
}

#[derive(Deserialize)]
struct HandWire {
    landmarks: Vec<LandmarkWire>,
    #[serde(default = "full_score")]
    score: f32,
}

#[derive(Deserialize)]
struct FrameWire {
    width: usize,
    height: usize,
    /// Base64-encoded JPEG.
    data: String,
}

#[derive(Deserialize)]
struct DetectionWire {
    #[serde(default)]
    hands: Vec<HandWire>,
    #[serde(default)]
    frame: Option<FrameWire>,
    #[serde(default)]
    error: Option<String>,
}

fn full_score() -> f32 {
    1.0
}

/// Keeps the helper process alive; killed on drop.
pub struct TrackerHandle {
    child: Child,
    reader: Option<JoinHandle<()>>,
}

impl Drop for TrackerHandle {
    fn drop(&mut self) {
        let _ = self.child.kill();
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
    }
}

/// The helper command line, from the environment or the default.
pub fn tracker_command() -> String {
    std::env::var(TRACKER_ENV).unwrap_or_else(|_| DEFAULT_TRACKER_COMMAND.to_owned())
}

/// Spawn the helper and start a reader thread that fills the feeds until the
/// helper closes its stdout.
pub fn spawn_tracker(
    command: &str,
    detections: DetectionFeed,
    frames: FrameFeed,
) -> Result<TrackerHandle, TrackerError> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or(TrackerError::EmptyCommand)?;

    let mut child = Command::new(program)
        .args(parts)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| TrackerError::Spawn {
            command: command.to_owned(),
            source,
        })?;

    let stdout = child.stdout.take().ok_or(TrackerError::MissingStdout)?;
    log::info!("hand tracker started: {command}");

    let reader = thread::spawn(move || {
        for line in BufReader::new(stdout).lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    log::warn!("tracker stdout read failed: {err}");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<DetectionWire>(&line) {
                Ok(wire) => handle_line(wire, &detections, &frames),
                Err(err) => log::warn!("skipping malformed tracker line: {err}"),
            }
        }
        log::info!("hand tracker stream ended");
    });

    Ok(TrackerHandle {
        child,
        reader: Some(reader),
    })
}

fn handle_line(wire: DetectionWire, detections: &DetectionFeed, frames: &FrameFeed) {
    if let Some(message) = wire.error {
        log::warn!("tracker reported: {message}");
        return;
    }

    let hands: Vec<Hand> = wire.hands.iter().filter_map(decode_hand).collect();
    detections.store(hands);

    if let Some(frame) = wire.frame {
        match decode_frame(&frame) {
            Ok(image) => frames.store(image),
            Err(err) => log::warn!("skipping camera frame: {err}"),
        }
    }
}

/// Reduce a wire hand to the two tips, scaled from normalized model
/// coordinates to canvas pixels.
fn decode_hand(wire: &HandWire) -> Option<Hand> {
    if wire.score < MIN_SCORE {
        log::debug!("dropping low-confidence hand (score {:.2})", wire.score);
        return None;
    }
    if wire.landmarks.len() < landmark::COUNT {
        log::warn!(
            "expected {} landmarks, got {}",
            landmark::COUNT,
            wire.landmarks.len()
        );
        return None;
    }

    let scale = |lm: &LandmarkWire| pos2(lm.x * CANVAS_WIDTH, lm.y * CANVAS_HEIGHT);
    Some(Hand {
        thumb_tip: scale(&wire.landmarks[landmark::THUMB_TIP]),
        index_tip: scale(&wire.landmarks[landmark::INDEX_FINGER_TIP]),
    })
}

fn decode_frame(wire: &FrameWire) -> Result<ColorImage, String> {
    let jpeg = BASE64
        .decode(&wire.data)
        .map_err(|err| format!("bad base64: {err}"))?;
    let image = image::load_from_memory(&jpeg)
        .map_err(|err| format!("bad jpeg: {err}"))?
        .to_rgba8();

    if (image.width() as usize, image.height() as usize) != (wire.width, wire.height) {
        log::debug!(
            "frame header says {}x{}, jpeg is {}x{}",
            wire.width,
            wire.height,
            image.width(),
            image.height()
        );
    }

    let size = [image.width() as usize, image.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_line(json: &str) -> DetectionWire {
        serde_json::from_str(json).expect("valid test json")
    }

    #[test]
    fn decodes_a_detection_line_into_scaled_tips() {
        let landmarks: Vec<String> = (0..landmark::COUNT)
            .map(|i| format!(r#"{{"x": 0.{i:02}, "y": 0.{i:02}}}"#))
            .collect();
        let line = format!(
            r#"{{"hands": [{{"landmarks": [{}], "score": 0.9}}]}}"#,
            landmarks.join(",")
        );

        let wire = wire_line(&line);
        assert_eq!(wire.hands.len(), 1);

        let hand = decode_hand(&wire.hands[0]).expect("hand decodes");
        assert!((hand.thumb_tip.x - 0.04 * CANVAS_WIDTH).abs() < 0.01);
        assert!((hand.index_tip.y - 0.08 * CANVAS_HEIGHT).abs() < 0.01);
    }

    #[test]
    fn low_confidence_and_short_hands_are_dropped() {
        let low = HandWire {
            landmarks: (0..landmark::COUNT)
                .map(|_| LandmarkWire { x: 0.5, y: 0.5 })
                .collect(),
            score: 0.2,
        };
        assert!(decode_hand(&low).is_none());

        let short = HandWire {
            landmarks: vec![LandmarkWire { x: 0.5, y: 0.5 }],
            score: 1.0,
        };
        assert!(decode_hand(&short).is_none());
    }

    #[test]
    fn empty_and_error_lines_leave_the_frame_feed_alone() {
        let detections = DetectionFeed::default();
        let frames = FrameFeed::default();

        handle_line(wire_line(r#"{"hands": []}"#), &detections, &frames);
        assert!(detections.snapshot().is_empty());
        assert!(frames.take().is_none());

        handle_line(
            wire_line(r#"{"error": "camera busy"}"#),
            &detections,
            &frames,
        );
        assert!(frames.take().is_none());
    }

    #[test]
    fn detection_feed_is_last_write_wins() {
        let feed = DetectionFeed::default();
        let hand = Hand {
            thumb_tip: pos2(1.0, 1.0),
            index_tip: pos2(2.0, 2.0),
        };
        feed.store(vec![hand]);
        feed.store(Vec::new());
        assert!(feed.snapshot().is_empty());
    }
}
