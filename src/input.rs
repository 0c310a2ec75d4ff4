//! Input Adapter boundary
//!
//! The hand tracker runs on its own cadence and reports the fingertip x in
//! camera-frame pixels. Samples are converted to field space and dropped into
//! a single last-writer-wins slot; the engine reads whatever is there at the
//! start of each tick. Nothing queues, nothing blocks.

use std::sync::Arc;

use tokio::sync::watch;

use crate::config::GameConfig;

/// Map a camera-frame x onto the play field
///
/// `None` for non-finite samples or a degenerate frame width.
pub fn camera_to_field(raw_x: f32, frame_width: f32, field_width: f32) -> Option<f32> {
    let raw_x = crate::finite(raw_x)?;
    if !(frame_width.is_finite() && frame_width > 0.0) {
        return None;
    }
    crate::finite(raw_x / frame_width * field_width)
}

/// Writer half, held by the tracker
#[derive(Debug, Clone)]
pub struct PaddleInput {
    tx: Arc<watch::Sender<Option<f32>>>,
    frame_width: f32,
    field_width: f32,
}

/// Reader half, held by the engine
#[derive(Debug, Clone)]
pub struct PaddleTarget {
    rx: watch::Receiver<Option<f32>>,
}

impl PaddleInput {
    /// Create an empty slot for the given field
    pub fn new(config: &GameConfig) -> (Self, PaddleTarget) {
        let (tx, rx) = watch::channel(None);
        let input = Self {
            tx: Arc::new(tx),
            frame_width: config.camera_frame_width,
            field_width: config.field_width,
        };
        (input, PaddleTarget { rx })
    }

    /// Submit a fingertip x in the configured camera frame
    pub fn submit_camera_sample(&self, raw_x: f32) -> bool {
        self.submit_camera_sample_in(raw_x, self.frame_width)
    }

    /// Submit a fingertip x from a frame of a specific width
    pub fn submit_camera_sample_in(&self, raw_x: f32, frame_width: f32) -> bool {
        match camera_to_field(raw_x, frame_width, self.field_width) {
            Some(x) => self.submit_field_x(x),
            None => {
                log::debug!("Dropping camera sample {raw_x} (frame width {frame_width})");
                false
            }
        }
    }

    /// Submit a target already in field space
    pub fn submit_field_x(&self, x: f32) -> bool {
        let Some(x) = crate::finite(x) else {
            log::debug!("Dropping non-finite paddle target {x}");
            return false;
        };
        self.tx.send_replace(Some(x));
        true
    }

    /// Another reader on the same slot
    pub fn subscribe(&self) -> PaddleTarget {
        PaddleTarget {
            rx: self.tx.subscribe(),
        }
    }
}

impl PaddleTarget {
    /// Most recent target, `None` until the tracker has produced one
    pub fn latest(&self) -> Option<f32> {
        *self.rx.borrow()
    }
}
