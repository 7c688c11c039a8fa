//! Swipe classification: turns a press/release pair into a [`Direction`].
//!
//! A swipe counts only along its dominant axis, and only when it travelled
//! far enough and fast enough along that axis. Positive x is rightward,
//! positive y is downward (screen coordinates).

use crate::types::Direction;

/// Thresholds for accepting a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Minimum displacement along the dominant axis (exclusive).
    pub min_distance: f32,
    /// Minimum speed along the dominant axis in units per second (exclusive).
    pub min_velocity: f32,
    /// Multiplier applied to vertical displacement before any comparison.
    ///
    /// Terminal cells are roughly twice as tall as they are wide, so a
    /// terminal drag of one row covers about as much ground as two columns.
    pub y_scale: f32,
}

impl Default for SwipeConfig {
    /// Touch-screen thresholds, in pixels.
    fn default() -> Self {
        Self {
            min_distance: 100.0,
            min_velocity: 100.0,
            y_scale: 1.0,
        }
    }
}

impl SwipeConfig {
    /// Thresholds for mouse drags measured in terminal cells.
    pub fn terminal() -> Self {
        Self {
            min_distance: 3.0,
            min_velocity: 6.0,
            y_scale: 2.0,
        }
    }
}

/// Classify a finished gesture.
///
/// `dx`/`dy` are the total displacement, `vx`/`vy` the velocity along each
/// axis. Returns None when the gesture is too short or too slow.
pub fn classify(dx: f32, dy: f32, vx: f32, vy: f32, config: &SwipeConfig) -> Option<Direction> {
    let dy = dy * config.y_scale;
    let vy = vy * config.y_scale;

    if dx.abs() > dy.abs() {
        if dx.abs() > config.min_distance && vx.abs() > config.min_velocity {
            return Some(if dx > 0.0 { Direction::Right } else { Direction::Left });
        }
    } else if dy.abs() > config.min_distance && vy.abs() > config.min_velocity {
        return Some(if dy > 0.0 { Direction::Down } else { Direction::Up });
    }
    None
}

/// Tracks one gesture at a time from press to release.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    config: SwipeConfig,
    start: Option<(f32, f32, u64)>,
}

impl SwipeDetector {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// True between a press and its release.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Begin a gesture at (x, y), timestamped in milliseconds.
    pub fn press(&mut self, x: f32, y: f32, now_ms: u64) {
        self.start = Some((x, y, now_ms));
    }

    /// Drop any gesture in progress.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Finish the gesture at (x, y) and classify it.
    pub fn release(&mut self, x: f32, y: f32, now_ms: u64) -> Option<Direction> {
        let (x0, y0, t0) = self.start.take()?;
        let dx = x - x0;
        let dy = y - y0;
        // A zero-length interval would make the velocity infinite; clamp to 1ms.
        let secs = now_ms.saturating_sub(t0).max(1) as f32 / 1000.0;
        classify(dx, dy, dx / secs, dy / secs, &self.config)
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}
