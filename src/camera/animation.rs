//! Camera fly-to state machine.
//!
//! The camera is either `Idle` (driven only by user input) or `Animating`
//! toward a target. While animating, each frame computes
//!
//! ```text
//! t = min((now − started) / duration, 1)
//! position = start + (target − start)·t
//! ```
//!
//! and the animation ends when `t` reaches 1, leaving the camera exactly on the
//! target. A new request while animating restarts from the current position;
//! there is no queue.

use crate::config::DEFAULT_ANIMATION_MS;
use crate::types::Point3;

/// An in-flight camera animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flight {
    /// Camera position when the animation started.
    pub start: Point3,
    /// Camera position at the end of the animation.
    pub target: Point3,
    /// Look-at point when the animation started.
    pub focus_start: Point3,
    /// Look-at point at the end of the animation.
    pub focus_target: Point3,
    /// Timestamp of the request in milliseconds.
    pub started_at_ms: f64,
}

impl Flight {
    /// Position and focus at fraction `t` of the flight.
    pub fn sample(&self, t: f64) -> (Point3, Point3) {
        if t >= 1.0 {
            return (self.target, self.focus_target);
        }
        (
            self.start.lerp(self.target, t),
            self.focus_start.lerp(self.focus_target, t),
        )
    }
}

/// Whether the camera is under programmatic control.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CameraMotion {
    #[default]
    Idle,
    Animating(Flight),
}

/// Result of advancing the animation by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was animating.
    Idle,
    /// Still animating; the next frame should tick again.
    Continue,
    /// The animation reached its target on this frame.
    Finished,
}

/// Interpolation fraction for `elapsed_ms` into an animation of `duration_ms`.
pub fn interpolation_fraction(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Camera pose plus animation state.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraState {
    /// Current camera position.
    pub position: Point3,
    /// Point the camera looks at and orbits around.
    pub focus: Point3,
    motion: CameraMotion,
    duration_ms: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Point3::ZERO, Point3::ZERO)
    }
}

impl CameraState {
    pub fn new(position: Point3, focus: Point3) -> Self {
        Self {
            position,
            focus,
            motion: CameraMotion::Idle,
            duration_ms: DEFAULT_ANIMATION_MS,
        }
    }

    /// Override the animation duration.
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn motion(&self) -> &CameraMotion {
        &self.motion
    }

    /// Target of the in-flight animation, if any.
    pub fn target(&self) -> Option<Point3> {
        match self.motion {
            CameraMotion::Animating(flight) => Some(flight.target),
            CameraMotion::Idle => None,
        }
    }

    /// Whether an animation is in progress.
    pub fn auto_move(&self) -> bool {
        matches!(self.motion, CameraMotion::Animating(_))
    }

    /// Free rotation is suspended while animating and restored on arrival.
    pub fn rotation_enabled(&self) -> bool {
        !self.auto_move()
    }

    /// Panning is never available.
    pub const fn panning_enabled(&self) -> bool {
        false
    }

    /// Start animating toward `target`, with the focus moving to `focus`.
    ///
    /// Replaces any in-flight animation; the new one starts from the current
    /// position.
    pub fn request(&mut self, target: Point3, focus: Point3, now_ms: f64) {
        self.motion = CameraMotion::Animating(Flight {
            start: self.position,
            target,
            focus_start: self.focus,
            focus_target: focus,
            started_at_ms: now_ms,
        });
    }

    /// Advance the animation to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        let CameraMotion::Animating(flight) = self.motion else {
            return TickOutcome::Idle;
        };

        let t = interpolation_fraction(now_ms - flight.started_at_ms, self.duration_ms);
        let (position, focus) = flight.sample(t);
        self.position = position;
        self.focus = focus;

        if t >= 1.0 {
            self.motion = CameraMotion::Idle;
            TickOutcome::Finished
        } else {
            TickOutcome::Continue
        }
    }

    /// Move the camera directly, as user input does. Ignored while animating.
    pub fn set_pose(&mut self, position: Point3, focus: Point3) -> bool {
        if self.auto_move() {
            return false;
        }
        self.position = position;
        self.focus = focus;
        true
    }
}
