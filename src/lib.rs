//! Duo Pong - A two-player arcade Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, countdown, scoring)
//! - `tuning`: Data-driven match configuration
//! - `settings`: Cosmetic preferences (colors, player names)
//! - `audio`: Tone cues for simulation events
//! - `platform`: Browser bindings for an external engine

pub mod audio;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Preferences, PreferenceStore};
pub use tuning::{GameMode, MatchConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ball defaults (square ball, position is its top-left corner)
    pub const BALL_SIZE: f32 = 20.0;
    /// Launch speed of every round (units per second)
    pub const BALL_INITIAL_SPEED: f32 = 420.0;
    /// Added to the current speed on every paddle hit
    pub const BALL_SPEED_INCREMENT: f32 = 55.0;
    /// Max deflection off a paddle edge (60 degrees)
    pub const BOUNCE_ANGLE_RANGE: f32 = PI / 3.0;
    /// Launch angles are drawn from [-offset, range - offset)
    pub const LAUNCH_ANGLE_OFFSET: f32 = PI / 6.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 450.0;
    pub const LEFT_PADDLE_X: f32 = 30.0;
    pub const RIGHT_PADDLE_X_OFFSET: f32 = 45.0;

    /// Top/bottom wall band thickness
    pub const WALL_THICKNESS: f32 = 1.0;

    /// Gap between paddle face and ball after a hit
    pub const COLLISION_OFFSET: f32 = 1.0;
    /// Seconds between two paddle responses
    pub const COLLISION_COOLDOWN: f32 = 0.05;

    /// Scoring
    pub const WIN_SCORE: u32 = 5;
    pub const LEAD_THRESHOLD: u32 = 3;

    /// Countdown between rounds
    pub const COUNTDOWN_START: i32 = 3;
    pub const COUNTDOWN_INTERVAL: f32 = 1.0;

    /// Frame deltas above this are clamped (tab switches, debugger stalls)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Velocity for a launch or bounce: `angle` measured off the horizontal,
/// `direction` is +1 (rightward) or -1 (leftward).
#[inline]
pub fn launch_velocity(angle: f32, direction: f32, speed: f32) -> Vec2 {
    Vec2::new(angle.cos() * direction * speed, angle.sin() * speed)
}
