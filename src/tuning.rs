//! Data-driven match configuration
//!
//! Read once when a match is created; the simulation never mutates it except
//! for playfield bounds on resize.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How a match is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// First side to reach `win_score`
    #[default]
    FixedScore,
    /// First side ahead by `lead_threshold`
    LeadByThree,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::FixedScore => "fixed_score",
            GameMode::LeadByThree => "lead_by_three",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fixed_score" | "fixed" => Some(GameMode::FixedScore),
            "lead_by_three" | "lead" => Some(GameMode::LeadByThree),
            _ => None,
        }
    }
}

/// Match tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub wall_thickness: f32,

    // === Ball ===
    pub ball_size: f32,
    pub initial_speed: f32,
    pub speed_increment: f32,
    /// Max bounce angle off a paddle (radians)
    pub bounce_angle_range: f32,
    /// Shift applied to the launch angle draw (radians)
    pub launch_angle_offset: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub left_paddle_x: f32,
    /// Right paddle sits at `screen_width - right_paddle_x_offset`
    pub right_paddle_x_offset: f32,

    // === Collision ===
    pub collision_offset: f32,
    pub collision_cooldown: f32,

    // === Rules ===
    pub game_mode: GameMode,
    pub win_score: u32,
    pub lead_threshold: u32,

    // === Countdown ===
    pub countdown_start: i32,
    pub countdown_interval: f32,

    /// Longest frame the simulation will integrate in one step
    pub max_frame_dt: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            wall_thickness: WALL_THICKNESS,

            ball_size: BALL_SIZE,
            initial_speed: BALL_INITIAL_SPEED,
            speed_increment: BALL_SPEED_INCREMENT,
            bounce_angle_range: BOUNCE_ANGLE_RANGE,
            launch_angle_offset: LAUNCH_ANGLE_OFFSET,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            left_paddle_x: LEFT_PADDLE_X,
            right_paddle_x_offset: RIGHT_PADDLE_X_OFFSET,

            collision_offset: COLLISION_OFFSET,
            collision_cooldown: COLLISION_COOLDOWN,

            game_mode: GameMode::FixedScore,
            win_score: WIN_SCORE,
            lead_threshold: LEAD_THRESHOLD,

            countdown_start: COUNTDOWN_START,
            countdown_interval: COUNTDOWN_INTERVAL,

            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl MatchConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Replace values the frame step cannot work with by their defaults
    pub fn sanitized(mut self) -> Self {
        if self.max_frame_dt.is_nan() || self.max_frame_dt <= 0.0 {
            log::warn!(
                "max_frame_dt must be positive (got {}), using {}",
                self.max_frame_dt,
                MAX_FRAME_DT
            );
            self.max_frame_dt = MAX_FRAME_DT;
        }
        self
    }

    /// Config for a given mode with everything else default
    pub fn with_mode(mode: GameMode) -> Self {
        Self {
            game_mode: mode,
            ..Self::default()
        }
    }

    /// Switch to `mode` when one was asked for, keep the configured mode otherwise
    pub fn or_mode(self, mode: Option<GameMode>) -> Self {
        match mode {
            Some(game_mode) => Self { game_mode, ..self },
            None => self,
        }
    }

    /// X of the right paddle for the current bounds
    #[inline]
    pub fn right_paddle_x(&self) -> f32 {
        self.screen_width - self.right_paddle_x_offset
    }
}
