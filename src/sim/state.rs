//! Entities and shared simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::MatchConfig;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction a ball travels after this side's paddle returns it
    pub fn return_direction(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round started yet
    Idle,
    /// Ball frozen at center, countdown running
    CountingDown,
    /// Rally in progress
    Active,
    /// Match decided, waiting for a restart
    Over,
}

/// Launch trajectory drawn when the ball is placed for a new round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Serve {
    /// +1 toward the right player, -1 toward the left
    pub direction: f32,
    /// Radians off the horizontal
    pub angle: f32,
}

/// The ball. `pos` is the top-left corner of its square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Pending launch, consumed when the countdown ends
    pub serve: Option<Serve>,
}

impl Ball {
    /// Stationary ball centered in a `width` x `height` field
    pub fn centered(width: f32, height: f32, size: f32, serve: Serve) -> Self {
        Self {
            pos: Vec2::new(width / 2.0 - size / 2.0, height / 2.0 - size / 2.0),
            vel: Vec2::ZERO,
            size,
            serve: Some(serve),
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }
}

/// Player input for one paddle this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleCommand {
    #[default]
    Idle,
    Up,
    Down,
}

impl PaddleCommand {
    fn sign(self) -> f32 {
        match self {
            PaddleCommand::Idle => 0.0,
            PaddleCommand::Up => -1.0,
            PaddleCommand::Down => 1.0,
        }
    }
}

/// A paddle. Only `pos.y` moves; `pos.x` is anchored per side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle for `side`, vertically centered
    pub fn new(side: Side, config: &MatchConfig) -> Self {
        let x = match side {
            Side::Left => config.left_paddle_x,
            Side::Right => config.right_paddle_x(),
        };
        Self {
            side,
            pos: Vec2::new(x, config.screen_height / 2.0 - config.paddle_height / 2.0),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    /// Apply one frame of input, staying inside `[0, screen_height - height]`
    pub fn steer(&mut self, command: PaddleCommand, speed: f32, dt: f32, screen_height: f32) {
        self.pos.y += command.sign() * speed * dt;
        self.clamp_to(screen_height);
    }

    pub fn clamp_to(&mut self, screen_height: f32) {
        let max_y = (screen_height - self.height).max(0.0);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }
}

/// Things that happened during a tick, for audio and UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball placed at center, countdown shows its start value
    RoundStarted { countdown: i32 },
    /// Countdown stepped to a positive value
    CountdownTick(i32),
    /// Countdown reached zero (final flash)
    CountdownFinal,
    /// Ball released
    Launched,
    PaddleHit(Side),
    WallHit,
    Scored { scorer: Side },
    MatchOver { winner: Side },
}
