//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame time comes in through `tick`, nothing reads a clock
//! - Seeded RNG only
//! - Fixed stage order inside a frame
//! - No rendering, audio or platform dependencies (those react to `GameEvent`s)

pub mod collision;
pub mod countdown;
pub mod rules;
pub mod score;
pub mod state;
pub mod tick;
pub mod walls;

pub use collision::{PaddleHit, bounce_angle, paddle_overlap, resolve_paddle_hit};
pub use countdown::{CountdownStep, CountdownTimer, RoundController, draw_serve};
pub use rules::{Verdict, evaluate, evaluate_with};
pub use score::{ScoreBoard, format_score_line, format_speed, winner_banner};
pub use state::{Ball, GameEvent, Paddle, PaddleCommand, RoundPhase, Serve, Side};
pub use tick::{MatchState, TickInput, autopilot};
pub use walls::{Wall, clamp_to_field, resolve_bottom_wall, resolve_top_wall, wall_contact};
