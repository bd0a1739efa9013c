//! Score keeping and score/speed display strings

use serde::{Deserialize, Serialize};

use super::state::Side;

/// Running match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub left: u32,
    pub right: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit the point for a ball that left the field past `exit_side`.
    /// The other player scores. Returns the scorer.
    pub fn record_exit(&mut self, exit_side: Side) -> Side {
        let scorer = exit_side.opposite();
        match scorer {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
        scorer
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// `"{left_name}: {left} - {right} :{right_name}"`
pub fn format_score_line(left_name: &str, left: u32, right: u32, right_name: &str) -> String {
    format!("{left_name}: {left} - {right} :{right_name}")
}

/// Current speed as a rounded percentage of the launch speed
pub fn format_speed(speed: f32, initial_speed: f32) -> String {
    let pct = if initial_speed > 0.0 {
        (speed / initial_speed * 100.0).round() as i64
    } else {
        0
    };
    format!("Speed: {pct}%")
}

pub fn winner_banner(name: &str) -> String {
    format!("{name} wins!")
}
