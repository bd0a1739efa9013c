//! Between-round countdown
//!
//! Round lifecycle: `Idle -> CountingDown -> Active -> (point) -> CountingDown ...`
//! and `Active -> Over` once a winner is decided. The ball sits frozen at the
//! center while counting down and is released on the tick after the final
//! flash (3, 2, 1, 0, go).

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Ball, RoundPhase, Serve};
use crate::launch_velocity;
use crate::tuning::MatchConfig;

/// Countdown value plus the time accumulated toward its next step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountdownTimer {
    pub value: i32,
    pub elapsed: f32,
}

/// What a countdown update did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountdownStep {
    /// Not counting, or the interval has not elapsed yet
    Waiting,
    /// Stepped to a positive value
    Counted(i32),
    /// Stepped to zero
    FinalFlash,
    /// Stepped past zero: the ball was launched and the round is live
    Launched,
}

/// Owns the round phase and the countdown
#[derive(Debug, Clone, PartialEq)]
pub struct RoundController {
    phase: RoundPhase,
    timer: CountdownTimer,
    start_value: i32,
    interval: f32,
}

impl RoundController {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            phase: RoundPhase::Idle,
            timer: CountdownTimer {
                value: config.countdown_start,
                elapsed: 0.0,
            },
            start_value: config.countdown_start,
            interval: config.countdown_interval,
        }
    }

    #[inline]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[inline]
    pub fn timer(&self) -> CountdownTimer {
        self.timer
    }

    /// Digit to display, while counting down
    pub fn label(&self) -> Option<String> {
        (self.phase == RoundPhase::CountingDown && self.timer.value >= 0)
            .then(|| self.timer.value.to_string())
    }

    /// Freeze a fresh ball at the center and start counting down.
    ///
    /// Ignored while a countdown is already running, and once the match is
    /// over. Returns whether a round was started.
    pub fn start_round<R: Rng + ?Sized>(
        &mut self,
        ball: &mut Option<Ball>,
        config: &MatchConfig,
        rng: &mut R,
    ) -> bool {
        if matches!(self.phase, RoundPhase::CountingDown | RoundPhase::Over) {
            return false;
        }

        self.timer = CountdownTimer {
            value: self.start_value,
            elapsed: 0.0,
        };

        let serve = draw_serve(rng, config);
        *ball = Some(Ball::centered(
            config.screen_width,
            config.screen_height,
            config.ball_size,
            serve,
        ));

        self.phase = RoundPhase::CountingDown;
        log::debug!(
            "Round start: direction {}, angle {:.3} rad",
            serve.direction,
            serve.angle
        );
        true
    }

    /// Advance the countdown by `dt`; launches `ball` at `speed` on the step
    /// past zero.
    pub fn advance(&mut self, dt: f32, ball: Option<&mut Ball>, speed: f32) -> CountdownStep {
        if self.phase != RoundPhase::CountingDown {
            return CountdownStep::Waiting;
        }

        self.timer.elapsed += dt;
        if self.timer.elapsed < self.interval {
            return CountdownStep::Waiting;
        }

        self.timer.elapsed = 0.0;
        self.timer.value -= 1;

        match self.timer.value {
            v if v > 0 => CountdownStep::Counted(v),
            0 => CountdownStep::FinalFlash,
            _ => {
                if let Some(ball) = ball {
                    launch(ball, speed);
                }
                self.phase = RoundPhase::Active;
                CountdownStep::Launched
            }
        }
    }

    /// Winner decided: nothing moves until `reset`
    pub fn finish_match(&mut self) {
        self.phase = RoundPhase::Over;
    }

    /// Back to `Idle` with a full countdown
    pub fn reset(&mut self) {
        self.phase = RoundPhase::Idle;
        self.timer = CountdownTimer {
            value: self.start_value,
            elapsed: 0.0,
        };
    }
}

/// Uniform launch draw: fair coin for direction, angle in
/// `[-launch_angle_offset, bounce_angle_range - launch_angle_offset)`.
pub fn draw_serve<R: Rng + ?Sized>(rng: &mut R, config: &MatchConfig) -> Serve {
    let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let angle = rng.random::<f32>() * config.bounce_angle_range - config.launch_angle_offset;
    Serve { direction, angle }
}

/// Consume the ball's pending serve
fn launch(ball: &mut Ball, speed: f32) {
    if let Some(serve) = ball.serve.take() {
        ball.vel = launch_velocity(serve.angle, serve.direction, speed);
    }
}
