//! Per-frame match step
//!
//! `MatchState` owns everything that changes during a match. The engine calls
//! `tick` once per frame; within a frame the order is always countdown,
//! paddles and ball movement, paddle hits, walls, then scoring.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{paddle_overlap, resolve_paddle_hit};
use super::countdown::{CountdownStep, CountdownTimer, RoundController};
use super::rules::{Verdict, evaluate_with};
use super::score::{ScoreBoard, format_score_line, format_speed, winner_banner};
use super::state::{Ball, GameEvent, Paddle, PaddleCommand, RoundPhase, Side};
use super::walls::{Wall, clamp_to_field, resolve_bottom_wall, resolve_top_wall, wall_contact};
use crate::tuning::MatchConfig;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: PaddleCommand,
    pub right: PaddleCommand,
    /// Rematch request: only acted on once the match is over, ignored
    /// mid-match. `MatchState::restart` restarts unconditionally.
    pub restart: bool,
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchState<R = Pcg32> {
    pub config: MatchConfig,
    pub score: ScoreBoard,
    /// Absent until the first round is started
    pub ball: Option<Ball>,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    rounds: RoundController,
    /// Rally speed: launch speed of the next serve, raised by paddle hits
    ball_speed: f32,
    /// Seconds until the next paddle hit may be handled
    collision_cooldown: f32,
    winner: Option<Side>,
    events: Vec<GameEvent>,
    rng: R,
}

impl MatchState<Pcg32> {
    /// New match with a seeded RNG (same seed, same serves)
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> MatchState<R> {
    /// New match drawing serves from `rng`
    pub fn with_rng(config: MatchConfig, rng: R) -> Self {
        let config = config.sanitized();
        Self {
            score: ScoreBoard::new(),
            ball: None,
            left_paddle: Paddle::new(Side::Left, &config),
            right_paddle: Paddle::new(Side::Right, &config),
            rounds: RoundController::new(&config),
            ball_speed: config.initial_speed,
            collision_cooldown: 0.0,
            winner: None,
            events: Vec::new(),
            rng,
            config,
        }
    }

    #[inline]
    pub fn phase(&self) -> RoundPhase {
        self.rounds.phase()
    }

    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[inline]
    pub fn countdown(&self) -> CountdownTimer {
        self.rounds.timer()
    }

    #[inline]
    pub fn ball_speed(&self) -> f32 {
        self.ball_speed
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    /// Hand over the events collected since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Kick off the first round. Only acts while `Idle`.
    pub fn start(&mut self) {
        if self.phase() == RoundPhase::Idle {
            self.begin_round();
        }
    }

    /// Throw the current match away and start a new one
    pub fn restart(&mut self) {
        self.score.reset();
        self.ball = None;
        self.left_paddle = Paddle::new(Side::Left, &self.config);
        self.right_paddle = Paddle::new(Side::Right, &self.config);
        self.ball_speed = self.config.initial_speed;
        self.collision_cooldown = 0.0;
        self.winner = None;
        self.rounds.reset();
        log::info!("Match restarted ({})", self.config.game_mode.as_str());
        self.begin_round();
    }

    /// Playfield resized: re-anchor the right paddle and keep both in bounds
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.config.screen_width = width;
        self.config.screen_height = height;
        self.right_paddle.pos.x = self.config.right_paddle_x();
        self.left_paddle.clamp_to(height);
        self.right_paddle.clamp_to(height);
    }

    /// Advance the match by one frame of `dt` seconds
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        // Bad caps and NaN frames collapse to 0 instead of panicking
        let dt = dt.max(0.0).min(self.config.max_frame_dt.max(0.0));

        if self.phase() == RoundPhase::Over {
            if input.restart {
                self.restart();
            }
            return;
        }

        let (speed, height) = (self.config.paddle_speed, self.config.screen_height);
        self.left_paddle.steer(input.left, speed, dt, height);
        self.right_paddle.steer(input.right, speed, dt, height);

        self.update_countdown(dt);

        if self.phase() != RoundPhase::Active {
            return;
        }

        if self.collision_cooldown > 0.0 {
            self.collision_cooldown -= dt;
        }

        let Some(ball) = self.ball.as_mut() else {
            return;
        };
        ball.pos += ball.vel * dt;

        self.check_paddles();
        self.check_walls();
        self.check_goal();
    }

    // === Frame stages ===

    fn update_countdown(&mut self, dt: f32) {
        match self.rounds.advance(dt, self.ball.as_mut(), self.ball_speed) {
            CountdownStep::Waiting => {}
            CountdownStep::Counted(n) => {
                log::debug!("Countdown {}", n);
                self.events.push(GameEvent::CountdownTick(n));
            }
            CountdownStep::FinalFlash => {
                log::debug!("Countdown 0");
                self.events.push(GameEvent::CountdownFinal);
            }
            CountdownStep::Launched => {
                self.collision_cooldown = 0.0;
                self.events.push(GameEvent::Launched);
            }
        }
    }

    fn check_paddles(&mut self) {
        if self.collision_cooldown > 0.0 {
            return;
        }
        let Some(ball) = self.ball.as_mut() else {
            return;
        };

        for paddle in [&self.left_paddle, &self.right_paddle] {
            let outgoing = paddle.side.return_direction();
            if !paddle_overlap(ball, paddle, -outgoing) {
                continue;
            }
            let hit = resolve_paddle_hit(
                ball,
                paddle,
                outgoing,
                self.config.bounce_angle_range,
                self.config.speed_increment,
                self.config.collision_offset,
            );
            log::debug!(
                "{:?} paddle hit: angle {:.3}, speed {:.1} -> {:.1}",
                paddle.side,
                hit.angle,
                hit.speed_before,
                hit.speed_after
            );
            self.ball_speed = hit.speed_after;
            self.collision_cooldown = self.config.collision_cooldown;
            self.events.push(GameEvent::PaddleHit(paddle.side));
        }
    }

    fn check_walls(&mut self) {
        let Some(ball) = self.ball.as_mut() else {
            return;
        };
        let height = self.config.screen_height;

        match wall_contact(ball, height, self.config.wall_thickness) {
            Some(Wall::Top) => {
                resolve_top_wall(ball);
                self.events.push(GameEvent::WallHit);
            }
            Some(Wall::Bottom) => {
                resolve_bottom_wall(ball, height);
                self.events.push(GameEvent::WallHit);
            }
            None => {}
        }

        // Silent backstop for a ball that skipped the band in one frame
        clamp_to_field(ball, height);
    }

    fn check_goal(&mut self) {
        let Some(ball) = self.ball.as_ref() else {
            return;
        };
        let exit = if ball.pos.x < 0.0 {
            Side::Left
        } else if ball.pos.x > self.config.screen_width {
            Side::Right
        } else {
            return;
        };
        self.award_point(exit);
    }

    fn award_point(&mut self, exit: Side) {
        let scorer = self.score.record_exit(exit);
        self.events.push(GameEvent::Scored { scorer });
        log::info!(
            "{:?} scores: {} - {}",
            scorer,
            self.score.left,
            self.score.right
        );

        match evaluate_with(&self.score, &self.config) {
            Verdict::Won(winner) => {
                self.winner = Some(winner);
                self.rounds.finish_match();
                self.events.push(GameEvent::MatchOver { winner });
                log::info!(
                    "Match over: {:?} wins {} - {}",
                    winner,
                    self.score.left,
                    self.score.right
                );
            }
            Verdict::InPlay => {
                self.ball_speed = self.config.initial_speed;
                self.begin_round();
            }
        }
    }

    fn begin_round(&mut self) {
        if self
            .rounds
            .start_round(&mut self.ball, &self.config, &mut self.rng)
        {
            self.collision_cooldown = 0.0;
            self.events.push(GameEvent::RoundStarted {
                countdown: self.rounds.timer().value,
            });
        }
    }

    // === Display ===

    pub fn score_line(&self, left_name: &str, right_name: &str) -> String {
        format_score_line(left_name, self.score.left, self.score.right, right_name)
    }

    /// Speed readout; uses the live velocity when the ball is moving
    pub fn speed_line(&self) -> String {
        let live = self.ball.as_ref().map(Ball::speed).unwrap_or(0.0);
        let speed = if live > 0.0 { live } else { self.ball_speed };
        format_speed(speed, self.config.initial_speed)
    }

    pub fn countdown_label(&self) -> Option<String> {
        self.rounds.label()
    }

    /// Winner announcement once the match is over
    pub fn winner_banner(&self, left_name: &str, right_name: &str) -> Option<String> {
        self.winner.map(|side| match side {
            Side::Left => winner_banner(left_name),
            Side::Right => winner_banner(right_name),
        })
    }
}

/// Simple tracking controller for a paddle: follows the ball while it is
/// coming toward `side`, drifts back to the middle otherwise.
pub fn autopilot<R>(state: &MatchState<R>, side: Side) -> PaddleCommand {
    const DEAD_ZONE: f32 = 8.0;

    let paddle = match side {
        Side::Left => &state.left_paddle,
        Side::Right => &state.right_paddle,
    };
    let incoming = |ball: &Ball| ball.vel.x * side.return_direction() < 0.0;
    let target = match state.ball.as_ref() {
        Some(ball) if incoming(ball) => ball.center_y(),
        _ => state.config.screen_height / 2.0,
    };

    let delta = target - paddle.center_y();
    if delta > DEAD_ZONE {
        PaddleCommand::Down
    } else if delta < -DEAD_ZONE {
        PaddleCommand::Up
    } else {
        PaddleCommand::Idle
    }
}
