use duo_pong::audio::{SoundBoard, Tone, ToneSink};
use duo_pong::sim::{
    GameEvent, MatchState, PaddleCommand, RoundPhase, ScoreBoard, Side, TickInput, autopilot,
};
use duo_pong::{GameMode, MatchConfig};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn config(mode: GameMode) -> MatchConfig {
    MatchConfig {
        game_mode: mode,
        max_frame_dt: 1.0,
        ..MatchConfig::default()
    }
}

/// Run the countdown out with whole-second frames, recording what the
/// countdown shows after each one
fn run_countdown(state: &mut MatchState) -> Vec<Option<String>> {
    let mut labels = Vec::new();
    for _ in 0..3 {
        state.tick(&TickInput::default(), 1.0);
        labels.push(state.countdown_label());
    }
    // Small launch frame so the ball stays near the center
    state.tick(&TickInput::default(), 0.5);
    state.tick(&TickInput::default(), 0.5);
    labels.push(state.countdown_label());
    labels
}

#[test]
fn test_countdown_then_launch_at_initial_speed() {
    let mut state = MatchState::new(config(GameMode::FixedScore), 42);
    state.start();
    assert_eq!(state.countdown_label().as_deref(), Some("3"));

    let labels = run_countdown(&mut state);
    assert_eq!(
        labels,
        vec![
            Some("2".to_string()),
            Some("1".to_string()),
            Some("0".to_string()),
            None
        ]
    );
    assert_eq!(state.phase(), RoundPhase::Active);

    let ball = state.ball.as_ref().expect("ball exists once a round starts");
    assert!((ball.speed() - state.config.initial_speed).abs() < 1e-2);
}

#[test]
fn test_match_point_ends_match() {
    let mut state = MatchState::new(config(GameMode::FixedScore), 42);
    state.start();
    run_countdown(&mut state);
    state.drain_events();

    state.score = ScoreBoard { left: 4, right: 4 };
    let ball = state.ball.as_mut().unwrap();
    ball.pos = Vec2::new(2.0, 120.0);
    ball.vel = Vec2::new(-600.0, 0.0);

    state.tick(&TickInput::default(), DT);

    assert_eq!(state.score, ScoreBoard { left: 4, right: 5 });
    assert_eq!(state.phase(), RoundPhase::Over);
    assert_eq!(state.winner(), Some(Side::Right));
    assert_eq!(
        state.drain_events(),
        vec![
            GameEvent::Scored {
                scorer: Side::Right
            },
            GameEvent::MatchOver {
                winner: Side::Right
            },
        ]
    );

    let resting = state.ball.clone();
    for _ in 0..120 {
        state.tick(&TickInput::default(), DT);
    }
    assert_eq!(state.ball, resting);
    assert!(state.drain_events().is_empty());
}

#[test]
fn test_lead_by_three_match() {
    let mut state = MatchState::new(config(GameMode::LeadByThree), 7);
    state.start();
    run_countdown(&mut state);

    // 5-3 would end a FixedScore match, not this one
    state.score = ScoreBoard { left: 5, right: 3 };
    let ball = state.ball.as_mut().unwrap();
    ball.pos = Vec2::new(state.config.screen_width - 1.0, 120.0);
    ball.vel = Vec2::new(600.0, 0.0);
    state.tick(&TickInput::default(), DT);

    assert_eq!(state.score, ScoreBoard { left: 6, right: 3 });
    assert_eq!(state.phase(), RoundPhase::Over);
    assert_eq!(state.winner(), Some(Side::Left));
}

#[test]
fn test_seeded_match_plays_to_a_winner() {
    #[derive(Default)]
    struct Count(usize);
    impl ToneSink for Count {
        fn play(&mut self, _tone: &Tone) {
            self.0 += 1;
        }
    }

    let mut state = MatchState::new(MatchConfig::default(), 2024);
    let mut sound = SoundBoard::new(Count::default());
    state.start();

    let mut frames = 0;
    let mut points = 0;
    while state.phase() != RoundPhase::Over && frames < 60 * 60 * 20 {
        let input = TickInput {
            left: autopilot(&state, Side::Left),
            right: PaddleCommand::Idle,
            restart: false,
        };
        state.tick(&input, DT);
        sound.update(DT);
        let events = state.drain_events();
        points += events
            .iter()
            .filter(|e| matches!(e, GameEvent::Scored { .. }))
            .count();
        sound.handle_all(&events);
        frames += 1;

        if let Some(ball) = state.ball.as_ref() {
            assert!(ball.pos.y >= 0.0);
            assert!(ball.pos.y + ball.size <= state.config.screen_height);
        }
    }

    assert_eq!(state.phase(), RoundPhase::Over);
    let winner = state.winner().unwrap();
    assert_eq!(state.score.get(winner), state.config.win_score);
    assert_eq!(points as u32, state.score.left + state.score.right);
    assert!(sound.sink().0 > 0);
}

#[test]
fn test_restart_is_complete() {
    let mut state = MatchState::new(config(GameMode::FixedScore), 5);
    state.start();
    run_countdown(&mut state);
    state.score = ScoreBoard { left: 3, right: 2 };
    state.left_paddle.pos.y = 0.0;

    state.restart();

    assert_eq!(state.score, ScoreBoard::default());
    assert_eq!(state.phase(), RoundPhase::CountingDown);
    assert_eq!(state.countdown().value, state.config.countdown_start);
    assert_eq!(state.countdown().elapsed, 0.0);
    assert_eq!(state.ball_speed(), state.config.initial_speed);
    assert_eq!(state.ball.as_ref().unwrap().vel, Vec2::ZERO);
    assert_eq!(
        state.left_paddle.pos.y,
        state.config.screen_height / 2.0 - state.config.paddle_height / 2.0
    );
}
