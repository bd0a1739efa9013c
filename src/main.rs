//! Duo Pong entry point
//!
//! The browser build is driven by the page's engine through
//! `platform::WebMatch`. Natively this runs a headless match between two
//! autopilots and logs how it goes.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use duo_pong::audio::{SilentSink, SoundBoard};
    use duo_pong::settings::{MemoryStore, Preferences};
    use duo_pong::sim::{GameEvent, MatchState, RoundPhase, Side, TickInput, autopilot};
    use duo_pong::{GameMode, MatchConfig, platform};

    /// 60 Hz frames
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Give up after an hour of simulated play
    const MAX_FRAMES: u64 = 60 * 60 * 60;

    platform::init_logging();
    log::info!("Duo Pong (native) starting...");

    // Usage: duo-pong [seed] [fixed_score|lead_by_three]
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);
    let mode = args.next().and_then(|s| {
        let mode = GameMode::from_str(&s);
        if mode.is_none() {
            log::warn!("Unknown game mode '{}'", s);
        }
        mode
    });

    let config = match std::env::var("DUO_PONG_CONFIG") {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(json) => MatchConfig::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Invalid config in {}: {} - using defaults", path, e);
                MatchConfig::default()
            }),
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path, e);
                MatchConfig::default()
            }
        },
        Err(_) => MatchConfig::default(),
    };
    let config = config.or_mode(mode);

    let prefs = Preferences::load(&MemoryStore::new());
    let (left, right) = (prefs.left_name.as_str(), prefs.right_name.as_str());

    let mut state = MatchState::new(config, seed);
    let mut sound = SoundBoard::new(SilentSink);
    log::info!("Match seed {} ({})", seed, state.config.game_mode.as_str());
    state.start();

    let mut frames = 0u64;
    let mut rally_hits = 0u32;
    while state.phase() != RoundPhase::Over && frames < MAX_FRAMES {
        let input = TickInput {
            left: autopilot(&state, Side::Left),
            right: autopilot(&state, Side::Right),
            restart: false,
        };
        state.tick(&input, FRAME_DT);
        frames += 1;

        sound.update(FRAME_DT);
        let events = state.drain_events();
        sound.handle_all(&events);

        for event in &events {
            match event {
                GameEvent::PaddleHit(_) => rally_hits += 1,
                GameEvent::Scored { .. } => {
                    log::info!(
                        "{} | rally of {} hits, {}",
                        state.score_line(left, right),
                        rally_hits,
                        state.speed_line()
                    );
                    rally_hits = 0;
                }
                _ => {}
            }
        }
    }

    let secs = frames as f32 * FRAME_DT;
    let score = state.score_line(left, right);
    match state.winner_banner(left, right) {
        Some(banner) => println!("{} ({}) after {:.1}s", banner, score, secs),
        None => println!("No winner after {:.1}s: {}", secs, score),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::WebMatch, this is just to satisfy the compiler
}
