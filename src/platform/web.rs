//! Browser bindings
//!
//! The page's engine owns rendering, input and the frame loop. It creates a
//! `WebMatch`, forwards key state and frame time, and reads positions and
//! display strings back each frame.

use wasm_bindgen::prelude::*;

use crate::audio::{SoundBoard, WebAudio};
use crate::settings::{PreferenceStore, Preferences};
use crate::sim::{MatchState, PaddleCommand, RoundPhase, Side, TickInput};
use crate::tuning::MatchConfig;

/// `PreferenceStore` backed by `window.localStorage`
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - using default preferences");
        }
        Self { storage }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    super::init_logging();
    log::info!("Duo Pong core loaded");
}

fn command(direction: i32) -> PaddleCommand {
    match direction.signum() {
        -1 => PaddleCommand::Up,
        1 => PaddleCommand::Down,
        _ => PaddleCommand::Idle,
    }
}

/// A match driven from JavaScript
#[wasm_bindgen]
pub struct WebMatch {
    state: MatchState,
    sound: SoundBoard<WebAudio>,
    prefs: Preferences,
    input: TickInput,
}

#[wasm_bindgen]
impl WebMatch {
    /// `config_json` may be a partial `MatchConfig`; bad JSON falls back to
    /// defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, width: f32, height: f32) -> WebMatch {
        let mut config = match config_json.as_deref().map(MatchConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("Invalid match config ({}), using defaults", e);
                MatchConfig::default()
            }
            None => MatchConfig::default(),
        };
        config.screen_width = width;
        config.screen_height = height;

        let seed = js_sys::Date::now() as u64;
        let prefs = Preferences::load(&LocalStorage::new());
        let mut state = MatchState::new(config, seed);
        state.start();
        log::info!(
            "Match started with seed {} ({})",
            seed,
            state.config.game_mode.as_str()
        );

        WebMatch {
            state,
            sound: SoundBoard::new(WebAudio::new()),
            prefs,
            input: TickInput::default(),
        }
    }

    /// One frame: `dt` in seconds
    pub fn tick(&mut self, dt: f32) {
        self.state.tick(&self.input, dt);
        self.input.restart = false;

        self.sound.update(dt);
        let events = self.state.drain_events();
        self.sound.handle_all(&events);
    }

    /// `direction`: -1 up, 1 down, 0 stop
    pub fn set_left_paddle(&mut self, direction: i32) {
        self.input.left = command(direction);
    }

    pub fn set_right_paddle(&mut self, direction: i32) {
        self.input.right = command(direction);
    }

    /// Rematch on the next frame. Ignored while the match is still being
    /// played; use `restart` for that.
    pub fn request_rematch(&mut self) {
        self.input.restart = true;
    }

    /// Abandon the current match and start a new one right away
    pub fn restart(&mut self) {
        self.state.restart();
    }

    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.state.set_bounds(width, height);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.sound.set_muted(muted);
    }

    // === Read-back for rendering ===

    pub fn has_ball(&self) -> bool {
        self.state.ball.is_some()
    }

    pub fn ball_x(&self) -> f32 {
        self.state.ball.as_ref().map_or(0.0, |b| b.pos.x)
    }

    pub fn ball_y(&self) -> f32 {
        self.state.ball.as_ref().map_or(0.0, |b| b.pos.y)
    }

    pub fn ball_size(&self) -> f32 {
        self.state.config.ball_size
    }

    pub fn left_paddle_y(&self) -> f32 {
        self.state.paddle(Side::Left).pos.y
    }

    pub fn right_paddle_y(&self) -> f32 {
        self.state.paddle(Side::Right).pos.y
    }

    pub fn is_over(&self) -> bool {
        self.state.phase() == RoundPhase::Over
    }

    pub fn is_counting_down(&self) -> bool {
        self.state.phase() == RoundPhase::CountingDown
    }

    pub fn score_line(&self) -> String {
        self.state
            .score_line(&self.prefs.left_name, &self.prefs.right_name)
    }

    pub fn speed_line(&self) -> String {
        self.state.speed_line()
    }

    pub fn countdown_label(&self) -> Option<String> {
        self.state.countdown_label()
    }

    pub fn winner_banner(&self) -> Option<String> {
        self.state
            .winner_banner(&self.prefs.left_name, &self.prefs.right_name)
    }

    pub fn ball_color(&self) -> Vec<u8> {
        self.prefs.ball_color.to_vec()
    }

    pub fn left_paddle_color(&self) -> Vec<u8> {
        self.prefs.left_paddle_color.to_vec()
    }

    pub fn right_paddle_color(&self) -> Vec<u8> {
        self.prefs.right_paddle_color.to_vec()
    }
}
