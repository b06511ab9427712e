//! Frame-driven game session
//!
//! Owns the composition: fixed-step simulation, score persistence and the
//! host bridge. The embedder (browser shell or headless demo) forwards raw
//! events and calls [`Game::frame`] once per display refresh.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::highscore::{self, HighScore};
use crate::platform::{Fetch, HostBridge, Theme};
use crate::sim::{GameState, TickInput, Viewport, jump_direction, tick};
use crate::tuning::Tuning;

pub struct Game<H: HostBridge> {
    pub state: GameState,
    pub input: TickInput,
    theme: Theme,
    high: HighScore,
    high_fetch: Option<Fetch>,
    accumulator: f32,
    host: H,
}

impl<H: HostBridge> Game<H> {
    /// Boot a session: signal the host, pick up its theme and kick off the
    /// stored high-score read.
    pub fn new(host: H, tuning: Tuning, view_w: f32, view_h: f32) -> Self {
        host.ready();
        host.expand_viewport();
        let theme = host.theme();
        let high_fetch = Some(host.fetch_value(highscore::STORAGE_KEY));
        Self {
            state: GameState::new(tuning, Viewport::new(view_w, view_h)),
            input: TickInput::default(),
            theme,
            high: HighScore::new(),
            high_fetch,
            accumulator: 0.0,
            host,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn high_score(&self) -> u32 {
        self.high.best()
    }

    /// Viewport change from the host.
    pub fn on_resize(&mut self, w: f32, h: f32) {
        self.state.resize(w, h);
    }

    /// Pointer/touch activation at canvas x. Queues a wall jump for the next
    /// tick; the screen half picks the direction.
    pub fn on_pointer(&mut self, x: f32) {
        self.input.jump = Some(jump_direction(x, self.state.view.w));
    }

    /// Start and restart commands both funnel here.
    pub fn on_start(&mut self) {
        self.input.start = true;
    }

    /// Run one frame: catch up on fixed-step ticks, then settle scoring.
    /// `dt` is wall-clock seconds since the previous frame.
    pub fn frame(&mut self, dt: f32) {
        self.poll_high_score();

        self.accumulator += dt.min(0.1);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // One-shot inputs are consumed by the first substep
            self.input.start = false;
            self.input.jump = None;
        }

        if self.high.observe(self.state.score) {
            self.host
                .store_value(highscore::STORAGE_KEY, &self.high.encode());
        }
    }

    /// Apply a finished stored-value read, once.
    fn poll_high_score(&mut self) {
        let Some(fetch) = &self.high_fetch else { return };
        if let Some(raw) = fetch.take() {
            self.high.apply_stored(raw.as_deref());
            self.high_fetch = None;
        }
    }

    /// HUD line shown while playing.
    pub fn score_line(&self) -> String {
        format!(
            "Score: {} | High Score: {}",
            self.state.score,
            self.high.best()
        )
    }

    /// Line for the game-over overlay.
    pub fn final_score_line(&self) -> String {
        format!("{} (High Score: {})", self.state.score, self.high.best())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::highscore;
    use crate::platform::MemoryHost;
    use crate::sim::GamePhase;
    use crate::tuning::TuningPreset;

    fn classic() -> Tuning {
        Tuning::preset(TuningPreset::Classic)
    }

    fn run_until_game_over(game: &mut Game<MemoryHost>) {
        for _ in 0..3000 {
            game.frame(SIM_DT);
            if game.state.phase == GamePhase::GameOver {
                return;
            }
        }
        panic!("run never ended");
    }

    #[test]
    fn test_fresh_start_places_player_bottom_center() {
        let mut game = Game::new(MemoryHost::new(), classic(), 400.0, 800.0);
        game.on_start();
        game.frame(SIM_DT);

        assert_eq!(game.state.phase, GamePhase::Playing);
        let player = &game.state.player;
        assert_eq!(player.pos.x, (400.0 - player.size.x) / 2.0);
        assert!(player.pos.y >= 650.0 && player.pos.y <= 700.0);
    }

    #[test]
    fn test_fall_through_ends_run_exactly_once() {
        let mut game = Game::new(MemoryHost::new(), classic(), 400.0, 800.0);
        game.on_start();
        game.frame(SIM_DT);

        let mut transitions = 0;
        let mut last = game.state.phase;
        for _ in 0..3000 {
            game.frame(SIM_DT);
            if game.state.phase != last {
                transitions += 1;
                last = game.state.phase;
            }
        }
        assert_eq!(game.state.phase, GamePhase::GameOver);
        assert_eq!(transitions, 1);

        game.on_start();
        game.frame(SIM_DT);
        assert_eq!(game.state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_prior_high_score_visible_before_any_input() {
        let host = MemoryHost::new().seed(highscore::STORAGE_KEY, "50");
        let mut game = Game::new(host, classic(), 400.0, 800.0);
        game.frame(0.0);
        assert_eq!(game.high_score(), 50);
        assert_eq!(game.score_line(), "Score: 0 | High Score: 50");
    }

    #[test]
    fn test_low_run_does_not_overwrite_high_score() {
        let host = MemoryHost::new().seed(highscore::STORAGE_KEY, "50");
        let mut game = Game::new(host, classic(), 400.0, 800.0);
        game.on_start();
        run_until_game_over(&mut game);

        // A free-fall run tops out well below the stored best
        assert!(game.state.score < 50);
        assert_eq!(game.high_score(), 50);
        assert_eq!(
            game.host().stored(highscore::STORAGE_KEY).as_deref(),
            Some("50")
        );
    }

    #[test]
    fn test_new_best_is_persisted() {
        let mut game = Game::new(MemoryHost::new(), classic(), 400.0, 800.0);
        game.on_start();
        game.frame(SIM_DT);

        // Start height alone puts the first run's score on the board
        assert!(game.state.score > 0);
        assert_eq!(
            game.host().stored(highscore::STORAGE_KEY).as_deref(),
            Some(game.high_score().to_string().as_str())
        );
    }

    #[test]
    fn test_malformed_stored_value_falls_back_to_zero() {
        let host = MemoryHost::new().seed(highscore::STORAGE_KEY, "not-a-number");
        let mut game = Game::new(host, classic(), 400.0, 800.0);
        game.frame(0.0);
        assert_eq!(game.high_score(), 0);
    }

    #[test]
    fn test_pointer_queues_jump_for_next_tick() {
        let mut game = Game::new(MemoryHost::new(), classic(), 400.0, 800.0);
        game.on_pointer(30.0);
        assert_eq!(game.input.jump, Some(-1.0));
        game.on_pointer(370.0);
        assert_eq!(game.input.jump, Some(1.0));

        // Consumed by the next frame's first substep
        game.frame(SIM_DT);
        assert_eq!(game.input.jump, None);
    }

    #[test]
    fn test_resize_flows_into_state() {
        let mut game = Game::new(MemoryHost::new(), classic(), 400.0, 800.0);
        game.on_resize(640.0, 960.0);
        assert_eq!(game.state.view, Viewport::new(640.0, 960.0));
        game.on_resize(0.0, 0.0);
        assert_eq!(game.state.view, Viewport::new(640.0, 960.0));
    }
}
