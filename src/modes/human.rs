use std::io::{stderr, Stderr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::interval;

use crate::audio::AudioCue;
use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// Interactive play: one cooperative loop driving update, draw and movement
/// at the configured tick rate.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, audio: Arc<dyn AudioCue>) -> Self {
        let mut engine = GameEngine::new(config, audio);
        let state = engine.reset();

        Self {
            engine,
            state,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_millis(1000 / u64::from(self.engine.config().tick_rate));
        let mut tick_timer = interval(tick_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // One game tick: update, draw, then the draw-phase movement
                _ = tick_timer.tick() => {
                    self.tick(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    // Committed immediately, read once per tick by the
                    // movement step
                    self.engine.steer(&mut self.state, direction);
                }
                KeyAction::Restart => {
                    self.restart_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// One tick. Update evaluates the head placed by the previous tick's
    /// movement; the movement for the next tick runs after the frame is
    /// drawn. This ordering carries the grow-on-food mechanic.
    fn tick(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let outcome = self.engine.update(&mut self.state);

        if outcome.collision.is_some() {
            self.stats.on_game_over();
            self.stats.on_game_start();
            info!(
                "game over: score {}, highscore {}, games played {}",
                outcome.final_score.unwrap_or(0),
                self.engine.highscore(),
                self.stats.games_played
            );
        }

        self.stats.update();
        terminal
            .draw(|frame| {
                self.renderer.render(
                    frame,
                    self.engine.config(),
                    &self.state,
                    self.engine.highscore(),
                    &self.stats,
                );
            })
            .context("Failed to draw frame")?;

        self.engine.advance(&mut self.state);
        Ok(())
    }

    fn restart_game(&mut self) {
        self.state = self.engine.reset();
        self.stats.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentCue;

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default(), Arc::new(SilentCue));
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.snake.len(), 5);
    }

    #[test]
    fn test_restart_resets_game() {
        let mut mode = HumanMode::new(GameConfig::default(), Arc::new(SilentCue));
        mode.state.score = 10;
        mode.restart_game();
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.snake.len(), 5);
    }
}
