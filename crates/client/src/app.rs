//! Event loop tying input, the controller, and rendering together.
use std::pin::pin;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::time::{self, Duration, Instant};
use twenty48_core::LevelUpTicket;

use crate::config::ClientConfig;
use crate::controller::{Dispatch, GameController};
use crate::input::key_action;
use crate::presentation::{
    terminal::{self, Tui},
    ui,
};
use crate::storage::{FileHighScoreStore, HighScoreStore};

/// Result of handling one input poll.
enum Tick {
    Idle,
    Redraw,
    Schedule(LevelUpTicket),
    Quit,
}

pub struct App<S> {
    controller: GameController<S>,
    frame_interval: Duration,
}

impl App<FileHighScoreStore> {
    /// Builds the app with the high score kept under the configured data dir.
    pub fn from_config(config: &ClientConfig) -> Self {
        let data_dir = config.resolved_data_dir();
        tracing::info!("Data directory: {}", data_dir.display());

        let store = FileHighScoreStore::new(data_dir);
        let controller = GameController::new(config.game.clone(), store, config.seed);
        Self::new(controller, Duration::from_millis(config.frame_interval_ms))
    }
}

impl<S: HighScoreStore> App<S> {
    pub fn new(controller: GameController<S>, frame_interval: Duration) -> Self {
        Self {
            controller,
            frame_interval,
        }
    }

    /// Takes over the terminal and runs until the player quits.
    pub async fn run(mut self) -> Result<()> {
        tracing::info!("Client starting");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        self.event_loop(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            score = self.controller.session().score(),
            high_score = self.controller.session().high_score(),
            "Client exiting"
        );
        Ok(())
    }

    async fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        // Armed only while a level-up is pending; a stale ticket is rejected
        // by the session when the timer fires.
        let mut level_up = pin!(time::sleep(Duration::ZERO));
        let mut pending: Option<LevelUpTicket> = None;

        loop {
            tokio::select! {
                () = &mut level_up, if pending.is_some() => {
                    if let Some(ticket) = pending.take()
                        && self.controller.complete_level_up(ticket)
                    {
                        self.render(terminal)?;
                    }
                }
                () = time::sleep(self.frame_interval) => {
                    match self.poll_input()? {
                        Tick::Idle => {}
                        Tick::Redraw => self.render(terminal)?,
                        Tick::Schedule(ticket) => {
                            let delay = Duration::from_millis(ticket.delay_ms());
                            level_up.as_mut().reset(Instant::now() + delay);
                            pending = Some(ticket);
                            self.render(terminal)?;
                        }
                        Tick::Quit => break,
                    }
                }
            }
        }

        Ok(())
    }

    fn poll_input(&mut self) -> Result<Tick> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(Tick::Idle);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.handle_key_press(key)),
            Event::Resize(_, _) => Ok(Tick::Redraw),
            _ => Ok(Tick::Idle),
        }
    }

    fn handle_key_press(&mut self, key: KeyEvent) -> Tick {
        match self.controller.dispatch(key_action(key)) {
            Dispatch::Ignored => Tick::Idle,
            Dispatch::Updated => Tick::Redraw,
            Dispatch::LevelUpScheduled(ticket) => Tick::Schedule(ticket),
            Dispatch::Quit => Tick::Quit,
        }
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        ui::render(
            terminal,
            self.controller.session(),
            self.controller.config(),
        )
    }
}
