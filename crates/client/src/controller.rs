//! Owns the live session and turns key actions into session transitions.
use rand::{RngCore, SeedableRng, rngs::StdRng};
use twenty48_core::{
    Direction, GameConfig, GameEnv, GameSession, LevelUpTicket, PcgRng, SessionEvents,
};

use crate::input::KeyAction;
use crate::storage::HighScoreStore;

/// What the event loop should do after a key action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing changed; no redraw needed.
    Ignored,
    /// The session changed and should be redrawn.
    Updated,
    /// The session changed and a level-up must be completed after the
    /// ticket's delay.
    LevelUpScheduled(LevelUpTicket),
    Quit,
}

pub struct GameController<S> {
    config: GameConfig,
    rng: PcgRng,
    seeds: StdRng,
    store: S,
    session: GameSession,
}

impl<S: HighScoreStore> GameController<S> {
    /// Starts a first-level game using the stored high score.
    ///
    /// With a `seed`, the sequence of games is reproducible; without one,
    /// game seeds are drawn from OS entropy.
    pub fn new(config: GameConfig, store: S, seed: Option<u64>) -> Self {
        let mut seeds = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let high_score = store.load().unwrap_or_else(|err| {
            tracing::warn!("Failed to load high score: {}", err);
            0
        });

        let rng = PcgRng;
        let game_seed = seeds.next_u64();
        let session = GameSession::new(GameEnv::new(&config, &rng), game_seed, high_score);

        Self {
            config,
            rng,
            seeds,
            store,
            session,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dispatch(&mut self, action: KeyAction) -> Dispatch {
        match action {
            KeyAction::Quit => Dispatch::Quit,
            KeyAction::Move(direction) => self.apply_move(direction),
            KeyAction::NewGame => {
                let game_seed = self.seeds.next_u64();
                self.session = self.session.new_game(self.env(), game_seed);
                Dispatch::Updated
            }
            KeyAction::NextLevel => match self.session.skip_level(self.env()) {
                Some(next) => {
                    self.session = next;
                    Dispatch::Updated
                }
                None => Dispatch::Ignored,
            },
            KeyAction::None => Dispatch::Ignored,
        }
    }

    /// Completes a scheduled level-up; returns false for stale tickets.
    pub fn complete_level_up(&mut self, ticket: LevelUpTicket) -> bool {
        match self.session.complete_level_up(ticket, self.env()) {
            Some(next) => {
                self.session = next;
                true
            }
            None => false,
        }
    }

    fn apply_move(&mut self, direction: Direction) -> Dispatch {
        let transition = self.session.apply(direction, self.env());
        if !transition.changed() {
            return Dispatch::Ignored;
        }

        self.session = transition.session;
        if transition.events.contains(SessionEvents::NEW_HIGH_SCORE) {
            self.persist_high_score();
        }

        match transition.level_up {
            Some(ticket) => Dispatch::LevelUpScheduled(ticket),
            None => Dispatch::Updated,
        }
    }

    fn persist_high_score(&self) {
        if let Err(err) = self.store.save(self.session.high_score()) {
            tracing::warn!("Failed to save high score: {}", err);
        }
    }

    fn env(&self) -> GameEnv<'_> {
        GameEnv::new(&self.config, &self.rng)
    }
}
