//! Pure session transitions: moves, level progression, and new games.

use bitflags::bitflags;

use super::{BoardStatus, SpawnRoll, SpawnedTile, apply_move};
use crate::action::Direction;
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{Board, GameSession, Level, LevelUpTicket};

bitflags! {
    /// What happened during a session transition.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SessionEvents: u8 {
        const MOVED              = 1 << 0;
        const SCORED             = 1 << 1;
        const NEW_HIGH_SCORE     = 1 << 2;
        const WON                = 1 << 3;
        const GAME_OVER          = 1 << 4;
        const LEVEL_UP_SCHEDULED = 1 << 5;
    }
}

/// New session plus a summary of how it differs from the previous one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionTransition {
    pub session: GameSession,
    pub events: SessionEvents,
    pub points: u64,
    pub spawned: Option<SpawnedTile>,
    /// Set when this move scheduled a level change; the caller waits
    /// `delay_ms` and then hands the ticket to [`GameSession::complete_level_up`].
    pub level_up: Option<LevelUpTicket>,
}

impl SessionTransition {
    fn unchanged(session: GameSession) -> Self {
        Self {
            session,
            events: SessionEvents::empty(),
            points: 0,
            spawned: None,
            level_up: None,
        }
    }

    pub fn changed(&self) -> bool {
        self.events.contains(SessionEvents::MOVED)
    }
}

/// Applies one directional input to `session`, returning the next session.
pub fn apply_session(
    session: &GameSession,
    direction: Direction,
    env: GameEnv<'_>,
) -> SessionTransition {
    session.apply(direction, env)
}

impl GameSession {
    /// Starts a first-level game.
    pub fn new(env: GameEnv<'_>, game_seed: u64, high_score: u64) -> Self {
        let session = Self::start(env, Level::One, game_seed, 0, 0, high_score);
        tracing::info!(game_seed, high_score, "new game");
        session
    }

    /// Abandons this game for a fresh first-level one.
    ///
    /// The high score carries over; any pending level-up is invalidated.
    pub fn new_game(&self, env: GameEnv<'_>, game_seed: u64) -> Self {
        let session = Self::start(
            env,
            Level::One,
            game_seed,
            0,
            self.epoch + 1,
            self.high_score,
        );
        tracing::info!(game_seed, epoch = session.epoch, "new game");
        session
    }

    /// See [`apply_session`].
    pub fn apply(&self, direction: Direction, env: GameEnv<'_>) -> SessionTransition {
        let roll = SpawnRoll::new(self.game_seed, self.nonce, 0);
        let outcome = apply_move(&self.board, direction, env, roll);
        if !outcome.changed {
            return SessionTransition::unchanged(self.clone());
        }

        let mut next = self.clone();
        let mut events = SessionEvents::MOVED;
        next.board = outcome.board;
        next.nonce += 1;

        if outcome.points > 0 {
            next.score = next.score.saturating_add(outcome.points);
            events |= SessionEvents::SCORED;
        }
        if next.score > next.high_score {
            next.high_score = next.score;
            events |= SessionEvents::NEW_HIGH_SCORE;
        }
        if outcome.status.contains(BoardStatus::WIN_TILE) && !next.won {
            next.won = true;
            events |= SessionEvents::WON;
            tracing::info!(score = next.score, "win tile reached");
        }
        if outcome.status.contains(BoardStatus::GAME_OVER) {
            next.game_over = true;
            events |= SessionEvents::GAME_OVER;
            tracing::info!(score = next.score, "no moves left");
        }

        let mut level_up = None;
        if outcome.status.contains(BoardStatus::LEVEL_UP_TILE) && next.pending_level_up.is_none() {
            if let Some(target) = next.level.next() {
                let ticket = LevelUpTicket {
                    epoch: next.epoch,
                    target,
                    delay_ms: env.config().level_up_delay_ms,
                };
                next.pending_level_up = Some(ticket);
                level_up = Some(ticket);
                events |= SessionEvents::LEVEL_UP_SCHEDULED;
                tracing::info!(%target, delay_ms = ticket.delay_ms, "level up scheduled");
            }
        }

        SessionTransition {
            session: next,
            events,
            points: outcome.points,
            spawned: outcome.spawned,
            level_up,
        }
    }

    /// Finishes a delayed level change.
    ///
    /// Returns `None` for tickets this session did not issue or that were
    /// issued before the latest new game or level start.
    pub fn complete_level_up(&self, ticket: LevelUpTicket, env: GameEnv<'_>) -> Option<Self> {
        if self.pending_level_up != Some(ticket) || ticket.epoch != self.epoch {
            tracing::debug!(?ticket, epoch = self.epoch, "ignoring stale level-up ticket");
            return None;
        }
        Some(self.advance_to(ticket.target, env))
    }

    /// Moves straight to the next level without waiting for the level-up tile.
    pub fn skip_level(&self, env: GameEnv<'_>) -> Option<Self> {
        if !self.can_skip_level() {
            return None;
        }
        self.level.next().map(|target| self.advance_to(target, env))
    }

    fn advance_to(&self, level: Level, env: GameEnv<'_>) -> Self {
        let session = Self::start(
            env,
            level,
            self.game_seed,
            self.nonce,
            self.epoch + 1,
            self.high_score,
        );
        tracing::info!(%level, "level started");
        session
    }

    fn start(
        env: GameEnv<'_>,
        level: Level,
        game_seed: u64,
        nonce: u64,
        epoch: u64,
        high_score: u64,
    ) -> Self {
        let mut board = Board::empty(level.board_size());
        let mut roll = SpawnRoll::new(game_seed, nonce, 0);
        for _ in 0..GameConfig::STARTING_TILES {
            board.insert_random_tile(env, roll);
            roll = roll.next_spawn();
        }

        Self {
            board,
            level,
            score: 0,
            high_score,
            won: false,
            game_over: false,
            game_seed,
            nonce: nonce + 1,
            epoch,
            pending_level_up: None,
        }
    }
}
