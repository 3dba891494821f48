use super::Board;

/// Difficulty stage; decides the board size.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// 3×3 board.
    #[default]
    #[strum(to_string = "1")]
    One,
    /// 4×4 board.
    #[strum(to_string = "2")]
    Two,
}

impl Level {
    pub const fn board_size(self) -> usize {
        match self {
            Level::One => 3,
            Level::Two => 4,
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
        }
    }

    pub const fn next(self) -> Option<Level> {
        match self {
            Level::One => Some(Level::Two),
            Level::Two => None,
        }
    }
}

/// Handle for a delayed level transition.
///
/// Tickets are only honoured by the session that issued them and only within
/// the same epoch; starting a new game or a new level invalidates every
/// ticket issued before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpTicket {
    pub(crate) epoch: u64,
    pub(crate) target: Level,
    pub(crate) delay_ms: u64,
}

impl LevelUpTicket {
    pub fn target(&self) -> Level {
        self.target
    }

    /// How long the caller should wait before completing the transition.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Everything a frontend needs to render and continue one game.
///
/// Sessions are values: every transition in [`crate::engine`] returns a new
/// session and leaves the old one untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) level: Level,
    pub(crate) score: u64,
    pub(crate) high_score: u64,
    pub(crate) won: bool,
    pub(crate) game_over: bool,

    /// RNG seed for deterministic spawns, set once per game.
    pub(crate) game_seed: u64,
    /// Spawn step counter; never reused within a game.
    pub(crate) nonce: u64,
    /// Bumped on every new game and level start to expire old tickets.
    pub(crate) epoch: u64,
    pub(crate) pending_level_up: Option<LevelUpTicket>,
}

impl GameSession {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn pending_level_up(&self) -> Option<LevelUpTicket> {
        self.pending_level_up
    }

    /// Whether the "next level" shortcut is currently offered.
    pub fn can_skip_level(&self) -> bool {
        self.level.next().is_some() && !self.won && self.pending_level_up.is_none()
    }
}
