/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Tile value that, once reached on level one, schedules the move to level two.
    pub level_up_tile: u32,
    /// Tile value that marks the session as won.
    pub win_tile: u32,
    /// Chance (in percent) that a spawned tile is a 4 instead of a 2.
    pub four_spawn_percent: u32,
    /// How long the level-up banner stays up before level two starts.
    pub level_up_delay_ms: u64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Largest supported board edge.
    pub const MAX_BOARD_SIZE: usize = 8;
    /// Upper bound on cell count, used to size fixed-capacity scans.
    pub const MAX_CELLS: usize = Self::MAX_BOARD_SIZE * Self::MAX_BOARD_SIZE;
    /// Number of tiles placed on a freshly started level.
    pub const STARTING_TILES: usize = 2;
    /// Largest tile a cell can hold. Two of these never merge.
    pub const MAX_TILE: u32 = 1 << 31;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LEVEL_UP_TILE: u32 = 64;
    pub const DEFAULT_WIN_TILE: u32 = 2048;
    pub const DEFAULT_FOUR_SPAWN_PERCENT: u32 = 10;
    pub const DEFAULT_LEVEL_UP_DELAY_MS: u64 = 2000;

    pub fn new() -> Self {
        Self {
            level_up_tile: Self::DEFAULT_LEVEL_UP_TILE,
            win_tile: Self::DEFAULT_WIN_TILE,
            four_spawn_percent: Self::DEFAULT_FOUR_SPAWN_PERCENT,
            level_up_delay_ms: Self::DEFAULT_LEVEL_UP_DELAY_MS,
        }
    }

    pub fn with_level_up_delay_ms(mut self, level_up_delay_ms: u64) -> Self {
        self.level_up_delay_ms = level_up_delay_ms;
        self
    }

    pub fn with_four_spawn_percent(mut self, four_spawn_percent: u32) -> Self {
        self.four_spawn_percent = four_spawn_percent.min(100);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
