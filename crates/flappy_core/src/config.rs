use anyhow::{ensure, Result};
use typed_builder::TypedBuilder;

/// Immutable tuning for one game instance.
///
/// Every field defaults to the classic values (a 400x800 playfield at 30
/// ticks per second), so `GameConfig::default()` plays the stock game.
#[derive(TypedBuilder, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    #[builder(default = 400)]
    pub screen_width: i32,
    #[builder(default = 800)]
    pub screen_height: i32,
    /// Added to the bird's vertical velocity every tick.
    #[builder(default = 1)]
    pub gravity: i32,
    /// Flap impulse; the bird also starts a round falling at this speed.
    #[builder(default = 10)]
    pub speed: i32,
    /// Horizontal scroll per tick for pipes and ground.
    #[builder(default = 10)]
    pub game_speed: i32,
    #[builder(default = 30)]
    pub fps: u32,
    #[builder(default = 800)]
    pub ground_width: i32,
    #[builder(default = 100)]
    pub ground_height: i32,
    /// A recycled ground tile is placed this many pixels early to hide seams.
    #[builder(default = 10)]
    pub ground_recycle_offset: i32,
    #[builder(default = 80)]
    pub pipe_width: i32,
    #[builder(default = 500)]
    pub pipe_height: i32,
    #[builder(default = 200)]
    pub pipe_gap: i32,
    /// How long the game-over banner stays up before the splash screen returns.
    #[builder(default = 1000)]
    pub game_over_pause_ms: u64,
    #[builder(default = 1)]
    pub scale: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GameConfig {
    /// Rejects configurations the simulation cannot run with.
    ///
    /// The pipe generator draws its gap split from
    /// `ground_height..=pipe_height`, so that range must be non-empty.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.screen_width > 0 && self.screen_height > 0,
            "screen size must be positive, got {}x{}",
            self.screen_width,
            self.screen_height
        );
        ensure!(
            self.pipe_width > 0 && self.pipe_height > 0,
            "pipe size must be positive, got {}x{}",
            self.pipe_width,
            self.pipe_height
        );
        ensure!(
            self.ground_width > 0 && self.ground_height > 0,
            "ground size must be positive, got {}x{}",
            self.ground_width,
            self.ground_height
        );
        ensure!(
            self.ground_height <= self.pipe_height,
            "ground height ({}) must not exceed pipe height ({})",
            self.ground_height,
            self.pipe_height
        );
        ensure!(self.pipe_gap >= 0, "pipe gap must not be negative");
        ensure!(self.game_speed > 0, "game speed must be positive");
        ensure!(self.fps > 0, "fps must be positive");
        ensure!(self.scale > 0, "window scale must be positive");
        Ok(())
    }

    /// Top edge of every ground tile.
    pub fn ground_y(&self) -> i32 {
        self.screen_height - self.ground_height
    }

    /// Where a freshly generated pipe pair enters, off the right edge.
    pub fn pipe_spawn_x(&self) -> i32 {
        self.screen_width * 2
    }

    /// Where a recycled ground tile is appended.
    pub fn ground_respawn_x(&self) -> i32 {
        self.ground_width - self.ground_recycle_offset
    }

    /// Number of ticks the game-over banner is held for.
    pub fn game_over_ticks(&self) -> u32 {
        ((self.game_over_pause_ms * self.fps as u64) / 1000).max(1) as u32
    }
}
