use log::debug;
use rand::Rng;

use crate::assets::PipeSprites;
use crate::config::GameConfig;
use crate::entity::{Pipe, PipePair};

/// Produces pipe pairs with a randomised gap height and colour.
pub struct ObstacleGenerator {
    palette: Vec<PipeSprites>,
}

impl ObstacleGenerator {
    /// `palette` must not be empty; [`SpriteSet::prepare`](crate::assets::SpriteSet::prepare)
    /// guarantees this for loaded assets.
    pub fn new(palette: Vec<PipeSprites>) -> Self {
        assert!(!palette.is_empty(), "pipe palette must not be empty");
        Self { palette }
    }

    /// Spawn a pair at `spawn_x`, choosing a colour uniformly and a gap
    /// split uniformly in `ground_height..=pipe_height`.
    pub fn generate<R: Rng>(
        &self,
        rng: &mut R,
        spawn_x: i32,
        config: &GameConfig,
    ) -> PipePair {
        let color = rng.gen_range(0..self.palette.len());
        let size = rng.gen_range(config.ground_height..=config.pipe_height);
        debug!("Spawning pipe pair at x={spawn_x} (colour {color}, size {size})");
        Self::pair_at(&self.palette[color], spawn_x, size, config)
    }

    /// Build the pair for a known gap split.
    ///
    /// The lower pipe's top lands at `screen_height - size - ground_height`;
    /// the upper pipe's bottom sits exactly `pipe_gap` above it.
    pub fn pair_at(
        sprites: &PipeSprites,
        spawn_x: i32,
        size: i32,
        config: &GameConfig,
    ) -> PipePair {
        let lower = Pipe::upright(sprites.upright.clone(), spawn_x, size, config);
        let upper_size = config.screen_height - size - config.pipe_gap;
        let upper = Pipe::inverted(sprites.inverted.clone(), spawn_x, upper_size, config);
        PipePair::new(lower, upper)
    }
}
