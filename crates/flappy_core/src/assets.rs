use std::rc::Rc;

use anyhow::{ensure, Result};

use crate::bitmap::{Bitmap, Sprite};
use crate::config::GameConfig;

/// Flap-up, mid-flap and flap-down frames of one bird colour.
pub type BirdFrames = [Bitmap; 3];

/// Decoded images handed to the core by whoever loads them from disk.
pub struct Assets {
    /// One entry per bird colour.
    pub birds: Vec<BirdFrames>,
    /// One upright pipe image per pipe colour.
    pub pipes: Vec<Bitmap>,
    pub ground: Bitmap,
    /// Glyphs for `0` through `9`.
    pub digits: [Bitmap; 10],
    pub start_message: Bitmap,
    pub game_over_message: Bitmap,
    pub high_score_message: Bitmap,
    pub backgrounds: Vec<Bitmap>,
}

/// Both orientations of one pipe colour, already sized to the config.
#[derive(Clone, Debug)]
pub struct PipeSprites {
    pub upright: Sprite,
    pub inverted: Sprite,
}

/// Game-ready sprites: everything scaled once, masks computed once.
pub struct SpriteSet {
    pub birds: Vec<[Rc<Bitmap>; 3]>,
    pub pipes: Vec<PipeSprites>,
    pub ground: Sprite,
    pub digits: [Sprite; 10],
    pub start_message: Sprite,
    pub game_over_message: Sprite,
    pub high_score_message: Sprite,
    pub backgrounds: Vec<Sprite>,
}

impl SpriteSet {
    pub fn prepare(assets: Assets, config: &GameConfig) -> Result<Self> {
        ensure!(!assets.birds.is_empty(), "at least one bird colour is required");
        ensure!(!assets.pipes.is_empty(), "at least one pipe colour is required");
        ensure!(
            !assets.backgrounds.is_empty(),
            "at least one background is required"
        );

        let pipes = assets
            .pipes
            .iter()
            .map(|pipe| {
                let upright = pipe.scaled(config.pipe_width as u32, config.pipe_height as u32);
                let inverted = upright.flipped_vertical();
                PipeSprites {
                    upright: Sprite::new(upright),
                    inverted: Sprite::new(inverted),
                }
            })
            .collect();
        let ground = assets
            .ground
            .scaled(config.ground_width as u32, config.ground_height as u32);
        let backgrounds = assets
            .backgrounds
            .iter()
            .map(|bg| {
                Sprite::new(bg.scaled(config.screen_width as u32, config.screen_height as u32))
            })
            .collect();

        Ok(Self {
            birds: assets.birds.into_iter().map(|frames| frames.map(Rc::new)).collect(),
            pipes,
            ground: Sprite::new(ground),
            digits: assets.digits.map(Sprite::new),
            start_message: Sprite::new(assets.start_message),
            game_over_message: Sprite::new(assets.game_over_message),
            high_score_message: Sprite::new(assets.high_score_message),
            backgrounds,
        })
    }
}
