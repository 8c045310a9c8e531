#![allow(dead_code)]

use std::path::Path;

use flappy_common::Color;
use flappy_core::entity::Entity;
use flappy_core::{Assets, Bitmap, Game, GameConfig, Input, ScoreStore};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const BIRD_WIDTH: u32 = 34;
pub const BIRD_HEIGHT: u32 = 24;

/// Synthetic sprite pack. Pipes are drawn with `pipe_alpha`, so 0 makes
/// them ghosts the bird can fly through.
pub fn assets(pipe_alpha: u8) -> Assets {
    let solid = |w, h, c| Bitmap::filled(w, h, c);
    Assets {
        birds: vec![
            [0u8, 1, 2].map(|i| solid(BIRD_WIDTH, BIRD_HEIGHT, Color::new_rgb(250, 200, i))),
            [0u8, 1, 2].map(|i| solid(BIRD_WIDTH, BIRD_HEIGHT, Color::new_rgb(200, 0, i))),
        ],
        pipes: vec![
            solid(52, 320, Color::new_rgba(80, 200, 40, pipe_alpha)),
            solid(52, 320, Color::new_rgba(200, 60, 40, pipe_alpha)),
        ],
        ground: solid(336, 112, Color::new_rgb(220, 200, 140)),
        digits: std::array::from_fn(|_| solid(24, 36, Color::WHITE)),
        start_message: solid(184, 267, Color::WHITE),
        game_over_message: solid(192, 42, Color::WHITE),
        high_score_message: solid(150, 30, Color::WHITE),
        backgrounds: vec![
            solid(288, 512, Color::new_rgb(78, 192, 202)),
            solid(288, 512, Color::new_rgb(0, 135, 147)),
        ],
    }
}

pub fn game(config: GameConfig, pipe_alpha: u8, score_file: &Path, seed: u64) -> Game {
    Game::new(
        config,
        assets(pipe_alpha),
        ScoreStore::new(score_file),
        StdRng::seed_from_u64(seed),
    )
    .unwrap()
}

/// Flap whenever the bird sinks below mid-screen, keeping it airborne.
pub fn hover(game: &mut Game) {
    if game.session().bird().position().y > game.config().screen_height / 2 {
        game.handle_input(Input::Flap);
    }
}
