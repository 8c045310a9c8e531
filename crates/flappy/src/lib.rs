pub mod app;
pub mod assets;
pub mod sound;

use std::path::PathBuf;

use anyhow::Result;
use flappy_core::{Game, GameConfig, ScoreStore};
use flappy_sdl2::{App, SdlContext, SdlInitInfo};
use rand::rngs::StdRng;
use rand::SeedableRng;
use typed_builder::TypedBuilder;

pub use app::FlappyApp;

#[derive(TypedBuilder, Debug, Clone)]
pub struct LaunchOptions {
    #[builder(default = PathBuf::from("res"), setter(into))]
    pub assets_dir: PathBuf,
    #[builder(default = PathBuf::from("score.dat"), setter(into))]
    pub score_file: PathBuf,
    #[builder(default)]
    pub config: GameConfig,
}

/// Load assets, open the window and play until the player quits.
pub fn run(options: LaunchOptions) -> Result<()> {
    let LaunchOptions {
        assets_dir,
        score_file,
        config,
    } = options;

    let assets = assets::load_assets(&assets_dir)?;
    let game = Game::new(
        config,
        assets,
        ScoreStore::new(score_file),
        StdRng::from_entropy(),
    )?;
    let sound = sound::SoundManager::new(&assets_dir);
    let app = FlappyApp::new(game, sound);

    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .fps(app.fps())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)
}
