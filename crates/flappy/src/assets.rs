//! Loads the sprite pack from disk into the core's [`Assets`].
//!
//! Expected layout under the assets root:
//!
//! ```text
//! assets/birds/<colour>/{upflap,midflap,downflap}.png
//! assets/pipes/<colour>.png
//! assets/sceneries/{ground,day,night}.png
//! assets/numbers/{0..9}.png
//! assets/messages/{start_game,game_over,high_score}.png
//! ```

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use flappy_core::{Assets, Bitmap, BirdFrames};

pub const BIRD_COLORS: [&str; 3] = ["blue", "red", "yellow"];
pub const PIPE_COLORS: [&str; 2] = ["green", "red"];
pub const BACKGROUNDS: [&str; 2] = ["day", "night"];
const BIRD_FRAMES: [&str; 3] = ["upflap", "midflap", "downflap"];

pub fn load_assets(root: &Path) -> Result<Assets> {
    let images = root.join("assets");
    let birds_dir = images.join("birds");
    let sceneries = images.join("sceneries");
    let messages = images.join("messages");

    let birds = BIRD_COLORS
        .iter()
        .map(|color| {
            let color_dir = birds_dir.join(color);
            let frames = load_many(BIRD_FRAMES.map(|f| color_dir.join(format!("{f}.png"))))?;
            into_array::<3>(frames).with_context(|| format!("bird colour '{color}'"))
        })
        .collect::<Result<Vec<BirdFrames>>>()?;
    let pipes = load_many(PIPE_COLORS.map(|c| images.join("pipes").join(format!("{c}.png"))))?;
    let backgrounds = load_many(BACKGROUNDS.map(|b| sceneries.join(format!("{b}.png"))))?;
    let digits = load_many((0..10).map(|d| images.join("numbers").join(format!("{d}.png"))))?;

    let assets = Assets {
        birds,
        pipes,
        ground: load_png(&sceneries.join("ground.png"))?,
        digits: into_array::<10>(digits)?,
        start_message: load_png(&messages.join("start_game.png"))?,
        game_over_message: load_png(&messages.join("game_over.png"))?,
        high_score_message: load_png(&messages.join("high_score.png"))?,
        backgrounds,
    };
    log::info!("Loaded sprite pack from {}", root.display());
    Ok(assets)
}

/// Decode a PNG (or any format `image` recognises) into RGBA.
pub fn load_png(path: &Path) -> Result<Bitmap> {
    let image = image::open(path)
        .with_context(|| format!("failed to load image {}", path.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Bitmap::from_rgba(width, height, image.into_raw())
}

fn load_many<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Vec<Bitmap>> {
    paths.into_iter().map(|p| load_png(p.as_ref())).collect()
}

fn into_array<const N: usize>(bitmaps: Vec<Bitmap>) -> Result<[Bitmap; N]> {
    let len = bitmaps.len();
    bitmaps
        .try_into()
        .map_err(|_| anyhow!("expected {N} images, got {len}"))
}
