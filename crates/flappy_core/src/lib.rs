pub mod assets;
pub mod bitmap;
pub mod collision;
pub mod config;
pub mod entity;
pub mod game;
pub mod obstacle;
pub mod render;
pub mod score_store;
pub mod sound;

pub use assets::{Assets, BirdFrames, SpriteSet};
pub use bitmap::{Bitmap, Mask, Sprite};
pub use collision::{collides, Point};
pub use config::GameConfig;
pub use game::{Game, Input, Session, State};
pub use render::{DrawCommand, Frame};
pub use score_store::ScoreStore;
pub use sound::Sound;
