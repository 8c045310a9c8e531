//! Bird, pipes and ground: plain records sharing one capability set.

use std::rc::Rc;

use crate::bitmap::{Bitmap, Sprite};
use crate::collision::{collides, Point};
use crate::config::GameConfig;
use crate::render::DrawCommand;

/// Something that sits on screen, moves once per tick, and can be hit.
pub trait Entity {
    fn position(&self) -> Point;
    fn sprite(&self) -> &Sprite;
    fn update(&mut self, config: &GameConfig);

    fn width(&self) -> i32 {
        self.sprite().width()
    }

    fn height(&self) -> i32 {
        self.sprite().height()
    }

    /// True once the right edge has scrolled past the left side of the screen.
    fn is_off_screen(&self) -> bool {
        self.position().x + self.width() < 0
    }

    fn collides_with(&self, other: &dyn Entity) -> bool {
        collides(
            self.position(),
            self.sprite().mask(),
            other.position(),
            other.sprite().mask(),
        )
    }

    fn draw_command(&self) -> DrawCommand {
        let Point { x, y } = self.position();
        DrawCommand::new(Rc::clone(self.sprite().image()), x, y)
    }
}

/// The player. Only moves vertically.
pub struct Bird {
    frames: [Rc<Bitmap>; 3],
    frame: usize,
    sprite: Sprite,
    position: Point,
    velocity: i32,
}

impl Bird {
    /// Centred horizontally, top edge at mid-height, already falling at `speed`.
    pub fn new(frames: [Rc<Bitmap>; 3], config: &GameConfig) -> Self {
        let sprite = Sprite::new(Bitmap::clone(&frames[0]));
        let x = (config.screen_width - sprite.width()) / 2;
        Self {
            frames,
            frame: 0,
            sprite,
            position: Point::new(x, config.screen_height / 2),
            velocity: config.speed,
        }
    }

    /// Flap: replace the current velocity with an upward impulse.
    pub fn bump(&mut self, config: &GameConfig) {
        self.velocity = -config.speed;
    }

    pub fn velocity(&self) -> i32 {
        self.velocity
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Nose angle in degrees, counter-clockwise. Not clamped.
    pub fn angle(&self) -> f64 {
        -3.0 * self.velocity as f64
    }
}

impl Entity for Bird {
    fn position(&self) -> Point {
        self.position
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn update(&mut self, config: &GameConfig) {
        self.velocity += config.gravity;
        self.frame = (self.frame + 1) % self.frames.len();
        self.sprite = Sprite::new(self.frames[self.frame].rotated(self.angle()));
        self.position.y += self.velocity;
    }
}

/// One half of a pipe pair.
#[derive(Clone, Debug)]
pub struct Pipe {
    sprite: Sprite,
    position: Point,
    inverted: bool,
}

impl Pipe {
    /// Standing on the ground, top edge at `screen_height - size - ground_height`.
    pub fn upright(sprite: Sprite, x: i32, size: i32, config: &GameConfig) -> Self {
        let y = config.screen_height - size - config.ground_height;
        Self {
            sprite,
            position: Point::new(x, y),
            inverted: false,
        }
    }

    /// Hanging from the top; `size` is measured the same way as for
    /// [`Pipe::upright`] but from the opposite end of the playfield.
    pub fn inverted(sprite: Sprite, x: i32, size: i32, config: &GameConfig) -> Self {
        let y = -(sprite.height() - size + config.ground_height);
        Self {
            sprite,
            position: Point::new(x, y),
            inverted: true,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn top(&self) -> i32 {
        self.position.y
    }

    pub fn bottom(&self) -> i32 {
        self.position.y + self.height()
    }
}

impl Entity for Pipe {
    fn position(&self) -> Point {
        self.position
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn update(&mut self, config: &GameConfig) {
        self.position.x -= config.game_speed;
    }
}

/// Two pipes sharing an x position, scrolled and recycled together.
#[derive(Clone, Debug)]
pub struct PipePair {
    pub lower: Pipe,
    pub upper: Pipe,
    scored: bool,
}

impl PipePair {
    pub fn new(lower: Pipe, upper: Pipe) -> Self {
        Self {
            lower,
            upper,
            scored: false,
        }
    }

    pub fn x(&self) -> i32 {
        self.lower.position.x
    }

    /// Vertical opening between the facing edges.
    pub fn gap(&self) -> i32 {
        self.lower.top() - self.upper.bottom()
    }

    pub fn is_off_screen(&self) -> bool {
        self.lower.is_off_screen() && self.upper.is_off_screen()
    }

    pub fn has_scored(&self) -> bool {
        self.scored
    }

    /// Award this pair's point if it has reached `goal` this tick.
    ///
    /// The pair scores on the single tick where its x lies in
    /// `(goal - game_speed, goal]`, and never again afterwards.
    pub fn try_score(&mut self, goal: i32, config: &GameConfig) -> bool {
        let x = self.x();
        if self.scored || x > goal || x <= goal - config.game_speed {
            return false;
        }
        self.scored = true;
        true
    }

    pub fn update(&mut self, config: &GameConfig) {
        self.lower.update(config);
        self.upper.update(config);
    }

    pub fn pipes(&self) -> [&Pipe; 2] {
        [&self.lower, &self.upper]
    }
}

/// A ground strip, recycled to the right once it scrolls away.
pub struct Ground {
    sprite: Sprite,
    position: Point,
}

impl Ground {
    pub fn new(sprite: Sprite, x: i32, config: &GameConfig) -> Self {
        Self {
            sprite,
            position: Point::new(x, config.ground_y()),
        }
    }
}

impl Entity for Ground {
    fn position(&self) -> Point {
        self.position
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn update(&mut self, config: &GameConfig) {
        self.position.x -= config.game_speed;
    }
}
