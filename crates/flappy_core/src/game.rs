//! Splash -> Playing -> GameOver state machine and the per-tick update.

use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::Result;
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::assets::{Assets, SpriteSet};
use crate::bitmap::Sprite;
use crate::config::GameConfig;
use crate::entity::{Bird, Entity, Ground, PipePair};
use crate::obstacle::ObstacleGenerator;
use crate::render::{layout_number, Align, Anchor, DrawCommand};
use crate::score_store::ScoreStore;
use crate::sound::Sound;

/// Gap between the high-score banner and the bottom of the screen.
const HIGH_SCORE_BANNER_MARGIN: i32 = 40;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    /// Waiting for the first flap.
    Splash,
    Playing,
    /// Frozen on the game-over banner; input is ignored until the countdown ends.
    GameOver { ticks_left: u32 },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Input {
    Flap,
    Quit,
}

/// Everything owned by one play-through.
pub struct Session {
    bird: Bird,
    pipes: VecDeque<PipePair>,
    grounds: VecDeque<Ground>,
    score: u32,
    goal: i32,
    background: usize,
}

impl Session {
    fn new<R: Rng>(
        config: &GameConfig,
        sprites: &SpriteSet,
        obstacles: &ObstacleGenerator,
        rng: &mut R,
    ) -> Self {
        let bird_color = rng.gen_range(0..sprites.birds.len());
        let background = rng.gen_range(0..sprites.backgrounds.len());
        let bird = Bird::new(sprites.birds[bird_color].clone(), config);

        // Pipes arrive on a grid of `game_speed`; the goal sits one step
        // behind the bird's tail on that grid.
        let step = config.game_speed;
        let goal = ((bird.position().x - bird.width()).div_euclid(step) - 1) * step;

        let grounds = (0..2)
            .map(|i| Ground::new(sprites.ground.clone(), config.ground_width * i, config))
            .collect();
        let pipes = (0..2)
            .map(|i| obstacles.generate(rng, config.screen_width * (i + 2), config))
            .collect();

        debug!("New session: bird colour {bird_color}, background {background}, goal x={goal}");
        Self {
            bird,
            pipes,
            grounds,
            score: 0,
            goal,
            background,
        }
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &VecDeque<PipePair> {
        &self.pipes
    }

    pub fn grounds(&self) -> &VecDeque<Ground> {
        &self.grounds
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// X coordinate a pipe pair must reach to award a point.
    pub fn goal(&self) -> i32 {
        self.goal
    }

    pub fn background(&self) -> usize {
        self.background
    }

    fn bird_collides(&self) -> bool {
        let bird: &dyn Entity = &self.bird;
        self.grounds.iter().any(|ground| bird.collides_with(ground))
            || self
                .pipes
                .iter()
                .flat_map(PipePair::pipes)
                .any(|pipe| bird.collides_with(pipe))
    }

    fn draw(&self, out: &mut Vec<DrawCommand>) {
        out.push(self.bird.draw_command());
        for pair in &self.pipes {
            out.extend(pair.pipes().map(|pipe| pipe.draw_command()));
        }
        out.extend(self.grounds.iter().map(|ground| ground.draw_command()));
    }
}

/// One running game: configuration, sprites, persistence and the current session.
pub struct Game {
    config: GameConfig,
    sprites: SpriteSet,
    obstacles: ObstacleGenerator,
    store: ScoreStore,
    rng: StdRng,
    high_score: u32,
    state: State,
    session: Session,
    /// Flap key presses since the last tick.
    flaps_requested: u32,
    exit_requested: bool,
    sounds: Vec<Sound>,
}

impl Game {
    /// Validate `config`, prepare sprites, read the high score and set up
    /// the first session on the splash screen.
    pub fn new(
        config: GameConfig,
        assets: Assets,
        store: ScoreStore,
        mut rng: StdRng,
    ) -> Result<Self> {
        config.validate()?;
        let sprites = SpriteSet::prepare(assets, &config)?;
        let obstacles = ObstacleGenerator::new(sprites.pipes.clone());
        let high_score = store.load();
        let session = Session::new(&config, &sprites, &obstacles, &mut rng);

        Ok(Self {
            config,
            sprites,
            obstacles,
            store,
            rng,
            high_score,
            state: State::Splash,
            session,
            flaps_requested: 0,
            exit_requested: false,
            sounds: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }

    /// Sounds requested since the last call, in the order they were raised.
    pub fn take_sounds(&mut self) -> Vec<Sound> {
        std::mem::take(&mut self.sounds)
    }

    pub fn handle_input(&mut self, input: Input) {
        match (input, self.state) {
            (Input::Quit, _) => {
                info!("Exit requested");
                self.exit_requested = true;
            }
            (Input::Flap, State::Splash) => {
                info!("Round started");
                self.state = State::Playing;
                self.sounds.push(Sound::Swoosh);
            }
            (Input::Flap, State::Playing) => self.flaps_requested += 1,
            (Input::Flap, State::GameOver { .. }) => {}
        }
    }

    /// Advance one fixed-rate tick. Does nothing once exit was requested.
    pub fn tick(&mut self) {
        if self.exit_requested {
            return;
        }
        match self.state {
            State::Splash => {}
            State::Playing => self.tick_playing(),
            State::GameOver { ticks_left } if ticks_left > 1 => {
                self.state = State::GameOver {
                    ticks_left: ticks_left - 1,
                };
            }
            State::GameOver { .. } => self.restart(),
        }
    }

    fn tick_playing(&mut self) {
        let config = &self.config;
        let session = &mut self.session;

        // Presses within one tick bump once but each one flaps audibly.
        let flaps = std::mem::take(&mut self.flaps_requested) as usize;
        if flaps > 0 {
            session.bird.bump(config);
            self.sounds.extend(std::iter::repeat(Sound::Wing).take(flaps));
        }

        if session.grounds.front().is_some_and(|g| g.is_off_screen()) {
            session.grounds.pop_front();
            let x = config.ground_respawn_x();
            session
                .grounds
                .push_back(Ground::new(self.sprites.ground.clone(), x, config));
            debug!("Recycled ground tile to x={x}");
        }

        if session.pipes.front().is_some_and(PipePair::is_off_screen) {
            session.pipes.pop_front();
            let pair = self
                .obstacles
                .generate(&mut self.rng, config.pipe_spawn_x(), config);
            session.pipes.push_back(pair);
        }

        if let Some(leading) = session.pipes.front_mut() {
            if leading.try_score(session.goal, config) {
                session.score += 1;
                self.sounds.push(Sound::Point);
                debug!("Scored, now {}", session.score);
            }
        }

        session.bird.update(config);
        for pair in &mut session.pipes {
            pair.update(config);
        }
        for ground in &mut session.grounds {
            ground.update(config);
        }

        if session.bird_collides() {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        let score = self.session.score;
        info!("Game over with score {score} (high score {})", self.high_score);
        self.sounds.extend([Sound::Hit, Sound::Die]);
        if score > self.high_score {
            match self.store.save(score) {
                Ok(()) => info!("New high score {score} saved"),
                Err(e) => error!("{e:#}"),
            }
            self.high_score = score;
        }
        self.state = State::GameOver {
            ticks_left: self.config.game_over_ticks(),
        };
    }

    fn restart(&mut self) {
        self.session = Session::new(&self.config, &self.sprites, &self.obstacles, &mut self.rng);
        self.flaps_requested = 0;
        self.state = State::Splash;
    }

    /// Queue this frame's draw commands, back to front.
    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        let screen = (self.config.screen_width, self.config.screen_height);
        let background = &self.sprites.backgrounds[self.session.background];
        out.push(DrawCommand::new(Rc::clone(background.image()), 0, 0));

        match self.state {
            State::Splash => {
                out.push(self.centered(&self.sprites.start_message));
                if self.high_score > 0 {
                    let banner = &self.sprites.high_score_message;
                    out.push(DrawCommand::new(
                        Rc::clone(banner.image()),
                        screen.0 / 2 - banner.width() / 2,
                        screen.1 - banner.height() - HIGH_SCORE_BANNER_MARGIN,
                    ));
                    layout_number(
                        self.high_score,
                        &self.sprites.digits,
                        Align::Center,
                        Anchor::Bottom,
                        screen,
                        out,
                    );
                }
            }
            State::Playing | State::GameOver { .. } => {
                self.session.draw(out);
                layout_number(
                    self.session.score,
                    &self.sprites.digits,
                    Align::Center,
                    Anchor::Top,
                    screen,
                    out,
                );
                if let State::GameOver { .. } = self.state {
                    out.push(self.centered(&self.sprites.game_over_message));
                }
            }
        }
    }

    fn centered(&self, sprite: &Sprite) -> DrawCommand {
        DrawCommand::new(
            Rc::clone(sprite.image()),
            self.config.screen_width / 2 - sprite.width() / 2,
            self.config.screen_height / 2 - sprite.height() / 2,
        )
    }
}
