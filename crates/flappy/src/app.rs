use flappy_common::app::App;
use flappy_common::key::Key;
use flappy_core::{DrawCommand, Frame, Game, Input};

use crate::sound::SoundManager;

/// Adapts the simulation core to the frontend's [`App`] contract.
pub struct FlappyApp {
    game: Game,
    frame: Frame,
    commands: Vec<DrawCommand>,
    sound: Option<SoundManager>,
}

impl FlappyApp {
    pub fn new(game: Game, sound: Option<SoundManager>) -> Self {
        let config = game.config();
        let frame = Frame::new(config.screen_width as u32, config.screen_height as u32);
        Self {
            game,
            frame,
            commands: Vec::new(),
            sound,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn flush_sounds(&mut self) {
        for sound in self.game.take_sounds() {
            if let Some(manager) = &self.sound {
                manager.play(sound);
            }
        }
    }
}

impl App for FlappyApp {
    fn init(&mut self) {
        log::info!(
            "Flappy init (high score {}, {} fps)",
            self.game.high_score(),
            self.game.config().fps
        );
        if self.sound.is_none() {
            log::warn!("Audio unavailable, playing without sound");
        }
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        self.game.tick();

        self.commands.clear();
        self.game.draw(&mut self.commands);
        self.frame.rasterize(&self.commands, screen_state);

        self.flush_sounds();
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        if !is_down {
            return;
        }
        match key {
            Key::Escape => self.game.handle_input(Input::Quit),
            key if key.is_flap() => self.game.handle_input(Input::Flap),
            _ => {}
        }
    }

    fn should_exit(&self) -> bool {
        self.game.should_exit()
    }

    fn exit(&mut self) {
        log::info!("Flappy exit (high score {})", self.game.high_score());
    }

    fn width(&self) -> u32 {
        self.game.config().screen_width as u32
    }

    fn height(&self) -> u32 {
        self.game.config().screen_height as u32
    }

    fn scale(&self) -> u32 {
        self.game.config().scale
    }

    fn fps(&self) -> u32 {
        self.game.config().fps
    }

    fn title(&self) -> String {
        "Flappy Bird v1.0".to_string()
    }
}
