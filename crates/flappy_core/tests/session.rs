mod common;

use std::fs;

use flappy_core::entity::Entity;
use flappy_core::{Game, GameConfig, Input, Sound, State};

use common::hover;

/// Start a round and hover until `target` points, returning the tick
/// numbers on which points were scored.
fn play_until(game: &mut Game, target: u32) -> Vec<u32> {
    game.handle_input(Input::Flap);
    assert_eq!(game.state(), State::Playing);
    let mut scored_at = Vec::new();
    let mut tick = 0;
    while game.score() < target {
        tick += 1;
        assert!(tick < 2_000, "never reached score {target}");
        hover(game);
        let before = game.score();
        game.tick();
        assert_eq!(game.state(), State::Playing, "died on tick {tick}");
        if game.score() > before {
            scored_at.push(tick);
        }
    }
    scored_at
}

/// Stop flapping and let the bird hit the ground.
fn crash(game: &mut Game) {
    for _ in 0..200 {
        game.tick();
        if matches!(game.state(), State::GameOver { .. }) {
            return;
        }
    }
    panic!("bird never crashed");
}

#[test]
fn splash_waits_for_flap() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = common::game(GameConfig::default(), 0, &dir.path().join("score.dat"), 1);
    let start_y = game.session().bird().position().y;
    for _ in 0..10 {
        game.tick();
    }
    assert_eq!(game.state(), State::Splash);
    assert_eq!(game.session().bird().position().y, start_y);

    game.handle_input(Input::Flap);
    assert_eq!(game.state(), State::Playing);
    assert_eq!(game.take_sounds(), vec![Sound::Swoosh]);
    // Starting the round does not flap the bird.
    assert_eq!(game.session().bird().velocity(), 10);
}

#[test]
fn first_run_persists_zero_high_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score.dat");
    let game = common::game(GameConfig::default(), 0, &path, 1);
    assert_eq!(game.high_score(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "0");
}

#[test]
fn invalid_config_is_rejected_before_play() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::builder().ground_height(501).build();
    let result = Game::new(
        config,
        common::assets(255),
        flappy_core::ScoreStore::new(dir.path().join("score.dat")),
        rand::SeedableRng::seed_from_u64(0),
    );
    assert!(result.is_err());
}

#[test]
fn goal_sits_on_the_scroll_grid() {
    let dir = tempfile::tempdir().unwrap();
    let game = common::game(GameConfig::default(), 0, &dir.path().join("score.dat"), 1);
    let session = game.session();
    // Bird at x=183, 34 wide: floor(149 / 10) - 1 = 13 steps.
    assert_eq!(session.bird().position().x, 183);
    assert_eq!(session.goal(), 130);
    assert_eq!(session.goal() % game.config().game_speed, 0);
}

#[test]
fn collections_stay_at_two_pairs_and_two_tiles() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = common::game(GameConfig::default(), 0, &dir.path().join("score.dat"), 3);
    game.handle_input(Input::Flap);
    for _ in 0..500 {
        hover(&mut game);
        game.tick();
        assert_eq!(game.state(), State::Playing);
        assert_eq!(game.session().pipes().len(), 2);
        assert_eq!(game.session().grounds().len(), 2);
        for pair in game.session().pipes() {
            assert_eq!(pair.gap(), game.config().pipe_gap);
        }
    }
}

#[test]
fn ground_tiles_leave_no_gap() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = common::game(GameConfig::default(), 0, &dir.path().join("score.dat"), 3);
    game.handle_input(Input::Flap);
    let config = game.config().clone();
    let mut recycled = 0;
    for _ in 0..300 {
        hover(&mut game);
        let front_before = game.session().grounds()[0].position().x;
        game.tick();
        let grounds = game.session().grounds();
        assert_eq!(grounds.len(), 2);
        if grounds[0].position().x != front_before - config.game_speed {
            // The old front tile was dropped and a fresh one appended at
            // the respawn point before this tick's scroll.
            recycled += 1;
            assert_eq!(
                grounds[1].position().x,
                config.ground_respawn_x() - config.game_speed
            );
            assert_eq!(grounds[1].position().x, 780);
        }
        let first = &grounds[0];
        assert!(first.position().x <= 0);
        assert!(grounds[1].position().x <= first.position().x + first.width());
        let right_edge = grounds[1].position().x + grounds[1].width();
        assert!(right_edge >= game.config().screen_width);
    }
    assert!(recycled >= 2);
}

#[test]
fn presses_within_one_tick_flap_once_with_a_wing_each() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = common::game(GameConfig::default(), 0, &dir.path().join("score.dat"), 7);
    let config = game.config().clone();
    game.handle_input(Input::Flap);
    game.take_sounds();

    game.handle_input(Input::Flap);
    game.handle_input(Input::Flap);
    game.handle_input(Input::Flap);
    game.tick();
    assert_eq!(game.take_sounds(), vec![Sound::Wing; 3]);
    assert_eq!(game.session().bird().velocity(), -config.speed + config.gravity);

    game.tick();
    assert!(game.take_sounds().is_empty());
}

#[test]
fn velocity_follows_gravity_or_flap() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = common::game(GameConfig::default(), 0, &dir.path().join("score.dat"), 5);
    let config = game.config().clone();
    game.handle_input(Input::Flap);
    game.take_sounds();
    let mut flaps = 0;
    for _ in 0..200 {
        let before = game.session().bird().velocity();
        hover(&mut game);
        game.tick();
        let after = game.session().bird().velocity();
        if game.take_sounds().contains(&Sound::Wing) {
            flaps += 1;
            assert_eq!(after, -config.speed + config.gravity);
        } else {
            assert_eq!(after, before + config.gravity);
        }
    }
    assert!(flaps > 0);
}

#[test]
fn each_pair_scores_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = common::game(GameConfig::default(), 0, &dir.path().join("score.dat"), 9);
    let scored_at = play_until(&mut game, 3);
    // First pair from x=800 reaches x=130 on tick 68, the second from
    // x=1200 on tick 108, and the first recycled pair (spawned at tick 90)
    // on tick 157.
    assert_eq!(scored_at, vec![68, 108, 157]);
    // Only the pair that just scored is marked; its successor is untouched.
    let pipes = game.session().pipes();
    assert!(pipes[0].has_scored());
    assert!(!pipes[1].has_scored());
}

#[test]
fn beating_the_high_score_persists_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score.dat");
    fs::write(&path, "5").unwrap();
    let mut game = common::game(GameConfig::default(), 0, &path, 11);
    assert_eq!(game.high_score(), 5);

    play_until(&mut game, 7);
    crash(&mut game);

    assert_eq!(game.score(), 7);
    assert_eq!(game.high_score(), 7);
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "7");
}

#[test]
fn lower_score_keeps_the_old_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score.dat");
    fs::write(&path, "5").unwrap();
    let mut game = common::game(GameConfig::default(), 0, &path, 13);

    play_until(&mut game, 3);
    crash(&mut game);

    assert_eq!(game.score(), 3);
    assert_eq!(game.high_score(), 5);
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "5");
}

#[test]
fn high_score_is_the_maximum_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score.dat");
    let mut game = common::game(GameConfig::default(), 0, &path, 17);
    let game_over_ticks = game.config().game_over_ticks();

    for target in [2, 4, 1] {
        play_until(&mut game, target);
        crash(&mut game);
        for _ in 0..game_over_ticks {
            game.tick();
        }
        assert_eq!(game.state(), State::Splash);
    }
    assert_eq!(game.high_score(), 4);
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "4");
}

#[test]
fn ground_crash_ends_the_round() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = common::game(GameConfig::default(), 255, &dir.path().join("score.dat"), 19);
    game.handle_input(Input::Flap);
    game.take_sounds();

    crash(&mut game);
    assert_eq!(game.score(), 0);
    let bird = game.session().bird();
    assert!(bird.position().y + bird.height() > game.config().ground_y());
    assert_eq!(game.take_sounds(), vec![Sound::Hit, Sound::Die]);
}

#[test]
fn closed_pipes_stop_a_hovering_bird() {
    let dir = tempfile::tempdir().unwrap();
    // No gap at all: every pipe pair walls off the whole sky band.
    let config = GameConfig::builder().pipe_gap(0).build();
    let mut game = common::game(config, 255, &dir.path().join("score.dat"), 23);
    game.handle_input(Input::Flap);

    let mut ticks = 0;
    while game.state() == State::Playing {
        ticks += 1;
        assert!(ticks < 100, "bird flew through a closed pipe");
        hover(&mut game);
        game.tick();
    }
    let bird = game.session().bird();
    let pipe_x = game.session().pipes()[0].x();
    assert!(pipe_x < bird.position().x + bird.width());
    assert!(pipe_x + game.config().pipe_width > bird.position().x);
    assert_eq!(game.score(), 0);
}

#[test]
fn game_over_holds_then_returns_to_splash() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = common::game(GameConfig::default(), 0, &dir.path().join("score.dat"), 29);
    play_until(&mut game, 1);
    crash(&mut game);

    let frozen_y = game.session().bird().position().y;
    for _ in 1..game.config().game_over_ticks() {
        game.handle_input(Input::Flap);
        game.tick();
        assert!(matches!(game.state(), State::GameOver { .. }));
        assert_eq!(game.session().bird().position().y, frozen_y);
    }
    game.tick();
    assert_eq!(game.state(), State::Splash);
    assert_eq!(game.score(), 0);
    assert_eq!(game.high_score(), 1);
    assert_eq!(game.session().pipes().len(), 2);
}

#[test]
fn quit_is_honoured_in_every_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = common::game(GameConfig::default(), 0, &dir.path().join("score.dat"), 31);
    assert!(!game.should_exit());
    game.handle_input(Input::Quit);
    assert!(game.should_exit());

    let mut game = common::game(GameConfig::default(), 255, &dir.path().join("other.dat"), 31);
    game.handle_input(Input::Flap);
    crash(&mut game);
    game.handle_input(Input::Quit);
    assert!(game.should_exit());
}

#[test]
fn quit_freezes_the_world_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = common::game(GameConfig::default(), 0, &dir.path().join("score.dat"), 41);
    game.handle_input(Input::Flap);
    game.tick();
    game.take_sounds();

    let bird_before = game.session().bird().position();
    let pipes_before: Vec<i32> = game.session().pipes().iter().map(|p| p.x()).collect();
    let grounds_before: Vec<i32> =
        game.session().grounds().iter().map(|g| g.position().x).collect();

    game.handle_input(Input::Flap);
    game.handle_input(Input::Quit);
    game.tick();

    assert!(game.should_exit());
    assert_eq!(game.state(), State::Playing);
    assert_eq!(game.session().bird().position(), bird_before);
    let pipes_after: Vec<i32> = game.session().pipes().iter().map(|p| p.x()).collect();
    assert_eq!(pipes_after, pipes_before);
    let grounds_after: Vec<i32> =
        game.session().grounds().iter().map(|g| g.position().x).collect();
    assert_eq!(grounds_after, grounds_before);
    assert!(game.take_sounds().is_empty());
}

#[test]
fn draw_layers_follow_the_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score.dat");
    let mut commands = Vec::new();

    let mut game = common::game(GameConfig::default(), 255, &path, 37);
    game.draw(&mut commands);
    // Background and start prompt only.
    assert_eq!(commands.len(), 2);
    assert_eq!((commands[0].x, commands[0].y), (0, 0));
    assert_eq!(commands[0].image.width(), 400);
    assert_eq!((commands[1].x, commands[1].y), (108, 267));

    game.handle_input(Input::Flap);
    game.tick();
    commands.clear();
    game.draw(&mut commands);
    // Background, bird, four pipes, two ground tiles, one score digit.
    assert_eq!(commands.len(), 9);
    let ground = &commands[7];
    assert_eq!(ground.y, 700);
    assert_eq!((ground.image.width(), ground.image.height()), (800, 100));
    assert_eq!((commands[8].x, commands[8].y), (188, 10));

    crash(&mut game);
    commands.clear();
    game.draw(&mut commands);
    assert_eq!(commands.len(), 10);
    assert_eq!(commands[9].image.height(), 42);

    // A persisted record shows the banner and digits on the next splash.
    fs::write(&path, "12").unwrap();
    let game = common::game(GameConfig::default(), 255, &path, 37);
    commands.clear();
    game.draw(&mut commands);
    assert_eq!(commands.len(), 5);
    assert_eq!((commands[2].x, commands[2].y), (125, 730));
    assert_eq!((commands[3].x, commands[3].y), (176, 754));
}
