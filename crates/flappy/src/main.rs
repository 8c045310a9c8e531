use flappy::LaunchOptions;

const USAGE: &str = "Usage: flappy [ASSETS_DIR] [SCORE_FILE]\n\
                     \n\
                     ASSETS_DIR  directory holding assets/ and sounds/ (default: res)\n\
                     SCORE_FILE  where the high score is kept (default: score.dat)";

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let assets_dir = args.next();
    if matches!(assets_dir.as_deref(), Some("-h" | "--help")) {
        println!("{USAGE}");
        return;
    }

    let mut options = LaunchOptions::builder().build();
    if let Some(assets_dir) = assets_dir {
        options.assets_dir = assets_dir.into();
    }
    if let Some(score_file) = args.next() {
        options.score_file = score_file.into();
    }
    log::info!(
        "Assets from '{}', high score in '{}'",
        options.assets_dir.display(),
        options.score_file.display()
    );

    if let Err(e) = flappy::run(options) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
