use log::{info, warn};
use macroquad::Window;
use macroquad::prelude::{get_time, next_frame, prevent_quit};
use rand::SeedableRng;
use rand::rngs::StdRng;

use grid_snake::clock::Ticker;
use grid_snake::config::{CONFIG_PATH, Config};
use grid_snake::game::{Game, GameState, TickOutcome};
use grid_snake::logger;
use grid_snake::ui::{self, Renderer};

fn main() {
    let (config, config_error) = match Config::load(CONFIG_PATH) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    if let Err(err) = logger::init(&config.log_path, config.log_level) {
        eprintln!("logging disabled: {err}");
    }
    if let Some(err) = config_error {
        warn!("Using default settings, {CONFIG_PATH} rejected: {err}");
    }

    Window::from_config(ui::window_conf(&config), run(config));
}

async fn run(config: Config) {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(config.grid(), rng);
    let renderer = Renderer::new(config.metrics());
    let mut ticker = Ticker::new(config.tick_rate);

    // Window close goes through the state machine like any other command.
    prevent_quit();
    info!("Game started");

    loop {
        for command in ui::poll_commands(game.state(), renderer.menu()) {
            game.handle(command);
        }
        if !game.is_running() {
            break;
        }

        let mut collided = false;
        if game.state() == GameState::Running && ticker.ready(get_time()) {
            collided = game.tick() == TickOutcome::Collided;
        }

        // The crash frame is drawn once before the prompt replaces it.
        match game.state() {
            GameState::Running => renderer.draw_playfield(&game),
            GameState::GameOver if collided => renderer.draw_playfield(&game),
            GameState::GameOver => renderer.draw_game_over(),
        }

        next_frame().await;
    }

    info!("Game closed");
    log::logger().flush();
}
