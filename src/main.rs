use macroquad::prelude::*;
use tracing::error;

use gol::config::{GRID_HEIGHT, GRID_WIDTH, SCALE, TARGET_FPS, WINDOW_TITLE};
use gol::{Simulation, WindowDisplay};

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: (GRID_WIDTH * SCALE) as i32,
        window_height: (GRID_HEIGHT * SCALE) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut display = WindowDisplay::new(TARGET_FPS);
    let mut simulation = Simulation::new(GRID_WIDTH, GRID_HEIGHT);

    if let Err(err) = simulation.run(&mut display).await {
        error!(%err, "simulation failed");
        std::process::exit(1);
    }
}
