use anyhow::Context;
use macroquad::prelude::*;
use meadow_walk::audio::Music;
use meadow_walk::game::GameState;
use meadow_walk::input::InputSnapshot;
use meadow_walk::render::{draw_commands, draw_pause_overlay, Textures};
use meadow_walk::{decode_map_file, FrameLimiter, GameConfig, DEFAULT_CONFIG_FILE};

fn window_conf() -> Conf {
    // Runs before the window exists; a broken config is reported again in `run`.
    GameConfig::load_or_default(DEFAULT_CONFIG_FILE)
        .unwrap_or_default()
        .window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        log::error!("{err:#}");
        // Everything `run` acquired is already dropped.
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Handle window close ourselves so everything below is dropped in order.
    prevent_quit();

    let cfg = GameConfig::load_or_default(DEFAULT_CONFIG_FILE)?;

    // Dropped in reverse: music, then textures; the window closes after `run`.
    let textures = Textures::load(&cfg).await?;
    let mut music = cfg
        .music
        .as_deref()
        .map(Music::play_looped)
        .transpose()?;

    let map = decode_map_file(&cfg.map_path)
        .with_context(|| format!("Loading map {}", cfg.map_path.display()))?;
    let mut state = GameState::new(map, &textures.sheet_set(&cfg), &cfg);

    let mut limiter = FrameLimiter::new(cfg.target_fps);
    let background = cfg.background_color();

    loop {
        if is_quit_requested() {
            log::info!("Quit requested");
            break;
        }

        state.tick(&InputSnapshot::sample(&cfg.keys));
        if let Some(music) = music.as_mut() {
            music.sync_paused(state.paused);
        }

        clear_background(background);
        set_camera(&state.camera.to_camera2d(vec2(screen_width(), screen_height())));
        draw_commands(&textures, &state.tiles);
        draw_commands(&textures, &[state.player.draw_command()]);
        if state.paused {
            draw_pause_overlay(state.camera.target);
        }
        set_default_camera();

        next_frame().await;
        limiter.wait();
    }

    Ok(())
}
