use anyhow::Context;
use egui::Vec2;

use arkanoid::app::ArkanoidApp;
use arkanoid::game::config::GameConfig;
use arkanoid::game::session::Session;
use arkanoid::sound::SoundCue;
use arkanoid::util::{env_path, env_u64, init_logging};

const SEED_VARIABLE: &str = "ARKANOID_SEED";
const CATCH_SOUND_VARIABLE: &str = "ARKANOID_CATCH_SOUND";

#[cfg(feature = "audio")]
fn sound_cue(config: &GameConfig) -> anyhow::Result<Box<dyn SoundCue>> {
    let cue = arkanoid::sound::RodioCue::open(&config.catch_sound)
        .with_context(|| {
            format!(
                "loading the catch sound (set {CATCH_SOUND_VARIABLE} to override {})",
                config.catch_sound.display()
            )
        })?;
    Ok(Box::new(cue))
}

#[cfg(not(feature = "audio"))]
fn sound_cue(_config: &GameConfig) -> anyhow::Result<Box<dyn SoundCue>> {
    Ok(Box::<arkanoid::sound::LogCue>::default())
}

fn arkanoid_user_game() -> anyhow::Result<()> {
    let mut config = GameConfig::default();
    if let Some(path) = env_path(CATCH_SOUND_VARIABLE) {
        config.catch_sound = path;
    }
    config.validate().context("invalid game configuration")?;

    let seed = match env_u64(SEED_VARIABLE)? {
        Some(seed) => seed,
        None => rand::random(),
    };
    log::info!("starting with {SEED_VARIABLE}={seed}");

    let sound = sound_cue(&config)?;
    let window_size = Vec2::new(config.screen_len_x, config.screen_len_y);
    let session = Session::new(config, seed);

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(window_size),
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native("Arkanoid", native_options, Box::new(move |cc| {
        Box::new(ArkanoidApp::new(cc, session, sound))
    }))
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    arkanoid_user_game()
}
