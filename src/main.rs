//! Tap Game entry point
//!
//! Loads settings and the high score, opens the window and runs the
//! fixed-rate loop until the player quits.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use tap_game::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use tap_game::highscores::{load_highscore, save_highscore};
use tap_game::platform::GameWindow;
use tap_game::renderer::{Framebuffer, HudFont, render};
use tap_game::settings::DEFAULT_SETTINGS_FILE;
use tap_game::sim::{WorldState, tick};
use tap_game::{LevelUpRule, Settings};

#[derive(Parser, Debug)]
#[command(about = "Jump, shoot and dodge obstacle pairs", version)]
struct Args {
    /// JSON settings file (missing file means defaults)
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,
    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// High score file
    #[arg(long)]
    highscore_file: Option<PathBuf>,
    /// Target frame rate
    #[arg(long)]
    fps: Option<usize>,
    /// Level-up rule: "exact_multiple" or "crossed_multiple"
    #[arg(long)]
    level_rule: Option<String>,
}

/// Seed from the wall clock when none is configured
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = Settings::load(&args.settings);
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(path) = &args.highscore_file {
        settings.highscore_path = path.clone();
    }
    if let Some(fps) = args.fps {
        settings.target_fps = fps;
    }
    if let Some(rule) = &args.level_rule {
        settings.level_up_rule = LevelUpRule::from_str(rule)
            .with_context(|| format!("unknown level rule {rule:?}"))?;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let settings = load_settings(&args)?;

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!(
        "Tap Game starting (seed {}, level rule {})",
        seed,
        settings.level_up_rule.as_str()
    );

    let highscore = load_highscore(&settings.highscore_path);
    let mut state = WorldState::new(seed, highscore).with_level_rule(settings.level_up_rule);

    let (width, height) = (VIEWPORT_WIDTH as usize, VIEWPORT_HEIGHT as usize);
    let mut window =
        GameWindow::open(&settings, width, height).context("failed to open game window")?;
    let font = HudFont::embedded().context("failed to parse embedded HUD font")?;
    let mut frame = Framebuffer::new(width, height).with_font(font);

    while window.is_open() {
        let input = window.poll_input();
        if input.quit {
            break;
        }
        tick(&mut state, &input.tick);
        render(&state, &mut frame);
        window.present(&frame).context("failed to present frame")?;
    }

    state.record_highscore();
    if let Err(e) = save_highscore(&settings.highscore_path, state.highscore) {
        log::error!(
            "Failed to save high score to {}: {}",
            settings.highscore_path.display(),
            e
        );
    }

    log::info!("Tap Game exiting");
    Ok(())
}
