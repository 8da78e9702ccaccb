//! Birthday greeting screen simulator for desktop.
//!
//! Runs the greeting animation in an embedded-graphics-simulator window, or
//! renders a single frame to a PNG file with `--snapshot`.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod config;
mod error;
mod locale;
mod profiling;
mod scene_config;
mod screens;
mod sprites;
mod styles;
mod surface;
mod timing;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use greeting_common::{GreetingScene, GreetingStrings, Millis};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_WINDOW_SCALE, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::error::Result;
use crate::locale::{Locale, LocaleStrings};
use crate::screens::{GreetingOptions, run_greeting_screen, save_snapshot};

#[derive(Parser, Debug)]
#[command(author, version, about = "Animated birthday greeting screen", long_about = None)]
struct Cli {
    /// Scene configuration file (JSON). Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective scene configuration as JSON and exit.
    #[arg(long)]
    dump_config: bool,

    /// Language of the greeting strings.
    #[arg(short, long, value_enum, default_value_t = Locale::En)]
    locale: Locale,

    /// Replace the localized greeting line.
    #[arg(long)]
    greeting: Option<String>,

    /// Replace the localized "from" line.
    #[arg(long)]
    from: Option<String>,

    /// Window (or snapshot) pixel scale.
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SCALE)]
    scale: u32,

    /// Draw timing statistics and recent timeline events.
    #[arg(long)]
    overlay: bool,

    /// Close the window after this many seconds.
    #[arg(long)]
    duration_secs: Option<u64>,

    /// Render one frame to this PNG file instead of opening a window.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Scene time of the snapshot frame, in milliseconds.
    #[arg(long, default_value_t = 0, requires = "snapshot")]
    at_ms: Millis,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let scene_config = scene_config::load(cli.config.as_deref())?;
    if cli.dump_config {
        println!("{}", scene_config::to_json(&scene_config)?);
        return Ok(());
    }

    let resources = LocaleStrings::new(cli.locale, cli.greeting, cli.from);
    let strings = GreetingStrings::load(&resources)?;
    let mut scene = GreetingScene::new(&scene_config)?;
    info!(
        locale = ?cli.locale,
        balloons = scene.balloons().len(),
        confetti = scene.confetti().len(),
        "scene ready"
    );

    if let Some(path) = cli.snapshot {
        return save_snapshot(&mut scene, &strings, cli.at_ms, &path, cli.scale);
    }

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(cli.scale.max(1)).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let options = GreetingOptions {
        overlay: cli.overlay,
        duration: cli.duration_secs.map(Duration::from_secs),
    };
    let ran_to_end = run_greeting_screen(&mut display, &mut window, &mut scene, &strings, options);
    info!(ran_to_end, scene_ms = scene.now(), "exiting");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}
