use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use simplelog::{Config as LogConfig, WriteLogger};

use arcade_snake::audio::{AudioCue, CuePlayer, SilentCue};
use arcade_snake::game::GameConfig;
use arcade_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "arcade_snake")]
#[command(version, about = "Classic arcade Snake for the terminal")]
struct Cli {
    /// Ticks per second
    #[arg(long, default_value = "20")]
    fps: u32,

    /// Board width in pixels
    #[arg(long, default_value = "700")]
    width: i32,

    /// Board height in pixels
    #[arg(long, default_value = "700")]
    height: i32,

    /// Initial snake length in cells
    #[arg(long, default_value = "5")]
    snake_length: usize,

    /// Cell size in pixels
    #[arg(long, default_value = "20")]
    cell_size: i32,

    /// Sound file played on eating food (synthesized tone when omitted)
    #[arg(long)]
    eat_sound: Option<PathBuf>,

    /// Sound file played on game over (synthesized tone when omitted)
    #[arg(long)]
    game_over_sound: Option<PathBuf>,

    /// Disable sound entirely
    #[arg(long)]
    mute: bool,

    /// Write logs to this file (the terminal is owned by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Info, LogConfig::default(), file)
            .context("failed to initialize logger")?;
    }

    let config = GameConfig {
        tick_rate: cli.fps,
        board_width: cli.width,
        board_height: cli.height,
        initial_snake_length: cli.snake_length,
        cell_size: cli.cell_size,
    };

    let audio: Arc<dyn AudioCue> = if cli.mute {
        Arc::new(SilentCue)
    } else {
        match CuePlayer::new(cli.eat_sound.as_deref(), cli.game_over_sound.as_deref()) {
            Ok(player) => Arc::new(player),
            Err(err) => {
                warn!("audio unavailable, running silent: {err:#}");
                Arc::new(SilentCue)
            }
        }
    };

    info!(
        "starting arcade_snake: {}x{} px board, {} px cells, {} ticks/sec",
        config.board_width, config.board_height, config.cell_size, config.tick_rate
    );

    let mut mode = HumanMode::new(config, audio);
    mode.run().await?;

    info!("exiting");
    Ok(())
}
