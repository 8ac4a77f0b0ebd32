use std::path::PathBuf;

use clap::Parser;

use crate::high_score::HighScoreFile;
use crate::settings::Settings;

/// Upper bound for `--ships`.
pub const MAX_SHIPS: u32 = 9;

#[derive(Parser, Debug, Clone)]
#[command(name = "alien_invasion")]
#[command(about = "Shoot down the alien fleet before it reaches your ship")]
pub struct Args {
    /// File the high score is kept in [default: ~/.alien_invasion_high_score]
    #[arg(long, value_name = "PATH")]
    pub high_score_file: Option<PathBuf>,

    /// Frame-rate cap
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Spare ships per game
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_SHIPS as i64))]
    pub ships: Option<u32>,

    /// Bullets allowed on screen at once
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub bullets: Option<u32>,

    /// Write logs to this file (filtered by RUST_LOG, default `info`)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn high_score_path(&self) -> PathBuf {
        self.high_score_file
            .clone()
            .unwrap_or_else(HighScoreFile::default_path)
    }

    /// Apply command-line overrides on top of the default settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(ships) = self.ships {
            settings.ship_limit = ships;
        }
        if let Some(bullets) = self.bullets {
            settings.bullets_allowed = bullets as usize;
        }
    }
}
