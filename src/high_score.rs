/// High-score persistence: a single text file holding one decimal integer.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::stats::GameStats;

const FILE_NAME: &str = ".alien_invasion_high_score";

#[derive(Clone, Debug)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreFile { path: path.into() }
    }

    /// `$HOME/.alien_invasion_high_score`, or the working directory when
    /// `HOME` is unset.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score.  A missing file means nobody has played
    /// yet and yields 0.
    pub fn load(&self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("reading high score from {}", self.path.display()))
            }
        };
        text.trim()
            .parse()
            .with_context(|| format!("invalid high score in {}: {:?}", self.path.display(), text))
    }

    pub fn save(&self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("writing high score to {}", self.path.display()))
    }

    /// Promote the current score if it beats the high score, and write it
    /// out.  Returns whether the file was written.
    pub fn store(&self, stats: &mut GameStats) -> Result<bool> {
        if !stats.record_high_score() {
            return Ok(false);
        }
        self.save(stats.high_score)?;
        Ok(true)
    }
}
