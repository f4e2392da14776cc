use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use macroquad::prelude::*;

/// The best score so far, kept in a text file as a decimal number.
#[derive(Debug, Clone)]
pub struct HighScore {
    path: PathBuf,
    best: u32,
}

impl HighScore {
    /// Reads the high score file. A missing or unreadable file counts
    /// as a high score of 0.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match fs::read_to_string(&path) {
            Ok(text) => text.trim().parse::<u32>().unwrap_or_else(|e| {
                warn!("High score file {path:?} is corrupt: {e}");
                0
            }),
            Err(e) => {
                warn!("Can't read high score file {path:?}: {e}");
                0
            }
        };

        info!("High score: {best}");
        Self { path, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Records `score` if it beats the best one and overwrites the file.
    /// Returns whether it was a new high score.
    pub fn submit(&mut self, score: u32) -> anyhow::Result<bool> {
        if score <= self.best {
            return Ok(false);
        }

        self.best = score;
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("writing high score to {:?}", self.path))?;
        info!("New high score: {score}");

        Ok(true)
    }
}
