use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

/// Persists the single high-score integer as decimal text.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored high score.
    ///
    /// A missing file is created holding 0. An unparsable file is reset to
    /// 0. Any other read error is treated as "no high score yet".
    pub fn load(&self) -> u32 {
        match fs::read(&self.path) {
            Ok(bytes) => match parse_score(&bytes) {
                Some(value) => {
                    info!("Loaded high score {value} from {}", self.path.display());
                    value
                }
                None => {
                    warn!(
                        "Corrupt high score in {}, resetting to 0",
                        self.path.display()
                    );
                    self.reset()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No high score at {}, starting at 0", self.path.display());
                self.reset()
            }
            Err(e) => {
                warn!("Failed to read high score from {}: {e}", self.path.display());
                0
            }
        }
    }

    pub fn save(&self, value: u32) -> Result<()> {
        fs::write(&self.path, format!("{value}\n"))
            .with_context(|| format!("failed to write high score to {}", self.path.display()))
    }

    fn reset(&self) -> u32 {
        if let Err(e) = self.save(0) {
            warn!("{e:#}");
        }
        0
    }
}

fn parse_score(bytes: &[u8]) -> Option<u32> {
    std::str::from_utf8(bytes).ok()?.trim().parse().ok()
}
