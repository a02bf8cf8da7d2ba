//! High score persistence
//!
//! A single integer survives between sessions, stored as a small JSON
//! envelope. Missing or corrupt files are treated as "no high score yet";
//! only writes can fail visibly.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// Load the stored high score, defaulting to zero on any problem
pub fn load(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str::<HighScoreFile>(&json) {
            Ok(file) => {
                log::info!("loaded high score {}", file.high_score);
                file.high_score
            }
            Err(err) => {
                log::warn!("high score file is corrupt ({err}); starting fresh");
                0
            }
        },
        Err(_) => {
            log::info!("no high score file, starting fresh");
            0
        }
    }
}

/// Persist a new high score
pub fn save(path: &Path, high_score: u32) -> io::Result<()> {
    let json = serde_json::to_string(&HighScoreFile { high_score }).map_err(io::Error::other)?;
    fs::write(path, json)?;
    log::info!("high score {high_score} saved");
    Ok(())
}
