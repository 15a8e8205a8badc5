use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_engine::BotKind;
use tictactoe_engine::types::DEFAULT_WIN_COUNT;

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

/// Full-depth search grows factorially with the number of empty squares, so
/// the board stays small.
pub const MAX_DIMENSION: usize = 10;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// Play against the computer.
    Cpu,
    /// Two humans sharing the console.
    P2p,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BotStrength {
    Random,
    Minimax,
}

impl BotStrength {
    pub fn to_bot_kind(self) -> BotKind {
        match self {
            BotStrength::Random => BotKind::Random,
            BotStrength::Minimax => BotKind::Minimax,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Computer,
    Random,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Board size; prompted for at startup when absent.
    pub dimension: Option<usize>,
    pub win_count: usize,
    /// Opponent kind; prompted for at startup when absent.
    pub opponent: Option<OpponentKind>,
    pub bot: BotStrength,
    pub first_player: FirstPlayer,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimension: None,
            win_count: DEFAULT_WIN_COUNT,
            opponent: None,
            bot: BotStrength::Minimax,
            first_player: FirstPlayer::Human,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(dimension) = self.dimension {
            validate_dimension(dimension, self.win_count)?;
        }
        if self.win_count < 3 {
            return Err("Win count must be at least 3".to_string());
        }
        Ok(())
    }
}

pub fn validate_dimension(dimension: usize, win_count: usize) -> Result<(), String> {
    if dimension < 3 || dimension > MAX_DIMENSION {
        return Err(format!("Board dimension must be between 3 and {MAX_DIMENSION}"));
    }
    if win_count > dimension {
        return Err(format!(
            "Win count ({win_count}) cannot exceed board dimension ({dimension})"
        ));
    }
    Ok(())
}

impl Config {
    /// Missing file falls back to defaults; an unreadable or invalid file is
    /// an error.
    pub fn load(path: &str) -> Result<Self, String> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file {path}: {e}"))?;
        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {path}: {e}"))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {e}"))?;

        Ok(config)
    }
}
