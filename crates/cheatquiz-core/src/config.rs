//! Quiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::GameMode;
use crate::session::DEFAULT_SENTINEL;

/// Top-level cheatquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Markdown cheatsheet to practice.
    #[serde(default = "default_source")]
    pub source: PathBuf,
    /// Answer that ends the session.
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
    /// Color output.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Fixed shuffle seed (random when unset).
    #[serde(default)]
    pub seed: Option<u64>,
    /// How many questions a session asks.
    #[serde(default)]
    pub mode: GameMode,
}

fn default_source() -> PathBuf {
    PathBuf::from("./vim-cheatsheet.md")
}
fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}
fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            sentinel: default_sentinel(),
            color: true,
            seed: None,
            mode: GameMode::default(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `cheatquiz.toml` in the current directory
/// 2. `~/.config/cheatquiz/config.toml`
///
/// Environment variable overrides: `CHEATQUIZ_SOURCE`, `CHEATQUIZ_SEED`.
pub fn load_config() -> Result<QuizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("cheatquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    if let Ok(source) = std::env::var("CHEATQUIZ_SOURCE") {
        config.source = PathBuf::from(source);
    }

    if let Ok(seed) = std::env::var("CHEATQUIZ_SEED") {
        match seed.parse() {
            Ok(seed) => config.seed = Some(seed),
            Err(_) => tracing::warn!("ignoring non-numeric CHEATQUIZ_SEED: {seed}"),
        }
    }

    Ok(config)
}

/// Parse a TOML string into a `QuizConfig`.
pub fn parse_config_str(content: &str) -> Result<QuizConfig> {
    let config: QuizConfig = toml::from_str(content)?;
    if config.sentinel.is_empty() {
        anyhow::bail!("sentinel must not be empty");
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("cheatquiz"))
}
