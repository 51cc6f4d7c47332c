use std::path::Path;

use crate::error::ConfigError;

/// Search strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}' (expected 'easy', 'medium' or 'hard')"
            )),
        }
    }
}

/// Minimax depth bound for each difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DepthTable {
    pub easy: u8,
    pub medium: u8,
    pub hard: u8,
}

impl Default for DepthTable {
    fn default() -> Self {
        Self {
            easy: 1,
            medium: 2,
            hard: 4,
        }
    }
}

impl DepthTable {
    /// Same depth for every tier
    pub fn uniform(depth: u8) -> Self {
        Self {
            easy: depth,
            medium: depth,
            hard: depth,
        }
    }

    pub fn depth(&self, difficulty: Difficulty) -> u8 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Engine configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub depths: DepthTable,
    /// Participants in turn rotation (2 or 3)
    pub players: u8,
    /// Transposition table slots per search
    pub tt_capacity: usize,
    /// Seed for the Zobrist key generator
    pub zobrist_seed: u64,
    /// Wall-clock budget checked between root candidates
    pub time_limit_ms: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depths: DepthTable::default(),
            players: 2,
            tt_capacity: 1 << 16,
            zobrist_seed: 0x1234_5678_9ABC_DEF0,
            time_limit_ms: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, depth) in [
            ("easy", self.depths.easy),
            ("medium", self.depths.medium),
            ("hard", self.depths.hard),
        ] {
            if depth == 0 {
                return Err(ConfigError::Validation(format!(
                    "depths.{name} must be >= 1"
                )));
            }
        }
        if !(2..=3).contains(&self.players) {
            return Err(ConfigError::Validation(
                "players must be 2 or 3".into(),
            ));
        }
        if self.tt_capacity == 0 {
            return Err(ConfigError::Validation(
                "tt_capacity must be > 0".into(),
            ));
        }
        Ok(())
    }

    pub fn with_depths(mut self, depths: DepthTable) -> Self {
        self.depths = depths;
        self
    }

    pub fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }
}
