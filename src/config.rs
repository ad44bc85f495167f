//! Engine configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock reward rules. Example:
//!
//! ```toml
//! save_slot = "mathquest_v3.7_save"
//! default_grade = 3
//!
//! [rewards]
//! streak_step = 2
//!
//! [challenge]
//! length = 5
//! pass_threshold = 4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::quiz_engine::models::Grade;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV: &str = "MATHQUEST_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Key under which the profile snapshot is persisted.
    pub save_slot: String,
    pub default_grade: u8,
    pub starting_difficulty: i32,
    /// Fixed seed for reproducible sessions; `None` draws from entropy.
    pub rng_seed: Option<u64>,
    pub rewards: RewardRules,
    pub challenge: ChallengeRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            save_slot: "mathquest_v3.7_save".into(),
            default_grade: 3,
            starting_difficulty: 1,
            rng_seed: None,
            rewards: RewardRules::default(),
            challenge: ChallengeRules::default(),
        }
    }
}

/// Per-answer scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardRules {
    pub base_points: u32,
    /// Extra points per answer already in the streak.
    pub streak_bonus: u32,
    pub coins_per_correct: u32,
    /// Practice difficulty rises each time the streak reaches a multiple of this.
    pub streak_step: u32,
}

impl Default for RewardRules {
    fn default() -> Self {
        Self { base_points: 100, streak_bonus: 10, coins_per_correct: 10, streak_step: 2 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeRules {
    pub length: u32,
    /// Added to the practice difficulty for every challenge item.
    pub difficulty_offset: i32,
    /// Correct answers needed for the permanent difficulty bump.
    pub pass_threshold: u32,
    pub coin_bonus_per_point: u32,
}

impl Default for ChallengeRules {
    fn default() -> Self {
        Self { length: 5, difficulty_offset: 2, pass_threshold: 4, coin_bonus_per_point: 20 }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> EngineResult<Self> {
        let cfg: EngineConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), "loaded engine config");
        Ok(cfg)
    }

    /// Load from the file named by `MATHQUEST_CONFIG`, or defaults when unset.
    pub fn load_from_env() -> EngineResult<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_path(&path).map_err(|e| {
                warn!(%path, error = %e, "failed to load engine config");
                e
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        Grade::new(self.default_grade)?;
        if self.rewards.streak_step == 0 {
            return Err(EngineError::Config("rewards.streak_step must be at least 1".into()));
        }
        if self.challenge.length == 0 {
            return Err(EngineError::Config("challenge.length must be at least 1".into()));
        }
        if self.challenge.pass_threshold > self.challenge.length {
            return Err(EngineError::Config(format!(
                "challenge.pass_threshold ({}) exceeds challenge.length ({})",
                self.challenge.pass_threshold, self.challenge.length
            )));
        }
        if self.save_slot.trim().is_empty() {
            return Err(EngineError::Config("save_slot must not be empty".into()));
        }
        Ok(())
    }

    pub fn default_grade(&self) -> Grade {
        Grade::new(self.default_grade).unwrap_or_default()
    }
}
