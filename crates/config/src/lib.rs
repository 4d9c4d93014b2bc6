//! Configuration loading, validation, and management for SkillSphere.
//!
//! Loads configuration from a TOML file with environment variable
//! overrides. Validates all settings at load time. Every parameter the
//! pipeline treats as tunable — match count, badge thresholds, cost
//! baselines, session TTL — lives here rather than in code.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidanceConfig {
    /// Career matching settings
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// Curriculum generation settings
    #[serde(default)]
    pub curriculum: CurriculumConfig,

    /// Cost/ROI calculation settings
    #[serde(default)]
    pub costs: CostConfig,

    /// Badge thresholds, ascending by percent
    #[serde(default = "default_badges")]
    pub badges: Vec<BadgeConfig>,

    /// Session store settings
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Maximum career matches returned per call
    #[serde(default = "default_max_matches")]
    pub max_matches: usize,
}

fn default_max_matches() -> usize {
    3
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_matches: default_max_matches(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumConfig {
    /// Courses attached per milestone (best-rated first)
    #[serde(default = "default_courses_per_milestone")]
    pub courses_per_milestone: usize,

    /// Hours assumed for a skill the catalog gives no estimate for
    #[serde(default = "default_estimated_hours")]
    pub default_estimated_hours: f64,
}

fn default_courses_per_milestone() -> usize {
    3
}
fn default_estimated_hours() -> f64 {
    40.0
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            courses_per_milestone: default_courses_per_milestone(),
            default_estimated_hours: default_estimated_hours(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostConfig {
    /// Assumed current annual salary when the user supplies none
    #[serde(default = "default_baseline_salary")]
    pub baseline_salary: f64,
}

fn default_baseline_salary() -> f64 {
    45_000.0
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            baseline_salary: default_baseline_salary(),
        }
    }
}

/// One badge threshold: emitted when completion first reaches `percent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeConfig {
    /// Completion percentage, 0 < percent <= 100
    pub percent: f64,
    pub name: String,
}

fn default_badges() -> Vec<BadgeConfig> {
    vec![
        BadgeConfig { percent: 25.0, name: "Quick Starter".into() },
        BadgeConfig { percent: 50.0, name: "Knowledge Builder".into() },
        BadgeConfig { percent: 75.0, name: "Skill Master".into() },
        BadgeConfig { percent: 100.0, name: "Career Ready".into() },
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle minutes before a session is eligible for eviction
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: u64,
}

fn default_ttl_minutes() -> u64 {
    60
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: default_ttl_minutes(),
        }
    }
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherConfig::default(),
            curriculum: CurriculumConfig::default(),
            costs: CostConfig::default(),
            badges: default_badges(),
            session: SessionConfig::default(),
        }
    }
}

impl GuidanceConfig {
    /// Load configuration from a file path, falling back to defaults when
    /// the file does not exist, then apply environment overrides:
    /// - `SKILLSPHERE_MAX_MATCHES`
    /// - `SKILLSPHERE_BASELINE_SALARY`
    /// - `SKILLSPHERE_SESSION_TTL_MINUTES`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;

        if let Ok(k) = std::env::var("SKILLSPHERE_MAX_MATCHES") {
            config.matcher.max_matches = k.parse().map_err(|_| {
                ConfigError::ValidationError(format!("SKILLSPHERE_MAX_MATCHES is not a number: {k}"))
            })?;
        }
        if let Ok(salary) = std::env::var("SKILLSPHERE_BASELINE_SALARY") {
            config.costs.baseline_salary = salary.parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "SKILLSPHERE_BASELINE_SALARY is not a number: {salary}"
                ))
            })?;
        }
        if let Ok(ttl) = std::env::var("SKILLSPHERE_SESSION_TTL_MINUTES") {
            config.session.ttl_minutes = ttl.parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "SKILLSPHERE_SESSION_TTL_MINUTES is not a number: {ttl}"
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path (no env overrides).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matcher.max_matches == 0 {
            return Err(ConfigError::ValidationError(
                "matcher.max_matches must be at least 1".into(),
            ));
        }

        if self.curriculum.courses_per_milestone == 0 {
            return Err(ConfigError::ValidationError(
                "curriculum.courses_per_milestone must be at least 1".into(),
            ));
        }

        if self.curriculum.default_estimated_hours <= 0.0 {
            return Err(ConfigError::ValidationError(
                "curriculum.default_estimated_hours must be positive".into(),
            ));
        }

        if self.costs.baseline_salary < 0.0 {
            return Err(ConfigError::ValidationError(
                "costs.baseline_salary must not be negative".into(),
            ));
        }

        if self.session.ttl_minutes == 0 {
            return Err(ConfigError::ValidationError(
                "session.ttl_minutes must be at least 1".into(),
            ));
        }

        let mut last = 0.0;
        for badge in &self.badges {
            if badge.percent <= last || badge.percent > 100.0 {
                return Err(ConfigError::ValidationError(format!(
                    "badge thresholds must ascend within (0, 100]: '{}' at {}",
                    badge.name, badge.percent
                )));
            }
            last = badge.percent;
        }

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
