//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub critique: CritiqueConfig,
    #[serde(default)]
    pub recommendations: RecommendationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub mode: MatchMode,
}

/// Which skill equivalence rule the engine applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Tokenized comparison through an alias table
    #[default]
    Strict,
    /// Bidirectional substring test plus `.js` / `js` folding
    Loose,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points awarded when every requirement is matched
    pub skill_weight: f64,
    pub experience_points_per_role: f64,
    pub experience_cap: f64,
    pub baseline: f64,
    pub max_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CritiqueConfig {
    pub min_summary_chars: usize,
    pub min_skills: usize,
    pub min_bullets_per_role: usize,
    pub achievement_verbs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    pub strategy: CourseStrategy,
    /// Fixed seed for the random strategy; entropy-seeded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Minimum Jaro-Winkler similarity for a near-miss hint
    pub near_miss_threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStrategy {
    #[default]
    Random,
    Stable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::Strict,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill_weight: 60.0,
            experience_points_per_role: 10.0,
            experience_cap: 30.0,
            baseline: 10.0,
            max_score: 100.0,
        }
    }
}

impl Default for CritiqueConfig {
    fn default() -> Self {
        Self {
            min_summary_chars: 50,
            min_skills: 5,
            min_bullets_per_role: 2,
            achievement_verbs: [
                "increased", "decreased", "improved", "reduced",
                "achieved", "delivered", "generated", "saved",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            strategy: CourseStrategy::Random,
            seed: None,
            near_miss_threshold: 0.85,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the per-user config path, writing defaults on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        let weights = [
            ("skill_weight", scoring.skill_weight),
            ("experience_points_per_role", scoring.experience_points_per_role),
            ("experience_cap", scoring.experience_cap),
            ("baseline", scoring.baseline),
            ("max_score", scoring.max_score),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ResumeAnalyzerError::Configuration(format!(
                    "scoring.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if scoring.max_score > 100.0 {
            return Err(ResumeAnalyzerError::Configuration(
                "scoring.max_score cannot exceed 100".to_string(),
            ));
        }

        let threshold = self.recommendations.near_miss_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ResumeAnalyzerError::Configuration(format!(
                "recommendations.near_miss_threshold must be within 0.0-1.0, got {}",
                threshold
            )));
        }

        if self.critique.achievement_verbs.iter().any(|v| v.trim().is_empty()) {
            return Err(ResumeAnalyzerError::Configuration(
                "critique.achievement_verbs contains an empty entry".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_scoring_formula() {
        let config = Config::default();
        assert_eq!(config.matching.mode, MatchMode::Strict);
        assert_eq!(config.scoring.skill_weight, 60.0);
        assert_eq!(config.scoring.experience_cap, 30.0);
        assert_eq!(config.critique.min_summary_chars, 50);
        assert_eq!(config.critique.achievement_verbs.len(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.matching.mode = MatchMode::Loose;
        config.recommendations.strategy = CourseStrategy::Stable;
        config.recommendations.seed = Some(7);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.matching.mode, MatchMode::Loose);
        assert_eq!(loaded.recommendations.strategy, CourseStrategy::Stable);
        assert_eq!(loaded.recommendations.seed, Some(7));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[matching]\nmode = \"loose\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.matching.mode, MatchMode::Loose);
        assert_eq!(loaded.scoring.baseline, 10.0);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[matching]\nmode = \"fuzzy\"\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ResumeAnalyzerError::Configuration(_))
        ));

        let mut config = Config::default();
        config.recommendations.near_miss_threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.scoring.baseline = -1.0;
        assert!(config.validate().is_err());
    }
}
