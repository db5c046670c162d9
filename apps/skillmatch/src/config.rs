use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::errors::SkillmatchError;

/// Thresholds used by the classifier. Defaults reproduce the detector and
/// fallback behaviour exactly; override only for experimentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierSettings {
    /// Keyword hits needed when the URL belongs to a known job site.
    pub site_min_keywords: usize,
    /// Keyword hits needed on any other URL.
    pub min_keywords: usize,
    /// How many words the word-frequency tier keeps.
    pub fallback_top_words: usize,
    /// Shortest word the word-frequency tier considers.
    pub min_word_len: usize,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            site_min_keywords: 2,
            min_keywords: 4,
            fallback_top_words: 8,
            min_word_len: 4,
        }
    }
}

/// Which `MatchScorer` the engine uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorerBackend {
    #[default]
    TfIdf,
    Coverage,
}

impl FromStr for ScorerBackend {
    type Err = SkillmatchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tfidf" | "tf-idf" => Ok(ScorerBackend::TfIdf),
            "coverage" => Ok(ScorerBackend::Coverage),
            other => Err(SkillmatchError::InvalidConfig(format!(
                "unknown scorer backend '{other}' (expected 'tfidf' or 'coverage')"
            ))),
        }
    }
}

/// Library configuration loaded from environment variables.
/// Every variable is optional; missing ones fall back to defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub classifier: ClassifierSettings,
    /// JSON file with extra taxonomy categories merged into the built-in one.
    pub taxonomy_path: Option<PathBuf>,
    pub scorer: ScorerBackend,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ClassifierSettings::default();

        let classifier = ClassifierSettings {
            site_min_keywords: parse_or(
                &lookup,
                "SKILLMATCH_SITE_MIN_KEYWORDS",
                defaults.site_min_keywords,
            )?,
            min_keywords: parse_or(&lookup, "SKILLMATCH_MIN_KEYWORDS", defaults.min_keywords)?,
            fallback_top_words: parse_or(
                &lookup,
                "SKILLMATCH_FALLBACK_TOP_WORDS",
                defaults.fallback_top_words,
            )?,
            min_word_len: parse_or(&lookup, "SKILLMATCH_MIN_WORD_LEN", defaults.min_word_len)?,
        };

        if classifier.site_min_keywords > classifier.min_keywords {
            tracing::warn!(
                site_min = classifier.site_min_keywords,
                min = classifier.min_keywords,
                "Known-site keyword threshold exceeds the general threshold; site detection has no effect"
            );
        }

        let scorer = match lookup("SKILLMATCH_SCORER") {
            Some(raw) => raw
                .parse::<ScorerBackend>()
                .context("SKILLMATCH_SCORER must be 'tfidf' or 'coverage'")?,
            None => ScorerBackend::default(),
        };

        Ok(Config {
            classifier,
            taxonomy_path: lookup("SKILLMATCH_TAXONOMY_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            scorer,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<F>(lookup: &F, key: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("{key} must be a non-negative integer")),
        None => Ok(default),
    }
}
