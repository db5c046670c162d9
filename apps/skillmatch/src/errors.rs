use std::path::PathBuf;

use thiserror::Error;

/// Library-level error type.
/// Classification itself never fails; only loading and configuration do.
#[derive(Debug, Error)]
pub enum SkillmatchError {
    #[error("Failed to read taxonomy file {path}: {source}")]
    TaxonomyIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid taxonomy file: {0}")]
    TaxonomyFormat(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Environment loading failed; carries the whole context chain.
    #[error("Failed to load configuration: {0:#}")]
    Config(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SkillmatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_io_message_includes_path() {
        let err = SkillmatchError::TaxonomyIo {
            path: PathBuf::from("/missing/skills.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/missing/skills.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_config_load_error_converts_with_context() {
        let load = || -> Result<crate::config::Config> {
            Ok(crate::config::Config::from_lookup(|key: &str| {
                (key == "SKILLMATCH_MIN_KEYWORDS").then(|| "many".to_string())
            })?)
        };
        let err = load().unwrap_err();
        assert!(matches!(err, SkillmatchError::Config(_)));
        assert!(err.to_string().contains("SKILLMATCH_MIN_KEYWORDS"));
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: SkillmatchError = json_err.into();
        assert!(matches!(err, SkillmatchError::TaxonomyFormat(_)));
    }
}
