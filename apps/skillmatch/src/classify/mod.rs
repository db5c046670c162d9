// Skill/section classifier.
// Detects job postings, splits required/preferred regions, extracts skills.
// Pure and synchronous; the taxonomy is shared read-only behind an Arc.

pub mod detector;
pub mod sections;
pub mod skills;
pub mod taxonomy;

use std::sync::{Arc, LazyLock};

use crate::config::{ClassifierSettings, Config};
use crate::errors::Result;
use crate::models::{ClassificationResult, ExtractedSkill};

pub use detector::JobPostingSignal;
pub use sections::{find_section, SectionKind};
pub use taxonomy::{SkillCategory, SkillTaxonomy};

/// A taxonomy plus thresholds. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Classifier {
    taxonomy: Arc<SkillTaxonomy>,
    settings: ClassifierSettings,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(SkillTaxonomy::builtin(), ClassifierSettings::default())
    }
}

impl Classifier {
    pub fn new(taxonomy: Arc<SkillTaxonomy>, settings: ClassifierSettings) -> Self {
        Self { taxonomy, settings }
    }

    /// Built-in taxonomy, extended from `config.taxonomy_path` when set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let builtin = SkillTaxonomy::builtin();
        let taxonomy = match &config.taxonomy_path {
            Some(path) => Arc::new(builtin.extended_from_file(path)?),
            None => builtin,
        };
        Ok(Self::new(taxonomy, config.classifier.clone()))
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    pub fn is_job_posting(&self, page_text: &str, page_url: &str) -> bool {
        self.detect(page_text, page_url).is_job_posting
    }

    pub fn detect(&self, page_text: &str, page_url: &str) -> JobPostingSignal {
        detector::detect(page_text, page_url, &self.settings)
    }

    pub fn find_section<'a>(&self, text: &'a str, kind: SectionKind) -> Option<&'a str> {
        sections::find_section(text, kind)
    }

    pub fn extract_skills(&self, text: &str) -> Vec<ExtractedSkill> {
        skills::extract_skills(text, &self.taxonomy, &self.settings)
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        skills::classify(text, &self.taxonomy, &self.settings)
    }
}

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::default);

/// Job-posting check with the built-in lists and default thresholds.
pub fn is_job_posting(page_text: &str, page_url: &str) -> bool {
    DEFAULT_CLASSIFIER.is_job_posting(page_text, page_url)
}

/// Skill extraction with the built-in taxonomy and default settings.
pub fn extract_skills(text: &str) -> Vec<ExtractedSkill> {
    DEFAULT_CLASSIFIER.extract_skills(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Importance, Section};
    use std::io::Write;

    #[test]
    fn test_free_functions_use_defaults() {
        assert!(!is_job_posting("", ""));
        assert!(extract_skills("").is_empty());
        assert!(is_job_posting(
            "Job description. Responsibilities. Requirements. Benefits.",
            "https://example.com"
        ));
    }

    #[test]
    fn test_from_config_loads_extra_taxonomy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "finance", "skills": ["bookkeeping"]}}]"#).unwrap();

        let config = Config {
            taxonomy_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let classifier = Classifier::from_config(&config).unwrap();

        let skills = classifier.extract_skills("Requirements: bookkeeping");
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].category, "finance");
        assert_eq!(skills[0].importance, Importance::High);
        assert_eq!(skills[0].section, Section::Required);
    }

    #[test]
    fn test_from_config_without_path_shares_builtin() {
        let classifier = Classifier::from_config(&Config::default()).unwrap();
        assert_eq!(classifier.taxonomy(), SkillTaxonomy::builtin().as_ref());
    }

    #[test]
    fn test_from_config_missing_file_is_error() {
        let config = Config {
            taxonomy_path: Some("/no/such/taxonomy.json".into()),
            ..Config::default()
        };
        assert!(Classifier::from_config(&config).is_err());
    }

    #[test]
    fn test_classifier_settings_flow_into_detection() {
        let classifier = Classifier::new(
            SkillTaxonomy::builtin(),
            ClassifierSettings {
                min_keywords: 1,
                ..ClassifierSettings::default()
            },
        );
        assert!(classifier.is_job_posting("Fully remote", "https://example.com"));
    }

    #[test]
    fn test_method_find_section_borrows_input() {
        let classifier = Classifier::default();
        let text = String::from("Preferred: Flutter");
        assert_eq!(
            classifier.find_section(&text, SectionKind::Preferred),
            Some("Preferred: Flutter")
        );
    }
}
