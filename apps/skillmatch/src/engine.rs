use std::sync::Arc;

use tracing::info;

use crate::analysis::{parse_job, scorer_for, MatchScorer};
use crate::classify::Classifier;
use crate::config::Config;
use crate::errors::Result;
use crate::models::{MatchReport, ParsedJob, ResumeProfile};
use crate::telemetry;

/// Classifier plus match scorer, built once from `Config` and shared.
#[derive(Clone)]
pub struct Engine {
    pub classifier: Classifier,
    /// Pluggable match scorer. Default: TfIdfMatchScorer. Swap via SKILLMATCH_SCORER.
    pub scorer: Arc<dyn MatchScorer>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Classifier::default(), Arc::from(scorer_for(Default::default())))
    }
}

impl Engine {
    pub fn new(classifier: Classifier, scorer: Arc<dyn MatchScorer>) -> Self {
        Self { classifier, scorer }
    }

    /// Loads `Config` from the environment (and `.env`), installs logging at
    /// its `RUST_LOG` level, then builds the engine.
    pub fn from_env() -> Result<Self> {
        Self::bootstrap(Config::from_env()?)
    }

    fn bootstrap(config: Config) -> Result<Self> {
        telemetry::init_from_config(&config);
        Self::from_config(&config)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let classifier = Classifier::from_config(config)?;
        let scorer: Arc<dyn MatchScorer> = Arc::from(scorer_for(config.scorer));

        info!(
            categories = classifier.taxonomy().categories().len(),
            skills = classifier.taxonomy().len(),
            scorer = scorer.name(),
            "Skillmatch engine initialized"
        );

        Ok(Self::new(classifier, scorer))
    }

    pub fn parse_job(&self, job_text: &str) -> ParsedJob {
        parse_job(&self.classifier, job_text)
    }

    pub fn profile_resume(&self, resume_text: &str) -> ResumeProfile {
        ResumeProfile::from_text(&self.classifier, resume_text)
    }

    /// Parses both texts and scores the resume against the job.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> MatchReport {
        let job = self.parse_job(job_text);
        let resume = self.profile_resume(resume_text);
        self.scorer.score(&resume, &job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScorerBackend;

    const JOB: &str = "Backend Engineer

Requirements:
- Python and Redis
- Docker in production

Nice to have:
- React
";

    #[test]
    fn test_default_engine_uses_tfidf() {
        assert_eq!(Engine::default().scorer.name(), "tfidf");
    }

    #[test]
    fn test_from_config_selects_scorer() {
        let config = Config {
            scorer: ScorerBackend::Coverage,
            ..Config::default()
        };
        let engine = Engine::from_config(&config).unwrap();
        assert_eq!(engine.scorer.name(), "coverage");
    }

    #[test]
    fn test_bootstrap_builds_engine_from_loaded_config() {
        let config = Config::from_lookup(|key: &str| match key {
            "SKILLMATCH_SCORER" => Some("coverage".to_string()),
            "RUST_LOG" => Some("skillmatch=debug".to_string()),
            _ => None,
        })
        .unwrap();
        let engine = Engine::bootstrap(config).unwrap();
        assert_eq!(engine.scorer.name(), "coverage");
    }

    #[test]
    fn test_analyze_reports_gap_for_missing_skill() {
        let config = Config {
            scorer: ScorerBackend::Coverage,
            ..Config::default()
        };
        let engine = Engine::from_config(&config).unwrap();
        let report = engine.analyze("Python and Redis services, shipped with Docker.", JOB);

        assert_eq!(report.scorer_backend, "coverage");
        assert_eq!(report.missing_skills, vec!["react"]);
        assert!(report.match_percentage > 50.0 && report.match_percentage < 100.0);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let engine = Engine::default();
        let resume = "Python developer with Docker experience";
        let a = engine.analyze(resume, JOB);
        let b = engine.analyze(resume, JOB);
        assert_eq!(a.match_percentage, b.match_percentage);
        assert_eq!(a.missing_skills, b.missing_skills);
        assert_eq!(a.suggestions, b.suggestions);
    }
}
