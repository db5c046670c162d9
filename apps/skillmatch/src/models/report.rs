use serde::{Deserialize, Serialize};

/// Result of comparing a resume against a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// 0.0 – 100.0, two decimals
    pub match_percentage: f64,
    pub key_findings: Vec<String>,
    pub missing_skills: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    /// "tfidf" | "coverage"
    pub scorer_backend: String,
}
