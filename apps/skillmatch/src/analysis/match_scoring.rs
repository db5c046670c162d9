//! Match scoring: pluggable, trait-based scorer comparing a resume profile
//! against a parsed job.
//!
//! Default: `TfIdfMatchScorer` (cosine similarity of TF-IDF vectors).
//! Alternative: `SkillCoverageScorer` (importance-weighted skill coverage).
//!
//! Both are deterministic; the surrounding report (missing skills, keywords,
//! findings, suggestions) is shared.

use std::collections::{HashMap, HashSet};

use crate::config::ScorerBackend;
use crate::models::{MatchReport, ParsedJob, ResumeProfile};
use crate::text::{contains_phrase, is_content_word, tokenize};

const MAX_MISSING_KEYWORDS: usize = 20;
const MAX_SUGGESTED_KEYWORDS: usize = 10;
const MAX_REQUIREMENT_SUGGESTIONS: usize = 3;
const LOW_MATCH_THRESHOLD: f64 = 50.0;
const TFIDF_MIN_WORD_LEN: usize = 2;
const REQUIREMENT_MIN_WORD_LEN: usize = 3;

const GENERAL_SUGGESTIONS: &[&str] = &[
    "Tailor your resume summary to match the job description",
    "Quantify your achievements with numbers and metrics",
    "Use action verbs to describe your experience",
];

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implementations only decide the percentage; the
/// rest of the report is built the same way for every backend.
pub trait MatchScorer: Send + Sync {
    /// Label written to `MatchReport::scorer_backend`.
    fn name(&self) -> &'static str;

    /// 0.0 – 100.0
    fn match_percentage(&self, resume: &ResumeProfile, job: &ParsedJob) -> f64;

    fn score(&self, resume: &ResumeProfile, job: &ParsedJob) -> MatchReport {
        build_report(self.name(), self.match_percentage(resume, job), resume, job)
    }
}

pub fn scorer_for(backend: ScorerBackend) -> Box<dyn MatchScorer> {
    match backend {
        ScorerBackend::TfIdf => Box::new(TfIdfMatchScorer),
        ScorerBackend::Coverage => Box::new(SkillCoverageScorer),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// TfIdfMatchScorer (default)
// ────────────────────────────────────────────────────────────────────────────

/// Cosine similarity between the TF-IDF vectors of the two full texts.
///
/// idf uses the smoothed form `ln((1 + n) / (1 + df)) + 1` with n = 2, so
/// terms shared by both documents still carry weight.
pub struct TfIdfMatchScorer;

impl MatchScorer for TfIdfMatchScorer {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn match_percentage(&self, resume: &ResumeProfile, job: &ParsedJob) -> f64 {
        round2(tfidf_cosine(&resume.full_text, &job.full_text) * 100.0)
    }
}

fn term_counts(text: &str) -> HashMap<String, f64> {
    let mut counts = HashMap::new();
    for word in tokenize(text) {
        if is_content_word(&word, TFIDF_MIN_WORD_LEN) {
            *counts.entry(word).or_insert(0.0) += 1.0;
        }
    }
    counts
}

fn tfidf_cosine(a: &str, b: &str) -> f64 {
    let docs = [term_counts(a), term_counts(b)];
    let n = docs.len() as f64;

    let idf = |term: &str| {
        let df = docs.iter().filter(|d| d.contains_key(term)).count() as f64;
        ((1.0 + n) / (1.0 + df)).ln() + 1.0
    };

    let weights: Vec<HashMap<&str, f64>> = docs
        .iter()
        .map(|doc| {
            doc.iter()
                .map(|(term, tf)| (term.as_str(), tf * idf(term.as_str())))
                .collect()
        })
        .collect();

    let norm = |w: &HashMap<&str, f64>| w.values().map(|v| v * v).sum::<f64>().sqrt();
    let (norm_a, norm_b) = (norm(&weights[0]), norm(&weights[1]));
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = weights[0]
        .iter()
        .filter_map(|(term, wa)| weights[1].get(term).map(|wb| wa * wb))
        .sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

// ────────────────────────────────────────────────────────────────────────────
// SkillCoverageScorer
// ────────────────────────────────────────────────────────────────────────────

/// Share of the job's skills present in the resume, weighted by importance
/// (High 3, Medium 2, Low 1).
pub struct SkillCoverageScorer;

impl MatchScorer for SkillCoverageScorer {
    fn name(&self) -> &'static str {
        "coverage"
    }

    fn match_percentage(&self, resume: &ResumeProfile, job: &ParsedJob) -> f64 {
        let resume_text = resume.full_text.to_lowercase();
        let (covered, total) = job
            .skills
            .iter()
            .fold((0.0, 0.0), |(covered, total), skill| {
                let weight = skill.importance.weight();
                if resume_has_skill(resume, &resume_text, &skill.text) {
                    (covered + weight, total + weight)
                } else {
                    (covered, total + weight)
                }
            });

        if total > 0.0 {
            round2(covered / total * 100.0)
        } else {
            0.0
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared report construction
// ────────────────────────────────────────────────────────────────────────────

fn resume_has_skill(resume: &ResumeProfile, resume_text_lower: &str, skill: &str) -> bool {
    let skill = skill.to_lowercase();
    resume.skills.iter().any(|s| *s == skill) || contains_phrase(resume_text_lower, &skill)
}

fn build_report(
    backend: &str,
    match_percentage: f64,
    resume: &ResumeProfile,
    job: &ParsedJob,
) -> MatchReport {
    let resume_text = resume.full_text.to_lowercase();

    let missing_skills: Vec<String> = job
        .skills
        .iter()
        .filter(|skill| !resume_has_skill(resume, &resume_text, &skill.text))
        .map(|skill| skill.text.clone())
        .collect();

    let missing_keywords: Vec<String> = job
        .keyword_inventory
        .iter()
        .filter(|entry| entry.frequency > 1 && !resume.has_keyword(&entry.keyword))
        .map(|entry| entry.keyword.clone())
        .collect();

    let mut key_findings = Vec::new();
    if match_percentage < LOW_MATCH_THRESHOLD {
        key_findings.push("Your resume has a low match rate with this job posting".to_string());
    }
    if !missing_skills.is_empty() {
        key_findings.push(format!(
            "You're missing {} key skills mentioned in the job posting",
            missing_skills.len()
        ));
    }
    if !missing_keywords.is_empty() {
        key_findings.push(format!(
            "There are {} important keywords missing from your resume",
            missing_keywords.len()
        ));
    }

    let suggestions = build_suggestions(&missing_skills, &missing_keywords, resume, job);

    tracing::debug!(
        backend,
        match_percentage,
        missing_skills = missing_skills.len(),
        missing_keywords = missing_keywords.len(),
        "Scored resume against job"
    );

    MatchReport {
        match_percentage,
        key_findings,
        missing_skills,
        missing_keywords: missing_keywords
            .into_iter()
            .take(MAX_MISSING_KEYWORDS)
            .collect(),
        suggestions,
        scorer_backend: backend.to_string(),
    }
}

fn build_suggestions(
    missing_skills: &[String],
    missing_keywords: &[String],
    resume: &ResumeProfile,
    job: &ParsedJob,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !missing_skills.is_empty() {
        suggestions.push(format!(
            "Add these skills to your resume: {}",
            missing_skills.join(", ")
        ));
    }

    if !missing_keywords.is_empty() {
        let top: Vec<&str> = missing_keywords
            .iter()
            .take(MAX_SUGGESTED_KEYWORDS)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Consider incorporating these keywords: {}",
            top.join(", ")
        ));
    }

    let resume_words: HashSet<String> = tokenize(&resume.full_text).into_iter().collect();
    for requirement in job.requirements.iter().take(MAX_REQUIREMENT_SUGGESTIONS) {
        let words: Vec<String> = tokenize(requirement)
            .into_iter()
            .filter(|w| is_content_word(w, REQUIREMENT_MIN_WORD_LEN))
            .collect();
        if !words.is_empty() && !words.iter().any(|w| resume_words.contains(w)) {
            suggestions.push(format!("Address this requirement: '{requirement}'"));
        }
    }

    suggestions.extend(GENERAL_SUGGESTIONS.iter().map(|s| s.to_string()));
    suggestions
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
