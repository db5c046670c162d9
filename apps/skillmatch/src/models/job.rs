use serde::{Deserialize, Serialize};

use super::skill::ExtractedSkill;
use crate::classify::taxonomy::SkillCategory;

/// A single word from a document with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub frequency: u32,
}

/// A resume term with its combined ranking weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedKeyword {
    pub keyword: String,
    pub weight: u32,
}

/// Structured view of a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedJob {
    pub title: String,
    pub company: String,
    pub requirements: Vec<String>,
    pub skills: Vec<ExtractedSkill>,
    /// e.g. "5+ years experience"
    pub experience: Vec<String>,
    /// e.g. "education: computer science"
    pub education: Vec<String>,
    pub keyword_inventory: Vec<KeywordEntry>,
    pub full_text: String,
}

/// Structured view of resume text that was already extracted from a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub skills: Vec<String>,
    /// Same matches as `skills`, grouped by taxonomy category.
    pub skills_by_category: Vec<SkillCategory>,
    pub technical_terms: Vec<String>,
    /// Heaviest terms first, at most 30.
    pub ranked_keywords: Vec<RankedKeyword>,
    pub keyword_inventory: Vec<KeywordEntry>,
    pub full_text: String,
}

impl ResumeProfile {
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keyword_inventory.iter().any(|k| k.keyword == keyword)
    }
}
