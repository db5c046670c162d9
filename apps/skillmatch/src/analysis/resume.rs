//! Resume profiling over text that a document decoder already produced.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;

use super::job_parser::INVENTORY_MIN_WORD_LEN;
use crate::classify::taxonomy::is_stopword;
use crate::classify::Classifier;
use crate::models::{KeywordEntry, RankedKeyword, ResumeProfile};
use crate::text::{tokenize, word_frequency};

const RANKED_KEYWORD_LIMIT: usize = 30;
const TECHNICAL_TERM_WEIGHT: u32 = 3;
const RAKE_PHRASE_WEIGHT: u32 = 2;

const TECHNICAL_SUFFIXES: &[&str] = &[
    "ing", "tion", "ment", "ity", "ance", "ence", "logy", "graphy", "metry", "scope", "ware",
    "script", "kit", "api", "sdk", "ide", "db",
];

const TECHNICAL_PREFIXES: &[&str] = &[
    "micro", "macro", "hyper", "super", "multi", "inter", "intra", "trans", "auto", "bio",
];

static TECHNICAL_TERM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // acronyms: AWS, API
        r"\b[A-Z]{2,}\b",
        // CamelCase: PostgreSQL, JavaScript
        r"\b[A-Z][a-z]+[A-Z]\w*\b",
        // source files: main.rs, app.py
        r"\b\w+\.(?:js|ts|py|java|cpp|go|rs)\b",
        // versioned names: python-3.11
        r"\b\w+-\d+\.\d+\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("technical term patterns are valid regexes"))
    .collect()
});

/// Candidate phrases never span punctuation or a line break.
static PHRASE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\n,;:.!?()\[\]{}"]|\s[-–]\s"#).expect("phrase break regex is valid")
});

/// A RAKE candidate phrase with its score (sum of member word scores).
#[derive(Debug, Clone, PartialEq)]
pub struct RakePhrase {
    pub phrase: String,
    pub score: f64,
}

impl ResumeProfile {
    pub fn from_text(classifier: &Classifier, text: &str) -> Self {
        let skills = classifier.taxonomy().matches_in(text);
        let technical_terms = technical_terms(text);
        let keyword_inventory = word_frequency(text, INVENTORY_MIN_WORD_LEN);
        let ranked_keywords = rank_keywords(
            &technical_terms,
            &rake_phrases(text),
            &keyword_inventory,
            &skills,
        );

        let profile = ResumeProfile {
            skills_by_category: classifier.taxonomy().matches_by_category(text),
            skills,
            technical_terms,
            ranked_keywords,
            keyword_inventory,
            full_text: text.to_string(),
        };
        tracing::debug!(
            skills = profile.skills.len(),
            categories = profile.skills_by_category.len(),
            technical_terms = profile.technical_terms.len(),
            ranked_keywords = profile.ranked_keywords.len(),
            "Profiled resume text"
        );
        profile
    }
}

/// Acronyms, CamelCase identifiers, source-file names and versioned names,
/// lowercased and sorted.
pub fn technical_terms(text: &str) -> Vec<String> {
    let terms: BTreeSet<String> = TECHNICAL_TERM_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text))
        .map(|m| m.as_str().to_lowercase())
        .collect();
    terms.into_iter().collect()
}

/// Rapid automatic keyword extraction.
///
/// Candidates are maximal runs of non-stopword tokens between punctuation.
/// Each word scores `degree / frequency`, where degree sums the lengths of
/// the candidates it appears in. Distinct phrases come back best first; ties
/// keep first-appearance order.
pub fn rake_phrases(text: &str) -> Vec<RakePhrase> {
    let mut candidates: Vec<Vec<String>> = Vec::new();
    for chunk in PHRASE_BREAK_RE.split(text) {
        let mut current: Vec<String> = Vec::new();
        for word in tokenize(chunk) {
            if is_stopword(&word) || word.chars().all(|c| c.is_ascii_digit()) {
                if !current.is_empty() {
                    candidates.push(std::mem::take(&mut current));
                }
            } else {
                current.push(word);
            }
        }
        if !current.is_empty() {
            candidates.push(current);
        }
    }

    // word -> (frequency, degree)
    let mut stats: HashMap<&str, (f64, f64)> = HashMap::new();
    for candidate in &candidates {
        let len = candidate.len() as f64;
        for word in candidate {
            let entry = stats.entry(word.as_str()).or_insert((0.0, 0.0));
            entry.0 += 1.0;
            entry.1 += len;
        }
    }

    let mut phrases: Vec<RakePhrase> = Vec::new();
    for candidate in &candidates {
        let phrase = candidate.join(" ");
        if phrases.iter().any(|p| p.phrase == phrase) {
            continue;
        }
        let score = candidate
            .iter()
            .filter_map(|word| stats.get(word.as_str()))
            .map(|(freq, degree)| degree / freq)
            .sum();
        phrases.push(RakePhrase { phrase, score });
    }

    phrases.sort_by(|a, b| b.score.total_cmp(&a.score));
    phrases
}

/// Heuristic for vocabulary that reads as technical: a known suffix such as
/// `-ware` or `-script`, or a known prefix such as `micro-` or `multi-`.
pub fn is_technical_term(term: &str) -> bool {
    TECHNICAL_SUFFIXES.iter().any(|s| term.ends_with(s))
        || TECHNICAL_PREFIXES.iter().any(|p| term.starts_with(p))
}

/// Combines the three term sources into one weighted list: each technical
/// term adds 3, each RAKE phrase adds 2, each inventory word adds its count.
/// Terms shorter than three characters, numbers and non-technical vocabulary
/// are dropped; at most 30 remain, heaviest first.
pub fn rank_keywords(
    technical_terms: &[String],
    phrases: &[RakePhrase],
    inventory: &[KeywordEntry],
    skills: &[String],
) -> Vec<RankedKeyword> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut ranked: Vec<RankedKeyword> = Vec::new();

    let weighted = technical_terms
        .iter()
        .map(|t| (t.as_str(), TECHNICAL_TERM_WEIGHT))
        .chain(phrases.iter().map(|p| (p.phrase.as_str(), RAKE_PHRASE_WEIGHT)))
        .chain(inventory.iter().map(|e| (e.keyword.as_str(), e.frequency)));

    for (term, weight) in weighted {
        match index.get(term) {
            Some(&i) => ranked[i].weight += weight,
            None => {
                index.insert(term.to_string(), ranked.len());
                ranked.push(RankedKeyword {
                    keyword: term.to_string(),
                    weight,
                });
            }
        }
    }

    ranked.retain(|k| {
        let term = k.keyword.as_str();
        term.chars().count() > 2
            && !term.chars().all(|c| c.is_numeric())
            && (technical_terms.iter().any(|t| t == term)
                || skills.iter().any(|s| s == term)
                || is_technical_term(term))
    });
    // stable: equal weights stay in discovery order
    ranked.sort_by(|a, b| b.weight.cmp(&a.weight));
    ranked.truncate(RANKED_KEYWORD_LIMIT);
    ranked
}
