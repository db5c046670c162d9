//! Job description parser: title, company, requirement lines, experience and
//! education asks, skills and a keyword inventory.

use std::sync::LazyLock;

use regex::Regex;

use crate::classify::{Classifier, SectionKind};
use crate::models::ParsedJob;
use crate::text::{bullet_lines, sentences, strip_bullet, word_frequency};

pub const UNKNOWN_TITLE: &str = "Unknown Job Title";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Shortest word kept in the keyword inventory.
pub const INVENTORY_MIN_WORD_LEN: usize = 3;

const TITLE_MAX_WORDS: usize = 6;
const REQUIREMENT_HINTS: &[&str] = &[
    "experience",
    "skill",
    "proficiency",
    "knowledge",
    "degree",
    "qualification",
];
const GENERIC_LEADS: &[&str] = &["our", "a", "an", "the", "this", "my", "your", "us", "you"];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("job parser patterns are valid regexes")
}

static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["job title", "position", "role"]
        .iter()
        .map(|label| compile(&format!(r"(?im)^[ \t]*{label}[ \t]*:[ \t]*(\S[^\r\n]*)")))
        .collect()
});

static COMPANY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(r"(?im)^[ \t]*company(?: name)?[ \t]*:[ \t]*(\S[^\r\n]*)"),
        compile(r"\b[Aa]bout[ \t]+([A-Z][\w&.\-]*(?:[ \t]+[A-Z][\w&.\-]*)*)[ \t]*:"),
        compile(r"(?i)\bjoin[ \t]+(?:the[ \t]+)?([^\n,.]{1,40}?)(?:'s|’s)?[ \t]+team\b"),
    ]
});

static EXPERIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(r"(\d+)\+?\s*(?:years|yrs)(?:\s*of)?\s*experience"),
        compile(r"experience(?:\s*of)?\s*(\d+)\+?\s*(?:years|yrs)"),
    ]
});

static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(?:bachelor'?s|bachelor’s|master'?s|master’s|ph\.?d|doctorate)\b(?:\s+degree)?")
});

/// Abbreviated degrees are case-sensitive and need "degree" or "in X" after
/// them, so "MS Teams" is not a master's.
static DEGREE_ABBREV_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(BS|MS|BA|MA)\s+(?:degree\b|in\s+([^.,;:\n]+))"));

static DEGREE_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\bdegree\s+in\s+([^.,;:\n]+)"));

/// Parses a job description. Never fails; unknown fields get placeholders.
pub fn parse_job(classifier: &Classifier, text: &str) -> ParsedJob {
    let job = ParsedJob {
        title: extract_title(text),
        company: extract_company(text),
        requirements: extract_requirements(classifier, text),
        skills: classifier.extract_skills(text),
        experience: extract_experience(text),
        education: extract_education(text),
        keyword_inventory: word_frequency(text, INVENTORY_MIN_WORD_LEN),
        full_text: text.to_string(),
    };

    tracing::debug!(
        title = %job.title,
        company = %job.company,
        requirements = job.requirements.len(),
        skills = job.skills.len(),
        "Parsed job description"
    );
    job
}

pub fn extract_title(text: &str) -> String {
    if let Some(title) = first_capture(&TITLE_PATTERNS, text) {
        return title;
    }

    text.lines()
        .take(3)
        .map(str::trim)
        .find(|line| !line.is_empty() && line.split_whitespace().count() <= TITLE_MAX_WORDS)
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

pub fn extract_company(text: &str) -> String {
    COMPANY_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .find(|name| !name.is_empty() && !is_generic(name))
        .unwrap_or_else(|| UNKNOWN_COMPANY.to_string())
}

fn is_generic(name: &str) -> bool {
    let lower = name.to_lowercase();
    let lead = lower.split_whitespace().next().unwrap_or("");
    GENERIC_LEADS.contains(&lead)
}

/// Items of the required section; else every bullet; else sentences that
/// mention experience, skills, knowledge and the like.
pub fn extract_requirements(classifier: &Classifier, text: &str) -> Vec<String> {
    if let Some(section) = classifier.find_section(text, SectionKind::Required) {
        let items = section_items(section);
        if !items.is_empty() {
            return items;
        }
    }

    let bullets = bullet_lines(text);
    if !bullets.is_empty() {
        return bullets.into_iter().map(str::to_string).collect();
    }

    sentences(text)
        .into_iter()
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            REQUIREMENT_HINTS.iter().any(|hint| lower.contains(hint))
        })
        .map(str::to_string)
        .collect()
}

/// Splits a section into item lines, dropping its heading.
fn section_items(section: &str) -> Vec<String> {
    let mut lines = section.lines();
    let first = lines.next().unwrap_or("");
    let rest: Vec<&str> = lines.collect();

    let lead = match first.split_once(':') {
        Some((_, after)) => after,
        // a heading alone on its line
        None if !rest.is_empty() => "",
        None => first,
    };

    std::iter::once(lead)
        .chain(rest)
        .map(strip_bullet)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// "N+ years experience" for every years-of-experience mention.
pub fn extract_experience(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();
    for re in EXPERIENCE_PATTERNS.iter() {
        for caps in re.captures_iter(&lower) {
            let phrase = format!("{}+ years experience", &caps[1]);
            if !found.contains(&phrase) {
                found.push(phrase);
            }
        }
    }
    found
}

/// "education: ..." for degree levels (spelled out or BS/MS/BA/MA) and
/// "degree in X" / "BS in X" fields.
pub fn extract_education(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut levels: Vec<String> = DEGREE_RE
        .find_iter(&lower)
        .map(|m| m.as_str().trim().to_string())
        .collect();
    let mut fields: Vec<String> = DEGREE_FIELD_RE
        .captures_iter(&lower)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .collect();

    for caps in DEGREE_ABBREV_RE.captures_iter(text) {
        levels.push(caps[1].to_lowercase());
        if let Some(field) = caps.get(2) {
            fields.push(field.as_str().trim().to_lowercase());
        }
    }

    let mut found: Vec<String> = Vec::new();
    for item in levels.into_iter().chain(fields) {
        let entry = format!("education: {item}");
        if !item.is_empty() && !found.contains(&entry) {
            found.push(entry);
        }
    }
    found
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}
