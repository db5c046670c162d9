//! Skill extraction: taxonomy lookup per section, with bullet and
//! word-frequency fallbacks when the taxonomy finds nothing.

use std::collections::HashMap;

use super::sections::{find_section, SectionKind};
use super::taxonomy::SkillTaxonomy;
use crate::config::ClassifierSettings;
use crate::models::{ClassificationResult, ExtractedSkill, ExtractionTier, Importance, Section};
use crate::text::{bullet_lines, word_frequency};

const BULLET_CATEGORY: &str = "requirement";
const KEYWORD_CATEGORY: &str = "keyword";

/// Runs all three tiers and returns deduplicated, ordered skills.
pub fn classify(
    text: &str,
    taxonomy: &SkillTaxonomy,
    settings: &ClassifierSettings,
) -> ClassificationResult {
    let (raw, tier) = match taxonomy_skills(text, taxonomy) {
        found if !found.is_empty() => (found, ExtractionTier::Taxonomy),
        _ => fallback_skills(text, settings),
    };

    let skills = order(dedup(raw));
    tracing::debug!(?tier, count = skills.len(), "Extracted skills");

    ClassificationResult { skills, tier }
}

pub fn extract_skills(
    text: &str,
    taxonomy: &SkillTaxonomy,
    settings: &ClassifierSettings,
) -> Vec<ExtractedSkill> {
    classify(text, taxonomy, settings).skills
}

/// Places every taxonomy phrase in the first region containing it:
/// required, then preferred, then the whole document.
fn taxonomy_skills(text: &str, taxonomy: &SkillTaxonomy) -> Vec<ExtractedSkill> {
    let required = find_section(text, SectionKind::Required).map(str::to_lowercase);
    let preferred = find_section(text, SectionKind::Preferred).map(str::to_lowercase);
    let whole = text.to_lowercase();

    let in_region = |region: &Option<String>, skill: &str| {
        region.as_deref().is_some_and(|r| r.contains(skill))
    };

    taxonomy
        .iter()
        .filter_map(|(category, skill)| {
            let (importance, section) = if in_region(&required, skill) {
                (Importance::High, Section::Required)
            } else if in_region(&preferred, skill) {
                (Importance::Medium, Section::Preferred)
            } else if whole.contains(skill) {
                (Importance::Low, Section::General)
            } else {
                return None;
            };
            Some(ExtractedSkill::new(skill, category, importance, section))
        })
        .collect()
}

fn fallback_skills(
    text: &str,
    settings: &ClassifierSettings,
) -> (Vec<ExtractedSkill>, ExtractionTier) {
    let bullets = bullet_lines(text);
    if !bullets.is_empty() {
        return (split_halves(bullets, BULLET_CATEGORY), ExtractionTier::Bullets);
    }

    let words: Vec<String> = word_frequency(text, settings.min_word_len)
        .into_iter()
        .take(settings.fallback_top_words)
        .map(|entry| entry.keyword)
        .collect();
    if !words.is_empty() {
        return (split_halves(words, KEYWORD_CATEGORY), ExtractionTier::WordFrequency);
    }

    (Vec::new(), ExtractionTier::Empty)
}

/// First half (rounded up) is High/required, the rest Medium/preferred.
fn split_halves<S: Into<String>>(items: Vec<S>, category: &str) -> Vec<ExtractedSkill> {
    let half = items.len().div_ceil(2);
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if i < half {
                ExtractedSkill::new(item, category, Importance::High, Section::Required)
            } else {
                ExtractedSkill::new(item, category, Importance::Medium, Section::Preferred)
            }
        })
        .collect()
}

/// One entry per lowercase text; a later duplicate replaces the kept entry
/// only if it is strictly more important.
fn dedup(skills: Vec<ExtractedSkill>) -> Vec<ExtractedSkill> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<ExtractedSkill> = Vec::with_capacity(skills.len());

    for skill in skills {
        let key = skill.text.to_lowercase();
        match seen.get(&key) {
            Some(&i) => {
                if skill.importance.rank() > out[i].importance.rank() {
                    out[i] = skill;
                }
            }
            None => {
                seen.insert(key, out.len());
                out.push(skill);
            }
        }
    }
    out
}

/// Required entries first, then High importance first; otherwise stable.
fn order(mut skills: Vec<ExtractedSkill>) -> Vec<ExtractedSkill> {
    skills.sort_by_key(|s| {
        (
            s.section != Section::Required,
            s.importance != Importance::High,
        )
    });
    skills
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::classify::taxonomy::BULLET_MARKERS;
    use proptest::prelude::*;

    const HEADINGS: &[&str] = &[
        "Requirements:",
        "Job Requirements",
        "Qualifications",
        "Nice to have",
        "Preferred:",
        "About us",
        "Benefits",
    ];

    fn arb_line() -> impl Strategy<Value = String> {
        let phrases: Vec<String> = SkillTaxonomy::builtin()
            .iter()
            .map(|(_, skill)| skill.to_string())
            .collect();
        prop_oneof![
            prop::sample::select(phrases).prop_map(|skill| format!("- {skill}")),
            prop::sample::select(HEADINGS).prop_map(String::from),
            "[-*+] [a-zA-Z]{3,10}( [a-zA-Z]{3,10}){0,3}",
            "[a-zA-Z ,.]{0,40}",
        ]
    }

    fn arb_document() -> impl Strategy<Value = String> {
        prop::collection::vec(arb_line(), 0..16).prop_map(|lines| lines.join("\n"))
    }

    fn run(text: &str) -> ClassificationResult {
        classify(
            text,
            &SkillTaxonomy::builtin(),
            &ClassifierSettings::default(),
        )
    }

    proptest! {
        #[test]
        fn test_classification_is_idempotent(text in arb_document()) {
            prop_assert_eq!(run(&text), run(&text));
        }

        #[test]
        fn test_no_duplicate_texts(text in arb_document()) {
            let skills = run(&text).skills;
            let mut seen = std::collections::HashSet::new();
            for skill in &skills {
                prop_assert!(seen.insert(skill.text.to_lowercase()), "duplicate {}", skill.text);
            }
        }

        #[test]
        fn test_required_entries_come_first(text in arb_document()) {
            let skills = run(&text).skills;
            for pair in skills.windows(2) {
                prop_assert!(
                    !(pair[0].section != Section::Required && pair[1].section == Section::Required)
                );
            }
        }

        #[test]
        fn test_texts_are_trimmed_and_marker_free(text in arb_document()) {
            for skill in run(&text).skills {
                prop_assert!(!skill.text.is_empty());
                prop_assert!(!skill
                    .text
                    .starts_with(|c: char| BULLET_MARKERS.contains(&c) || c.is_whitespace()));
            }
        }

        #[test]
        fn test_empty_tier_iff_no_skills(text in arb_document()) {
            let result = run(&text);
            prop_assert_eq!(result.tier == ExtractionTier::Empty, result.skills.is_empty());
        }
    }
}
