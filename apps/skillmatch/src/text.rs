//! Tokenising helpers shared by the classifier fallbacks and the analysis
//! layer.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::classify::taxonomy::{is_stopword, BULLET_MARKERS};
use crate::models::KeywordEntry;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}+#]*").expect("word regex is valid"));

static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)|\n\s*\n").expect("sentence regex is valid"));

/// Lowercased words in order of appearance. `c++` and `c#` stay whole.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True for words worth counting: not a stopword, not all digits, and at
/// least `min_len` characters long.
pub fn is_content_word(word: &str, min_len: usize) -> bool {
    word.chars().count() >= min_len
        && !is_stopword(word)
        && !word.chars().all(|c| c.is_ascii_digit())
}

/// Content-word counts, most frequent first; ties keep first-appearance order.
pub fn word_frequency(text: &str, min_len: usize) -> Vec<KeywordEntry> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<KeywordEntry> = Vec::new();

    for word in tokenize(text) {
        if !is_content_word(&word, min_len) {
            continue;
        }
        match index.get(&word) {
            Some(&i) => entries[i].frequency += 1,
            None => {
                index.insert(word.clone(), entries.len());
                entries.push(KeywordEntry {
                    keyword: word,
                    frequency: 1,
                });
            }
        }
    }

    // stable: equal counts stay in discovery order
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    entries
}

/// Text of every list item: lines whose first non-blank character is a
/// bullet marker. Markers and surrounding whitespace are stripped; lines
/// that are nothing but markers (`---`) are skipped.
pub fn bullet_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter_map(|line| {
            let first = line.trim_start().chars().next()?;
            if !BULLET_MARKERS.contains(&first) {
                return None;
            }
            let item = strip_bullet(line);
            (!item.is_empty()).then_some(item)
        })
        .collect()
}

/// `line` without surrounding whitespace and leading bullet markers.
pub fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| BULLET_MARKERS.contains(&c) || c.is_whitespace())
        .trim_end()
}

/// True when `phrase` occurs in `text` with no letter or digit directly on
/// either side. Both arguments are expected in lowercase.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    let pattern = format!(
        r"(?:^|[^\p{{L}}\p{{N}}]){}(?:[^\p{{L}}\p{{N}}]|$)",
        regex::escape(phrase)
    );
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(text),
        Err(_) => text.contains(phrase),
    }
}

/// Splits prose into trimmed, non-empty sentences.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END_RE.find_iter(text) {
        let sentence = text[start..m.end()].trim();
        if !sentence.is_empty() {
            out.push(sentence);
        }
        start = m.end();
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        out.push(tail);
    }
    out
}
