//! Section splitter: locates the "required" and "preferred" regions of a job
//! description by anchor phrases.
//!
//! Patterns are tried in declared order and the first one that matches wins,
//! even if a later pattern would match earlier in the text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which region to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Required,
    Preferred,
}

/// How far a matched pattern's span reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extent {
    /// From the anchor to the next recognised heading, or the end of text.
    UntilNextHeading,
    /// Exactly the matched text (sentence-level anchors).
    MatchOnly,
}

struct SectionPattern {
    name: &'static str,
    regex: Regex,
    extent: Extent,
}

impl SectionPattern {
    fn new(name: &'static str, pattern: &str, extent: Extent) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("section patterns are valid regexes"),
            extent,
        }
    }

    fn span_in<'a>(&self, text: &'a str) -> Option<&'a str> {
        let anchor = self.regex.find(text)?;
        let end = match self.extent {
            Extent::MatchOnly => anchor.end(),
            Extent::UntilNextHeading => SECTION_HEADING
                .find_at(text, anchor.end())
                .map(|heading| heading.start())
                .unwrap_or(text.len()),
        };
        Some(&text[anchor.start()..end])
    }
}

const REQUIRED_ANCHORS: &str = r"requirements|required skills(?: and experience)?|required qualifications|required experience|minimum qualifications|basic qualifications|must[- ]haves?|required";
const NEEDS_ANCHORS: &str = r"what you(?:'ll|’ll| will) need|what we(?:'re|’re| are) looking for|what you(?:'ll|’ll| will) bring|who you are";
const LINE_ONLY_ANCHORS: &str = r"qualifications|skills(?: (?:and|&) experience)?|experience";
const PREFERRED_ANCHORS: &str = r"preferred qualifications|preferred skills|preferred experience|preferred|nice[- ]to[- ]haves?|bonus points|pluses";
const DESIRED_ANCHORS: &str = r"desired skills|desired qualifications|desired|additional qualifications|bonus";
const OTHER_HEADINGS: &str = r"key responsibilities|responsibilities|duties|what you(?:'ll|’ll| will) do|about you|about us|about the role|about the team|about the company|benefits|perks|what we offer|compensation|salary|how to apply|the role|job description|education|qualifications";

/// Qualifiers allowed in front of an anchor ("Job Requirements", "Your Key
/// Qualifications"). "preferred", "desired" and "additional" are absent so a
/// preferred heading never reads as a required one.
const HEADING_PREFIX: &str = r"(?:(?:job|technical|key|core|essential|general|position|role|your|our|the|professional|minimum|basic)[ \t]+){0,2}";

/// A trailing connective and one more word ("Requirements & Qualifications",
/// "Skills / Tools").
const HEADING_SUFFIX: &str = r"(?:[ \t]*(?:&|and|/)[ \t]*[\w']+)?";

/// A heading: the phrase alone on its line (colon optional), or the phrase
/// followed by a colon anywhere.
fn heading(alternatives: &str) -> String {
    format!(
        r"(?im)(?:^[ \t]*{HEADING_PREFIX}(?:{alternatives}){HEADING_SUFFIX}[ \t]*:?[ \t]*\r?$|\b{HEADING_PREFIX}(?:{alternatives}){HEADING_SUFFIX}[ \t]*:)"
    )
}

/// A heading that only counts at the start of a line.
fn line_heading(alternatives: &str) -> String {
    format!(r"(?im)^[ \t]*{HEADING_PREFIX}(?:{alternatives}){HEADING_SUFFIX}[ \t]*(?::|\r?$)")
}

static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    let all = [
        REQUIRED_ANCHORS,
        NEEDS_ANCHORS,
        PREFERRED_ANCHORS,
        DESIRED_ANCHORS,
        OTHER_HEADINGS,
    ]
    .join("|");
    Regex::new(&heading(&all)).expect("section heading regex is valid")
});

static REQUIRED_PATTERNS: LazyLock<Vec<SectionPattern>> = LazyLock::new(|| {
    vec![
        SectionPattern::new("requirements", &heading(REQUIRED_ANCHORS), Extent::UntilNextHeading),
        SectionPattern::new("what-you-need", &heading(NEEDS_ANCHORS), Extent::UntilNextHeading),
        SectionPattern::new(
            "qualifications",
            &line_heading(LINE_ONLY_ANCHORS),
            Extent::UntilNextHeading,
        ),
        SectionPattern::new(
            "required-sentence",
            r"(?im)^.*\b(?:is|are) (?:required|a must)\b.*$",
            Extent::MatchOnly,
        ),
    ]
});

static PREFERRED_PATTERNS: LazyLock<Vec<SectionPattern>> = LazyLock::new(|| {
    vec![
        SectionPattern::new("preferred", &heading(PREFERRED_ANCHORS), Extent::UntilNextHeading),
        SectionPattern::new("desired", &heading(DESIRED_ANCHORS), Extent::UntilNextHeading),
        SectionPattern::new(
            "plus-sentence",
            r"(?im)^.*\b(?:is|are|would be) (?:a )?(?:plus|bonus|nice to have)\b.*$",
            Extent::MatchOnly,
        ),
    ]
});

fn patterns_for(kind: SectionKind) -> &'static [SectionPattern] {
    match kind {
        SectionKind::Required => &REQUIRED_PATTERNS,
        SectionKind::Preferred => &PREFERRED_PATTERNS,
    }
}

/// Returns the first matching section of `kind`, borrowed verbatim from
/// `text`, or `None` when no pattern matches.
pub fn find_section(text: &str, kind: SectionKind) -> Option<&str> {
    patterns_for(kind).iter().find_map(|pattern| {
        let span = pattern.span_in(text)?;
        tracing::trace!(?kind, pattern = pattern.name, len = span.len(), "Section matched");
        Some(span)
    })
}
