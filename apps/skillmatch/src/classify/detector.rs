//! Job-posting detection from page text and URL.

use serde::Serialize;

use super::taxonomy::{JOB_KEYWORDS, JOB_SITES};
use crate::config::ClassifierSettings;

/// Why a page was (or was not) taken for a job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPostingSignal {
    pub is_job_posting: bool,
    pub matched_keywords: Vec<&'static str>,
    pub matched_site: Option<&'static str>,
}

impl JobPostingSignal {
    pub fn keyword_count(&self) -> usize {
        self.matched_keywords.len()
    }
}

/// Number of distinct job keywords contained in `page_text`, ignoring case.
pub fn keyword_count(page_text: &str) -> usize {
    matched_keywords(&page_text.to_lowercase()).len()
}

fn matched_keywords(lower_text: &str) -> Vec<&'static str> {
    JOB_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lower_text.contains(keyword))
        .collect()
}

fn matched_site(page_url: &str) -> Option<&'static str> {
    let url = page_url.to_lowercase();
    JOB_SITES.iter().copied().find(|site| url.contains(site))
}

/// Detection with the full reasoning attached.
///
/// A page is a posting when it is on a known job site and has at least
/// `site_min_keywords` keyword hits, or has at least `min_keywords` hits
/// anywhere. Both thresholds are inclusive.
pub fn detect(page_text: &str, page_url: &str, settings: &ClassifierSettings) -> JobPostingSignal {
    let matched_keywords = matched_keywords(&page_text.to_lowercase());
    let matched_site = matched_site(page_url);
    let count = matched_keywords.len();

    let is_job_posting = (matched_site.is_some() && count >= settings.site_min_keywords)
        || count >= settings.min_keywords;

    tracing::debug!(
        keywords = count,
        site = matched_site.unwrap_or("-"),
        is_job_posting,
        "Job posting detection"
    );

    JobPostingSignal {
        is_job_posting,
        matched_keywords,
        matched_site,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_page_text() -> impl Strategy<Value = String> {
        (
            prop::sample::subsequence(JOB_KEYWORDS, 0..=JOB_KEYWORDS.len()),
            "[a-z]{0,8}",
        )
            .prop_map(|(keywords, filler)| keywords.join(format!(" {filler} ").as_str()))
    }

    fn arb_url() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(JOB_SITES).prop_map(|site| format!("https://{site}/view/1")),
            "https://[a-z]{1,10}\\.org/[a-z]{0,10}",
            Just(String::new()),
        ]
    }

    proptest! {
        #[test]
        fn test_many_keywords_always_posting(text in arb_page_text(), url in arb_url()) {
            let settings = ClassifierSettings::default();
            if keyword_count(&text) >= settings.min_keywords {
                prop_assert!(detect(&text, &url, &settings).is_job_posting);
            }
        }

        #[test]
        fn test_few_keywords_never_posting(text in arb_page_text(), url in arb_url()) {
            let settings = ClassifierSettings::default();
            if keyword_count(&text) < settings.site_min_keywords {
                prop_assert!(!detect(&text, &url, &settings).is_job_posting);
            }
        }

        #[test]
        fn test_signal_count_matches_keyword_count(text in arb_page_text(), url in arb_url()) {
            let signal = detect(&text, &url, &ClassifierSettings::default());
            prop_assert_eq!(signal.keyword_count(), keyword_count(&text));
        }
    }
}
