//! Static word lists: the skill taxonomy, job-posting keywords, job-site URL
//! fragments and stopwords.
//!
//! The job-side extractor matches skill phrases as lowercase substrings, so
//! very short or ambiguous tokens (`r`, `go`, `ai`, `less`, `helm`, `scala`)
//! are left out; they would fire on ordinary English words.

use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SkillmatchError};
use crate::text::contains_phrase;

/// Phrases whose presence suggests a page is a job posting.
pub const JOB_KEYWORDS: &[&str] = &[
    "job description",
    "responsibilities",
    "requirements",
    "qualifications",
    "experience",
    "skills",
    "apply now",
    "job summary",
    "position summary",
    "we are looking for",
    "about the role",
    "job title",
    "full time",
    "part time",
    "remote",
    "hybrid",
    "salary",
    "benefits",
    "location",
    "education",
    "degree",
    "certification",
];

/// URL fragments of job boards and applicant tracking systems.
pub const JOB_SITES: &[&str] = &[
    "linkedin.com/jobs",
    "indeed.com",
    "glassdoor.com",
    "monster.com",
    "ziprecruiter.com",
    "dice.com",
    "careerbuilder.com",
    "simplyhired.com",
    "lever.co",
    "greenhouse.io",
    "workday.com",
    "jobs.",
    "career",
    "careers",
    "job-",
];

/// Lines starting with one of these are treated as list items.
pub const BULLET_MARKERS: &[char] = &['-', '*', '•', '+'];

pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "etc",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "like", "may", "me", "more", "most", "must", "my", "myself", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "same", "shall", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "us", "very", "was", "we", "well",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "within", "work", "would", "you", "your", "yours", "yourself", "yourselves",
];

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// One named group of canonical skill phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Ordered mapping from category name to skill phrases. Iteration order is
/// declaration order, which fixes discovery order during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillTaxonomy {
    categories: Vec<SkillCategory>,
}

const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "php", "swift",
            "kotlin", "golang", "rust", "matlab",
        ],
    ),
    (
        "web",
        &[
            "html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask",
            "bootstrap", "sass", "webpack", "graphql", "rest api",
        ],
    ),
    (
        "database",
        &[
            "sql", "mysql", "postgresql", "mongodb", "firebase", "oracle", "nosql", "redis",
            "cassandra", "neo4j", "dynamodb", "elasticsearch",
        ],
    ),
    (
        "cloud",
        &[
            "aws", "azure", "gcp", "docker", "kubernetes", "serverless", "lambda", "ec2",
            "cloudformation", "terraform", "ansible",
        ],
    ),
    (
        "data",
        &[
            "machine learning", "data science", "artificial intelligence", "data analysis",
            "big data", "tableau", "power bi", "pandas", "numpy", "scikit-learn", "tensorflow",
            "pytorch", "spark", "hadoop",
        ],
    ),
    (
        "tools",
        &[
            "git", "github", "jira", "agile", "scrum", "ci/cd", "jenkins", "prometheus",
            "grafana", "kibana", "splunk",
        ],
    ),
    (
        "devops",
        &[
            "kubernetes", "docker", "argo cd", "istio", "linkerd", "jenkins", "github actions",
            "circleci", "gitlab ci",
        ],
    ),
    (
        "security",
        &[
            "owasp", "penetration testing", "vulnerability assessment", "siem", "firewalls",
            "encryption",
        ],
    ),
    (
        "mobile",
        &["react native", "flutter", "android", "xamarin"],
    ),
    (
        "testing",
        &[
            "selenium", "cypress", "mocha", "junit", "testng", "pytest", "unit testing",
            "integration testing",
        ],
    ),
    (
        "soft skills",
        &[
            "communication", "teamwork", "problem solving", "creativity", "adaptability",
            "leadership", "time management", "critical thinking", "collaboration",
            "attention to detail", "project management",
        ],
    ),
];

static BUILTIN: LazyLock<Arc<SkillTaxonomy>> = LazyLock::new(|| {
    let mut taxonomy = SkillTaxonomy::default();
    for (name, skills) in BUILTIN_CATEGORIES {
        taxonomy.merge_category(name, skills.iter().copied());
    }
    Arc::new(taxonomy)
});

impl SkillTaxonomy {
    /// The process-wide built-in taxonomy, built on first use.
    pub fn builtin() -> Arc<SkillTaxonomy> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_categories(categories: Vec<SkillCategory>) -> Self {
        let mut taxonomy = SkillTaxonomy::default();
        for category in categories {
            taxonomy.merge_category(&category.name, category.skills.iter().map(String::as_str));
        }
        taxonomy
    }

    /// Parses a JSON array of `{"name": ..., "skills": [...]}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let categories: Vec<SkillCategory> = serde_json::from_str(json)?;
        Ok(Self::from_categories(categories))
    }

    /// Copy of `self` with the categories from `path` merged in.
    pub fn extended_from_file(&self, path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| SkillmatchError::TaxonomyIo {
            path: path.to_path_buf(),
            source,
        })?;
        let extra = Self::from_json(&raw)?;

        let mut merged = self.clone();
        for category in extra.categories {
            merged.merge_category(&category.name, category.skills.iter().map(String::as_str));
        }
        tracing::debug!(
            path = %path.display(),
            categories = merged.categories.len(),
            skills = merged.len(),
            "Extended skill taxonomy"
        );
        Ok(merged)
    }

    /// Appends phrases to `name`, creating the category if needed.
    /// Phrases are trimmed and lowercased; blanks and repeats are dropped.
    fn merge_category<'a>(&mut self, name: &str, skills: impl IntoIterator<Item = &'a str>) {
        let name = name.trim().to_lowercase();
        let idx = match self.categories.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.categories.push(SkillCategory {
                    name,
                    skills: Vec::new(),
                });
                self.categories.len() - 1
            }
        };

        let category = &mut self.categories[idx];
        for skill in skills {
            let skill = skill.trim().to_lowercase();
            if !skill.is_empty() && !category.skills.contains(&skill) {
                category.skills.push(skill);
            }
        }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// Every (category, phrase) pair in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter().map(move |s| (c.name.as_str(), s.as_str())))
    }

    /// Number of (category, phrase) pairs.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Phrases found as whole words in `text`, first category wins.
    /// `rust` does not fire on "trusted", nor `sql` on "PostgreSQL".
    pub fn matches_in(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut found: Vec<String> = Vec::new();
        for (_, skill) in self.iter() {
            if !found.iter().any(|f| f == skill) && contains_phrase(&lower, skill) {
                found.push(skill.to_string());
            }
        }
        found
    }

    /// Whole-word matches grouped by category, in declaration order. A phrase
    /// listed under several categories appears under each; empty categories
    /// are omitted.
    pub fn matches_by_category(&self, text: &str) -> Vec<SkillCategory> {
        let lower = text.to_lowercase();
        self.categories
            .iter()
            .filter_map(|category| {
                let skills: Vec<String> = category
                    .skills
                    .iter()
                    .filter(|skill| contains_phrase(&lower, skill))
                    .cloned()
                    .collect();
                (!skills.is_empty()).then(|| SkillCategory {
                    name: category.name.clone(),
                    skills,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_is_shared() {
        let a = SkillTaxonomy::builtin();
        let b = SkillTaxonomy::builtin();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!a.is_empty());
    }

    #[test]
    fn test_builtin_phrases_are_lowercase_and_unique_per_category() {
        for category in SkillTaxonomy::builtin().categories() {
            for (i, skill) in category.skills.iter().enumerate() {
                assert_eq!(skill, &skill.to_lowercase());
                assert!(!category.skills[i + 1..].contains(skill), "{skill} repeated");
            }
        }
    }

    #[test]
    fn test_iter_follows_declaration_order() {
        let builtin = SkillTaxonomy::builtin();
        let (category, skill) = builtin.iter().next().unwrap();
        assert_eq!(category, "programming");
        assert_eq!(skill, "python");
    }

    #[test]
    fn test_from_json_normalises_phrases() {
        let taxonomy = SkillTaxonomy::from_json(
            r#"[{"name": "Languages", "skills": [" Elixir ", "elixir", "", "OCaml"]}]"#,
        )
        .unwrap();
        assert_eq!(taxonomy.categories()[0].name, "languages");
        assert_eq!(taxonomy.categories()[0].skills, vec!["elixir", "ocaml"]);
        assert_eq!(taxonomy.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = SkillTaxonomy::from_json(r#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, SkillmatchError::TaxonomyFormat(_)));
    }

    #[test]
    fn test_extended_from_file_merges_existing_and_new_categories() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "programming", "skills": ["elixir", "python"]}},
                {{"name": "embedded", "skills": ["rtos", "fpga"]}}
            ]"#
        )
        .unwrap();

        let base = SkillTaxonomy::builtin();
        let merged = base.extended_from_file(file.path()).unwrap();

        assert_eq!(merged.len(), base.len() + 3);
        let programming = &merged.categories()[0];
        assert_eq!(programming.skills.last().map(String::as_str), Some("elixir"));
        assert_eq!(merged.categories().last().unwrap().name, "embedded");
    }

    #[test]
    fn test_extended_from_missing_file_is_io_error() {
        let err = SkillTaxonomy::builtin()
            .extended_from_file(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(matches!(err, SkillmatchError::TaxonomyIo { .. }));
    }

    #[test]
    fn test_matches_in_is_case_insensitive_and_deduplicated() {
        let found = SkillTaxonomy::builtin().matches_in("Docker, KUBERNETES and Python");
        assert_eq!(found, vec!["python", "docker", "kubernetes"]);
    }

    #[test]
    fn test_matches_in_requires_whole_words() {
        let found = SkillTaxonomy::builtin()
            .matches_in("Trusted advisor for digital marketing; drafted laws and expressed ideas.");
        assert!(found.is_empty(), "unexpected {found:?}");

        let found = SkillTaxonomy::builtin().matches_in("Wrote C++ and Node.js; tuned PostgreSQL");
        assert_eq!(found, vec!["c++", "node.js", "postgresql"]);
    }

    #[test]
    fn test_matches_by_category_groups_in_declaration_order() {
        let grouped = SkillTaxonomy::builtin()
            .matches_by_category("Python, Docker and Jira. Strong communication.");
        let names: Vec<&str> = grouped.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["programming", "cloud", "tools", "devops", "soft skills"]);
        assert_eq!(grouped[0].skills, vec!["python"]);
        assert_eq!(grouped[1].skills, vec!["docker"]);
        assert_eq!(grouped[3].skills, vec!["docker"]);
    }

    #[test]
    fn test_stopwords() {
        assert!(is_stopword("the"));
        assert!(!is_stopword("python"));
    }
}
