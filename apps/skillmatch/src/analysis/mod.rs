// Job/resume analysis built on the classifier.
// Parses job descriptions, profiles resume text, scores the match.

pub mod job_parser;
pub mod match_scoring;
pub mod resume;

pub use job_parser::parse_job;
pub use match_scoring::{scorer_for, MatchScorer, SkillCoverageScorer, TfIdfMatchScorer};
