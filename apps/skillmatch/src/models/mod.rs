pub mod job;
pub mod report;
pub mod skill;

pub use job::{KeywordEntry, ParsedJob, RankedKeyword, ResumeProfile};
pub use report::MatchReport;
pub use skill::{ClassificationResult, ExtractedSkill, ExtractionTier, Importance, Section};
