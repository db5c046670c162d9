//! Job-posting detection and skill extraction for scraped page text, plus
//! resume/job match analysis on top of it.

pub mod analysis;
pub mod classify;
pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod telemetry;
pub mod text;

pub use classify::{extract_skills, find_section, is_job_posting, Classifier, SectionKind};
pub use config::{ClassifierSettings, Config, ScorerBackend};
pub use engine::Engine;
pub use errors::{Result, SkillmatchError};
pub use models::{
    ClassificationResult, ExtractedSkill, ExtractionTier, Importance, MatchReport, ParsedJob,
    RankedKeyword, ResumeProfile, Section,
};
