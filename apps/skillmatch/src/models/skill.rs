use serde::{Deserialize, Serialize};

/// How strongly a job posting asks for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    /// Higher is more important. Used when collapsing duplicates.
    pub fn rank(self) -> u8 {
        match self {
            Importance::High => 3,
            Importance::Medium => 2,
            Importance::Low => 1,
        }
    }

    /// Weight used by the coverage scorer.
    pub fn weight(self) -> f64 {
        f64::from(self.rank())
    }
}

/// Region of the posting a skill was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Required,
    Preferred,
    General,
}

/// A single skill pulled out of a job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub text: String,
    pub category: String,
    pub importance: Importance,
    pub section: Section,
}

impl ExtractedSkill {
    pub fn new(
        text: impl Into<String>,
        category: impl Into<String>,
        importance: Importance,
        section: Section,
    ) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            importance,
            section,
        }
    }
}

/// Which extraction tier produced the skill list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionTier {
    Taxonomy,
    Bullets,
    WordFrequency,
    /// Nothing usable in the input.
    Empty,
}

/// Ordered skills plus the tier they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub skills: Vec<ExtractedSkill>,
    pub tier: ExtractionTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importance_rank_orders_high_first() {
        assert!(Importance::High.rank() > Importance::Medium.rank());
        assert!(Importance::Medium.rank() > Importance::Low.rank());
    }

    #[test]
    fn test_section_serializes_lowercase() {
        let json = serde_json::to_string(&Section::Required).unwrap();
        assert_eq!(json, r#""required""#);
        let section: Section = serde_json::from_str(r#""general""#).unwrap();
        assert_eq!(section, Section::General);
    }

    #[test]
    fn test_extracted_skill_serializes_importance_variant_name() {
        let skill = ExtractedSkill::new("python", "programming", Importance::High, Section::Required);
        let value = serde_json::to_value(&skill).unwrap();
        assert_eq!(value["importance"], "High");
        assert_eq!(value["section"], "required");
        assert_eq!(value["category"], "programming");
    }

    #[test]
    fn test_extraction_tier_serde_snake_case() {
        let json = serde_json::to_string(&ExtractionTier::WordFrequency).unwrap();
        assert_eq!(json, r#""word_frequency""#);
    }
}
