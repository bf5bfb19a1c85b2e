//! The resume document — the single source of truth for the whole session.
//!
//! One `ResumeData` value is created at startup from the seed and replaced
//! wholesale on every edit. Nested items carry opaque v4 ids generated by the
//! editor's add operations; callers never supply or recompute them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Singleton personal record. No id — there is exactly one.
///
/// `avatar` accepts either a remote URL or an inline base64 data URI; the
/// renderer treats both as an opaque image source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub full_name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub location: String,
    pub avatar: String,
    pub quote: String,
    pub quote_author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialItem {
    pub id: Uuid,
    /// Free-text platform label ("Instagram", "Dribbble", "Other" ...).
    /// Matched against the known-platform set only for icon lookup.
    pub platform: String,
    pub username: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    /// Retained even while `current` is set; only its display is suppressed.
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: Option<String>,
    pub logo: Option<String>,
}

/// An ordered group of skill strings under a free category label.
/// Skills within a group are unique by exact value (enforced on insert).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub id: Uuid,
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub image: Option<String>,
}

/// Closed proficiency set covering every value the seed document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Native,
    Fluent,
    ProfessionalWorking,
    LimitedWorking,
    Elementary,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::ProfessionalWorking => "Professional working",
            Proficiency::LimitedWorking => "Limited working",
            Proficiency::Elementary => "Elementary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageItem {
    pub id: Uuid,
    pub language: String,
    pub level: Proficiency,
    /// Two-letter region code, derived from `language` at edit time.
    /// Empty when the language name is unrecognized.
    pub flag: String,
}

/// The full resume document. Owns every nested collection exclusively;
/// no item is referenced from two places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal: Personal,
    pub socials: Vec<SocialItem>,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectItem>,
    pub languages: Vec<LanguageItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::seed_document;

    #[test]
    fn test_document_round_trips_through_json() {
        let doc = seed_document();
        let json = serde_json::to_string(&doc).expect("serialize");
        let back: ResumeData = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(doc, back);
    }

    #[test]
    fn test_proficiency_labels_are_human_readable() {
        assert_eq!(Proficiency::Native.label(), "Native");
        assert_eq!(
            Proficiency::ProfessionalWorking.label(),
            "Professional working"
        );
    }
}
