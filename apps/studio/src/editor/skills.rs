//! Skill-group operations.
//!
//! Skill strings within a group are unique by exact (case-sensitive) value;
//! duplicates and blank input are silently rejected before any state change.
//! The category label is free text — the suggestion table below feeds
//! autocomplete only, unknown categories are legal.

use serde::Deserialize;
use uuid::Uuid;

use crate::models::resume::{ResumeData, SkillGroup};

use super::ops::{remove_from, update_in};

/// Known category labels offered for autocomplete.
pub const CATEGORY_SUGGESTIONS: &[&str] = &[
    "Design",
    "Development",
    "Data",
    "DevOps",
    "Management",
    "Marketing",
    "Research",
    "Writing",
];

/// Suggestions whose label contains `input` (case-insensitive). An empty
/// input returns the whole table.
pub fn category_suggestions(input: &str) -> Vec<&'static str> {
    let needle = input.trim().to_lowercase();
    CATEGORY_SUGGESTIONS
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

impl super::ops::ListItem for SkillGroup {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillGroupPatch {
    pub category: Option<String>,
}

pub fn add_skill_group(doc: &ResumeData) -> (ResumeData, Uuid) {
    let id = Uuid::new_v4();
    let mut skills = doc.skills.clone();
    skills.push(SkillGroup {
        id,
        category: String::new(),
        skills: Vec::new(),
    });
    (
        ResumeData {
            skills,
            ..doc.clone()
        },
        id,
    )
}

pub fn update_skill_group(doc: &ResumeData, id: Uuid, patch: SkillGroupPatch) -> ResumeData {
    ResumeData {
        skills: update_in(&doc.skills, id, |group| {
            if let Some(category) = patch.category.clone() {
                group.category = category;
            }
        }),
        ..doc.clone()
    }
}

pub fn remove_skill_group(doc: &ResumeData, id: Uuid) -> ResumeData {
    ResumeData {
        skills: remove_from(&doc.skills, id),
        ..doc.clone()
    }
}

/// Appends `skill` (trimmed) to the group. No-op when the trimmed value is
/// empty or already present in the group.
pub fn add_skill(doc: &ResumeData, group_id: Uuid, skill: &str) -> ResumeData {
    let trimmed = skill.trim();
    if trimmed.is_empty() {
        return doc.clone();
    }
    ResumeData {
        skills: update_in(&doc.skills, group_id, |group| {
            if !group.skills.iter().any(|s| s == trimmed) {
                group.skills.push(trimmed.to_string());
            }
        }),
        ..doc.clone()
    }
}

/// Removes every occurrence equal to `skill` by value.
pub fn remove_skill(doc: &ResumeData, group_id: Uuid, skill: &str) -> ResumeData {
    ResumeData {
        skills: update_in(&doc.skills, group_id, |group| {
            group.skills.retain(|s| s != skill);
        }),
        ..doc.clone()
    }
}
