//! Language operations and the derived flag rule.
//!
//! The two-letter flag code is never edited directly: changing `language`
//! rewrites it from the static lookup below, and an unrecognized name clears
//! it. Patching the proficiency level alone leaves the flag untouched.

use serde::Deserialize;
use uuid::Uuid;

use crate::models::resume::{LanguageItem, Proficiency, ResumeData};

use super::ops::{remove_from, update_in};

/// Language name → region code used for the flag glyph.
const LANGUAGE_REGIONS: &[(&str, &str)] = &[
    ("English", "GB"),
    ("Italian", "IT"),
    ("Greek", "GR"),
    ("Spanish", "ES"),
    ("French", "FR"),
    ("German", "DE"),
    ("Portuguese", "PT"),
    ("Dutch", "NL"),
    ("Polish", "PL"),
    ("Swedish", "SE"),
    ("Norwegian", "NO"),
    ("Danish", "DK"),
    ("Finnish", "FI"),
    ("Russian", "RU"),
    ("Turkish", "TR"),
    ("Arabic", "SA"),
    ("Hebrew", "IL"),
    ("Hindi", "IN"),
    ("Mandarin", "CN"),
    ("Chinese", "CN"),
    ("Japanese", "JP"),
    ("Korean", "KR"),
];

/// Region code for a recognized language name (case-insensitive, trimmed).
pub fn region_for_language(name: &str) -> Option<&'static str> {
    let needle = name.trim();
    LANGUAGE_REGIONS
        .iter()
        .find(|(lang, _)| lang.eq_ignore_ascii_case(needle))
        .map(|(_, region)| *region)
}

impl super::ops::ListItem for LanguageItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguagePatch {
    pub language: Option<String>,
    pub level: Option<Proficiency>,
}

pub fn add_language(doc: &ResumeData) -> (ResumeData, Uuid) {
    let id = Uuid::new_v4();
    let mut languages = doc.languages.clone();
    languages.push(LanguageItem {
        id,
        language: String::new(),
        level: Proficiency::Elementary,
        flag: String::new(),
    });
    (
        ResumeData {
            languages,
            ..doc.clone()
        },
        id,
    )
}

pub fn update_language(doc: &ResumeData, id: Uuid, patch: LanguagePatch) -> ResumeData {
    ResumeData {
        languages: update_in(&doc.languages, id, |item| {
            if let Some(language) = patch.language.clone() {
                item.flag = region_for_language(&language)
                    .map(str::to_string)
                    .unwrap_or_default();
                item.language = language;
            }
            if let Some(level) = patch.level {
                item.level = level;
            }
        }),
        ..doc.clone()
    }
}

pub fn remove_language(doc: &ResumeData, id: Uuid) -> ResumeData {
    ResumeData {
        languages: remove_from(&doc.languages, id),
        ..doc.clone()
    }
}
