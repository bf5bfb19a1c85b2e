//! Add / update / remove for the personal record and the plain collections
//! (socials, experience, education, projects). Skill-group and language
//! operations carry extra rules and live in their own modules.

use serde::Deserialize;
use uuid::Uuid;

use crate::models::resume::{
    EducationItem, ExperienceItem, Personal, ProjectItem, ResumeData, SocialItem,
};

/// Anything that lives in one of the document's ordered collections.
pub(crate) trait ListItem: Clone {
    fn id(&self) -> Uuid;
}

impl ListItem for SocialItem {
    fn id(&self) -> Uuid {
        self.id
    }
}
impl ListItem for ExperienceItem {
    fn id(&self) -> Uuid {
        self.id
    }
}
impl ListItem for EducationItem {
    fn id(&self) -> Uuid {
        self.id
    }
}
impl ListItem for ProjectItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Copies the list, applying `patch` to the item with a matching id.
/// Unknown ids leave the list untouched.
pub(crate) fn update_in<T: ListItem>(list: &[T], id: Uuid, mut patch: impl FnMut(&mut T)) -> Vec<T> {
    list.iter()
        .cloned()
        .map(|mut item| {
            if item.id() == id {
                patch(&mut item);
            }
            item
        })
        .collect()
}

/// Copies the list without the item with a matching id.
pub(crate) fn remove_from<T: ListItem>(list: &[T], id: Uuid) -> Vec<T> {
    list.iter().filter(|item| item.id() != id).cloned().collect()
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personal
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonalPatch {
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
    pub quote: Option<String>,
    pub quote_author: Option<String>,
}

pub fn update_personal(doc: &ResumeData, patch: PersonalPatch) -> ResumeData {
    let mut personal: Personal = doc.personal.clone();
    merge(&mut personal.full_name, patch.full_name);
    merge(&mut personal.role, patch.role);
    merge(&mut personal.email, patch.email);
    merge(&mut personal.phone, patch.phone);
    merge(&mut personal.website, patch.website);
    merge(&mut personal.location, patch.location);
    merge(&mut personal.avatar, patch.avatar);
    merge(&mut personal.quote, patch.quote);
    merge(&mut personal.quote_author, patch.quote_author);
    ResumeData {
        personal,
        ..doc.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Socials
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialPatch {
    pub platform: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
}

pub fn add_social(doc: &ResumeData) -> (ResumeData, Uuid) {
    let id = Uuid::new_v4();
    let mut socials = doc.socials.clone();
    socials.push(SocialItem {
        id,
        platform: String::new(),
        username: String::new(),
        url: String::new(),
    });
    (
        ResumeData {
            socials,
            ..doc.clone()
        },
        id,
    )
}

pub fn update_social(doc: &ResumeData, id: Uuid, patch: SocialPatch) -> ResumeData {
    ResumeData {
        socials: update_in(&doc.socials, id, |item| {
            merge(&mut item.platform, patch.platform.clone());
            merge(&mut item.username, patch.username.clone());
            merge(&mut item.url, patch.url.clone());
        }),
        ..doc.clone()
    }
}

pub fn remove_social(doc: &ResumeData, id: Uuid) -> ResumeData {
    ResumeData {
        socials: remove_from(&doc.socials, id),
        ..doc.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperiencePatch {
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
    pub logo: Option<String>,
}

pub fn add_experience(doc: &ResumeData) -> (ResumeData, Uuid) {
    let id = Uuid::new_v4();
    let mut experience = doc.experience.clone();
    experience.push(ExperienceItem {
        id,
        role: String::new(),
        company: String::new(),
        location: String::new(),
        start_date: String::new(),
        end_date: String::new(),
        current: false,
        description: String::new(),
        logo: None,
    });
    (
        ResumeData {
            experience,
            ..doc.clone()
        },
        id,
    )
}

pub fn update_experience(doc: &ResumeData, id: Uuid, patch: ExperiencePatch) -> ResumeData {
    ResumeData {
        experience: update_in(&doc.experience, id, |item| {
            merge(&mut item.role, patch.role.clone());
            merge(&mut item.company, patch.company.clone());
            merge(&mut item.location, patch.location.clone());
            merge(&mut item.start_date, patch.start_date.clone());
            // Retained even when `current` is set; display suppression is the
            // renderer's concern.
            merge(&mut item.end_date, patch.end_date.clone());
            merge(&mut item.current, patch.current);
            merge(&mut item.description, patch.description.clone());
            if let Some(logo) = patch.logo.clone() {
                item.logo = Some(logo);
            }
        }),
        ..doc.clone()
    }
}

pub fn remove_experience(doc: &ResumeData, id: Uuid) -> ResumeData {
    ResumeData {
        experience: remove_from(&doc.experience, id),
        ..doc.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationPatch {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
}

pub fn add_education(doc: &ResumeData) -> (ResumeData, Uuid) {
    let id = Uuid::new_v4();
    let mut education = doc.education.clone();
    education.push(EducationItem {
        id,
        degree: String::new(),
        institution: String::new(),
        year: String::new(),
        description: None,
        logo: None,
    });
    (
        ResumeData {
            education,
            ..doc.clone()
        },
        id,
    )
}

pub fn update_education(doc: &ResumeData, id: Uuid, patch: EducationPatch) -> ResumeData {
    ResumeData {
        education: update_in(&doc.education, id, |item| {
            merge(&mut item.degree, patch.degree.clone());
            merge(&mut item.institution, patch.institution.clone());
            merge(&mut item.year, patch.year.clone());
            if let Some(description) = patch.description.clone() {
                item.description = Some(description);
            }
            if let Some(logo) = patch.logo.clone() {
                item.logo = Some(logo);
            }
        }),
        ..doc.clone()
    }
}

pub fn remove_education(doc: &ResumeData, id: Uuid) -> ResumeData {
    ResumeData {
        education: remove_from(&doc.education, id),
        ..doc.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}

pub fn add_project(doc: &ResumeData) -> (ResumeData, Uuid) {
    let id = Uuid::new_v4();
    let mut projects = doc.projects.clone();
    projects.push(ProjectItem {
        id,
        title: String::new(),
        description: String::new(),
        link: None,
        image: None,
    });
    (
        ResumeData {
            projects,
            ..doc.clone()
        },
        id,
    )
}

pub fn update_project(doc: &ResumeData, id: Uuid, patch: ProjectPatch) -> ResumeData {
    ResumeData {
        projects: update_in(&doc.projects, id, |item| {
            merge(&mut item.title, patch.title.clone());
            merge(&mut item.description, patch.description.clone());
            if let Some(link) = patch.link.clone() {
                item.link = Some(link);
            }
            if let Some(image) = patch.image.clone() {
                item.image = Some(image);
            }
        }),
        ..doc.clone()
    }
}

pub fn remove_project(doc: &ResumeData, id: Uuid) -> ResumeData {
    ResumeData {
        projects: remove_from(&doc.projects, id),
        ..doc.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
