//! Pure edit operations over the resume document.
//!
//! Every operation takes the current document by reference and returns a new
//! one; the caller replaces its copy wholesale. Operations are total: an
//! unknown id is a silent no-op (ids are caller-opaque), and no operation can
//! produce duplicate ids or a schema-invalid document. All list adds append —
//! the uniform convention this crate settled on.

pub mod languages;
pub mod ops;
pub mod skills;

pub use languages::{add_language, region_for_language, remove_language, update_language, LanguagePatch};
pub use ops::{
    add_education, add_experience, add_project, add_social, remove_education, remove_experience,
    remove_project, remove_social, update_education, update_experience, update_personal,
    update_project, update_social, EducationPatch, ExperiencePatch, PersonalPatch, ProjectPatch,
    SocialPatch,
};
pub use skills::{
    add_skill, add_skill_group, category_suggestions, remove_skill, remove_skill_group,
    update_skill_group, SkillGroupPatch,
};
