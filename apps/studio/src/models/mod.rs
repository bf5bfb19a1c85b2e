pub mod resume;
pub mod seed;

pub use resume::{
    EducationItem, ExperienceItem, LanguageItem, Personal, Proficiency, ProjectItem, ResumeData,
    SkillGroup, SocialItem,
};
