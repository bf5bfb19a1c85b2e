//! The fixed document every session starts from.
//!
//! Ids are generated fresh per call; everything else is stable sample
//! content so a new session always has a fully populated preview.

use uuid::Uuid;

use crate::models::resume::{
    EducationItem, ExperienceItem, LanguageItem, Personal, Proficiency, ProjectItem, ResumeData,
    SkillGroup, SocialItem,
};

pub fn seed_document() -> ResumeData {
    ResumeData {
        personal: Personal {
            full_name: "Angelo Libero".to_string(),
            role: "Full-Stack Designer".to_string(),
            email: "angelo.libero@gmail.com".to_string(),
            phone: "(+39) 333 0123 765".to_string(),
            website: "https://aldesign.it".to_string(),
            location: "Bologna, Italy".to_string(),
            avatar: "https://picsum.photos/200/200?grayscale".to_string(),
            quote: "People ignore design that ignore people.".to_string(),
            quote_author: "Frank Kimero".to_string(),
        },
        socials: vec![
            social("Instagram", "@angelolibero.designs"),
            social("Dribbble", "@angelolibero-designs"),
            social("Twitter", "@angeloldesigns"),
            social("LinkedIn", "angelo-libero-a42a0438"),
        ],
        experience: vec![
            ExperienceItem {
                id: Uuid::new_v4(),
                role: "VR designer".to_string(),
                company: "Meta".to_string(),
                location: "Menlo Park, California".to_string(),
                start_date: "2022".to_string(),
                end_date: "Present".to_string(),
                current: true,
                description: "Leading VR interface design patterns for the next generation of \
                              spatial computing headsets."
                    .to_string(),
                logo: Some("https://picsum.photos/40/40?random=1".to_string()),
            },
            ExperienceItem {
                id: Uuid::new_v4(),
                role: "Product designer".to_string(),
                company: "Apple".to_string(),
                location: "Cupertino, California".to_string(),
                start_date: "Jul 20".to_string(),
                end_date: "Jan 2022".to_string(),
                current: false,
                description: "Designed cross-device flows for first-party creative tools."
                    .to_string(),
                logo: Some("https://picsum.photos/40/40?random=2".to_string()),
            },
            ExperienceItem {
                id: Uuid::new_v4(),
                role: "UX Designer".to_string(),
                company: "Tesla".to_string(),
                location: "Austin, Texas".to_string(),
                start_date: "Oct 2015".to_string(),
                end_date: "Mar 2020".to_string(),
                current: false,
                description: "Owned in-cabin touchscreen interaction patterns.".to_string(),
                logo: Some("https://picsum.photos/40/40?random=3".to_string()),
            },
            ExperienceItem {
                id: Uuid::new_v4(),
                role: "Design system architect".to_string(),
                company: "Google".to_string(),
                location: "Mountain View".to_string(),
                start_date: "Sep 2014".to_string(),
                end_date: "Aug 2015".to_string(),
                current: false,
                description: "Unified component libraries across three product areas.".to_string(),
                logo: Some("https://picsum.photos/40/40?random=4".to_string()),
            },
        ],
        education: vec![
            EducationItem {
                id: Uuid::new_v4(),
                degree: "Build a design system".to_string(),
                institution: "Memorisely".to_string(),
                year: "Oct 2021".to_string(),
                description: Some("Advanced component architecture.".to_string()),
                logo: Some("https://picsum.photos/40/40?random=6".to_string()),
            },
            EducationItem {
                id: Uuid::new_v4(),
                degree: "UX Design certificate".to_string(),
                institution: "UX academy".to_string(),
                year: "Feb 2020".to_string(),
                description: Some("User research and personas.".to_string()),
                logo: Some("https://picsum.photos/40/40?random=7".to_string()),
            },
            EducationItem {
                id: Uuid::new_v4(),
                degree: "User research course".to_string(),
                institution: "Coursera".to_string(),
                year: "Dec 2019".to_string(),
                description: Some("Qualitative data analysis.".to_string()),
                logo: Some("https://picsum.photos/40/40?random=8".to_string()),
            },
        ],
        skills: vec![
            SkillGroup {
                id: Uuid::new_v4(),
                category: "Design".to_string(),
                skills: [
                    "Web Design",
                    "Mobile Design",
                    "User Experience",
                    "Wireframing",
                    "Prototyping",
                    "Testing",
                    "Design System",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            },
            SkillGroup {
                id: Uuid::new_v4(),
                category: "Development".to_string(),
                skills: [
                    "React JS",
                    "Chakra UI",
                    "Emotion",
                    "Framer",
                    "TypeScript",
                    "Next JS",
                    "HTML",
                    "CSS",
                    "JS",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            },
        ],
        projects: vec![
            ProjectItem {
                id: Uuid::new_v4(),
                title: "Powerful Design System".to_string(),
                description: "Figma UI Kit and Design System targeting a wide variety of use \
                              cases."
                    .to_string(),
                link: Some("https://figma.com".to_string()),
                image: Some("https://picsum.photos/400/300?random=10".to_string()),
            },
            ProjectItem {
                id: Uuid::new_v4(),
                title: "Modern Website".to_string(),
                description: "Powerful website + dashboard template for your next Chakra UI \
                              project."
                    .to_string(),
                link: Some("https://ui-8.net".to_string()),
                image: Some("https://picsum.photos/400/300?random=11".to_string()),
            },
        ],
        languages: vec![
            language("Italian", Proficiency::Native, "IT"),
            language("Greek", Proficiency::Native, "GR"),
            language("English", Proficiency::ProfessionalWorking, "GB"),
            language("Spanish", Proficiency::Elementary, "ES"),
        ],
    }
}

fn social(platform: &str, username: &str) -> SocialItem {
    SocialItem {
        id: Uuid::new_v4(),
        platform: platform.to_string(),
        username: username.to_string(),
        url: "#".to_string(),
    }
}

fn language(name: &str, level: Proficiency, flag: &str) -> LanguageItem {
    LanguageItem {
        id: Uuid::new_v4(),
        language: name.to_string(),
        level,
        flag: flag.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_fully_populated() {
        let doc = seed_document();
        assert!(!doc.personal.full_name.is_empty());
        assert_eq!(doc.socials.len(), 4);
        assert_eq!(doc.experience.len(), 4);
        assert_eq!(doc.education.len(), 3);
        assert_eq!(doc.skills.len(), 2);
        assert_eq!(doc.projects.len(), 2);
        assert_eq!(doc.languages.len(), 4);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let doc = seed_document();
        let mut ids: Vec<uuid::Uuid> = doc.socials.iter().map(|s| s.id).collect();
        ids.extend(doc.experience.iter().map(|e| e.id));
        ids.extend(doc.education.iter().map(|e| e.id));
        ids.extend(doc.skills.iter().map(|s| s.id));
        ids.extend(doc.projects.iter().map(|p| p.id));
        ids.extend(doc.languages.iter().map(|l| l.id));
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "seed must not reuse ids");
    }

    #[test]
    fn test_seed_current_experience_retains_end_date() {
        let doc = seed_document();
        let current = doc.experience.iter().find(|e| e.current).expect("one current entry");
        assert!(!current.end_date.is_empty(), "end date retained, not cleared");
    }
}
