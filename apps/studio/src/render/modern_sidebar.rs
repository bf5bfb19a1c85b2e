//! Two-column layout: narrow identity sidebar, timeline-style main column.

use crate::models::resume::ResumeData;

use super::shared::{end_date_label, escape, flag_emoji, platform_icon};
use super::{Template, TemplateId, Theme};

pub struct ModernSidebar;

impl Template for ModernSidebar {
    fn id(&self) -> TemplateId {
        TemplateId::ModernSidebar
    }

    fn name(&self) -> &'static str {
        "Modern Sidebar"
    }

    fn description(&self) -> &'static str {
        "Two-column layout with sidebar emphasis"
    }

    fn render(&self, doc: &ResumeData, _theme: Theme) -> String {
        let mut out = String::with_capacity(8 * 1024);

        // Sidebar: avatar, identity, quote, contact, socials, languages.
        out.push_str("<aside class=\"sidebar\">");
        out.push_str(&format!(
            "<div class=\"avatar\"><img src=\"{}\" alt=\"Profile\"/></div>",
            escape(&doc.personal.avatar)
        ));
        out.push_str(&format!(
            "<h1 class=\"name\">{}</h1><p class=\"role\">{}</p>",
            escape(&doc.personal.full_name),
            escape(&doc.personal.role)
        ));
        out.push_str(&format!(
            "<blockquote class=\"quote\"><p>{}</p><cite>&mdash; {}</cite></blockquote>",
            escape(&doc.personal.quote),
            escape(&doc.personal.quote_author)
        ));

        out.push_str("<div class=\"contact\">");
        for (label, value) in [
            ("Email", &doc.personal.email),
            ("Website", &doc.personal.website),
            ("Phone", &doc.personal.phone),
            ("Address", &doc.personal.location),
        ] {
            out.push_str(&format!(
                "<div class=\"contact-row\"><span class=\"contact-label\">{label}</span>\
                 <span class=\"contact-value\">{}</span></div>",
                escape(value)
            ));
        }
        out.push_str("</div>");

        out.push_str("<div class=\"socials\"><p class=\"section-label\">Socials</p>");
        for social in &doc.socials {
            out.push_str(&format!(
                "<div class=\"social-row\"><span class=\"{}\"></span>\
                 <div><p class=\"social-platform\">{}</p>\
                 <a class=\"social-username\" href=\"{}\">{}</a></div></div>",
                platform_icon(&social.platform).class(),
                escape(&social.platform),
                escape(&social.url),
                escape(&social.username)
            ));
        }
        out.push_str("</div>");

        out.push_str("<div class=\"languages\"><p class=\"section-label\">Languages</p>");
        for lang in &doc.languages {
            out.push_str(&format!(
                "<div class=\"language-row\"><span class=\"flag\">{}</span>\
                 <div><p class=\"language-name\">{}</p>\
                 <p class=\"language-level\">{}</p></div></div>",
                flag_emoji(&lang.flag),
                escape(&lang.language),
                lang.level.label()
            ));
        }
        out.push_str("</div></aside>");

        // Main column.
        out.push_str("<main class=\"content\">");

        out.push_str("<section class=\"experience\"><h2>Experience</h2>");
        for exp in &doc.experience {
            let logo = exp
                .logo
                .as_deref()
                .map(|src| format!("<img class=\"logo\" src=\"{}\" alt=\"{}\"/>", escape(src), escape(&exp.company)))
                .unwrap_or_else(|| "<span class=\"icon-briefcase\"></span>".to_string());
            let when = if exp.current {
                "<span class=\"badge-present\">Present</span>".to_string()
            } else {
                format!("<p class=\"end-date\">{}</p>", escape(end_date_label(exp)))
            };
            out.push_str(&format!(
                "<article class=\"experience-card\">{logo}\
                 <div class=\"experience-head\"><h3>{}</h3><p class=\"company\">{}</p></div>\
                 <div class=\"experience-when\">{when}<p class=\"location\">{}</p></div>\
                 <p class=\"description\">{}</p></article>",
                escape(&exp.role),
                escape(&exp.company),
                escape(&exp.location),
                escape(&exp.description)
            ));
        }
        out.push_str("</section>");

        out.push_str("<section class=\"skills\"><h2>Skills</h2>");
        for group in &doc.skills {
            out.push_str(&format!(
                "<div class=\"skill-group\"><h3>{}</h3><div class=\"skill-grid\">",
                escape(&group.category)
            ));
            for skill in &group.skills {
                out.push_str(&format!("<span class=\"skill\">{}</span>", escape(skill)));
            }
            out.push_str("</div></div>");
        }
        out.push_str("</section>");

        out.push_str("<section class=\"education\"><h2>Education</h2><div class=\"education-grid\">");
        for edu in &doc.education {
            let logo = edu
                .logo
                .as_deref()
                .map(|src| format!("<img class=\"logo\" src=\"{}\" alt=\"{}\"/>", escape(src), escape(&edu.institution)))
                .unwrap_or_default();
            out.push_str(&format!(
                "<div class=\"education-card\">{logo}<h3>{}</h3>\
                 <p class=\"institution\">{}</p><p class=\"year\">{}</p></div>",
                escape(&edu.degree),
                escape(&edu.institution),
                escape(&edu.year)
            ));
        }
        out.push_str("</div></section>");

        out.push_str("<section class=\"projects\"><h2>Latest projects</h2><div class=\"project-grid\">");
        for proj in &doc.projects {
            let image = proj
                .image
                .as_deref()
                .map(|src| format!("<img src=\"{}\" alt=\"{}\"/>", escape(src), escape(&proj.title)))
                .unwrap_or_default();
            let link = proj
                .link
                .as_deref()
                .map(|href| {
                    format!(
                        "<a class=\"project-link\" href=\"{}\">{}</a>",
                        escape(href),
                        escape(href.trim_start_matches("https://"))
                    )
                })
                .unwrap_or_default();
            out.push_str(&format!(
                "<div class=\"project-card\">{image}<h3>{}</h3>\
                 <p class=\"description\">{}</p>{link}</div>",
                escape(&proj.title),
                escape(&proj.description)
            ));
        }
        out.push_str("</div></section></main>");

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::ops::{update_experience, ExperiencePatch};
    use crate::models::seed::seed_document;

    #[test]
    fn test_current_entry_shows_present_badge_not_raw_end_date() {
        let doc = seed_document();
        // Give the current entry a distinguishable stored end date.
        let current = doc.experience.iter().find(|e| e.current).unwrap().id;
        let doc = update_experience(
            &doc,
            current,
            ExperiencePatch {
                end_date: Some("XRAY-DATE".to_string()),
                ..Default::default()
            },
        );
        let html = ModernSidebar.render(&doc, Theme::Dark);
        assert!(html.contains("badge-present"));
        assert!(!html.contains("XRAY-DATE"), "current end date is display-suppressed");
    }

    #[test]
    fn test_socials_use_icon_lookup_with_fallback() {
        let doc = seed_document();
        let html = ModernSidebar.render(&doc, Theme::Dark);
        assert!(html.contains("icon-instagram"));
        assert!(html.contains("icon-linkedin"));
    }

    #[test]
    fn test_document_text_is_escaped() {
        let mut doc = seed_document();
        doc.personal.quote = "Design > everything & <everyone>".to_string();
        let html = ModernSidebar.render(&doc, Theme::Dark);
        assert!(html.contains("Design &gt; everything &amp; &lt;everyone&gt;"));
        assert!(!html.contains("<everyone>"));
    }
}
