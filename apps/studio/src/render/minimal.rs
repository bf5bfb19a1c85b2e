//! Sparse single-column layout. No avatar, thin rules, compact inline lists.

use crate::models::resume::ResumeData;

use super::shared::{end_date_label, escape, flag_emoji, platform_icon};
use super::{Template, TemplateId, Theme};

pub struct Minimal;

impl Template for Minimal {
    fn id(&self) -> TemplateId {
        TemplateId::Minimal
    }

    fn name(&self) -> &'static str {
        "Minimalist"
    }

    fn description(&self) -> &'static str {
        "Clean, lots of whitespace"
    }

    fn render(&self, doc: &ResumeData, _theme: Theme) -> String {
        let mut out = String::with_capacity(6 * 1024);

        out.push_str(&format!(
            "<header><h1 class=\"name\">{}</h1><p class=\"role\">{}</p>\
             <p class=\"contact-line\">{} / {} / {}</p></header>",
            escape(&doc.personal.full_name),
            escape(&doc.personal.role),
            escape(&doc.personal.email),
            escape(&doc.personal.website),
            escape(&doc.personal.location)
        ));

        if !doc.personal.quote.is_empty() {
            out.push_str(&format!(
                "<p class=\"quote\">&ldquo;{}&rdquo;</p>",
                escape(&doc.personal.quote)
            ));
        }

        out.push_str("<section><h2>Experience</h2>");
        for exp in &doc.experience {
            out.push_str(&format!(
                "<div class=\"entry\"><p class=\"entry-line\">\
                 <strong>{}</strong>, {} <span class=\"dates\">{} &ndash; {}</span></p>\
                 <p class=\"description\">{}</p></div>",
                escape(&exp.role),
                escape(&exp.company),
                escape(&exp.start_date),
                escape(end_date_label(exp)),
                escape(&exp.description)
            ));
        }
        out.push_str("</section>");

        out.push_str("<section><h2>Skills</h2>");
        for group in &doc.skills {
            // Comma-joined inline list instead of chips.
            let joined = group
                .skills
                .iter()
                .map(|s| escape(s))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!(
                "<p class=\"skill-line\"><strong>{}</strong>: {joined}</p>",
                escape(&group.category)
            ));
        }
        out.push_str("</section>");

        out.push_str("<section><h2>Education</h2>");
        for edu in &doc.education {
            out.push_str(&format!(
                "<p class=\"entry-line\"><strong>{}</strong>, {} <span class=\"dates\">{}</span></p>",
                escape(&edu.degree),
                escape(&edu.institution),
                escape(&edu.year)
            ));
        }
        out.push_str("</section>");

        out.push_str("<section><h2>Projects</h2>");
        for proj in &doc.projects {
            out.push_str(&format!(
                "<p class=\"entry-line\"><strong>{}</strong> &mdash; {}</p>",
                escape(&proj.title),
                escape(&proj.description)
            ));
        }
        out.push_str("</section>");

        out.push_str("<footer class=\"meta\">");
        out.push_str("<p class=\"social-line\">");
        for social in &doc.socials {
            out.push_str(&format!(
                "<span class=\"social\"><span class=\"{}\"></span>{}: {}</span> ",
                platform_icon(&social.platform).class(),
                escape(&social.platform),
                escape(&social.username)
            ));
        }
        out.push_str("</p><p class=\"language-line\">");
        for lang in &doc.languages {
            out.push_str(&format!(
                "<span class=\"language\">{} {} ({})</span> ",
                flag_emoji(&lang.flag),
                escape(&lang.language),
                lang.level.label()
            ));
        }
        out.push_str("</p></footer>");

        out
    }
}
