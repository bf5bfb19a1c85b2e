//! Header-bar layout: dark masthead, contact strip, asymmetric two-column grid.
//!
//! The only template that renders no flag glyphs — languages appear as a
//! name/level table, matching its restrained look.

use crate::models::resume::ResumeData;

use super::shared::{end_date_label, escape};
use super::{Template, TemplateId, Theme};

pub struct Executive;

impl Template for Executive {
    fn id(&self) -> TemplateId {
        TemplateId::Executive
    }

    fn name(&self) -> &'static str {
        "Executive"
    }

    fn description(&self) -> &'static str {
        "Bold headers, clean grids"
    }

    fn render(&self, doc: &ResumeData, _theme: Theme) -> String {
        let mut out = String::with_capacity(6 * 1024);

        let initial = doc
            .personal
            .full_name
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "<header class=\"masthead\"><div><h1>{}</h1><p class=\"role\">{}</p></div>\
             <div class=\"monogram\">{}</div></header>",
            escape(&doc.personal.full_name),
            escape(&doc.personal.role),
            escape(&initial)
        ));

        out.push_str(&format!(
            "<div class=\"contact-bar\"><span>{}</span><span>{}</span>\
             <span>{}</span><span>{}</span></div>",
            escape(&doc.personal.email),
            escape(&doc.personal.phone),
            escape(&doc.personal.website),
            escape(&doc.personal.location)
        ));

        out.push_str("<div class=\"columns\"><div class=\"column-side\">");

        out.push_str("<section><h2>Education</h2>");
        for edu in &doc.education {
            out.push_str(&format!(
                "<div class=\"entry\"><p class=\"degree\">{}</p>\
                 <p class=\"institution\">{}</p><p class=\"year\">{}</p></div>",
                escape(&edu.degree),
                escape(&edu.institution),
                escape(&edu.year)
            ));
        }
        out.push_str("</section>");

        out.push_str("<section><h2>Expertise</h2>");
        for group in &doc.skills {
            out.push_str(&format!("<h3>{}</h3><ul>", escape(&group.category)));
            // Top five per group; this layout trades completeness for density.
            for skill in group.skills.iter().take(5) {
                out.push_str(&format!("<li>{}</li>", escape(skill)));
            }
            out.push_str("</ul>");
        }
        out.push_str("</section>");

        out.push_str("<section><h2>Languages</h2><ul class=\"language-table\">");
        for lang in &doc.languages {
            out.push_str(&format!(
                "<li><span class=\"language\">{}</span>\
                 <span class=\"level\">{}</span></li>",
                escape(&lang.language),
                lang.level.label()
            ));
        }
        out.push_str("</ul></section></div>");

        out.push_str("<div class=\"column-main\">");

        out.push_str(&format!(
            "<section><h2>Professional Profile</h2><p class=\"profile\">{}</p></section>",
            escape(&doc.personal.quote)
        ));

        out.push_str("<section><h2>Work Experience</h2>");
        for exp in &doc.experience {
            out.push_str(&format!(
                "<div class=\"entry\"><div class=\"entry-head\"><h3>{}</h3>\
                 <span class=\"dates\">{} - {}</span></div>\
                 <p class=\"subhead\">{} | {}</p>\
                 <p class=\"description\">{}</p></div>",
                escape(&exp.role),
                escape(&exp.start_date),
                escape(end_date_label(exp)),
                escape(&exp.company),
                escape(&exp.location),
                escape(&exp.description)
            ));
        }
        out.push_str("</section>");

        out.push_str("<section><h2>Key Projects</h2>");
        for proj in &doc.projects {
            let link = proj
                .link
                .as_deref()
                .map(|href| format!("<a href=\"{}\">Project Link</a>", escape(href)))
                .unwrap_or_default();
            out.push_str(&format!(
                "<div class=\"entry\"><h3>{}</h3><p class=\"description\">{}</p>{link}</div>",
                escape(&proj.title),
                escape(&proj.description)
            ));
        }
        out.push_str("</section></div></div>");

        out
    }
}
