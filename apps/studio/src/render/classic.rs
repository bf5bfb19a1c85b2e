//! Single-column layout with a centered header and strong section rules.

use crate::models::resume::ResumeData;

use super::shared::{end_date_label, escape, flag_emoji, platform_icon};
use super::{Template, TemplateId, Theme};

pub struct Classic;

impl Template for Classic {
    fn id(&self) -> TemplateId {
        TemplateId::Classic
    }

    fn name(&self) -> &'static str {
        "Classic Vertical"
    }

    fn description(&self) -> &'static str {
        "Strong section hierarchy, centered header"
    }

    fn render(&self, doc: &ResumeData, _theme: Theme) -> String {
        let mut out = String::with_capacity(8 * 1024);

        out.push_str("<header class=\"centered\">");
        out.push_str(&format!(
            "<div class=\"avatar\"><img src=\"{}\" alt=\"Profile\"/></div>\
             <h1 class=\"name\">{}</h1><p class=\"role\">{}</p>",
            escape(&doc.personal.avatar),
            escape(&doc.personal.full_name),
            escape(&doc.personal.role)
        ));
        out.push_str(&format!(
            "<p class=\"contact-line\">{} &middot; {} &middot; {} &middot; {}</p>",
            escape(&doc.personal.email),
            escape(&doc.personal.phone),
            escape(&doc.personal.website),
            escape(&doc.personal.location)
        ));
        out.push_str("<div class=\"social-line\">");
        for social in &doc.socials {
            out.push_str(&format!(
                "<span class=\"social\"><span class=\"{}\"></span>{}</span>",
                platform_icon(&social.platform).class(),
                escape(&social.username)
            ));
        }
        out.push_str("</div></header><hr/>");

        out.push_str("<section class=\"experience\"><h2>Experience</h2>");
        for exp in &doc.experience {
            out.push_str(&format!(
                "<article class=\"entry\"><div class=\"entry-head\">\
                 <h3>{}</h3><span class=\"dates\">{} &ndash; {}</span></div>\
                 <p class=\"subhead\">{} &middot; {}</p>\
                 <p class=\"description\">{}</p></article>",
                escape(&exp.role),
                escape(&exp.start_date),
                escape(end_date_label(exp)),
                escape(&exp.company),
                escape(&exp.location),
                escape(&exp.description)
            ));
        }
        out.push_str("</section><hr/>");

        out.push_str("<section class=\"education\"><h2>Education</h2>");
        for edu in &doc.education {
            let description = edu
                .description
                .as_deref()
                .map(|d| format!("<p class=\"description\">{}</p>", escape(d)))
                .unwrap_or_default();
            out.push_str(&format!(
                "<article class=\"entry\"><div class=\"entry-head\">\
                 <h3>{}</h3><span class=\"dates\">{}</span></div>\
                 <p class=\"subhead\">{}</p>{description}</article>",
                escape(&edu.degree),
                escape(&edu.year),
                escape(&edu.institution)
            ));
        }
        out.push_str("</section><hr/>");

        out.push_str("<section class=\"skills\"><h2>Skills</h2>");
        for group in &doc.skills {
            out.push_str(&format!("<h3>{}</h3><ul class=\"skill-list\">", escape(&group.category)));
            for skill in &group.skills {
                out.push_str(&format!("<li>{}</li>", escape(skill)));
            }
            out.push_str("</ul>");
        }
        out.push_str("</section><hr/>");

        out.push_str("<section class=\"projects\"><h2>Projects</h2>");
        for proj in &doc.projects {
            let link = proj
                .link
                .as_deref()
                .map(|href| format!(" <a href=\"{}\">{}</a>", escape(href), escape(href)))
                .unwrap_or_default();
            out.push_str(&format!(
                "<article class=\"entry\"><h3>{}</h3>\
                 <p class=\"description\">{}{link}</p></article>",
                escape(&proj.title),
                escape(&proj.description)
            ));
        }
        out.push_str("</section><hr/>");

        out.push_str("<section class=\"languages\"><h2>Languages</h2><ul class=\"language-list\">");
        for lang in &doc.languages {
            out.push_str(&format!(
                "<li><span class=\"flag\">{}</span> {} <span class=\"level\">({})</span></li>",
                flag_emoji(&lang.flag),
                escape(&lang.language),
                lang.level.label()
            ));
        }
        out.push_str("</ul></section>");

        out
    }
}
