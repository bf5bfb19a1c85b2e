//! Template projection — pure rendering of the document to an HTML page.
//!
//! Every template is a total function over the same document shape; none may
//! mutate it or require fields outside the schema. Switching templates is
//! just picking a different projector for the same value. The page frame is
//! fixed A4; the zoom scale is a uniform visual transform that never
//! re-flows or truncates content.

pub mod classic;
pub mod executive;
pub mod minimal;
pub mod modern_sidebar;
pub mod shared;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::resume::ResumeData;

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    ModernSidebar,
    Classic,
    Minimal,
    Executive,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::ModernSidebar,
        TemplateId::Classic,
        TemplateId::Minimal,
        TemplateId::Executive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::ModernSidebar => "modern-sidebar",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
            TemplateId::Executive => "executive",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown template id '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// One interchangeable rendering strategy.
pub trait Template: Send + Sync {
    fn id(&self) -> TemplateId;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Projects the document into this template's page body markup.
    fn render(&self, doc: &ResumeData, theme: Theme) -> String;
}

/// Registry lookup. Total over the closed id set.
pub fn template(id: TemplateId) -> &'static dyn Template {
    match id {
        TemplateId::ModernSidebar => &modern_sidebar::ModernSidebar,
        TemplateId::Classic => &classic::Classic,
        TemplateId::Minimal => &minimal::Minimal,
        TemplateId::Executive => &executive::Executive,
    }
}

/// A rendered page plus the visual parameters the host applies to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub html: String,
    pub width_mm: f32,
    pub height_mm: f32,
    pub scale: f32,
}

/// Projects the document through one template and wraps the body in the
/// fixed A4 frame with the zoom transform applied.
pub fn render_page(doc: &ResumeData, id: TemplateId, theme: Theme, scale: f32) -> RenderedPage {
    let body = template(id).render(doc, theme);
    let html = format!(
        "<div id=\"resume-preview\" class=\"page theme-{theme} template-{id}\" \
         style=\"width:{w}mm;min-height:{h}mm;transform:scale({scale});\
         transform-origin:top center\">{body}</div>",
        theme = theme.as_str(),
        id = id.as_str(),
        w = A4_WIDTH_MM,
        h = A4_HEIGHT_MM,
    );
    RenderedPage {
        html,
        width_mm: A4_WIDTH_MM,
        height_mm: A4_HEIGHT_MM,
        scale,
    }
}
