//! Derived presentational computations shared by all templates.

use crate::models::resume::ExperienceItem;

/// Glyph shown for a current position instead of its end date.
pub const PRESENT_LABEL: &str = "Present";

/// Shown when a language has no region code.
pub const FLAG_PLACEHOLDER: &str = "\u{1F3F3}\u{FE0F}";

/// Offset from an ASCII uppercase letter to its regional indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformIcon {
    Instagram,
    Twitter,
    Facebook,
    Dribbble,
    Linkedin,
    Github,
    Globe,
    Link,
}

impl PlatformIcon {
    /// CSS class each template drops into its icon element.
    pub fn class(&self) -> &'static str {
        match self {
            PlatformIcon::Instagram => "icon-instagram",
            PlatformIcon::Twitter => "icon-twitter",
            PlatformIcon::Facebook => "icon-facebook",
            PlatformIcon::Dribbble => "icon-dribbble",
            PlatformIcon::Linkedin => "icon-linkedin",
            PlatformIcon::Github => "icon-github",
            PlatformIcon::Globe => "icon-globe",
            PlatformIcon::Link => "icon-link",
        }
    }
}

/// Case-insensitive substring match against the known-platform set,
/// first match wins; anything else gets the generic link glyph.
///
/// Lossy by design: a platform literally named "Website" matches the globe
/// before reaching the fallback. Keep the match order — exact-match would
/// change observable behavior.
pub fn platform_icon(label: &str) -> PlatformIcon {
    let lower = label.to_lowercase();
    if lower.contains("instagram") {
        PlatformIcon::Instagram
    } else if lower.contains("twitter") {
        PlatformIcon::Twitter
    } else if lower.contains("facebook") {
        PlatformIcon::Facebook
    } else if lower.contains("dribbble") {
        PlatformIcon::Dribbble
    } else if lower.contains("linkedin") {
        PlatformIcon::Linkedin
    } else if lower.contains("github") {
        PlatformIcon::Github
    } else if lower.contains("website") {
        PlatformIcon::Globe
    } else {
        PlatformIcon::Link
    }
}

/// Composes the flag glyph for a two-letter region code by shifting each
/// letter into the regional indicator range. Empty codes yield the
/// placeholder glyph, never an error.
pub fn flag_emoji(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return FLAG_PLACEHOLDER.to_string();
    }
    trimmed
        .to_uppercase()
        .chars()
        .filter_map(|c| char::from_u32(REGIONAL_INDICATOR_OFFSET + c as u32))
        .collect()
}

/// End-date text for an experience entry: display-suppressed to "Present"
/// while the position is current, the stored value otherwise.
pub fn end_date_label(exp: &ExperienceItem) -> &str {
    if exp.current {
        PRESENT_LABEL
    } else {
        &exp.end_date
    }
}

/// Minimal HTML escaping for document text interpolated into markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn experience(current: bool, end_date: &str) -> ExperienceItem {
        ExperienceItem {
            id: Uuid::new_v4(),
            role: "Designer".to_string(),
            company: "Acme".to_string(),
            location: String::new(),
            start_date: "2020".to_string(),
            end_date: end_date.to_string(),
            current,
            description: String::new(),
            logo: None,
        }
    }

    #[test]
    fn test_platform_icon_first_match_wins() {
        assert_eq!(platform_icon("Instagram"), PlatformIcon::Instagram);
        assert_eq!(platform_icon("My LinkedIn Page"), PlatformIcon::Linkedin);
        // "Website" is in the known set — it must match the globe, not fall through.
        assert_eq!(platform_icon("Website"), PlatformIcon::Globe);
        assert_eq!(platform_icon("Mastodon"), PlatformIcon::Link);
    }

    #[test]
    fn test_platform_icon_is_case_insensitive_substring() {
        assert_eq!(platform_icon("GITHUB (personal)"), PlatformIcon::Github);
        assert_eq!(platform_icon("dRiBbBlE"), PlatformIcon::Dribbble);
    }

    #[test]
    fn test_flag_emoji_empty_yields_placeholder() {
        assert_eq!(flag_emoji(""), FLAG_PLACEHOLDER);
        assert_eq!(flag_emoji("  "), FLAG_PLACEHOLDER);
    }

    #[test]
    fn test_flag_emoji_is_deterministic_and_distinct() {
        let it = flag_emoji("IT");
        let es = flag_emoji("ES");
        assert_eq!(it, flag_emoji("IT"));
        assert_ne!(it, es);
        // 'I' (0x49) + offset = 0x1F1EE, 'T' (0x54) + offset = 0x1F1F9
        assert_eq!(it, "\u{1F1EE}\u{1F1F9}");
    }

    #[test]
    fn test_flag_emoji_uppercases_input() {
        assert_eq!(flag_emoji("it"), flag_emoji("IT"));
    }

    #[test]
    fn test_end_date_label_suppresses_but_does_not_clear() {
        let exp = experience(true, "Jan 2022");
        assert_eq!(end_date_label(&exp), "Present");
        assert_eq!(exp.end_date, "Jan 2022");
        let past = experience(false, "Jan 2022");
        assert_eq!(end_date_label(&past), "Jan 2022");
    }

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(
            escape("<b>\"R&D\"</b>"),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }
}
