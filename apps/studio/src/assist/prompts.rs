//! Prompt templates for the assist operations.

pub const SYSTEM: &str = "You are a professional resume writer. You reply with the \
requested text only, without quotes or preamble.";

pub fn enhance_prompt(text: &str, context: &str) -> String {
    format!(
        "Enhance the following {context} text to be more professional, impactful, and \
         concise. Use active verbs. Keep it under 30 words. Do not include quotes or \
         preamble.\nText: \"{text}\""
    )
}

pub fn bullet_prompt(role: &str, company: &str) -> String {
    format!(
        "Generate a single, high-impact resume bullet point for a {role} position at \
         {company}. Focus on achievements and metrics. Keep it under 25 words. No quotes."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhance_prompt_embeds_context_and_text() {
        let p = enhance_prompt("I design things", "personal quote");
        assert!(p.contains("personal quote"));
        assert!(p.contains("\"I design things\""));
    }

    #[test]
    fn test_bullet_prompt_embeds_role_and_company() {
        let p = bullet_prompt("VR designer", "Meta");
        assert!(p.contains("VR designer position at Meta"));
    }
}
