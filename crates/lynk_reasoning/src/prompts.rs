//! Prompt templates for the enrichment skills.
//!
//! The first line of each template is what the offline provider keys on.

pub fn title(url: &str, persona: &str) -> String {
    format!(
        "Generate a concise title for the following URL.\n\n\
         URL: {}\n\
         Persona: {}\n\n\
         Rules:\n\
         - Max 10 words\n\
         - Name the site or page and its main subject\n\
         - No emojis or quotation marks\n\
         - Output title only, no additional text\n",
        url, persona
    )
}

pub fn description(url: &str, persona: &str) -> String {
    format!(
        "Generate a brief, informative description for the following URL.\n\n\
         URL: {}\n\
         Persona: {}\n\n\
         Rules:\n\
         - Max 30 words\n\
         - Describe what the resource is about or its purpose\n\
         - Be specific and informative\n\
         - No emojis or special characters\n\
         - Output description only, no additional text\n",
        url, persona
    )
}

pub fn tags(url: &str, persona: &str) -> String {
    format!(
        "Generate relevant tags for the following URL.\n\n\
         URL: {}\n\
         Persona: {}\n\n\
         Rules:\n\
         - Generate 3-5 relevant tags\n\
         - Tags should be single words or short phrases (max 2 words)\n\
         - Use lowercase\n\
         - Separate tags with commas\n\
         - Output tags only in format: tag1, tag2, tag3\n",
        url, persona
    )
}

pub fn category(url: &str, persona: &str) -> String {
    format!(
        "Categorize the following URL into ONE category/folder name.\n\n\
         URL: {}\n\
         Persona: {}\n\n\
         Rules:\n\
         - Choose ONE category\n\
         - Use simple, clear category names\n\
         - Output category name only\n",
        url, persona
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_embed_url_and_persona() {
        for prompt in [
            title("https://a.io", "student"),
            description("https://a.io", "student"),
            tags("https://a.io", "student"),
            category("https://a.io", "student"),
        ] {
            assert!(prompt.contains("URL: https://a.io\n"));
            assert!(prompt.contains("Persona: student\n"));
        }
    }

    #[test]
    fn test_templates_state_output_shape() {
        assert!(description("u", "p").contains("Max 30 words"));
        assert!(tags("u", "p").contains("3-5 relevant tags"));
        assert!(category("u", "p").contains("ONE category"));
    }
}
