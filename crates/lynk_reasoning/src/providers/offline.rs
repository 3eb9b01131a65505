//! Offline provider: deterministic responses for testing and keyless runs.
//!
//! Picks a canned answer from the instruction line of the prompt and the site
//! it mentions, so the whole enrichment pipeline runs without a network.

use crate::llm::LlmClient;
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Site {
    Design,
    GitHub,
    YouTube,
    Medium,
    Other,
}

impl Site {
    fn detect(prompt: &str) -> Self {
        if prompt.contains("dribbble") || prompt.contains("design") {
            Site::Design
        } else if prompt.contains("github") {
            Site::GitHub
        } else if prompt.contains("youtube") {
            Site::YouTube
        } else if prompt.contains("medium") {
            Site::Medium
        } else {
            Site::Other
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OfflineProvider;

impl OfflineProvider {
    pub fn new() -> Self {
        Self
    }

    /// Canned answer for `prompt`. Never fails.
    pub fn respond(prompt: &str) -> &'static str {
        let prompt = prompt.to_lowercase();
        let site = Site::detect(&prompt);

        if prompt.contains("generate a concise title") {
            return match site {
                Site::Design => "Dribbble - Design Inspiration and Creative Portfolios",
                Site::GitHub => "GitHub - Code Hosting and Collaboration",
                Site::YouTube => "YouTube - Video Tutorials and Entertainment",
                Site::Medium => "Medium - Articles and Ideas",
                Site::Other => "Saved Web Resource",
            };
        }

        if prompt.contains("generate a brief, informative description") {
            return match site {
                Site::Design => "A platform for designers to showcase creative work and find design inspiration.",
                Site::GitHub => "Code hosting platform for version control and collaboration on software projects.",
                Site::YouTube => "Video sharing platform for educational content, tutorials, and entertainment.",
                Site::Medium => "Online publishing platform for articles, blog posts, and thought leadership.",
                Site::Other => "A valuable online resource with relevant content and information.",
            };
        }

        if prompt.contains("generate relevant tags") {
            return match site {
                Site::Design => "design, inspiration, portfolio, ui/ux, creative",
                Site::GitHub => "coding, development, programming, open-source, collaboration",
                Site::YouTube => "video, tutorial, learning, education, entertainment",
                Site::Medium => "article, blog, reading, writing, publishing",
                Site::Other => "resource, web, reference, online, content",
            };
        }

        if prompt.contains("categorize") || prompt.contains("category") {
            return match site {
                Site::Design => "Design",
                Site::GitHub => "Development",
                Site::YouTube => "Learning",
                Site::Medium => "Reading",
                Site::Other => "General",
            };
        }

        "AI-generated content"
    }
}

#[async_trait::async_trait]
impl LlmClient for OfflineProvider {
    fn name(&self) -> &str {
        "offline"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(Self::respond(prompt).to_string())
    }
}
