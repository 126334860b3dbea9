//! Page Content
//!
//! Static copy for the documentation page, kept as typed catalogs so the
//! page iterates data instead of repeating markup.

/// Community channel for support questions
pub const DISCORD_URL: &str = "https://discord.gg/J9z5T52rkZ";

/// Request shape shown in the API reference section
pub const CHAT_API_SNIPPET: &str = r#"POST /api/chat
Content-Type: application/json

{
  "message": "Your message here",
  "model": "gemini" | "ollama",
  "session_id": "optional-session-id"
}"#;

/// A quick-start card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickLink {
    pub glyph: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const QUICK_LINKS: [QuickLink; 4] = [
    QuickLink {
        glyph: "📖",
        title: "Getting Started",
        blurb: "Set up your account and start chatting",
    },
    QuickLink {
        glyph: "💬",
        title: "Chat Features",
        blurb: "Learn about multi-chat and model switching",
    },
    QuickLink {
        glyph: "⚙️",
        title: "Settings",
        blurb: "Configure your preferences and privacy",
    },
    QuickLink {
        glyph: "❓",
        title: "FAQ",
        blurb: "Common questions and troubleshooting",
    },
];

/// A getting-started step with its checklist
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuideStep {
    pub title: &'static str,
    pub summary: &'static str,
    pub items: [&'static str; 3],
}

pub const GUIDE_STEPS: [GuideStep; 2] = [
    GuideStep {
        title: "1. Create Your Account",
        summary: "Sign up for a free account to access PrivGPT Studio. \
                  Your data remains private and secure.",
        items: [
            "Click \"Sign Up\" and enter your email",
            "Verify your email address",
            "Set up your profile preferences",
        ],
    },
    GuideStep {
        title: "2. Start Your First Chat",
        summary: "Begin chatting with AI models. Choose between cloud and \
                  local models based on your privacy needs.",
        items: [
            "Navigate to the Chat page",
            "Select your preferred AI model",
            "Type your message and press Enter",
        ],
    },
];

/// A key-feature card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        glyph: "🛡️",
        title: "Privacy First",
        blurb: "Your conversations are private. Choose local models for \
                complete data control.",
    },
    Feature {
        glyph: "💬",
        title: "Multi-Chat",
        blurb: "Manage multiple conversations simultaneously with \
                cross-references.",
    },
    Feature {
        glyph: "📤",
        title: "File Upload",
        blurb: "Upload PDFs, images, and documents for AI analysis and \
                summarization.",
    },
    Feature {
        glyph: "🎙️",
        title: "Voice Input",
        blurb: "Speak your queries naturally. Voice-to-text conversion for \
                hands-free interaction.",
    },
    Feature {
        glyph: "⚡",
        title: "Model Switching",
        blurb: "Switch between cloud and local AI models seamlessly without \
                losing context.",
    },
    Feature {
        glyph: "🗂️",
        title: "Session Management",
        blurb: "Rename, export, and delete chat sessions. Keep your \
                workspace organized.",
    },
];

/// A frequently asked question
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 3] = [
    FaqEntry {
        question: "Is my data really private?",
        answer: "Yes! When using local models, your data never leaves your \
                 device. Cloud models use encrypted connections and we don't \
                 store your conversations.",
    },
    FaqEntry {
        question: "How do I switch between AI models?",
        answer: "In the chat interface, click the model selector dropdown in \
                 the top-right corner. Choose between available cloud and \
                 local models.",
    },
    FaqEntry {
        question: "Can I use PrivGPT Studio offline?",
        answer: "Yes! Install Ollama locally and select local models for \
                 complete offline functionality.",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_copy_is_filled_in() {
        for link in QUICK_LINKS {
            assert!(!link.title.is_empty());
            assert!(!link.blurb.is_empty());
        }
        for step in GUIDE_STEPS {
            assert!(!step.summary.is_empty());
            assert!(step.items.iter().all(|item| !item.is_empty()));
        }
        for faq in FAQ {
            assert!(faq.question.ends_with('?'));
            assert!(!faq.answer.is_empty());
        }
    }

    #[test]
    fn feature_titles_are_unique() {
        let titles: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn api_snippet_documents_the_chat_endpoint() {
        assert!(CHAT_API_SNIPPET.starts_with("POST /api/chat"));
        assert!(CHAT_API_SNIPPET.contains("session_id"));
    }
}
