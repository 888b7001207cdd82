//! Supported conversation languages.
//!
//! Every piece of user-facing content (keywords, reply templates, greetings,
//! placeholders) is scoped to one of these languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GramabotError;

/// A language the assistant can converse in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Telugu,
    Tamil,
    Kannada,
}

impl Language {
    /// All supported languages in presentation order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Telugu,
        Language::Kannada,
        Language::Tamil,
    ];

    /// English name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Telugu => "Telugu",
            Language::Tamil => "Tamil",
            Language::Kannada => "Kannada",
        }
    }

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Telugu => "te",
            Language::Tamil => "ta",
            Language::Kannada => "kn",
        }
    }

    /// Name of the language written in its own script.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Telugu => "తెలుగు",
            Language::Tamil => "தமிழ்",
            Language::Kannada => "ಕನ್ನಡ",
        }
    }

    /// BCP-47 locale handed to speech recognition and synthesis.
    pub fn speech_locale(self) -> &'static str {
        match self {
            Language::English => "en-IN",
            Language::Hindi => "hi-IN",
            Language::Telugu => "te-IN",
            Language::Tamil => "ta-IN",
            Language::Kannada => "kn-IN",
        }
    }

    /// Hint shown in an empty input box.
    pub fn placeholder(self) -> &'static str {
        match self {
            Language::English => "Ask about government services in English...",
            Language::Hindi => "हिंदी में सरकारी सेवाओं के बारे में पूछें...",
            Language::Telugu => "తెలుగులో ప్రభుత్వ సేవల గురించి అడగండి...",
            Language::Tamil => "தமிழில் அரசாங்க சேவைகள் பற்றி கேளுங்கள்...",
            Language::Kannada => "ಸರ್ಕಾರಿ ಸೇವೆಗಳ ಬಗ್ಗೆ ಕನ್ನಡದಲ್ಲಿ ಕೇಳಿ...",
        }
    }

    /// Opening message of a new conversation.
    pub fn greeting(self) -> &'static str {
        match self {
            Language::English => {
                "Hey! I am GramaBot, your AI assistant for government services. How can I help you today?"
            }
            Language::Hindi => {
                "नमस्ते! मैं ग्रामबॉट हूं, सरकारी सेवाओं के लिए आपका AI सहायक। आज मैं आपकी कैसे मदद कर सकता हूं?"
            }
            Language::Telugu => {
                "హే! నేను గ్రామబాట్, ప్రభుత్వ సేవల కోసం మీ AI సహాయకుడను. ఈరోజు నేను మీకు ఎలా సహాయం చేయగలను?"
            }
            Language::Tamil => {
                "வணக்கம்! நான் கிராமபாட், அரசு சேவைகளுக்கான உங்கள் AI உதவியாளர். இன்று நான் உங்களுக்கு எவ்வாறு உதவ முடியும்?"
            }
            Language::Kannada => {
                "ಹೇ! ನಾನು ಗ್ರಾಮಬಾಟ್, ಸರ್ಕಾರಿ ಸೇವೆಗಳಿಗಾಗಿ ನಿಮ್ಮ AI ಸಹಾಯಕ. ಇಂದು ನಾನು ನಿಮಗೆ ಹೇಗೆ ಸಹಾಯ ಮಾಡಬಹುದು?"
            }
        }
    }

    /// Parse a language name, falling back to English when unrecognized.
    pub fn from_name_or_default(name: &str) -> Self {
        match name.parse() {
            Ok(lang) => lang,
            Err(_) => {
                tracing::warn!(language = name, "Unrecognized language, using English");
                Language::English
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = GramabotError;

    /// Accepts the English name (any case), the ISO code, or the native name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| {
                lower == lang.name().to_lowercase()
                    || lower == lang.code()
                    || trimmed == lang.native_name()
            })
            .ok_or_else(|| GramabotError::UnknownLanguage(trimmed.to_string()))
    }
}
