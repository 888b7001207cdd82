//! Response catalog: the static table the resolver runs against.
//!
//! A catalog holds the domain-gate vocabulary, the out-of-domain and generic
//! replies, and an ordered list of service categories with per-language
//! keywords and reply templates. It is immutable once built; the resolver
//! takes it by value at construction.

use std::collections::HashSet;
use std::path::Path;

use gramabot_core::Language;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ChatError;

// =============================================================================
// Localized
// =============================================================================

/// One optional value per supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hindi: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telugu: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tamil: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kannada: Option<T>,
}

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Self {
            english: None,
            hindi: None,
            telugu: None,
            tamil: None,
            kannada: None,
        }
    }
}

impl<T> Localized<T> {
    /// A value for every language.
    pub fn new(english: T, hindi: T, telugu: T, tamil: T, kannada: T) -> Self {
        Self {
            english: Some(english),
            hindi: Some(hindi),
            telugu: Some(telugu),
            tamil: Some(tamil),
            kannada: Some(kannada),
        }
    }

    /// Value registered for exactly this language.
    pub fn get(&self, language: Language) -> Option<&T> {
        self.slot(language).as_ref()
    }

    pub fn set(&mut self, language: Language, value: T) {
        *self.slot_mut(language) = Some(value);
    }

    /// Iterate over the languages that have a value.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> {
        Language::ALL
            .into_iter()
            .filter_map(move |lang| self.get(lang).map(|v| (lang, v)))
    }

    fn slot(&self, language: Language) -> &Option<T> {
        match language {
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
            Language::Telugu => &self.telugu,
            Language::Tamil => &self.tamil,
            Language::Kannada => &self.kannada,
        }
    }

    fn slot_mut(&mut self, language: Language) -> &mut Option<T> {
        match language {
            Language::English => &mut self.english,
            Language::Hindi => &mut self.hindi,
            Language::Telugu => &mut self.telugu,
            Language::Tamil => &mut self.tamil,
            Language::Kannada => &mut self.kannada,
        }
    }
}

impl Localized<String> {
    /// Text for the language, or the English text when it has none.
    pub fn text_or_english(&self, language: Language) -> Option<&str> {
        self.get(language)
            .filter(|s| !s.trim().is_empty())
            .or(self.english.as_ref())
            .map(String::as_str)
    }
}

impl Localized<Vec<String>> {
    /// Entries for the language, or the English entries when it has none.
    pub fn list_or_english(&self, language: Language) -> &[String] {
        self.get(language)
            .filter(|v| !v.is_empty())
            .or(self.english.as_ref())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

// =============================================================================
// ServiceCategory
// =============================================================================

/// A government-service domain with its trigger keywords and replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    /// Stable identifier, e.g. `pension`.
    pub id: String,
    /// Quick-action button text.
    #[serde(default)]
    pub label: Localized<String>,
    /// Substrings that select this category, per language.
    pub keywords: Localized<Vec<String>>,
    /// Candidate replies, per language.
    pub templates: Localized<Vec<String>>,
}

impl ServiceCategory {
    /// Keywords for exactly this language; matching never crosses languages.
    pub fn keywords_for(&self, language: Language) -> &[String] {
        self.keywords.get(language).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Templates for the language, English when the language has none.
    pub fn templates_for(&self, language: Language) -> &[String] {
        self.templates.list_or_english(language)
    }

    /// Quick-action label, falling back to English and then to the id.
    pub fn label_for(&self, language: Language) -> &str {
        self.label.text_or_english(language).unwrap_or(&self.id)
    }

    /// True if any keyword for the language occurs in the normalized text.
    pub fn matches(&self, normalized: &str, language: Language) -> bool {
        self.keywords_for(language)
            .iter()
            .any(|kw| normalized.contains(kw.as_str()))
    }
}

// =============================================================================
// ResponseCatalog
// =============================================================================

/// The complete resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCatalog {
    /// Cross-category, cross-language relevance vocabulary.
    pub domain_vocabulary: Vec<String>,
    /// Redirect shown when the gate rejects an utterance.
    pub out_of_domain: Localized<String>,
    /// Replies for in-domain utterances that match no category.
    pub generic: Localized<Vec<String>>,
    /// Categories in match priority order.
    pub categories: Vec<ServiceCategory>,
}

impl ResponseCatalog {
    /// Parse, normalize and validate a TOML catalog.
    pub fn from_toml_str(content: &str) -> Result<Self, ChatError> {
        let catalog: ResponseCatalog =
            toml::from_str(content).map_err(|e| ChatError::InvalidCatalog(e.to_string()))?;
        let catalog = catalog.normalized();
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ChatError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ChatError::StorageError(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            "Response catalog loaded"
        );
        Ok(catalog)
    }

    /// Serialize the catalog as TOML.
    pub fn to_toml_string(&self) -> Result<String, ChatError> {
        toml::to_string_pretty(self).map_err(|e| ChatError::InvalidCatalog(e.to_string()))
    }

    /// Lowercase and trim every keyword, dropping blanks.
    ///
    /// Utterances are normalized the same way before matching.
    pub fn normalized(mut self) -> Self {
        self.domain_vocabulary = normalize_keywords(std::mem::take(&mut self.domain_vocabulary));
        for category in &mut self.categories {
            for lang in Language::ALL {
                if let Some(list) = category.keywords.slot_mut(lang).take() {
                    category.keywords.set(lang, normalize_keywords(list));
                }
            }
        }
        self
    }

    /// Check the invariants the resolver relies on.
    ///
    /// English is the fallback language, so every list the resolver can
    /// draw from must have English content.
    pub fn validate(&self) -> Result<(), ChatError> {
        if self.domain_vocabulary.is_empty() {
            return invalid("domain vocabulary is empty");
        }
        let redirect = self.out_of_domain.text_or_english(Language::English);
        if redirect.map_or(true, |s| s.trim().is_empty()) {
            return invalid("out-of-domain message has no English text");
        }
        if self.generic.list_or_english(Language::English).is_empty() {
            return invalid("generic replies have no English entries");
        }
        check_templates("generic", &self.generic)?;

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                return invalid("category with empty id");
            }
            if !seen.insert(category.id.as_str()) {
                return invalid(&format!("duplicate category id '{}'", category.id));
            }
            if category.keywords_for(Language::English).is_empty() {
                return invalid(&format!("category '{}' has no English keywords", category.id));
            }
            if category.templates_for(Language::English).is_empty() {
                return invalid(&format!(
                    "category '{}' has no English templates",
                    category.id
                ));
            }
            check_templates(&category.id, &category.templates)?;
        }
        Ok(())
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&ServiceCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Out-of-domain message for the language, English when missing.
    pub fn out_of_domain_message(&self, language: Language) -> &str {
        self.out_of_domain.text_or_english(language).unwrap_or("")
    }

    /// Generic replies for the language, English when missing.
    pub fn generic_templates(&self, language: Language) -> &[String] {
        self.generic.list_or_english(language)
    }

    /// True if any domain-gate keyword occurs in the normalized text.
    pub fn in_domain(&self, normalized: &str) -> bool {
        self.domain_vocabulary
            .iter()
            .any(|kw| normalized.contains(kw.as_str()))
    }
}

/// Normalize text the way keywords are normalized: trimmed, lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn normalize_keywords(list: Vec<String>) -> Vec<String> {
    list.iter()
        .map(|kw| normalize(kw))
        .filter(|kw| !kw.is_empty())
        .collect()
}

fn check_templates(owner: &str, templates: &Localized<Vec<String>>) -> Result<(), ChatError> {
    for (lang, list) in templates.iter() {
        if list.iter().any(|t| t.trim().is_empty()) {
            return invalid(&format!("blank {} template in '{}'", lang, owner));
        }
    }
    Ok(())
}

fn invalid<T>(reason: &str) -> Result<T, ChatError> {
    Err(ChatError::InvalidCatalog(reason.to_string()))
}

// =============================================================================
// Tests
// =============================================================================
