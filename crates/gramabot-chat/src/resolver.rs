//! Response resolver: maps an utterance and a language to a canned reply.
//!
//! Resolution runs in three steps over an injected [`ResponseCatalog`]:
//! a domain gate against the cross-language vocabulary, first-match
//! category selection in declaration order, then a uniform random pick
//! among the matched templates. Only the last step is random.

use gramabot_core::Language;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::catalog::{normalize, ResponseCatalog};
use crate::error::ChatError;
use crate::types::{QuickAction, ReplyKind, ResolvedReply};

/// Reply used only if a catalog list is empty despite validation.
const LAST_RESORT_REPLY: &str =
    "Hey! I'm GramaBot. How can I help you with government services today?";

/// Deterministic part of resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No domain-gate keyword in the utterance.
    OutOfDomain,
    /// Passed the gate, matched no category.
    Generic,
    /// Index into the catalog's category list.
    Category(usize),
}

/// Stateless resolver over an immutable catalog.
#[derive(Debug, Clone)]
pub struct ResponseResolver {
    catalog: ResponseCatalog,
}

impl ResponseResolver {
    /// Build a resolver over a caller-supplied catalog.
    ///
    /// The catalog is normalized and validated; an invalid catalog is
    /// rejected here so that resolution itself never fails.
    pub fn new(catalog: ResponseCatalog) -> Result<Self, ChatError> {
        let catalog = catalog.normalized();
        catalog.validate()?;
        Ok(Self { catalog })
    }

    /// Resolver over the compiled-in catalog.
    pub fn builtin() -> Self {
        Self {
            catalog: ResponseCatalog::builtin(),
        }
    }

    pub fn catalog(&self) -> &ResponseCatalog {
        &self.catalog
    }

    /// Gate and categorize an utterance without picking a template.
    pub fn classify(&self, utterance: &str, language: Language) -> Classification {
        let normalized = normalize(utterance);

        if !self.catalog.in_domain(&normalized) {
            return Classification::OutOfDomain;
        }

        self.catalog
            .categories
            .iter()
            .position(|category| category.matches(&normalized, language))
            .map_or(Classification::Generic, Classification::Category)
    }

    /// Resolve with the thread-local random source.
    pub fn resolve(&self, utterance: &str, language: Language) -> ResolvedReply {
        self.resolve_with(utterance, language, &mut rand::rng())
    }

    /// Resolve with an explicit random source.
    ///
    /// Passing a seeded RNG makes the template choice reproducible.
    pub fn resolve_with<R: Rng + ?Sized>(
        &self,
        utterance: &str,
        language: Language,
        rng: &mut R,
    ) -> ResolvedReply {
        let classification = self.classify(utterance, language);
        debug!(?classification, %language, "Utterance classified");

        match classification {
            Classification::OutOfDomain => ResolvedReply {
                text: non_empty(self.catalog.out_of_domain_message(language)),
                category: None,
                kind: ReplyKind::OutOfDomain,
            },
            Classification::Generic => self.generic_reply(language, rng),
            Classification::Category(index) => {
                let category = &self.catalog.categories[index];
                ResolvedReply {
                    text: pick(category.templates_for(language), rng),
                    category: Some(category.id.clone()),
                    kind: ReplyKind::Category,
                }
            }
        }
    }

    /// Template pick for a known category, skipping classification.
    ///
    /// Unknown ids get a generic reply.
    pub fn reply_for_category<R: Rng + ?Sized>(
        &self,
        category_id: &str,
        language: Language,
        rng: &mut R,
    ) -> ResolvedReply {
        match self.catalog.category(category_id) {
            Some(category) => ResolvedReply {
                text: pick(category.templates_for(language), rng),
                category: Some(category.id.clone()),
                kind: ReplyKind::Category,
            },
            None => {
                tracing::warn!(category_id, "Unknown category, using generic reply");
                self.generic_reply(language, rng)
            }
        }
    }

    /// One quick action per category, in declaration order.
    pub fn quick_actions(&self, language: Language) -> Vec<QuickAction> {
        self.catalog
            .categories
            .iter()
            .map(|category| QuickAction {
                category: category.id.clone(),
                label: category.label_for(language).to_string(),
            })
            .collect()
    }

    fn generic_reply<R: Rng + ?Sized>(&self, language: Language, rng: &mut R) -> ResolvedReply {
        ResolvedReply {
            text: pick(self.catalog.generic_templates(language), rng),
            category: None,
            kind: ReplyKind::Generic,
        }
    }
}

impl Default for ResponseResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

fn pick<R: Rng + ?Sized>(templates: &[String], rng: &mut R) -> String {
    templates
        .choose(rng)
        .map(|t| t.to_string())
        .unwrap_or_else(|| LAST_RESORT_REPLY.to_string())
}

fn non_empty(text: &str) -> String {
    if text.trim().is_empty() {
        LAST_RESORT_REPLY.to_string()
    } else {
        text.to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Localized, ServiceCategory};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn resolver() -> ResponseResolver {
        ResponseResolver::builtin()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn category_index(resolver: &ResponseResolver, id: &str) -> usize {
        resolver
            .catalog()
            .categories
            .iter()
            .position(|c| c.id == id)
            .unwrap()
    }

    // ---- Concrete scenarios ----

    #[test]
    fn test_check_pension_status_english() {
        let r = resolver();
        let reply = r.resolve_with("Check pension status", Language::English, &mut rng());
        assert_eq!(reply.kind, ReplyKind::Category);
        assert_eq!(reply.category.as_deref(), Some("pension"));
        let pension = r.catalog().category("pension").unwrap();
        assert!(pension.templates_for(Language::English).contains(&reply.text));
    }

    #[test]
    fn test_weather_is_out_of_domain() {
        let r = resolver();
        let reply = r.resolve_with("what is the weather today", Language::English, &mut rng());
        assert_eq!(reply.kind, ReplyKind::OutOfDomain);
        assert_eq!(
            reply.text,
            "Your information is not relevant, please provide government service only."
        );
        assert!(reply.category.is_none());
    }

    #[test]
    fn test_telugu_ration_card() {
        let r = resolver();
        let reply = r.resolve_with("రేషన్ కార్డ్ కోసం", Language::Telugu, &mut rng());
        assert_eq!(reply.category.as_deref(), Some("ration_card"));
        let ration = r.catalog().category("ration_card").unwrap();
        assert!(ration.templates_for(Language::Telugu).contains(&reply.text));
        assert!(!ration.templates_for(Language::English).contains(&reply.text));
    }

    // ---- Normalization ----

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        let r = resolver();
        assert_eq!(
            r.classify("   CHECK PENSION STATUS  ", Language::English),
            Classification::Category(0)
        );
    }

    // ---- Domain gate ----

    #[test]
    fn test_out_of_domain_message_is_localized() {
        let r = resolver();
        for lang in Language::ALL {
            let reply = r.resolve_with("hello there", lang, &mut rng());
            assert_eq!(reply.kind, ReplyKind::OutOfDomain);
            assert_eq!(reply.text, r.catalog().out_of_domain_message(lang));
        }
    }

    #[test]
    fn test_category_keyword_outside_gate_is_out_of_domain() {
        let r = resolver();
        assert_eq!(
            r.classify("I need a doctor", Language::English),
            Classification::OutOfDomain
        );
    }

    #[test]
    fn test_gate_is_cross_language() {
        let r = resolver();
        // Hindi vocabulary passes the gate in an English session, but no
        // English category keyword matches.
        assert_eq!(
            r.classify("मुझे पेंशन चाहिए", Language::English),
            Classification::Generic
        );
    }

    // ---- Generic fallback ----

    #[test]
    fn test_in_domain_without_category_is_generic() {
        let r = resolver();
        let reply = r.resolve_with(
            "I need help with a government certificate",
            Language::English,
            &mut rng(),
        );
        assert_eq!(reply.kind, ReplyKind::Generic);
        assert!(reply.category.is_none());
        assert!(r
            .catalog()
            .generic_templates(Language::English)
            .contains(&reply.text));
    }

    // ---- Tie-break ----

    #[test]
    fn test_first_declared_category_wins() {
        let r = resolver();
        // Mentions both pension and complaint; pension is declared first.
        let c = r.classify("complaint about my pension", Language::English);
        assert_eq!(c, Classification::Category(category_index(&r, "pension")));
    }

    #[test]
    fn test_registration_does_not_trigger_ration_card() {
        let r = resolver();
        let c = r.classify("Health scheme registration", Language::English);
        assert_eq!(c, Classification::Category(category_index(&r, "health_scheme")));
    }

    #[test]
    fn test_england_and_island_do_not_trigger_land_records() {
        let r = resolver();
        for text in ["what is the weather in England today", "visit the island"] {
            assert_eq!(r.classify(text, Language::English), Classification::OutOfDomain);
        }
        let c = r.classify("land record for my village", Language::English);
        assert_eq!(c, Classification::Category(category_index(&r, "land_records")));
    }

    #[test]
    fn test_healthy_does_not_trigger_health_scheme() {
        let r = resolver();
        assert_eq!(
            r.classify("I feel healthy today", Language::English),
            Classification::OutOfDomain
        );
        let c = r.classify("where do I get a health card", Language::English);
        assert_eq!(c, Classification::Category(category_index(&r, "health_scheme")));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let r = resolver();
        let first = r.classify("land records for survey number 42", Language::English);
        for _ in 0..50 {
            assert_eq!(
                r.classify("land records for survey number 42", Language::English),
                first
            );
        }
        assert_eq!(first, Classification::Category(category_index(&r, "land_records")));
    }

    // ---- Randomness ----

    #[test]
    fn test_same_seed_same_template() {
        let r = resolver();
        let a = r.resolve_with("pension", Language::English, &mut StdRng::seed_from_u64(7));
        let b = r.resolve_with("pension", Language::English, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_template_eventually_selected() {
        let r = resolver();
        let templates = r
            .catalog()
            .category("pension")
            .unwrap()
            .templates_for(Language::English)
            .to_vec();
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(r.resolve_with("pension", Language::English, &mut rng).text);
        }
        assert_eq!(seen.len(), templates.len());
    }

    #[test]
    fn test_resolve_with_thread_rng() {
        let reply = resolver().resolve("scholarship deadline", Language::English);
        assert_eq!(reply.category.as_deref(), Some("scholarship"));
        assert!(!reply.text.is_empty());
    }

    // ---- Language fallback ----

    #[test]
    fn test_missing_language_templates_use_english() {
        let mut catalog = ResponseCatalog::builtin();
        catalog.categories[0].templates.hindi = None;
        let r = ResponseResolver::new(catalog).unwrap();
        let reply = r.resolve_with("पेंशन स्थिति", Language::Hindi, &mut rng());
        assert_eq!(reply.category.as_deref(), Some("pension"));
        assert!(r.catalog().categories[0]
            .templates_for(Language::English)
            .contains(&reply.text));
    }

    #[test]
    fn test_keywords_never_cross_languages() {
        let r = resolver();
        // English keyword in a Tamil session: gate passes, no Tamil keyword.
        assert_eq!(r.classify("pension", Language::Tamil), Classification::Generic);
    }

    // ---- Construction ----

    #[test]
    fn test_new_rejects_invalid_catalog() {
        let mut catalog = ResponseCatalog::builtin();
        catalog.generic = Localized::default();
        assert!(matches!(
            ResponseResolver::new(catalog),
            Err(ChatError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_new_normalizes_injected_keywords() {
        let mut catalog = ResponseCatalog::builtin();
        catalog.categories.insert(
            0,
            ServiceCategory {
                id: "birth_certificate".to_string(),
                label: Localized::default(),
                keywords: {
                    let mut k = Localized::default();
                    k.set(Language::English, vec!["  Birth CERTIFICATE ".to_string()]);
                    k
                },
                templates: {
                    let mut t = Localized::default();
                    t.set(
                        Language::English,
                        vec!["Birth certificates are issued by the panchayat office.".to_string()],
                    );
                    t
                },
            },
        );
        let r = ResponseResolver::new(catalog).unwrap();
        let reply = r.resolve_with("need a birth certificate", Language::English, &mut rng());
        assert_eq!(reply.category.as_deref(), Some("birth_certificate"));
    }

    #[test]
    fn test_resolution_does_not_mutate_catalog() {
        let r = resolver();
        let before = r.catalog().clone();
        let mut rng = rng();
        for lang in Language::ALL {
            r.resolve_with("Check pension status", lang, &mut rng);
            r.resolve_with("weather", lang, &mut rng);
        }
        assert_eq!(r.catalog(), &before);
    }

    // ---- Quick actions ----

    #[test]
    fn test_quick_actions_follow_category_order() {
        let r = resolver();
        let actions = r.quick_actions(Language::Hindi);
        assert_eq!(actions.len(), r.catalog().categories.len());
        assert_eq!(actions[0].category, "pension");
        assert_eq!(actions[0].label, "पेंशन स्थिति जांचें");
    }

    #[test]
    fn test_quick_action_labels_resolve_to_their_category() {
        let r = resolver();
        for lang in Language::ALL {
            for action in r.quick_actions(lang) {
                let c = r.classify(&action.label, lang);
                assert_eq!(
                    c,
                    Classification::Category(category_index(&r, &action.category)),
                    "{lang}: {}",
                    action.label
                );
            }
        }
    }

    #[test]
    fn test_reply_for_unknown_category_is_generic() {
        let reply = resolver().reply_for_category("passport", Language::English, &mut rng());
        assert_eq!(reply.kind, ReplyKind::Generic);
    }

    #[test]
    fn test_resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResponseResolver>();
    }
}
