//! Chat orchestrator: owns the resolver and every live session.
//!
//! Routes each message to its session, creating a new one when the id is
//! missing, unknown or expired.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use gramabot_core::config::ChatConfig;
use gramabot_core::Language;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::error::ChatError;
use crate::resolver::ResponseResolver;
use crate::session::{validate_input, ChatSession};
use crate::types::{ChatExchange, ChatMessage, ChatSessionSummary, QuickAction, Reminder};

/// Central coordinator for chat sessions.
pub struct ChatOrchestrator {
    resolver: Arc<ResponseResolver>,
    sessions: Mutex<HashMap<Uuid, ChatSession>>,
    /// Present only when `chat.seed` is set.
    seeded_rng: Option<Mutex<StdRng>>,
    config: ChatConfig,
}

impl ChatOrchestrator {
    /// Create an orchestrator around a shared resolver.
    pub fn new(resolver: Arc<ResponseResolver>, config: ChatConfig) -> Self {
        let seeded_rng = config.seed.map(|seed| {
            debug!(seed, "Using seeded template selection");
            Mutex::new(StdRng::seed_from_u64(seed))
        });
        Self {
            resolver,
            sessions: Mutex::new(HashMap::new()),
            seeded_rng,
            config,
        }
    }

    /// Orchestrator over the built-in catalog.
    pub fn with_builtin(config: ChatConfig) -> Self {
        Self::new(Arc::new(ResponseResolver::builtin()), config)
    }

    pub fn resolver(&self) -> &ResponseResolver {
        &self.resolver
    }

    /// Open a session explicitly. Uses the configured default language when
    /// none is given.
    pub fn start_session(&self, language: Option<Language>) -> Result<Uuid, ChatError> {
        let mut sessions = self.lock_sessions()?;
        Ok(self.insert_session(&mut sessions, language))
    }

    /// Handle an incoming chat message.
    ///
    /// Returns the exchange and the session ID (new or existing). A given
    /// language switches the session to it before resolving.
    pub fn handle_message(
        &self,
        message: &str,
        language: Option<Language>,
        session_id: Option<Uuid>,
    ) -> Result<(ChatExchange, Uuid), ChatError> {
        if !self.config.enabled {
            return Err(ChatError::Disabled);
        }
        // Rejected input must not open a session.
        let message = validate_input(message, self.config.max_message_length)?;

        let mut sessions = self.lock_sessions()?;
        let sid = self.resolve_session(&mut sessions, session_id, language);
        let session = sessions
            .get_mut(&sid)
            .ok_or(ChatError::SessionNotFound(sid))?;

        let exchange = match &self.seeded_rng {
            Some(rng) => {
                let mut rng = lock_rng(rng)?;
                session.submit(message, &self.resolver, &mut *rng)?
            }
            None => session.submit(message, &self.resolver, &mut rand::rng())?,
        };

        debug!(
            session_id = %sid,
            kind = ?exchange.reply.kind,
            category = exchange.reply.category.as_deref().unwrap_or("-"),
            "Message handled"
        );
        Ok((exchange, sid))
    }

    /// Send the quick action for `category_id` on behalf of the user.
    pub fn handle_quick_action(
        &self,
        category_id: &str,
        session_id: Option<Uuid>,
    ) -> Result<(ChatExchange, Uuid), ChatError> {
        if !self.config.enabled {
            return Err(ChatError::Disabled);
        }

        let mut sessions = self.lock_sessions()?;
        let sid = self.resolve_session(&mut sessions, session_id, None);
        let session = sessions
            .get_mut(&sid)
            .ok_or(ChatError::SessionNotFound(sid))?;

        let exchange = match &self.seeded_rng {
            Some(rng) => {
                let mut rng = lock_rng(rng)?;
                session.submit_quick_action(category_id, &self.resolver, &mut *rng)
            }
            None => session.submit_quick_action(category_id, &self.resolver, &mut rand::rng()),
        };
        Ok((exchange, sid))
    }

    /// Quick actions localized for a session's language.
    pub fn quick_actions(&self, session_id: Uuid) -> Result<Vec<QuickAction>, ChatError> {
        let language = self.with_session(session_id, |s| Ok(s.language))?;
        Ok(self.resolver.quick_actions(language))
    }

    pub fn set_language(&self, session_id: Uuid, language: Language) -> Result<(), ChatError> {
        self.with_session(session_id, |s| {
            s.set_language(language);
            Ok(())
        })
    }

    pub fn add_reaction(
        &self,
        session_id: Uuid,
        message_id: Uuid,
        reaction: &str,
    ) -> Result<(), ChatError> {
        self.with_session(session_id, |s| s.add_reaction(message_id, reaction))
    }

    pub fn rate(&self, session_id: Uuid, message_id: Uuid, rating: u8) -> Result<(), ChatError> {
        self.with_session(session_id, |s| s.rate(message_id, rating))
    }

    /// Rate the session's most recent bot reply. Returns its id.
    pub fn rate_last_reply(&self, session_id: Uuid, rating: u8) -> Result<Uuid, ChatError> {
        self.with_session(session_id, |s| s.rate_last_reply(rating))
    }

    pub fn add_reminder(&self, session_id: Uuid, message_id: Uuid) -> Result<Reminder, ChatError> {
        self.with_session(session_id, |s| s.add_reminder(message_id))
    }

    /// Get a session by ID.
    pub fn get_session(&self, session_id: Uuid) -> Option<ChatSession> {
        self.sessions
            .lock()
            .ok()
            .and_then(|s| s.get(&session_id).cloned())
    }

    /// List all active sessions as summaries.
    pub fn list_sessions(&self) -> Vec<ChatSessionSummary> {
        let sessions = match self.sessions.lock() {
            Ok(s) => s,
            Err(_) => return vec![],
        };
        sessions.values().map(ChatSession::summary).collect()
    }

    /// Delete a session by ID.
    pub fn delete_session(&self, session_id: Uuid) -> Result<(), ChatError> {
        let mut sessions = self.lock_sessions()?;
        if sessions.remove(&session_id).is_some() {
            info!(session_id = %session_id, "Session deleted");
            Ok(())
        } else {
            Err(ChatError::SessionNotFound(session_id))
        }
    }

    /// Get message history for a session.
    pub fn get_history(&self, session_id: Uuid) -> Result<Vec<ChatMessage>, ChatError> {
        self.with_session(session_id, |s| Ok(s.messages.clone()))
    }

    // -- Private helpers --

    fn lock_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, ChatSession>>, ChatError> {
        self.sessions
            .lock()
            .map_err(|e| ChatError::StorageError(format!("session lock poisoned: {}", e)))
    }

    fn with_session<T>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut ChatSession) -> Result<T, ChatError>,
    ) -> Result<T, ChatError> {
        let mut sessions = self.lock_sessions()?;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(ChatError::SessionNotFound(session_id))?;
        f(session)
    }

    /// Resolve or create a session ID.
    fn resolve_session(
        &self,
        sessions: &mut HashMap<Uuid, ChatSession>,
        requested: Option<Uuid>,
        language: Option<Language>,
    ) -> Uuid {
        if let Some(sid) = requested {
            if let Some(session) = sessions.get_mut(&sid) {
                if !session.is_expired(self.config.session_timeout_minutes) {
                    if let Some(language) = language {
                        session.set_language(language);
                    }
                    return sid;
                }
                // Session expired; remove and create new
                info!(session_id = %sid, "Session expired");
                sessions.remove(&sid);
            }
        }

        self.insert_session(sessions, language)
    }

    fn insert_session(
        &self,
        sessions: &mut HashMap<Uuid, ChatSession>,
        language: Option<Language>,
    ) -> Uuid {
        let timeout = self.config.session_timeout_minutes;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(timeout));
        if sessions.len() < before {
            info!(purged = before - sessions.len(), "Expired sessions removed");
        }

        let language = language.unwrap_or_else(|| self.config.default_language());
        let session = ChatSession::new(language, self.config.max_message_length);
        let sid = session.id;
        info!(session_id = %sid, %language, "Session created");
        sessions.insert(sid, session);
        sid
    }
}

fn lock_rng(rng: &Mutex<StdRng>) -> Result<MutexGuard<'_, StdRng>, ChatError> {
    rng.lock().map_err(|e| {
        error!("RNG lock poisoned: {}", e);
        ChatError::StorageError(format!("rng lock poisoned: {}", e))
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MessageRole, ReplyKind};

    fn default_config() -> ChatConfig {
        ChatConfig::default()
    }

    fn disabled_config() -> ChatConfig {
        ChatConfig {
            enabled: false,
            ..ChatConfig::default()
        }
    }

    fn seeded_config(seed: u64) -> ChatConfig {
        ChatConfig {
            seed: Some(seed),
            ..ChatConfig::default()
        }
    }

    // ---- Construction ----

    #[test]
    fn test_new_orchestrator() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        assert!(orch.list_sessions().is_empty());
    }

    // ---- Disabled ----

    #[test]
    fn test_disabled_returns_error() {
        let orch = ChatOrchestrator::with_builtin(disabled_config());
        let result = orch.handle_message("pension", None, None);
        assert!(matches!(result.unwrap_err(), ChatError::Disabled));
        let result = orch.handle_quick_action("pension", None);
        assert!(matches!(result.unwrap_err(), ChatError::Disabled));
    }

    // ---- Input guard ----

    #[test]
    fn test_empty_message_returns_error() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let result = orch.handle_message("  ", None, None);
        assert!(matches!(result.unwrap_err(), ChatError::EmptyMessage));
    }

    #[test]
    fn test_rejected_message_opens_no_session() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        assert!(matches!(
            orch.handle_message("   ", None, None),
            Err(ChatError::EmptyMessage)
        ));
        let long_msg = "a".repeat(2001);
        assert!(orch.handle_message(&long_msg, None, None).is_err());
        assert!(orch.list_sessions().is_empty());
    }

    #[test]
    fn test_message_too_long_returns_error() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let long_msg = "a".repeat(2001);
        let result = orch.handle_message(&long_msg, None, None);
        assert!(matches!(result.unwrap_err(), ChatError::MessageTooLong(2000)));
    }

    #[test]
    fn test_message_at_max_length_ok() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let msg = "a".repeat(2000);
        let (exchange, _) = orch.handle_message(&msg, None, None).unwrap();
        assert_eq!(exchange.reply.kind, ReplyKind::OutOfDomain);
    }

    // ---- Basic message handling ----

    #[test]
    fn test_handle_message_creates_session() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let (exchange, sid) = orch
            .handle_message("Check pension status", None, None)
            .unwrap();
        assert_eq!(exchange.reply.category.as_deref(), Some("pension"));
        assert_ne!(sid, Uuid::nil());
        assert_eq!(orch.list_sessions().len(), 1);
    }

    #[test]
    fn test_new_session_uses_default_language() {
        let config = ChatConfig {
            default_language: "Kannada".to_string(),
            ..ChatConfig::default()
        };
        let orch = ChatOrchestrator::with_builtin(config);
        let (_, sid) = orch.handle_message("ಪಿಂಚಣಿ", None, None).unwrap();
        assert_eq!(orch.get_session(sid).unwrap().language, Language::Kannada);
    }

    #[test]
    fn test_language_argument_switches_session() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let (_, sid) = orch.handle_message("pension", None, None).unwrap();
        let (exchange, sid2) = orch
            .handle_message("రేషన్ కార్డ్ కోసం", Some(Language::Telugu), Some(sid))
            .unwrap();
        assert_eq!(sid, sid2);
        assert_eq!(exchange.reply.category.as_deref(), Some("ration_card"));
        assert_eq!(orch.get_session(sid).unwrap().language, Language::Telugu);
    }

    // ---- Session reuse ----

    #[test]
    fn test_same_session_id_reuses_session() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let (_, sid1) = orch.handle_message("pension", None, None).unwrap();
        let (_, sid2) = orch.handle_message("scholarship", None, Some(sid1)).unwrap();
        assert_eq!(sid1, sid2);
        assert_eq!(orch.list_sessions().len(), 1);
        assert_eq!(orch.get_history(sid1).unwrap().len(), 4);
    }

    #[test]
    fn test_unknown_session_id_creates_new() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let bogus = Uuid::new_v4();
        let (_, sid) = orch.handle_message("pension", None, Some(bogus)).unwrap();
        assert_ne!(sid, bogus);
    }

    #[test]
    fn test_expired_session_is_replaced() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let (_, sid) = orch.handle_message("pension", None, None).unwrap();
        {
            let mut sessions = orch.sessions.lock().unwrap();
            sessions.get_mut(&sid).unwrap().last_message_at -= 31 * 60;
        }
        let (_, sid2) = orch.handle_message("pension", None, Some(sid)).unwrap();
        assert_ne!(sid, sid2);
        assert!(orch.get_session(sid).is_none());
        assert_eq!(orch.list_sessions().len(), 1);
    }

    #[test]
    fn test_new_session_purges_expired_ones() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let (_, stale) = orch.handle_message("pension", None, None).unwrap();
        let (_, fresh) = orch.handle_message("pension", None, None).unwrap();
        {
            let mut sessions = orch.sessions.lock().unwrap();
            sessions.get_mut(&stale).unwrap().last_message_at -= 31 * 60;
        }
        let (_, newest) = orch.handle_message("complaint", None, None).unwrap();

        assert!(orch.get_session(stale).is_none());
        assert!(orch.get_session(fresh).is_some());
        assert!(orch.get_session(newest).is_some());
        assert_eq!(orch.list_sessions().len(), 2);
    }

    // ---- Quick actions ----

    #[test]
    fn test_quick_action() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let sid = orch.start_session(Some(Language::Hindi)).unwrap();
        let actions = orch.quick_actions(sid).unwrap();
        assert_eq!(actions.len(), 6);

        let (exchange, same) = orch
            .handle_quick_action(&actions[3].category, Some(sid))
            .unwrap();
        assert_eq!(same, sid);
        assert_eq!(exchange.user_message.text, actions[3].label);
        assert_eq!(exchange.reply.category.as_deref(), Some("land_records"));
    }

    // ---- Reactions, ratings, reminders ----

    #[test]
    fn test_feedback_round_trip() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let (exchange, sid) = orch.handle_message("complaint", None, None).unwrap();
        let bot_id = exchange.bot_message.id;

        orch.add_reaction(sid, bot_id, "👍").unwrap();
        orch.rate(sid, bot_id, 4).unwrap();
        let reminder = orch.add_reminder(sid, bot_id).unwrap();
        assert_eq!(reminder.text, exchange.bot_message.text);

        let history = orch.get_history(sid).unwrap();
        let bot = history.iter().find(|m| m.role == MessageRole::Bot).unwrap();
        assert_eq!(bot.reactions, vec!["👍"]);
        assert_eq!(bot.rating, Some(4));
    }

    #[test]
    fn test_rate_last_reply() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let sid = orch.start_session(None).unwrap();
        assert!(matches!(
            orch.rate_last_reply(sid, 5),
            Err(ChatError::NothingToRate)
        ));
        let (exchange, _) = orch.handle_message("pension", None, Some(sid)).unwrap();
        assert_eq!(orch.rate_last_reply(sid, 5).unwrap(), exchange.bot_message.id);
        assert!(matches!(
            orch.rate_last_reply(sid, 9),
            Err(ChatError::InvalidRating(9))
        ));
    }

    #[test]
    fn test_feedback_on_unknown_session() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let sid = Uuid::new_v4();
        assert!(matches!(
            orch.rate(sid, Uuid::new_v4(), 3),
            Err(ChatError::SessionNotFound(_))
        ));
        assert!(matches!(
            orch.set_language(sid, Language::Tamil),
            Err(ChatError::SessionNotFound(_))
        ));
    }

    // ---- Session management ----

    #[test]
    fn test_delete_session() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        let (_, sid) = orch.handle_message("pension", None, None).unwrap();
        orch.delete_session(sid).unwrap();
        assert!(orch.get_session(sid).is_none());
        assert!(matches!(
            orch.get_history(sid),
            Err(ChatError::SessionNotFound(_))
        ));
    }

    #[test]
    fn test_delete_nonexistent_session() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        assert!(matches!(
            orch.delete_session(Uuid::new_v4()),
            Err(ChatError::SessionNotFound(_))
        ));
    }

    #[test]
    fn test_list_sessions_summary() {
        let orch = ChatOrchestrator::with_builtin(default_config());
        orch.handle_message("pension", Some(Language::Tamil), None)
            .unwrap();
        let summaries = orch.list_sessions();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].language, Language::Tamil);
        assert_eq!(summaries[0].message_count, 2);
    }

    // ---- Seeded selection ----

    #[test]
    fn test_seeded_orchestrators_agree() {
        let a = ChatOrchestrator::with_builtin(seeded_config(99));
        let b = ChatOrchestrator::with_builtin(seeded_config(99));
        for query in ["pension", "complaint", "ration card", "land records", "pension"] {
            let (ra, _) = a.handle_message(query, None, None).unwrap();
            let (rb, _) = b.handle_message(query, None, None).unwrap();
            assert_eq!(ra.reply, rb.reply);
        }
    }

    #[test]
    fn test_orchestrator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChatOrchestrator>();
    }
}
