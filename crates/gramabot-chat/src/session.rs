//! A single conversation: transcript, reactions, ratings and reminders.
//!
//! The session is where user input is guarded before it reaches the
//! resolver: blank and oversized messages are rejected here.

use chrono::{DateTime, Local, TimeZone};
use gramabot_core::Language;
use rand::Rng;
use uuid::Uuid;

use crate::error::ChatError;
use crate::resolver::ResponseResolver;
use crate::types::{
    ChatExchange, ChatMessage, ChatSessionSummary, MessageRole, Reminder, ResolvedReply,
};

/// Note attached to bot replies in non-English sessions.
pub const TRANSLATION_NOTE: &str = "Response translated from local language";

/// Ratings are whole stars in this range.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// One user's conversation with the assistant.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    pub language: Language,
    pub messages: Vec<ChatMessage>,
    pub reminders: Vec<Reminder>,
    /// Epoch seconds.
    pub started_at: i64,
    /// Epoch seconds.
    pub last_message_at: i64,
    max_message_length: usize,
}

impl ChatSession {
    /// Start an empty session.
    pub fn new(language: Language, max_message_length: usize) -> Self {
        let now = Local::now().timestamp();
        Self {
            id: Uuid::new_v4(),
            language,
            messages: Vec::new(),
            reminders: Vec::new(),
            started_at: now,
            last_message_at: now,
            max_message_length,
        }
    }

    /// Opening message in the session language.
    pub fn greeting(&self) -> &'static str {
        self.language.greeting()
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// True if the session has been idle longer than the timeout.
    pub fn is_expired(&self, timeout_minutes: u32) -> bool {
        let now = Local::now().timestamp();
        now - self.last_message_at > i64::from(timeout_minutes) * 60
    }

    /// Validate free-text input, resolve it and append both messages.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        input: &str,
        resolver: &ResponseResolver,
        rng: &mut R,
    ) -> Result<ChatExchange, ChatError> {
        let text = validate_input(input, self.max_message_length)?;
        let reply = resolver.resolve_with(text, self.language, rng);
        Ok(self.record(text.to_string(), reply))
    }

    /// Send a quick action: its label becomes the user message and the
    /// reply comes straight from its category.
    pub fn submit_quick_action<R: Rng + ?Sized>(
        &mut self,
        category_id: &str,
        resolver: &ResponseResolver,
        rng: &mut R,
    ) -> ChatExchange {
        let label = resolver
            .catalog()
            .category(category_id)
            .map(|c| c.label_for(self.language).to_string())
            .unwrap_or_else(|| category_id.to_string());
        let reply = resolver.reply_for_category(category_id, self.language, rng);
        self.record(label, reply)
    }

    /// Append a reaction such as 👍 to a message.
    pub fn add_reaction(&mut self, message_id: Uuid, reaction: &str) -> Result<(), ChatError> {
        let message = self.message_mut(message_id)?;
        message.reactions.push(reaction.to_string());
        Ok(())
    }

    /// Rate a bot reply from 1 to 5 stars.
    pub fn rate(&mut self, message_id: Uuid, rating: u8) -> Result<(), ChatError> {
        if !RATING_RANGE.contains(&rating) {
            return Err(ChatError::InvalidRating(rating));
        }
        let message = self.message_mut(message_id)?;
        if message.role != MessageRole::Bot {
            return Err(ChatError::MessageNotFound(message_id));
        }
        message.rating = Some(rating);
        Ok(())
    }

    /// Rate the most recent bot reply. Returns its id.
    pub fn rate_last_reply(&mut self, rating: u8) -> Result<Uuid, ChatError> {
        let id = self
            .last_bot_message()
            .map(|m| m.id)
            .ok_or(ChatError::NothingToRate)?;
        self.rate(id, rating)?;
        Ok(id)
    }

    /// Create a reminder holding a copy of the message text.
    pub fn add_reminder(&mut self, message_id: Uuid) -> Result<Reminder, ChatError> {
        let text = self
            .message(message_id)
            .map(|m| m.text.clone())
            .ok_or(ChatError::MessageNotFound(message_id))?;
        let reminder = Reminder {
            id: Uuid::new_v4(),
            text,
            created_at: Local::now().timestamp(),
        };
        self.reminders.push(reminder.clone());
        Ok(reminder)
    }

    pub fn message(&self, message_id: Uuid) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == message_id)
    }

    pub fn last_bot_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.role == MessageRole::Bot)
    }

    pub fn summary(&self) -> ChatSessionSummary {
        ChatSessionSummary {
            id: self.id,
            language: self.language,
            started_at: format_epoch(self.started_at),
            last_message_at: format_epoch(self.last_message_at),
            message_count: self.messages.len(),
        }
    }

    // -- Private helpers --

    fn record(&mut self, user_text: String, reply: ResolvedReply) -> ChatExchange {
        let now = Local::now().timestamp();
        let user_message = ChatMessage {
            id: Uuid::new_v4(),
            role: MessageRole::User,
            text: user_text,
            created_at: now,
            translation: None,
            category: None,
            reactions: Vec::new(),
            rating: None,
        };
        let bot_message = ChatMessage {
            id: Uuid::new_v4(),
            role: MessageRole::Bot,
            text: reply.text.clone(),
            created_at: now,
            translation: (self.language != Language::English)
                .then(|| TRANSLATION_NOTE.to_string()),
            category: reply.category.clone(),
            reactions: Vec::new(),
            rating: None,
        };

        self.messages.push(user_message.clone());
        self.messages.push(bot_message.clone());
        self.last_message_at = now;

        ChatExchange {
            user_message,
            bot_message,
            reply,
        }
    }

    fn message_mut(&mut self, message_id: Uuid) -> Result<&mut ChatMessage, ChatError> {
        self.messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or(ChatError::MessageNotFound(message_id))
    }
}

/// Trim user input and reject it if blank or longer than `max_chars`
/// characters.
pub fn validate_input(input: &str, max_chars: usize) -> Result<&str, ChatError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    if text.chars().count() > max_chars {
        return Err(ChatError::MessageTooLong(max_chars));
    }
    Ok(text)
}

/// Format epoch seconds as ISO 8601 string.
fn format_epoch(epoch: i64) -> String {
    Local
        .timestamp_opt(epoch, 0)
        .single()
        .map(|dt: DateTime<Local>| dt.to_rfc3339())
        .unwrap_or_else(|| epoch.to_string())
}

// =============================================================================
// Tests
// =============================================================================
