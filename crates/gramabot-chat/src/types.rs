//! Shared data types for the conversational interface.

use gramabot_core::Language;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a reply was selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    /// A template from a matched service category.
    Category,
    /// In-domain, but no category keyword matched.
    Generic,
    /// The domain gate rejected the utterance.
    OutOfDomain,
}

/// The outcome of resolving one utterance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedReply {
    /// Reply text shown to the user. Never empty.
    pub text: String,
    /// Matched category id, for quick-action bookkeeping.
    pub category: Option<String>,
    pub kind: ReplyKind,
}

/// A one-click canned query bound to a service category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    /// Category id the action resolves against.
    pub category: String,
    /// Localized button text, also sent as the user's message.
    pub label: String,
}

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Bot,
}

/// A single transcript entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub text: String,
    /// Epoch seconds.
    pub created_at: i64,
    /// Note attached to bot replies in a non-English session.
    pub translation: Option<String>,
    /// Category of the reply, bot messages only.
    pub category: Option<String>,
    pub reactions: Vec<String>,
    /// Star rating 1-5, bot messages only.
    pub rating: Option<u8>,
}

/// A reminder created from a transcript entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub text: String,
    /// Epoch seconds.
    pub created_at: i64,
}

/// The user message and bot reply produced by one submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatExchange {
    pub user_message: ChatMessage,
    pub bot_message: ChatMessage,
    pub reply: ResolvedReply,
}

/// Lightweight view of a session for listings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatSessionSummary {
    pub id: Uuid,
    pub language: Language,
    /// ISO 8601 start time.
    pub started_at: String,
    /// ISO 8601 time of the last message.
    pub last_message_at: String,
    pub message_count: usize,
}
