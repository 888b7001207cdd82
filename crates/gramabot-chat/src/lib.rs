//! Conversational interface for GramaBot.
//!
//! Resolves free-text citizen queries about government services into
//! localized replies, and manages the chat sessions, quick actions, service
//! directory and speech output around that resolver.

pub mod builtin;
pub mod catalog;
pub mod directory;
pub mod error;
pub mod orchestrator;
pub mod resolver;
pub mod session;
pub mod types;
pub mod voice;

pub use catalog::{Localized, ResponseCatalog, ServiceCategory};
pub use directory::{Service, ServiceDirectory, ServiceGroup, ServiceStatus};
pub use error::ChatError;
pub use orchestrator::ChatOrchestrator;
pub use resolver::{Classification, ResponseResolver};
pub use session::ChatSession;
pub use types::{
    ChatExchange, ChatMessage, ChatSessionSummary, MessageRole, QuickAction, Reminder,
    ReplyKind, ResolvedReply,
};
pub use voice::{LogSpeechSink, SpeechSink, VoiceInterface, VoiceState};
