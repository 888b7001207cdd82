//! Speech seam for the conversational engine.
//!
//! Text-to-speech and speech recognition live outside this crate. Replies are
//! handed to a [`SpeechSink`] together with the session's BCP-47 locale.

use gramabot_core::Language;
use tracing::info;

use crate::error::ChatError;

/// Anything that can voice a reply.
pub trait SpeechSink: Send + Sync {
    /// Speak `text` in `locale` (e.g. `te-IN`).
    fn speak(&self, text: &str, locale: &str) -> Result<(), ChatError>;
}

/// Sink that writes replies to the log instead of a speaker.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSpeechSink;

impl SpeechSink for LogSpeechSink {
    fn speak(&self, text: &str, locale: &str) -> Result<(), ChatError> {
        info!(locale, chars = text.chars().count(), "speak: {}", text);
        Ok(())
    }
}

/// Current activity of the voice interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceState {
    Idle,
    Listening,
    Speaking,
}

/// Tracks microphone and speaker state for one session.
pub struct VoiceInterface<S: SpeechSink> {
    sink: S,
    language: Language,
    state: VoiceState,
}

impl<S: SpeechSink> VoiceInterface<S> {
    pub fn new(sink: S, language: Language) -> Self {
        Self {
            sink,
            language,
            state: VoiceState::Idle,
        }
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Start listening for voice input.
    pub fn start_listening(&mut self) -> Result<(), ChatError> {
        match self.state {
            VoiceState::Idle => {
                self.state = VoiceState::Listening;
                Ok(())
            }
            VoiceState::Listening => Err(ChatError::VoiceError(
                "Voice capture is already active".to_string(),
            )),
            VoiceState::Speaking => Err(ChatError::VoiceError(
                "Cannot listen while speaking".to_string(),
            )),
        }
    }

    /// Stop listening and return any captured text.
    ///
    /// No recognizer is attached, so the transcript is always `None`.
    pub fn stop_listening(&mut self) -> Result<Option<String>, ChatError> {
        if self.state != VoiceState::Listening {
            return Err(ChatError::VoiceError(
                "Voice capture is not active".to_string(),
            ));
        }
        self.state = VoiceState::Idle;
        Ok(None)
    }

    /// Voice a reply in the current language. Returns to idle afterwards,
    /// even if the sink fails.
    pub fn speak(&mut self, text: &str) -> Result<(), ChatError> {
        if self.state == VoiceState::Listening {
            return Err(ChatError::VoiceError(
                "Cannot speak while listening".to_string(),
            ));
        }
        self.state = VoiceState::Speaking;
        let result = self.sink.speak(text, self.language.speech_locale());
        self.state = VoiceState::Idle;
        result
    }
}

// =============================================================================
// Tests
// =============================================================================
