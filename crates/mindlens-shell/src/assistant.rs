//! The floating assistant dock.
//!
//! The dock sits above every page, outside the modal slot, and holds the
//! visitor's conversation with the MindLens assistant. The generative
//! backend that produces replies is an external collaborator; this module
//! records its outcomes and the dock's own toggles, nothing more.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindlens_core::models::transcript::{
    ChatTranscript, ASSISTANT_FALLBACK, ASSISTANT_GREETING, ASSISTANT_LISTENING,
};

/// Interaction mode of the assistant dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "mode", rename_all = "snake_case")]
#[ts(export)]
pub enum DockMode {
    Text,
    Voice { live: bool },
}

/// State behind the assistant dock.
#[derive(Debug)]
pub struct AssistantDock {
    open: bool,
    mode: DockMode,
    transcript: ChatTranscript,
    awaiting_reply: bool,
}

impl AssistantDock {
    /// A closed dock in text mode, its transcript seeded with the
    /// MindLens greeting.
    pub fn new() -> Self {
        Self {
            open: false,
            mode: DockMode::Text,
            transcript: ChatTranscript::seeded(ASSISTANT_GREETING),
            awaiting_reply: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the dock. The transcript and any live voice session carry
    /// on, so reopening resumes where the visitor left off.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Switch between text and voice, ending any live session first.
    pub fn switch_mode(&mut self) {
        self.end_live();
        self.mode = match self.mode {
            DockMode::Text => DockMode::Voice { live: false },
            DockMode::Voice { .. } => DockMode::Text,
        };
    }

    /// Start a live voice session. No-op outside voice mode.
    pub fn start_live(&mut self) {
        if let DockMode::Voice { live } = &mut self.mode {
            *live = true;
        }
    }

    /// End the live voice session, if one is running.
    pub fn end_live(&mut self) {
        if let DockMode::Voice { live } = &mut self.mode {
            *live = false;
        }
    }

    /// Record a visitor message and mark the dock as waiting for the
    /// backend's reply.
    ///
    /// Blank input, and input sent while a reply is still pending, is
    /// dropped; returns whether the message was recorded.
    pub fn send(&mut self, input: &str) -> bool {
        if input.trim().is_empty() || self.awaiting_reply {
            return false;
        }
        self.transcript.push_visitor(input);
        self.awaiting_reply = true;
        true
    }

    /// Append the backend's reply. An empty completion is recorded as a
    /// listening prompt so the transcript never shows a blank bubble.
    pub fn append_assistant_reply(&mut self, reply: &str) {
        let trimmed = reply.trim();
        if trimmed.is_empty() {
            self.transcript.push_assistant(ASSISTANT_LISTENING);
        } else {
            self.transcript.push_assistant(trimmed);
        }
        self.awaiting_reply = false;
    }

    /// Record that the backend call failed.
    pub fn record_failure(&mut self) {
        self.transcript.push_assistant(ASSISTANT_FALLBACK);
        self.awaiting_reply = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> DockMode {
        self.mode
    }

    pub fn is_live(&self) -> bool {
        matches!(self.mode, DockMode::Voice { live: true })
    }

    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }
}

impl Default for AssistantDock {
    fn default() -> Self {
        Self::new()
    }
}
