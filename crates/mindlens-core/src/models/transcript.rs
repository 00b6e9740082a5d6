use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Opening line the assistant greets every visitor with.
pub const ASSISTANT_GREETING: &str =
    "Hello! I am your MindLens Assistant. How are you feeling today?";

/// Canned reply recorded when the generative backend cannot be reached.
pub const ASSISTANT_FALLBACK: &str = "Service temporarily unavailable.";

/// Shown when the backend replies with an empty completion.
pub const ASSISTANT_LISTENING: &str = "I'm listening.";

/// A chat exchange between a visitor and the MindLens assistant.
///
/// Held in memory while the assistant dock is open. The generative
/// backend that produces assistant turns is an external collaborator;
/// this type only records what was said and when.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatTranscript {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub started_at: jiff::Timestamp,
}

/// A single message in a transcript.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub role: SpeakerRole,
    pub content: String,
    pub timestamp: jiff::Timestamp,
}

/// Who produced a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SpeakerRole {
    Visitor,
    Assistant,
}

impl ChatTranscript {
    /// Start a transcript seeded with the given assistant greeting.
    pub fn seeded(greeting: &str) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            messages: vec![ChatMessage {
                role: SpeakerRole::Assistant,
                content: greeting.to_string(),
                timestamp: now,
            }],
            started_at: now,
        }
    }

    pub fn push_visitor(&mut self, content: impl Into<String>) {
        self.push(SpeakerRole::Visitor, content.into());
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(SpeakerRole::Assistant, content.into());
    }

    fn push(&mut self, role: SpeakerRole, content: String) {
        self.messages.push(ChatMessage {
            role,
            content,
            timestamp: jiff::Timestamp::now(),
        });
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
