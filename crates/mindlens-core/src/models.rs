pub mod counselor;
pub mod transcript;

pub use counselor::Counselor;
pub use transcript::{ChatMessage, ChatTranscript, SpeakerRole};
