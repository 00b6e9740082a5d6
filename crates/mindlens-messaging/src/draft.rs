use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Longest message body the practice accepts, in characters.
pub const MAX_BODY_LEN: usize = 500;

/// What a direct message is about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MessageCategory {
    #[default]
    SessionInquiry,
    FollowUp,
    ResourceRequest,
    ClinicalFeedback,
    Other,
}

impl MessageCategory {
    pub const ALL: [MessageCategory; 5] = [
        MessageCategory::SessionInquiry,
        MessageCategory::FollowUp,
        MessageCategory::ResourceRequest,
        MessageCategory::ClinicalFeedback,
        MessageCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SessionInquiry => "Session Inquiry",
            Self::FollowUp => "Follow-up",
            Self::ResourceRequest => "Resource Request",
            Self::ClinicalFeedback => "Clinical Feedback",
            Self::Other => "Other",
        }
    }
}

/// Clinical priority of a message, with the promised reply window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Urgency {
    #[default]
    Normal,
    Urgent,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Urgent => "Urgent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Standard (24h)",
            Self::Urgent => "Priority (8h)",
        }
    }

    /// Hours within which the practice promises a reply.
    pub fn reply_window_hours(&self) -> u8 {
        match self {
            Self::Normal => 24,
            Self::Urgent => 8,
        }
    }
}

/// How the visitor wants to be reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReplyChannel {
    #[default]
    Email,
    #[serde(rename = "whatsapp")]
    WhatsApp,
}

impl ReplyChannel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::WhatsApp => "WhatsApp",
        }
    }
}

/// A direct message being composed. Plain form state; validation
/// happens at dispatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageDraft {
    pub category: MessageCategory,
    pub urgency: Urgency,
    pub reply_channel: ReplyChannel,
    pub body: String,
}
