//! Practice directory constants.
//!
//! Contact details and the counselor roster for the MindLens practice.
//! Centralised here so the booking and messaging crates never hard-code
//! who answers a session request.

use std::sync::LazyLock;

use crate::models::Counselor;

/// Directory slug of the counselor who receives unrouted requests.
pub const LEAD_COUNSELOR_ID: &str = "nidhi-gadoya";

/// Mailbox monitored by the practice for direct messages.
pub const SUPPORT_EMAIL: &str = "info.mindlens@gmail.com";

/// WhatsApp line monitored by the practice.
pub const WHATSAPP_LINE: &str = "+91 93214 08094";

static ROSTER: LazyLock<Vec<Counselor>> = LazyLock::new(|| {
    vec![Counselor {
        id: LEAD_COUNSELOR_ID.to_string(),
        name: "Dr. Nidhi Gadoya".to_string(),
        title: "Lead Clinical Psychologist".to_string(),
        languages: vec!["English".to_string(), "Hindi".to_string()],
        approach: "CBT & ACT".to_string(),
        sessions_delivered: 250,
        accepting_sessions: true,
    }]
});

/// Every counselor currently listed by the practice.
pub fn roster() -> &'static [Counselor] {
    &ROSTER
}

/// Look up a counselor by directory slug.
pub fn get_counselor(id: &str) -> Option<&'static Counselor> {
    ROSTER.iter().find(|c| c.id == id)
}

/// The counselor who leads the practice. Always the first roster entry.
pub fn lead_counselor() -> &'static Counselor {
    &ROSTER[0]
}
