//! Turning a draft into a dispatched message.

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;

use crate::draft::{MessageCategory, MessageDraft, ReplyChannel, Urgency, MAX_BODY_LEN};
use crate::error::MessagingError;

/// Receipt for a dispatched message. The reply deadline is the dispatch
/// moment plus the urgency's promised window.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DispatchReceipt {
    pub id: Uuid,
    pub counselor_id: String,
    pub category: MessageCategory,
    pub urgency: Urgency,
    pub reply_channel: ReplyChannel,
    pub sent_at: jiff::Timestamp,
    pub expected_reply_by: jiff::Timestamp,
}

/// Validate a draft and dispatch it to the practice.
///
/// The body must contain something other than whitespace and fit in
/// [`MAX_BODY_LEN`] characters. `now` anchors the receipt timing.
pub fn dispatch(
    draft: &MessageDraft,
    now: jiff::Timestamp,
) -> Result<DispatchReceipt, MessagingError> {
    if draft.body.trim().is_empty() {
        return Err(MessagingError::EmptyBody);
    }
    let len = draft.body.chars().count();
    if len > MAX_BODY_LEN {
        return Err(MessagingError::BodyTooLong {
            len,
            max: MAX_BODY_LEN,
        });
    }

    let window = jiff::Span::new().hours(i64::from(draft.urgency.reply_window_hours()));
    let receipt = DispatchReceipt {
        id: Uuid::new_v4(),
        counselor_id: mindlens_core::directory::LEAD_COUNSELOR_ID.to_string(),
        category: draft.category,
        urgency: draft.urgency,
        reply_channel: draft.reply_channel,
        sent_at: now,
        expected_reply_by: now
            .saturating_add(window)
            .expect("hours-only span is always valid for timestamp arithmetic"),
    };

    info!(
        receipt_id = %receipt.id,
        category = ?receipt.category,
        urgency = ?receipt.urgency,
        channel = ?receipt.reply_channel,
        "message dispatched"
    );

    Ok(receipt)
}
