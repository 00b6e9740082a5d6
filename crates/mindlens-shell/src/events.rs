use serde::Serialize;
use tracing::info;

/// A structured event marking a milestone in a visitor flow.
///
/// These events are logged via `tracing` so a host subscriber can forward
/// them to whatever funnel analytics the deployment uses. They carry the
/// subject's identifier (instrument id, confirmation id, receipt id), never
/// answer values or message bodies.
#[derive(Debug, Clone, Serialize)]
pub struct FlowEvent {
    pub flow: String,
    pub action: String,
    pub subject_id: String,
    pub details: Option<serde_json::Value>,
}

impl FlowEvent {
    pub fn new(
        flow: impl Into<String>,
        action: impl Into<String>,
        subject_id: impl Into<String>,
    ) -> Self {
        Self {
            flow: flow.into(),
            action: action.into(),
            subject_id: subject_id.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this flow event via tracing.
    pub fn emit(&self) {
        info!(
            flow.name = %self.flow,
            flow.action = %self.action,
            flow.subject_id = %self.subject_id,
            "flow event"
        );
    }
}
