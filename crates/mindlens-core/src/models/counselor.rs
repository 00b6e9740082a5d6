use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A counselor listed in the practice directory.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Counselor {
    /// Stable directory slug, e.g. `"nidhi-gadoya"`.
    pub id: String,
    pub name: String,
    pub title: String,
    pub languages: Vec<String>,
    /// Clinical style, e.g. `"CBT & ACT"`.
    pub approach: String,
    pub sessions_delivered: u32,
    pub accepting_sessions: bool,
}
