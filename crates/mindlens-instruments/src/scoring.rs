use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One point on an instrument's answer scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScalePoint {
    pub label: String,
    pub value: u8,
}

/// A single question in an instrument's bank. Position is identity:
/// banks are fixed-size and never reordered.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreenerItem {
    pub id: String,
    pub prompt: String,
}

/// Severity tier a completed screener total falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevereToSevere,
}

/// A severity classification band over an inclusive range of totals.
///
/// `label` is the display name ("Moderately Severe to Severe"); `guidance`
/// is the user-facing advice the result screen renders alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub severity: Severity,
    pub min: u8,
    pub max: u8,
    pub label: String,
    pub guidance: String,
}

impl SeverityBand {
    pub fn contains(&self, total: u8) -> bool {
        total >= self.min && total <= self.max
    }
}

/// The outcome of scoring a completed session. Derived on demand,
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub total: u8,
    pub band: Severity,
    pub label: String,
    pub guidance: String,
}

/// The shared frequency scale. Every registered instrument rates its
/// items on these four points; values are contiguous and increase with
/// symptom frequency.
pub fn frequency_scale() -> &'static [ScalePoint] {
    static SCALE: LazyLock<Vec<ScalePoint>> = LazyLock::new(|| {
        [
            ("Not at all", 0),
            ("Several days", 1),
            ("More than half the days", 2),
            ("Nearly every day", 3),
        ]
        .iter()
        .map(|(label, value)| ScalePoint {
            label: label.to_string(),
            value: *value,
        })
        .collect()
    });
    &SCALE
}

/// Whether `value` appears on the frequency scale.
pub fn on_scale(value: u8) -> bool {
    frequency_scale().iter().any(|p| p.value == value)
}
