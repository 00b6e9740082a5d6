use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScreenerError;
use crate::scoring::{on_scale, ScoreResult};
use crate::ScreenerInstrument;

/// Mutable state for one screener attempt.
///
/// One instance per open screener, owned by whoever mounted it. The
/// session lives for a single open/close cycle: it is created when the
/// screener opens and discarded when it closes, completed or not.
/// Mutation happens only through [`submit_answer`](Self::submit_answer)
/// and [`go_back`](Self::go_back).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreenerSession {
    instrument_id: String,
    answers: Vec<Option<u8>>,
    current_index: usize,
    completed: bool,
}

impl ScreenerSession {
    /// Start a fresh attempt at the given screener. All answer slots
    /// open unanswered with the cursor on the first item.
    pub fn new(instrument: &dyn ScreenerInstrument) -> Self {
        Self {
            instrument_id: instrument.id().to_string(),
            answers: vec![None; instrument.items().len()],
            current_index: 0,
            completed: false,
        }
    }

    /// Record an answer for the current item and advance.
    ///
    /// `value` must be on the frequency scale; anything else fails with
    /// [`ScreenerError::InvalidAnswerValue`] and leaves the session
    /// untouched. Answering the final item marks the session completed
    /// and leaves the cursor in place. Submitting again after
    /// completion overwrites the answer under the cursor.
    pub fn submit_answer(&mut self, value: u8) -> Result<(), ScreenerError> {
        if !on_scale(value) {
            return Err(ScreenerError::InvalidAnswerValue(value));
        }
        self.answers[self.current_index] = Some(value);
        if self.current_index + 1 < self.answers.len() {
            self.current_index += 1;
        } else {
            self.completed = true;
        }
        Ok(())
    }

    /// Move the cursor back one item. A no-op on the first item, and
    /// never clears the answer already recorded there. Re-answering
    /// overwrites through [`submit_answer`](Self::submit_answer).
    pub fn go_back(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Score a completed session.
    ///
    /// Pure and idempotent. Fails with
    /// [`ScreenerError::IncompleteSession`] before every item is
    /// answered. State that did not come through the operations here
    /// (a deserialized attempt) is re-checked: a hole in the answers
    /// is incomplete regardless of the completed flag, and a retired
    /// instrument id fails the band lookup.
    pub fn compute_score(&self) -> Result<ScoreResult, ScreenerError> {
        if !self.completed {
            return Err(ScreenerError::IncompleteSession);
        }
        let instrument = crate::get_instrument(&self.instrument_id)
            .ok_or_else(|| ScreenerError::UnknownInstrument(self.instrument_id.clone()))?;
        if self.answers.len() != instrument.items().len() {
            return Err(ScreenerError::IncompleteSession);
        }

        let mut total: u8 = 0;
        for slot in &self.answers {
            let value = slot.ok_or(ScreenerError::IncompleteSession)?;
            if !on_scale(value) {
                return Err(ScreenerError::InvalidAnswerValue(value));
            }
            total += value;
        }

        let band = instrument
            .band_for(total)
            .ok_or_else(|| ScreenerError::UnbandedTotal {
                instrument_id: self.instrument_id.clone(),
                total,
            })?;
        Ok(ScoreResult {
            total,
            band: band.severity,
            label: band.label.clone(),
            guidance: band.guidance.clone(),
        })
    }

    pub fn instrument_id(&self) -> &str {
        &self.instrument_id
    }

    pub fn answers(&self) -> &[Option<u8>] {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Number of items in this attempt's bank.
    pub fn item_count(&self) -> usize {
        self.answers.len()
    }
}
