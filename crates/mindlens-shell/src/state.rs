//! Page selection and the single modal slot.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mindlens_booking::wizard::{BookingConfirmation, BookingWizard};
use mindlens_instruments::error::ScreenerError;
use mindlens_instruments::get_instrument;
use mindlens_instruments::scoring::ScoreResult;
use mindlens_instruments::session::ScreenerSession;
use mindlens_messaging::dispatch::{dispatch, DispatchReceipt};
use mindlens_messaging::draft::MessageDraft;

use crate::error::ShellError;
use crate::events::FlowEvent;

// ── Types ───────────────────────────────────────────────────────────────────

/// Top-level page of the single-page app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Page {
    #[default]
    Home,
    About,
    Contact,
}

/// Legal documents reachable from the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LegalDoc {
    Terms,
    Privacy,
    Hipaa,
}

/// The overlay currently mounted, owning its flow state.
///
/// At most one overlay is open at a time; closing it drops whatever flow
/// state the variant holds, so a reopened flow always starts fresh.
#[derive(Debug)]
pub enum Modal {
    Screener(ScreenerSession),
    Booking(BookingWizard),
    Messaging(MessageDraft),
    Legal(LegalDoc),
}

// ── Shell ───────────────────────────────────────────────────────────────────

/// Composed application state behind the MindLens frontend.
///
/// Owns the current page and the modal slot, and routes flow operations
/// to whichever flow is mounted. The assistant dock floats over every
/// page independently of the modal slot and lives in
/// [`crate::assistant`].
#[derive(Debug, Default)]
pub struct AppShell {
    page: Page,
    modal: Option<Modal>,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// Mount a fresh screener session for the given instrument,
    /// replacing any open modal.
    pub fn open_screener(&mut self, instrument_id: &str) -> Result<(), ShellError> {
        let instrument = get_instrument(instrument_id)
            .ok_or_else(|| ScreenerError::UnknownInstrument(instrument_id.to_string()))?;
        self.modal = Some(Modal::Screener(ScreenerSession::new(instrument.as_ref())));
        Ok(())
    }

    pub fn open_booking(&mut self) {
        self.modal = Some(Modal::Booking(BookingWizard::new()));
    }

    pub fn open_messaging(&mut self) {
        self.modal = Some(Modal::Messaging(MessageDraft::default()));
    }

    pub fn open_legal(&mut self, doc: LegalDoc) {
        self.modal = Some(Modal::Legal(doc));
    }

    /// Close the open modal, discarding its flow state regardless of
    /// progress.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    // ── Screener flow ───────────────────────────────────────────────────────

    /// Record an answer in the open screener.
    ///
    /// Returns the scored result on the submit that completes the
    /// session; every other submit returns `None`.
    pub fn submit_screener_answer(
        &mut self,
        value: u8,
    ) -> Result<Option<ScoreResult>, ShellError> {
        let Some(Modal::Screener(session)) = &mut self.modal else {
            return Err(ShellError::ScreenerNotOpen);
        };
        let was_complete = session.completed();
        session.submit_answer(value)?;
        if session.completed() && !was_complete {
            let result = session.compute_score()?;
            FlowEvent::new("screener", "completed", session.instrument_id()).emit();
            return Ok(Some(result));
        }
        Ok(None)
    }

    /// Step the open screener back one question.
    pub fn screener_back(&mut self) -> Result<(), ShellError> {
        let Some(Modal::Screener(session)) = &mut self.modal else {
            return Err(ShellError::ScreenerNotOpen);
        };
        session.go_back();
        Ok(())
    }

    /// Score the open screener. Fails until the session is complete.
    pub fn screener_result(&self) -> Result<ScoreResult, ShellError> {
        let Some(Modal::Screener(session)) = &self.modal else {
            return Err(ShellError::ScreenerNotOpen);
        };
        Ok(session.compute_score()?)
    }

    /// The result screen's "Book Priority Session" action: drops the
    /// screener and mounts a fresh booking wizard in its place.
    pub fn begin_priority_booking(&mut self) -> Result<(), ShellError> {
        if !matches!(self.modal, Some(Modal::Screener(_))) {
            return Err(ShellError::ScreenerNotOpen);
        }
        self.modal = Some(Modal::Booking(BookingWizard::new()));
        Ok(())
    }

    // ── Booking flow ────────────────────────────────────────────────────────

    /// The open booking wizard, for service/schedule/contact input.
    pub fn booking_mut(&mut self) -> Result<&mut BookingWizard, ShellError> {
        match &mut self.modal {
            Some(Modal::Booking(wizard)) => Ok(wizard),
            _ => Err(ShellError::BookingNotOpen),
        }
    }

    /// Advance the open booking wizard one step.
    ///
    /// Returns the confirmation when the advance finalizes the booking.
    pub fn advance_booking(&mut self) -> Result<Option<BookingConfirmation>, ShellError> {
        let confirmation = self.booking_mut()?.advance()?;
        if let Some(confirmation) = &confirmation {
            FlowEvent::new("booking", "confirmed", confirmation.confirmation_id.as_str())
                .with_details(serde_json::json!({ "service": confirmation.service_id }))
                .emit();
        }
        Ok(confirmation)
    }

    // ── Messaging flow ──────────────────────────────────────────────────────

    /// The open message draft, for composition.
    pub fn messaging_mut(&mut self) -> Result<&mut MessageDraft, ShellError> {
        match &mut self.modal {
            Some(Modal::Messaging(draft)) => Ok(draft),
            _ => Err(ShellError::MessagingNotOpen),
        }
    }

    /// Send the open draft and close the messaging modal.
    ///
    /// A rejected draft (blank, or over the length cap) stays mounted so
    /// the visitor can fix it.
    pub fn dispatch_message(
        &mut self,
        now: jiff::Timestamp,
    ) -> Result<DispatchReceipt, ShellError> {
        let Some(Modal::Messaging(draft)) = &self.modal else {
            return Err(ShellError::MessagingNotOpen);
        };
        let receipt = dispatch(draft, now)?;
        FlowEvent::new("messaging", "dispatched", receipt.id.to_string())
            .with_details(serde_json::json!({
                "urgency": receipt.urgency,
                "channel": receipt.reply_channel,
            }))
            .emit();
        self.modal = None;
        Ok(receipt)
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }
}
