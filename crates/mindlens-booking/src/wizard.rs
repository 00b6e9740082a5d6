//! The booking flow state machine.
//!
//! One wizard per open booking modal. Steps run Service → Schedule →
//! Details → Success; each advance is gated on the current step being
//! filled in, exactly the condition the UI disables its next button on.
//! Closing the modal discards the wizard, whatever its progress.

use jiff::civil::{Date, Time};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use crate::catalog;
use crate::confirmation::confirmation_id;
use crate::error::BookingError;

/// Concern category the details form starts on.
pub const DEFAULT_CATEGORY: &str = "Anxiety & Stress";

// ── Types ────────────────────────────────────────────────────────────────────

/// Where the visitor is in the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BookingStep {
    Service,
    Schedule,
    Details,
    Success,
}

/// Contact form state for the details step.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingDetails {
    pub name: String,
    pub email: String,
    pub category: String,
    pub note: String,
}

impl Default for BookingDetails {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            note: String::new(),
        }
    }
}

/// The staged actions run while a booking is finalized. The UI shows
/// [`status_line`](Self::status_line) for the stage in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProcessingStage {
    SecureSessionLink,
    SyncClinicalIntake,
    ScheduleReminder,
    SendConfirmation,
}

impl ProcessingStage {
    pub const ALL: [ProcessingStage; 4] = [
        ProcessingStage::SecureSessionLink,
        ProcessingStage::SyncClinicalIntake,
        ProcessingStage::ScheduleReminder,
        ProcessingStage::SendConfirmation,
    ];

    pub fn status_line(&self) -> &'static str {
        match self {
            Self::SecureSessionLink => "Securing session link...",
            Self::SyncClinicalIntake => "Syncing clinical intake...",
            Self::ScheduleReminder => "Scheduling 24h reminder...",
            Self::SendConfirmation => "Sending confirmation...",
        }
    }
}

/// The issued receipt for a finalized booking.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingConfirmation {
    pub confirmation_id: String,
    pub service_id: String,
    pub counselor_id: String,
    pub date: Date,
    pub slot: Time,
    pub client_name: String,
    pub client_email: String,
    pub category: String,
    pub note: String,
    pub fee_usd: u32,
}

// ── Wizard ───────────────────────────────────────────────────────────────────

/// One open booking attempt.
#[derive(Debug)]
pub struct BookingWizard {
    step: BookingStep,
    service_id: Option<String>,
    date: Option<Date>,
    slot: Option<Time>,
    details: BookingDetails,
    confirmation: Option<BookingConfirmation>,
    rng: StdRng,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            step: BookingStep::Service,
            service_id: None,
            date: None,
            slot: None,
            details: BookingDetails::default(),
            confirmation: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Choose a service from the catalog.
    pub fn select_service(&mut self, id: &str) -> Result<(), BookingError> {
        if catalog::get_service(id).is_none() {
            return Err(BookingError::UnknownService(id.to_string()));
        }
        self.service_id = Some(id.to_string());
        Ok(())
    }

    /// Pick a session date. `today` anchors the past-date check; the
    /// UI's date input uses the current day as its floor.
    pub fn set_date(&mut self, date: Date, today: Date) -> Result<(), BookingError> {
        if date < today {
            return Err(BookingError::DateInPast { date });
        }
        self.date = Some(date);
        Ok(())
    }

    /// Pick a start time from the slot grid.
    pub fn set_slot(&mut self, slot: Time) -> Result<(), BookingError> {
        if !catalog::time_slots().contains(&slot) {
            return Err(BookingError::UnknownSlot(slot));
        }
        self.slot = Some(slot);
        Ok(())
    }

    /// Fill the contact form. The concern category keeps its default
    /// unless changed through [`set_category`](Self::set_category).
    pub fn contact(&mut self, name: &str, email: &str, note: &str) {
        self.details.name = name.to_string();
        self.details.email = email.to_string();
        self.details.note = note.to_string();
    }

    pub fn set_category(&mut self, category: &str) {
        self.details.category = category.to_string();
    }

    /// Whether the current step is filled in enough to advance. The UI
    /// disables its next button on exactly this check.
    pub fn can_advance(&self) -> bool {
        match self.step {
            BookingStep::Service => self.service_id.is_some(),
            BookingStep::Schedule => self.date.is_some() && self.slot.is_some(),
            BookingStep::Details => {
                !self.details.name.is_empty() && !self.details.email.is_empty()
            }
            BookingStep::Success => false,
        }
    }

    /// Move to the next step. Advancing from the details step finalizes
    /// the booking and returns the confirmation. A no-op once on the
    /// success screen.
    pub fn advance(&mut self) -> Result<Option<BookingConfirmation>, BookingError> {
        if self.step == BookingStep::Success {
            return Ok(None);
        }
        if !self.can_advance() {
            return Err(BookingError::StepIncomplete { step: self.step });
        }
        match self.step {
            BookingStep::Service => {
                self.step = BookingStep::Schedule;
                Ok(None)
            }
            BookingStep::Schedule => {
                self.step = BookingStep::Details;
                Ok(None)
            }
            BookingStep::Details => {
                let confirmation = self.finalize()?;
                self.step = BookingStep::Success;
                Ok(Some(confirmation))
            }
            BookingStep::Success => Ok(None),
        }
    }

    /// Step backwards. The service step and the success screen have no
    /// back affordance.
    pub fn back(&mut self) {
        self.step = match self.step {
            BookingStep::Service | BookingStep::Success => self.step,
            BookingStep::Schedule => BookingStep::Service,
            BookingStep::Details => BookingStep::Schedule,
        };
    }

    fn finalize(&mut self) -> Result<BookingConfirmation, BookingError> {
        let (Some(service_id), Some(date), Some(slot)) =
            (self.service_id.clone(), self.date, self.slot)
        else {
            return Err(BookingError::StepIncomplete { step: self.step });
        };
        let service = catalog::get_service(&service_id)
            .ok_or_else(|| BookingError::UnknownService(service_id.clone()))?;

        for stage in ProcessingStage::ALL {
            info!(stage = ?stage, "processing booking");
        }

        let confirmation = BookingConfirmation {
            confirmation_id: confirmation_id(&mut self.rng),
            service_id,
            counselor_id: mindlens_core::directory::LEAD_COUNSELOR_ID.to_string(),
            date,
            slot,
            client_name: self.details.name.clone(),
            client_email: self.details.email.clone(),
            category: self.details.category.clone(),
            note: self.details.note.clone(),
            fee_usd: service.fee_usd,
        };
        info!(
            confirmation_id = %confirmation.confirmation_id,
            service = %service.title,
            date = %date,
            "booking confirmed"
        );
        self.confirmation = Some(confirmation.clone());
        Ok(confirmation)
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn service_id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }

    pub fn date(&self) -> Option<Date> {
        self.date
    }

    pub fn slot(&self) -> Option<Time> {
        self.slot
    }

    pub fn details(&self) -> &BookingDetails {
        &self.details
    }

    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        self.confirmation.as_ref()
    }
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}
