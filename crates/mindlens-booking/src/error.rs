use thiserror::Error;

use crate::wizard::BookingStep;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("{0} is not on the slot grid")]
    UnknownSlot(jiff::civil::Time),

    #[error("date {date} is in the past")]
    DateInPast { date: jiff::civil::Date },

    #[error("cannot advance: step {step:?} is incomplete")]
    StepIncomplete { step: BookingStep },
}
