use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenerError {
    #[error("answer value {0} is not on the answer scale")]
    InvalidAnswerValue(u8),

    #[error("session is not complete")]
    IncompleteSession,

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("no severity band covers total {total} for instrument '{instrument_id}'")]
    UnbandedTotal { instrument_id: String, total: u8 },
}
