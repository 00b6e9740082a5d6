use thiserror::Error;

use mindlens_booking::error::BookingError;
use mindlens_instruments::error::ScreenerError;
use mindlens_messaging::error::MessagingError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("no screener is open")]
    ScreenerNotOpen,

    #[error("no booking wizard is open")]
    BookingNotOpen,

    #[error("no message draft is open")]
    MessagingNotOpen,

    #[error("screener error: {0}")]
    Screener(#[from] ScreenerError),

    #[error("booking error: {0}")]
    Booking(#[from] BookingError),

    #[error("messaging error: {0}")]
    Messaging(#[from] MessagingError),
}
