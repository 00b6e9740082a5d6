use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("message body is empty")]
    EmptyBody,

    #[error("message body runs {len} characters, over the {max} limit")]
    BodyTooLong { len: usize, max: usize },
}
