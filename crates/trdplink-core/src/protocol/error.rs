use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("packet too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
