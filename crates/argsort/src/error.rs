use std::collections::TryReserveError;

pub type Result<T> = std::result::Result<T, ArgsortError>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ArgsortError {
    #[error("invalid input at position {index}: {reason}")]
    InvalidInput { index: usize, reason: String },
    #[error("could not reserve {len} slots for {buffer}")]
    ResourceExhausted {
        buffer: &'static str,
        len: usize,
        #[source]
        source: TryReserveError,
    },
}
