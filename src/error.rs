//! Error taxonomy for environment misuse.
//!
//! Termination (`terminated = true`) is a normal outcome, not an error;
//! these cover only violations of the reset/step contract.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvError {
    /// Step called with no active episode: either reset() was never called,
    /// or the previous episode already terminated. Recoverable by resetting.
    #[error("no active episode ({reason}); call reset() first")]
    InvalidState { reason: &'static str },

    /// Step called with an action the environment does not recognize.
    /// Never substituted with a default.
    #[error("invalid action: {message}")]
    InvalidArgument { message: String },
}
