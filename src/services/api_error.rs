//! Freelancer API error types
//!
//! Every failure of a profile lookup collapses into one terminal message on
//! the page, but the variants are kept apart so callers can log and match on
//! what actually went wrong.

use std::fmt;

/// Shown for any non-success HTTP status
pub const NOT_FOUND_MESSAGE: &str = "Freelancer not found";

/// Shown when the backend rejects the lookup without saying why
pub const FALLBACK_MESSAGE: &str = "Failed to fetch freelancer details";

/// Shown when the backend reports success but sends no profile
pub const MISSING_PAYLOAD_MESSAGE: &str = "Freelancer Not Found";

/// Profile lookup error type
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// Transport-level failure: the server answered with a non-2xx status
    NotFound { status: u16 },
    /// Application-level failure: the envelope carried `success: false`
    Rejected { message: Option<String> },
    /// `success: true` but the envelope had no `data`
    MissingPayload,
    /// The request never produced a response
    Network(String),
    /// The response body was not a valid envelope
    Decode(String),
}

impl ProfileError {
    /// Create a rejection, treating a blank server message as absent
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected {
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { .. } => write!(f, "{}", NOT_FOUND_MESSAGE),
            Self::Rejected { message: Some(msg) } => write!(f, "{}", msg),
            Self::Rejected { message: None } => write!(f, "{}", FALLBACK_MESSAGE),
            Self::MissingPayload => write!(f, "{}", MISSING_PAYLOAD_MESSAGE),
            Self::Network(msg) => write!(f, "{}", msg),
            Self::Decode(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ProfileError {}
