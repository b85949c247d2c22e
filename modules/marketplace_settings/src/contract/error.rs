//! Contract error types for the settings store
//!
//! Only local-cache failures are visible to callers: a read failure as the
//! store's error state, a write failure as a returned error. Remote failures
//! degrade silently to local-only operation.

/// Settings store errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Local cache entry was malformed or unreadable during load
    CacheRead {
        /// Failure details
        reason: String,
    },
    /// Local cache write failed during update
    CacheWrite {
        /// Failure details
        reason: String,
    },
    /// Identity resolution or remote read/write failed
    RemoteUnavailable {
        /// Failure details
        reason: String,
    },
    /// Record could not be encoded or decoded
    Serialization {
        /// Failure details
        reason: String,
    },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CacheRead { reason } => {
                write!(f, "Cache read failed: {}", reason)
            }
            Self::CacheWrite { reason } => {
                write!(f, "Cache write failed: {}", reason)
            }
            Self::RemoteUnavailable { reason } => {
                write!(f, "Remote store unavailable: {}", reason)
            }
            Self::Serialization { reason } => {
                write!(f, "Serialization failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
