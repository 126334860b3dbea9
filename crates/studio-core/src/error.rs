//! Error Types

use thiserror::Error;

/// Result type alias for splash gate operations
pub type Result<T> = std::result::Result<T, SplashError>;

/// Splash gate error types
///
/// Scheduling is the only fallible operation; a scheduled timer either
/// fires or is cancelled, neither of which is an error.
#[derive(Error, Debug)]
pub enum SplashError {
    /// The host event loop refused to schedule the reveal timer
    #[error("Schedule error: {0}")]
    Schedule(String),
}
