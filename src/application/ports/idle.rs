//! Idle time port interface

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Idle detection errors
#[derive(Debug, Clone, Error)]
pub enum IdleError {
    #[error("xprintidle not found. Please install xprintidle.")]
    XprintidleNotFound,

    #[error("Failed to query idle time: {0}")]
    QueryFailed(String),

    #[error("Idle time detection is not supported on this platform")]
    Unsupported,
}

/// Port for querying how long the user has been inactive
#[async_trait]
pub trait IdleMonitor: Send + Sync {
    /// Time elapsed since the last keyboard or pointer input.
    async fn idle_time(&self) -> Result<Duration, IdleError>;
}

/// Blanket implementation for boxed monitor types
#[async_trait]
impl IdleMonitor for Box<dyn IdleMonitor> {
    async fn idle_time(&self) -> Result<Duration, IdleError> {
        self.as_ref().idle_time().await
    }
}
