//! Idle monitor for platforms without a supported backend

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{IdleError, IdleMonitor};

/// Always reports that idle detection is unavailable
#[derive(Debug, Default)]
pub struct UnsupportedIdleMonitor;

#[async_trait]
impl IdleMonitor for UnsupportedIdleMonitor {
    async fn idle_time(&self) -> Result<Duration, IdleError> {
        Err(IdleError::Unsupported)
    }
}
