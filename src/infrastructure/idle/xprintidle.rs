//! Idle time via xprintidle (X11)

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{IdleError, IdleMonitor};

/// Idle monitor that asks the X screensaver extension through `xprintidle`
pub struct XprintidleMonitor;

impl XprintidleMonitor {
    /// Create a new xprintidle monitor
    pub fn new() -> Self {
        Self
    }

    /// Parse xprintidle output: idle milliseconds followed by a newline
    fn parse_output(stdout: &str) -> Result<Duration, IdleError> {
        stdout
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| IdleError::QueryFailed(format!("unexpected output: {:?}", stdout.trim())))
    }
}

impl Default for XprintidleMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdleMonitor for XprintidleMonitor {
    async fn idle_time(&self) -> Result<Duration, IdleError> {
        let output = Command::new("xprintidle")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    IdleError::XprintidleNotFound
                } else {
                    IdleError::QueryFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            return Err(IdleError::QueryFailed(format!(
                "xprintidle exited with status: {}",
                output.status
            )));
        }

        Self::parse_output(&String::from_utf8_lossy(&output.stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_milliseconds() {
        let idle = XprintidleMonitor::parse_output("1500\n").unwrap();
        assert_eq!(idle, Duration::from_millis(1500));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            XprintidleMonitor::parse_output("couldn't open display"),
            Err(IdleError::QueryFailed(_))
        ));
        assert!(XprintidleMonitor::parse_output("").is_err());
    }
}
