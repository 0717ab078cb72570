//! Idle time infrastructure module

mod unsupported;
mod xprintidle;

pub use unsupported::UnsupportedIdleMonitor;
pub use xprintidle::XprintidleMonitor;

use crate::application::ports::IdleMonitor;

/// Create the idle monitor for the current platform
///
/// Linux uses xprintidle; other platforms have no backend yet.
pub fn create_idle_monitor() -> Box<dyn IdleMonitor> {
    if cfg!(target_os = "linux") {
        Box::new(XprintidleMonitor::new())
    } else {
        Box::new(UnsupportedIdleMonitor)
    }
}
