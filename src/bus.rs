use thiserror::Error;
use tracing::trace;

use crate::report::XusbReport;
use crate::state::ControllerState;

/// Errors a bus driver can signal when taking a report.
#[derive(Debug, Error)]
pub enum BusError {
    #[error("bus driver unavailable: {0}")]
    Unavailable(String),

    #[error("bus driver rejected report: {0}")]
    Rejected(String),
}

/// Report-delivery entry point of the virtual bus driver.
///
/// The driver side (device registration, kernel delivery) lives outside this
/// crate; implementors receive each encoded report and inject it into the OS
/// input stack as if it came from a physical pad.
pub trait BusDriver {
    fn submit(&mut self, report: &XusbReport) -> Result<(), BusError>;
}

/// One virtual pad: a controller state paired with the driver it feeds.
///
/// This is the single-owner usage pattern: mutate the state through
/// [`state_mut`](VirtualPad::state_mut), then [`flush`](VirtualPad::flush) to
/// push a snapshot to the driver.
pub struct VirtualPad<D: BusDriver> {
    state: ControllerState,
    driver: D,
}

impl<D: BusDriver> VirtualPad<D> {
    /// New pad in the neutral state.
    pub fn new(driver: D) -> Self {
        Self {
            state: ControllerState::neutral(),
            driver,
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ControllerState {
        &mut self.state
    }

    /// Encode the current state and hand the report to the driver.
    pub fn flush(&mut self) -> Result<(), BusError> {
        let report = self.state.encode();
        trace!(bytes = ?report.as_bytes(), "submitting input report");
        self.driver.submit(&report)
    }
}
