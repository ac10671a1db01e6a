//! State and wire encoding for a virtual Xbox 360 gamepad.
//!
//! A caller mutates a [`ControllerState`] over time, encodes it into the
//! fixed 20-byte [`XusbReport`], and hands the report to the virtual bus
//! driver through the [`BusDriver`] seam. The driver itself and whatever
//! transport carries the bytes are external; this crate only guarantees the
//! report layout. There is no decode direction.
//!
//! Nothing here locks. Share a [`ControllerState`] across threads only by
//! copying it under a lock and encoding the copy, or keep each state on a
//! single thread; otherwise a report can mix halves of two updates.

mod bus;
mod buttons;
mod report;
mod state;

pub use bus::{BusDriver, BusError, VirtualPad};
pub use buttons::Buttons;
pub use report::{REPORT_LEN, REPORT_SIZE, REPORT_TYPE, XusbReport};
pub use state::ControllerState;
