use crate::buttons::Buttons;
use crate::report::XusbReport;

/// Instantaneous state of one virtual Xbox 360 gamepad.
///
/// The owner mutates the public fields between encode calls; the field types
/// are exactly the wire ranges (u8 triggers, i16 stick axes), so any value a
/// field can hold is valid and no runtime range check exists.
///
/// The struct provides no locking. Either confine a state to one thread, or
/// copy it under a lock and encode the copy; a copy is a single assignment
/// (`ControllerState` is `Copy`), so a torn half-old half-new report cannot
/// be produced from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerState {
    /// Currently pressed buttons.
    pub buttons: Buttons,
    /// Left trigger, 0 (released) to 255 (fully pulled).
    pub left_trigger: u8,
    /// Right trigger, 0 to 255.
    pub right_trigger: u8,
    /// Left stick X axis, -32768 to 32767, 0 centered.
    pub left_stick_x: i16,
    /// Left stick Y axis.
    pub left_stick_y: i16,
    /// Right stick X axis.
    pub right_stick_x: i16,
    /// Right stick Y axis.
    pub right_stick_y: i16,
}

impl ControllerState {
    /// Neutral state: no buttons, triggers released, sticks centered.
    pub const fn neutral() -> Self {
        Self {
            buttons: Buttons::empty(),
            left_trigger: 0,
            right_trigger: 0,
            left_stick_x: 0,
            left_stick_y: 0,
            right_stick_x: 0,
            right_stick_y: 0,
        }
    }

    /// Fully-specified construction from all seven fields.
    pub const fn new(
        buttons: Buttons,
        left_trigger: u8,
        right_trigger: u8,
        left_stick_x: i16,
        left_stick_y: i16,
        right_stick_x: i16,
        right_stick_y: i16,
    ) -> Self {
        Self {
            buttons,
            left_trigger,
            right_trigger,
            left_stick_x,
            left_stick_y,
            right_stick_x,
            right_stick_y,
        }
    }

    /// Encode a snapshot of this state as a wire report.
    pub fn encode(&self) -> XusbReport {
        XusbReport::from(self)
    }
}
