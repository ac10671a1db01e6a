use bytemuck::{Pod, Zeroable};

use crate::state::ControllerState;

/// First byte of every report.
pub const REPORT_TYPE: u8 = 0x00;
/// Second byte of every report: total length, 20 bytes.
pub const REPORT_LEN: u8 = 0x14;
/// Size of the encoded report in bytes.
pub const REPORT_SIZE: usize = 20;

/// One encoded 20-byte XUSB input report, as handed to the bus driver.
///
/// Wire layout (all multi-byte fields little-endian):
///
/// | offset | field |
/// |--------|-------|
/// | 0      | report type, `0x00` |
/// | 1      | report length, `0x14` |
/// | 2-3    | buttons |
/// | 4      | left trigger |
/// | 5      | right trigger |
/// | 6-7    | left stick X |
/// | 8-9    | left stick Y |
/// | 10-11  | right stick X |
/// | 12-13  | right stick Y |
/// | 14-19  | reserved, zero |
///
/// A report owns its bytes; mutating the state it was encoded from does not
/// change an already produced report.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct XusbReport([u8; REPORT_SIZE]);

impl XusbReport {
    /// Borrow the raw report bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; REPORT_SIZE] {
        bytemuck::cast_ref(self)
    }
}

impl From<&ControllerState> for XusbReport {
    /// Encode a state snapshot. Total and pure: every state value is
    /// encodable and the input is not touched.
    fn from(state: &ControllerState) -> Self {
        let mut bytes = [0u8; REPORT_SIZE];

        bytes[0] = REPORT_TYPE;
        bytes[1] = REPORT_LEN;
        bytes[2..4].copy_from_slice(&state.buttons.bits().to_le_bytes());
        bytes[4] = state.left_trigger;
        bytes[5] = state.right_trigger;

        // Stick axes go out as their two's-complement bit pattern;
        // to_le_bytes works on that pattern, no signed shifts involved.
        bytes[6..8].copy_from_slice(&state.left_stick_x.to_le_bytes());
        bytes[8..10].copy_from_slice(&state.left_stick_y.to_le_bytes());
        bytes[10..12].copy_from_slice(&state.right_stick_x.to_le_bytes());
        bytes[12..14].copy_from_slice(&state.right_stick_y.to_le_bytes());

        // bytes 14..20 stay zero, reserved
        XusbReport(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::Buttons;

    #[test]
    fn report_is_20_bytes_with_fixed_header() {
        let states = [
            ControllerState::neutral(),
            ControllerState::new(Buttons::all(), 255, 255, i16::MIN, i16::MAX, -1, 1),
        ];
        for state in states {
            let report = state.encode();
            assert_eq!(report.as_bytes().len(), REPORT_SIZE);
            assert_eq!(report.as_bytes()[0], 0x00);
            assert_eq!(report.as_bytes()[1], 0x14);
        }
    }

    #[test]
    fn neutral_state_encodes_to_zeroed_body() {
        let report = ControllerState::neutral().encode();
        assert_eq!(&report.as_bytes()[2..], &[0u8; 18]);
    }

    #[test]
    fn buttons_encode_little_endian() {
        let state = ControllerState {
            buttons: Buttons::DPAD_UP | Buttons::A, // 0b0001_0000_0000_0001
            ..ControllerState::neutral()
        };
        let bytes = *state.encode().as_bytes();
        assert_eq!(bytes[2], 0x01);
        assert_eq!(bytes[3], 0x10);
    }

    #[test]
    fn triggers_encode_raw() {
        let state = ControllerState {
            left_trigger: 200,
            right_trigger: 0,
            ..ControllerState::neutral()
        };
        let bytes = *state.encode().as_bytes();
        assert_eq!(bytes[4], 200);
        assert_eq!(bytes[5], 0);
    }

    #[test]
    fn negative_axis_encodes_twos_complement() {
        let state = ControllerState {
            left_stick_x: -1,
            ..ControllerState::neutral()
        };
        let bytes = *state.encode().as_bytes();
        assert_eq!(bytes[6], 0xFF);
        assert_eq!(bytes[7], 0xFF);
    }

    #[test]
    fn max_axis_encodes_little_endian() {
        let state = ControllerState {
            left_stick_x: 32767,
            ..ControllerState::neutral()
        };
        let bytes = *state.encode().as_bytes();
        assert_eq!(bytes[6], 0xFF);
        assert_eq!(bytes[7], 0x7F);
    }

    #[test]
    fn every_axis_lands_at_its_offset() {
        let state = ControllerState::new(Buttons::empty(), 0, 0, 0x1122, -0x2000, i16::MIN, 0x7FFF);
        let bytes = *state.encode().as_bytes();
        assert_eq!(&bytes[6..8], &0x1122i16.to_le_bytes());
        assert_eq!(&bytes[8..10], &(-0x2000i16).to_le_bytes());
        assert_eq!(&bytes[10..12], &i16::MIN.to_le_bytes());
        assert_eq!(&bytes[12..14], &0x7FFFi16.to_le_bytes());
        assert_eq!(&bytes[14..], &[0u8; 6]);
    }

    #[test]
    fn encode_is_idempotent() {
        let state = ControllerState::new(Buttons::B | Buttons::BACK, 7, 9, 11, -13, 17, -19);
        assert_eq!(state.encode(), state.encode());
    }

    #[test]
    fn copied_state_encodes_identically() {
        let state = ControllerState::new(Buttons::GUIDE, 1, 2, 3, 4, 5, 6);
        let copy = state;
        assert_eq!(copy.encode(), state.encode());
    }

    #[test]
    fn report_does_not_alias_the_state() {
        let mut state = ControllerState::neutral();
        state.left_trigger = 50;
        let report = state.encode();
        state.left_trigger = 200;
        state.buttons = Buttons::all();
        assert_eq!(report.as_bytes()[4], 50);
        assert_eq!(report.as_bytes()[2], 0);
    }
}
