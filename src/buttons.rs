use bitflags::bitflags;

bitflags! {
    /// Digital buttons of a virtual Xbox 360 controller, as a u16 bit set.
    ///
    /// Bit positions follow the XUSB wire layout: bits 0-10 in use, bit 11
    /// and bits 16-31 reserved for future buttons. Any combination of bits
    /// is valid; `Buttons::empty()` means nothing pressed.
    ///
    /// # Example
    /// ```
    /// use virtual_xpad::Buttons;
    ///
    /// let buttons = Buttons::A | Buttons::DPAD_UP;
    /// assert!(buttons.contains(Buttons::A));
    /// assert_eq!(buttons.bits(), 0x1001);
    /// ```
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Buttons: u16 {
        const DPAD_UP        = 0x0001;
        const DPAD_DOWN      = 0x0002;
        const DPAD_LEFT      = 0x0004;
        const DPAD_RIGHT     = 0x0008;
        const START          = 0x0010;
        const BACK           = 0x0020;
        const LEFT_THUMB     = 0x0040;
        const RIGHT_THUMB    = 0x0080;
        const LEFT_SHOULDER  = 0x0100;
        const RIGHT_SHOULDER = 0x0200;
        const GUIDE          = 0x0400;
        // 0x0800 unused on real hardware, reserved
        const A              = 0x1000;
        const B              = 0x2000;
        const X              = 0x4000;
        const Y              = 0x8000;
    }
}

impl Buttons {
    /// Set or clear the given button(s).
    pub fn set_pressed(&mut self, button: Buttons, pressed: bool) {
        self.set(button, pressed);
    }

    /// Whether the given button(s) are all pressed.
    pub const fn is_pressed(self, button: Buttons) -> bool {
        self.contains(button)
    }
}
