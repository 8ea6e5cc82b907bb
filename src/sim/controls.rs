//! Held-key control state
//!
//! Keyboard events only ever flip these flags; the tick reads them.

/// Logical inputs the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Forward,
    RotateLeft,
    RotateRight,
    Fire,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::Forward,
        Control::RotateLeft,
        Control::RotateRight,
        Control::Fire,
    ];

    /// Map a `KeyboardEvent.code` to a control. Anything else is ignored.
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" | "ArrowUp" => Some(Control::Forward),
            "KeyA" | "ArrowLeft" => Some(Control::RotateLeft),
            "KeyD" | "ArrowRight" => Some(Control::RotateRight),
            "Space" => Some(Control::Fire),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Control::Forward => 0,
            Control::RotateLeft => 1,
            Control::RotateRight => 2,
            Control::Fire => 3,
        }
    }
}

/// Which controls are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    held: [bool; 4],
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pressed(&mut self, control: Control, pressed: bool) {
        self.held[control.index()] = pressed;
    }

    pub fn is_pressed(&self, control: Control) -> bool {
        self.held[control.index()]
    }

    /// Drop every held flag (focus lost, so key-up events will never arrive)
    pub fn release_all(&mut self) {
        self.held = [false; 4];
    }
}
