//! Button model and active-low bit mapping
//!
//! The controller's 4021 shifts out one bit per button, A first. A bit
//! reads 0 while its button is held, so every flag here is the inverse of
//! its bit.

use core::fmt::{self, Write};

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity of the string returned by [`ButtonState::states_as_string`]
pub const STATES_STR_LEN: usize = 72;

/// Capacity of the string returned by [`ButtonState::buttons_pressed_as_string`]
pub const PRESSED_STR_LEN: usize = 48;

/// Sum of all button label lengths
const fn names_len() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < Button::ALL.len() {
        total += Button::ALL[i].name().len();
        i += 1;
    }
    total
}

/// `NESInput:[` + `NAME:x` per button + 7 separators + `]`
const LONGEST_STATES: usize = "NESInput:[".len() + names_len() + 2 * 8 + ", ".len() * 7 + 1;

/// Every button held
const LONGEST_PRESSED: usize = names_len() + ", ".len() * 7;

const _: () = assert!(STATES_STR_LEN >= LONGEST_STATES);
const _: () = assert!(PRESSED_STR_LEN >= LONGEST_PRESSED);

/// A single controller button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Button {
    A,
    B,
    Select,
    Start,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    /// All buttons, in the order the shift register emits them
    pub const ALL: [Button; 8] = [
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
    ];

    /// Bit of this button within a raw sample
    pub const fn mask(self) -> u8 {
        match self {
            Button::A => 1 << 7,
            Button::B => 1 << 6,
            Button::Select => 1 << 5,
            Button::Start => 1 << 4,
            Button::Up => 1 << 3,
            Button::Down => 1 << 2,
            Button::Left => 1 << 1,
            Button::Right => 1 << 0,
        }
    }

    /// Upper-case label used in rendered output
    pub const fn name(self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
            Button::Select => "SELECT",
            Button::Start => "START",
            Button::Up => "UP",
            Button::Down => "DOWN",
            Button::Left => "LEFT",
            Button::Right => "RIGHT",
        }
    }
}

/// Pressed/released state of all eight buttons
///
/// A plain value: built fresh from each sample and never mutated by the
/// driver. `true` means pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonState {
    pub a: bool,
    pub b: bool,
    pub select: bool,
    pub start: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ButtonState {
    /// Decompose an active-low sample into button flags
    pub const fn from_byte(data: u8) -> Self {
        Self {
            a: data & Button::A.mask() == 0,
            b: data & Button::B.mask() == 0,
            select: data & Button::Select.mask() == 0,
            start: data & Button::Start.mask() == 0,
            up: data & Button::Up.mask() == 0,
            down: data & Button::Down.mask() == 0,
            left: data & Button::Left.mask() == 0,
            right: data & Button::Right.mask() == 0,
        }
    }

    /// Encode back into the active-low wire byte
    pub fn to_byte(&self) -> u8 {
        Button::ALL
            .iter()
            .filter(|button| !self.is_pressed(**button))
            .fold(0, |byte, button| byte | button.mask())
    }

    /// Check a single button
    pub const fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::A => self.a,
            Button::B => self.b,
            Button::Select => self.select,
            Button::Start => self.start,
            Button::Up => self.up,
            Button::Down => self.down,
            Button::Left => self.left,
            Button::Right => self.right,
        }
    }

    /// Iterate over the held buttons in shift-out order
    pub fn pressed(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL
            .into_iter()
            .filter(move |button| self.is_pressed(*button))
    }

    /// Returns true if at least one button is held
    pub const fn any_button_pressed(&self) -> bool {
        self.a
            || self.b
            || self.select
            || self.start
            || self.up
            || self.down
            || self.left
            || self.right
    }

    /// Render every button with its state
    ///
    /// Produces `NESInput:[A:0, B:0, SELECT:0, START:0, UP:0, DOWN:0, LEFT:0, RIGHT:0]`
    /// with `1` in place of `0` for held buttons. Same text as the
    /// [`Display`](fmt::Display) impl.
    pub fn states_as_string(&self) -> String<STATES_STR_LEN> {
        let mut out = String::new();
        // Capacity covers the longest rendering
        let _ = write!(out, "{}", self);
        out
    }

    /// Comma-separated names of the held buttons, e.g. `A, START`
    ///
    /// Empty when nothing is pressed.
    pub fn buttons_pressed_as_string(&self) -> String<PRESSED_STR_LEN> {
        let mut out = String::new();
        for button in self.pressed() {
            if !out.is_empty() {
                let _ = out.push_str(", ");
            }
            let _ = out.push_str(button.name());
        }
        out
    }
}

impl From<u8> for ButtonState {
    fn from(data: u8) -> Self {
        Self::from_byte(data)
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NESInput:[")?;
        for (i, button) in Button::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", button.name(), self.is_pressed(*button) as u8)?;
        }
        f.write_str("]")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "NESInput:[");
        for (i, button) in Button::ALL.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{=str}:{=u8}", button.name(), self.is_pressed(*button) as u8);
        }
        defmt::write!(f, "]");
    }
}
