//! Raw sample validation
//!
//! A D-pad cannot physically report both directions of one axis at once.
//! When it does, the data line is almost certainly floating (controller
//! unplugged), so the sample is replaced by [`DISCONNECTED`].

use crate::buttons::{Button, ButtonState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Substituted for samples that fail the D-pad check
///
/// Decodes to "no buttons pressed".
pub const DISCONNECTED: u8 = 0xFF;

/// Returns true if Up+Down or Left+Right are both held in `raw`
pub const fn opposing_press(raw: u8) -> bool {
    let up = raw & Button::Up.mask() == 0;
    let down = raw & Button::Down.mask() == 0;
    let left = raw & Button::Left.mask() == 0;
    let right = raw & Button::Right.mask() == 0;

    (up && down) || (left && right)
}

/// Pass `raw` through unchanged, or return [`DISCONNECTED`] if it reports
/// an impossible D-pad combination
///
/// Face and meta buttons (A, B, Select, Start) are not checked.
pub const fn validate(raw: u8) -> u8 {
    if opposing_press(raw) {
        DISCONNECTED
    } else {
        raw
    }
}

/// Whether a sample looked like it came from a real controller
///
/// This is a heuristic; there is no presence detect line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConnectionStatus {
    #[default]
    Connected,
    /// The sample reported opposing D-pad directions and was discarded
    PresumedDisconnected,
}

/// A decoded sample that keeps the disconnect verdict alongside the buttons
///
/// `buttons` is identical to what `ButtonState::from_byte(validate(raw))`
/// yields; `status` tells the two reasons for an all-released state apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub status: ConnectionStatus,
    /// Sample as shifted in, before validation
    pub raw: u8,
    pub buttons: ButtonState,
}

impl Reading {
    /// Classify a raw sample
    pub const fn from_raw(raw: u8) -> Self {
        let status = if opposing_press(raw) {
            ConnectionStatus::PresumedDisconnected
        } else {
            ConnectionStatus::Connected
        };

        Self {
            status,
            raw,
            buttons: ButtonState::from_byte(validate(raw)),
        }
    }

    /// Validated byte, as the compatibility read path returns it
    pub const fn validated(&self) -> u8 {
        validate(self.raw)
    }

    /// Returns true if the sample was accepted
    pub const fn is_connected(&self) -> bool {
        matches!(self.status, ConnectionStatus::Connected)
    }
}
