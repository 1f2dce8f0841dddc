//! Controller port pin assignment
//!
//! A port uses three GPIOs: data (input, pulled up), latch and clock
//! (outputs). Pins are written the same way as elsewhere in board
//! configs: `"gpio11"`, or `"^gpio4"` to request the internal pull-up.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::timing::ShiftTiming;

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin string could not be parsed or names a pin that does not exist
    InvalidPin,
    /// The same GPIO is assigned to more than one line
    DuplicatePin(u8),
    /// Data pin lacks its pull-up, or an output pin requests one
    InvalidPull(u8),
}

/// Pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self { pin, pull_up: true }
    }

    /// Parse a pin string such as `"gpio11"` or `"^gpio4"`
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let (pin, pull_up) = parse_pin_string(s).ok_or(ConfigError::InvalidPin)?;
        Ok(Self { pin, pull_up })
    }
}

/// Parse a pin string from config
///
/// Supports formats:
/// - "gpio11" -> (11, false)
/// - "^gpio4" -> (4, true) (pull-up)
pub fn parse_pin_string(s: &str) -> Option<(u8, bool)> {
    let s = s.trim();

    let (s, pull_up) = match s.strip_prefix('^') {
        Some(rest) => (rest, true),
        None => (s, false),
    };

    let pin: u8 = s.strip_prefix("gpio")?.parse().ok()?;

    if pin >= GPIO_COUNT {
        return None;
    }

    Some((pin, pull_up))
}

/// Pins and timing for one controller port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    /// Serial data from the controller (always pulled up)
    pub data: PinConfig,
    /// Latch/load line
    pub latch: PinConfig,
    /// Clock line
    pub clock: PinConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub timing: ShiftTiming,
}

impl ControllerConfig {
    /// Create a config from raw GPIO numbers with default timing
    pub const fn new(data: u8, latch: u8, clock: u8) -> Self {
        Self {
            data: PinConfig::with_pullup(data),
            latch: PinConfig::new(latch),
            clock: PinConfig::new(clock),
            timing: ShiftTiming::new(super::timing::DEFAULT_PULSE_US),
        }
    }

    /// Build and validate a config from pin strings
    ///
    /// The data line gets a pull-up whether or not the string asks for one,
    /// so an unplugged controller reads as released instead of floating.
    pub fn from_pin_strings(data: &str, latch: &str, clock: &str) -> Result<Self, ConfigError> {
        let config = Self {
            data: PinConfig {
                pull_up: true,
                ..PinConfig::parse(data)?
            },
            latch: PinConfig::parse(latch)?,
            clock: PinConfig::parse(clock)?,
            timing: ShiftTiming::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the shift timing
    pub const fn with_timing(mut self, timing: ShiftTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Check that all pins exist, no pin is used twice, and only the data
    /// line is pulled up
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = [self.data.pin, self.latch.pin, self.clock.pin];

        if pins.iter().any(|&pin| pin >= GPIO_COUNT) {
            return Err(ConfigError::InvalidPin);
        }

        if !self.data.pull_up {
            return Err(ConfigError::InvalidPull(self.data.pin));
        }
        for output in [self.latch, self.clock] {
            if output.pull_up {
                return Err(ConfigError::InvalidPull(output.pin));
            }
        }

        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(ConfigError::DuplicatePin(*pin));
            }
        }

        Ok(())
    }
}
