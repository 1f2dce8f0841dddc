//! Shift register timing

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shortest latch/clock phase the 4021 in a stock controller handles reliably
pub const MIN_PULSE_US: u32 = 10;

/// Phase length used when nothing else is configured
pub const DEFAULT_PULSE_US: u32 = MIN_PULSE_US;

/// Hold time for each level of the latch and clock pulses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u32", into = "u32"))]
pub struct ShiftTiming {
    /// Microseconds each pulse phase is held (>= [`MIN_PULSE_US`])
    pulse_us: u32,
}

impl Default for ShiftTiming {
    fn default() -> Self {
        Self {
            pulse_us: DEFAULT_PULSE_US,
        }
    }
}

impl ShiftTiming {
    /// Create a timing, clamping `pulse_us` up to [`MIN_PULSE_US`]
    pub const fn new(pulse_us: u32) -> Self {
        let pulse_us = if pulse_us < MIN_PULSE_US {
            MIN_PULSE_US
        } else {
            pulse_us
        };
        Self { pulse_us }
    }

    /// Phase hold time in microseconds
    pub const fn pulse_us(&self) -> u32 {
        self.pulse_us
    }

    /// Upper bound on one full read: latch pulse plus eight clock pulses
    pub const fn read_duration_us(&self) -> u64 {
        // 2 latch phases + 8 clock pulses of 2 phases each
        18 * self.pulse_us as u64
    }
}

impl From<u32> for ShiftTiming {
    fn from(pulse_us: u32) -> Self {
        Self::new(pulse_us)
    }
}

impl From<ShiftTiming> for u32 {
    fn from(timing: ShiftTiming) -> Self {
        timing.pulse_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_minimum() {
        assert_eq!(ShiftTiming::default().pulse_us(), MIN_PULSE_US);
    }

    #[test]
    fn test_clamps_short_pulses() {
        assert_eq!(ShiftTiming::new(0).pulse_us(), MIN_PULSE_US);
        assert_eq!(ShiftTiming::new(9).pulse_us(), MIN_PULSE_US);
        assert_eq!(ShiftTiming::new(25).pulse_us(), 25);
        assert_eq!(ShiftTiming::from(3), ShiftTiming::default());
    }

    #[test]
    fn test_read_duration() {
        // 2 latch phases + 8 * 2 clock phases
        assert_eq!(ShiftTiming::default().read_duration_us(), 180);
    }

    #[test]
    fn test_read_duration_long_pulse() {
        let timing = ShiftTiming::new(u32::MAX / 10);
        assert_eq!(timing.read_duration_us(), 18 * (u32::MAX / 10) as u64);
        assert_eq!(ShiftTiming::new(u32::MAX).read_duration_us(), 18 * u32::MAX as u64);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_clamps_pulse() {
        let mut buf = [0u8; 8];
        let bytes = postcard::to_slice(&3u32, &mut buf).unwrap();
        let timing: ShiftTiming = postcard::from_bytes(bytes).unwrap();
        assert_eq!(timing.pulse_us(), MIN_PULSE_US);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let mut buf = [0u8; 8];
        let bytes = postcard::to_slice(&ShiftTiming::new(25), &mut buf).unwrap();
        let timing: ShiftTiming = postcard::from_bytes(bytes).unwrap();
        assert_eq!(timing, ShiftTiming::new(25));
    }
}
