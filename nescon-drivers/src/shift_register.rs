//! 4021 parallel-in/serial-out reader
//!
//! # Sequence
//!
//! ```text
//! LATCH  ___/‾‾‾‾\_______________________________________
//! CLOCK  ‾‾‾‾‾‾‾‾‾‾‾‾\__/‾‾\__/‾‾\__/ ... \__/‾‾
//! DATA          [ A ]   [ B ]   [SEL]       [ R ]
//!               ^ sample before each clock pulse
//! ```
//!
//! Raising LATCH copies the button contacts into the register. After it
//! falls, DATA presents bit 7 (A); each rising CLOCK edge shifts the next
//! bit out. Every latch and clock phase is held for
//! [`ShiftTiming::pulse_us`] using a blocking delay.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error, ErrorKind, InputPin, OutputPin};
use nescon_core::ShiftTiming;

/// GPIO failure while talking to the shift register
///
/// HAL pins are usually infallible, in which case this never occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Reading the data line failed
    Data(ErrorKind),
    /// Driving the latch line failed
    Latch(ErrorKind),
    /// Driving the clock line failed
    Clock(ErrorKind),
}

impl PinError {
    fn data<E: Error>(e: E) -> Self {
        PinError::Data(e.kind())
    }

    fn latch<E: Error>(e: E) -> Self {
        PinError::Latch(e.kind())
    }

    fn clock<E: Error>(e: E) -> Self {
        PinError::Clock(e.kind())
    }
}

/// Bit-banged reader for one controller port
///
/// `data` must already be configured as an input with pull-up, so an
/// unplugged controller reads as all-released instead of floating.
/// `latch` and `clock` must be push-pull outputs.
pub struct ShiftRegisterReader<DATA, LATCH, CLOCK, D> {
    data: DATA,
    latch: LATCH,
    clock: CLOCK,
    delay: D,
    timing: ShiftTiming,
}

impl<DATA, LATCH, CLOCK, D> ShiftRegisterReader<DATA, LATCH, CLOCK, D>
where
    DATA: InputPin,
    LATCH: OutputPin,
    CLOCK: OutputPin,
    D: DelayNs,
{
    /// Create a reader with default timing
    pub fn new(data: DATA, latch: LATCH, clock: CLOCK, delay: D) -> Self {
        Self::with_timing(data, latch, clock, delay, ShiftTiming::default())
    }

    /// Create a reader with explicit timing
    pub fn with_timing(
        data: DATA,
        latch: LATCH,
        clock: CLOCK,
        delay: D,
        timing: ShiftTiming,
    ) -> Self {
        Self {
            data,
            latch,
            clock,
            delay,
            timing,
        }
    }

    /// Current timing
    pub fn timing(&self) -> ShiftTiming {
        self.timing
    }

    /// Latch the buttons and shift all eight bits in, MSB first
    ///
    /// The returned byte is active-low: bit 7 = A ... bit 0 = Right.
    pub fn read_raw(&mut self) -> Result<u8, PinError> {
        self.pulse_latch()?;

        let mut contents = 0u8;
        for _ in 0..8 {
            contents <<= 1;
            if self.data.is_high().map_err(PinError::data)? {
                contents |= 1;
            }
            self.pulse_clock()?;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("shift register raw: {=u8:b}", contents);

        Ok(contents)
    }

    /// Give back the pins and delay
    pub fn release(self) -> (DATA, LATCH, CLOCK, D) {
        (self.data, self.latch, self.clock, self.delay)
    }

    fn pulse_latch(&mut self) -> Result<(), PinError> {
        let us = self.timing.pulse_us();

        self.latch.set_low().map_err(PinError::latch)?;
        self.delay.delay_us(us);
        self.latch.set_high().map_err(PinError::latch)?;
        self.delay.delay_us(us);
        self.latch.set_low().map_err(PinError::latch)?;

        Ok(())
    }

    fn pulse_clock(&mut self) -> Result<(), PinError> {
        let us = self.timing.pulse_us();

        self.clock.set_low().map_err(PinError::clock)?;
        self.delay.delay_us(us);
        self.clock.set_high().map_err(PinError::clock)?;
        self.delay.delay_us(us);

        Ok(())
    }
}
