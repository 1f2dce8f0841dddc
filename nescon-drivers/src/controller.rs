//! NES controller driver
//!
//! Wraps a [`ShiftRegisterReader`] and turns samples into button state.
//! Two read paths are offered:
//!
//! - [`read`](NesController::read) / [`get_nes_input`](NesController::get_nes_input):
//!   a presumed-disconnected sample is replaced by `0xFF`, which decodes to
//!   "nothing pressed" and cannot be told apart from an idle controller.
//! - [`poll`](NesController::poll): same decoding, plus a
//!   [`ConnectionStatus`](nescon_core::ConnectionStatus) tag.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use nescon_core::{ButtonState, Reading, ShiftTiming};

use crate::shift_register::{PinError, ShiftRegisterReader};

/// A controller on one three-wire port
pub struct NesController<DATA, LATCH, CLOCK, D> {
    reader: ShiftRegisterReader<DATA, LATCH, CLOCK, D>,
}

impl<DATA, LATCH, CLOCK, D> NesController<DATA, LATCH, CLOCK, D>
where
    DATA: InputPin,
    LATCH: OutputPin,
    CLOCK: OutputPin,
    D: DelayNs,
{
    /// Create a controller driver
    ///
    /// # Arguments
    /// - `data`: input with pull-up, wired to the controller's data line
    /// - `latch`: output, wired to latch/load
    /// - `clock`: output, wired to clock
    /// - `delay`: blocking microsecond delay
    pub fn new(data: DATA, latch: LATCH, clock: CLOCK, delay: D) -> Self {
        Self::from_reader(ShiftRegisterReader::new(data, latch, clock, delay))
    }

    /// Create a controller driver with explicit shift timing
    pub fn with_timing(
        data: DATA,
        latch: LATCH,
        clock: CLOCK,
        delay: D,
        timing: ShiftTiming,
    ) -> Self {
        Self::from_reader(ShiftRegisterReader::with_timing(
            data, latch, clock, delay, timing,
        ))
    }

    /// Wrap an existing reader
    pub fn from_reader(reader: ShiftRegisterReader<DATA, LATCH, CLOCK, D>) -> Self {
        Self { reader }
    }

    /// Read the unvalidated byte straight from the shift register
    pub fn read_raw(&mut self) -> Result<u8, PinError> {
        self.reader.read_raw()
    }

    /// Read the controller as an active-low byte
    ///
    /// Returns `0xFF` if Up+Down or Left+Right read as pressed together,
    /// which is what a floating data line looks like.
    pub fn read(&mut self) -> Result<u8, PinError> {
        self.poll().map(|reading| reading.validated())
    }

    /// Read the controller and decode it into named buttons
    pub fn get_nes_input(&mut self) -> Result<ButtonState, PinError> {
        self.read().map(ButtonState::from_byte)
    }

    /// Read the controller, keeping the disconnect verdict
    pub fn poll(&mut self) -> Result<Reading, PinError> {
        let reading = Reading::from_raw(self.reader.read_raw()?);

        #[cfg(feature = "defmt")]
        if !reading.is_connected() {
            defmt::debug!(
                "opposing D-pad directions in {=u8:b}, presuming disconnected",
                reading.raw
            );
        }

        Ok(reading)
    }

    /// Shift timing in use
    pub fn timing(&self) -> ShiftTiming {
        self.reader.timing()
    }

    /// Give back the underlying reader
    pub fn into_reader(self) -> ShiftRegisterReader<DATA, LATCH, CLOCK, D> {
        self.reader
    }
}
