//! Controller port setup

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;
use embassy_time::Delay;
use nescon_core::{ConfigError, ControllerConfig, ShiftTiming};
use nescon_drivers::NesController;

/// Controller driver on RP2040 GPIOs
pub type Rp2040Controller<'d> = NesController<Input<'d>, Output<'d>, Output<'d>, Delay>;

/// Error when binding a configured port to hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BindError {
    /// Port configuration is invalid
    Config(ConfigError),
    /// Pin already taken or not available
    PinUnavailable(u8),
}

impl From<ConfigError> for BindError {
    fn from(e: ConfigError) -> Self {
        BindError::Config(e)
    }
}

/// Set up a controller port with default timing
pub fn controller<'d>(
    data: Peri<'d, impl Pin>,
    latch: Peri<'d, impl Pin>,
    clock: Peri<'d, impl Pin>,
) -> Rp2040Controller<'d> {
    controller_with_timing(data, latch, clock, ShiftTiming::default())
}

/// Set up a controller port with explicit timing
pub fn controller_with_timing<'d>(
    data: Peri<'d, impl Pin>,
    latch: Peri<'d, impl Pin>,
    clock: Peri<'d, impl Pin>,
    timing: ShiftTiming,
) -> Rp2040Controller<'d> {
    // Pull-up keeps an unplugged port reading as "released"
    let data = Input::new(data, Pull::Up);
    let latch = Output::new(latch, Level::Low);
    let clock = Output::new(clock, Level::Low);

    NesController::with_timing(data, latch, clock, Delay, timing)
}

/// Set up a controller port from config
///
/// `take_pin` hands out GPIOs by number, e.g. from a pin bank:
///
/// ```ignore
/// let config = ControllerConfig::from_pin_strings("gpio8", "gpio3", "gpio2")?;
/// let mut nes = from_config(&config, |n| bank.take(n).ok())?;
/// let input = nes.get_nes_input()?;
/// ```
pub fn from_config<'d, F>(
    config: &ControllerConfig,
    mut take_pin: F,
) -> Result<Rp2040Controller<'d>, BindError>
where
    F: FnMut(u8) -> Option<Peri<'d, AnyPin>>,
{
    config.validate()?;

    let data = take_pin(config.data.pin).ok_or(BindError::PinUnavailable(config.data.pin))?;
    let latch = take_pin(config.latch.pin).ok_or(BindError::PinUnavailable(config.latch.pin))?;
    let clock = take_pin(config.clock.pin).ok_or(BindError::PinUnavailable(config.clock.pin))?;

    #[cfg(feature = "defmt")]
    defmt::info!(
        "NES controller: data=gpio{} latch=gpio{} clock=gpio{} pulse={}us",
        config.data.pin,
        config.latch.pin,
        config.clock.pin,
        config.timing.pulse_us()
    );

    Ok(controller_with_timing(data, latch, clock, config.timing))
}
