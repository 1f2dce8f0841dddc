//! Configuration types
//!
//! Pin assignment and shift timing for a controller port.

pub mod hardware;
pub mod timing;

pub use hardware::{parse_pin_string, ConfigError, ControllerConfig, PinConfig, GPIO_COUNT};
pub use timing::{ShiftTiming, DEFAULT_PULSE_US, MIN_PULSE_US};
