//! Board-agnostic core logic for reading an NES controller
//!
//! This crate contains everything that does not touch pin hardware:
//!
//! - Button model and the active-low bit mapping
//! - Disconnection heuristic applied to raw shift register samples
//! - Text rendering of button states
//! - Pin and timing configuration types
//!
//! # Bit layout
//!
//! ```text
//! bit     7   6     5       4     3     2     1     0
//! button  A   B   SELECT  START   UP   DOWN  LEFT  RIGHT
//! ```
//!
//! Every bit is active-low: a cleared bit means the button is held.

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod config;
pub mod decode;

pub use buttons::{Button, ButtonState};
pub use config::{ConfigError, ControllerConfig, PinConfig, ShiftTiming};
pub use decode::{opposing_press, validate, ConnectionStatus, Reading, DISCONNECTED};
