//! Hardware driver for NES controllers
//!
//! This crate drives the controller's 4021 shift register over three GPIOs
//! using the `embedded-hal` 1.0 digital and delay traits:
//!
//! - [`ShiftRegisterReader`] - latch/clock sequence, one raw byte per call
//! - [`NesController`] - applies the disconnect heuristic and decodes buttons
//!
//! Both own their pins. One instance per controller port; pins are not
//! shared or reconfigured while the driver holds them.

#![no_std]
#![deny(unsafe_code)]

pub mod controller;
pub mod shift_register;

#[cfg(test)]
mod mock;

pub use controller::NesController;
pub use shift_register::{PinError, ShiftRegisterReader};
