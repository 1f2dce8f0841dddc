//! RP2040 binding for the NES controller driver
//!
//! Configures three `embassy-rp` GPIOs for a controller port and hands
//! them to [`nescon_drivers::NesController`]:
//!
//! - data: input with the internal pull-up enabled
//! - latch, clock: push-pull outputs, initially low
//!
//! Delays use [`embassy_time::Delay`], which busy-waits on the 1 MHz
//! time driver tick, so the 10 µs phases are honored.

#![no_std]
#![deny(unsafe_code)]

pub mod port;

pub use port::{controller, controller_with_timing, from_config, BindError, Rp2040Controller};
