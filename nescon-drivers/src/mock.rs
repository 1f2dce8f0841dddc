//! Simulated controller for driver tests
//!
//! Models the 4021 inside a stock controller: LATCH high loads the button
//! contacts, DATA shows bit 7, each rising CLOCK edge (with LATCH low)
//! shifts left with the serial input tied to ground. A virtual clock
//! advanced by the delay provider tracks how long each level was held.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin};
use heapless::Vec;

pub struct Sim4021 {
    buttons: Cell<u8>,
    register: Cell<u8>,
    latch_high: Cell<bool>,
    clock_high: Cell<bool>,
    now_ns: Cell<u64>,
    latch_edge_ns: Cell<u64>,
    clock_edge_ns: Cell<u64>,
    latch_pulses: Cell<u32>,
    clock_pulses: Cell<u32>,
    shortest_latch_high_ns: Cell<u64>,
    shortest_clock_phase_ns: Cell<u64>,
    samples: RefCell<Vec<bool, 64>>,
}

impl Sim4021 {
    /// `buttons` is the active-low state of the contacts
    pub fn new(buttons: u8) -> Self {
        Self {
            buttons: Cell::new(buttons),
            register: Cell::new(0),
            latch_high: Cell::new(false),
            clock_high: Cell::new(false),
            now_ns: Cell::new(0),
            latch_edge_ns: Cell::new(0),
            clock_edge_ns: Cell::new(0),
            latch_pulses: Cell::new(0),
            clock_pulses: Cell::new(0),
            shortest_latch_high_ns: Cell::new(u64::MAX),
            shortest_clock_phase_ns: Cell::new(u64::MAX),
            samples: RefCell::new(Vec::new()),
        }
    }

    pub fn set_buttons(&self, buttons: u8) {
        self.buttons.set(buttons);
    }

    pub fn data(&self) -> SimData<'_> {
        SimData(self)
    }

    pub fn latch(&self) -> SimLatch<'_> {
        SimLatch(self)
    }

    pub fn clock(&self) -> SimClock<'_> {
        SimClock(self)
    }

    pub fn delay(&self) -> SimDelay<'_> {
        SimDelay(self)
    }

    pub fn samples(&self) -> Vec<bool, 64> {
        self.samples.borrow().clone()
    }

    pub fn latch_pulses(&self) -> u32 {
        self.latch_pulses.get()
    }

    pub fn clock_pulses(&self) -> u32 {
        self.clock_pulses.get()
    }

    pub fn latch_is_high(&self) -> bool {
        self.latch_high.get()
    }

    pub fn shortest_latch_high_ns(&self) -> u64 {
        self.shortest_latch_high_ns.get()
    }

    pub fn shortest_clock_phase_ns(&self) -> u64 {
        self.shortest_clock_phase_ns.get()
    }

    pub fn elapsed_ns(&self) -> u64 {
        self.now_ns.get()
    }

    fn drive_latch(&self, high: bool) {
        if high == self.latch_high.get() {
            return;
        }
        let now = self.now_ns.get();
        if high {
            self.register.set(self.buttons.get());
            self.latch_pulses.set(self.latch_pulses.get() + 1);
        } else {
            let held = now - self.latch_edge_ns.get();
            self.shortest_latch_high_ns
                .set(self.shortest_latch_high_ns.get().min(held));
        }
        self.latch_high.set(high);
        self.latch_edge_ns.set(now);
    }

    fn drive_clock(&self, high: bool) {
        if high == self.clock_high.get() {
            return;
        }
        let now = self.now_ns.get();
        let held = now - self.clock_edge_ns.get();
        self.shortest_clock_phase_ns
            .set(self.shortest_clock_phase_ns.get().min(held));

        if high {
            self.clock_pulses.set(self.clock_pulses.get() + 1);
            if !self.latch_high.get() {
                self.register.set(self.register.get() << 1);
            }
        }
        self.clock_high.set(high);
        self.clock_edge_ns.set(now);
    }

    fn sample(&self) -> bool {
        let level = if self.latch_high.get() {
            self.buttons.get() & 0x80 != 0
        } else {
            self.register.get() & 0x80 != 0
        };
        let _ = self.samples.borrow_mut().push(level);
        level
    }
}

pub struct SimData<'a>(&'a Sim4021);
pub struct SimLatch<'a>(&'a Sim4021);
pub struct SimClock<'a>(&'a Sim4021);
pub struct SimDelay<'a>(&'a Sim4021);

impl ErrorType for SimData<'_> {
    type Error = Infallible;
}

impl InputPin for SimData<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.sample())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.sample())
    }
}

impl ErrorType for SimLatch<'_> {
    type Error = Infallible;
}

impl OutputPin for SimLatch<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.drive_latch(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.drive_latch(true);
        Ok(())
    }
}

impl ErrorType for SimClock<'_> {
    type Error = Infallible;
}

impl OutputPin for SimClock<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.drive_clock(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.drive_clock(true);
        Ok(())
    }
}

impl DelayNs for SimDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.0.now_ns.set(self.0.now_ns.get() + ns as u64);
    }
}

/// Pin whose every operation fails
pub struct FaultyPin;

#[derive(Debug)]
pub struct Fault;

impl digital::Error for Fault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for FaultyPin {
    type Error = Fault;
}

impl InputPin for FaultyPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(Fault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(Fault)
    }
}

impl OutputPin for FaultyPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(Fault)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(Fault)
    }
}
