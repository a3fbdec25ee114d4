//! Interrupt line gating

use cortex_m::peripheral::NVIC;

use crate::pac::Interrupt;

/// Enables and disables peripheral interrupt lines
pub trait InterruptControl {
    fn enable(&mut self, interrupt: Interrupt);

    fn disable(&mut self, interrupt: Interrupt);
}

impl InterruptControl for NVIC {
    fn enable(&mut self, interrupt: Interrupt) {
        // The handlers for every line this crate enables are installed by the
        // driver before the call.
        unsafe { NVIC::unmask(interrupt) }
    }

    fn disable(&mut self, interrupt: Interrupt) {
        NVIC::mask(interrupt)
    }
}
