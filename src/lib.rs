//! Hardware abstraction layer for the NXP LPC845 analog to digital converter
//!
//! The crate is split the way the peripheral is: [`pac`] describes the
//! register blocks, [`adc`] drives the converter on top of them, and
//! [`syscon`], [`swm`] and [`nvic`] provide the clock, pin and interrupt
//! control the converter depends on.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible in every module
mod fmt;

use embedded_hal as hal;

pub mod adc;
pub mod nvic;
pub mod pac;
pub mod prelude;
pub mod swm;
pub mod syscon;
pub mod time;
