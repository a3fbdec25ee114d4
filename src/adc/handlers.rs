//! Interrupt callback table
//!
//! The ADC has four interrupt lines. Each has exactly one slot in the table,
//! and an empty slot holds a no-op, so dispatch never has to check for a
//! missing callback.

use crate::pac::Interrupt;

use super::{Adc, Sequence};

/// Function run from an ADC interrupt handler
///
/// Callbacks run in interrupt context with the driver borrowed, so they can
/// read results directly. They must not wait for conversions.
pub type Callback<R> = fn(&mut Adc<R>);

/// ADC interrupt line
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Vector {
    SequenceA = 0,
    SequenceB = 1,
    Threshold = 2,
    Overrun = 3,
}

impl Vector {
    pub const ALL: [Vector; 4] = [
        Vector::SequenceA,
        Vector::SequenceB,
        Vector::Threshold,
        Vector::Overrun,
    ];

    /// Interrupt controller line the vector is wired to
    pub fn interrupt(self) -> Interrupt {
        match self {
            Vector::SequenceA => Interrupt::ADC_SEQA,
            Vector::SequenceB => Interrupt::ADC_SEQB,
            Vector::Threshold => Interrupt::ADC_THCMP,
            Vector::Overrun => Interrupt::ADC_OVR,
        }
    }
}

impl From<Sequence> for Vector {
    fn from(sequence: Sequence) -> Self {
        match sequence {
            Sequence::A => Vector::SequenceA,
            Sequence::B => Vector::SequenceB,
        }
    }
}

fn noop<R>(_: &mut Adc<R>) {}

pub(crate) struct Handlers<R> {
    table: [Callback<R>; 4],
    installed: [bool; 4],
}

impl<R> Handlers<R> {
    pub fn new() -> Self {
        let noop: Callback<R> = noop::<R>;
        Handlers {
            table: [noop; 4],
            installed: [false; 4],
        }
    }

    /// Replaces the callback for `vector`, `None` restores the no-op
    ///
    /// Returns whether a user callback is now installed.
    pub fn register(&mut self, vector: Vector, callback: Option<Callback<R>>) -> bool {
        let slot = vector as usize;
        match callback {
            Some(callback) => {
                self.table[slot] = callback;
                self.installed[slot] = true;
            }
            None => {
                self.table[slot] = noop::<R>;
                self.installed[slot] = false;
            }
        }
        self.installed[slot]
    }

    pub fn get(&self, vector: Vector) -> Callback<R> {
        self.table[vector as usize]
    }

    pub fn is_installed(&self, vector: Vector) -> bool {
        self.installed[vector as usize]
    }

    pub fn clear(&mut self) {
        for &vector in Vector::ALL.iter() {
            self.register(vector, None);
        }
    }
}
