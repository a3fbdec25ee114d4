//! Switch matrix and pin configuration for the analog inputs
//!
//! Each ADC channel lives on one fixed pin. Routing a channel means
//! enabling its fixed function in the switch matrix and turning off the
//! pin's pull resistor so it does not load the analog signal.

use tock_registers::interfaces::ReadWriteable;
use tock_registers::fields::Field;

use crate::pac::iocon::PIO;
use crate::pac::swm::PINENABLE0;
use crate::pac::{IOCON, SWM};
use crate::syscon::Syscon;

/// Analog function routing for ADC channel pins
pub trait AnalogPins {
    /// Connects `channel`'s pin to the ADC
    fn enable_analog(&mut self, channel: u8);

    /// Returns `channel`'s pin to digital use
    fn disable_analog(&mut self, channel: u8);
}

/// IOCON register index of the pin carrying each ADC channel
///
/// ADC_0 is on PIO0_7, ADC_1 on PIO0_6, and so on down to ADC_11 on PIO0_4.
const CHANNEL_PINS: [usize; 12] = [
    0x3C / 4, // PIO0_7
    0x40 / 4, // PIO0_6
    0x48 / 4, // PIO0_14
    0x64 / 4, // PIO0_23
    0x68 / 4, // PIO0_22
    0x6C / 4, // PIO0_21
    0x70 / 4, // PIO0_20
    0x74 / 4, // PIO0_19
    0x78 / 4, // PIO0_18
    0x00 / 4, // PIO0_17
    0x04 / 4, // PIO0_13
    0x10 / 4, // PIO0_4
];

/// Extension trait that constrains the `SWM` peripheral
pub trait SwmExt {
    fn split(self, iocon: IOCON, syscon: &mut Syscon) -> Swm;
}

impl SwmExt for SWM {
    fn split(self, iocon: IOCON, syscon: &mut Syscon) -> Swm {
        Swm::new(self, iocon, syscon)
    }
}

/// Owns the switch matrix and IOCON blocks
pub struct Swm {
    swm: SWM,
    iocon: IOCON,
}

impl Swm {
    pub fn new(swm: SWM, iocon: IOCON, syscon: &mut Syscon) -> Self {
        syscon.enable_pin_routing();

        Swm { swm, iocon }
    }

    pub fn release(self) -> (SWM, IOCON) {
        (self.swm, self.iocon)
    }
}

fn fixed_pin(channel: u8) -> Field<u32, PINENABLE0::Register> {
    Field::new(1, PINENABLE0::ADC.shift + usize::from(channel))
}

impl AnalogPins for Swm {
    fn enable_analog(&mut self, channel: u8) {
        let pin = match CHANNEL_PINS.get(usize::from(channel)) {
            Some(&pin) => pin,
            None => return,
        };

        self.swm.pinenable0.modify(fixed_pin(channel).val(0));
        self.iocon.pio[pin].modify(PIO::MODE::Inactive);
    }

    fn disable_analog(&mut self, channel: u8) {
        if usize::from(channel) >= CHANNEL_PINS.len() {
            return;
        }

        self.swm.pinenable0.modify(fixed_pin(channel).val(1));
    }
}
