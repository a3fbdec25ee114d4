//! I/O configuration

use tock_registers::register_bitfields;
use tock_registers::registers::ReadWrite;

/// Number of pin configuration registers
pub const PINS: usize = 56;

#[repr(C)]
pub struct RegisterBlock {
    /// Pin configuration, indexed by register offset / 4
    pub pio: [ReadWrite<u32, PIO::Register>; PINS],
}

register_bitfields![u32,
    pub PIO [
        /// On-chip pull resistor
        MODE OFFSET(3) NUMBITS(2) [
            Inactive = 0,
            PullDown = 1,
            PullUp = 2,
            Repeater = 3
        ],
        HYS OFFSET(5) NUMBITS(1) [],
        INV OFFSET(6) NUMBITS(1) [],
        OD OFFSET(10) NUMBITS(1) []
    ]
];
