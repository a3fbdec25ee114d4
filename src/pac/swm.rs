//! Switch matrix fixed-pin enables

use tock_registers::register_bitfields;
use tock_registers::registers::ReadWrite;

#[repr(C)]
pub struct RegisterBlock {
    _reserved0: [u32; 112],
    /// Fixed function enables, active low
    pub pinenable0: ReadWrite<u32, PINENABLE0::Register>,
}

const _: () = {
    assert!(core::mem::offset_of!(RegisterBlock, pinenable0) == 0x1C0);
};

register_bitfields![u32,
    pub PINENABLE0 [
        /// ADC_0 to ADC_11, a cleared bit routes the analog input to its pin
        ADC OFFSET(14) NUMBITS(12) []
    ]
];
