//! SYSCON registers controlling the ADC clock, reset and power

use tock_registers::register_bitfields;
use tock_registers::registers::ReadWrite;

#[repr(C)]
pub struct RegisterBlock {
    _reserved0: [u32; 25],
    /// ADC clock source select
    pub adcclksel: ReadWrite<u32, ADCCLKSEL::Register>,
    /// ADC clock divider
    pub adcclkdiv: ReadWrite<u32, ADCCLKDIV::Register>,
    _reserved1: [u32; 5],
    /// System clock group 0 control
    pub sysahbclkctrl0: ReadWrite<u32, SYSAHBCLKCTRL0::Register>,
    _reserved2: u32,
    /// Peripheral reset group 0 control
    pub presetctrl0: ReadWrite<u32, PRESETCTRL0::Register>,
    _reserved3: [u32; 107],
    /// Power configuration
    pub pdruncfg: ReadWrite<u32, PDRUNCFG::Register>,
}

const _: () = {
    use core::mem::offset_of;

    assert!(offset_of!(RegisterBlock, adcclksel) == 0x064);
    assert!(offset_of!(RegisterBlock, adcclkdiv) == 0x068);
    assert!(offset_of!(RegisterBlock, sysahbclkctrl0) == 0x080);
    assert!(offset_of!(RegisterBlock, presetctrl0) == 0x088);
    assert!(offset_of!(RegisterBlock, pdruncfg) == 0x238);
};

register_bitfields![u32,
    pub ADCCLKSEL [
        SEL OFFSET(0) NUMBITS(2) [
            Fro = 0,
            SysPll = 1,
            Off = 3
        ]
    ],
    pub ADCCLKDIV [
        /// Zero gates the clock
        DIV OFFSET(0) NUMBITS(8) []
    ],
    pub SYSAHBCLKCTRL0 [
        SWM OFFSET(7) NUMBITS(1) [],
        IOCON OFFSET(18) NUMBITS(1) [],
        ADC OFFSET(24) NUMBITS(1) []
    ],
    pub PRESETCTRL0 [
        /// Cleared holds the ADC in reset
        ADC_RST_N OFFSET(24) NUMBITS(1) []
    ],
    pub PDRUNCFG [
        /// Set powers the ADC down
        ADC_PD OFFSET(4) NUMBITS(1) []
    ]
];
