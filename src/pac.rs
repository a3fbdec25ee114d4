//! Register access for the LPC845 blocks this crate drives
//!
//! Every register block is a `#[repr(C)]` struct of `tock_registers` cells.
//! Field layouts are spelled out with `register_bitfields!`, and each register
//! offset is checked at compile time against the LPC84x user manual (UM11029).
//!
//! Only the registers the ADC driver and its collaborators touch are
//! described. Gaps are covered by `_reservedN` padding.

use core::marker::PhantomData;
use core::ops::Deref;

pub mod adc;
pub mod iocon;
pub mod swm;
pub mod syscon;

macro_rules! peripheral {
    ($(#[$attr:meta])* $NAME:ident, $module:ident, $address:expr) => {
        $(#[$attr])*
        pub struct $NAME {
            _marker: PhantomData<*const ()>,
        }

        unsafe impl Send for $NAME {}

        impl $NAME {
            /// Address of the register block
            pub const PTR: *const $module::RegisterBlock = $address as *const _;

            /// Returns a pointer to the register block
            #[inline(always)]
            pub const fn ptr() -> *const $module::RegisterBlock {
                Self::PTR
            }

            /// Creates another handle to the peripheral
            ///
            /// # Safety
            ///
            /// The caller must make sure no two drivers own the same block.
            #[inline]
            pub unsafe fn steal() -> Self {
                Self {
                    _marker: PhantomData,
                }
            }
        }

        impl Deref for $NAME {
            type Target = $module::RegisterBlock;

            #[inline(always)]
            fn deref(&self) -> &Self::Target {
                unsafe { &*Self::PTR }
            }
        }
    };
}

peripheral!(
    /// Analog to digital converter
    ADC,
    adc,
    0x4001_C000
);
peripheral!(
    /// System configuration
    SYSCON,
    syscon,
    0x4004_8000
);
peripheral!(
    /// Switch matrix
    SWM,
    swm,
    0x4000_C000
);
peripheral!(
    /// I/O pin configuration
    IOCON,
    iocon,
    0x4004_4000
);

/// LPC845 interrupt lines
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum Interrupt {
    SPI0 = 0,
    SPI1 = 1,
    DAC0 = 2,
    USART0 = 3,
    USART1 = 4,
    USART2 = 5,
    I2C1 = 7,
    I2C0 = 8,
    SCT = 9,
    MRT = 10,
    CMP_CAPT = 11,
    WDT = 12,
    BOD = 13,
    FLASH = 14,
    WKT = 15,
    /// ADC sequence A completion
    ADC_SEQA = 16,
    /// ADC sequence B completion
    ADC_SEQB = 17,
    /// ADC threshold compare
    ADC_THCMP = 18,
    /// ADC data overrun
    ADC_OVR = 19,
    DMA0 = 20,
    I2C2 = 21,
    I2C3 = 22,
    CTIMER0 = 23,
    PIN_INT0 = 24,
    PIN_INT1 = 25,
    PIN_INT2 = 26,
    PIN_INT3 = 27,
    PIN_INT4 = 28,
    PIN_INT5_DAC1 = 29,
    PIN_INT6_USART3 = 30,
    PIN_INT7_USART4 = 31,
}

unsafe impl cortex_m::interrupt::InterruptNumber for Interrupt {
    #[inline(always)]
    fn number(self) -> u16 {
        self as u16
    }
}

/// All the peripherals
#[allow(non_snake_case)]
pub struct Peripherals {
    pub ADC: ADC,
    pub IOCON: IOCON,
    pub SWM: SWM,
    pub SYSCON: SYSCON,
}

static mut TAKEN: bool = false;

impl Peripherals {
    /// Returns all the peripherals *once*
    pub fn take() -> Option<Self> {
        cortex_m::interrupt::free(|_| {
            if unsafe { TAKEN } {
                None
            } else {
                Some(unsafe { Peripherals::steal() })
            }
        })
    }

    /// Unchecked version of `Peripherals::take`
    ///
    /// # Safety
    ///
    /// Each returned token must be the only owner of its register block.
    pub unsafe fn steal() -> Self {
        TAKEN = true;

        Peripherals {
            ADC: ADC::steal(),
            IOCON: IOCON::steal(),
            SWM: SWM::steal(),
            SYSCON: SYSCON::steal(),
        }
    }
}
