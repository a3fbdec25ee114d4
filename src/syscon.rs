//! System configuration
//!
//! Only the clock, reset and power controls the ADC depends on are covered.
//! The clock tree itself is configured elsewhere. [`Clocks`] records the
//! frequencies it was set up with so the ADC can derive its dividers.

use tock_registers::interfaces::{ReadWriteable, Writeable};

use crate::pac::syscon::{ADCCLKDIV, ADCCLKSEL, PDRUNCFG, PRESETCTRL0, SYSAHBCLKCTRL0};
use crate::pac::SYSCON;
use crate::time::{Hertz, U32Ext};

/// Asynchronous ADC clock source
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcClockSource {
    /// Free running oscillator
    Fro = 0,
    /// System PLL output
    SysPll = 1,
}

/// Clock, reset and power control the ADC driver needs
pub trait AdcClocking {
    /// Main clock frequency, which clocks the ADC in synchronous mode
    fn main_clock(&self) -> Hertz;

    /// Frequency of an asynchronous ADC clock source before division
    fn source_clock(&self, source: AdcClockSource) -> Hertz;

    fn power_up_adc(&mut self);

    fn power_down_adc(&mut self);

    fn enable_adc_clock(&mut self);

    fn disable_adc_clock(&mut self);

    /// Holds the ADC in reset
    fn assert_adc_reset(&mut self);

    /// Releases the ADC from reset
    fn clear_adc_reset(&mut self);

    /// Selects the asynchronous ADC clock and its divider
    ///
    /// A divider of zero gates the clock.
    fn set_adc_clock(&mut self, source: AdcClockSource, div: u8);
}

/// Frequencies the clock tree runs at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clocks {
    main_clk: Hertz,
    fro_clk: Hertz,
    sys_pll_clk: Option<Hertz>,
}

impl Clocks {
    /// Main clock frequency
    pub fn main_clock(mut self, freq: Hertz) -> Self {
        self.main_clk = freq;
        self
    }

    /// FRO output frequency
    pub fn fro(mut self, freq: Hertz) -> Self {
        self.fro_clk = freq;
        self
    }

    /// System PLL output frequency
    pub fn sys_pll(mut self, freq: Hertz) -> Self {
        self.sys_pll_clk = Some(freq);
        self
    }

    /// Returns the main clock frequency
    pub fn main_clk(&self) -> Hertz {
        self.main_clk
    }

    /// Returns the FRO frequency
    pub fn fro_clk(&self) -> Hertz {
        self.fro_clk
    }

    /// Returns the system PLL frequency, if it is running
    pub fn sys_pll_clk(&self) -> Option<Hertz> {
        self.sys_pll_clk
    }
}

impl Default for Clocks {
    /// Reset configuration: the 12 MHz FRO drives the main clock
    fn default() -> Clocks {
        Clocks {
            main_clk: 12.mhz(),
            fro_clk: 12.mhz(),
            sys_pll_clk: None,
        }
    }
}

/// Extension trait that constrains the `SYSCON` peripheral
pub trait SysconExt {
    /// Constrains the `SYSCON` peripheral, recording the clock frequencies
    fn freeze(self, clocks: Clocks) -> Syscon;
}

impl SysconExt for SYSCON {
    fn freeze(self, clocks: Clocks) -> Syscon {
        Syscon { clocks, rb: self }
    }
}

/// Constrained SYSCON peripheral
pub struct Syscon {
    pub clocks: Clocks,
    pub(crate) rb: SYSCON,
}

impl Syscon {
    /// Enables the switch matrix and IOCON clocks
    pub fn enable_pin_routing(&mut self) {
        self.rb
            .sysahbclkctrl0
            .modify(SYSAHBCLKCTRL0::SWM::SET + SYSAHBCLKCTRL0::IOCON::SET);
    }

    pub fn release(self) -> SYSCON {
        self.rb
    }
}

impl AdcClocking for Syscon {
    fn main_clock(&self) -> Hertz {
        self.clocks.main_clk()
    }

    fn source_clock(&self, source: AdcClockSource) -> Hertz {
        match source {
            AdcClockSource::Fro => self.clocks.fro_clk(),
            AdcClockSource::SysPll => self.clocks.sys_pll_clk().unwrap_or(Hertz(0)),
        }
    }

    fn power_up_adc(&mut self) {
        self.rb.pdruncfg.modify(PDRUNCFG::ADC_PD::CLEAR);
    }

    fn power_down_adc(&mut self) {
        self.rb.pdruncfg.modify(PDRUNCFG::ADC_PD::SET);
    }

    fn enable_adc_clock(&mut self) {
        self.rb.sysahbclkctrl0.modify(SYSAHBCLKCTRL0::ADC::SET);
    }

    fn disable_adc_clock(&mut self) {
        self.rb.sysahbclkctrl0.modify(SYSAHBCLKCTRL0::ADC::CLEAR);
    }

    fn assert_adc_reset(&mut self) {
        self.rb.presetctrl0.modify(PRESETCTRL0::ADC_RST_N::CLEAR);
    }

    fn clear_adc_reset(&mut self) {
        self.rb.presetctrl0.modify(PRESETCTRL0::ADC_RST_N::SET);
    }

    fn set_adc_clock(&mut self, source: AdcClockSource, div: u8) {
        let sel = match source {
            AdcClockSource::Fro => ADCCLKSEL::SEL::Fro,
            AdcClockSource::SysPll => ADCCLKSEL::SEL::SysPll,
        };
        self.rb.adcclksel.write(sel);
        self.rb.adcclkdiv.write(ADCCLKDIV::DIV.val(u32::from(div)));
    }
}
