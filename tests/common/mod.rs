//! Host-side stand-ins for the ADC and its collaborators

#![allow(dead_code)]

use std::cell::{Cell, RefCell, UnsafeCell};
use std::ops::Deref;

use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

use lpc845_hal::nvic::InterruptControl;
use lpc845_hal::pac::adc::{RegisterBlock, CHANNELS, CTRL, SEQ_CTRL, THR};
use lpc845_hal::pac::Interrupt;
use lpc845_hal::swm::AnalogPins;
use lpc845_hal::syscon::{AdcClockSource, AdcClocking};
use lpc845_hal::time::{Hertz, U32Ext};

pub const DATAVALID: u32 = 1 << 31;
pub const OVERRUN: u32 = 1 << 30;
pub const SEQA_INT: u32 = 1 << 28;
pub const SEQB_INT: u32 = 1 << 29;
pub const THCMP_INT: u32 = 1 << 30;
pub const OVR_INT: u32 = 1 << 31;

const DAT_OFFSET: usize = 0x20;

/// In-memory ADC
///
/// Every access through a [`SimRef`] first lets the model react to what was
/// written since the previous access: calibration completes at once, and an
/// enabled sequence with START or BURST set converts its channels from the
/// configured inputs. When both sequences are due and sequence A is low
/// priority, B converts first and A resumes after it. Flags raised by conversions accumulate; write-one-to-
/// clear is not modelled, so a flag write leaves exactly the written value.
pub struct SimAdc {
    regs: UnsafeCell<RegisterBlock>,
    inputs: [Cell<u16>; CHANNELS],
    below_low: [Cell<Option<bool>>; CHANNELS],
    cursor: [Cell<usize>; 2],
    calibrations: Cell<u32>,
    calibration_clkdiv: Cell<Option<u8>>,
    passes: [Cell<u32>; 2],
    steps: Cell<u32>,
    log: RefCell<Vec<(u32, usize)>>,
}

#[derive(Clone, Copy)]
pub struct SimRef(&'static SimAdc);

impl SimAdc {
    pub fn new() -> SimRef {
        let sim = SimAdc {
            // All ADC registers are plain words, zero is a valid state
            regs: UnsafeCell::new(unsafe { std::mem::zeroed() }),
            inputs: Default::default(),
            below_low: Default::default(),
            cursor: Default::default(),
            calibrations: Cell::new(0),
            calibration_clkdiv: Cell::new(None),
            passes: Default::default(),
            steps: Cell::new(0),
            log: RefCell::new(Vec::new()),
        };
        SimRef(Box::leak(Box::new(sim)))
    }

    fn regs(&self) -> &RegisterBlock {
        unsafe { &*self.regs.get() }
    }

    fn write_dat(&self, channel: usize, value: u32) {
        unsafe {
            let base = self.regs.get() as *mut u8;
            let dat = base.add(DAT_OFFSET + 4 * channel) as *mut u32;
            dat.write_volatile(value);
        }
    }

    fn step(&self) {
        let regs = self.regs();
        let step = self.steps.get() + 1;
        self.steps.set(step);

        if regs.ctrl.is_set(CTRL::CALMODE) {
            self.calibrations.set(self.calibrations.get() + 1);
            self.calibration_clkdiv
                .set(Some(regs.ctrl.read(CTRL::CLKDIV) as u8));
            regs.ctrl.modify(CTRL::CALMODE::CLEAR);
        }

        let order = if regs.seq_ctrl[0].is_set(SEQ_CTRL::LOWPRIO) {
            [1, 0]
        } else {
            [0, 1]
        };

        for &sequence in order.iter() {
            let ctrl = regs.seq_ctrl[sequence].extract();
            if !ctrl.is_set(SEQ_CTRL::SEQ_ENA) {
                continue;
            }
            if ctrl.is_set(SEQ_CTRL::START) {
                regs.seq_ctrl[sequence].modify(SEQ_CTRL::START::CLEAR);
            } else if !ctrl.is_set(SEQ_CTRL::BURST) {
                continue;
            }

            self.log.borrow_mut().push((step, sequence));
            self.pass(
                sequence,
                ctrl.read(SEQ_CTRL::CHANNELS) as u16,
                ctrl.is_set(SEQ_CTRL::SINGLESTEP),
                ctrl.is_set(SEQ_CTRL::MODE),
            );
        }
    }

    fn pass(&self, sequence: usize, mask: u16, single_step: bool, end_of_sequence: bool) {
        let channels: Vec<usize> = (0..CHANNELS).filter(|c| mask & (1 << c) != 0).collect();
        if channels.is_empty() {
            return;
        }

        let (converted, complete) = if single_step {
            let position = self.cursor[sequence].get() % channels.len();
            let next = (position + 1) % channels.len();
            self.cursor[sequence].set(next);
            (vec![channels[position]], next == 0)
        } else {
            (channels, true)
        };

        let sequence_int = if sequence == 0 { SEQA_INT } else { SEQB_INT };
        let mut flags = 0;

        for channel in converted {
            let (word, event) = self.convert(channel);
            self.write_dat(channel, word);
            self.regs().seq_gdat[sequence].set(word);

            if event {
                flags |= (1 << channel) | THCMP_INT;
            }
            if !end_of_sequence {
                flags |= sequence_int;
            }
        }
        if end_of_sequence && complete {
            flags |= sequence_int;
        }

        self.passes[sequence].set(self.passes[sequence].get() + 1);
        let regs = self.regs();
        regs.flags.set(regs.flags.get() | flags);
    }

    /// Converts one channel, returning its data word and whether it raised a
    /// threshold event
    fn convert(&self, channel: usize) -> (u32, bool) {
        let regs = self.regs();
        let value = u32::from(self.inputs[channel].get() & 0xFFF);

        let bank = ((regs.chan_thrsel.get() >> channel) & 1) as usize;
        let low = regs.thr_low[bank].read(THR::VALUE);
        let high = regs.thr_high[bank].read(THR::VALUE);

        let range = if value < low {
            1
        } else if value > high {
            2
        } else {
            0
        };

        // Crossing compares against the low threshold only
        let below = value < low;
        let crossing = match self.below_low[channel].get() {
            Some(true) if !below => 3,
            Some(false) if below => 2,
            _ => 0,
        };
        self.below_low[channel].set(Some(below));

        let event = match (regs.inten.get() >> (3 + 2 * channel)) & 0b11 {
            1 => range != 0,
            2 => crossing != 0,
            _ => false,
        };

        let word = DATAVALID
            | ((channel as u32) << 26)
            | (crossing << 18)
            | (range << 16)
            | (value << 4);
        (word, event)
    }
}

impl SimRef {
    /// Register block access that does not advance the model
    pub fn regs(&self) -> &RegisterBlock {
        self.0.regs()
    }

    pub fn set_input(&self, channel: u8, value: u16) {
        self.0.inputs[usize::from(channel)].set(value);
    }

    pub fn calibrations(&self) -> u32 {
        self.0.calibrations.get()
    }

    pub fn calibration_clkdiv(&self) -> Option<u8> {
        self.0.calibration_clkdiv.get()
    }

    /// Conversion passes run by a sequence, 0 for A
    pub fn passes(&self, sequence: usize) -> u32 {
        self.0.passes[sequence].get()
    }

    /// Sequences converted during the access that converted `sequence` last,
    /// in conversion order
    pub fn last_access_with(&self, sequence: usize) -> Vec<usize> {
        let log = self.0.log.borrow();
        let step = match log.iter().rev().find(|&&(_, s)| s == sequence) {
            Some(&(step, _)) => step,
            None => return Vec::new(),
        };
        log.iter()
            .filter(|&&(s, _)| s == step)
            .map(|&(_, sequence)| sequence)
            .collect()
    }

    pub fn set_flags(&self, value: u32) {
        self.regs().flags.set(value);
    }

    pub fn flags(&self) -> u32 {
        self.regs().flags.get()
    }

    /// Forgets every result, as if all data registers had been read
    pub fn invalidate_results(&self) {
        for channel in 0..CHANNELS {
            self.0.write_dat(channel, 0);
        }
        for gdat in self.regs().seq_gdat.iter() {
            gdat.set(0);
        }
    }
}

impl Deref for SimRef {
    type Target = RegisterBlock;

    fn deref(&self) -> &RegisterBlock {
        self.0.step();
        self.0.regs()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    PowerUp,
    PowerDown,
    ClockOn,
    ClockOff,
    ResetAsserted,
    ResetCleared,
    AdcClock(AdcClockSource, u8),
}

/// Records the clock, reset and power calls made by the driver
pub struct MockSyscon {
    pub main: Hertz,
    pub fro: Hertz,
    pub pll: Hertz,
    pub events: Vec<Event>,
}

impl MockSyscon {
    pub fn new(main: Hertz) -> Self {
        MockSyscon {
            main,
            fro: 12.mhz(),
            pll: 0.hz(),
            events: Vec::new(),
        }
    }

    pub fn last_adc_clock(&self) -> Option<(AdcClockSource, u8)> {
        self.events.iter().rev().find_map(|event| match *event {
            Event::AdcClock(source, div) => Some((source, div)),
            _ => None,
        })
    }
}

impl AdcClocking for MockSyscon {
    fn main_clock(&self) -> Hertz {
        self.main
    }

    fn source_clock(&self, source: AdcClockSource) -> Hertz {
        match source {
            AdcClockSource::Fro => self.fro,
            AdcClockSource::SysPll => self.pll,
        }
    }

    fn power_up_adc(&mut self) {
        self.events.push(Event::PowerUp);
    }

    fn power_down_adc(&mut self) {
        self.events.push(Event::PowerDown);
    }

    fn enable_adc_clock(&mut self) {
        self.events.push(Event::ClockOn);
    }

    fn disable_adc_clock(&mut self) {
        self.events.push(Event::ClockOff);
    }

    fn assert_adc_reset(&mut self) {
        self.events.push(Event::ResetAsserted);
    }

    fn clear_adc_reset(&mut self) {
        self.events.push(Event::ResetCleared);
    }

    fn set_adc_clock(&mut self, source: AdcClockSource, div: u8) {
        self.events.push(Event::AdcClock(source, div));
    }
}

/// Tracks which channels are routed to their pins
#[derive(Default)]
pub struct MockPins {
    pub analog: u16,
    pub released: u16,
}

impl AnalogPins for MockPins {
    fn enable_analog(&mut self, channel: u8) {
        self.analog |= 1 << channel;
    }

    fn disable_analog(&mut self, channel: u8) {
        self.analog &= !(1 << channel);
        self.released |= 1 << channel;
    }
}

/// Tracks which interrupt lines are unmasked
#[derive(Default)]
pub struct MockNvic {
    enabled: u32,
}

impl MockNvic {
    pub fn is_enabled(&self, interrupt: Interrupt) -> bool {
        self.enabled & (1 << interrupt as u16) != 0
    }
}

impl InterruptControl for MockNvic {
    fn enable(&mut self, interrupt: Interrupt) {
        self.enabled |= 1 << interrupt as u16;
    }

    fn disable(&mut self, interrupt: Interrupt) {
        self.enabled &= !(1 << interrupt as u16);
    }
}
