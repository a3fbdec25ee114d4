//! Register level operations
//!
//! Stateless helpers that turn named ADC actions into bit-field accesses on
//! the register block. They keep no state and make no policy decisions.

use tock_registers::fields::Field;
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
use tock_registers::LocalRegisterCopy;

use crate::pac::adc::{RegisterBlock, CHAN_THRSEL, CTRL, DAT, FLAGS, INTEN, SEQ_CTRL, THR, TRM};

use super::threshold::{ThresholdBank, ThresholdInterrupt};
use super::{InterruptMode, Sequence};

/// Mask of the 12 bit conversion result and threshold fields
const VALUE_MASK: u16 = 0xFFF;

fn threshold_interrupt_field(channel: u8) -> Field<u32, INTEN::Register> {
    Field::new(0b11, INTEN::ADCMPINTEN.shift + 2 * usize::from(channel))
}

fn threshold_select_field(channel: u8) -> Field<u32, CHAN_THRSEL::Register> {
    Field::new(1, CHAN_THRSEL::THRSEL.shift + usize::from(channel))
}

impl RegisterBlock {
    /// Programs the control register
    ///
    /// Calibration mode is left off.
    pub fn configure_control(&self, clkdiv: u8, asynchronous: bool, low_power: bool) {
        self.ctrl.write(
            CTRL::CLKDIV.val(u32::from(clkdiv))
                + CTRL::ASYNCMODE.val(u32::from(asynchronous))
                + CTRL::LPWRMODE.val(u32::from(low_power)),
        );
    }

    /// Selects the 2.7 V to 3.6 V supply range
    pub fn set_high_voltage_range(&self) {
        self.trm.modify(TRM::VRANGE::HighVoltage);
    }

    /// Starts the hardware self calibration
    ///
    /// Returns the control register value to restore once
    /// [`calibrating`](Self::calibrating) reads false.
    pub fn start_calibration(&self, clkdiv: u8) -> u32 {
        let saved = self.ctrl.get();

        self.ctrl.write(
            CTRL::CLKDIV.val(u32::from(clkdiv)) + CTRL::LPWRMODE::CLEAR + CTRL::CALMODE::SET,
        );

        saved
    }

    /// CALMODE is cleared by hardware when calibration completes
    pub fn calibrating(&self) -> bool {
        self.ctrl.is_set(CTRL::CALMODE)
    }

    pub fn restore_control(&self, saved: u32) {
        self.ctrl.set(saved);
    }

    /// Writes a sequence configuration with the sequence left disabled
    pub fn write_sequence(
        &self,
        sequence: Sequence,
        channels: u16,
        trigger: u8,
        positive_edge: bool,
        sync_bypass: bool,
        mode: InterruptMode,
        single_step: bool,
        low_priority: bool,
    ) {
        let mode = match mode {
            InterruptMode::EndOfConversion => SEQ_CTRL::MODE::EndOfConversion,
            InterruptMode::EndOfSequence => SEQ_CTRL::MODE::EndOfSequence,
        };
        // LOWPRIO only exists in sequence A
        let low_priority = low_priority && sequence == Sequence::A;

        self.seq_ctrl[sequence.index()].write(
            SEQ_CTRL::CHANNELS.val(u32::from(channels & VALUE_MASK))
                + SEQ_CTRL::TRIGGER.val(u32::from(trigger))
                + SEQ_CTRL::TRIGPOL.val(u32::from(positive_edge))
                + SEQ_CTRL::SYNCBYPASS.val(u32::from(sync_bypass))
                + SEQ_CTRL::SINGLESTEP.val(u32::from(single_step))
                + SEQ_CTRL::LOWPRIO.val(u32::from(low_priority))
                + mode
                + SEQ_CTRL::SEQ_ENA::CLEAR,
        );
    }

    pub fn enable_sequence(&self, sequence: Sequence) {
        self.seq_ctrl[sequence.index()].modify(SEQ_CTRL::SEQ_ENA::SET);
    }

    pub fn disable_sequence(&self, sequence: Sequence) {
        self.seq_ctrl[sequence.index()].modify(SEQ_CTRL::SEQ_ENA::CLEAR + SEQ_CTRL::BURST::CLEAR);
    }

    /// Sets BURST together with SEQ_ENA in a single write
    pub fn enable_burst(&self, sequence: Sequence) {
        self.seq_ctrl[sequence.index()].modify(SEQ_CTRL::BURST::SET + SEQ_CTRL::SEQ_ENA::SET);
    }

    pub fn disable_burst(&self, sequence: Sequence) {
        self.seq_ctrl[sequence.index()].modify(SEQ_CTRL::BURST::CLEAR);
    }

    /// Software trigger
    pub fn start_sequence(&self, sequence: Sequence) {
        self.seq_ctrl[sequence.index()].modify(SEQ_CTRL::START::SET);
    }

    pub fn sequence_mode(&self, sequence: Sequence) -> InterruptMode {
        if self.seq_ctrl[sequence.index()].is_set(SEQ_CTRL::MODE) {
            InterruptMode::EndOfSequence
        } else {
            InterruptMode::EndOfConversion
        }
    }

    pub fn sequence_channels(&self, sequence: Sequence) -> u16 {
        self.seq_ctrl[sequence.index()].read(SEQ_CTRL::CHANNELS) as u16
    }

    /// Reads the sequence's global data register
    ///
    /// The read clears DATAVALID and OVERRUN in hardware.
    pub fn global_data(&self, sequence: Sequence) -> LocalRegisterCopy<u32, DAT::Register> {
        self.seq_gdat[sequence.index()].extract()
    }

    pub fn channel_data(&self, channel: u8) -> LocalRegisterCopy<u32, DAT::Register> {
        self.dat[usize::from(channel)].extract()
    }

    pub fn enable_sequence_interrupt(&self, sequence: Sequence, enable: bool) {
        let field = match sequence {
            Sequence::A => INTEN::SEQA_INTEN,
            Sequence::B => INTEN::SEQB_INTEN,
        };
        self.inten.modify(field.val(u32::from(enable)));
    }

    pub fn enable_overrun_interrupt(&self, enable: bool) {
        self.inten.modify(INTEN::OVR_INTEN.val(u32::from(enable)));
    }

    pub fn clear_sequence_flag(&self, sequence: Sequence) {
        match sequence {
            Sequence::A => self.flags.write(FLAGS::SEQA_INT::SET),
            Sequence::B => self.flags.write(FLAGS::SEQB_INT::SET),
        }
    }

    pub fn set_threshold(&self, bank: ThresholdBank, low: u16, high: u16) {
        self.thr_low[bank.index()].write(THR::VALUE.val(u32::from(low & VALUE_MASK)));
        self.thr_high[bank.index()].write(THR::VALUE.val(u32::from(high & VALUE_MASK)));
    }

    /// Binds a channel to a threshold bank
    pub fn select_threshold(&self, channel: u8, bank: ThresholdBank) {
        self.chan_thrsel
            .modify(threshold_select_field(channel).val(bank.index() as u32));
    }

    pub fn set_threshold_interrupt(&self, channel: u8, mode: ThresholdInterrupt) {
        self.inten
            .modify(threshold_interrupt_field(channel).val(mode as u32));
    }

    /// Channels with a pending threshold event
    pub fn threshold_flags(&self) -> u16 {
        self.flags.read(FLAGS::THCMP) as u16
    }

    pub fn threshold_interrupt_pending(&self) -> bool {
        self.flags.is_set(FLAGS::THCMP_INT)
    }

    /// Clears the threshold events of the given channels
    pub fn clear_threshold_flags(&self, channels: u16) {
        self.flags
            .write(FLAGS::THCMP.val(u32::from(channels & VALUE_MASK)));
    }
}
