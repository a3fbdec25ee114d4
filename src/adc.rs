//! # Analog to Digital converter
//!
//! The LPC845 ADC converts up to 12 channels through two independent
//! conversion sequences, A and B. Each sequence has its own channel mask,
//! trigger and interrupt line. When sequence A is marked low priority, a
//! trigger on sequence B preempts it and A resumes after B has finished.
//!
//! How results are read depends on the sequence's [`InterruptMode`]. In
//! end-of-conversion mode only the sequence's global data register is read,
//! and the result carries no channel ([`ResultChannel::Global`]). In
//! end-of-sequence mode every channel in the mask is read from its own data
//! register and only channels holding a fresh result are returned.
//!
//! Interrupts are dispatched through a callback table owned by [`Adc`].
//! The application's interrupt handlers forward to [`Adc::handle_sequence_a`],
//! [`Adc::handle_sequence_b`], [`Adc::handle_threshold`] and
//! [`Adc::handle_overrun`]. Reconfiguring a sequence while its interrupt may
//! fire is the caller's responsibility to guard against.

use core::ops::Deref;

use tock_registers::LocalRegisterCopy;
use void::Void;

use crate::{
    hal::adc::{Channel, OneShot},
    nvic::InterruptControl,
    pac::adc::{RegisterBlock, CHANNELS, DAT},
    pac::ADC,
    swm::AnalogPins,
    syscon::{AdcClockSource, AdcClocking},
    time::{Hertz, U32Ext},
};

pub mod clock;
mod handlers;
mod regs;
pub mod threshold;

pub use self::handlers::{Callback, Vector};
pub use self::threshold::{
    ComparisonResult, Crossing, Range, ThresholdBank, ThresholdConfig, ThresholdInterrupt,
};

use self::handlers::Handlers;

/// Extension trait that constrains the `ADC` peripheral
pub trait AdcExt {
    /// Initializes the converter and returns the driver
    fn constrain<S: AdcClocking>(self, config: &Config, syscon: &mut S) -> Adc;
}

impl AdcExt for ADC {
    fn constrain<S: AdcClocking>(self, config: &Config, syscon: &mut S) -> Adc {
        let mut adc = Adc::new(self);
        adc.init(config, syscon);
        adc
    }
}

/// Conversion sequence
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sequence {
    A = 0,
    B = 1,
}

impl Sequence {
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// ADC clocking
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Clocked from the main clock through CTRL.CLKDIV, up to 1.2 MHz
    Synchronous,
    /// Clocked from the SYSCON ADC clock, up to 0.6 MHz
    Asynchronous,
}

/// ADC low power mode
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowPowerMode {
    Disabled,
    /// Power the converter down between conversions
    Enabled,
}

/// Sequence trigger source
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Trigger {
    /// Software start only
    Software = 0,
    PinInt0 = 1,
    PinInt1 = 2,
    Sct0Out3 = 3,
    Sct0Out4 = 4,
    Ctimer0Match3 = 5,
    /// Analog comparator output
    Comparator = 6,
    /// GPIO pattern match
    GpioPatternMatch = 7,
    /// Arm core TXEV
    ArmTxEvent = 8,
}

/// Hardware trigger edge
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerPolarity {
    NegativeEdge,
    PositiveEdge,
}

/// Hardware trigger synchronization
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Synchronization {
    /// Triggers are synchronized to the ADC clock
    Enabled,
    /// Triggers act directly, which requires them to be at least one ADC
    /// clock wide
    Bypassed,
}

/// When a sequence raises its interrupt
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
    /// After every conversion
    EndOfConversion,
    /// After the whole channel mask has been converted
    EndOfSequence,
}

/// Driver errors
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The global data register holds no fresh conversion
    InvalidResult,
}

/// A set of ADC channels
///
/// Used to set up multi-channel sequences and threshold bindings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channels {
    flags: u16,
}

impl Channels {
    const MASK: u16 = (1 << CHANNELS) - 1;

    pub fn new() -> Channels {
        Default::default()
    }

    /// Builds the set from a bit mask, bits above channel 11 are dropped
    pub const fn from_bits(bits: u16) -> Channels {
        Channels {
            flags: bits & Self::MASK,
        }
    }

    pub fn bits(&self) -> u16 {
        self.flags
    }

    /// Adds a channel to the collection
    pub fn add<C>(&mut self, _: C)
    where
        C: Channel<Adc, ID = u8>,
    {
        self.insert(C::channel())
    }

    /// Adds a channel by number, out of range numbers are ignored
    pub fn insert(&mut self, channel: u8) {
        if usize::from(channel) < CHANNELS {
            self.flags |= 1 << channel;
        }
    }

    pub fn with(mut self, channel: u8) -> Channels {
        self.insert(channel);
        self
    }

    pub fn contains(&self, channel: u8) -> bool {
        usize::from(channel) < CHANNELS && self.flags & (1 << channel) != 0
    }

    pub fn len(&self) -> usize {
        self.flags.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.flags == 0
    }

    /// Channel numbers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> {
        let flags = self.flags;
        (0..CHANNELS as u8).filter(move |&channel| flags & (1 << channel) != 0)
    }
}

impl<C> From<C> for Channels
where
    C: Channel<Adc, ID = u8>,
{
    fn from(channel: C) -> Self {
        let mut c = Channels::new();
        c.add(channel);
        c
    }
}

/// Source of a sequence result
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResultChannel {
    Channel(u8),
    /// Read from the global data register, which does not identify a channel
    Global,
}

/// One conversion result
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceResult {
    pub channel: ResultChannel,
    /// 12 bit magnitude
    pub value: u16,
    /// An earlier result was overwritten before it was read
    pub overrun: bool,
}

impl SequenceResult {
    pub const fn empty() -> Self {
        SequenceResult {
            channel: ResultChannel::Global,
            value: 0,
            overrun: false,
        }
    }

    fn decode(channel: ResultChannel, data: LocalRegisterCopy<u32, DAT::Register>) -> Self {
        SequenceResult {
            channel,
            value: data.read(DAT::RESULT) as u16,
            overrun: data.is_set(DAT::OVERRUN),
        }
    }
}

impl Default for SequenceResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Converter configuration
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    sample_rate: Hertz,
    mode: OperatingMode,
    clock_source: AdcClockSource,
    low_power: LowPowerMode,
}

impl Config {
    /// Requested sample rate
    ///
    /// Rates above the operating mode's limit are clamped to it.
    pub fn sample_rate(mut self, rate: Hertz) -> Self {
        self.sample_rate = rate;
        self
    }

    pub fn mode(mut self, mode: OperatingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Clock feeding the converter in asynchronous mode
    pub fn clock_source(mut self, source: AdcClockSource) -> Self {
        self.clock_source = source;
        self
    }

    pub fn low_power(mut self, low_power: LowPowerMode) -> Self {
        self.low_power = low_power;
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            sample_rate: 1_200.khz(),
            mode: OperatingMode::Synchronous,
            clock_source: AdcClockSource::Fro,
            low_power: LowPowerMode::Disabled,
        }
    }
}

/// Sequence configuration
pub struct SequenceConfig<R = ADC> {
    pub channels: Channels,
    pub trigger: Trigger,
    pub trigger_polarity: TriggerPolarity,
    pub sync_bypass: Synchronization,
    pub mode: InterruptMode,
    /// Free running conversions
    pub burst: bool,
    /// Each trigger converts only the next channel
    pub single_step: bool,
    /// Sequence A only, let sequence B preempt it
    pub low_priority: bool,
    /// Run on the sequence interrupt, `None` leaves the interrupt disabled
    pub callback: Option<Callback<R>>,
}

impl<R> SequenceConfig<R> {
    /// Software triggered end-of-sequence conversion of `channels`
    pub fn new(channels: impl Into<Channels>) -> Self {
        SequenceConfig {
            channels: channels.into(),
            trigger: Trigger::Software,
            trigger_polarity: TriggerPolarity::PositiveEdge,
            sync_bypass: Synchronization::Enabled,
            mode: InterruptMode::EndOfSequence,
            burst: false,
            single_step: false,
            low_priority: false,
            callback: None,
        }
    }

    pub fn trigger(mut self, trigger: Trigger, polarity: TriggerPolarity) -> Self {
        self.trigger = trigger;
        self.trigger_polarity = polarity;
        self
    }

    pub fn sync_bypass(mut self, sync: Synchronization) -> Self {
        self.sync_bypass = sync;
        self
    }

    pub fn mode(mut self, mode: InterruptMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn burst(mut self, burst: bool) -> Self {
        self.burst = burst;
        self
    }

    pub fn single_step(mut self, single_step: bool) -> Self {
        self.single_step = single_step;
        self
    }

    pub fn low_priority(mut self, low_priority: bool) -> Self {
        self.low_priority = low_priority;
        self
    }

    pub fn callback(mut self, callback: Callback<R>) -> Self {
        self.callback = Some(callback);
        self
    }
}

impl<R> Clone for SequenceConfig<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for SequenceConfig<R> {}

/// Analog to Digital converter interface
pub struct Adc<R = ADC> {
    rb: R,
    handlers: Handlers<R>,
    burst: [bool; 2],
    oneshot: Option<u8>,
}

impl<R> Adc<R>
where
    R: Deref<Target = RegisterBlock>,
{
    /// Wraps the register block without touching the hardware
    ///
    /// [`init`](Self::init) must run before any conversion.
    pub fn new(rb: R) -> Self {
        Adc {
            rb,
            handlers: Handlers::new(),
            burst: [false; 2],
            oneshot: None,
        }
    }

    /// Powers up, resets, calibrates and clocks the converter
    ///
    /// Calibration runs on every call, blocking until the hardware reports
    /// completion. It is required after every reset and deep power-down exit.
    pub fn init<S: AdcClocking>(&mut self, config: &Config, syscon: &mut S) {
        syscon.power_up_adc();
        syscon.enable_adc_clock();
        syscon.assert_adc_reset();
        syscon.clear_adc_reset();
        syscon.set_adc_clock(AdcClockSource::Fro, 1);

        self.rb.set_high_voltage_range();
        self.calibrate(syscon.main_clock());

        let (clkdiv, asynchronous) = match config.mode {
            OperatingMode::Synchronous => {
                let div = clock::sync_divider(syscon.main_clock(), config.sample_rate);
                (div, false)
            }
            OperatingMode::Asynchronous => {
                let source = syscon.source_clock(config.clock_source);
                let div = clock::async_divider(source, config.sample_rate);
                syscon.set_adc_clock(config.clock_source, div);
                (0, true)
            }
        };

        self.rb.configure_control(
            clkdiv,
            asynchronous,
            config.low_power == LowPowerMode::Enabled,
        );

        self.burst = [false; 2];
        self.oneshot = None;

        debug!(
            "adc: init {} requested, divider {}, async {}",
            config.sample_rate,
            clkdiv,
            asynchronous
        );
    }

    fn calibrate(&mut self, main_clock: Hertz) {
        trace!("adc: calibrating");

        let saved = self
            .rb
            .start_calibration(clock::calibration_divider(main_clock));
        while self.rb.calibrating() {}
        self.rb.restore_control(saved);

        trace!("adc: calibration done");
    }

    /// Shuts the converter down
    ///
    /// Holds it in reset, gates its clock, powers it down, masks all four
    /// interrupt lines and returns every channel pin to digital use.
    /// Registered callbacks are dropped.
    pub fn deinit<S, P, N>(&mut self, syscon: &mut S, pins: &mut P, nvic: &mut N)
    where
        S: AdcClocking,
        P: AnalogPins,
        N: InterruptControl,
    {
        syscon.assert_adc_reset();
        syscon.disable_adc_clock();
        syscon.power_down_adc();

        for vector in Vector::ALL.iter() {
            nvic.disable(vector.interrupt());
        }
        for channel in 0..CHANNELS as u8 {
            pins.disable_analog(channel);
        }

        self.handlers.clear();
        self.burst = [false; 2];
        self.oneshot = None;

        debug!("adc: deinit");
    }

    /// Programs a conversion sequence
    ///
    /// Routes every channel in the mask to its pin, then writes trigger,
    /// polarity, synchronization, single step, interrupt mode and (sequence A
    /// only) priority. With a callback the sequence interrupt is enabled in
    /// the ADC and at the interrupt controller, without one both are
    /// disabled. A burst sequence starts converting immediately, any other
    /// sequence is only enabled and waits for its trigger.
    pub fn configure_sequence<P, N>(
        &mut self,
        sequence: Sequence,
        config: &SequenceConfig<R>,
        pins: &mut P,
        nvic: &mut N,
    ) where
        P: AnalogPins,
        N: InterruptControl,
    {
        self.rb.disable_sequence(sequence);

        for channel in config.channels.iter() {
            pins.enable_analog(channel);
        }

        self.rb.write_sequence(
            sequence,
            config.channels.bits(),
            config.trigger as u8,
            config.trigger_polarity == TriggerPolarity::PositiveEdge,
            config.sync_bypass == Synchronization::Bypassed,
            config.mode,
            config.single_step,
            config.low_priority,
        );

        let vector = Vector::from(sequence);
        let listening = self.handlers.register(vector, config.callback);
        self.rb.enable_sequence_interrupt(sequence, listening);
        if listening {
            nvic.enable(vector.interrupt());
        } else {
            nvic.disable(vector.interrupt());
        }

        self.burst[sequence.index()] = config.burst;
        if sequence == Sequence::A {
            self.oneshot = None;
        }

        if config.burst {
            self.rb.enable_burst(sequence);
        } else {
            self.rb.enable_sequence(sequence);
        }

        debug!(
            "adc: sequence {} channels {=u16:#x} burst {}",
            sequence,
            config.channels.bits(),
            config.burst
        );
    }

    /// Enables a sequence without triggering it
    pub fn enable_sequence(&mut self, sequence: Sequence) {
        self.rb.enable_sequence(sequence);
    }

    /// Starts a conversion pass
    ///
    /// A single step sequence converts its next channel, any other converts
    /// its whole mask. A burst sequence is set free running again. Triggers
    /// arriving while the sequence is busy are dropped by the hardware.
    pub fn start_sequence(&mut self, sequence: Sequence) {
        if self.burst[sequence.index()] {
            self.rb.enable_burst(sequence);
        } else {
            self.rb.enable_sequence(sequence);
            self.rb.start_sequence(sequence);
        }
    }

    /// Stops a sequence after the conversion in progress
    ///
    /// A burst sequence stops free running, any other is disabled.
    pub fn stop_sequence(&mut self, sequence: Sequence) {
        if self.burst[sequence.index()] {
            self.rb.disable_burst(sequence);
        } else {
            self.rb.disable_sequence(sequence);
        }
    }

    /// Unmasks a sequence interrupt at the interrupt controller
    pub fn listen<N: InterruptControl>(&mut self, sequence: Sequence, nvic: &mut N) {
        nvic.enable(Vector::from(sequence).interrupt());
    }

    /// Masks a sequence interrupt at the interrupt controller
    pub fn unlisten<N: InterruptControl>(&mut self, sequence: Sequence, nvic: &mut N) {
        nvic.disable(Vector::from(sequence).interrupt());
    }

    /// Reads a sequence's results into `results`
    ///
    /// Returns the number of entries written. In end-of-conversion mode that
    /// is one [`ResultChannel::Global`] entry, or [`Error::InvalidResult`] if
    /// no conversion finished since the last read. In end-of-sequence mode
    /// every channel of the mask with a fresh result is written in channel
    /// order, channels without one are skipped. `results` should hold at
    /// least as many entries as the mask has channels.
    pub fn sequence_result(
        &mut self,
        sequence: Sequence,
        results: &mut [SequenceResult],
    ) -> Result<usize, Error> {
        match self.rb.sequence_mode(sequence) {
            InterruptMode::EndOfConversion => {
                let slot = match results.first_mut() {
                    Some(slot) => slot,
                    None => return Ok(0),
                };

                let data = self.rb.global_data(sequence);
                if !data.is_set(DAT::DATAVALID) {
                    return Err(Error::InvalidResult);
                }

                *slot = SequenceResult::decode(ResultChannel::Global, data);
                Ok(1)
            }
            InterruptMode::EndOfSequence => {
                let channels = Channels::from_bits(self.rb.sequence_channels(sequence));
                let mut count = 0;

                for channel in channels.iter() {
                    if count == results.len() {
                        break;
                    }

                    let data = self.rb.channel_data(channel);
                    if data.is_set(DAT::DATAVALID) {
                        results[count] =
                            SequenceResult::decode(ResultChannel::Channel(channel), data);
                        count += 1;
                    }
                }

                Ok(count)
            }
        }
    }

    /// Sets a threshold bank's bounds, 12 bits each
    ///
    /// The order of `low` and `high` is not checked.
    pub fn set_threshold(&mut self, bank: ThresholdBank, low: u16, high: u16) {
        self.rb.set_threshold(bank, low, high);
    }

    /// Binds a channel to a threshold bank and selects its interrupt events
    pub fn configure_channel_threshold(
        &mut self,
        channel: u8,
        bank: ThresholdBank,
        mode: ThresholdInterrupt,
    ) {
        if usize::from(channel) >= CHANNELS {
            return;
        }

        self.rb.select_threshold(channel, bank);
        self.rb.set_threshold_interrupt(channel, mode);
    }

    /// Sets a bank's bounds and binds a set of channels to it
    pub fn configure_threshold(&mut self, bank: ThresholdBank, config: &ThresholdConfig) {
        self.set_threshold(bank, config.low, config.high);
        for channel in config.channels.iter() {
            self.configure_channel_threshold(channel, bank, config.mode);
        }
    }

    /// Installs the threshold callback, shared by all channels
    ///
    /// `None` installs the no-op and masks the threshold interrupt line.
    pub fn register_threshold_callback<N: InterruptControl>(
        &mut self,
        callback: Option<Callback<R>>,
        nvic: &mut N,
    ) {
        let interrupt = Vector::Threshold.interrupt();
        if self.handlers.register(Vector::Threshold, callback) {
            nvic.enable(interrupt);
        } else {
            nvic.disable(interrupt);
        }
    }

    /// Installs the overrun callback
    ///
    /// `None` installs the no-op and disables the overrun interrupt.
    pub fn register_overrun_callback<N: InterruptControl>(
        &mut self,
        callback: Option<Callback<R>>,
        nvic: &mut N,
    ) {
        let interrupt = Vector::Overrun.interrupt();
        let listening = self.handlers.register(Vector::Overrun, callback);
        self.rb.enable_overrun_interrupt(listening);
        if listening {
            nvic.enable(interrupt);
        } else {
            nvic.disable(interrupt);
        }
    }

    /// Reads the comparison outcome of every channel with a pending
    /// threshold event
    ///
    /// The events reported are cleared. Returns the number of entries
    /// written. Events that did not fit in `results` stay pending.
    pub fn comparison_results(&mut self, results: &mut [ComparisonResult]) -> usize {
        let pending = Channels::from_bits(self.rb.threshold_flags());
        let mut reported = 0u16;
        let mut count = 0;

        for channel in pending.iter() {
            if count == results.len() {
                break;
            }

            results[count] = ComparisonResult::decode(channel, self.rb.channel_data(channel));
            reported |= 1 << channel;
            count += 1;
        }

        if reported != 0 {
            self.rb.clear_threshold_flags(reported);
        }

        count
    }

    /// Comparison outcome of a channel's latest result
    ///
    /// `None` until a conversion on the channel has completed. Reading
    /// consumes the result like any data register read, pending threshold
    /// events are left untouched.
    pub fn channel_comparison(&mut self, channel: u8) -> Option<ComparisonResult> {
        if usize::from(channel) >= CHANNELS {
            return None;
        }

        let data = self.rb.channel_data(channel);
        if data.is_set(DAT::DATAVALID) {
            Some(ComparisonResult::decode(channel, data))
        } else {
            None
        }
    }

    /// Sequence A interrupt entry
    pub fn handle_sequence_a(&mut self) {
        self.handle_sequence(Sequence::A);
    }

    /// Sequence B interrupt entry
    pub fn handle_sequence_b(&mut self) {
        self.handle_sequence(Sequence::B);
    }

    fn handle_sequence(&mut self, sequence: Sequence) {
        let callback = self.handlers.get(Vector::from(sequence));
        callback(self);

        // In end-of-conversion mode reading the global data register clears
        // the flag.
        if self.rb.sequence_mode(sequence) == InterruptMode::EndOfSequence {
            self.rb.clear_sequence_flag(sequence);
        }
    }

    /// Threshold compare interrupt entry
    ///
    /// The callback is expected to clear the events through
    /// [`comparison_results`](Self::comparison_results). Whatever is still
    /// pending afterwards is discarded.
    pub fn handle_threshold(&mut self) {
        let callback = self.handlers.get(Vector::Threshold);
        callback(self);

        if self.rb.threshold_interrupt_pending() {
            trace!("adc: discarding unread threshold events");
            self.rb.clear_threshold_flags(Channels::MASK);
        }
    }

    /// Overrun interrupt entry
    pub fn handle_overrun(&mut self) {
        let callback = self.handlers.get(Vector::Overrun);
        callback(self);
    }

    /// Dispatches an interrupt by vector
    pub fn handle(&mut self, vector: Vector) {
        match vector {
            Vector::SequenceA => self.handle_sequence_a(),
            Vector::SequenceB => self.handle_sequence_b(),
            Vector::Threshold => self.handle_threshold(),
            Vector::Overrun => self.handle_overrun(),
        }
    }

    /// Whether a user callback is installed for `vector`
    pub fn is_listening(&self, vector: Vector) -> bool {
        self.handlers.is_installed(vector)
    }
}

impl<R> Adc<R> {
    pub fn release(self) -> R {
        self.rb
    }
}

/// Single conversion on sequence A
///
/// The first call programs sequence A as a software triggered single channel
/// sequence and starts it. Later calls return the result once it is ready.
/// The channel's pin must already be routed to the ADC.
///
/// Sequence A is taken over: its callback is removed and its interrupt is
/// disabled in the ADC, so nothing else consumes the result. Configure the
/// sequence again to get them back.
impl<WORD, PIN, R> OneShot<Adc<R>, WORD, PIN> for Adc<R>
where
    WORD: From<u16>,
    PIN: Channel<Adc<R>, ID = u8>,
    R: Deref<Target = RegisterBlock>,
{
    type Error = Void;

    fn read(&mut self, _: &mut PIN) -> nb::Result<WORD, Self::Error> {
        let channel = PIN::channel();

        if self.oneshot != Some(channel) {
            self.rb.disable_sequence(Sequence::A);
            self.rb.write_sequence(
                Sequence::A,
                1 << channel,
                Trigger::Software as u8,
                true,
                false,
                InterruptMode::EndOfConversion,
                false,
                false,
            );
            self.handlers.register(Vector::SequenceA, None);
            self.rb.enable_sequence_interrupt(Sequence::A, false);

            self.rb.enable_sequence(Sequence::A);
            self.rb.start_sequence(Sequence::A);

            self.burst[Sequence::A.index()] = false;
            self.oneshot = Some(channel);
            return Err(nb::Error::WouldBlock);
        }

        let data = self.rb.global_data(Sequence::A);
        if data.is_set(DAT::DATAVALID) && data.read(DAT::CHANNEL) == u32::from(channel) {
            self.oneshot = None;
            Ok(WORD::from(data.read(DAT::RESULT) as u16))
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

macro_rules! adc_channels {
    ($($Channel:ident: ($chan:expr, $pin:expr),)+) => {
        $(
            #[doc = "ADC input "]
            #[doc = $pin]
            pub struct $Channel;

            impl<R> Channel<Adc<R>> for $Channel {
                type ID = u8;

                fn channel() -> u8 {
                    $chan
                }
            }
        )+
    };
}

adc_channels! {
    Channel0: (0, "PIO0_7"),
    Channel1: (1, "PIO0_6"),
    Channel2: (2, "PIO0_14"),
    Channel3: (3, "PIO0_23"),
    Channel4: (4, "PIO0_22"),
    Channel5: (5, "PIO0_21"),
    Channel6: (6, "PIO0_20"),
    Channel7: (7, "PIO0_19"),
    Channel8: (8, "PIO0_18"),
    Channel9: (9, "PIO0_17"),
    Channel10: (10, "PIO0_13"),
    Channel11: (11, "PIO0_4"),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_iterate_in_order() {
        let channels = Channels::new().with(8).with(0).with(4);
        assert_eq!(channels.bits(), 0b1_0001_0001);
        assert_eq!(channels.len(), 3);

        let mut iter = channels.iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(4));
        assert_eq!(iter.next(), Some(8));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn channels_ignore_out_of_range_numbers() {
        let channels = Channels::new().with(12).with(15);
        assert!(channels.is_empty());
        assert!(!channels.contains(12));

        assert_eq!(Channels::from_bits(0xFFFF).bits(), 0xFFF);
    }

    #[test]
    fn channels_from_markers() {
        let mut channels = Channels::from(Channel3);
        channels.add(Channel11);

        assert!(channels.contains(3));
        assert!(channels.contains(11));
        assert_eq!(channels.len(), 2);
    }

    #[test]
    fn sequence_config_defaults() {
        let config = SequenceConfig::<ADC>::new(Channels::from_bits(0b11));

        assert_eq!(config.trigger, Trigger::Software);
        assert_eq!(config.mode, InterruptMode::EndOfSequence);
        assert!(!config.burst);
        assert!(!config.single_step);
        assert!(config.callback.is_none());
    }
}
