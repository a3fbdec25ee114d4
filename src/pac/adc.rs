//! ADC register block

use tock_registers::register_bitfields;
use tock_registers::registers::{ReadOnly, ReadWrite};

/// Number of analog input channels
pub const CHANNELS: usize = 12;

#[repr(C)]
pub struct RegisterBlock {
    /// A/D control
    pub ctrl: ReadWrite<u32, CTRL::Register>,
    _reserved0: u32,
    /// Sequence A and B control
    pub seq_ctrl: [ReadWrite<u32, SEQ_CTRL::Register>; 2],
    /// Sequence A and B global data
    ///
    /// Reading clears DATAVALID and OVERRUN.
    pub seq_gdat: [ReadWrite<u32, DAT::Register>; 2],
    _reserved1: [u32; 2],
    /// Channel 0 to 11 data
    pub dat: [ReadOnly<u32, DAT::Register>; CHANNELS],
    /// Threshold bank 0 and 1 low compare value
    pub thr_low: [ReadWrite<u32, THR::Register>; 2],
    /// Threshold bank 0 and 1 high compare value
    pub thr_high: [ReadWrite<u32, THR::Register>; 2],
    /// Channel to threshold bank selection
    pub chan_thrsel: ReadWrite<u32, CHAN_THRSEL::Register>,
    /// Interrupt enable
    pub inten: ReadWrite<u32, INTEN::Register>,
    /// Flags, write one to clear
    pub flags: ReadWrite<u32, FLAGS::Register>,
    /// Trim
    pub trm: ReadWrite<u32, TRM::Register>,
}

const _: () = {
    use core::mem::offset_of;

    assert!(offset_of!(RegisterBlock, ctrl) == 0x000);
    assert!(offset_of!(RegisterBlock, seq_ctrl) == 0x008);
    assert!(offset_of!(RegisterBlock, seq_gdat) == 0x010);
    assert!(offset_of!(RegisterBlock, dat) == 0x020);
    assert!(offset_of!(RegisterBlock, thr_low) == 0x050);
    assert!(offset_of!(RegisterBlock, thr_high) == 0x058);
    assert!(offset_of!(RegisterBlock, chan_thrsel) == 0x060);
    assert!(offset_of!(RegisterBlock, inten) == 0x064);
    assert!(offset_of!(RegisterBlock, flags) == 0x068);
    assert!(offset_of!(RegisterBlock, trm) == 0x06C);
    assert!(core::mem::size_of::<RegisterBlock>() == 0x070);
};

register_bitfields![u32,
    pub CTRL [
        /// System clock divide value, ignored in asynchronous mode
        CLKDIV OFFSET(0) NUMBITS(8) [],
        /// Clock the converter from the asynchronous ADC clock
        ASYNCMODE OFFSET(8) NUMBITS(1) [],
        /// Power down between conversions
        LPWRMODE OFFSET(10) NUMBITS(1) [],
        /// Run self calibration, cleared by hardware when done
        CALMODE OFFSET(30) NUMBITS(1) []
    ],
    pub SEQ_CTRL [
        /// Channels converted by the sequence
        CHANNELS OFFSET(0) NUMBITS(12) [],
        /// Hardware trigger input
        TRIGGER OFFSET(12) NUMBITS(4) [],
        /// Trigger polarity
        TRIGPOL OFFSET(18) NUMBITS(1) [
            NegativeEdge = 0,
            PositiveEdge = 1
        ],
        /// Bypass trigger synchronization
        SYNCBYPASS OFFSET(19) NUMBITS(1) [],
        /// Software start, reads back as zero
        START OFFSET(26) NUMBITS(1) [],
        /// Free running conversions
        BURST OFFSET(27) NUMBITS(1) [],
        /// Each trigger converts one channel
        SINGLESTEP OFFSET(28) NUMBITS(1) [],
        /// Sequence A only: sequence B triggers preempt A
        LOWPRIO OFFSET(29) NUMBITS(1) [],
        /// Sequence interrupt and DMA trigger timing
        MODE OFFSET(30) NUMBITS(1) [
            EndOfConversion = 0,
            EndOfSequence = 1
        ],
        /// Sequence enable
        SEQ_ENA OFFSET(31) NUMBITS(1) []
    ],
    pub DAT [
        /// 12 bit conversion result
        RESULT OFFSET(4) NUMBITS(12) [],
        /// Threshold range comparison
        THCMPRANGE OFFSET(16) NUMBITS(2) [
            Inside = 0,
            Below = 1,
            Above = 2
        ],
        /// Threshold crossing comparison
        THCMPCROSS OFFSET(18) NUMBITS(2) [
            NoCrossing = 0,
            Downward = 2,
            Upward = 3
        ],
        /// Channel that produced the result
        CHANNEL OFFSET(26) NUMBITS(4) [],
        /// A result was overwritten before being read
        OVERRUN OFFSET(30) NUMBITS(1) [],
        /// Result is fresh
        DATAVALID OFFSET(31) NUMBITS(1) []
    ],
    pub THR [
        VALUE OFFSET(4) NUMBITS(12) []
    ],
    pub CHAN_THRSEL [
        /// One bit per channel, set selects threshold bank 1
        THRSEL OFFSET(0) NUMBITS(12) []
    ],
    pub INTEN [
        SEQA_INTEN OFFSET(0) NUMBITS(1) [],
        SEQB_INTEN OFFSET(1) NUMBITS(1) [],
        OVR_INTEN OFFSET(2) NUMBITS(1) [],
        /// Two bits per channel, starting with channel 0
        ADCMPINTEN OFFSET(3) NUMBITS(24) []
    ],
    pub FLAGS [
        /// One bit per channel with a pending threshold event
        THCMP OFFSET(0) NUMBITS(12) [],
        /// One bit per channel with an overrun
        OVERRUN OFFSET(12) NUMBITS(12) [],
        SEQA_OVR OFFSET(24) NUMBITS(1) [],
        SEQB_OVR OFFSET(25) NUMBITS(1) [],
        SEQA_INT OFFSET(28) NUMBITS(1) [],
        SEQB_INT OFFSET(29) NUMBITS(1) [],
        THCMP_INT OFFSET(30) NUMBITS(1) [],
        OVR_INT OFFSET(31) NUMBITS(1) []
    ],
    pub TRM [
        /// Supply range, clear for 2.7 V to 3.6 V
        VRANGE OFFSET(5) NUMBITS(1) [
            HighVoltage = 0,
            LowVoltage = 1
        ]
    ]
];
