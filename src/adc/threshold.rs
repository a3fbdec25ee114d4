//! Threshold comparison
//!
//! Every conversion result is compared against the low and high bounds of
//! the bank its channel is bound to. The comparison yields two independent
//! classifications: where the value lies relative to the band, and whether
//! it crossed the low bound since the previous conversion on that channel.

use tock_registers::LocalRegisterCopy;

use crate::pac::adc::DAT;

use super::Channels;

/// One of the two pairs of threshold bounds
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThresholdBank {
    Bank0 = 0,
    Bank1 = 1,
}

impl ThresholdBank {
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Which threshold events raise the threshold interrupt for a channel
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThresholdInterrupt {
    Disabled = 0,
    /// Every result below the low or above the high bound
    Outside = 1,
    /// Every result on the other side of the low bound than the previous one
    Crossing = 2,
}

/// Position of a result relative to the band
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Range {
    Inside,
    Below,
    Above,
}

/// Low bound crossing detected on a result
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Crossing {
    None,
    Downward,
    Upward,
}

/// Comparison outcome for one channel
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ComparisonResult {
    pub channel: u8,
    pub value: u16,
    pub range: Range,
    pub crossing: Crossing,
}

impl ComparisonResult {
    pub const fn empty() -> Self {
        ComparisonResult {
            channel: 0,
            value: 0,
            range: Range::Inside,
            crossing: Crossing::None,
        }
    }

    pub(crate) fn decode(channel: u8, data: LocalRegisterCopy<u32, DAT::Register>) -> Self {
        // The reserved encodings carry no event.
        let range = match data.read_as_enum::<DAT::THCMPRANGE::Value>(DAT::THCMPRANGE) {
            Some(DAT::THCMPRANGE::Value::Below) => Range::Below,
            Some(DAT::THCMPRANGE::Value::Above) => Range::Above,
            _ => Range::Inside,
        };
        let crossing = match data.read_as_enum::<DAT::THCMPCROSS::Value>(DAT::THCMPCROSS) {
            Some(DAT::THCMPCROSS::Value::Downward) => Crossing::Downward,
            Some(DAT::THCMPCROSS::Value::Upward) => Crossing::Upward,
            _ => Crossing::None,
        };

        ComparisonResult {
            channel,
            value: data.read(DAT::RESULT) as u16,
            range,
            crossing,
        }
    }
}

impl Default for ComparisonResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Bounds of a bank and the channels compared against it
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThresholdConfig {
    /// Low bound, 12 bits
    pub low: u16,
    /// High bound, 12 bits
    pub high: u16,
    pub channels: Channels,
    pub mode: ThresholdInterrupt,
}

impl ThresholdConfig {
    pub fn new(low: u16, high: u16) -> Self {
        ThresholdConfig {
            low,
            high,
            channels: Channels::new(),
            mode: ThresholdInterrupt::Disabled,
        }
    }

    pub fn channels(mut self, channels: impl Into<Channels>) -> Self {
        self.channels = channels.into();
        self
    }

    pub fn mode(mut self, mode: ThresholdInterrupt) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(value: u32) -> LocalRegisterCopy<u32, DAT::Register> {
        LocalRegisterCopy::new(value)
    }

    #[test]
    fn decodes_range_and_crossing_independently() {
        // Inside, crossing upward
        let result = ComparisonResult::decode(3, data((1000 << 4) | (3 << 18)));

        assert_eq!(result.channel, 3);
        assert_eq!(result.value, 1000);
        assert_eq!(result.range, Range::Inside);
        assert_eq!(result.crossing, Crossing::Upward);

        // Below, crossing downward
        let result = ComparisonResult::decode(0, data((100 << 4) | (1 << 16) | (2 << 18)));

        assert_eq!(result.range, Range::Below);
        assert_eq!(result.crossing, Crossing::Downward);
    }

    #[test]
    fn reserved_encodings_decode_as_no_event() {
        let raw = (3 << 16) | (1 << 18);
        let result = ComparisonResult::decode(0, data(raw));

        assert_eq!(result.range, Range::Inside);
        assert_eq!(result.crossing, Crossing::None);
    }

    #[test]
    fn result_field_is_twelve_bits() {
        let result = ComparisonResult::decode(11, data(0xFFFF_FFFF));
        assert_eq!(result.value, 0xFFF);
        assert_eq!(result.range, Range::Inside);
    }
}
