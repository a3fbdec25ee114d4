//! Conversion clock arithmetic
//!
//! A conversion takes 25 ADC clock cycles. The ADC clock is the reference
//! clock divided by an integer ratio, so the sample rate is
//! `reference / (ratio * 25)`.

use cast::{u32, u8};

use crate::time::Hertz;

/// ADC clock cycles per conversion
pub const CONVERSION_CYCLES: u32 = 25;

/// Highest sample rate with the converter clocked from the main clock
pub const MAX_SYNC_RATE: Hertz = Hertz(1_200_000);

/// Highest sample rate with the converter clocked asynchronously
pub const MAX_ASYNC_RATE: Hertz = Hertz(600_000);

/// Converter clock during self calibration
pub const CALIBRATION_CLOCK: Hertz = Hertz(500_000);

/// Largest ratio either divider can express
const MAX_RATIO: u32 = 256;

/// Integer ratio from `reference` to the ADC clock for `rate`
///
/// `rate` is clamped to `ceiling` first. The result is never zero, and the
/// rate it yields never exceeds `ceiling`.
pub fn divide_ratio(reference: Hertz, rate: Hertz, ceiling: Hertz) -> u32 {
    let rate = rate.min(ceiling);
    if rate.0 == 0 {
        return MAX_RATIO;
    }

    let cycles = u64::from(rate.0) * u64::from(CONVERSION_CYCLES);
    let mut ratio = (u64::from(reference.0) / cycles).max(1);

    // Flooring rounds the sample rate up, which may push it over the limit.
    let limit = u64::from(ceiling.0) * u64::from(CONVERSION_CYCLES);
    if u64::from(reference.0) > limit * ratio {
        ratio += 1;
    }

    ratio.min(u64::from(MAX_RATIO)) as u32
}

/// CTRL.CLKDIV value for synchronous mode, the ratio minus one
pub fn sync_divider(reference: Hertz, rate: Hertz) -> u8 {
    let ratio = divide_ratio(reference, rate, MAX_SYNC_RATE);
    u8(ratio - 1).unwrap_or(u8::MAX)
}

/// SYSCON ADCCLKDIV value for asynchronous mode, the ratio itself
pub fn async_divider(source: Hertz, rate: Hertz) -> u8 {
    let ratio = divide_ratio(source, rate, MAX_ASYNC_RATE);
    u8(ratio).unwrap_or(u8::MAX)
}

/// CTRL.CLKDIV value that runs calibration at about 500 kHz
pub fn calibration_divider(main: Hertz) -> u8 {
    let ratio = main.0 / CALIBRATION_CLOCK.0;
    u8(ratio.saturating_sub(1)).unwrap_or(u8::MAX)
}

/// Sample rate a reference clock and divide ratio produce
pub fn sample_rate(reference: Hertz, ratio: u32) -> Hertz {
    let cycles = u64::from(ratio.max(1)) * u64::from(CONVERSION_CYCLES);
    Hertz(u32(u64::from(reference.0) / cycles).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::U32Ext;

    #[test]
    fn floors_the_ratio() {
        // 24 MHz / (400 kHz * 25) = 2.4
        assert_eq!(divide_ratio(24.mhz(), 400.khz(), MAX_SYNC_RATE), 2);
        assert_eq!(sync_divider(24.mhz(), 400.khz()), 1);
    }

    #[test]
    fn slow_reference_gives_divider_zero() {
        assert_eq!(sync_divider(12.mhz(), 1_200.khz()), 0);
        assert_eq!(sample_rate(12.mhz(), 1), 480.khz());
    }

    #[test]
    fn rates_above_the_ceiling_are_clamped() {
        for &reference in &[12_000_000, 24_000_000, 30_000_000, 45_000_000, 60_000_000] {
            let reference = Hertz(reference);
            assert_eq!(
                sync_divider(reference, 5.mhz()),
                sync_divider(reference, MAX_SYNC_RATE)
            );
            assert_eq!(
                async_divider(reference, 1.mhz()),
                async_divider(reference, MAX_ASYNC_RATE)
            );
        }
    }

    #[test]
    fn effective_rate_never_exceeds_the_ceiling() {
        let mut reference = 1_000_000;
        while reference <= 100_000_000 {
            let mut rate = 0;
            while rate <= 2_000_000 {
                let sync = divide_ratio(Hertz(reference), Hertz(rate), MAX_SYNC_RATE);
                assert!(sample_rate(Hertz(reference), sync) <= MAX_SYNC_RATE);

                let async_ = divide_ratio(Hertz(reference), Hertz(rate), MAX_ASYNC_RATE);
                assert!(sample_rate(Hertz(reference), async_) <= MAX_ASYNC_RATE);

                rate += 50_000;
            }
            reference += 1_500_000;
        }
    }

    #[test]
    fn rounding_up_past_the_ceiling_bumps_the_ratio() {
        // 45 MHz / 30 MHz floors to 1, which would sample at 1.8 MHz
        assert_eq!(divide_ratio(45.mhz(), MAX_SYNC_RATE, MAX_SYNC_RATE), 2);
        assert_eq!(sample_rate(45.mhz(), 2), 900.khz());
    }

    #[test]
    fn zero_rate_selects_the_slowest_clock() {
        assert_eq!(sync_divider(30.mhz(), 0.hz()), u8::MAX);
        assert_eq!(async_divider(30.mhz(), 0.hz()), u8::MAX);
    }

    #[test]
    fn dividers_saturate() {
        assert_eq!(sync_divider(100.mhz(), 1.hz()), u8::MAX);
        assert_eq!(async_divider(100.mhz(), 1.hz()), u8::MAX);
    }

    #[test]
    fn sample_rate_of_the_largest_ratio() {
        assert_eq!(sample_rate(Hertz(1), u32::MAX), 0.hz());
        assert_eq!(sample_rate(Hertz(u32::MAX), u32::MAX), 0.hz());
        assert_eq!(sample_rate(100.mhz(), 0), 4.mhz());
    }

    #[test]
    fn calibration_clock() {
        assert_eq!(calibration_divider(12.mhz()), 23);
        assert_eq!(calibration_divider(30.mhz()), 59);
        assert_eq!(calibration_divider(100.khz()), 0);
        assert_eq!(calibration_divider(500.mhz()), u8::MAX);
    }
}
