//! Normalization of native ADC results to the 16-bit sample space.

const MIN_BITS: u32 = 8;
const MAX_BITS: u32 = 16;

/// Widen a `bits`-deep conversion result to 16 bits.
///
/// Out of range results are clamped first; a single-ended SAADC conversion
/// reads slightly negative near 0 V. The value is then left-justified and the
/// top bits are repeated in the vacated low bits, so zero stays 0 and the
/// native full scale lands on exactly `u16::MAX`.
pub fn widen(raw: i32, bits: u32) -> u16 {
    let bits = bits.clamp(MIN_BITS, MAX_BITS);
    let max = (1i32 << bits) - 1;
    let value = raw.clamp(0, max) as u32;
    let shift = MAX_BITS - bits;
    if shift == 0 {
        return value as u16;
    }
    ((value << shift) | (value >> (bits - shift))) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_bit_end_points() {
        assert_eq!(widen(0, 12), 0);
        assert_eq!(widen(4095, 12), u16::MAX);
        assert_eq!(widen(2048, 12), 0x8008);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(widen(-3, 12), 0);
        assert_eq!(widen(5000, 12), u16::MAX);
        assert_eq!(widen(70_000, 16), u16::MAX);
    }

    #[test]
    fn other_depths() {
        assert_eq!(widen(255, 8), u16::MAX);
        assert_eq!(widen(0x80, 8), 0x8080);
        assert_eq!(widen(1023, 10), u16::MAX);
        assert_eq!(widen(1234, 16), 1234);
        // unsupported depths are treated as the nearest supported one
        assert_eq!(widen(255, 4), u16::MAX);
    }

    #[test]
    fn monotonic_over_native_range() {
        let mut previous = widen(0, 12);
        for raw in 1..4096 {
            let sample = widen(raw, 12);
            assert!(sample > previous);
            previous = sample;
        }
    }
}
