use crate::ryu::d2s::{double_pow5_inv_split, double_pow5_split};

#[cfg(feature = "no-panic")]
use no_panic::no_panic;

#[inline]
fn pow5factor_32(mut value: u32) -> u32 {
    let mut count = 0u32;
    loop {
        debug_assert!(value != 0);
        let q = value / 5;
        let r = value % 5;
        if r != 0 {
            break;
        }
        value = q;
        count += 1;
    }
    count
}

// Returns true if value is divisible by 5^p.
#[inline]
pub(crate) fn multiple_of_power_of_5_32(value: u32, p: u32) -> bool {
    pow5factor_32(value) >= p
}

// Returns true if value is divisible by 2^p.
#[inline]
pub(crate) fn multiple_of_power_of_2_32(value: u32, p: u32) -> bool {
    debug_assert!(p < 32);
    value.trailing_zeros() >= p
}

// It seems to be slightly faster to avoid uint128_t here, although the
// generated code for uint128_t looks slightly nicer.
#[cfg_attr(feature = "no-panic", no_panic)]
#[inline]
fn mul_shift_32(m: u32, factor: u64, shift: i32) -> u32 {
    debug_assert!(shift > 32);

    // The casts here help MSVC to avoid calls to the __allmul library
    // function.
    let factor_lo = factor as u32;
    let factor_hi = (factor >> 32) as u32;
    let bits0 = m as u64 * factor_lo as u64;
    let bits1 = m as u64 * factor_hi as u64;

    let sum = (bits0 >> 32) + bits1;
    let shifted_sum = sum >> (shift - 32);
    debug_assert!(shifted_sum <= u32::MAX as u64);
    shifted_sum as u32
}

// The binary32 path reads the high half of the binary64 tables, which carry
// 125 - 64 = 61 significant bits.
#[inline]
pub(crate) fn mul_pow5_inv_div_pow2(m: u32, q: u32, j: i32) -> u32 {
    // The inverse multipliers are defined as [2^x / 5^y] + 1; the upper 64 bits
    // from the double lookup table are the correct bits for [2^x / 5^y], so we
    // have to add 1 here. Note that we rely on the fact that the added 1 that's
    // already stored in the table never overflows into the upper 64 bits.
    mul_shift_32(m, double_pow5_inv_split(q).1 + 1, j)
}

#[inline]
pub(crate) fn mul_pow5_div_pow2(m: u32, i: u32, j: i32) -> u32 {
    mul_shift_32(m, double_pow5_split(i).1, j)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_of_power_of_5_32() {
        assert!(multiple_of_power_of_5_32(125, 3));
        assert!(!multiple_of_power_of_5_32(125, 4));
        assert!(multiple_of_power_of_5_32(7, 0));
        assert!(multiple_of_power_of_5_32(1220703125, 13));
    }

    #[test]
    fn test_multiple_of_power_of_2_32() {
        assert!(multiple_of_power_of_2_32(96, 5));
        assert!(!multiple_of_power_of_2_32(96, 6));
        assert!(multiple_of_power_of_2_32(1 << 31, 31));
    }

    #[test]
    fn test_mul_shift_32() {
        // 3 * 2^62 >> 62
        assert_eq!(3, mul_shift_32(3, 1 << 62, 62));
        assert_eq!(6, mul_shift_32(3, 1 << 62, 61));
        assert_eq!(1, mul_shift_32(1 << 31, 1 << 33, 64));
    }
}
