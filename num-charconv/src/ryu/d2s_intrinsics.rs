#[cfg(feature = "no-panic")]
use no_panic::no_panic;

/// Full 128-bit product of two 64-bit integers, as `(low, high)`.
///
/// Every wider multiplication in the crate (`mul_shift_64`,
/// `mul_shift_mod1e9`, the small-table `compute_pow5`) is assembled from this
/// one primitive.
#[cfg_attr(feature = "no-panic", no_panic)]
#[inline]
pub(crate) fn umul128(a: u64, b: u64) -> (u64, u64) {
    let product = a as u128 * b as u128;
    (product as u64, (product >> 64) as u64)
}

/// Low 64 bits of the 128-bit value `hi:lo` shifted right by `dist`.
#[cfg_attr(feature = "no-panic", no_panic)]
#[inline]
pub(crate) fn shiftright128(lo: u64, hi: u64, dist: u32) -> u64 {
    // Callers shift by j - 64 with j < 128.
    debug_assert!(dist < 64);
    if dist == 0 {
        return lo;
    }
    (hi << (64 - dist)) | (lo >> dist)
}

#[inline]
pub(crate) fn div5(x: u64) -> u64 {
    x / 5
}

#[inline]
pub(crate) fn div10(x: u64) -> u64 {
    x / 10
}

#[inline]
pub(crate) fn div100(x: u64) -> u64 {
    x / 100
}

#[inline]
fn pow5_factor(mut value: u64) -> u32 {
    let mut count = 0u32;
    loop {
        debug_assert!(value != 0);
        let q = div5(value);
        let r = (value as u32).wrapping_sub(5u32.wrapping_mul(q as u32));
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
pub(crate) fn multiple_of_power_of_5(value: u64, p: u32) -> bool {
    // I tried a case distinction on p, but there was no performance difference.
    pow5_factor(value) >= p
}

// Returns true if value is divisible by 2^p.
#[inline]
pub(crate) fn multiple_of_power_of_2(value: u64, p: u32) -> bool {
    debug_assert!(value != 0);
    debug_assert!(p < 64);
    value.trailing_zeros() >= p
}

/// `(m * mul) >> j` where `mul` is a 128-bit table entry `(low, high)` and
/// `j >= 64`.
#[cfg_attr(feature = "no-panic", no_panic)]
#[inline]
pub(crate) fn mul_shift_64(m: u64, mul: &(u64, u64), j: u32) -> u64 {
    // m is maximum 55 bits
    let (low0, high0) = umul128(m, mul.0); // 64
    let (low1, high1) = umul128(m, mul.1); // 128
    let sum = high0.wrapping_add(low1);
    let high1 = high1 + (sum < high0) as u64; // overflow into high1
    shiftright128(sum, high1, j - 64)
}

/// Scales the lower bound, the value and the upper bound of the rounding
/// interval of `m` in one go. Returns `(vr, vp, vm)`.
#[inline]
pub(crate) fn mul_shift_all_64(
    m: u64,
    mul: &(u64, u64),
    j: u32,
    mm_shift: u32,
) -> (u64, u64, u64) {
    let vp = mul_shift_64(4 * m + 2, mul, j);
    let vm = mul_shift_64(4 * m - 1 - mm_shift as u64, mul, j);
    let vr = mul_shift_64(4 * m, mul, j);
    (vr, vp, vm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_umul128() {
        assert_eq!((1, 0), umul128(1, 1));
        assert_eq!((0, 1), umul128(1 << 32, 1 << 32));
        assert_eq!((1, u64::MAX - 1), umul128(u64::MAX, u64::MAX));
        assert_eq!(
            (0x0000_0000_0000_0000, 0x0000_0000_0000_0005),
            umul128(0xa000_0000_0000_0000, 8)
        );
    }

    #[test]
    fn test_shiftright128() {
        assert_eq!(0x1234, shiftright128(0x1234, 0xffff, 0));
        assert_eq!(0x8000_0000_0000_0000, shiftright128(0, 1, 1));
        assert_eq!(0x0000_0001_0000_0000, shiftright128(0, 1, 32));
        assert_eq!(0x2, shiftright128(0, 1, 63));
        assert_eq!(0xffff_ffff_ffff_ffff, shiftright128(u64::MAX, u64::MAX, 17));
    }

    #[test]
    fn test_multiple_of_power_of_2() {
        assert!(multiple_of_power_of_2(8, 0));
        assert!(multiple_of_power_of_2(8, 3));
        assert!(!multiple_of_power_of_2(8, 4));
        assert!(multiple_of_power_of_2(1 << 63, 63));
        assert!(!multiple_of_power_of_2(3, 1));
    }

    #[test]
    fn test_multiple_of_power_of_5() {
        assert!(multiple_of_power_of_5(1, 0));
        assert!(!multiple_of_power_of_5(1, 1));
        assert!(multiple_of_power_of_5(5, 1));
        assert!(multiple_of_power_of_5(25, 2));
        assert!(multiple_of_power_of_5(75, 2));
        assert!(!multiple_of_power_of_5(50, 3));
        assert!(multiple_of_power_of_5(7450580596923828125, 27));
        assert!(!multiple_of_power_of_5(7450580596923828126, 1));
    }

    #[test]
    fn test_mul_shift_64() {
        // 2^64 exactly, shifted back down.
        assert_eq!(3, mul_shift_64(3, &(0, 1), 64));
        assert_eq!(6, mul_shift_64(3, &(0, 2), 64));
        assert_eq!(3, mul_shift_64(6, &(0, 1), 65));
        assert_eq!(1, mul_shift_64(1 << 32, &(1 << 32, 0), 64));
    }
}
