#[cfg(feature = "no-panic")]
use no_panic::no_panic;

/// Number of decimal digits in `v`, which must be below 10^9.
#[inline]
pub(crate) fn decimal_length9(v: u32) -> u32 {
    // Function precondition: v is not a 10-digit number.
    // (f2s: 9 digits are sufficient for round-tripping.)
    // (d2fixed: We print 9-digit blocks.)
    debug_assert!(v < 1000000000);

    if v >= 100000000 {
        9
    } else if v >= 10000000 {
        8
    } else if v >= 1000000 {
        7
    } else if v >= 100000 {
        6
    } else if v >= 10000 {
        5
    } else if v >= 1000 {
        4
    } else if v >= 100 {
        3
    } else if v >= 10 {
        2
    } else {
        1
    }
}

// Returns e == 0 ? 1 : ceil(log_2(5^e)); requires 0 <= e <= 3528.
#[cfg_attr(feature = "no-panic", no_panic)]
#[inline]
pub(crate) fn pow5bits(e: i32) -> i32 {
    // This approximation works up to the point that the multiplication
    // overflows at e = 3529. If the multiplication were done in 64 bits, it
    // would fail at 5^4004 which is just greater than 2^9297.
    debug_assert!(e >= 0);
    debug_assert!(e <= 3528);
    (((e as u32 * 1217359) >> 19) + 1) as i32
}

// Returns floor(log_10(2^e)); requires 0 <= e <= 1650.
#[cfg_attr(feature = "no-panic", no_panic)]
#[inline]
pub(crate) fn log10_pow2(e: i32) -> u32 {
    // The first value this approximation fails for is 2^1651 which is just
    // greater than 10^297.
    debug_assert!(e >= 0);
    debug_assert!(e <= 1650);
    (e as u32 * 78913) >> 18
}

// Returns floor(log_10(5^e)); requires 0 <= e <= 2620.
#[cfg_attr(feature = "no-panic", no_panic)]
#[inline]
pub(crate) fn log10_pow5(e: i32) -> u32 {
    // The first value this approximation fails for is 5^2621 which is just
    // greater than 10^1832.
    debug_assert!(e >= 0);
    debug_assert!(e <= 2620);
    (e as u32 * 732923) >> 20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_length9() {
        assert_eq!(1, decimal_length9(0));
        assert_eq!(1, decimal_length9(9));
        assert_eq!(2, decimal_length9(10));
        assert_eq!(5, decimal_length9(99999));
        assert_eq!(6, decimal_length9(100000));
        assert_eq!(9, decimal_length9(100000000));
        assert_eq!(9, decimal_length9(999999999));
    }

    #[test]
    fn test_pow5bits() {
        assert_eq!(1, pow5bits(0));
        assert_eq!(3, pow5bits(1));
        assert_eq!(5, pow5bits(2));
        assert_eq!(7, pow5bits(3));
        assert_eq!(10, pow5bits(4));
        assert_eq!(8192, pow5bits(3528));
    }

    #[test]
    fn test_log10_pow2() {
        assert_eq!(0, log10_pow2(0));
        assert_eq!(0, log10_pow2(1));
        assert_eq!(0, log10_pow2(2));
        assert_eq!(0, log10_pow2(3));
        assert_eq!(1, log10_pow2(4));
        assert_eq!(496, log10_pow2(1650));
    }

    #[test]
    fn test_log10_pow5() {
        assert_eq!(0, log10_pow5(0));
        assert_eq!(0, log10_pow5(1));
        assert_eq!(1, log10_pow5(2));
        assert_eq!(2, log10_pow5(3));
        assert_eq!(2, log10_pow5(4));
        assert_eq!(1831, log10_pow5(2620));
    }
}
