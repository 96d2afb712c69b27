use crate::ryu::common::{log10_pow2, log10_pow5, pow5bits};
use crate::ryu::d2s_intrinsics::{
    div10, div100, div5, mul_shift_all_64, multiple_of_power_of_2, multiple_of_power_of_5,
};

pub(crate) const DOUBLE_MANTISSA_BITS: u32 = 52;
pub(crate) const DOUBLE_EXPONENT_BITS: u32 = 11;
pub(crate) const DOUBLE_BIAS: i32 = 1023;
pub(crate) const DOUBLE_POW5_INV_BITCOUNT: i32 = 125;
pub(crate) const DOUBLE_POW5_BITCOUNT: i32 = 125;

cfg_if::cfg_if! {
    if #[cfg(feature = "small")] {
        use crate::ryu::d2s_small_table::{compute_inv_pow5, compute_pow5};

        /// 5^-i as a 128-bit fixed-point value, rounded up.
        #[inline]
        pub(crate) fn double_pow5_inv_split(i: u32) -> (u64, u64) {
            compute_inv_pow5(i)
        }

        /// 5^i as a 128-bit fixed-point value.
        #[inline]
        pub(crate) fn double_pow5_split(i: u32) -> (u64, u64) {
            compute_pow5(i)
        }
    } else {
        use crate::ryu::d2s_full_table::{DOUBLE_POW5_INV_SPLIT, DOUBLE_POW5_SPLIT};

        /// 5^-i as a 128-bit fixed-point value, rounded up.
        #[inline]
        pub(crate) fn double_pow5_inv_split(i: u32) -> (u64, u64) {
            debug_assert!((i as usize) < DOUBLE_POW5_INV_SPLIT.len());
            DOUBLE_POW5_INV_SPLIT[i as usize]
        }

        /// 5^i as a 128-bit fixed-point value.
        #[inline]
        pub(crate) fn double_pow5_split(i: u32) -> (u64, u64) {
            debug_assert!((i as usize) < DOUBLE_POW5_SPLIT.len());
            DOUBLE_POW5_SPLIT[i as usize]
        }
    }
}

#[inline]
pub(crate) fn decimal_length17(v: u64) -> u32 {
    // This is slightly faster than a loop.
    // The average output length is 16.38 digits, so we check high-to-low.
    // Function precondition: v is not an 18, 19, or 20-digit number.
    // (17 digits are sufficient for round-tripping.)
    debug_assert!(v < 100000000000000000);

    if v >= 10000000000000000 {
        17
    } else if v >= 1000000000000000 {
        16
    } else if v >= 100000000000000 {
        15
    } else if v >= 10000000000000 {
        14
    } else if v >= 1000000000000 {
        13
    } else if v >= 100000000000 {
        12
    } else if v >= 10000000000 {
        11
    } else if v >= 1000000000 {
        10
    } else if v >= 100000000 {
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

/// A floating decimal representing `mantissa * 10^exponent`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct FloatingDecimal64 {
    pub(crate) mantissa: u64,
    // Decimal exponent's range is -324 to 308
    // inclusive, and can fit in i16 if needed.
    pub(crate) exponent: i32,
}

/// Shortest round-tripping decimal for a finite, nonzero binary64 given by
/// its raw IEEE fields.
pub(crate) fn d2d(ieee_mantissa: u64, ieee_exponent: u32) -> FloatingDecimal64 {
    let (e2, m2) = if ieee_exponent == 0 {
        (
            // We subtract 2 so that the bounds computation has 2 additional bits.
            1 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32 - 2,
            ieee_mantissa,
        )
    } else {
        (
            ieee_exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32 - 2,
            (1u64 << DOUBLE_MANTISSA_BITS) | ieee_mantissa,
        )
    };
    let even = (m2 & 1) == 0;
    let accept_bounds = even;

    // Step 2: Determine the interval of valid decimal representations.
    let mv = 4 * m2;
    // Implicit bool -> int conversion. True is 1, false is 0.
    let mm_shift = (ieee_mantissa != 0 || ieee_exponent <= 1) as u32;
    // We would compute mp and mm like this:
    // uint64_t mp = 4 * m2 + 2;
    // uint64_t mm = mv - 1 - mm_shift;

    // Step 3: Convert to a decimal power base using 128-bit arithmetic.
    let mut vr: u64;
    let mut vp: u64;
    let mut vm: u64;
    let e10: i32;
    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;
    if e2 >= 0 {
        // I tried special-casing q == 0, but there was no effect on performance.
        // This expression is slightly faster than max(0, log10Pow2(e2) - 1).
        let q = log10_pow2(e2) - (e2 > 3) as u32;
        e10 = q as i32;
        let k = DOUBLE_POW5_INV_BITCOUNT + pow5bits(q as i32) - 1;
        let i = -e2 + q as i32 + k;
        (vr, vp, vm) = mul_shift_all_64(m2, &double_pow5_inv_split(q), i as u32, mm_shift);
        if q <= 21 {
            // This should use q <= 22, but I think 21 is also safe. Smaller values
            // may still be safe, but it's more difficult to reason about them.
            // Only one of mp, mv, and mm can be a multiple of 5, if any.
            let mv_mod5 = (mv as u32).wrapping_sub(5u32.wrapping_mul(div5(mv) as u32));
            if mv_mod5 == 0 {
                vr_is_trailing_zeros = multiple_of_power_of_5(mv, q);
            } else if accept_bounds {
                // Same as min(e2 + (~mm & 1), pow5Factor(mm)) >= q
                // <=> e2 + (~mm & 1) >= q && pow5Factor(mm) >= q
                // <=> true && pow5Factor(mm) >= q, since e2 >= q.
                vm_is_trailing_zeros = multiple_of_power_of_5(mv - 1 - mm_shift as u64, q);
            } else {
                // Same as min(e2 + 1, pow5Factor(mp)) >= q.
                vp -= multiple_of_power_of_5(mv + 2, q) as u64;
            }
        }
    } else {
        // This expression is slightly faster than max(0, log10Pow5(-e2) - 1).
        let q = log10_pow5(-e2) - (-e2 > 1) as u32;
        e10 = q as i32 + e2;
        let i = -e2 - q as i32;
        let k = pow5bits(i) - DOUBLE_POW5_BITCOUNT;
        let j = q as i32 - k;
        (vr, vp, vm) = mul_shift_all_64(m2, &double_pow5_split(i as u32), j as u32, mm_shift);
        if q <= 1 {
            // {vr,vp,vm} is trailing zeros if {mv,mp,mm} has at least q trailing 0 bits.
            // mv = 4 * m2, so it always has at least two trailing 0 bits.
            vr_is_trailing_zeros = true;
            if accept_bounds {
                // mm = mv - 1 - mm_shift, so it has 1 trailing 0 bit iff mm_shift == 1.
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                // mp = mv + 2, so it always has at least one trailing 0 bit.
                vp -= 1;
            }
        } else if q < 63 {
            // We want to know if the full product has at least q trailing zeros.
            // We need to compute min(p2(mv), p5(mv) - e2) >= q
            // <=> p2(mv) >= q (because -e2 >= q)
            vr_is_trailing_zeros = multiple_of_power_of_2(mv, q);
        }
    }

    // Step 4: Find the shortest decimal representation in the interval of valid representations.
    let mut removed = 0i32;
    let mut last_removed_digit = 0u8;
    // On average, we remove ~2 digits.
    let output = if vm_is_trailing_zeros || vr_is_trailing_zeros {
        // General case, which happens rarely (~0.7%).
        loop {
            let vp_div10 = div10(vp);
            let vm_div10 = div10(vm);
            if vp_div10 <= vm_div10 {
                break;
            }
            let vm_mod10 = (vm as u32).wrapping_sub(10u32.wrapping_mul(vm_div10 as u32));
            let vr_div10 = div10(vr);
            let vr_mod10 = (vr as u32).wrapping_sub(10u32.wrapping_mul(vr_div10 as u32));
            vm_is_trailing_zeros &= vm_mod10 == 0;
            vr_is_trailing_zeros &= last_removed_digit == 0;
            last_removed_digit = vr_mod10 as u8;
            vr = vr_div10;
            vp = vp_div10;
            vm = vm_div10;
            removed += 1;
        }
        if vm_is_trailing_zeros {
            loop {
                let vm_div10 = div10(vm);
                let vm_mod10 = (vm as u32).wrapping_sub(10u32.wrapping_mul(vm_div10 as u32));
                if vm_mod10 != 0 {
                    break;
                }
                let vp_div10 = div10(vp);
                let vr_div10 = div10(vr);
                let vr_mod10 = (vr as u32).wrapping_sub(10u32.wrapping_mul(vr_div10 as u32));
                vr_is_trailing_zeros &= last_removed_digit == 0;
                last_removed_digit = vr_mod10 as u8;
                vr = vr_div10;
                vp = vp_div10;
                vm = vm_div10;
                removed += 1;
            }
        }
        if vr_is_trailing_zeros && last_removed_digit == 5 && vr % 2 == 0 {
            // Round even if the exact number is .....50..0.
            last_removed_digit = 4;
        }
        // We need to take vr + 1 if vr is outside bounds or we need to round up.
        vr + ((vr == vm && (!accept_bounds || !vm_is_trailing_zeros)) || last_removed_digit >= 5)
            as u64
    } else {
        // Specialized for the common case (~99.3%). Percentages below are relative to this.
        let mut round_up = false;
        let vp_div100 = div100(vp);
        let vm_div100 = div100(vm);
        // Optimization: remove two digits at a time (~86.2%).
        if vp_div100 > vm_div100 {
            let vr_div100 = div100(vr);
            let vr_mod100 = (vr as u32).wrapping_sub(100u32.wrapping_mul(vr_div100 as u32));
            round_up = vr_mod100 >= 50;
            vr = vr_div100;
            vp = vp_div100;
            vm = vm_div100;
            removed += 2;
        }
        // Loop iterations below (approximately), without optimization above:
        // 0: 0.03%, 1: 13.8%, 2: 70.6%, 3: 14.0%, 4: 1.40%, 5: 0.14%, 6+: 0.02%
        // Loop iterations below (approximately), with optimization above:
        // 0: 70.6%, 1: 27.8%, 2: 1.40%, 3: 0.14%, 4+: 0.02%
        loop {
            let vp_div10 = div10(vp);
            let vm_div10 = div10(vm);
            if vp_div10 <= vm_div10 {
                break;
            }
            let vr_div10 = div10(vr);
            let vr_mod10 = (vr as u32).wrapping_sub(10u32.wrapping_mul(vr_div10 as u32));
            round_up = vr_mod10 >= 5;
            vr = vr_div10;
            vp = vp_div10;
            vm = vm_div10;
            removed += 1;
        }
        // We need to take vr + 1 if vr is outside bounds or we need to round up.
        vr + (vr == vm || round_up) as u64
    };
    let exp = e10 + removed;

    FloatingDecimal64 {
        exponent: exp,
        mantissa: output,
    }
}

/// Fast path for doubles that are integers in `[1, 2^53]`: the value is its
/// own shortest representation once trailing decimal zeros are folded into
/// the exponent.
#[inline]
pub(crate) fn d2d_small_int(ieee_mantissa: u64, ieee_exponent: u32) -> Option<FloatingDecimal64> {
    let m2 = (1u64 << DOUBLE_MANTISSA_BITS) | ieee_mantissa;
    let e2 = ieee_exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32;

    if e2 > 0 {
        // f = m2 * 2^e2 >= 2^53 is an integer.
        // Ignore this case for now.
        return None;
    }

    if e2 < -52 {
        // f < 1.
        return None;
    }

    // Since 2^52 <= m2 < 2^53 and 0 <= -e2 <= 52: 1 <= f = m2 / 2^-e2 < 2^53.
    // Test if the lower -e2 bits of the significand are 0, i.e. whether the fraction is 0.
    let mask = (1u64 << -e2) - 1;
    let fraction = m2 & mask;
    if fraction != 0 {
        return None;
    }

    // f is an integer in the range [1, 2^53).
    // Note: mantissa might contain trailing (decimal) 0's.
    // Note: since 2^53 < 10^16, there is no need to adjust decimalLength17().
    let mut v = FloatingDecimal64 {
        mantissa: m2 >> -e2,
        exponent: 0,
    };
    loop {
        let q = div10(v.mantissa);
        let r = (v.mantissa as u32).wrapping_sub(10u32.wrapping_mul(q as u32));
        if r != 0 {
            break;
        }
        v.mantissa = q;
        v.exponent += 1;
    }
    Some(v)
}

/// Shortest decimal for a finite, nonzero binary64: the small-integer fast
/// path when it applies, the full interval search otherwise.
#[inline]
pub(crate) fn shortest64(ieee_mantissa: u64, ieee_exponent: u32) -> FloatingDecimal64 {
    match d2d_small_int(ieee_mantissa, ieee_exponent) {
        Some(v) => v,
        None => d2d(ieee_mantissa, ieee_exponent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(f: f64) -> (u64, u32) {
        let bits = f.to_bits();
        let mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
        let exponent = (bits >> DOUBLE_MANTISSA_BITS) as u32 & ((1u32 << DOUBLE_EXPONENT_BITS) - 1);
        (mantissa, exponent)
    }

    fn shortest(f: f64) -> (u64, i32) {
        let (mantissa, exponent) = decode(f);
        let v = shortest64(mantissa, exponent);
        (v.mantissa, v.exponent)
    }

    #[test]
    fn test_decimal_length17() {
        assert_eq!(1, decimal_length17(0));
        assert_eq!(1, decimal_length17(1));
        assert_eq!(9, decimal_length17(123456789));
        assert_eq!(16, decimal_length17(9007199254740992));
        assert_eq!(17, decimal_length17(17976931348623157));
    }

    #[test]
    fn test_basic() {
        assert_eq!((1, 0), shortest(1.0));
        assert_eq!((3, -1), shortest(0.3));
        assert_eq!((1234, -3), shortest(1.234));
        assert_eq!((1, 23), shortest(1e23));
        assert_eq!((5, -324), shortest(5e-324));
        assert_eq!((17976931348623157, 292), shortest(f64::MAX));
        assert_eq!((22250738585072014, -324), shortest(f64::MIN_POSITIVE));
    }

    #[test]
    fn test_small_integers() {
        assert_eq!(Some(FloatingDecimal64 { mantissa: 1729, exponent: 2 }), {
            let (m, e) = decode(172900.0);
            d2d_small_int(m, e)
        });
        let (m, e) = decode(0.5);
        assert_eq!(None, d2d_small_int(m, e));
        let (m, e) = decode(9007199254740992.0);
        assert_eq!(None, d2d_small_int(m, e));
        assert_eq!((9007199254740991, 0), shortest(9007199254740991.0));
        assert_eq!((1, 15), shortest(1e15));
    }

    #[test]
    fn test_small_int_agrees_with_d2d() {
        for &f in &[1.0, 2.0, 10.0, 100.0, 1729.0, 123456789.0, 4503599627370496.0] {
            let (m, e) = decode(f);
            let fast = d2d_small_int(m, e).unwrap();
            assert_eq!(fast, d2d(m, e), "{}", f);
        }
    }

    #[test]
    fn test_halfway_and_boundaries() {
        // 2^-1074 * k and power-of-two boundaries exercise the asymmetric interval.
        assert_eq!((1, -323), shortest(1e-323));
        assert_eq!((9007199254740992, 0), shortest(9007199254740992.0));
        assert_eq!((4294967296, 0), shortest(4294967296.0));
        assert_eq!((2, 0), shortest(2.0));
        assert_eq!((9007199254740994, 0), shortest(9007199254740994.0));
    }
}
