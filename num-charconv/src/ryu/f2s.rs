use crate::ryu::common::{log10_pow2, log10_pow5, pow5bits};
use crate::ryu::d2s::{DOUBLE_POW5_BITCOUNT, DOUBLE_POW5_INV_BITCOUNT};
use crate::ryu::f2s_intrinsics::{
    mul_pow5_div_pow2, mul_pow5_inv_div_pow2, multiple_of_power_of_2_32,
    multiple_of_power_of_5_32,
};

pub(crate) const FLOAT_MANTISSA_BITS: u32 = 23;
pub(crate) const FLOAT_EXPONENT_BITS: u32 = 8;
pub(crate) const FLOAT_BIAS: i32 = 127;
const FLOAT_POW5_INV_BITCOUNT: i32 = DOUBLE_POW5_INV_BITCOUNT - 64;
const FLOAT_POW5_BITCOUNT: i32 = DOUBLE_POW5_BITCOUNT - 64;

/// A floating decimal representing `mantissa * 10^exponent`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct FloatingDecimal32 {
    pub(crate) mantissa: u32,
    // Decimal exponent's range is -45 to 38
    // inclusive, and can fit in i16 if needed.
    pub(crate) exponent: i32,
}

/// Shortest round-tripping decimal for a finite, nonzero binary32 given by
/// its raw IEEE fields.
pub(crate) fn f2d(ieee_mantissa: u32, ieee_exponent: u32) -> FloatingDecimal32 {
    let (e2, m2) = if ieee_exponent == 0 {
        (
            // We subtract 2 so that the bounds computation has 2 additional bits.
            1 - FLOAT_BIAS - FLOAT_MANTISSA_BITS as i32 - 2,
            ieee_mantissa,
        )
    } else {
        (
            ieee_exponent as i32 - FLOAT_BIAS - FLOAT_MANTISSA_BITS as i32 - 2,
            (1u32 << FLOAT_MANTISSA_BITS) | ieee_mantissa,
        )
    };
    let even = (m2 & 1) == 0;
    let accept_bounds = even;

    // Step 2: Determine the interval of valid decimal representations.
    let mv = 4 * m2;
    let mp = 4 * m2 + 2;
    // Implicit bool -> int conversion. True is 1, false is 0.
    let mm_shift = (ieee_mantissa != 0 || ieee_exponent <= 1) as u32;
    let mm = 4 * m2 - 1 - mm_shift;

    // Step 3: Convert to a decimal power base using 64-bit arithmetic.
    let mut vr: u32;
    let mut vp: u32;
    let mut vm: u32;
    let e10: i32;
    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;
    let mut last_removed_digit = 0u8;
    if e2 >= 0 {
        let q = log10_pow2(e2);
        e10 = q as i32;
        let k = FLOAT_POW5_INV_BITCOUNT + pow5bits(q as i32) - 1;
        let i = -e2 + q as i32 + k;
        vr = mul_pow5_inv_div_pow2(mv, q, i);
        vp = mul_pow5_inv_div_pow2(mp, q, i);
        vm = mul_pow5_inv_div_pow2(mm, q, i);
        if q != 0 && (vp - 1) / 10 <= vm / 10 {
            // We need to know one removed digit even if we are not going to loop
            // below. We could use q = X - 1 above, except that would require 33
            // bits for the result, and we've found that 32-bit arithmetic is
            // faster even on 64-bit machines.
            let l = FLOAT_POW5_INV_BITCOUNT + pow5bits(q as i32 - 1) - 1;
            last_removed_digit =
                (mul_pow5_inv_div_pow2(mv, q - 1, -e2 + q as i32 - 1 + l) % 10) as u8;
        }
        if q <= 9 {
            // The largest power of 5 that fits in 24 bits is 5^10, but q <= 9
            // seems to be safe as well. Only one of mp, mv, and mm can be a
            // multiple of 5, if any.
            if mv % 5 == 0 {
                vr_is_trailing_zeros = multiple_of_power_of_5_32(mv, q);
            } else if accept_bounds {
                vm_is_trailing_zeros = multiple_of_power_of_5_32(mm, q);
            } else {
                vp -= multiple_of_power_of_5_32(mp, q) as u32;
            }
        }
    } else {
        let q = log10_pow5(-e2);
        e10 = q as i32 + e2;
        let i = -e2 - q as i32;
        let k = pow5bits(i) - FLOAT_POW5_BITCOUNT;
        let mut j = q as i32 - k;
        vr = mul_pow5_div_pow2(mv, i as u32, j);
        vp = mul_pow5_div_pow2(mp, i as u32, j);
        vm = mul_pow5_div_pow2(mm, i as u32, j);
        if q != 0 && (vp - 1) / 10 <= vm / 10 {
            j = q as i32 - 1 - (pow5bits(i + 1) - FLOAT_POW5_BITCOUNT);
            last_removed_digit = (mul_pow5_div_pow2(mv, (i + 1) as u32, j) % 10) as u8;
        }
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
        } else if q < 31 {
            vr_is_trailing_zeros = multiple_of_power_of_2_32(mv, q - 1);
        }
    }

    // Step 4: Find the shortest decimal representation in the interval of valid representations.
    let mut removed = 0i32;
    let output = if vm_is_trailing_zeros || vr_is_trailing_zeros {
        // General case, which happens rarely (~4.0%).
        while vp / 10 > vm / 10 {
            vm_is_trailing_zeros &= vm % 10 == 0;
            vr_is_trailing_zeros &= last_removed_digit == 0;
            last_removed_digit = (vr % 10) as u8;
            vr /= 10;
            vp /= 10;
            vm /= 10;
            removed += 1;
        }
        if vm_is_trailing_zeros {
            while vm % 10 == 0 {
                vr_is_trailing_zeros &= last_removed_digit == 0;
                last_removed_digit = (vr % 10) as u8;
                vr /= 10;
                vp /= 10;
                vm /= 10;
                removed += 1;
            }
        }
        if vr_is_trailing_zeros && last_removed_digit == 5 && vr % 2 == 0 {
            // Round even if the exact number is .....50..0.
            last_removed_digit = 4;
        }
        // We need to take vr + 1 if vr is outside bounds or we need to round up.
        vr + ((vr == vm && (!accept_bounds || !vm_is_trailing_zeros)) || last_removed_digit >= 5)
            as u32
    } else {
        // Specialized for the common case (~96.0%). Percentages below are relative to this.
        // Loop iterations below (approximately):
        // 0: 13.6%, 1: 70.7%, 2: 14.1%, 3: 1.39%, 4: 0.14%, 5+: 0.01%
        while vp / 10 > vm / 10 {
            last_removed_digit = (vr % 10) as u8;
            vr /= 10;
            vp /= 10;
            vm /= 10;
            removed += 1;
        }
        // We need to take vr + 1 if vr is outside bounds or we need to round up.
        vr + (vr == vm || last_removed_digit >= 5) as u32
    };
    let exp = e10 + removed;

    FloatingDecimal32 {
        exponent: exp,
        mantissa: output,
    }
}

/// Fast path for floats that are integers in `[1, 2^24]`.
#[inline]
pub(crate) fn f2d_small_int(ieee_mantissa: u32, ieee_exponent: u32) -> Option<FloatingDecimal32> {
    let m2 = (1u32 << FLOAT_MANTISSA_BITS) | ieee_mantissa;
    let e2 = ieee_exponent as i32 - FLOAT_BIAS - FLOAT_MANTISSA_BITS as i32;

    if e2 > 0 || e2 < -(FLOAT_MANTISSA_BITS as i32) {
        return None;
    }

    // Test if the lower -e2 bits of the significand are 0, i.e. whether the fraction is 0.
    let mask = (1u32 << -e2) - 1;
    if m2 & mask != 0 {
        return None;
    }

    let mut v = FloatingDecimal32 {
        mantissa: m2 >> -e2,
        exponent: 0,
    };
    while v.mantissa % 10 == 0 {
        v.mantissa /= 10;
        v.exponent += 1;
    }
    Some(v)
}

/// Shortest decimal for a finite, nonzero binary32.
#[inline]
pub(crate) fn shortest32(ieee_mantissa: u32, ieee_exponent: u32) -> FloatingDecimal32 {
    match f2d_small_int(ieee_mantissa, ieee_exponent) {
        Some(v) => v,
        None => f2d(ieee_mantissa, ieee_exponent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortest(f: f32) -> (u32, i32) {
        let bits = f.to_bits();
        let mantissa = bits & ((1u32 << FLOAT_MANTISSA_BITS) - 1);
        let exponent = (bits >> FLOAT_MANTISSA_BITS) & ((1u32 << FLOAT_EXPONENT_BITS) - 1);
        let v = shortest32(mantissa, exponent);
        (v.mantissa, v.exponent)
    }

    #[test]
    fn test_basic() {
        assert_eq!((1, 0), shortest(1.0));
        assert_eq!((1, -1), shortest(0.1));
        assert_eq!((3, -1), shortest(0.3));
        assert_eq!((1234, -3), shortest(1.234));
        assert_eq!((1, -45), shortest(1e-45));
        assert_eq!((34028235, 31), shortest(f32::MAX));
        assert_eq!((11754944, -45), shortest(f32::MIN_POSITIVE));
    }

    #[test]
    fn test_small_integers() {
        assert_eq!((16777215, 0), shortest(16777215.0));
        assert_eq!((1729, 2), shortest(172900.0));
        assert_eq!((16777216, 0), shortest(16777216.0));
        assert_eq!((1, 7), shortest(1e7));
    }

    #[test]
    fn test_boundaries() {
        assert_eq!((33554432, 0), shortest(33554432.0));
        assert_eq!((8388608, 0), shortest(8388608.0));
        assert_eq!((5, -1), shortest(0.5));
        assert_eq!((61035156, -12), shortest(6.103515625e-5));
    }
}
