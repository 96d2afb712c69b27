//! Exactly rounded `%.Nf` and `%.Ne` renderings of binary64 values.
//!
//! The digits are produced 9 at a time from precomputed multipliers of
//! `10^(9i) / 2^k` and `2^k / 10^(9i)`, so arbitrary precision costs only a
//! few multiplications per block. Ties round to even.

use crate::error::Error;
use crate::output::Output;
use crate::ryu::common::{decimal_length9, log10_pow2};
use crate::ryu::d2fixed_full_table::{
    ADDITIONAL_BITS_2, MIN_BLOCK_2, POW10_OFFSET, POW10_OFFSET_2, POW10_SPLIT, POW10_SPLIT_2,
};
use crate::ryu::d2s::{DOUBLE_BIAS, DOUBLE_EXPONENT_BITS, DOUBLE_MANTISSA_BITS};
use crate::ryu::d2s_intrinsics::{multiple_of_power_of_2, multiple_of_power_of_5, umul128};
use crate::ryu::pretty::{
    append_c_digits, append_d_digits, append_nine_digits, exponent_len, write_exponent,
    write_mantissa,
};

const POW10_ADDITIONAL_BITS: i32 = 120;

// The second-half loop in d2exp never needs more blocks than this.
const MAX_FRACTION_BLOCKS: usize = 200;

#[inline]
fn mod1e9(x: u64) -> u64 {
    x % 1_000_000_000
}

/// `((m * mul) >> j) % 10^9` where `mul` holds 192 bits, low word first.
fn mul_shift_mod1e9(m: u64, mul: &[u64; 3], j: i32) -> u32 {
    let (_, high0) = umul128(m, mul[0]); // 0
    let (low1, high1) = umul128(m, mul[1]); // 64
    let (low2, high2) = umul128(m, mul[2]); // 128
    let s0high = low1.wrapping_add(high0); // 64
    let c1 = (s0high < low1) as u64;
    let s1low = low2.wrapping_add(high1).wrapping_add(c1); // 128
    // high1 + c1 can't overflow, so compare against low2
    let c2 = (s1low < low2) as u64;
    let s1high = high2.wrapping_add(c2); // 192
    debug_assert!((128..=180).contains(&j));
    if j < 160 {
        // j: [128, 160)
        let r0 = mod1e9(s1high);
        let r1 = mod1e9((r0 << 32) | (s1low >> 32));
        let r2 = (r1 << 32) | (s1low & 0xffff_ffff);
        mod1e9(r2 >> (j - 128)) as u32
    } else {
        // j: [160, 192)
        let r0 = mod1e9(s1high);
        let r1 = (r0 << 32) | (s1low >> 32);
        mod1e9(r1 >> (j - 160)) as u32
    }
}

#[inline]
fn index_for_exponent(e: i32) -> usize {
    ((e + 15) / 16) as usize
}

#[inline]
fn pow10_bits_for_index(idx: usize) -> i32 {
    16 * idx as i32 + POW10_ADDITIONAL_BITS
}

#[inline]
fn length_for_index(idx: usize) -> usize {
    // +1 for ceil, +16 for mantissa, +8 to round up when dividing by 9
    (log10_pow2(16 * idx as i32) as usize + 1 + 16 + 8) / 9
}

/// How the digits already written react to the discarded tail.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum RoundUp {
    No,
    Always,
    /// The tail is exactly one half: round to even.
    IfOdd,
}

impl RoundUp {
    fn from_tail(last_digit: u32, exact_half: impl FnOnce() -> bool) -> RoundUp {
        if last_digit != 5 {
            if last_digit > 5 {
                RoundUp::Always
            } else {
                RoundUp::No
            }
        } else if exact_half() {
            RoundUp::IfOdd
        } else {
            RoundUp::Always
        }
    }
}

/// Adds one unit in the last place to the ASCII digits in `digits`, which may
/// contain a single `.`. Returns true if the carry ran past the first digit;
/// every digit is then `0` except the first, which becomes `1`. With
/// `shift_dot`, the point also moves one place right to keep the value.
fn propagate_round_up(digits: &mut [u8], mut round_up: RoundUp, shift_dot: bool) -> bool {
    let mut dot_index = None;
    for index in (0..digits.len()).rev() {
        match digits[index] {
            b'.' => dot_index = Some(index),
            b'9' => {
                digits[index] = b'0';
                round_up = RoundUp::Always;
            }
            c => {
                if round_up == RoundUp::IfOdd && c % 2 == 0 {
                    return false;
                }
                digits[index] = c + 1;
                return false;
            }
        }
    }
    digits[0] = b'1';
    if shift_dot {
        if let Some(dot) = dot_index {
            digits[dot] = b'0';
            digits[dot + 1] = b'.';
        }
    }
    true
}

#[inline]
fn decode(f: f64) -> (u64, i32) {
    let bits = f.to_bits();
    let ieee_mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
    let ieee_exponent =
        ((bits >> DOUBLE_MANTISSA_BITS) & ((1u64 << DOUBLE_EXPONENT_BITS) - 1)) as u32;
    if ieee_exponent == 0 {
        (ieee_mantissa, 1 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32)
    } else {
        (
            (1u64 << DOUBLE_MANTISSA_BITS) | ieee_mantissa,
            ieee_exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32,
        )
    }
}

/// Writes a finite, non-negative `f` with exactly `precision` digits after
/// the decimal point, like `printf("%.*f")`.
pub(crate) fn d2fixed(out: &mut Output<'_>, f: f64, precision: usize) -> Result<(), Error> {
    if f.to_bits() == 0 {
        out.push(b'0')?;
        if precision > 0 {
            out.push(b'.')?;
            out.fill(b'0', precision)?;
        }
        return Ok(());
    }

    let (m2, e2) = decode(f);
    let digits_start = out.len();

    // Integral part.
    let mut nonzero = false;
    if e2 >= -52 {
        let idx = if e2 < 0 { 0 } else { index_for_exponent(e2) };
        let p10_bits = pow10_bits_for_index(idx);
        let offset = POW10_OFFSET[idx] as usize;
        for i in (0..length_for_index(idx)).rev() {
            let j = p10_bits - e2;
            // Shifting by 8 keeps j at 128 or above.
            let digits = mul_shift_mod1e9(m2 << 8, &POW10_SPLIT[offset + i], j + 8);
            if nonzero {
                append_nine_digits(digits, out.reserve(9)?);
            } else if digits != 0 {
                let olength = decimal_length9(digits) as usize;
                write_mantissa(digits, out.reserve(olength)?);
                nonzero = true;
            }
        }
    }
    if !nonzero {
        out.push(b'0')?;
    }
    if precision > 0 {
        out.push(b'.')?;
    }
    if e2 >= 0 {
        return out.fill(b'0', precision);
    }

    // Fractional part.
    let idx = (-e2 / 16) as usize;
    let min_block = MIN_BLOCK_2[idx] as usize;
    let blocks = precision / 9 + 1;
    let mut round_up = RoundUp::No;
    let mut i = 0;
    if blocks <= min_block {
        i = blocks;
        out.fill(b'0', precision)?;
    } else if i < min_block {
        i = min_block;
        out.fill(b'0', 9 * i)?;
    }
    while i < blocks {
        let j = ADDITIONAL_BITS_2 as i32 + (-e2 - 16 * idx as i32);
        let p = POW10_OFFSET_2[idx] as usize + i - min_block;
        if p >= POW10_OFFSET_2[idx + 1] as usize {
            // The remaining digits are all zero; no rounding required.
            out.fill(b'0', precision - 9 * i)?;
            break;
        }
        let mut digits = mul_shift_mod1e9(m2 << 8, &POW10_SPLIT_2[p], j + 8);
        if i < blocks - 1 {
            append_nine_digits(digits, out.reserve(9)?);
        } else {
            let maximum = precision - 9 * i;
            let mut last_digit = 0;
            for _ in 0..9 - maximum {
                last_digit = digits % 10;
                digits /= 10;
            }
            round_up = RoundUp::from_tail(last_digit, || {
                // Is m2 * 10^(precision + 1) / 2^(-e2) an integer?
                let required_twos = -(e2 as i64) - precision as i64 - 1;
                required_twos <= 0
                    || (required_twos < 60 && multiple_of_power_of_2(m2, required_twos as u32))
            });
            if maximum > 0 {
                append_c_digits(digits, out.reserve(maximum)?);
            }
            break;
        }
        i += 1;
    }

    if round_up != RoundUp::No
        && propagate_round_up(out.written_since(digits_start), round_up, true)
    {
        out.push(b'0')?;
    }
    Ok(())
}

#[inline]
fn write_leading_block(
    out: &mut Output<'_>,
    digits: u32,
    olength: usize,
    print_decimal_point: bool,
) -> Result<(), Error> {
    if print_decimal_point {
        append_d_digits(digits, out.reserve(olength + 1)?);
        Ok(())
    } else {
        out.push(b'0' + digits as u8)
    }
}

/// Writes a finite, non-negative `f` in scientific notation with exactly
/// `precision` digits after the decimal point, like `printf("%.*e")`.
///
/// Returns the decimal exponent that was written.
pub(crate) fn d2exp(out: &mut Output<'_>, f: f64, precision: usize) -> Result<i32, Error> {
    if f.to_bits() == 0 {
        out.push(b'0')?;
        if precision > 0 {
            out.push(b'.')?;
            out.fill(b'0', precision)?;
        }
        out.extend(b"e+00")?;
        return Ok(0);
    }

    let (m2, e2) = decode(f);
    let digits_start = out.len();
    let print_decimal_point = precision > 0;
    // From here on, the total number of significant digits.
    let precision = precision.saturating_add(1);

    let mut digits = 0u32;
    let mut printed = 0usize;
    let mut available = 0usize;
    let mut exp = 0i32;

    if e2 >= -52 {
        let idx = if e2 < 0 { 0 } else { index_for_exponent(e2) };
        let p10_bits = pow10_bits_for_index(idx);
        let offset = POW10_OFFSET[idx] as usize;
        for i in (0..length_for_index(idx)).rev() {
            let j = p10_bits - e2;
            digits = mul_shift_mod1e9(m2 << 8, &POW10_SPLIT[offset + i], j + 8);
            if printed != 0 {
                if printed + 9 > precision {
                    available = 9;
                    break;
                }
                append_nine_digits(digits, out.reserve(9)?);
                printed += 9;
            } else if digits != 0 {
                available = decimal_length9(digits) as usize;
                exp = i as i32 * 9 + available as i32 - 1;
                if available > precision {
                    break;
                }
                write_leading_block(out, digits, available, print_decimal_point)?;
                printed = available;
                available = 0;
            }
        }
    }

    if e2 < 0 && available == 0 {
        let idx = (-e2 / 16) as usize;
        let min_block = MIN_BLOCK_2[idx] as usize;
        for i in min_block..MAX_FRACTION_BLOCKS {
            let j = ADDITIONAL_BITS_2 as i32 + (-e2 - 16 * idx as i32);
            let p = POW10_OFFSET_2[idx] as usize + i - min_block;
            digits = if p >= POW10_OFFSET_2[idx + 1] as usize {
                // The remaining digits are all zero.
                0
            } else {
                mul_shift_mod1e9(m2 << 8, &POW10_SPLIT_2[p], j + 8)
            };
            if printed != 0 {
                if printed + 9 > precision {
                    available = 9;
                    break;
                }
                append_nine_digits(digits, out.reserve(9)?);
                printed += 9;
            } else if digits != 0 {
                available = decimal_length9(digits) as usize;
                exp = -(i as i32 + 1) * 9 + available as i32 - 1;
                if available > precision {
                    break;
                }
                write_leading_block(out, digits, available, print_decimal_point)?;
                printed = available;
                available = 0;
            }
        }
    }

    let maximum = precision - printed;
    if available == 0 {
        digits = 0;
    }
    let mut last_digit = 0;
    if available > maximum {
        for _ in 0..available - maximum {
            last_digit = digits % 10;
            digits /= 10;
        }
    }
    let round_up = RoundUp::from_tail(last_digit, || {
        // Is m2 * 2^e2 * 10^(precision - exp) an integer?
        let rexp = precision as i64 - exp as i64;
        let required_twos = -(e2 as i64) - rexp;
        let mut trailing_zeros = required_twos <= 0
            || (required_twos < 60 && multiple_of_power_of_2(m2, required_twos as u32));
        if rexp < 0 {
            let required_fives = -rexp;
            trailing_zeros = trailing_zeros && multiple_of_power_of_5(m2, required_fives as u32);
        }
        trailing_zeros
    });

    if printed != 0 {
        if digits == 0 {
            out.fill(b'0', maximum)?;
        } else {
            append_c_digits(digits, out.reserve(maximum)?);
        }
    } else {
        write_leading_block(out, digits, maximum, print_decimal_point)?;
    }

    if round_up != RoundUp::No
        && propagate_round_up(out.written_since(digits_start), round_up, false)
    {
        exp += 1;
    }

    write_exponent(exp, out.reserve(exponent_len(exp))?);
    Ok(exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(f: f64, precision: usize) -> String {
        let mut buf = [0u8; 2000];
        let mut out = Output::new(&mut buf);
        d2fixed(&mut out, f, precision).unwrap();
        let len = out.len();
        String::from_utf8(buf[..len].to_vec()).unwrap()
    }

    fn exp(f: f64, precision: usize) -> String {
        let mut buf = [0u8; 2000];
        let mut out = Output::new(&mut buf);
        d2exp(&mut out, f, precision).unwrap();
        let len = out.len();
        String::from_utf8(buf[..len].to_vec()).unwrap()
    }

    #[test]
    fn test_mul_shift_mod1e9() {
        // (1 << 128) >> 128
        assert_eq!(1, mul_shift_mod1e9(1, &[0, 0, 1], 128));
        // 2^160 >> 160 with the multiplier split over the top words.
        assert_eq!(1, mul_shift_mod1e9(1 << 32, &[0, 0, 1], 160));
        assert_eq!(
            999_999_999,
            mul_shift_mod1e9(999_999_999, &[0, 0, 1], 128)
        );
        assert_eq!(0, mul_shift_mod1e9(1_000_000_000, &[0, 0, 1], 128));
    }

    #[test]
    fn test_round_up() {
        let mut s = *b"99.9";
        assert!(propagate_round_up(&mut s, RoundUp::Always, true));
        assert_eq!(b"100.", &s);

        let mut s = *b"1.25";
        assert!(!propagate_round_up(&mut s, RoundUp::Always, true));
        assert_eq!(b"1.26", &s);

        let mut s = *b"1.24";
        assert!(!propagate_round_up(&mut s, RoundUp::IfOdd, true));
        assert_eq!(b"1.24", &s);

        let mut s = *b"9.99";
        assert!(propagate_round_up(&mut s, RoundUp::IfOdd, false));
        assert_eq!(b"1.00", &s);
    }

    #[test]
    fn test_fixed_basic() {
        assert_eq!("0", fixed(0.0, 0));
        assert_eq!("0.000", fixed(0.0, 3));
        assert_eq!("1", fixed(1.0, 0));
        assert_eq!("123.4560000000", fixed(123.456, 10));
        assert_eq!("10000000000000000000000.00", fixed(1e22, 2));
        assert_eq!("0.29999999999999998890", fixed(0.3, 20));
        assert_eq!("0.0000009536743164062500000", fixed(2f64.powi(-20), 25));
    }

    #[test]
    fn test_fixed_rounding() {
        assert_eq!("2", fixed(1.5, 0));
        assert_eq!("2", fixed(2.5, 0));
        assert_eq!("0", fixed(0.5, 0));
        assert_eq!("0.12", fixed(0.125, 2));
        assert_eq!("0.38", fixed(0.375, 2));
        assert_eq!("9.99", fixed(9.995, 2));
        assert_eq!("100.0", fixed(99.96, 1));
        assert_eq!("0.000", fixed(1e-5, 3));
        assert_eq!("0.000000", fixed(1e-7, 6));
        assert_eq!("0.000000", fixed(5e-7, 6));
    }

    #[test]
    fn test_fixed_extremes() {
        let s = fixed(f64::MAX, 0);
        assert_eq!(309, s.len());
        assert!(s.starts_with("179769313486231570814527423731704356798"));

        let s = fixed(5e-324, 1074);
        assert_eq!(1076, s.len());
        assert!(s.starts_with("0.000"));
        assert!(s.ends_with("19718265533447265625"));
    }

    #[test]
    fn test_exp_basic() {
        assert_eq!("0e+00", exp(0.0, 0));
        assert_eq!("0.00e+00", exp(0.0, 2));
        assert_eq!("1e+00", exp(1.0, 0));
        assert_eq!("1.000e+00", exp(1.0, 3));
        assert_eq!("5e-01", exp(0.5, 0));
        assert_eq!("1.23e+05", exp(123456.0, 2));
        assert_eq!("1.7976931348623157e+308", exp(f64::MAX, 16));
        assert_eq!("4.94e-324", exp(5e-324, 2));
        assert_eq!("9.99999999999999916114e+22", exp(1e23, 20));
        assert_eq!("2.99999999999999989e-01", exp(0.3, 17));
        assert_eq!("1.00000e-300", exp(1e-300, 5));
        assert_eq!(
            "1.2345678901234567168000000e+19",
            exp(12345678901234567890.0, 25)
        );
    }

    #[test]
    fn test_exp_rounding() {
        assert_eq!("1e+01", exp(9.5, 0));
        assert_eq!("2e+00", exp(2.5, 0));
        assert_eq!("1.000e+01", exp(9.9999, 3));
        assert_eq!("2e-05", exp(1.5e-5, 0));
    }

    #[test]
    fn test_exp_returns_exponent() {
        let mut buf = [0u8; 32];
        let mut out = Output::new(&mut buf);
        assert_eq!(1, d2exp(&mut out, 9.99, 1).unwrap());
        let mut out = Output::new(&mut buf);
        assert_eq!(-5, d2exp(&mut out, 1.5e-5, 3).unwrap());
    }

    #[test]
    fn test_huge_precision_fails_cleanly() {
        let mut buf = [0u8; 64];
        let mut out = Output::new(&mut buf);
        assert!(d2fixed(&mut out, 1.5, usize::MAX).is_err());
        let mut out = Output::new(&mut buf);
        assert!(d2exp(&mut out, 1.5, usize::MAX).is_err());
    }
}
