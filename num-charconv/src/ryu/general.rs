use log::trace;

use crate::constants::{GENERAL_SCRATCH_LEN, MAX_GENERAL_PRECISION};
use crate::error::Error;
use crate::output::Output;
use crate::ryu::d2fixed::{d2exp, d2fixed};

/// Writes a finite, non-negative `f` like `printf("%.*g")`: `precision`
/// significant digits in fixed or scientific notation, whichever `%g`
/// picks, with trailing zeros removed.
pub(crate) fn d2general(out: &mut Output<'_>, f: f64, precision: usize) -> Result<(), Error> {
    if f.to_bits() == 0 {
        return out.push(b'0');
    }

    // Beyond this, every additional digit is a trailing zero that would be
    // trimmed anyway.
    let mut precision = precision.max(1);
    if precision > MAX_GENERAL_PRECISION {
        trace!(
            "general precision {} clamped to {}",
            precision,
            MAX_GENERAL_PRECISION
        );
        precision = MAX_GENERAL_PRECISION;
    }

    let mut scratch = [0u8; GENERAL_SCRATCH_LEN];
    let mut staging = Output::new(&mut scratch);
    let x = d2exp(&mut staging, f, precision - 1)?;
    let mut len = staging.len();

    let p = precision as i32;
    let fixed = p > x && x >= -4;
    if fixed {
        // p > x, so at least zero fractional digits.
        let mut staging = Output::new(&mut scratch);
        d2fixed(&mut staging, f, (p - 1 - x) as usize)?;
        len = staging.len();
    }

    let rendered = &scratch[..len];
    let (significand, exponent) = if fixed {
        (rendered, &rendered[len..])
    } else {
        let e = rendered.iter().position(|&b| b == b'e').unwrap_or(len);
        rendered.split_at(e)
    };
    out.extend(trim_trailing_zeros(significand))?;
    out.extend(exponent)
}

/// Drops trailing zeros after a decimal point, then the point itself if
/// nothing follows it.
fn trim_trailing_zeros(digits: &[u8]) -> &[u8] {
    if !digits.contains(&b'.') {
        return digits;
    }
    let mut end = digits.len();
    while end > 0 && digits[end - 1] == b'0' {
        end -= 1;
    }
    if end > 0 && digits[end - 1] == b'.' {
        end -= 1;
    }
    &digits[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn general(f: f64, precision: usize) -> String {
        let mut buf = [0u8; 1000];
        let mut out = Output::new(&mut buf);
        d2general(&mut out, f, precision).unwrap();
        let len = out.len();
        String::from_utf8(buf[..len].to_vec()).unwrap()
    }

    #[test]
    fn test_trim_trailing_zeros() {
        assert_eq!(b"1.5", trim_trailing_zeros(b"1.500"));
        assert_eq!(b"100", trim_trailing_zeros(b"100"));
        assert_eq!(b"2", trim_trailing_zeros(b"2.000"));
        assert_eq!(b"0.001", trim_trailing_zeros(b"0.001"));
    }

    #[test]
    fn test_general_notation_choice() {
        assert_eq!("0", general(0.0, 6));
        assert_eq!("1", general(1.0, 0));
        assert_eq!("123457", general(123456.7, 6));
        assert_eq!("1.23457e+06", general(1234567.0, 6));
        assert_eq!("0.0001", general(1e-4, 6));
        assert_eq!("1e-05", general(1e-5, 6));
        assert_eq!("1e+02", general(99.9, 1));
        assert_eq!("3.14", general(3.14159, 3));
    }

    #[test]
    fn test_general_rounding_carries_into_exponent() {
        assert_eq!("1e+01", general(9.96, 1));
        assert_eq!("10", general(9.96, 2));
    }

    #[test]
    fn test_general_large_precision() {
        let exact = "0.1000000000000000055511151231257827021181583404541015625";
        assert_eq!(exact, general(0.1, 100));
        assert_eq!(exact, general(0.1, 5000));
        assert_eq!(309, general(f64::MAX, 800).len());
        assert!(general(5e-324, 800).ends_with("265533447265625e-324"));
        assert_eq!("9.9999999999999992e+22", general(1e23, 17));
        assert_eq!("99999999999999991611392", general(1e23, 23));
    }
}
