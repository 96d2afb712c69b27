use crate::constants::{MAX_GENERAL_PRECISION, MAX_NONFINITE_LEN};
use crate::ryu;
use crate::{CharsFormat, Error, Float};

/// Writes the shortest decimal rendering of `f` that parses back to the same
/// value, in [`CharsFormat::Plain`] notation.
///
/// Returns the number of bytes written at the start of `buf`.
///
/// # Errors
///
/// Returns [`ErrorKind::ValueTooLarge`] if `buf` is too short. The contents
/// of `buf` are then unspecified.
///
/// # Example
/// ```
/// use num_charconv::to_chars;
///
/// let mut buf = [0u8; 32];
/// let n = to_chars(&mut buf, 0.3).unwrap();
/// assert_eq!(b"0.3", &buf[..n]);
///
/// let n = to_chars(&mut buf, -0.0f32).unwrap();
/// assert_eq!(b"-0", &buf[..n]);
/// ```
///
/// [`ErrorKind::ValueTooLarge`]: crate::ErrorKind::ValueTooLarge
#[inline]
pub fn to_chars<F: Float>(buf: &mut [u8], f: F) -> Result<usize, Error> {
    ryu::shortest(f, CharsFormat::Plain, buf)
}

/// Writes the shortest round-trip digits of `f` in the given notation.
///
/// # Example
/// ```
/// use num_charconv::{to_chars_format, CharsFormat};
///
/// let mut buf = [0u8; 32];
/// let n = to_chars_format(&mut buf, 1234.5, CharsFormat::Scientific).unwrap();
/// assert_eq!(b"1.2345e+03", &buf[..n]);
///
/// let n = to_chars_format(&mut buf, 1e21, CharsFormat::Fixed).unwrap();
/// assert_eq!(b"1000000000000000000000", &buf[..n]);
/// ```
#[inline]
pub fn to_chars_format<F: Float>(
    buf: &mut [u8],
    f: F,
    format: CharsFormat,
) -> Result<usize, Error> {
    ryu::shortest(f, format, buf)
}

/// Writes `f` with exactly `precision` digits after the decimal point,
/// correctly rounded with ties to even.
///
/// # Example
/// ```
/// use num_charconv::to_chars_fixed;
///
/// let mut buf = [0u8; 32];
/// let n = to_chars_fixed(&mut buf, 2.5, 0).unwrap();
/// assert_eq!(b"2", &buf[..n]);
///
/// let n = to_chars_fixed(&mut buf, 0.1f32, 10).unwrap();
/// assert_eq!(b"0.1000000015", &buf[..n]);
/// ```
#[inline]
pub fn to_chars_fixed<F: Float>(buf: &mut [u8], f: F, precision: usize) -> Result<usize, Error> {
    ryu::fixed(f, precision, buf)
}

/// Writes `f` as `d.ddde±dd` with exactly `precision` digits after the
/// decimal point, correctly rounded with ties to even.
///
/// # Example
/// ```
/// use num_charconv::to_chars_scientific;
///
/// let mut buf = [0u8; 32];
/// let n = to_chars_scientific(&mut buf, 1234.0, 2).unwrap();
/// assert_eq!(b"1.23e+03", &buf[..n]);
/// ```
#[inline]
pub fn to_chars_scientific<F: Float>(
    buf: &mut [u8],
    f: F,
    precision: usize,
) -> Result<usize, Error> {
    ryu::scientific(f, precision, buf)
}

/// Writes `f` like `printf("%g")`.
///
/// Without a precision this is the shortest round-trip rendering in
/// [`CharsFormat::General`]. With one, `f` is rounded to that many
/// significant digits (0 counts as 1) and trailing zeros are removed.
///
/// # Example
/// ```
/// use num_charconv::to_chars_general;
///
/// let mut buf = [0u8; 32];
/// let n = to_chars_general(&mut buf, 1234567.0, None).unwrap();
/// assert_eq!(b"1.234567e+06", &buf[..n]);
///
/// let n = to_chars_general(&mut buf, 1234567.0, Some(3)).unwrap();
/// assert_eq!(b"1.23e+06", &buf[..n]);
/// ```
#[inline]
pub fn to_chars_general<F: Float>(
    buf: &mut [u8],
    f: F,
    precision: Option<usize>,
) -> Result<usize, Error> {
    match precision {
        None => ryu::shortest(f, CharsFormat::General, buf),
        Some(precision) => ryu::general(f, precision, buf),
    }
}

/// Dispatches on `format` with an explicit precision. [`CharsFormat::Plain`]
/// behaves like [`CharsFormat::General`].
#[inline]
pub fn to_chars_precision<F: Float>(
    buf: &mut [u8],
    f: F,
    format: CharsFormat,
    precision: usize,
) -> Result<usize, Error> {
    match format {
        CharsFormat::Fixed => ryu::fixed(f, precision, buf),
        CharsFormat::Scientific => ryu::scientific(f, precision, buf),
        CharsFormat::General | CharsFormat::Plain => ryu::general(f, precision, buf),
    }
}

/// Upper bound on the bytes any value of `F` needs in `format`, with or
/// without a precision. Saturates at `usize::MAX`.
///
/// # Example
/// ```
/// use num_charconv::{max_len, CharsFormat};
///
/// assert_eq!(327, max_len::<f64>(CharsFormat::Plain, None));
/// assert_eq!(48, max_len::<f32>(CharsFormat::Fixed, None));
/// assert_eq!(13, max_len::<f64>(CharsFormat::Scientific, Some(5)));
/// ```
pub fn max_len<F: Float>(format: CharsFormat, precision: Option<usize>) -> usize {
    let finite = match (format, precision) {
        (_, None) => F::MAX_SHORTEST_LEN,
        // sign, integer digits, point
        (CharsFormat::Fixed, Some(p)) => F::MAX_INTEGER_DIGITS.saturating_add(2).saturating_add(p),
        // sign, digit, point, "e+308"
        (CharsFormat::Scientific, Some(p)) => p.saturating_add(8),
        (CharsFormat::General, Some(p)) | (CharsFormat::Plain, Some(p)) => {
            p.min(MAX_GENERAL_PRECISION) + 7
        }
    };
    finite.max(MAX_NONFINITE_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_len() {
        assert_eq!(327, max_len::<f64>(CharsFormat::Fixed, None));
        assert_eq!(48, max_len::<f32>(CharsFormat::Scientific, None));
        assert_eq!(311, max_len::<f64>(CharsFormat::Fixed, Some(0)));
        assert_eq!(41, max_len::<f32>(CharsFormat::Fixed, Some(0)));
        assert_eq!(10, max_len::<f64>(CharsFormat::Scientific, Some(0)));
        assert_eq!(10, max_len::<f64>(CharsFormat::General, Some(0)));
        assert_eq!(807, max_len::<f64>(CharsFormat::Plain, Some(5000)));
        assert_eq!(usize::MAX, max_len::<f64>(CharsFormat::Fixed, Some(usize::MAX)));
    }

    #[test]
    fn test_dispatch() {
        let mut buf = [0u8; 64];
        let n = to_chars_precision(&mut buf, 0.5, CharsFormat::Plain, 3).unwrap();
        assert_eq!(b"0.5", &buf[..n]);
        let n = to_chars_precision(&mut buf, 0.5, CharsFormat::Fixed, 3).unwrap();
        assert_eq!(b"0.500", &buf[..n]);
        let n = to_chars_precision(&mut buf, 0.5, CharsFormat::Scientific, 3).unwrap();
        assert_eq!(b"5.000e-01", &buf[..n]);
    }
}
