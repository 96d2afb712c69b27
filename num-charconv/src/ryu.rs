mod common;
mod d2fixed;
mod d2fixed_full_table;
mod d2s;
#[cfg(any(not(feature = "small"), test))]
mod d2s_full_table;
mod d2s_intrinsics;
#[cfg(any(feature = "small", test))]
mod d2s_small_table;
mod f2s;
mod f2s_intrinsics;
pub(crate) mod float;
mod general;
mod large_int;
mod pretty;

use crate::chars_format::CharsFormat;
use crate::error::Error;
use crate::ryu::float::private::Sealed;
use crate::ryu::float::write_float;

pub use crate::ryu::float::{Float, FloatIeeeData32, FloatIeeeData64};

// Precision requests promote f32 to f64, which is exact. Non-finite values
// are spelled from the original so that NaN payloads survive.

#[inline]
pub(crate) fn shortest<F: Float>(
    f: F,
    format: CharsFormat,
    result: &mut [u8],
) -> Result<usize, Error> {
    f.write_shortest(result, format)
}

#[inline]
pub(crate) fn fixed<F: Float>(f: F, precision: usize, result: &mut [u8]) -> Result<usize, Error> {
    write_float(f, result, |out, f| d2fixed::d2fixed(out, f.to_f64(), precision))
}

#[inline]
pub(crate) fn scientific<F: Float>(
    f: F,
    precision: usize,
    result: &mut [u8],
) -> Result<usize, Error> {
    write_float(f, result, |out, f| {
        d2fixed::d2exp(out, f.to_f64(), precision).map(|_| ())
    })
}

#[inline]
pub(crate) fn general<F: Float>(
    f: F,
    precision: usize,
    result: &mut [u8],
) -> Result<usize, Error> {
    write_float(f, result, |out, f| general::d2general(out, f.to_f64(), precision))
}

/// Conversions on concrete types that mirror the C API of Ryū, writing into
/// a caller-provided slice.
///
/// Each function returns the number of bytes written, or
/// [`ErrorKind::ValueTooLarge`](crate::ErrorKind::ValueTooLarge) if
/// `result` is too short. On error the contents of `result` are
/// unspecified.
pub mod raw {
    use crate::chars_format::CharsFormat;
    use crate::error::Error;
    use crate::ryu::float::write_float;
    use crate::ryu::pretty::{format32, format64};

    /// Shortest round-trip rendering of an `f64`.
    ///
    /// ```
    /// use num_charconv::{raw, CharsFormat};
    ///
    /// let mut buf = [0u8; 32];
    /// let n = raw::d2s_buffered_n(-1.5e-7, CharsFormat::Plain, &mut buf).unwrap();
    /// assert_eq!(b"-1.5e-07", &buf[..n]);
    /// ```
    pub fn d2s_buffered_n(f: f64, format: CharsFormat, result: &mut [u8]) -> Result<usize, Error> {
        write_float(f, result, |out, f| format64(out, f, format))
    }

    /// Shortest round-trip rendering of an `f32`.
    pub fn f2s_buffered_n(f: f32, format: CharsFormat, result: &mut [u8]) -> Result<usize, Error> {
        write_float(f, result, |out, f| format32(out, f, format))
    }

    /// `printf("%.*f", precision, f)`.
    ///
    /// ```
    /// use num_charconv::raw;
    ///
    /// let mut buf = [0u8; 32];
    /// let n = raw::d2fixed_buffered_n(2.5, 0, &mut buf).unwrap();
    /// assert_eq!(b"2", &buf[..n]);
    /// ```
    pub fn d2fixed_buffered_n(f: f64, precision: usize, result: &mut [u8]) -> Result<usize, Error> {
        super::fixed(f, precision, result)
    }

    /// `printf("%.*e", precision, f)`.
    pub fn d2exp_buffered_n(f: f64, precision: usize, result: &mut [u8]) -> Result<usize, Error> {
        super::scientific(f, precision, result)
    }

    /// `printf("%.*g", precision, f)`, with precision 0 treated as 1.
    pub fn d2general_buffered_n(
        f: f64,
        precision: usize,
        result: &mut [u8],
    ) -> Result<usize, Error> {
        super::general(f, precision, result)
    }
}
