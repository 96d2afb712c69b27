use cfg_if::cfg_if;

use crate::chars_format::CharsFormat;
use crate::error::Error;
use crate::output::Output;
use crate::ryu::d2s::{DOUBLE_EXPONENT_BITS, DOUBLE_MANTISSA_BITS};
use crate::ryu::f2s::{FLOAT_EXPONENT_BITS, FLOAT_MANTISSA_BITS};
use crate::ryu::raw;

const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";

cfg_if! {
    if #[cfg(feature = "msvc-nan")] {
        // Matches the Microsoft C runtime: the payload kind is spelled out.
        #[inline]
        fn nan_spelling(is_negative: bool, is_quiet: bool) -> &'static str {
            match (is_negative, is_quiet) {
                (false, true) => "nan",
                (true, true) => "-nan(ind)",
                (false, false) => "nan(snan)",
                (true, false) => "-nan(snan)",
            }
        }
    } else {
        #[inline]
        fn nan_spelling(is_negative: bool, _is_quiet: bool) -> &'static str {
            if is_negative {
                "-nan"
            } else {
                "nan"
            }
        }
    }
}

/// Raw IEEE 754 fields of an `f32`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FloatIeeeData32 {
    /// The sign bit.
    pub is_negative: bool,
    /// The 23 explicit mantissa bits.
    pub mantissa: u32,
    /// The biased exponent; 0 for zeros and subnormals.
    pub exponent: u32,
}

/// Raw IEEE 754 fields of an `f64`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FloatIeeeData64 {
    /// The sign bit.
    pub is_negative: bool,
    /// The 52 explicit mantissa bits.
    pub mantissa: u64,
    /// The biased exponent; 0 for zeros and subnormals.
    pub exponent: u32,
}

/// A floating point number, `f32` or `f64`, that can be converted to chars.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Float: private::Sealed {
    /// The decoded IEEE fields, see [`parse_ieee_data`](Float::parse_ieee_data).
    type FloatIeeeData: 'static;

    /// Longest shortest round-trip rendering in any [`CharsFormat`],
    /// sign included.
    const MAX_SHORTEST_LEN: usize;

    /// Number of digits in the integral part of the largest finite value.
    const MAX_INTEGER_DIGITS: usize;

    /// Splits the value into its sign, biased exponent and explicit
    /// mantissa bits.
    fn parse_ieee_data(self) -> Self::FloatIeeeData;

    /// Returns true for infinities and NaNs.
    fn is_nonfinite(self) -> bool;

    /// The spelling of an infinity or NaN, sign included.
    ///
    /// Only meaningful when [`is_nonfinite`](Float::is_nonfinite) is true.
    fn format_nonfinite(self) -> &'static str;
}

// Seal to prevent downstream implementations of the Float trait.
pub(crate) mod private {
    use crate::chars_format::CharsFormat;
    use crate::error::Error;

    pub trait Sealed: Copy {
        fn sign_negative(self) -> bool;

        fn magnitude(self) -> Self;

        fn write_shortest(self, result: &mut [u8], format: CharsFormat) -> Result<usize, Error>;

        // Every f32 is exactly representable as an f64.
        fn to_f64(self) -> f64;
    }
}

impl private::Sealed for f32 {
    #[inline]
    fn sign_negative(self) -> bool {
        self.to_bits() >> 31 != 0
    }

    #[inline]
    fn magnitude(self) -> f32 {
        f32::from_bits(self.to_bits() & !(1u32 << 31))
    }

    #[inline]
    fn write_shortest(self, result: &mut [u8], format: CharsFormat) -> Result<usize, Error> {
        raw::f2s_buffered_n(self, format, result)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Float for f32 {
    type FloatIeeeData = FloatIeeeData32;

    // "-0.", 44 zeros, then 1
    const MAX_SHORTEST_LEN: usize = 48;
    const MAX_INTEGER_DIGITS: usize = 39;

    #[inline(never)]
    fn parse_ieee_data(self) -> Self::FloatIeeeData {
        let bits = self.to_bits();
        let sign = ((bits >> (FLOAT_MANTISSA_BITS + FLOAT_EXPONENT_BITS)) & 1) != 0;
        let ieee_mantissa = bits & ((1u32 << FLOAT_MANTISSA_BITS) - 1);
        let ieee_exponent = (bits >> FLOAT_MANTISSA_BITS) & ((1u32 << FLOAT_EXPONENT_BITS) - 1);

        FloatIeeeData32 {
            is_negative: sign,
            mantissa: ieee_mantissa,
            exponent: ieee_exponent,
        }
    }

    #[inline]
    fn is_nonfinite(self) -> bool {
        const EXP_MASK: u32 = 0x7f800000;
        let bits = self.to_bits();
        bits & EXP_MASK == EXP_MASK
    }

    #[cold]
    fn format_nonfinite(self) -> &'static str {
        const MANTISSA_MASK: u32 = 0x007fffff;
        const QUIET_MASK: u32 = 0x00400000;
        const SIGN_MASK: u32 = 0x80000000;
        let bits = self.to_bits();
        let is_negative = bits & SIGN_MASK != 0;
        if bits & MANTISSA_MASK != 0 {
            nan_spelling(is_negative, bits & QUIET_MASK != 0)
        } else if is_negative {
            NEG_INFINITY
        } else {
            INFINITY
        }
    }
}

impl private::Sealed for f64 {
    #[inline]
    fn sign_negative(self) -> bool {
        self.to_bits() >> 63 != 0
    }

    #[inline]
    fn magnitude(self) -> f64 {
        f64::from_bits(self.to_bits() & !(1u64 << 63))
    }

    #[inline]
    fn write_shortest(self, result: &mut [u8], format: CharsFormat) -> Result<usize, Error> {
        raw::d2s_buffered_n(self, format, result)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl Float for f64 {
    type FloatIeeeData = FloatIeeeData64;

    // "-0.", 323 zeros, then 5
    const MAX_SHORTEST_LEN: usize = 327;
    const MAX_INTEGER_DIGITS: usize = 309;

    #[inline(never)]
    fn parse_ieee_data(self) -> Self::FloatIeeeData {
        let bits = self.to_bits();
        let sign = ((bits >> (DOUBLE_MANTISSA_BITS + DOUBLE_EXPONENT_BITS)) & 1) != 0;
        let ieee_mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
        let ieee_exponent =
            (bits >> DOUBLE_MANTISSA_BITS) as u32 & ((1u32 << DOUBLE_EXPONENT_BITS) - 1);

        FloatIeeeData64 {
            is_negative: sign,
            mantissa: ieee_mantissa,
            exponent: ieee_exponent,
        }
    }

    #[inline]
    fn is_nonfinite(self) -> bool {
        const EXP_MASK: u64 = 0x7ff0000000000000;
        let bits = self.to_bits();
        bits & EXP_MASK == EXP_MASK
    }

    #[cold]
    fn format_nonfinite(self) -> &'static str {
        const MANTISSA_MASK: u64 = 0x000fffffffffffff;
        const QUIET_MASK: u64 = 0x0008000000000000;
        const SIGN_MASK: u64 = 0x8000000000000000;
        let bits = self.to_bits();
        let is_negative = bits & SIGN_MASK != 0;
        if bits & MANTISSA_MASK != 0 {
            nan_spelling(is_negative, bits & QUIET_MASK != 0)
        } else if is_negative {
            NEG_INFINITY
        } else {
            INFINITY
        }
    }
}

/// Shared frame of every conversion: non-finite spellings are written
/// whole, otherwise the sign goes first and `body` renders the magnitude.
///
/// Returns the number of bytes written into `result`.
#[inline]
pub(crate) fn write_float<F, B>(f: F, result: &mut [u8], body: B) -> Result<usize, Error>
where
    F: Float,
    B: FnOnce(&mut Output<'_>, F) -> Result<(), Error>,
{
    let mut out = Output::new(result);
    if f.is_nonfinite() {
        out.extend(f.format_nonfinite().as_bytes())?;
    } else {
        if f.sign_negative() {
            out.push(b'-')?;
        }
        body(&mut out, f.magnitude())?;
    }
    Ok(out.len())
}

#[cfg(test)]
mod tests {
    use super::private::Sealed;
    use super::*;

    #[test]
    fn test_parse_ieee_data() {
        let data = (-1.5f64).parse_ieee_data();
        assert_eq!(
            FloatIeeeData64 {
                is_negative: true,
                mantissa: 1 << 51,
                exponent: 1023,
            },
            data
        );
        let data = 5e-324f64.parse_ieee_data();
        assert_eq!((false, 1, 0), (data.is_negative, data.mantissa, data.exponent));

        let data = 0.5f32.parse_ieee_data();
        assert_eq!(
            FloatIeeeData32 {
                is_negative: false,
                mantissa: 0,
                exponent: 126,
            },
            data
        );
    }

    #[test]
    fn test_nonfinite() {
        assert!(f64::NAN.is_nonfinite());
        assert!(f32::NEG_INFINITY.is_nonfinite());
        assert!(!f64::MAX.is_nonfinite());
        assert!(!0.0f32.is_nonfinite());

        assert_eq!("inf", f64::INFINITY.format_nonfinite());
        assert_eq!("-inf", f64::NEG_INFINITY.format_nonfinite());
        assert_eq!("inf", f32::INFINITY.format_nonfinite());
        assert_eq!("-inf", f32::NEG_INFINITY.format_nonfinite());
    }

    #[cfg(not(feature = "msvc-nan"))]
    #[test]
    fn test_nan_spelling() {
        let quiet = f64::from_bits(0x7ff8000000000000);
        let signalling = f64::from_bits(0x7ff0000000000001);
        assert_eq!("nan", quiet.format_nonfinite());
        assert_eq!("-nan", (-quiet).format_nonfinite());
        assert_eq!("nan", signalling.format_nonfinite());
        assert_eq!("-nan", f32::from_bits(0xffc00000).format_nonfinite());
    }

    #[cfg(feature = "msvc-nan")]
    #[test]
    fn test_nan_spelling() {
        let quiet = f64::from_bits(0x7ff8000000000000);
        let signalling = f64::from_bits(0x7ff0000000000001);
        assert_eq!("nan", quiet.format_nonfinite());
        assert_eq!("-nan(ind)", (-quiet).format_nonfinite());
        assert_eq!("nan(snan)", signalling.format_nonfinite());
        assert_eq!("-nan(snan)", f32::from_bits(0xff800001).format_nonfinite());
    }

    #[test]
    fn test_sign_and_magnitude() {
        assert!((-0.0f64).sign_negative());
        assert!(!0.0f32.sign_negative());
        assert_eq!(0, (-0.0f64).magnitude().to_bits());
        assert_eq!(2.5, (-2.5f32).magnitude());
        assert_eq!(0.1f32 as f64, 0.1f32.to_f64());
    }

    #[test]
    fn test_write_float() {
        let mut buf = [0u8; 16];
        let n = write_float(-2.0f64, &mut buf, |out, f| {
            assert_eq!(2.0, f);
            out.extend(b"two")
        })
        .unwrap();
        assert_eq!(b"-two", &buf[..n]);

        let n = write_float(f64::NEG_INFINITY, &mut buf, |_, _| unreachable!()).unwrap();
        assert_eq!(b"-inf", &buf[..n]);

        let mut small = [0u8; 2];
        assert!(write_float(f32::INFINITY, &mut small, |_, _| Ok(())).is_err());
    }
}
