mod exponent;
mod mantissa;

pub(crate) use self::exponent::{exponent_len, write_exponent};
pub(crate) use self::mantissa::{
    append_c_digits, append_d_digits, append_nine_digits, write_mantissa, write_mantissa_long,
};

use crate::chars_format::CharsFormat;
use crate::error::Error;
use crate::output::Output;
use crate::ryu::d2s::{
    decimal_length17, shortest64, DOUBLE_BIAS, DOUBLE_EXPONENT_BITS, DOUBLE_MANTISSA_BITS,
};
use crate::ryu::f2s::{shortest32, FLOAT_BIAS, FLOAT_EXPONENT_BITS, FLOAT_MANTISSA_BITS};
use crate::ryu::large_int::write_large_integer;

// (2^53 - 1) / 5^0 (for indexing), (2^53 - 1) / 5^1, ..., (2^53 - 1) / 5^22
//
// Shortest digits `m * 10^e` with `e > 0` equal the binary value exactly iff
// `(m >> tz(m)) * 5^e` still fits the significand. 10^22 is the largest power
// of ten that a double holds exactly.
static DOUBLE_MAX_SHIFTED_MANTISSA: [u64; 23] = [
    9007199254740991,
    1801439850948198,
    360287970189639,
    72057594037927,
    14411518807585,
    2882303761517,
    576460752303,
    115292150460,
    23058430092,
    4611686018,
    922337203,
    184467440,
    36893488,
    7378697,
    1475739,
    295147,
    59029,
    11805,
    2361,
    472,
    94,
    18,
    3,
];

// (2^24 - 1) / 5^0 (for indexing), (2^24 - 1) / 5^1, ..., (2^24 - 1) / 5^10
static FLOAT_MAX_SHIFTED_MANTISSA: [u64; 11] = [
    16777215, 3355443, 671088, 134217, 26843, 5368, 1073, 214, 42, 8, 1,
];

/// Shortest round-trip rendering of a finite, non-negative `f64`.
///
/// The sign and non-finite values are handled by the caller.
pub(crate) fn format64(out: &mut Output<'_>, f: f64, format: CharsFormat) -> Result<(), Error> {
    let bits = f.to_bits();
    if bits == 0 {
        return write_zero(out, format);
    }

    let ieee_mantissa = bits & ((1u64 << DOUBLE_MANTISSA_BITS) - 1);
    let ieee_exponent =
        (bits >> DOUBLE_MANTISSA_BITS) as u32 & ((1u32 << DOUBLE_EXPONENT_BITS) - 1);
    // Subnormals never reach the exact-integer path, so restoring the
    // implicit bit unconditionally is fine.
    let mantissa2 = (1u64 << DOUBLE_MANTISSA_BITS) | ieee_mantissa;
    let exponent2 = ieee_exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32;

    if format == CharsFormat::Fixed && exponent2 > 0 {
        // Every digit is integral and exactly determined.
        return write_large_integer(out, mantissa2, exponent2);
    }

    let v = shortest64(ieee_mantissa, ieee_exponent);
    let shortest = Shortest {
        output: v.mantissa,
        olength: decimal_length17(v.mantissa) as i32,
        ryu_exponent: v.exponent,
    };
    shortest.write(
        out,
        format,
        &DOUBLE_MAX_SHIFTED_MANTISSA,
        (mantissa2, exponent2),
    )
}

/// Shortest round-trip rendering of a finite, non-negative `f32`.
pub(crate) fn format32(out: &mut Output<'_>, f: f32, format: CharsFormat) -> Result<(), Error> {
    let bits = f.to_bits();
    if bits == 0 {
        return write_zero(out, format);
    }

    let ieee_mantissa = bits & ((1u32 << FLOAT_MANTISSA_BITS) - 1);
    let ieee_exponent = (bits >> FLOAT_MANTISSA_BITS) & ((1u32 << FLOAT_EXPONENT_BITS) - 1);
    let mantissa2 = (1u32 << FLOAT_MANTISSA_BITS) | ieee_mantissa;
    let exponent2 = ieee_exponent as i32 - FLOAT_BIAS - FLOAT_MANTISSA_BITS as i32;

    if format == CharsFormat::Fixed && exponent2 > 0 {
        return write_large_integer(out, mantissa2 as u64, exponent2);
    }

    let v = shortest32(ieee_mantissa, ieee_exponent);
    let shortest = Shortest {
        output: v.mantissa as u64,
        olength: decimal_length17(v.mantissa as u64) as i32,
        ryu_exponent: v.exponent,
    };
    shortest.write(
        out,
        format,
        &FLOAT_MAX_SHIFTED_MANTISSA,
        (mantissa2 as u64, exponent2),
    )
}

#[inline]
fn write_zero(out: &mut Output<'_>, format: CharsFormat) -> Result<(), Error> {
    match format {
        CharsFormat::Scientific => out.extend(b"0e+00"),
        _ => out.push(b'0'),
    }
}

/// Shortest digits `output * 10^ryu_exponent`, `olength` digits long.
struct Shortest {
    output: u64,
    olength: i32,
    ryu_exponent: i32,
}

impl Shortest {
    #[inline]
    fn scientific_exponent(&self) -> i32 {
        self.ryu_exponent + self.olength - 1
    }

    fn use_fixed(&self, format: CharsFormat) -> bool {
        match format {
            CharsFormat::Plain => {
                // Value   | Fixed       | Scientific
                // 1e-3    | "0.001"     | "1e-03"
                // 1e4     | "10000"     | "1e+04"
                // 1234e-7 | "0.0001234" | "1.234e-04"
                // 1234e5  | "123400000" | "1.234e+08"
                let (lower, upper) = if self.olength == 1 {
                    (-3, 4)
                } else {
                    (-(self.olength + 3), 5)
                };
                lower <= self.ryu_exponent && self.ryu_exponent <= upper
            }
            // %g with the default precision of 6: fixed iff 6 > X >= -4.
            CharsFormat::General => {
                let x = self.scientific_exponent();
                -4 <= x && x < 6
            }
            CharsFormat::Fixed => true,
            CharsFormat::Scientific => false,
        }
    }

    fn write(
        &self,
        out: &mut Output<'_>,
        format: CharsFormat,
        max_shifted_mantissa: &[u64],
        binary: (u64, i32),
    ) -> Result<(), Error> {
        if !self.use_fixed(format) {
            return self.write_scientific(out);
        }
        if self.ryu_exponent > 0 && !self.can_use_ryu(max_shifted_mantissa) {
            let (mantissa2, exponent2) = binary;
            return write_large_integer(out, mantissa2, exponent2);
        }
        self.write_fixed(out)
    }

    fn can_use_ryu(&self, max_shifted_mantissa: &[u64]) -> bool {
        match max_shifted_mantissa.get(self.ryu_exponent as usize) {
            Some(&max) => (self.output >> self.output.trailing_zeros()) <= max,
            None => false,
        }
    }

    fn write_fixed(&self, out: &mut Output<'_>) -> Result<(), Error> {
        let olength = self.olength as usize;
        let whole_digits = self.olength + self.ryu_exponent;
        if self.ryu_exponent >= 0 {
            // 1729e2 -> 172900
            let result = out.reserve(whole_digits as usize)?;
            let (digits, zeros) = result.split_at_mut(olength);
            write_mantissa_long(self.output, digits);
            zeros.fill(b'0');
        } else if whole_digits > 0 {
            // 1729e-2 -> 17.29
            let whole_digits = whole_digits as usize;
            let result = out.reserve(olength + 1)?;
            write_mantissa_long(self.output, &mut result[1..]);
            result.copy_within(1..whole_digits + 1, 0);
            result[whole_digits] = b'.';
        } else {
            // 1729e-6 -> 0.001729
            let zeros = (-whole_digits) as usize;
            let result = out.reserve(2 + zeros + olength)?;
            result[0] = b'0';
            result[1] = b'.';
            result[2..2 + zeros].fill(b'0');
            write_mantissa_long(self.output, &mut result[2 + zeros..]);
        }
        Ok(())
    }

    fn write_scientific(&self, out: &mut Output<'_>) -> Result<(), Error> {
        let olength = self.olength as usize;
        let scientific_exponent = self.scientific_exponent();
        let digits_len = olength + (olength > 1) as usize;
        let result = out.reserve(digits_len + exponent_len(scientific_exponent))?;
        let (digits, exponent) = result.split_at_mut(digits_len);
        if olength > 1 {
            write_mantissa_long(self.output, &mut digits[1..]);
            digits[0] = digits[1];
            digits[1] = b'.';
        } else {
            digits[0] = b'0' + self.output as u8;
        }
        write_exponent(scientific_exponent, exponent);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render64(f: f64, format: CharsFormat) -> String {
        let mut buf = [0u8; 400];
        let mut out = Output::new(&mut buf);
        format64(&mut out, f, format).unwrap();
        let len = out.len();
        String::from_utf8(buf[..len].to_vec()).unwrap()
    }

    fn render32(f: f32, format: CharsFormat) -> String {
        let mut buf = [0u8; 64];
        let mut out = Output::new(&mut buf);
        format32(&mut out, f, format).unwrap();
        let len = out.len();
        String::from_utf8(buf[..len].to_vec()).unwrap()
    }

    #[test]
    fn test_plain_window() {
        assert_eq!("0.001", render64(1e-3, CharsFormat::Plain));
        assert_eq!("1e-04", render64(1e-4, CharsFormat::Plain));
        assert_eq!("10000", render64(1e4, CharsFormat::Plain));
        assert_eq!("1e+05", render64(1e5, CharsFormat::Plain));
        assert_eq!("0.0001234", render64(1.234e-4, CharsFormat::Plain));
        assert_eq!("123400000", render64(1.234e8, CharsFormat::Plain));
        assert_eq!("1.234e+09", render64(1.234e9, CharsFormat::Plain));
    }

    #[test]
    fn test_fixed_layouts() {
        assert_eq!("172900", render64(172900.0, CharsFormat::Fixed));
        assert_eq!("17.29", render64(17.29, CharsFormat::Fixed));
        assert_eq!("0.001729", render64(0.001729, CharsFormat::Fixed));
        assert_eq!("1e+22", render64(1e22, CharsFormat::Plain));
        assert_eq!("10000000000000000000000", render64(1e22, CharsFormat::Fixed));
        assert_eq!("99999999999999991611392", render64(1e23, CharsFormat::Fixed));
    }

    #[test]
    fn test_scientific() {
        assert_eq!("1e+00", render64(1.0, CharsFormat::Scientific));
        assert_eq!("1.5e-05", render64(1.5e-5, CharsFormat::Scientific));
        assert_eq!("1.7976931348623157e+308", render64(f64::MAX, CharsFormat::Scientific));
        assert_eq!("5e-324", render64(5e-324, CharsFormat::Scientific));
        assert_eq!("0e+00", render64(0.0, CharsFormat::Scientific));
    }

    #[test]
    fn test_general() {
        assert_eq!("0.0001", render64(1e-4, CharsFormat::General));
        assert_eq!("1e-05", render64(1e-5, CharsFormat::General));
        assert_eq!("123456", render64(123456.0, CharsFormat::General));
        assert_eq!("1.23457e+06", render64(1234570.0, CharsFormat::General));
    }

    #[test]
    fn test_exact_integer_fallback() {
        // Plain picks fixed here, but the shortest digits scaled by 10^4 are not
        // the binary value.
        assert_eq!(
            "123456789012345683968",
            render64(123456789012345678901.0, CharsFormat::Plain)
        );
    }

    #[test]
    fn test_float() {
        assert_eq!("0.1", render32(0.1, CharsFormat::Plain));
        assert_eq!("3.4028235e+38", render32(f32::MAX, CharsFormat::Plain));
        assert_eq!(
            "340282346638528859811704183484516925440",
            render32(f32::MAX, CharsFormat::Fixed)
        );
        assert_eq!("1e-45", render32(1e-45, CharsFormat::Plain));
        assert_eq!("16777216", render32(16777216.0, CharsFormat::Plain));
        assert_eq!("0", render32(0.0, CharsFormat::General));
    }
}
