use crate::DIGIT_TABLE;

#[inline]
fn copy_pair(result: &mut [u8], end: usize, pair: usize) {
    result[end - 2..end].copy_from_slice(&DIGIT_TABLE[pair..pair + 2]);
}

/// Writes all digits of `output` right-aligned into `result`, whose length
/// must be the decimal length of `output`.
#[inline]
pub(crate) fn write_mantissa_long(mut output: u64, result: &mut [u8]) {
    let mut end = result.len();
    if (output >> 32) != 0 {
        // One expensive 64-bit division.
        let mut output2 = (output % 100_000_000) as u32;
        output /= 100_000_000;

        let c = output2 % 10_000;
        output2 /= 10_000;
        let d = output2 % 10_000;
        copy_pair(result, end, ((c % 100) << 1) as usize);
        copy_pair(result, end - 2, ((c / 100) << 1) as usize);
        copy_pair(result, end - 4, ((d % 100) << 1) as usize);
        copy_pair(result, end - 6, ((d / 100) << 1) as usize);
        end -= 8;
    }
    write_mantissa(output as u32, &mut result[..end]);
}

/// Writes all digits of `output` right-aligned into `result`, whose length
/// must be the decimal length of `output`.
#[inline]
pub(crate) fn write_mantissa(mut output: u32, result: &mut [u8]) {
    let mut end = result.len();
    while output >= 10_000 {
        let c = output % 10_000;
        output /= 10_000;
        copy_pair(result, end, ((c % 100) << 1) as usize);
        copy_pair(result, end - 2, ((c / 100) << 1) as usize);
        end -= 4;
    }
    if output >= 100 {
        let c = (output % 100) << 1;
        output /= 100;
        copy_pair(result, end, c as usize);
        end -= 2;
    }
    if output >= 10 {
        copy_pair(result, end, (output << 1) as usize);
    } else {
        result[end - 1] = b'0' + output as u8;
    }
}

/// Writes `digits` as `d.ddd`: the leading digit, a decimal point, then the
/// rest. `result` is one byte longer than the decimal length of `digits`.
#[inline]
pub(crate) fn append_d_digits(digits: u32, result: &mut [u8]) {
    write_mantissa(digits, &mut result[1..]);
    result[0] = result[1];
    result[1] = b'.';
}

/// Writes the last `result.len()` decimal digits of `digits`, zero-padded on
/// the left. Higher digits are silently dropped.
#[inline]
pub(crate) fn append_c_digits(mut digits: u32, result: &mut [u8]) {
    let count = result.len();
    // Copy pairs of digits from DIGIT_TABLE.
    let mut i = 0;
    while i + 1 < count {
        let c = ((digits % 100) << 1) as usize;
        digits /= 100;
        copy_pair(result, count - i, c);
        i += 2;
    }
    // Generate the last digit if count is odd.
    if i < count {
        result[count - i - 1] = b'0' + (digits % 10) as u8;
    }
}

/// Writes exactly nine digits, zero-padded on the left.
#[inline]
pub(crate) fn append_nine_digits(digits: u32, result: &mut [u8]) {
    debug_assert_eq!(9, result.len());
    if digits == 0 {
        for b in result.iter_mut() {
            *b = b'0';
        }
        return;
    }
    append_c_digits(digits, result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_mantissa_long() {
        let mut buf = [0u8; 17];
        write_mantissa_long(12345678901234567, &mut buf);
        assert_eq!(b"12345678901234567", &buf);

        let mut buf = [0u8; 10];
        write_mantissa_long(4294967296, &mut buf);
        assert_eq!(b"4294967296", &buf);

        let mut buf = [0u8; 1];
        write_mantissa_long(7, &mut buf);
        assert_eq!(b"7", &buf);
    }

    #[test]
    fn test_write_mantissa() {
        let mut buf = [0u8; 9];
        write_mantissa(100000000, &mut buf);
        assert_eq!(b"100000000", &buf);

        let mut buf = [0u8; 3];
        write_mantissa(905, &mut buf);
        assert_eq!(b"905", &buf);

        let mut buf = [0u8; 2];
        write_mantissa(10, &mut buf);
        assert_eq!(b"10", &buf);
    }

    #[test]
    fn test_append_d_digits() {
        let mut buf = [0u8; 5];
        append_d_digits(1234, &mut buf);
        assert_eq!(b"1.234", &buf);

        let mut buf = [0u8; 2];
        append_d_digits(7, &mut buf);
        assert_eq!(b"7.", &buf);
    }

    #[test]
    fn test_append_c_digits() {
        let mut buf = [0u8; 5];
        append_c_digits(42, &mut buf);
        assert_eq!(b"00042", &buf);

        let mut buf = [0u8; 2];
        append_c_digits(98765, &mut buf);
        assert_eq!(b"65", &buf);

        let mut buf = [0u8; 0];
        append_c_digits(5, &mut buf);
    }

    #[test]
    fn test_append_nine_digits() {
        let mut buf = [0u8; 9];
        append_nine_digits(0, &mut buf);
        assert_eq!(b"000000000", &buf);
        append_nine_digits(1234567, &mut buf);
        assert_eq!(b"001234567", &buf);
        append_nine_digits(999999999, &mut buf);
        assert_eq!(b"999999999", &buf);
    }
}
