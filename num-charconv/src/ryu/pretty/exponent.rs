use crate::DIGIT_TABLE;

/// Bytes taken by `e+XX`, or `e+XXX` once the exponent reaches three digits.
#[inline]
pub(crate) fn exponent_len(exp: i32) -> usize {
    if -100 < exp && exp < 100 {
        4
    } else {
        5
    }
}

/// Writes `e`, the sign, then at least two digits. `result` must be exactly
/// `exponent_len(exp)` bytes long.
#[inline]
pub(crate) fn write_exponent(exp: i32, result: &mut [u8]) {
    debug_assert_eq!(exponent_len(exp), result.len());
    result[0] = b'e';
    result[1] = if exp < 0 { b'-' } else { b'+' };
    let k = exp.unsigned_abs() as usize;
    if k >= 100 {
        result[2] = b'0' + (k / 100) as u8;
        let d = (k % 100) * 2;
        result[3..5].copy_from_slice(&DIGIT_TABLE[d..d + 2]);
    } else {
        let d = k * 2;
        result[2..4].copy_from_slice(&DIGIT_TABLE[d..d + 2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(exp: i32) -> ([u8; 5], usize) {
        let mut buf = [0u8; 5];
        let len = exponent_len(exp);
        write_exponent(exp, &mut buf[..len]);
        (buf, len)
    }

    #[test]
    fn test_write_exponent() {
        let cases: &[(i32, &[u8])] = &[
            (0, b"e+00"),
            (3, b"e+03"),
            (-5, b"e-05"),
            (22, b"e+22"),
            (99, b"e+99"),
            (-99, b"e-99"),
            (100, b"e+100"),
            (308, b"e+308"),
            (-324, b"e-324"),
        ];
        for (exp, expected) in cases {
            let (buf, len) = render(*exp);
            assert_eq!(*expected, &buf[..len]);
        }
    }
}
