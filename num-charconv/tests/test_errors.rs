mod common;

use num_charconv::{
    max_len, to_chars, to_chars_fixed, to_chars_format, to_chars_general, to_chars_scientific,
    CharsFormat, ErrorKind,
};
use rand::Rng;

#[test]
fn test_empty_buffer_untouched() {
    let mut buf = [0u8; 0];
    let err = to_chars(&mut buf, 1.0).unwrap_err();
    assert_eq!(&ErrorKind::ValueTooLarge { needed: 1, cap: 0 }, err.kind());

    let mut buf = [b'x'; 3];
    assert!(to_chars_format(&mut buf, 1.5, CharsFormat::Scientific).is_err());
    assert!(to_chars_fixed(&mut buf[..0], 1.0f32, 2).is_err());
    assert!(to_chars_scientific(&mut buf[..0], 0.0, 0).is_err());
    assert!(to_chars_general(&mut buf[..0], f64::NAN, None).is_err());
    assert!(to_chars(&mut buf[..2], f64::NEG_INFINITY).is_err());
    assert_eq!(b"xxx", &buf);
}

#[test]
fn test_error_display() {
    let mut buf = [0u8; 4];
    let err = to_chars(&mut buf, 0.125).unwrap_err();
    assert_eq!(&ErrorKind::ValueTooLarge { needed: 5, cap: 4 }, err.kind());
    assert_eq!(
        "Value too large: needed at least 5 bytes but the buffer holds 4 bytes.",
        err.to_string()
    );
}

// Succeeds with exactly n bytes and beyond, fails below.
fn assert_monotonic<W>(write: W, bound: usize)
where
    W: Fn(&mut [u8]) -> Result<usize, num_charconv::Error>,
{
    let mut big = vec![0u8; bound];
    let n = write(&mut big).unwrap();
    assert!(n <= bound);
    let expected = big[..n].to_vec();
    for len in n..n + 3 {
        let mut buf = vec![0u8; len];
        assert_eq!(n, write(&mut buf).unwrap());
        assert_eq!(&expected[..], &buf[..n]);
    }
    for len in 0..n {
        let mut buf = vec![0u8; len];
        assert!(
            write(&mut buf).is_err(),
            "{} {}",
            len,
            String::from_utf8_lossy(&expected)
        );
    }
}

#[test]
fn test_monotonic_sizing_shortest() {
    let mut rng = common::rng();
    let formats = [
        CharsFormat::Plain,
        CharsFormat::Fixed,
        CharsFormat::Scientific,
        CharsFormat::General,
    ];
    for _ in 0..300 {
        let f = common::finite_f64(&mut rng);
        let g = common::finite_f32(&mut rng);
        for &format in &formats {
            assert_monotonic(
                |buf| to_chars_format(buf, f, format),
                max_len::<f64>(format, None),
            );
            assert_monotonic(
                |buf| to_chars_format(buf, g, format),
                max_len::<f32>(format, None),
            );
        }
    }
}

#[test]
fn test_monotonic_sizing_precision() {
    let mut rng = common::rng();
    for _ in 0..300 {
        let f = common::finite_f64(&mut rng);
        let p = rng.gen_range(0..30);
        assert_monotonic(
            |buf| to_chars_fixed(buf, f, p),
            max_len::<f64>(CharsFormat::Fixed, Some(p)),
        );
        assert_monotonic(
            |buf| to_chars_scientific(buf, f, p),
            max_len::<f64>(CharsFormat::Scientific, Some(p)),
        );
        assert_monotonic(
            |buf| to_chars_general(buf, f, Some(p)),
            max_len::<f64>(CharsFormat::General, Some(p)),
        );
    }
}

#[test]
fn test_max_len_bounds_extremes() {
    for &f in &[f64::MIN, -5e-324, -f64::MIN_POSITIVE, -1e-300] {
        for &p in &[0, 1, 17, 800, 1100] {
            for &format in &[CharsFormat::Fixed, CharsFormat::Scientific, CharsFormat::General] {
                let mut buf = vec![0u8; max_len::<f64>(format, Some(p))];
                let n = match format {
                    CharsFormat::Fixed => to_chars_fixed(&mut buf, f, p),
                    CharsFormat::Scientific => to_chars_scientific(&mut buf, f, p),
                    _ => to_chars_general(&mut buf, f, Some(p)),
                };
                assert!(n.is_ok(), "{:e} {:?} {}", f, format, p);
            }
        }
    }
}
