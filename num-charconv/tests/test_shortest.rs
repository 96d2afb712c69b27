mod common;

use num_charconv::{to_chars, to_chars_format, CharsFormat};

use crate::common::render;

fn plain<F: num_charconv::Float>(f: F) -> String {
    render(|buf| to_chars(buf, f))
}

fn with<F: num_charconv::Float>(f: F, format: CharsFormat) -> String {
    render(|buf| to_chars_format(buf, f, format))
}

#[test]
fn test_seed_scenarios() {
    assert_eq!("0", plain(0.0f32));
    assert_eq!("1", plain(1.0f64));
    assert_eq!("0.3", plain(0.3f64));
    assert_eq!("inf", plain(f64::INFINITY));
    assert_eq!("-0", plain(-0.0f64));
}

#[test]
fn test_f64() {
    let test_cases: &[(&str, f64)] = &[
        ("1.234", 1.234),
        ("-1.234", -1.234),
        ("18446744073.709", 18446744073.709),
        ("1.7976931348623157e+308", f64::MAX),
        ("-1.7976931348623157e+308", f64::MIN),
        ("2.2250738585072014e-308", f64::MIN_POSITIVE),
        ("5e-324", 5e-324),
        ("9007199254740991", 9007199254740991.0),
        ("9007199254740992", 9007199254740992.0),
        ("1e+16", 1e16),
        ("123456789", 123456789.0),
        ("0.001", 0.001),
        ("0.0001234", 0.0001234),
        ("1e-04", 0.0001),
        ("1.2345e-08", 1.2345e-8),
    ];
    for (expected, input) in test_cases {
        assert_eq!(*expected, plain(*input), "{:?}", input);
    }
}

#[test]
fn test_f32() {
    let test_cases: &[(&str, f32)] = &[
        ("1.234", 1.234),
        ("0.1", 0.1),
        ("3.4028235e+38", f32::MAX),
        ("1.1754944e-38", f32::MIN_POSITIVE),
        ("1e-45", 1e-45),
        ("16777216", 16777216.0),
        ("16777218", 16777218.0),
        ("167772176", 167772180.0),
        ("-0", -0.0),
    ];
    for (expected, input) in test_cases {
        assert_eq!(*expected, plain(*input), "{:?}", input);
    }
}

#[test]
fn test_notations() {
    let test_cases: &[(f64, [&str; 4])] = &[
        (0.0, ["0", "0", "0e+00", "0"]),
        (1.0, ["1", "1", "1e+00", "1"]),
        (1e-5, ["1e-05", "0.00001", "1e-05", "1e-05"]),
        (123.0, ["123", "123", "1.23e+02", "123"]),
        (123456.0, ["123456", "123456", "1.23456e+05", "123456"]),
        (1234567.0, ["1234567", "1234567", "1.234567e+06", "1.234567e+06"]),
        (1e22, ["1e+22", "10000000000000000000000", "1e+22", "1e+22"]),
        (1e23, ["1e+23", "99999999999999991611392", "1e+23", "1e+23"]),
        (5e-10, ["5e-10", "0.0000000005", "5e-10", "5e-10"]),
    ];
    let formats = [
        CharsFormat::Plain,
        CharsFormat::Fixed,
        CharsFormat::Scientific,
        CharsFormat::General,
    ];
    for (input, expected) in test_cases {
        for (format, expected) in formats.iter().zip(expected.iter()) {
            assert_eq!(*expected, with(*input, *format), "{:?} {:?}", input, format);
            assert_eq!(
                format!("-{}", expected),
                with(-*input, *format),
                "{:?} {:?}",
                -input,
                format
            );
        }
    }
}

#[test]
fn test_round_trip_f64() {
    let mut rng = common::rng();
    for _ in 0..20_000 {
        let f = common::finite_f64(&mut rng);
        for format in &[CharsFormat::Plain, CharsFormat::Scientific, CharsFormat::General] {
            let s = with(f, *format);
            assert_eq!(Ok(f), s.parse::<f64>(), "{} {:?}", s, format);
        }
        let s = with(f, CharsFormat::Fixed);
        assert_eq!(Ok(f), s.parse::<f64>(), "{}", s);
    }
}

#[test]
fn test_round_trip_f32() {
    let mut rng = common::rng();
    for _ in 0..20_000 {
        let f = common::finite_f32(&mut rng);
        for format in &[
            CharsFormat::Plain,
            CharsFormat::Fixed,
            CharsFormat::Scientific,
            CharsFormat::General,
        ] {
            let s = with(f, *format);
            assert_eq!(Ok(f), s.parse::<f32>(), "{} {:?}", s, format);
        }
    }
}

// The standard library's `{:e}` also prints the shortest round-trip digits.
#[test]
fn test_digit_count_matches_std() {
    let mut rng = common::rng();
    for _ in 0..20_000 {
        let f = common::finite_f64(&mut rng);
        let ours = with(f, CharsFormat::Scientific);
        let theirs = format!("{:e}", f);
        assert_eq!(significant_digits(&theirs), significant_digits(&ours), "{}", theirs);
    }
}

fn significant_digits(scientific: &str) -> usize {
    let end = scientific.find('e').unwrap();
    scientific[..end].trim_start_matches('-').replace('.', "").len()
}

#[test]
fn test_shortest() {
    let mut rng = common::rng();
    for _ in 0..5_000 {
        let f = common::finite_f64(&mut rng);
        if f == 0.0 {
            continue;
        }
        let s = with(f, CharsFormat::Scientific);
        let significant = significant_digits(&s);
        if significant > 1 {
            // One digit fewer, correctly rounded, no longer round trips.
            let shorter = format!("{:.*e}", significant - 2, f);
            assert_ne!(Ok(f), shorter.parse::<f64>(), "{} {}", s, shorter);
        }
    }
}
