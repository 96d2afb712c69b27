mod common;

use num_charconv::{
    to_chars_fixed, to_chars_general, to_chars_precision, to_chars_scientific, CharsFormat,
};
use rand::Rng;

use crate::common::render;

fn general<F: num_charconv::Float>(f: F, precision: Option<usize>) -> String {
    render(|buf| to_chars_general(buf, f, precision))
}

fn trim(s: &str) -> String {
    let (significand, exponent) = match s.find('e') {
        Some(e) => s.split_at(e),
        None => (s, ""),
    };
    let significand = if significand.contains('.') {
        significand.trim_end_matches('0').trim_end_matches('.')
    } else {
        significand
    };
    format!("{}{}", significand, exponent)
}

#[test]
fn test_shortest() {
    let test_cases: &[(&str, f64)] = &[
        ("0", 0.0),
        ("-0", -0.0),
        ("0.0001", 1e-4),
        ("1e-05", 1e-5),
        ("123456", 123456.0),
        ("1.234567e+06", 1234567.0),
        ("0.3", 0.3),
        ("inf", f64::INFINITY),
    ];
    for (expected, input) in test_cases {
        assert_eq!(*expected, general(*input, None), "{:?}", input);
    }
}

#[test]
fn test_precision() {
    let test_cases: &[(&str, f64, usize)] = &[
        ("0", 0.0, 6),
        ("-0", -0.0, 0),
        ("1", 1.0, 0),
        ("1", 1.0, 1),
        ("123457", 123456.7, 6),
        ("1.23457e+06", 1234567.0, 6),
        ("0.0001", 1e-4, 6),
        ("1e-05", 1e-5, 6),
        ("1e+02", 99.9, 1),
        ("3.14", 3.14159, 3),
        ("10", 9.96, 2),
        ("1e+01", 9.96, 1),
        ("0.30000000000000004", 0.30000000000000004, 17),
        ("9.9999999999999992e+22", 1e23, 17),
        ("99999999999999991611392", 1e23, 23),
        ("0.1000000000000000055511151231257827021181583404541015625", 0.1, 1000),
    ];
    for (expected, input, precision) in test_cases {
        assert_eq!(*expected, general(*input, Some(*precision)), "{:?} {}", input, precision);
    }
}

#[test]
fn test_plain_with_precision_is_general() {
    let mut rng = common::rng();
    for _ in 0..1_000 {
        let f = common::finite_f64(&mut rng);
        let precision = rng.gen_range(0..25);
        assert_eq!(
            general(f, Some(precision)),
            render(|buf| to_chars_precision(buf, f, CharsFormat::Plain, precision))
        );
    }
}

// %g output is the trimmed %e or %f output it chose between.
#[test]
fn test_matches_chosen_notation() {
    let mut rng = common::rng();
    for _ in 0..3_000 {
        let f = common::finite_f64(&mut rng);
        if f == 0.0 {
            continue;
        }
        let p = rng.gen_range(1..25usize);
        let ours = general(f, Some(p));
        let sci = render(|buf| to_chars_scientific(buf, f, p - 1));
        let x: i32 = sci[sci.find('e').unwrap() + 1..].parse().unwrap();
        if (p as i32) > x && x >= -4 {
            let fixed = render(|buf| to_chars_fixed(buf, f, (p as i32 - 1 - x) as usize));
            assert_eq!(trim(&fixed), ours, "{:e} {}", f, p);
        } else {
            assert_eq!(trim(&sci), ours, "{:e} {}", f, p);
        }
    }
}

#[test]
fn test_f32() {
    assert_eq!("0.1", general(0.1f32, None));
    assert_eq!("0.100000001", general(0.1f32, Some(9)));
    assert_eq!("3.40282e+38", general(f32::MAX, Some(6)));
}
