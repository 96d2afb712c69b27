mod common;

use num_charconv::to_chars_scientific;
use rand::Rng;

use crate::common::{reference_scientific, render};

fn scientific<F: num_charconv::Float>(f: F, precision: usize) -> String {
    render(|buf| to_chars_scientific(buf, f, precision))
}

#[test]
fn test_seed_scenarios() {
    assert_eq!("1.23e+03", scientific(1234.0, 2));
    assert_eq!("1.23e+03", scientific(1234.0f32, 2));
    assert_eq!("0e+00", scientific(0.0, 0));
    assert_eq!("-0.000e+00", scientific(-0.0, 3));
}

#[test]
fn test_exponents() {
    let test_cases: &[(&str, f64, usize)] = &[
        ("1e+00", 1.0, 0),
        ("1.0e+01", 9.96, 1),
        ("9.9e+00", 9.94, 1),
        ("1e+100", 1e100, 0),
        ("1.797693e+308", f64::MAX, 6),
        ("4.9406564584124654e-324", 5e-324, 16),
        ("2.225073858507201e-308", f64::MIN_POSITIVE, 15),
        ("1.000000000000000081803e-05", 1e-5, 21),
    ];
    for (expected, input, precision) in test_cases {
        assert_eq!(*expected, scientific(*input, *precision), "{:?} {}", input, precision);
    }
}

#[test]
fn test_ties_to_even() {
    assert_eq!("2e+00", scientific(2.5, 0));
    assert_eq!("4e+00", scientific(3.5, 0));
    assert_eq!("1.2e+00", scientific(1.25, 1));
    assert_eq!("1.4e+00", scientific(1.35, 1)); // 1.35 is slightly above the tie
    assert_eq!("1.2e+01", scientific(12.5, 1));
}

#[test]
fn test_special_values() {
    assert_eq!("inf", scientific(f64::INFINITY, 3));
    assert_eq!("-inf", scientific(f64::NEG_INFINITY, 3));
}

#[test]
fn test_extremes_against_reference() {
    for &f in &[f64::MAX, f64::MIN_POSITIVE, 5e-324, 1e-300, 1e23, 0.1, 123456789012345678.0] {
        for &precision in &[0, 1, 16, 17, 50, 766, 800] {
            assert_eq!(
                reference_scientific(f, precision),
                scientific(f, precision),
                "{:e} {}",
                f,
                precision
            );
        }
    }
}

#[test]
fn test_random_against_reference() {
    let mut rng = common::rng();
    for _ in 0..3_000 {
        let f = common::finite_f64(&mut rng);
        if f == 0.0 {
            continue;
        }
        let precision = rng.gen_range(0..40);
        assert_eq!(
            reference_scientific(f, precision),
            scientific(f, precision),
            "{:e} {}",
            f,
            precision
        );
    }
}
