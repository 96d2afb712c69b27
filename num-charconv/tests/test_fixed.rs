mod common;

use num_charconv::to_chars_fixed;
use rand::Rng;

use crate::common::{reference_fixed, render};

fn fixed<F: num_charconv::Float>(f: F, precision: usize) -> String {
    render(|buf| to_chars_fixed(buf, f, precision))
}

#[test]
fn test_seed_scenarios() {
    assert_eq!("2", fixed(2.5, 0));
    assert_eq!("4", fixed(3.5, 0));
    assert_eq!("0.00", fixed(0.0, 2));
    assert_eq!("-0.00", fixed(-0.0, 2));
    assert_eq!("-0", fixed(-0.0f32, 0));
}

#[test]
fn test_rounding() {
    let test_cases: &[(&str, f64, usize)] = &[
        ("1", 0.5000000000000001, 0),
        ("0", 0.5, 0),
        ("2", 1.5, 0),
        ("0.12", 0.125, 2),
        ("0.38", 0.375, 2),
        ("1.00", 0.999, 2),
        ("100.0", 99.96, 1),
        ("-100.0", -99.96, 1),
        ("0.000", 0.0004, 3),
        ("0.001", 0.0005000000000000001, 3),
        ("0.29999999999999998890", 0.3, 20),
        ("1000000000000000000000.0", 1e21, 1),
    ];
    for (expected, input, precision) in test_cases {
        assert_eq!(*expected, fixed(*input, *precision), "{:?} {}", input, precision);
    }
}

#[test]
fn test_special_values() {
    assert_eq!("inf", fixed(f64::INFINITY, 3));
    assert_eq!("-inf", fixed(f32::NEG_INFINITY, 0));
    assert!(fixed(f64::NAN, 10).ends_with("nan"));
}

#[test]
fn test_f32_promotes_exactly() {
    assert_eq!("0.100000001490116119384765625", fixed(0.1f32, 27));
    assert_eq!("340282346638528859811704183484516925440.00", fixed(f32::MAX, 2));
    assert_eq!(
        "0.000000000000000000000000000000000000000000001",
        fixed(1e-45f32, 45)
    );
}

#[test]
fn test_extremes_against_reference() {
    for &f in &[f64::MAX, f64::MIN_POSITIVE, 5e-324, 1e-300, 1e300, 0.1, 2.0f64.powi(-20)] {
        for &precision in &[0, 1, 17, 100, 767, 1074, 1100] {
            assert_eq!(reference_fixed(f, precision), fixed(f, precision), "{:e} {}", f, precision);
        }
    }
}

#[test]
fn test_random_against_reference() {
    let mut rng = common::rng();
    for _ in 0..3_000 {
        let f = common::finite_f64(&mut rng);
        let precision = rng.gen_range(0..40);
        assert_eq!(reference_fixed(f, precision), fixed(f, precision), "{:e} {}", f, precision);
    }
}

#[test]
fn test_halfway_cases() {
    for k in 1..2_000u32 {
        let f = k as f64 / 8.0;
        for precision in 0..4 {
            assert_eq!(reference_fixed(f, precision), fixed(f, precision), "{} {}", f, precision);
            assert_eq!(reference_fixed(-f, precision), fixed(-f, precision), "{} {}", f, precision);
        }
    }
}
