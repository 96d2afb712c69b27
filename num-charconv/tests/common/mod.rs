#![allow(dead_code)]

use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SEED: u64 = 0x5eed_c4a5;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// A random finite f64, biased towards interesting exponents: half the time
/// uniform over all bit patterns, otherwise close to 1.
pub fn finite_f64(rng: &mut StdRng) -> f64 {
    loop {
        let bits = if rng.gen_bool(0.5) {
            rng.gen::<u64>()
        } else {
            let exponent = rng.gen_range(1023 - 80..1023 + 80u64);
            (rng.gen::<u64>() & ((1 << 52) - 1)) | (exponent << 52) | (rng.gen::<u64>() & (1 << 63))
        };
        let f = f64::from_bits(bits);
        if f.is_finite() {
            return f;
        }
    }
}

pub fn finite_f32(rng: &mut StdRng) -> f32 {
    loop {
        let f = f32::from_bits(rng.gen::<u32>());
        if f.is_finite() {
            return f;
        }
    }
}

/// `|f|` as the exact fraction `num / den`.
pub fn exact(f: f64) -> (BigUint, BigUint) {
    let bits = f.to_bits();
    let ieee_mantissa = bits & ((1 << 52) - 1);
    let ieee_exponent = ((bits >> 52) & 0x7ff) as i32;
    let (m2, e2) = if ieee_exponent == 0 {
        (ieee_mantissa, 1 - 1075)
    } else {
        (ieee_mantissa | (1 << 52), ieee_exponent - 1075)
    };
    let m2 = BigUint::from(m2);
    if e2 >= 0 {
        (m2 << e2 as usize, BigUint::from(1u32))
    } else {
        (m2, BigUint::from(1u32) << (-e2) as usize)
    }
}

fn pow10(k: u32) -> BigUint {
    BigUint::from(10u32).pow(k)
}

/// `num / den * 10^k`
fn scaled(num: &BigUint, den: &BigUint, k: i32) -> (BigUint, BigUint) {
    if k >= 0 {
        (num * pow10(k as u32), den.clone())
    } else {
        (num.clone(), den * pow10((-k) as u32))
    }
}

/// `num / den` rounded to an integer, ties to even.
fn round_half_even(num: &BigUint, den: &BigUint) -> BigUint {
    let q = num / den;
    let r2 = (num % den) * 2u32;
    if &r2 > den || (&r2 == den && &q % 2u32 == BigUint::from(1u32)) {
        q + 1u32
    } else {
        q
    }
}

fn sign(f: f64) -> &'static str {
    if f.is_sign_negative() {
        "-"
    } else {
        ""
    }
}

/// Correctly rounded `%.*f`.
pub fn reference_fixed(f: f64, precision: usize) -> String {
    let (num, den) = exact(f);
    let (num, den) = scaled(&num, &den, precision as i32);
    let digits = round_half_even(&num, &den).to_string();
    let digits = format!("{:0>width$}", digits, width = precision + 1);
    let (int, frac) = digits.split_at(digits.len() - precision);
    if precision == 0 {
        format!("{}{}", sign(f), int)
    } else {
        format!("{}{}.{}", sign(f), int, frac)
    }
}

/// Correctly rounded `%.*e` for a nonzero `f`.
pub fn reference_scientific(f: f64, precision: usize) -> String {
    let (num, den) = exact(f);
    // 10^x <= num / den < 10^(x + 1)
    let mut x = num.to_string().len() as i32 - den.to_string().len() as i32;
    loop {
        let (a, b) = scaled(&num, &den, -x);
        if a < b {
            x -= 1;
        } else if a >= b * 10u32 {
            x += 1;
        } else {
            break;
        }
    }
    let (n, d) = scaled(&num, &den, precision as i32 - x);
    let mut digits = round_half_even(&n, &d);
    if digits == pow10(precision as u32 + 1) {
        digits = pow10(precision as u32);
        x += 1;
    }
    let digits = digits.to_string();
    let mantissa = if precision == 0 {
        digits
    } else {
        format!("{}.{}", &digits[..1], &digits[1..])
    };
    let exp_sign = if x < 0 { '-' } else { '+' };
    format!("{}{}e{}{:02}", sign(f), mantissa, exp_sign, x.abs())
}

/// Runs a conversion into a generously sized buffer.
pub fn render<T>(f: impl FnOnce(&mut [u8]) -> Result<usize, T>) -> String
where
    T: std::fmt::Debug,
{
    let mut buf = vec![0u8; 4096];
    let n = f(&mut buf).unwrap();
    String::from_utf8(buf[..n].to_vec()).unwrap()
}
