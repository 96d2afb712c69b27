use anyhow::{ensure, Result};
use num_bigint::BigUint;

pub const DOUBLE_POW5_INV_TABLE_SIZE: u32 = 342;
pub const DOUBLE_POW5_TABLE_SIZE: u32 = 326;
pub const DOUBLE_POW5_INV_BITCOUNT: u64 = 125;
pub const DOUBLE_POW5_BITCOUNT: u64 = 125;

pub const TABLE_SIZE: u32 = 64;
pub const TABLE_SIZE_2: u32 = 68;
pub const ADDITIONAL_BITS: u32 = 120;

/// Powers of five for the shortest `f64` algorithm, as `[low, high]` words.
pub struct D2sTables {
    pub pow5_inv_split: Vec<[u64; 2]>,
    pub pow5_split: Vec<[u64; 2]>,
}

impl D2sTables {
    pub fn compute() -> D2sTables {
        let pow5_inv_split = (0..DOUBLE_POW5_INV_TABLE_SIZE)
            .map(|i| words(&pow5_inv_split(i)))
            .collect();
        let pow5_split = (0..DOUBLE_POW5_TABLE_SIZE)
            .map(|i| words(&pow5_split(i)))
            .collect();
        D2sTables {
            pow5_inv_split,
            pow5_split,
        }
    }
}

/// Powers of ten for the fixed-precision algorithms, reduced modulo
/// `10^9 * 2^jmax` and stored as three little-endian words.
pub struct D2fixedTables {
    pub pow10_offset: Vec<u16>,
    pub pow10_split: Vec<[u64; 3]>,
    pub min_block_2: Vec<u8>,
    pub pow10_offset_2: Vec<u16>,
    pub pow10_split_2: Vec<[u64; 3]>,
}

impl D2fixedTables {
    pub fn compute() -> Result<D2fixedTables> {
        let billion = BigUint::from(1_000_000_000u32);

        let mut pow10_offset = Vec::new();
        let mut pow10_split = Vec::new();
        for idx in 0..TABLE_SIZE {
            pow10_offset.push(pow10_split.len() as u16);
            let jmax = if idx == 0 {
                ADDITIONAL_BITS + 52 + 8
            } else {
                ADDITIONAL_BITS + 15 + 8
            };
            let numerator = one() << (16 * idx + ADDITIONAL_BITS);
            for i in 0..length_for_index(idx) {
                let v = &numerator / pow10(9 * i) + 1u32;
                let v = v % (&billion << jmax);
                pow10_split.push(words3(&v)?);
            }
        }

        let min_block_2: Vec<u8> = (0..TABLE_SIZE_2).map(min_block_2).collect();
        let mut pow10_offset_2 = Vec::new();
        let mut pow10_split_2 = Vec::new();
        let jmax = ADDITIONAL_BITS + 15 + 8;
        for idx in 0..TABLE_SIZE_2 {
            pow10_offset_2.push(pow10_split_2.len() as u16);
            let blocks = (16 * idx + 16 + 8) / 9;
            let denominator = one() << (16 * idx);
            for i in min_block_2[idx as usize] as u32..blocks {
                let v = (pow10(9 * (i + 1)) << ADDITIONAL_BITS) / &denominator + 1u32;
                let v = v % (&billion << jmax);
                pow10_split_2.push(words3(&v)?);
            }
        }
        pow10_offset_2.push(pow10_split_2.len() as u16);

        Ok(D2fixedTables {
            pow10_offset,
            pow10_split,
            min_block_2,
            pow10_offset_2,
            pow10_split_2,
        })
    }
}

fn one() -> BigUint {
    BigUint::from(1u32)
}

fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u32).pow(exponent)
}

// The top DOUBLE_POW5_BITCOUNT bits of 5^i.
fn pow5_split(i: u32) -> BigUint {
    let pow = BigUint::from(5u32).pow(i);
    let bits = pow.bits();
    if bits >= DOUBLE_POW5_BITCOUNT {
        pow >> (bits - DOUBLE_POW5_BITCOUNT)
    } else {
        pow << (DOUBLE_POW5_BITCOUNT - bits)
    }
}

// floor(2^j / 5^i) + 1 with j chosen to keep DOUBLE_POW5_INV_BITCOUNT bits.
fn pow5_inv_split(i: u32) -> BigUint {
    let pow = BigUint::from(5u32).pow(i);
    let j = pow.bits() - 1 + DOUBLE_POW5_INV_BITCOUNT;
    (one() << j) / pow + 1u32
}

fn log10_pow2(e: u32) -> u32 {
    (e * 78913) >> 18
}

fn length_for_index(idx: u32) -> u32 {
    (log10_pow2(16 * idx) + 1 + 16 + 8) / 9
}

// Number of leading 9-digit blocks that are zero for every value with
// exponent bucket `idx`.
fn min_block_2(idx: u32) -> u8 {
    let limit = one() << (16 * idx);
    let mut i = 0;
    while (pow10(9 * (i + 1)) << 53u32) < limit {
        i += 1;
    }
    i as u8
}

fn words(v: &BigUint) -> [u64; 2] {
    let digits = v.to_u64_digits();
    [
        digits.first().copied().unwrap_or(0),
        digits.get(1).copied().unwrap_or(0),
    ]
}

fn words3(v: &BigUint) -> Result<[u64; 3]> {
    let digits = v.to_u64_digits();
    ensure!(digits.len() <= 3, "{} does not fit in 192 bits", v);
    let mut out = [0u64; 3];
    out[..digits.len()].copy_from_slice(&digits);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d2s_tables() {
        let tables = D2sTables::compute();
        assert_eq!(342, tables.pow5_inv_split.len());
        assert_eq!([1, 2305843009213693952], tables.pow5_inv_split[0]);
        assert_eq!([0, 1152921504606846976], tables.pow5_split[0]);
        assert_eq!(
            [8710297504448807696, 1780059086805761106],
            tables.pow5_split[325]
        );
    }

    #[test]
    fn test_d2fixed_tables() {
        let tables = D2fixedTables::compute().unwrap();
        assert_eq!(1224, tables.pow10_split.len());
        assert_eq!(3130, tables.pow10_split_2.len());
        assert_eq!(69, tables.pow10_offset_2.len());
        assert_eq!(&[0, 2, 5, 8], &tables.pow10_offset[..4]);
        assert_eq!([1, 72057594037927936, 0], tables.pow10_split[0]);
        assert_eq!([1, 0, 3906250], tables.pow10_split_2[0]);
        assert_eq!(34, tables.min_block_2[67]);
    }
}
