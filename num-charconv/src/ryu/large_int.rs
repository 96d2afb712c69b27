use arrayvec::ArrayVec;
use log::trace;

use crate::error::Error;
use crate::output::Output;
use crate::ryu::common::decimal_length9;
use crate::ryu::pretty::{append_nine_digits, write_mantissa};

// The largest finite double is below 2^1024, i.e. 32 limbs. A few spare limbs
// cover the 84-bit shifted mantissa landing on a limb boundary.
const MAX_LIMBS: usize = 36;
// ceil(309 / 9) decimal blocks, rounded up.
const MAX_BLOCKS: usize = 40;

/// Writes the exact decimal value of the integer `mantissa2 * 2^exponent2`.
///
/// Used whenever a fixed rendering has to show every integral digit of a
/// binary value that the shortest digits cannot reproduce.
pub(crate) fn write_large_integer(
    out: &mut Output<'_>,
    mantissa2: u64,
    exponent2: i32,
) -> Result<(), Error> {
    debug_assert!(mantissa2 != 0);
    debug_assert!(exponent2 > 0);

    // Little-endian base-2^32 limbs.
    let mut limbs: ArrayVec<u32, MAX_LIMBS> = ArrayVec::new();
    for _ in 0..exponent2 / 32 {
        limbs.push(0);
    }
    let mut shifted = (mantissa2 as u128) << (exponent2 % 32) as u32;
    while shifted != 0 {
        limbs.push(shifted as u32);
        shifted >>= 32;
    }

    // Little-endian base-10^9 blocks.
    let mut blocks: ArrayVec<u32, MAX_BLOCKS> = ArrayVec::new();
    while !limbs.is_empty() {
        let mut remainder = 0u64;
        for limb in limbs.iter_mut().rev() {
            let current = (remainder << 32) | *limb as u64;
            *limb = (current / 1_000_000_000) as u32;
            remainder = current % 1_000_000_000;
        }
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        blocks.push(remainder as u32);
    }

    trace!(
        "exact integer: mantissa2={} exponent2={} blocks={}",
        mantissa2,
        exponent2,
        blocks.len()
    );

    let mut iter = blocks.iter().rev();
    if let Some(&first) = iter.next() {
        let olength = decimal_length9(first) as usize;
        let result = out.reserve(olength + 9 * (blocks.len() - 1))?;
        let (head, tail) = result.split_at_mut(olength);
        write_mantissa(first, head);
        for (chunk, &block) in tail.chunks_exact_mut(9).zip(iter) {
            append_nine_digits(block, chunk);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mantissa2: u64, exponent2: i32) -> String {
        let mut buf = [0u8; 400];
        let mut out = Output::new(&mut buf);
        write_large_integer(&mut out, mantissa2, exponent2).unwrap();
        let len = out.len();
        String::from_utf8(buf[..len].to_vec()).unwrap()
    }

    #[test]
    fn test_small() {
        assert_eq!("2", render(1, 1));
        assert_eq!("4294967296", render(1, 32));
        assert_eq!("1000000000", render(1953125, 9));
    }

    #[test]
    fn test_inner_zero_blocks() {
        // 10^27 = 5^27 * 2^27
        assert_eq!(
            "1000000000000000000000000000",
            render(7450580596923828125, 27)
        );
    }

    #[test]
    fn test_double_max() {
        let mantissa2 = (1u64 << 53) - 1;
        let s = render(mantissa2, 971);
        assert_eq!(309, s.len());
        assert!(s.starts_with("17976931348623157081452742373170435679"));
        assert!(s.ends_with("858368"));
    }

    #[test]
    fn test_too_small_buffer() {
        let mut buf = [0u8; 10];
        let mut out = Output::new(&mut buf);
        assert!(write_large_integer(&mut out, (1u64 << 53) - 1, 20).is_err());
        assert_eq!(0, out.len());
    }
}
