use crate::to_chars::{max_len, to_chars_format, to_chars_precision};
use crate::to_chars_string::ToCharsString;
use crate::{CharsFormat, Float};

// helper functions

#[inline(never)]
fn run_to_chars<F: Float>(f: F, format: CharsFormat, precision: Option<usize>) -> String {
    let mut buf = vec![0u8; max_len::<F>(format, precision)];
    let written = match precision {
        None => to_chars_format(&mut buf, f, format),
        Some(precision) => to_chars_precision(&mut buf, f, format, precision),
    };
    let len = match written {
        Ok(len) => len,
        Err(_) => {
            debug_assert!(false, "max_len bounds every rendering");
            0
        }
    };
    buf.truncate(len);
    // Only ASCII is ever written.
    unsafe { String::from_utf8_unchecked(buf) }
}

macro_rules! impl_to_chars_string {
    ($($t:ty),*) => {$(
        impl ToCharsString for $t {
            #[inline]
            fn to_chars_string(&self, format: CharsFormat, precision: Option<usize>) -> String {
                run_to_chars(*self, format, precision)
            }
        }
    )*};
}

impl_to_chars_string!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_chars_string() {
        assert_eq!("-1.5", (-1.5f64).to_chars_string(CharsFormat::Plain, None));
        assert_eq!("1e+20", 1e20f32.to_chars_string(CharsFormat::General, None));
        assert_eq!(
            "100000002004087734272",
            1e20f32.to_chars_string(CharsFormat::Fixed, None)
        );
        assert_eq!("3.14", 3.14159f64.to_chars_string(CharsFormat::Plain, Some(3)));
        let s = f64::MAX.to_chars_string(CharsFormat::Fixed, Some(1000));
        assert_eq!(309 + 1 + 1000, s.len());
    }
}
