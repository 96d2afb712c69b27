use core::borrow::Borrow;
use core::fmt;
use core::ops::Deref;
use core::str;

use crate::constants::MAX_BUF_LEN;
use crate::ryu;
use crate::{CharsFormat, Float};

/// <b><u>A key type</u></b>. Represents a stack-allocated buffer you can use to get a
/// shortest float rendering as a `&str` without heap allocation.
///
/// # Example
/// ```
/// use num_charconv::{Buffer, CharsFormat};
///
/// fn main() {
///     // Create a stack-allocated buffer...
///     let mut buf = Buffer::default();
///
///     // Write into the buffer...
///     buf.format(1e-7);
///
///     // Get a view into the buffer as a &str...
///     let s = buf.as_str();
///
///     // Do what you want with the &str...
///     assert_eq!("1e-07", s);
///
///     // Or pick the notation...
///     assert_eq!("0.0000001", buf.format_with(1e-7, CharsFormat::Fixed));
/// }
/// ```
#[derive(Copy, Clone)]
pub struct Buffer {
    inner: [u8; MAX_BUF_LEN],
    len: usize,
}

impl Buffer {
    /// Constructs a new, empty buffer.
    #[inline(always)]
    pub fn new() -> Buffer {
        Buffer {
            inner: [0; MAX_BUF_LEN],
            len: 0,
        }
    }

    /// Returns a `&[u8]` view into the buffer.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner[..self.len]
    }

    /// Returns a `&str` view into the buffer.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever written.
        unsafe { str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Returns `true` if the buffer is empty; `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length (in bytes) of the buffer.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Writes the shortest round-trip rendering of `f` in
    /// [`CharsFormat::Plain`] and returns it.
    #[inline]
    pub fn format<F: Float>(&mut self, f: F) -> &str {
        self.format_with(f, CharsFormat::Plain)
    }

    /// Writes the shortest round-trip rendering of `f` in `format` and
    /// returns it.
    pub fn format_with<F: Float>(&mut self, f: F, format: CharsFormat) -> &str {
        self.len = match ryu::shortest(f, format, &mut self.inner) {
            Ok(len) => len,
            Err(_) => {
                debug_assert!(false, "MAX_BUF_LEN holds every shortest rendering");
                0
            }
        };
        self.as_str()
    }
}

impl AsRef<str> for Buffer {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Buffer {
    #[inline(always)]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for Buffer {
    /// Same as the [`new`] method.
    ///
    /// [`new`]: struct.Buffer.html#method.new
    #[inline(always)]
    fn default() -> Buffer {
        Buffer::new()
    }
}

impl Deref for Buffer {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer() {
        let mut buf = Buffer::new();
        assert!(buf.is_empty());
        assert_eq!("", buf.as_str());

        assert_eq!("0.3", buf.format(0.3));
        assert_eq!(3, buf.len());
        assert_eq!(b"0.3", buf.as_bytes());

        assert_eq!("-inf", buf.format(f32::NEG_INFINITY));
        assert_eq!("1.5e+00", buf.format_with(1.5f32, CharsFormat::Scientific));
    }

    #[test]
    fn test_buffer_holds_longest() {
        let mut buf = Buffer::new();
        let s = buf.format_with(-5e-324, CharsFormat::Fixed);
        assert_eq!(MAX_BUF_LEN, s.len());
        assert!(s.starts_with("-0.000"));
        assert!(s.ends_with("005"));

        assert_eq!(310, buf.format_with(f64::MIN, CharsFormat::Fixed).len());
    }
}
