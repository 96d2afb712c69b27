use crate::error::Error;

/// Bounds-checked, append-only writer over the caller's buffer.
///
/// Every write first checks that the bytes it is about to produce fit; when
/// they don't, nothing is written and `ValueTooLarge` comes back with the
/// offset the write would have reached.
#[derive(Debug)]
pub(crate) struct Output<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Output<'a> {
    #[inline]
    pub(crate) fn new(buf: &'a mut [u8]) -> Output<'a> {
        Output { buf, pos: 0 }
    }

    /// Number of bytes written so far.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub(crate) fn check(&self, n: usize) -> Result<(), Error> {
        if n > self.remaining() {
            return Err(Error::value_too_large(
                self.pos.saturating_add(n),
                self.buf.len(),
            ));
        }
        Ok(())
    }

    /// Claims the next `n` bytes and returns them for the caller to fill.
    #[inline]
    pub(crate) fn reserve(&mut self, n: usize) -> Result<&mut [u8], Error> {
        self.check(n)?;
        let start = self.pos;
        self.pos += n;
        Ok(&mut self.buf[start..start + n])
    }

    #[inline]
    pub(crate) fn push(&mut self, byte: u8) -> Result<(), Error> {
        self.reserve(1)?[0] = byte;
        Ok(())
    }

    #[inline]
    pub(crate) fn extend(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.reserve(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    #[inline]
    pub(crate) fn fill(&mut self, byte: u8, n: usize) -> Result<(), Error> {
        for b in self.reserve(n)? {
            *b = byte;
        }
        Ok(())
    }

    /// The bytes written since offset `start`, for in-place fixups such as
    /// carry propagation.
    #[inline]
    pub(crate) fn written_since(&mut self, start: usize) -> &mut [u8] {
        &mut self.buf[start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_writes() {
        let mut buf = [0u8; 8];
        let mut out = Output::new(&mut buf);
        out.push(b'-').unwrap();
        out.extend(b"12").unwrap();
        out.fill(b'0', 3).unwrap();
        assert_eq!(6, out.len());
        assert_eq!(2, out.remaining());
        assert_eq!(b"2000", out.written_since(2));
        assert_eq!(b"-12000", &buf[..6]);
    }

    #[test]
    fn test_overflow_writes_nothing() {
        let mut buf = [b'x'; 4];
        let mut out = Output::new(&mut buf);
        out.extend(b"ab").unwrap();
        let err = out.extend(b"cde").unwrap_err();
        assert_eq!(&ErrorKind::ValueTooLarge { needed: 5, cap: 4 }, err.kind());
        assert_eq!(2, out.len());
        assert_eq!(b"abxx", &buf);
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf = [0u8; 0];
        let mut out = Output::new(&mut buf);
        assert!(out.push(b'1').is_err());
        assert!(out.fill(b'0', 0).is_ok());
    }
}
