use crate::{CharsFormat, Float};

/// <b><u>A key trait</u></b>. Gives floats a [`to_chars_string`] method,
/// which returns a `String` sized for any precision.
///
/// # Example
/// ```
/// use num_charconv::{CharsFormat, ToCharsString};
///
/// assert_eq!("0.1", 0.1f64.to_chars_string(CharsFormat::Plain, None));
/// assert_eq!("0.10000", 0.1f32.to_chars_string(CharsFormat::Fixed, Some(5)));
/// assert_eq!("nan", f64::NAN.to_chars_string(CharsFormat::Scientific, Some(3)));
/// ```
///
/// [`to_chars_string`]: trait.ToCharsString.html#method.to_chars_string
pub trait ToCharsString: Float {
    /// Renders `self` in `format`, shortest round-trip when `precision` is
    /// `None`.
    ///
    /// # Panics
    ///
    /// Panics if the rendering can't be allocated, which only happens for
    /// absurd fixed or scientific precisions.
    fn to_chars_string(&self, format: CharsFormat, precision: Option<usize>) -> String;
}
