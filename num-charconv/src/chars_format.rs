#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Notation of a float-to-chars conversion, mirroring `std::chars_format`.
///
/// | Variant      | shortest, `1e-5` | shortest, `123.0` | precision 3, `123.0` |
/// |--------------|------------------|-------------------|----------------------|
/// | `Plain`      | `1e-05`          | `123`             | `123`                |
/// | `Fixed`      | `0.00001`        | `123`             | `123.000`            |
/// | `Scientific` | `1e-05`          | `1.23e+02`        | `1.230e+02`          |
/// | `General`    | `1e-05`          | `123`             | `123`                |
///
/// `Plain` is the notation `to_chars` uses when none is given: whichever of
/// fixed or scientific is shorter, preferring fixed on ties. With a
/// precision it behaves like `General`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub enum CharsFormat {
    /// Shortest of fixed and scientific.
    Plain,
    /// `ddd.ddd`, like `printf("%f")`.
    Fixed,
    /// `d.ddde±dd`, like `printf("%e")`.
    Scientific,
    /// Fixed or scientific depending on the exponent, like `printf("%g")`.
    General,
}

impl Default for CharsFormat {
    fn default() -> CharsFormat {
        CharsFormat::Plain
    }
}
