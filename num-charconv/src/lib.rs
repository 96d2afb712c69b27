/*!
[![Crates.io](https://img.shields.io/crates/v/num-charconv.svg)](https://crates.io/crates/num-charconv)
[![Documentation](https://docs.rs/num-charconv/badge.svg)](https://docs.rs/num-charconv/)
![License](https://img.shields.io/crates/l/num-charconv.svg)

A Rust crate for writing floating-point numbers into byte buffers with the
semantics of C++17's `std::to_chars`.

# Picking a conversion

* Shortest round-trip digits ([`to_chars`], [`to_chars_format`],
  [`Buffer`]): the fewest significant digits that parse back to exactly the
  same `f32`/`f64`, computed with Ryū.
* Explicit precision ([`to_chars_fixed`], [`to_chars_scientific`],
  [`to_chars_general`]): the exactly rounded decimal expansion, ties to
  even, with the same output as glibc's `printf("%.*f")`, `"%.*e"` and
  `"%.*g"`.

Every conversion writes at the start of a caller-provided `&mut [u8]` and
returns the number of bytes written. The only error is a buffer that is too
short ([`ErrorKind::ValueTooLarge`]); nothing allocates and nothing panics.

# Examples

```rust
use num_charconv::{to_chars, to_chars_fixed, to_chars_scientific, Buffer, CharsFormat};

fn main() {
    let mut buf = [0u8; 64];

    // Shortest round trip
    let n = to_chars(&mut buf, 0.3).unwrap();
    assert_eq!(b"0.3", &buf[..n]);

    // Exactly rounded, ties to even
    let n = to_chars_fixed(&mut buf, 0.3, 20).unwrap();
    assert_eq!(b"0.29999999999999998890", &buf[..n]);
    let n = to_chars_fixed(&mut buf, 2.5, 0).unwrap();
    assert_eq!(b"2", &buf[..n]);

    let n = to_chars_scientific(&mut buf, 1234.0f32, 2).unwrap();
    assert_eq!(b"1.23e+03", &buf[..n]);

    // Too small
    assert!(to_chars(&mut buf[..2], 123.0).is_err());

    // A stack buffer that always fits the shortest rendering
    let mut buf = Buffer::new();
    assert_eq!("1e+100", buf.format(1e100));
    assert_eq!("-inf", buf.format_with(f64::NEG_INFINITY, CharsFormat::Fixed));
}
```

With the `std` feature (on by default) floats also get
[`to_chars_string`](ToCharsString::to_chars_string):

```rust
# #[cfg(feature = "std")]
# {
use num_charconv::{CharsFormat, ToCharsString};

assert_eq!("1.5e-10", 1.5e-10f32.to_chars_string(CharsFormat::Plain, None));
assert_eq!("0.000", 1e-10f64.to_chars_string(CharsFormat::Fixed, Some(3)));
# }
```

# Special values

Infinities are written `inf` and `-inf`, NaNs `nan` and `-nan`, whatever the
notation or precision. With the `msvc-nan` feature, NaNs follow the
Microsoft C runtime instead: `nan(snan)` for signalling NaNs and `-nan(ind)`
for negative quiet NaNs. Negative zero keeps its sign.

# Extra features

| Available features | What to put in your `Cargo.toml`                                   |
| :----------------- | :----------------------------------------------------------------- |
| `no_std`           | `num-charconv = { version = "0.1", default-features = false }`     |
| `small`            | `num-charconv = { version = "0.1", features = ["small"] }`         |
| `msvc-nan`         | `num-charconv = { version = "0.1", features = ["msvc-nan"] }`      |
| `with-serde`       | `num-charconv = { version = "0.1", features = ["with-serde"] }`    |
| `no-panic`         | `num-charconv = { version = "0.1", features = ["no-panic"] }`      |

`small` trades the 10 KB shortest-digit tables for a few extra
multiplications per conversion.

# License

**num-charconv** is licensed under either of:

- [The Apache License, Version 2.0], or
- [The MIT license]

at your option.

[The Apache License, Version 2.0]: http://www.apache.org/licenses/LICENSE-2.0
[The MIT license]: http://opensource.org/licenses/MIT
*/

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(
    absolute_paths_not_starting_with_crate,
    anonymous_parameters,
    bare_trait_objects,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    variant_size_differences
)]
#![doc(html_root_url = "https://docs.rs/num-charconv/0.1.0")]

mod buffer;
mod chars_format;
mod constants;
mod error;
mod error_kind;
#[cfg(feature = "std")]
mod impls;
mod output;
mod ryu;
mod to_chars;
#[cfg(feature = "std")]
mod to_chars_string;

pub use self::buffer::Buffer;
pub use self::chars_format::CharsFormat;
pub use self::error::Error;
pub use self::error_kind::ErrorKind;
pub use self::ryu::{raw, Float, FloatIeeeData32, FloatIeeeData64};
pub use self::to_chars::{
    max_len, to_chars, to_chars_fixed, to_chars_format, to_chars_general, to_chars_precision,
    to_chars_scientific,
};
#[cfg(feature = "std")]
pub use self::to_chars_string::ToCharsString;

pub(crate) const DIGIT_TABLE: &[u8] = b"\
    0001020304050607080910111213141516171819\
    2021222324252627282930313233343536373839\
    4041424344454647484950515253545556575859\
    6061626364656667686970717273747576777879\
    8081828384858687888990919293949596979899";
