use num_charconv::{Buffer, CharsFormat};
#[cfg(feature = "std")]
use num_charconv::ToCharsString;

#[test]
fn test_buffer() {
    let test_cases: &[(&str, f64, CharsFormat)] = &[
        ("1.234", 1.234, CharsFormat::Plain),
        ("1.234e+00", 1.234, CharsFormat::Scientific),
        ("1e+300", 1e300, CharsFormat::General),
        ("-0.000001", -1e-6, CharsFormat::Fixed),
        ("nan", f64::NAN, CharsFormat::Fixed),
    ];

    for (expected, input, format) in test_cases {
        let mut buf = Buffer::default();
        assert_eq!(*expected, buf.format_with(*input, *format));
        assert_eq!(*expected, buf.as_str());
        assert_eq!(expected.len(), buf.len());
        assert_eq!(*expected, &*buf);
        assert_eq!(expected.to_string(), buf.to_string());
        assert_eq!(expected.to_string(), format!("{:?}", buf));

        #[cfg(feature = "std")]
        {
            assert_eq!(expected.to_string(), input.to_chars_string(*format, None));
        }
    }
}

#[test]
fn test_buffer_is_reusable() {
    let mut buf = Buffer::new();
    assert_eq!("-1.7976931348623157e+308", buf.format(f64::MIN));
    assert_eq!("0.5", buf.format(0.5f32));
    assert_eq!("0.5", AsRef::<str>::as_ref(&buf));
}

#[cfg(feature = "std")]
#[test]
fn test_to_chars_string_precision() {
    let test_cases: &[(&str, f64, CharsFormat, usize)] = &[
        ("3.142", 3.14159, CharsFormat::Fixed, 3),
        ("3.142e+00", 3.14159, CharsFormat::Scientific, 3),
        ("3.14", 3.14159, CharsFormat::General, 3),
        ("3.14", 3.14159, CharsFormat::Plain, 3),
        ("-inf", f64::NEG_INFINITY, CharsFormat::Fixed, 1000),
    ];
    for (expected, input, format, precision) in test_cases {
        assert_eq!(expected.to_string(), input.to_chars_string(*format, Some(*precision)));
    }

    let long = 1e-300f64.to_chars_string(CharsFormat::Fixed, Some(2000));
    assert_eq!(2002, long.len());
}
