#![cfg(feature = "with-serde")]

use num_charconv::{to_chars, CharsFormat, Error, ErrorKind};

#[test]
fn test_serialization() {
    let formats = [
        CharsFormat::Plain,
        CharsFormat::Fixed,
        CharsFormat::Scientific,
        CharsFormat::General,
    ];
    for format in &formats {
        let s = serde_json::to_string(format).unwrap();
        let actual: CharsFormat = serde_json::from_str(&s).unwrap();
        assert_eq!(*format, actual);
    }
    assert_eq!("\"Scientific\"", serde_json::to_string(&CharsFormat::Scientific).unwrap());

    let mut buf = [0u8; 2];
    let err = to_chars(&mut buf, 1.25).unwrap_err();
    let s = serde_json::to_string(&err).unwrap();
    let actual: Error = serde_json::from_str(&s).unwrap();
    assert_eq!(err, actual);
    assert_eq!(&ErrorKind::ValueTooLarge { needed: 4, cap: 2 }, actual.kind());
}
