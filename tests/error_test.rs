use std::io;

use fetchfmt::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::ArgumentError("bad value".to_string());
    assert_eq!(err.to_string(), "Argument error: bad value.");

    assert!(Error::FormatMissing.to_string().starts_with("Nothing to render"));
}
