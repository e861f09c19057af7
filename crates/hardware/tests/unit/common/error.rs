//! Error Reporting Tests.
//!
//! Checks the user-facing messages and the conversions into `SimError`.

use std::path::PathBuf;

use cachesim_core::common::{ConfigError, LoadError, SimError};
use pretty_assertions::assert_eq;

#[test]
fn out_of_bounds_message_names_address_and_capacity() {
    let err = SimError::OutOfBounds {
        address: -3,
        capacity: 256,
    };
    assert_eq!(
        err.to_string(),
        "memory access out of bounds: address -3 (memory holds 256 words)"
    );
}

#[test]
fn config_errors_convert_transparently() {
    let err: SimError = ConfigError::NotPowerOfTwo {
        field: "sets",
        value: 3,
    }
    .into();
    assert!(matches!(err, SimError::Config(_)));
    assert_eq!(err.to_string(), "sets must be a power of two, got 3");
}

#[test]
fn load_errors_convert_transparently() {
    let err: SimError = LoadError::Parse {
        line: 4,
        text: "abc".to_string(),
    }
    .into();
    assert!(matches!(err, SimError::Load(_)));
    assert_eq!(err.to_string(), "line 4: 'abc' is not a valid machine word");
}

#[test]
fn io_errors_keep_their_source() {
    use std::error::Error as _;

    let err = LoadError::Io {
        path: PathBuf::from("missing.mc"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert!(err.to_string().starts_with("cannot open file 'missing.mc'"));
    assert!(err.source().is_some());
}

#[test]
fn instruction_limit_message() {
    let err = SimError::InstructionLimit { limit: 1000 };
    assert_eq!(
        err.to_string(),
        "instruction limit of 1000 reached without halting"
    );
}
