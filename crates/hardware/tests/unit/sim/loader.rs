//! Program Loader Tests.

use std::io::Write;

use cachesim_core::Simulator;
use cachesim_core::common::{LoadError, SimError};
use cachesim_core::config::Config;
use cachesim_core::sim::loader::{load_image, parse_image};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn parses_one_word_per_line() {
    let image = parse_image("8454151\n-1\n0\n25165824\n").unwrap();
    assert_eq!(image, vec![8_454_151, -1, 0, 25_165_824]);
}

#[test]
fn tolerates_surrounding_whitespace_and_crlf() {
    let image = parse_image("  12\t\r\n+7\r\n   -3   ").unwrap();
    assert_eq!(image, vec![12, 7, -3]);
}

#[test]
fn ignores_trailing_blank_lines() {
    assert_eq!(parse_image("1\n2\n\n  \n\n").unwrap(), vec![1, 2]);
}

#[test]
fn empty_text_is_an_empty_image() {
    assert!(parse_image("").unwrap().is_empty());
    assert!(parse_image("\n\n").unwrap().is_empty());
}

#[rstest]
#[case("1\nfoo\n3", 2, "foo")]
#[case("1\n\n3", 2, "")]
#[case("2147483648", 1, "2147483648")]
#[case("1\n2\n3 4", 3, "3 4")]
#[case("0x10", 1, "0x10")]
fn malformed_line_is_reported(#[case] text: &str, #[case] line: usize, #[case] bad: &str) {
    match parse_image(text) {
        Err(LoadError::Parse { line: l, text: t }) => {
            assert_eq!(l, line);
            assert_eq!(t, bad);
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "29360128").unwrap();
    writeln!(file, "25165824").unwrap();

    assert_eq!(load_image(file.path()).unwrap(), vec![29_360_128, 25_165_824]);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_image("/nonexistent/program.mc").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn image_larger_than_memory_is_rejected() {
    let mut config = Config::default();
    config.memory.size_words = 4;

    let err = Simulator::new(&config, &[0; 5]).unwrap_err();
    assert!(matches!(
        err,
        SimError::Load(LoadError::TooLarge {
            words: 5,
            capacity: 4
        })
    ));
}
