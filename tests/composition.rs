mod common;

use common::lzw_literals;
use crinex::reader::BufferedReader;
use std::io::{BufRead, Read};

fn label(content: &str, label: &str) -> String {
    format!("{:<60}{}\n", content, label)
}

fn sample_crinex() -> String {
    let mut s = String::new();
    s.push_str(&label(
        "1.0                 COMPACT RINEX FORMAT",
        "CRINEX VERS   / TYPE",
    ));
    s.push_str(&label("RNX2CRX ver.4.0.7", "CRINEX PROG / DATE"));
    s.push_str(&label(
        "     2.11           OBSERVATION DATA    G (GPS)",
        "RINEX VERSION / TYPE",
    ));
    s.push_str(&label("     1    C1", "# / TYPES OF OBSERV"));
    s.push_str(&label("", "END OF HEADER"));
    s.push_str("&10  1  1  0  0  0.0000000  0  1G01\n");
    s.push_str("\n");
    s.push_str("0&23456789\n");
    s
}

fn expected_rinex() -> String {
    let mut s = String::new();
    s.push_str(&label(
        "     2.11           OBSERVATION DATA    G (GPS)",
        "RINEX VERSION / TYPE",
    ));
    s.push_str(&label("     1    C1", "# / TYPES OF OBSERV"));
    s.push_str(&label("", "END OF HEADER"));
    s.push_str(" 10  1  1  0  0  0.0000000  0  1G01\n");
    s.push_str("     23456.789\n");
    s
}

#[test]
fn plain_rinex_passes_through() {
    let plain = expected_rinex();
    let mut reader = BufferedReader::new(plain.as_bytes()).unwrap();
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, plain);
}

#[test]
fn crinex_is_detected_and_decoded() {
    let input = sample_crinex();
    let mut reader = BufferedReader::new(input.as_bytes()).unwrap();
    assert!(matches!(reader, BufferedReader::Crinex(_)));
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, expected_rinex());
}

#[test]
fn z_compressed_plain_text() {
    let text = expected_rinex();
    let compressed = lzw_literals(text.as_bytes(), 16, true);
    let mut reader = BufferedReader::new(&compressed[..]).unwrap();
    assert!(matches!(reader, BufferedReader::Lzw(_)));
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, text);
}

#[test]
fn z_compressed_crinex() {
    let compressed = lzw_literals(sample_crinex().as_bytes(), 16, true);
    let mut reader = BufferedReader::new(&compressed[..]).unwrap();
    assert!(matches!(reader, BufferedReader::LzwCrinex(_)));
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, expected_rinex());
}

#[test]
fn line_iteration_over_compressed_stream() {
    let compressed = lzw_literals(sample_crinex().as_bytes(), 16, true);
    let reader = BufferedReader::new(&compressed[..]).unwrap();
    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>().unwrap();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("     2.11"));
    assert_eq!(lines[2].trim_end(), "END OF HEADER");
    assert_eq!(lines[4], "     23456.789");
}

#[test]
fn explicit_constructors() {
    let input = sample_crinex();
    let mut reader = BufferedReader::crinex(input.as_bytes()).unwrap();
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, expected_rinex());

    let text = "no signature here\n";
    let mut reader = BufferedReader::plain(text.as_bytes());
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, text);
}
