use std::{fs, io, path::Path};

/// A candidate data line and its 1-based line number in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub line: usize,
    pub text: &'a str,
}

/// Input split into data records and header lines.
#[derive(Debug, Clone, Default)]
pub struct Records<'a> {
    pub data: Vec<Record<'a>>,
    pub headers_skipped: usize,
}

pub fn read_text<P: AsRef<Path>>(path: P) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Splits text into lines the way a universal-newline reader does.
///
/// `\r\n`, `\r` and `\n` all end a line. Each line is yielded without its
/// terminator, together with whether it had one.
fn lines(input: &str) -> impl Iterator<Item = (&str, bool)> {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let terminator_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                let text = &rest[..end];
                rest = &rest[end + terminator_len..];
                Some((text, true))
            }
            None => {
                let text = rest;
                rest = "";
                Some((text, false))
            }
        }
    })
}

/// Splits the input into lines and keeps those long enough to hold partial data.
///
/// SPEAR writes a few short header lines and one short `index point-count start end`
/// line before each partial. Those are told apart from data purely by length: a line
/// is data when its length in characters, counting any line terminator as one, is at
/// least `min_line_length`.
///
/// # Arguments
///
/// * `input` - The whole text export.
/// * `min_line_length` - Shortest line treated as data.
///
/// # Returns
///
/// * The data records in input order, without terminators, and how many lines were discarded.
pub fn split_records(input: &str, min_line_length: usize) -> Records<'_> {
    let mut records = Records::default();
    for (i, (text, terminated)) in lines(input).enumerate() {
        let length = text.chars().count() + usize::from(terminated);
        if length >= min_line_length {
            records.data.push(Record { line: i + 1, text });
        } else {
            records.headers_skipped += 1;
        }
    }
    records
}
