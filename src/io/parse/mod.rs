//! Line oriented scanning of text mesh files.
//!
//! Text formats like OFF are parsed one line at a time. Lines that don't
//! contain what the parser is looking for are skipped. This module
//! implements that policy in one place: [`LineScanner::next_record`] reads
//! lines until one of them can be parsed as a fixed number of values.

use std::{
    borrow::Cow,
    io::{self, BufRead},
    str::FromStr,
};

use failure::Fail;




#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "IO error: {}", _0)]
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(src: io::Error) -> Self {
        Error::Io(src)
    }
}

/// Reads lines from a `BufRead` and keeps track of the line number.
#[derive(Debug)]
pub struct LineScanner<R: BufRead> {
    reader: R,
    buf: Vec<u8>,

    /// 1-based number of the line currently in `buf` (0 before the first
    /// line is read).
    line: usize,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }

    /// Number of the line returned last (1-based).
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Reads the next line, without its line terminator. Returns `None` at
    /// EOF.
    ///
    /// Files are not required to be valid UTF-8: invalid sequences are
    /// replaced by `U+FFFD` which won't parse as a number.
    pub fn next_line(&mut self) -> Result<Option<Cow<'_, str>>, Error> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        let mut line = &self.buf[..];
        if line.ends_with(b"\n") {
            line = &line[..line.len() - 1];
        }
        if line.ends_with(b"\r") {
            line = &line[..line.len() - 1];
        }

        Ok(Some(String::from_utf8_lossy(line)))
    }

    /// Reads lines until one can be parsed by [`parse_fields`] and returns
    /// the parsed values. Lines that can't be parsed are skipped. Returns
    /// `None` if EOF is reached first.
    pub fn next_record<T, const N: usize>(&mut self, skip: usize) -> Result<Option<[T; N]>, Error>
    where
        T: FromStr + Copy + Default,
    {
        while let Some(line) = self.next_line()? {
            if let Some(values) = parse_fields(&line, skip) {
                return Ok(Some(values));
            }
        }

        Ok(None)
    }
}

/// Parses the first `N` whitespace separated tokens of `line` (after
/// skipping `skip` tokens) as values of type `T`.
///
/// Returns `None` if there are not enough tokens or one of them does not
/// parse. Additional tokens after the first `N` are ignored.
pub fn parse_fields<T, const N: usize>(line: &str, skip: usize) -> Option<[T; N]>
where
    T: FromStr + Copy + Default,
{
    let mut tokens = line.split_whitespace().skip(skip);
    let mut out = [T::default(); N];
    for slot in &mut out {
        *slot = tokens.next()?.parse().ok()?;
    }

    Some(out)
}
