//! Classification of raw lines of an edge list.
use crate::error::ParseReason;
use crate::vertex::{leading_number, VertexId};

/// One line of an edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLine<'a, T> {
    /// A line starting with an ASCII digit, read as `source -> dest`.
    Edge { source: T, dest: T },
    /// Anything else, including blank lines. Never parsed nor decoded,
    /// so it may be in any encoding.
    Passthrough(&'a [u8]),
}

/// Whether `line` carries edge data, i.e., starts with an ASCII digit.
pub fn is_data(line: &[u8]) -> bool {
    line.first().map_or(false, u8::is_ascii_digit)
}

impl<'a, T: VertexId> EdgeLine<'a, T> {
    /// Classify and parse a line. The line must not contain its
    /// terminating newline.
    ///
    /// The first field is the run of digits at the head of the line.
    /// Exactly one byte after it is taken as the separator whatever it is,
    /// so a multi-byte separator leaves garbage in front of the second
    /// field and fails. The second field is the number after that,
    /// optionally preceded by whitespace. Trailing content is ignored.
    pub fn parse(line: &'a [u8]) -> Result<Self, ParseReason> {
        if !is_data(line) {
            return Ok(EdgeLine::Passthrough(line));
        }
        let (source, first_len) =
            leading_number::<T>(line).ok_or(ParseReason::First(T::WIDTH))?;
        let rest = match line.get(first_len + 1..) {
            Some(rest) => rest,
            None => return Err(ParseReason::MissingSecond),
        };
        if rest.iter().all(u8::is_ascii_whitespace) {
            return Err(ParseReason::MissingSecond);
        }
        let (dest, _) = leading_number(rest).ok_or(ParseReason::Second(T::WIDTH))?;
        Ok(EdgeLine::Edge { source, dest })
    }
}
