//! Vertex identifiers and the scanner reading them out of a line.
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// An unsigned integer naming a vertex.
/// The width decides which ids are accepted: a number that does not
/// fit is a parse failure, not a silent truncation.
pub trait VertexId: Copy + Eq + Hash + Ord + Debug + Display + FromStr {
    /// The name of the width, used in error messages.
    const WIDTH: &'static str;
}

macro_rules! impl_vertex_id {
    ($($t:ty),*) => {
        $(
            impl VertexId for $t {
                const WIDTH: &'static str = stringify!($t);
            }
        )*
    };
}

impl_vertex_id!(u16, u32, u64, usize);

/// Returns the length of the run of ASCII digits at the head of `bytes`.
pub fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse the number at the head of `bytes`.
/// Returns the value and the number of bytes consumed.
/// Leading whitespace and a single `+` are skipped, as `strtoul` would.
/// `None` if there are no digits or the value overflows `T`.
pub fn leading_number<T: VertexId>(bytes: &[u8]) -> Option<(T, usize)> {
    let mut start = bytes
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count();
    if bytes.get(start) == Some(&b'+') {
        start += 1;
    }
    let len = digit_run(&bytes[start..]);
    if len == 0 {
        return None;
    }
    let end = start + len;
    // Only ASCII digits here, so this never fails.
    let digits = std::str::from_utf8(&bytes[start..end]).ok()?;
    digits.parse().ok().map(|value| (value, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn digits() {
        assert_eq!(digit_run(b"123\t4"), 3);
        assert_eq!(digit_run(b"x1"), 0);
        assert_eq!(digit_run(b""), 0);
    }
    #[test]
    fn leading() {
        assert_eq!(leading_number::<u32>(b"42\t7"), Some((42, 2)));
        assert_eq!(leading_number::<u32>(b"  +9 rest"), Some((9, 4)));
        assert_eq!(leading_number::<u32>(b"007"), Some((7, 3)));
        assert_eq!(leading_number::<u32>(b""), None);
        assert_eq!(leading_number::<u32>(b"-3"), None);
        assert_eq!(leading_number::<u32>(b"abc"), None);
    }
    #[test]
    fn overflow_is_rejected() {
        assert_eq!(leading_number::<u16>(b"65535"), Some((65535, 5)));
        assert_eq!(leading_number::<u16>(b"65536"), None);
        assert_eq!(leading_number::<u32>(b"4294967296"), None);
        assert_eq!(
            leading_number::<u64>(b"4294967296"),
            Some((4_294_967_296, 10))
        );
    }
}
