//! Annotate a text edge list with a per-vertex count, as input for
//! PageRank-like programs.
//!
//! Every data line `first second` is rewritten as `first\tsecond\tcount`,
//! where `count` is the number of times `first` appeared as a destination
//! somewhere in the file (or as either endpoint, for undirected graphs).
//! Lines that do not start with a digit are copied as they are.
//! # Example
//! ```
//! let mut out = vec![];
//! let input = std::io::Cursor::new("# comment\n1 2\n2 3\n");
//! pr_input::annotate::<u32, _, _>(input, &mut out, false).unwrap();
//! assert_eq!(out, b"# comment\n1\t2\t0\n2\t3\t1\n");
//! ```
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;
extern crate serde_json;
extern crate thiserror;
pub mod annotate;
pub mod degree;
pub mod edge;
pub mod error;
pub mod vertex;
pub use annotate::{annotate, annotate_buffered, EdgeDegreeAnnotator, Summary};
pub use degree::DegreeCounter;
pub use edge::EdgeLine;
pub use error::{Error, Result};
pub use vertex::VertexId;

/// Write `summary` as pretty-printed JSON.
pub fn write_summary<W: std::io::Write>(summary: &Summary, mut wtr: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut wtr, summary)?;
    wtr.flush()?;
    Ok(())
}
