//! The two-pass transform.
//!
//! The first pass counts, for every edge line, its destination (and its
//! source when the graph is undirected). The second pass writes every edge
//! line back as `first\tsecond\tcount`, where `count` is the tally of the
//! *first* field. Lines not starting with a digit are copied through.
use crate::degree::DegreeCounter;
use crate::edge::EdgeLine;
use crate::error::{Error, Result};
use crate::vertex::VertexId;
use std::io::{BufRead, Seek, SeekFrom, Write};

/// What one run went through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub data_lines: usize,
    pub passthrough_lines: usize,
    /// Distinct vertices in the counter after the first pass.
    pub vertices: usize,
    pub undirected: bool,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} edges, {} passthrough lines, {} counted vertices ({})",
            self.data_lines,
            self.passthrough_lines,
            self.vertices,
            if self.undirected {
                "undirected"
            } else {
                "directed"
            }
        )
    }
}

#[derive(Debug, Clone)]
pub struct EdgeDegreeAnnotator<T: VertexId> {
    counter: DegreeCounter<T>,
    undirected: bool,
    data_lines: usize,
    passthrough_lines: usize,
}

impl<T: VertexId> EdgeDegreeAnnotator<T> {
    pub fn new(undirected: bool) -> Self {
        Self {
            counter: DegreeCounter::new(),
            undirected,
            data_lines: 0,
            passthrough_lines: 0,
        }
    }
    pub fn counter(&self) -> &DegreeCounter<T> {
        &self.counter
    }
    pub fn summary(&self) -> Summary {
        Summary {
            data_lines: self.data_lines,
            passthrough_lines: self.passthrough_lines,
            vertices: self.counter.len(),
            undirected: self.undirected,
        }
    }
    /// First pass over one line.
    pub fn count_line(&mut self, line_number: usize, line: &[u8]) -> Result<()> {
        match parse_line::<T>(line_number, line)? {
            EdgeLine::Edge { source, dest } => {
                self.data_lines += 1;
                self.counter.add_edge(source, dest, self.undirected);
            }
            EdgeLine::Passthrough(_) => self.passthrough_lines += 1,
        }
        Ok(())
    }
    /// Second pass over one line. The counter is only read here.
    pub fn write_line<W: Write>(&self, line_number: usize, line: &[u8], out: &mut W) -> Result<()> {
        match parse_line::<T>(line_number, line)? {
            EdgeLine::Edge { source, dest } => {
                writeln!(out, "{}\t{}\t{}", source, dest, self.counter.get(&source))?
            }
            EdgeLine::Passthrough(raw) => {
                out.write_all(raw)?;
                out.write_all(b"\n")?;
            }
        }
        Ok(())
    }
    /// Run the first pass over a whole reader.
    pub fn count<R: BufRead>(&mut self, input: R) -> Result<()> {
        for_each_line(input, |idx, line| self.count_line(idx, line))?;
        debug!(
            "First pass done. {} edges, {} distinct vertices.",
            self.data_lines,
            self.counter.len()
        );
        Ok(())
    }
    /// Run the second pass over a whole reader.
    pub fn emit<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<()> {
        for_each_line(input, |idx, line| self.write_line(idx, line, out))?;
        out.flush()?;
        debug!("Second pass done.");
        Ok(())
    }
}

fn parse_line<T: VertexId>(line_number: usize, line: &[u8]) -> Result<EdgeLine<'_, T>> {
    EdgeLine::parse(line).map_err(|reason| Error::Parse {
        line_number,
        line: String::from_utf8_lossy(line).into_owned(),
        reason,
    })
}

/// Call `f` on every line of `input`, with 1-based line numbers.
/// Lines are split at `\n` only and handed over without it, as raw bytes.
fn for_each_line<R, F>(mut input: R, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &[u8]) -> Result<()>,
{
    let mut buffer = vec![];
    let mut line_number = 0;
    while input.read_until(b'\n', &mut buffer)? != 0 {
        line_number += 1;
        let line = buffer.strip_suffix(b"\n").unwrap_or(&buffer[..]);
        f(line_number, line)?;
        buffer.clear();
    }
    Ok(())
}

/// Annotate a seekable input. The input is rewound between the passes,
/// so it must be positioned at its start when handed over.
pub fn annotate<T, R, W>(mut input: R, output: &mut W, undirected: bool) -> Result<Summary>
where
    T: VertexId,
    R: BufRead + Seek,
    W: Write,
{
    let mut annotator = EdgeDegreeAnnotator::<T>::new(undirected);
    annotator.count(&mut input)?;
    input.seek(SeekFrom::Start(0))?;
    annotator.emit(&mut input, output)?;
    Ok(annotator.summary())
}

/// Annotate an input that can not be rewound, such as a pipe.
/// Every line is kept in memory between the passes.
pub fn annotate_buffered<T, R, W>(input: R, output: &mut W, undirected: bool) -> Result<Summary>
where
    T: VertexId,
    R: BufRead,
    W: Write,
{
    let mut annotator = EdgeDegreeAnnotator::<T>::new(undirected);
    let mut lines = vec![];
    for_each_line(input, |idx, line| {
        annotator.count_line(idx, line)?;
        lines.push(line.to_vec());
        Ok(())
    })?;
    debug!("Buffered {} lines.", lines.len());
    for (idx, line) in lines.iter().enumerate() {
        annotator.write_line(idx + 1, line, output)?;
    }
    output.flush()?;
    Ok(annotator.summary())
}
