//! Append-only output for extracted links.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Newline-delimited sink for extracted links, one record per line.
pub struct LinkSink<W: Write> {
    writer: W,
    count: usize,
}

impl LinkSink<BufWriter<File>> {
    /// Create or truncate the output file.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> LinkSink<W> {
    /// Wrap an existing writer.
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }

    /// Append one link as a single line.
    pub fn append(&mut self, link: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", link)?;
        self.count += 1;
        Ok(())
    }

    /// Number of links written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Flush buffered records to the underlying writer.
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
