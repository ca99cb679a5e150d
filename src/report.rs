//! Reporter - append-only line sink for the benchmark report
//!
//! The file is truncated exactly once, when the reporter is created, and
//! every later write appends a single newline-terminated line. The file
//! handle is line-buffered so an interrupted run still leaves a readable
//! prefix of complete lines. Dropping the reporter releases the handle.

use std::fs::File;
use std::io::{LineWriter, Write};
use std::path::Path;

use crate::{Error, Result};

/// Single-writer text sink.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    sink: W,
    lines_written: usize,
}

impl Reporter<LineWriter<File>> {
    /// Create or truncate the report at `path` and write the banner line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReportInit`] if the file cannot be created, and
    /// [`Error::Io`] if the banner cannot be written.
    pub fn create(path: impl AsRef<Path>, banner: &str) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::ReportInit {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "report sink truncated");

        let mut reporter = Self::from_writer(LineWriter::new(file));
        reporter.append(banner)?;
        Ok(reporter)
    }
}

impl<W: Write> Reporter<W> {
    /// Wrap an already-open sink. Nothing is written.
    pub const fn from_writer(sink: W) -> Self {
        Self {
            sink,
            lines_written: 0,
        }
    }

    /// Append `line` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the sink rejects the write.
    pub fn append(&mut self, line: &str) -> Result<()> {
        self.sink.write_all(line.as_bytes())?;
        self.sink.write_all(b"\n")?;
        self.lines_written += 1;
        Ok(())
    }

    /// Append an empty line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the sink rejects the write.
    pub fn append_blank(&mut self) -> Result<()> {
        self.append("")
    }

    /// Number of lines appended so far, banner included.
    #[must_use]
    pub const fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush and hand back the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the final flush fails.
    pub fn into_inner(mut self) -> Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
