use crate::domain::model::LINE_TERMINATOR;
use crate::utils::error::Result;
use std::io::Write;

pub trait OutputSink {
    /// Writes `line` followed by a single line terminator, then flushes.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl<W: Write> OutputSink for W {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.write_all(line.as_bytes())?;
        self.write_all(LINE_TERMINATOR.as_bytes())?;
        self.flush()?;
        Ok(())
    }
}
