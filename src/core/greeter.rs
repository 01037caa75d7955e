use crate::adapters::stdout::StdoutSink;
use crate::domain::model::{GREETING, LINE_TERMINATOR};
use crate::domain::ports::OutputSink;
use crate::utils::error::Result;

/// Writes the greeting to standard output.
pub fn greet() -> Result<()> {
    let mut sink = StdoutSink::lock();
    greet_to(&mut sink)
}

pub fn greet_to<S: OutputSink>(sink: &mut S) -> Result<()> {
    tracing::trace!("Writing greeting");
    sink.write_line(GREETING)?;
    tracing::debug!("Greeting written ({} bytes)", GREETING.len() + LINE_TERMINATOR.len());
    Ok(())
}
