use std::io::{self, StdoutLock, Write};

/// Process standard output, held locked for the lifetime of the sink.
pub struct StdoutSink {
    inner: StdoutLock<'static>,
}

impl StdoutSink {
    pub fn lock() -> Self {
        Self {
            inner: io::stdout().lock(),
        }
    }
}

impl Write for StdoutSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
