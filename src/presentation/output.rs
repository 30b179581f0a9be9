use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Shared line-oriented sink for everything the CLI prints.
#[derive(Clone)]
pub struct TerminalOutput {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl TerminalOutput {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Write `text` followed by a newline and flush.
    pub fn write_block(&self, text: &str) -> io::Result<()> {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(text.as_bytes())?;
        sink.write_all(b"\n")?;
        sink.flush()
    }
}
