//! Output targets for the console and alert sinks.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

use tokio::runtime::{Handle, RuntimeFlavor};

/// Presents a message and blocks until it is dismissed.
///
/// This is the only blocking operation in the crate: the calling task is
/// suspended for as long as the presenter holds the message, which stalls
/// the event loop. Prefer the console or element sink.
pub trait AlertPresenter: Send + Sync {
    fn present(&self, message: &str);
}

/// Alert presenter for terminals: prints the message to stderr and waits for
/// Enter on stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalAlert;

impl AlertPresenter for TerminalAlert {
    fn present(&self, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "[alert] {message}");
        let _ = write!(stderr, "press Enter to continue");
        let _ = stderr.flush();
        let mut line = String::new();
        let _ = block_worker(|| io::stdin().lock().read_line(&mut line));
    }
}

/// Run a blocking call, telling a multi-threaded tokio runtime that the
/// current worker is parked so its queued tasks move elsewhere.
///
/// A current-thread runtime cannot hand off its only worker, so there (and
/// outside any runtime) the call runs directly.
pub(crate) fn block_worker<R>(f: impl FnOnce() -> R) -> R {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}

/// Alert presenter that prints without waiting. Used when stdin is not a
/// terminal and nobody could dismiss a prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrAlert;

impl AlertPresenter for StderrAlert {
    fn present(&self, message: &str) {
        let _ = writeln!(io::stderr().lock(), "[alert] {message}");
    }
}

/// Cloneable in-memory writer.
///
/// Hand one clone to the logger as its console and read the captured lines
/// back through another.
#[derive(Debug, Default, Clone)]
pub struct BufferWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        match self.buf.lock() {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        }
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for BufferWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self
            .buf
            .lock()
            .map_err(|_| io::Error::other("buffer lock poisoned"))?;
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
