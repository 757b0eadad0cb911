//! Byte sinks a logger writes to.
//!
//! [`Sink`] is either a caller-supplied [`io::Write`] or the discard
//! variant. The logger always writes through `Sink`, so a fully silent
//! logger takes the same path as an enabled one.

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Writer that accepts and drops every byte, reporting success.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl Write for NullSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Destination of a logger's lines.
pub enum Sink {
    /// Drop everything.
    Discard(NullSink),
    /// Forward to a caller-supplied writer.
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    /// Creates the discard sink.
    #[must_use]
    pub const fn discard() -> Self {
        Self::Discard(NullSink)
    }

    /// Wraps a writer.
    pub fn writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::Writer(Box::new(writer))
    }

    /// Returns true for the discard variant.
    #[must_use]
    pub const fn is_discard(&self) -> bool {
        matches!(self, Self::Discard(_))
    }
}

impl<W> From<Option<W>> for Sink
where
    W: Write + Send + 'static,
{
    fn from(writer: Option<W>) -> Self {
        writer.map_or_else(Self::discard, Self::writer)
    }
}

impl From<NullSink> for Sink {
    fn from(sink: NullSink) -> Self {
        Self::Discard(sink)
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Discard(null) => null.write(buf),
            Self::Writer(inner) => inner.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Discard(null) => null.write_all(buf),
            Self::Writer(inner) => inner.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Discard(null) => null.flush(),
            Self::Writer(inner) => inner.flush(),
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discard(_) => f.write_str("Sink::Discard"),
            Self::Writer(_) => f.write_str("Sink::Writer(..)"),
        }
    }
}

/// Shared in-memory buffer.
///
/// Clones share the same bytes, so one handle can be given to a logger and
/// another kept for reading the output back.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the bytes written so far.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.buf.lock().clone()
    }

    /// Returns the bytes written so far as (lossy) UTF-8.
    #[must_use]
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Returns the written lines without their terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_owned).collect()
    }

    /// Returns true if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    /// Drops the buffered bytes.
    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
