//! Streaming line splitter for response bodies.
//!
//! Turns the byte chunks delivered by the transfer's write callback into
//! lines. Recognizes `\n`, `\r\n`, and a lone `\r` as terminators; body
//! bytes otherwise pass through undecoded, so non-UTF-8 responses are
//! reproduced as received.

use std::io::Write;

/// Splits incoming body bytes into lines and writes them to `sink`.
///
/// Lines are emitted in arrival order, each followed by a single `\n`, and
/// the sink is flushed after every line so output keeps pace with the wire.
/// Holds at most one partial line plus a one-byte carriage-return lookahead.
pub struct LinePrinter<W: Write> {
    sink: W,
    /// Bytes of the current, not-yet-terminated line.
    partial: Vec<u8>,
    /// A `\r` ended the previous chunk; a leading `\n` in the next chunk
    /// belongs to the same terminator.
    pending_cr: bool,
    lines_written: u64,
}

impl<W: Write> LinePrinter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            partial: Vec::new(),
            pending_cr: false,
            lines_written: 0,
        }
    }

    /// Number of lines written to the sink so far.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Consumes one chunk of body bytes, writing every line it completes.
    pub fn push(&mut self, data: &[u8]) -> std::io::Result<()> {
        for &b in data {
            if self.pending_cr {
                self.pending_cr = false;
                if b == b'\n' {
                    continue;
                }
            }
            match b {
                b'\n' => self.emit()?,
                b'\r' => {
                    self.emit()?;
                    self.pending_cr = true;
                }
                _ => self.partial.push(b),
            }
        }
        Ok(())
    }

    /// Writes a trailing unterminated line at end of stream.
    pub fn finish(&mut self) -> std::io::Result<()> {
        if !self.partial.is_empty() {
            self.emit()?;
        }
        Ok(())
    }

    fn emit(&mut self) -> std::io::Result<()> {
        self.sink.write_all(&self.partial)?;
        self.sink.write_all(b"\n")?;
        self.sink.flush()?;
        self.partial.clear();
        self.lines_written += 1;
        Ok(())
    }
}
