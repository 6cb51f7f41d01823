//! Logical line extraction over any [Read]able interface.
use std::io::{BufRead, BufReader, Read, Result as IoResult};

/// [LineReader] produces one logical line per call. A line is terminated
/// by LF (stripped) or end of stream; trailing blanks are preserved,
/// because CRINEX and RINEX fields live at fixed column offsets.
pub struct LineReader<R: Read> {
    inner: BufReader<R>,
}

impl<R: Read> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
        }
    }

    /// Reads the next line into `buf` (cleared first).
    /// Returns false on end of stream. A partial final line
    /// (no LF before EOF) is returned once.
    pub fn next_line(&mut self, buf: &mut Vec<u8>) -> IoResult<bool> {
        buf.clear();
        let size = self.inner.read_until(b'\n', buf)?;
        if size == 0 {
            return Ok(false);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        Ok(true)
    }
}
