//! Textual delta kernel.

/// [TextDiff] reconstructs a line of text from per-column deltas, as used
/// for CRINEX epoch descriptions. In a delta, a blank keeps the previous
/// column, `&` blanks it, any other byte replaces it. A delta longer than
/// the current content extends it.
#[derive(Debug)]
pub struct TextDiff {
    buffer: Vec<u8>,
}

impl Default for TextDiff {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDiff {
    /// Creates a new text differentiator with empty internal content.
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(256),
        }
    }

    /// Discards the internal content. The next delta then rebuilds the
    /// line from scratch.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Applies one delta and returns the reconstructed content.
    pub fn decompress(&mut self, delta: &[u8]) -> &[u8] {
        let shared = delta.len().min(self.buffer.len());
        for i in 0..shared {
            match delta[i] {
                b' ' => {},
                b'&' => self.buffer[i] = b' ',
                c => self.buffer[i] = c,
            }
        }
        for &c in &delta[shared..] {
            self.buffer.push(if c == b'&' { b' ' } else { c });
        }
        &self.buffer
    }

    /// Current reconstructed content.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }
}
