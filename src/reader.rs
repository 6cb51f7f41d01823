//! Buffered reader wrapper, for seamless decompression of RINEX streams.
use crate::{error::Error, hatanaka::Decompressor, lzw, lzw::LzwDecoder};

use std::io::{BufRead, BufReader, Chain, Cursor, Read, Result as IoResult};

/// A stream with a few peeked bytes stitched back in front.
pub type Preview<R> = Chain<Cursor<Vec<u8>>, R>;

/// [BufferedReader] is a [BufRead] implementer over any [Read]able
/// interface, with seamless LZW (`.Z`) and CRINEX decompression.
/// [BufferedReader::new] sniffs the stream and stacks the decoders the
/// content calls for, so `.lines()` iteration works the same on plain,
/// `.Z`, CRINEX and `.Z`-wrapped CRINEX files.
pub enum BufferedReader<R: Read> {
    /// Readable stream, forwarded as is.
    Plain(BufReader<Preview<R>>),
    /// Seamless LZW compressed stream.
    Lzw(BufReader<Preview<LzwDecoder<Preview<R>>>>),
    /// Seamless Hatanaka compressed stream.
    Crinex(BufReader<Decompressor<Preview<R>>>),
    /// Seamless LZW wrapped Hatanaka compressed stream.
    LzwCrinex(BufReader<Decompressor<Preview<LzwDecoder<Preview<R>>>>>),
}

impl<R: Read> BufferedReader<R> {
    /// Wraps `reader`, peeking at the head of the stream to decide which
    /// decoders to stack: `1F 9B` selects LZW, a first line carrying the
    /// `CRINEX VERS   / TYPE` label selects the CRINEX decoder, on top of
    /// LZW when both are present. Anything else passes through untouched.
    pub fn new(mut reader: R) -> Result<Self, Error> {
        let head = peek_line(&mut reader)?;
        if head.len() >= 2 && head[..2] == lzw::MAGIC {
            let mut decoder = LzwDecoder::new(rewind(head, reader))?;
            let inner_head = peek_line(&mut decoder)?;
            if is_crinex(&inner_head) {
                let crinex = Decompressor::new(rewind(inner_head, decoder))?;
                Ok(Self::LzwCrinex(BufReader::new(crinex)))
            } else {
                Ok(Self::Lzw(BufReader::new(rewind(inner_head, decoder))))
            }
        } else if is_crinex(&head) {
            let crinex = Decompressor::new(rewind(head, reader))?;
            Ok(Self::Crinex(BufReader::new(crinex)))
        } else {
            Ok(Self::Plain(BufReader::new(rewind(head, reader))))
        }
    }

    /// Wraps `reader` as a plain readable stream, no sniffing involved.
    pub fn plain(reader: R) -> Self {
        Self::Plain(BufReader::new(rewind(Vec::new(), reader)))
    }

    /// Wraps a known LZW compressed stream.
    pub fn lzw(reader: R) -> Result<Self, Error> {
        let decoder = LzwDecoder::new(rewind(Vec::new(), reader))?;
        Ok(Self::Lzw(BufReader::new(rewind(Vec::new(), decoder))))
    }

    /// Wraps a known CRINEX stream.
    pub fn crinex(reader: R) -> Result<Self, Error> {
        let decoder = Decompressor::new(rewind(Vec::new(), reader))?;
        Ok(Self::Crinex(BufReader::new(decoder)))
    }
}

fn rewind<R: Read>(head: Vec<u8>, reader: R) -> Preview<R> {
    Cursor::new(head).chain(reader)
}

/// Reads up to one line (LF included) or 128 bytes, whichever comes
/// first. The caller stitches the bytes back with [rewind].
fn peek_line<R: Read>(reader: &mut R) -> Result<Vec<u8>, Error> {
    let mut head = Vec::with_capacity(128);
    let mut byte = [0u8; 1];
    while head.len() < 128 {
        if reader.read(&mut byte)? == 0 {
            break;
        }
        head.push(byte[0]);
        if byte[0] == b'\n' {
            break;
        }
    }
    Ok(head)
}

fn is_crinex(line: &[u8]) -> bool {
    line.len() >= 80 && &line[60..80] == b"CRINEX VERS   / TYPE"
}

impl<R: Read> Read for BufferedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        match self {
            Self::Plain(r) => r.read(buf),
            Self::Lzw(r) => r.read(buf),
            Self::Crinex(r) => r.read(buf),
            Self::LzwCrinex(r) => r.read(buf),
        }
    }
}

/*
 * BufRead is provided for every stream flavor, so .lines() iteration
 * is available whatever the compression stack looks like.
 */
impl<R: Read> BufRead for BufferedReader<R> {
    fn fill_buf(&mut self) -> IoResult<&[u8]> {
        match self {
            Self::Plain(r) => r.fill_buf(),
            Self::Lzw(r) => r.fill_buf(),
            Self::Crinex(r) => r.fill_buf(),
            Self::LzwCrinex(r) => r.fill_buf(),
        }
    }
    fn consume(&mut self, amt: usize) {
        match self {
            Self::Plain(r) => r.consume(amt),
            Self::Lzw(r) => r.consume(amt),
            Self::Crinex(r) => r.consume(amt),
            Self::LzwCrinex(r) => r.consume(amt),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn crinex_signature() {
        let line = format!(
            "{:<60}{}\n",
            "1.0                 COMPACT RINEX FORMAT", "CRINEX VERS   / TYPE"
        );
        assert!(is_crinex(line.as_bytes()));
        assert!(!is_crinex(b"1.0                 COMPACT RINEX FORMAT"));
        assert!(!is_crinex(b""));
    }

    #[test]
    fn plain_passthrough() {
        let data = b"hello\nworld\n";
        let mut reader = BufferedReader::new(&data[..]).unwrap();
        assert!(matches!(reader, BufferedReader::Plain(_)));
        let mut copy = Vec::new();
        reader.read_to_end(&mut copy).unwrap();
        assert_eq!(copy, data);
    }

    #[test]
    fn short_stream_stays_plain() {
        let data = b"x";
        let mut reader = BufferedReader::new(&data[..]).unwrap();
        let mut copy = Vec::new();
        reader.read_to_end(&mut copy).unwrap();
        assert_eq!(copy, data);
    }
}
