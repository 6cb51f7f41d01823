//! LZW (compress `.Z`) streaming decompression.
//!
//! [LzwDecoder] decodes the variable-width, block-mode LZW format produced
//! by the historical `compress(1)` utility, over any [Read]able interface.
//! RINEX archives from the IGS era are frequently distributed this way,
//! usually with a Hatanaka-compressed payload inside.

use crate::error::Error;
use std::io::{Read, Result as IoResult};

/// Stream signature, first two bytes of any `.Z` file.
pub const MAGIC: [u8; 2] = [0x1f, 0x9b];

/// String table size. Large enough for the widest (16 bit) code space.
const HSIZE: usize = 1 << 17;

/// Initial code width, in bits.
const INIT_BITS: u32 = 9;

/// Largest code width this format allows.
const MAX_BITS: u32 = 16;

/// Table reset code, only meaningful in block mode.
const CLEAR: u32 = 256;

/// First assignable code in block mode.
const FIRST: u32 = 257;

/// Upstream read granularity.
const IN_CHUNK: usize = 1024;

/// Decoded bytes accumulated before yielding back to the caller.
const OUT_TARGET: usize = 2048;

/// [LzwDecoder] statefully decodes a `.Z` framed LZW stream pulled from
/// any [Read]able interface, and is itself [Read]able: wrap a file (or
/// another filter) in it and read plain bytes out. Arbitrary read sizes
/// are supported, mid-string state is carried over between calls.
///
/// The 3 byte header is consumed and validated at construction, so
/// framing problems are reported before the first read.
pub struct LzwDecoder<R: Read> {
    reader: R,
    /// Code width ceiling, from the header flags byte.
    maxbits: u32,
    /// Whether code 256 resets the string table.
    block_mode: bool,
    /// Current code width.
    n_bits: u32,
    /// Largest code readable at the current width.
    maxcode: u32,
    bitmask: u32,
    /// Next code the encoder will have assigned.
    free_ent: u32,
    /// Previously decoded code. `None` until the first code was read.
    oldcode: Option<u32>,
    /// First byte of the previously decoded string.
    finchar: u8,
    /// String table: last byte of each code's string.
    htab: Vec<u32>,
    /// String table: previous-code links.
    codetab: Vec<u16>,
    inbuf: Vec<u8>,
    insize: usize,
    /// Bit offset of the next code, relative to `inbuf[0]`.
    posbits: usize,
    /// Absolute bit position of `inbuf[0]` within the payload.
    origin: u64,
    /// Absolute bit position of the last width change or table reset.
    /// Code groups re-align on these boundaries.
    base: u64,
    /// Size of the most recent upstream read.
    rsize: usize,
    /// Scratch holding one decoded string, in reverse order.
    stack: Vec<u8>,
    /// Decoded bytes not yet delivered to the caller.
    pending: Vec<u8>,
    pending_pos: usize,
    done: bool,
}

impl<R: Read> LzwDecoder<R> {
    /// Builds a new [LzwDecoder] over `reader`, consuming and validating
    /// the 3 byte `.Z` header.
    pub fn new(mut reader: R) -> Result<Self, Error> {
        let mut header = [0u8; 3];
        let mut got = 0;
        while got < 3 {
            let n = reader.read(&mut header[got..])?;
            if n == 0 {
                return Err(Error::NotLzwStream);
            }
            got += n;
        }
        if header[..2] != MAGIC {
            return Err(Error::NotLzwStream);
        }
        let flags = header[2];
        if flags & 0x60 != 0 {
            return Err(Error::LzwReservedFlags(flags));
        }
        let maxbits = (flags & 0x1f) as u32;
        if !(INIT_BITS..=MAX_BITS).contains(&maxbits) {
            return Err(Error::LzwUnsupportedWidth(maxbits as u8));
        }
        let block_mode = flags & 0x80 != 0;

        let mut htab = vec![0u32; HSIZE];
        for (code, entry) in htab.iter_mut().enumerate().take(256) {
            *entry = code as u32;
        }

        Ok(Self {
            reader,
            maxbits,
            block_mode,
            htab,
            codetab: vec![0u16; HSIZE],
            n_bits: INIT_BITS,
            maxcode: (1 << INIT_BITS) - 1,
            bitmask: (1 << INIT_BITS) - 1,
            free_ent: if block_mode { FIRST } else { 256 },
            oldcode: None,
            finchar: 0,
            inbuf: vec![0u8; IN_CHUNK + 64],
            insize: 0,
            posbits: 0,
            origin: 0,
            base: 0,
            rsize: 1,
            stack: Vec::with_capacity(256),
            pending: Vec::with_capacity(OUT_TARGET + 64),
            pending_pos: 0,
            done: false,
        })
    }

    /// Consumes the decoder, returning the upstream reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Decodes input codes into `pending` until enough output accumulated,
    /// the input is exhausted, or more upstream data is required.
    fn decode_chunk(&mut self) -> Result<(), Error> {
        let maxmaxcode: u32 = 1 << self.maxbits;

        'refill: loop {
            // drop consumed whole bytes, keeping the bit remainder.
            // An alignment skip may overshoot a truncated stream, hence
            // the clamp.
            let consumed = (self.posbits >> 3).min(self.insize);
            if consumed > 0 {
                self.inbuf.copy_within(consumed..self.insize, 0);
                self.insize -= consumed;
                self.posbits -= consumed << 3;
                self.origin += (consumed as u64) << 3;
            }

            if self.insize < IN_CHUNK {
                let cap = self.inbuf.len() - 2;
                self.rsize = self.reader.read(&mut self.inbuf[self.insize..cap])?;
                self.insize += self.rsize;
            }

            // Codes are only consumed in whole groups of n_bits bytes
            // (8 codes), counted from the last width change: a width
            // switch re-aligns on such a boundary. The trailing partial
            // group is decoded once the input is exhausted.
            let end = self.origin + ((self.insize as u64) << 3);
            let limit = if self.rsize > 0 {
                let x = (self.n_bits as u64) << 3;
                // an alignment skip may sit past the data on a truncated
                // stream, in which case nothing is consumable yet
                if end <= self.base {
                    self.base
                } else {
                    end - (end - self.base) % x
                }
            } else {
                end.saturating_sub(self.n_bits as u64 - 1)
            };

            loop {
                let abs = self.origin + self.posbits as u64;
                if abs >= limit {
                    break;
                }

                if self.free_ent > self.maxcode {
                    // width exhausted: skip to the next group boundary
                    // and widen the codes
                    let x = (self.n_bits as u64) << 3;
                    let rel = abs - self.base;
                    self.posbits += ((x - rel % x) % x) as usize;
                    self.n_bits += 1;
                    self.maxcode = if self.n_bits == self.maxbits {
                        maxmaxcode
                    } else {
                        (1 << self.n_bits) - 1
                    };
                    self.bitmask = (1 << self.n_bits) - 1;
                    self.base = self.origin + self.posbits as u64;
                    continue 'refill;
                }

                // little-endian extraction of one code
                let idx = self.posbits >> 3;
                let window = self.inbuf[idx] as u32
                    | (self.inbuf[idx + 1] as u32) << 8
                    | (self.inbuf[idx + 2] as u32) << 16;
                let code = (window >> (self.posbits & 7)) & self.bitmask;
                self.posbits += self.n_bits as usize;

                let oldcode = match self.oldcode {
                    Some(old) => old,
                    None => {
                        // very first code must be a literal
                        if code >= 256 {
                            return Err(Error::LzwCorruptStream);
                        }
                        self.finchar = code as u8;
                        self.oldcode = Some(code);
                        self.pending.push(code as u8);
                        continue;
                    },
                };

                if code == CLEAR && self.block_mode {
                    for entry in self.codetab.iter_mut() {
                        *entry = 0;
                    }
                    // one below FIRST: the next code inserts a dummy
                    // entry, keeping the count in lockstep with the
                    // encoder which resumes assigning at FIRST
                    self.free_ent = FIRST - 1;
                    let x = (self.n_bits as u64) << 3;
                    let rel = (self.origin + self.posbits as u64) - self.base;
                    self.posbits += ((x - rel % x) % x) as usize;
                    self.n_bits = INIT_BITS;
                    self.maxcode = (1 << INIT_BITS) - 1;
                    self.bitmask = (1 << INIT_BITS) - 1;
                    self.base = self.origin + self.posbits as u64;
                    continue 'refill;
                }

                let incode = code;
                let mut code = code;
                self.stack.clear();

                if code >= self.free_ent {
                    if code > self.free_ent {
                        return Err(Error::LzwCorruptStream);
                    }
                    // KwKwK: the code being defined right now
                    self.stack.push(self.finchar);
                    code = oldcode;
                }

                // walk the table, collecting the string back to front
                while code >= 256 {
                    self.stack.push(self.htab[code as usize] as u8);
                    code = self.codetab[code as usize] as u32;
                }
                self.finchar = self.htab[code as usize] as u8;
                self.stack.push(self.finchar);

                self.pending.extend(self.stack.iter().rev());

                if self.free_ent < maxmaxcode {
                    self.codetab[self.free_ent as usize] = oldcode as u16;
                    self.htab[self.free_ent as usize] = self.finchar as u32;
                    self.free_ent += 1;
                }
                self.oldcode = Some(incode);

                if self.pending.len() >= OUT_TARGET {
                    return Ok(());
                }
            }

            if self.rsize == 0 {
                self.done = true;
                return Ok(());
            }
        }
    }
}

impl<R: Read> Read for LzwDecoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if self.pending_pos < self.pending.len() {
                let n = (self.pending.len() - self.pending_pos).min(buf.len());
                buf[..n].copy_from_slice(&self.pending[self.pending_pos..self.pending_pos + n]);
                self.pending_pos += n;
                if self.pending_pos == self.pending.len() {
                    self.pending.clear();
                    self.pending_pos = 0;
                }
                return Ok(n);
            }
            if self.done {
                return Ok(0);
            }
            self.decode_chunk().map_err(Error::to_stdio)?;
        }
    }
}
