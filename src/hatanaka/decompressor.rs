//! CRINEX decompression state machine.
use crate::{
    error::Error,
    hatanaka::{Crinex, LineReader, NumDiff, TextDiff, MAXSAT, MAXTYPE, MAX_DIFF_ORDER},
};

use log::{debug, warn};
use std::io::{Read, Result as IoResult};
use std::str::from_utf8;

/// Column layout, fixed once the CRINEX revision is known.
#[derive(Debug, Clone, Copy)]
struct Layout {
    /// Epoch marker byte on the compressed side.
    ep_from: u8,
    /// Epoch marker byte on the recovered side.
    ep_to: u8,
    /// Column of the epoch / event flag.
    event_offset: usize,
    /// Column of the satellite count.
    nsat_offset: usize,
    /// Column of the packed satellite list.
    satlist_offset: usize,
    /// Digits kept left of the 8 digit fraction when rendering the clock.
    shift_clk: usize,
    /// Base column of the epoch timestamp fields.
    offset: usize,
}

impl Layout {
    fn new(v3: bool) -> Self {
        if v3 {
            Self {
                ep_from: b'>',
                ep_to: b'>',
                event_offset: 31,
                nsat_offset: 32,
                satlist_offset: 41,
                shift_clk: 4,
                offset: 6,
            }
        } else {
            Self {
                ep_from: b'&',
                ep_to: b' ',
                event_offset: 28,
                nsat_offset: 29,
                satlist_offset: 32,
                shift_clk: 1,
                offset: 3,
            }
        }
    }
}

/// [Decompressor] recovers readable RINEX from CRINEX (compact RINEX)
/// content, following the algorithm and column conventions of the
/// historical CRX2RNX tool. Like RINEX, CRINEX is line based: lines are
/// pulled from the inner reader and recovered records are served back
/// through the [Read] interface this structure implements.
///
/// The two line CRINEX preamble is consumed and validated at construction
/// and is not part of the recovered stream: output starts at the embedded
/// `RINEX VERSION / TYPE` line, exactly like CRX2RNX.
pub struct Decompressor<R: Read> {
    lines: LineReader<R>,
    crinex: Crinex,
    layout: Layout,
    /// Wrapped RINEX revision (major), unknown until the first header line.
    rinex_version: Option<u8>,
    header_done: bool,
    eof: bool,
    /// Observable count, flat (RINEX 2).
    ntype: usize,
    /// Observable count per GNSS system byte (RINEX 3), -1 when undefined.
    ntype_gnss: [i16; 256],
    /// Observable count of each satellite of the current epoch.
    ntype_record: Vec<usize>,
    /// Reconstructed epoch description.
    epoch_diff: TextDiff,
    /// Satellite list of the previous epoch, packed 3 bytes each.
    sat_list_prev: Vec<u8>,
    nsat_prev: usize,
    /// For each current slot, the previous-epoch slot of the same
    /// satellite. `None` for newly appearing satellites.
    sattbl: Vec<Option<usize>>,
    /// Difference kernels, current and previous epoch, MAXTYPE stride.
    cells: Vec<NumDiff>,
    cells_prev: Vec<NumDiff>,
    /// Data flag pairs (LLI, SSI), current and previous epoch.
    flags: Vec<u8>,
    flags_prev: Vec<u8>,
    /// Flag delta string of each satellite, as read.
    dflag: Vec<Vec<u8>>,
    /// Clock offset kernel (one per stream, not per satellite).
    clock: NumDiff,
    out: Vec<u8>,
    out_pos: usize,
}

impl<R: Read> Decompressor<R> {
    /// Builds a new [Decompressor] over `reader`, consuming the two line
    /// CRINEX preamble. Fails if the stream is not compact RINEX of a
    /// supported revision.
    pub fn new(reader: R) -> Result<Self, Error> {
        let mut lines = LineReader::new(reader);
        let mut line1 = Vec::with_capacity(128);
        let mut line2 = Vec::with_capacity(128);
        if !lines.next_line(&mut line1)? || !lines.next_line(&mut line2)? {
            return Err(Error::NotACrinex);
        }
        let crinex = Crinex::parse(&line1, &line2)?;
        debug!("CRINEX revision {} ({})", crinex.version, crinex.prog);
        let layout = Layout::new(crinex.version.major == 3);
        Ok(Self {
            lines,
            crinex,
            layout,
            rinex_version: None,
            header_done: false,
            eof: false,
            ntype: 0,
            ntype_gnss: [-1; 256],
            ntype_record: vec![0; MAXSAT],
            epoch_diff: TextDiff::new(),
            sat_list_prev: vec![b' '; MAXSAT * 3],
            nsat_prev: 0,
            sattbl: vec![None; MAXSAT],
            cells: vec![NumDiff::blank(); MAXSAT * MAXTYPE],
            cells_prev: vec![NumDiff::blank(); MAXSAT * MAXTYPE],
            flags: vec![b' '; MAXSAT * MAXTYPE * 2],
            flags_prev: vec![b' '; MAXSAT * MAXTYPE * 2],
            dflag: vec![Vec::new(); MAXSAT],
            clock: NumDiff::new(0, 0),
            out: Vec::with_capacity(8192),
            out_pos: 0,
        })
    }

    /// CRINEX descriptor recovered from the preamble.
    pub fn crinex(&self) -> &Crinex {
        &self.crinex
    }

    /// Major revision of the wrapped RINEX, known once the first header
    /// line went through.
    pub fn rinex_version(&self) -> Option<u8> {
        self.rinex_version
    }

    fn v3(&self) -> bool {
        self.crinex.version.major == 3
    }

    fn rinex2(&self) -> bool {
        self.rinex_version == Some(2)
    }

    fn push_line(out: &mut Vec<u8>, line: &[u8]) {
        out.extend_from_slice(line);
        out.push(b'\n');
    }

    /// Forwards one header line verbatim, extracting what the body
    /// decoder needs on the way.
    fn run_header(&mut self) -> Result<(), Error> {
        let mut line = Vec::with_capacity(128);
        if !self.lines.next_line(&mut line)? {
            self.eof = true;
            return Ok(());
        }
        if self.rinex_version.is_none() {
            // first line must declare the wrapped RINEX revision
            if line.len() < 80
                || &line[60..80] != b"RINEX VERSION / TYPE"
                || !matches!(line[5], b'2' | b'3')
            {
                return Err(Error::BadRinexHeader);
            }
            self.rinex_version = Some(line[5] - b'0');
        } else if line.len() >= 73 && &line[60..73] == b"END OF HEADER" {
            self.header_done = true;
            debug!(
                "end of header, RINEX revision {}",
                self.rinex_version.unwrap_or(0)
            );
        } else {
            self.scan_obs_types(&line)?;
        }
        Self::push_line(&mut self.out, &line);
        Ok(())
    }

    /// Picks up observable counts from a header or event line.
    fn scan_obs_types(&mut self, line: &[u8]) -> Result<(), Error> {
        if line.len() >= 79 && &line[60..79] == b"# / TYPES OF OBSERV" && line[5] != b' ' {
            let count = atoi(&line[..6]);
            if count > MAXTYPE {
                return Err(Error::TooManyObservables(count));
            }
            self.ntype = count;
        } else if line.len() >= 79 && &line[60..79] == b"SYS / # / OBS TYPES" && line[0] != b' ' {
            let count = atoi(&line[3..6]);
            if count > MAXTYPE {
                return Err(Error::TooManyObservables(count));
            }
            self.ntype_gnss[line[0] as usize] = count as i16;
        }
        Ok(())
    }

    /// Decodes one epoch worth of records into the output buffer.
    fn run_epoch(&mut self) -> Result<(), Error> {
        let mut line = Vec::with_capacity(256);
        if !self.lines.next_line(&mut line)? {
            self.eof = true;
            return Ok(());
        }

        loop {
            if self.v3() && line.first() == Some(&b'&') {
                // CRINEX 3 escape lines carry no record
                if !self.lines.next_line(&mut line)? {
                    self.eof = true;
                    return Ok(());
                }
                continue;
            }
            if line.first() == Some(&self.layout.ep_from) {
                line[0] = self.layout.ep_to;
                let flag = line.get(self.layout.event_offset).copied().unwrap_or(b'0');
                if flag != b'0' && flag != b'1' {
                    self.put_event_data(&mut line)?;
                    continue;
                }
                // fresh epoch: all arcs restart
                self.epoch_diff.reset();
                self.nsat_prev = 0;
            }

            self.epoch_diff.decompress(&line);

            if !self.epoch_shape_ok() {
                warn!("corrupt epoch description, looking for the next one");
                let found = self.skip_to_next(&mut line)?;
                self.emit_skip_comment();
                if !found {
                    self.eof = true;
                    return Ok(());
                }
                continue;
            }
            break;
        }

        // recovered epoch description is trustworthy from here on
        let nsat = {
            let ep = self.epoch_diff.buffer();
            let start = self.layout.nsat_offset.min(ep.len());
            let end = (self.layout.nsat_offset + 3).min(ep.len());
            atoi(&ep[start..end])
        };
        if nsat > MAXSAT {
            return Err(Error::TooManySatellites(nsat));
        }
        self.set_sat_table(nsat)?;

        if !self.lines.next_line(&mut line)? {
            return Err(Error::UnexpectedEof);
        }
        let clock_present = self.read_clock(&line)?;

        for i in 0..nsat {
            if !self.lines.next_line(&mut line)? {
                return Err(Error::UnexpectedEof);
            }
            self.get_diff(i, &line)?;
        }

        self.emit_epoch(nsat, clock_present)?;
        self.write_data(nsat)?;
        self.save_epoch(nsat);
        Ok(())
    }

    /// Shape test of the recovered epoch description.
    fn epoch_shape_ok(&self) -> bool {
        let ep = self.epoch_diff.buffer();
        let off = self.layout.offset;
        ep.first() == Some(&self.layout.ep_to)
            && ep.len() >= off + 26
            && ep[off + 23] == b' '
            && ep[off + 24] == b' '
            && ep[off + 25].is_ascii_digit()
    }

    /// Raw shape test used when scanning for a recovery point.
    fn skip_candidate(&self, line: &[u8]) -> bool {
        let off = self.layout.offset;
        line.first() == Some(&self.layout.ep_from)
            && line.len() >= 29
            && [0usize, 3, 6, 9, 12, 23, 24]
                .iter()
                .all(|&d| line.get(off + d) == Some(&b' '))
            && line
                .get(off + 25)
                .map_or(false, |b| b.is_ascii_digit())
    }

    /// Scans forward until a line looks like a valid epoch start.
    /// Returns false if the stream ended first.
    fn skip_to_next(&mut self, line: &mut Vec<u8>) -> Result<bool, Error> {
        loop {
            if !self.lines.next_line(line)? {
                return Ok(false);
            }
            if self.skip_candidate(line) {
                return Ok(true);
            }
        }
    }

    /// Marks a decoding gap with an event record carrying one COMMENT.
    fn emit_skip_comment(&mut self) {
        let msg = "  *** Some epochs are skipped by CRX2RNX ***";
        let rendered = if self.rinex2() {
            format!("{:29}{:3}\n{:<60}COMMENT\n", 4, 1, msg)
        } else {
            format!(">{:31}{:3}\n{:<60}COMMENT\n", 4, 1, msg)
        };
        self.out.extend_from_slice(rendered.as_bytes());
    }

    /// Forwards one event record (epoch flag > 1) and its auxiliary lines
    /// verbatim, keeping observable counts up to date. Loops until an
    /// ordinary epoch header shows up, which is left in `line` for the
    /// caller to process.
    fn put_event_data(&mut self, line: &mut Vec<u8>) -> Result<(), Error> {
        loop {
            line[0] = self.layout.ep_to;
            Self::push_line(&mut self.out, line);
            debug!("event record");
            if line.len() > 29 {
                let eo = self.layout.event_offset;
                let start = (eo + 1).min(line.len());
                let end = (eo + 4).min(line.len());
                let aux = atoi(&line[start..end]);
                for _ in 0..aux {
                    if !self.lines.next_line(line)? {
                        return Err(Error::UnexpectedEof);
                    }
                    Self::push_line(&mut self.out, line);
                    self.scan_obs_types(line)?;
                }
            }
            loop {
                if !self.lines.next_line(line)? {
                    return Err(Error::UnexpectedEof);
                }
                if !(self.v3() && line.first() == Some(&b'&')) {
                    break;
                }
            }
            let eo = self.layout.event_offset;
            let flag = match line.get(eo) {
                Some(b) if b.is_ascii_digit() => *b,
                _ => return Err(Error::UninitializedEpoch),
            };
            if line.first() != Some(&self.layout.ep_from) || line.len() < 29 {
                return Err(Error::UninitializedEpoch);
            }
            if flag == b'0' || flag == b'1' {
                return Ok(());
            }
        }
    }

    /// Maps each satellite of the new epoch onto its slot in the previous
    /// epoch, and resolves its observable count.
    fn set_sat_table(&mut self, nsat: usize) -> Result<(), Error> {
        let rinex2 = self.rinex2();
        let base = self.layout.satlist_offset;
        for i in 0..nsat {
            let id = self
                .epoch_diff
                .buffer()
                .get(base + 3 * i..base + 3 * i + 3)
                .ok_or(Error::VehicleIdentification)?;
            if rinex2 {
                self.ntype_record[i] = self.ntype;
            } else {
                let count = self.ntype_gnss[id[0] as usize];
                if count < 0 {
                    return Err(Error::UnknownGnssSystem(id[0] as char));
                }
                self.ntype_record[i] = count as usize;
            }
            self.sattbl[i] =
                (0..self.nsat_prev).find(|&j| &self.sat_list_prev[3 * j..3 * j + 3] == id);
        }
        Ok(())
    }

    /// Recovers the clock offset from its own line.
    /// An empty line means no clock offset at this epoch.
    fn read_clock(&mut self, line: &[u8]) -> Result<bool, Error> {
        if line.is_empty() {
            self.clock.set_absent();
            return Ok(false);
        }
        if line.len() >= 2 && line[1] == b'&' {
            let order = parse_i64(&line[..1])? as usize;
            if order > MAX_DIFF_ORDER {
                return Err(Error::OrderTooBig(order));
            }
            self.clock.force_init(order, parse_i64(&line[2..])?);
        } else {
            self.clock.decompress(parse_i64(line)?);
        }
        Ok(true)
    }

    /// Reads the difference line of satellite `i`: one field per expected
    /// observable, then the flag delta string.
    fn get_diff(&mut self, i: usize, line: &[u8]) -> Result<(), Error> {
        let ntype = self.ntype_record[i];
        let mut pos = 0usize;
        for j in 0..ntype {
            let field: &[u8] = if pos > line.len() {
                &[]
            } else {
                match line[pos..].iter().position(|&b| b == b' ') {
                    Some(len) => {
                        let f = &line[pos..pos + len];
                        pos += len + 1;
                        f
                    },
                    None => {
                        let f = &line[pos..];
                        pos = line.len() + 1;
                        f
                    },
                }
            };
            let slot = i * MAXTYPE + j;
            if field.is_empty() {
                self.cells[slot] = NumDiff::blank();
            } else if field.len() >= 2 && field[1] == b'&' {
                let order = parse_i64(&field[..1])? as usize;
                if order > MAX_DIFF_ORDER {
                    return Err(Error::OrderTooBig(order));
                }
                self.cells[slot] = NumDiff::new(order, parse_i64(&field[2..])?);
            } else {
                let old = self.sattbl[i].ok_or(Error::UninitializedSatelliteArc)?;
                let prev = self.cells_prev[old * MAXTYPE + j];
                if prev.is_blank() {
                    return Err(Error::UninitializedArc);
                }
                let mut cell = prev;
                cell.decompress(parse_i64(field)?);
                self.cells[slot] = cell;
            }
        }
        let dflag = &mut self.dflag[i];
        dflag.clear();
        if pos <= line.len() {
            dflag.extend_from_slice(&line[pos..]);
        }
        Ok(())
    }

    /// Renders the recovered epoch description, with the clock offset and
    /// RINEX 2 satellite continuation rows where applicable.
    fn emit_epoch(&mut self, nsat: usize, clock_present: bool) -> Result<(), Error> {
        let ep = self.epoch_diff.buffer().to_vec();
        if self.rinex2() {
            let first = &ep[..ep.len().min(68)];
            self.out.extend_from_slice(first);
            if clock_present {
                for _ in first.len()..68 {
                    self.out.push(b' ');
                }
                Self::format_clock(&mut self.out, self.clock.value(), self.layout.shift_clk)?;
            } else {
                self.out.push(b'\n');
            }
            let mut row = 1;
            while nsat > 12 * row {
                self.out.extend_from_slice(&[b' '; 32]);
                let start = 32 + 36 * row;
                if start < ep.len() {
                    self.out
                        .extend_from_slice(&ep[start..ep.len().min(start + 36)]);
                }
                self.out.push(b'\n');
                row += 1;
            }
        } else {
            self.out.extend_from_slice(&ep[..ep.len().min(41)]);
            if clock_present {
                Self::format_clock(&mut self.out, self.clock.value(), self.layout.shift_clk)?;
            } else {
                self.out.push(b'\n');
            }
        }
        Ok(())
    }

    /// Renders the observation rows of every satellite, repairing the
    /// data flags on the way.
    fn write_data(&mut self, nsat: usize) -> Result<(), Error> {
        let crx1 = !self.v3();
        let rinex2 = self.rinex2();
        let base = self.layout.satlist_offset;
        let stride = MAXTYPE * 2;

        for i in 0..nsat {
            let ntype = self.ntype_record[i];
            if !rinex2 {
                let mut id = [0u8; 3];
                id.copy_from_slice(&self.epoch_diff.buffer()[base + 3 * i..base + 3 * i + 3]);
                self.out.extend_from_slice(&id);
            }

            // flag base: inherited from the previous sighting, or built
            // from the delta alone for a new satellite
            let fi = i * stride;
            match self.sattbl[i] {
                Some(old) => {
                    let oi = old * stride;
                    self.flags[fi..fi + 2 * ntype]
                        .copy_from_slice(&self.flags_prev[oi..oi + 2 * ntype]);
                },
                None => {
                    for n in 0..2 * ntype {
                        self.flags[fi + n] = if crx1 {
                            self.dflag[i].get(n).copied().unwrap_or(b' ')
                        } else {
                            b' '
                        };
                    }
                },
            }
            for (n, &c) in self.dflag[i].iter().take(stride).enumerate() {
                if c == b' ' {
                    continue;
                }
                self.flags[fi + n] = if c == b'&' { b' ' } else { c };
            }

            for j in 0..ntype {
                let cell = self.cells[i * MAXTYPE + j];
                if !cell.is_blank() {
                    Self::format_datum(
                        &mut self.out,
                        cell.value(),
                        self.flags[fi + 2 * j],
                        self.flags[fi + 2 * j + 1],
                    )?;
                } else if crx1 {
                    // CRINEX 1 assumes flags of a blank field are blank
                    self.out.extend_from_slice(&[b' '; 16]);
                    self.flags[fi + 2 * j] = b' ';
                    self.flags[fi + 2 * j + 1] = b' ';
                } else {
                    // CRINEX 3 carries flags independently of the field
                    self.out.extend_from_slice(&[b' '; 14]);
                    self.out.push(self.flags[fi + 2 * j]);
                    self.out.push(self.flags[fi + 2 * j + 1]);
                }
                if j + 1 == ntype || (rinex2 && (j + 1) % 5 == 0) {
                    while self.out.last() == Some(&b' ') {
                        self.out.pop();
                    }
                    self.out.push(b'\n');
                }
            }
        }
        Ok(())
    }

    /// Rolls the current epoch state into the previous-epoch slots.
    fn save_epoch(&mut self, nsat: usize) {
        self.nsat_prev = nsat;
        let base = self.layout.satlist_offset;
        let ep = self.epoch_diff.buffer();
        self.sat_list_prev[..3 * nsat].copy_from_slice(&ep[base..base + 3 * nsat]);
        std::mem::swap(&mut self.cells, &mut self.cells_prev);
        std::mem::swap(&mut self.flags, &mut self.flags_prev);
    }

    /// Renders one 14 column observation datum plus its two flag columns.
    /// `value` holds millimeters (or 1/1000 cycles): a decimal point goes
    /// three digits from the right.
    fn format_datum(out: &mut Vec<u8>, value: i64, f0: u8, f1: u8) -> Result<(), Error> {
        let upper = value / 100_000;
        if upper > 99_999_999 || upper < -9_999_999 {
            return Err(Error::DataOutOfRange);
        }
        let rendered = if value.abs() < 1000 {
            // no integer digit: .123 / -.123 renditions
            format!(
                "         {}.{:03}",
                if value < 0 { '-' } else { ' ' },
                value.unsigned_abs()
            )
        } else {
            format!("{:10}.{:03}", value / 1000, (value % 1000).unsigned_abs())
        };
        out.extend_from_slice(rendered.as_bytes());
        out.push(f0);
        out.push(f1);
        Ok(())
    }

    /// Renders the receiver clock offset: two leading sign / carry
    /// columns, a decimal point, `shift` digits, then the 8 digit low
    /// part. The sentinel digit keeps `-0` high parts negative.
    fn format_clock(out: &mut Vec<u8>, value: i64, shift: usize) -> Result<(), Error> {
        let yu = value / 100_000_000;
        let yl = value % 100_000_000;
        let sgn: i64 = if yl < 0 { -1 } else { 1 };
        let sentineled = yu * 10 + sgn;
        let digits = format!(
            "{}{:0width$}",
            if sentineled < 0 { "-" } else { "" },
            sentineled.unsigned_abs(),
            width = shift + 1
        );
        let trimmed = &digits[..digits.len() - 1];
        if trimmed.len() > shift + 2 {
            return Err(Error::ClockOutOfRange);
        }
        let split = trimmed.len() - shift;
        let rendered = format!(
            "{:>2}.{}{:08}\n",
            &trimmed[..split],
            &trimmed[split..],
            yl.unsigned_abs()
        );
        out.extend_from_slice(rendered.as_bytes());
        Ok(())
    }
}

impl<R: Read> Read for Decompressor<R> {
    fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if self.out_pos < self.out.len() {
                let n = (self.out.len() - self.out_pos).min(buf.len());
                buf[..n].copy_from_slice(&self.out[self.out_pos..self.out_pos + n]);
                self.out_pos += n;
                return Ok(n);
            }
            if self.eof {
                return Ok(0);
            }
            self.out.clear();
            self.out_pos = 0;
            let step = if self.header_done {
                self.run_epoch()
            } else {
                self.run_header()
            };
            if let Err(e) = step {
                self.out.clear();
                self.eof = true;
                return Err(e.to_stdio());
            }
        }
    }
}

/// Leading integer extraction, `atoi` style: skips leading blanks,
/// stops at the first byte that is not a digit, yields 0 on no digits.
fn atoi(field: &[u8]) -> usize {
    let mut value = 0usize;
    let mut seen = false;
    for &b in field {
        match b {
            b' ' if !seen => continue,
            b'0'..=b'9' => {
                seen = true;
                value = value * 10 + (b - b'0') as usize;
            },
            _ => break,
        }
    }
    value
}

fn parse_i64(field: &[u8]) -> Result<i64, Error> {
    Ok(from_utf8(field)?.trim().parse()?)
}

#[cfg(test)]
mod test {
    use super::*;

    fn datum(value: i64) -> String {
        let mut out = Vec::new();
        Decompressor::<&[u8]>::format_datum(&mut out, value, b'x', b'y').unwrap();
        String::from_utf8(out).unwrap()
    }

    fn clock(value: i64, shift: usize) -> String {
        let mut out = Vec::new();
        Decompressor::<&[u8]>::format_clock(&mut out, value, shift).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn datum_formatting() {
        assert_eq!(datum(23456789), "     23456.789xy");
        assert_eq!(datum(-23456789), "    -23456.789xy");
        assert_eq!(datum(12345), "        12.345xy");
        assert_eq!(datum(-2345), "        -2.345xy");
        assert_eq!(datum(1234), "         1.234xy");
        assert_eq!(datum(-1234), "        -1.234xy");
        assert_eq!(datum(123), "          .123xy");
        assert_eq!(datum(-123), "         -.123xy");
        assert_eq!(datum(23), "          .023xy");
        assert_eq!(datum(0), "          .000xy");
        assert_eq!(datum(110158976908), " 110158976.908xy");
    }

    #[test]
    fn datum_overflow() {
        let mut out = Vec::new();
        assert!(matches!(
            Decompressor::<&[u8]>::format_datum(&mut out, 10_000_000_000_000, b' ', b' '),
            Err(Error::DataOutOfRange)
        ));
        assert!(matches!(
            Decompressor::<&[u8]>::format_datum(&mut out, -1_000_000_000_000, b' ', b' '),
            Err(Error::DataOutOfRange)
        ));
    }

    #[test]
    fn clock_formatting() {
        // RINEX 2 renders F12.9 with one digit left of the fraction
        assert_eq!(clock(123456789, 1), "  .123456789\n");
        assert_eq!(clock(-123456789, 1), " -.123456789\n");
        assert_eq!(clock(1_123456789, 1), " 1.123456789\n");
        assert_eq!(clock(-1_123456789, 1), "-1.123456789\n");
        assert_eq!(clock(0, 1), "  .000000000\n");
        // RINEX 3 renders F15.12 with four digits left of the fraction
        assert_eq!(clock(123456789012, 4), "  .123456789012\n");
        assert_eq!(clock(-123456789012, 4), " -.123456789012\n");
        assert_eq!(clock(12345_67890123, 4), " 1.234567890123\n");
    }

    #[test]
    fn clock_overflow() {
        let mut out = Vec::new();
        assert!(matches!(
            Decompressor::<&[u8]>::format_clock(&mut out, 100_000_000_000, 1),
            Err(Error::ClockOutOfRange)
        ));
    }

    #[test]
    fn lenient_integer_fields() {
        assert_eq!(atoi(b" 24"), 24);
        assert_eq!(atoi(b" 24G07G08"), 24);
        assert_eq!(atoi(b"   "), 0);
        assert_eq!(atoi(b"x12"), 0);
        assert_eq!(atoi(b"7"), 7);
    }
}
