//! CRINEX (Hatanaka compact RINEX) decompression module.
//!
//! The algorithm is line oriented: an epoch description is text-delta
//! encoded against the previous epoch, while signal observations and the
//! receiver clock offset are encoded as Nth order integer differences,
//! one arc per (satellite, observable) slot.

mod crinex;
mod lines;
mod numdiff;
mod textdiff;

pub mod decompressor;

pub use crinex::Crinex;
pub use decompressor::Decompressor;
pub use numdiff::NumDiff;
pub use textdiff::TextDiff;

pub(crate) use lines::LineReader;

/// Maximum number of satellites per epoch.
pub const MAXSAT: usize = 90;

/// Maximum number of observables per GNSS system.
pub const MAXTYPE: usize = 20;

/// Maximum difference order of an arc.
pub const MAX_DIFF_ORDER: usize = 5;
