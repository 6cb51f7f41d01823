//! Crate error definitions
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("not an LZW (compress) stream")]
    NotLzwStream,
    #[error("reserved LZW flag bits set ({0:#04x})")]
    LzwReservedFlags(u8),
    #[error("unsupported LZW code width ({0})")]
    LzwUnsupportedWidth(u8),
    #[error("corrupt LZW stream")]
    LzwCorruptStream,
    #[error("this is not a compressed RINEX file")]
    NotACrinex,
    #[error("non supported CRINEX revision")]
    NonSupportedCrxVersion,
    #[error("incorrect RINEX header")]
    BadRinexHeader,
    #[error("satellite number exceeds the maximum ({0})")]
    TooManySatellites(usize),
    #[error("too many observation types ({0})")]
    TooManyObservables(usize),
    #[error("difference order exceeds the maximum ({0})")]
    OrderTooBig(usize),
    #[error("GNSS system '{0}' not defined in header")]
    UnknownGnssSystem(char),
    #[error("vehicle identification failed")]
    VehicleIdentification,
    #[error("uninitialized new satellite arc")]
    UninitializedSatelliteArc,
    #[error("uninitialized data sequence")]
    UninitializedArc,
    #[error("uninitialized epoch after event data")]
    UninitializedEpoch,
    #[error("data record out of range")]
    DataOutOfRange,
    #[error("clock offset out of range")]
    ClockOutOfRange,
    #[error("unexpected end of stream")]
    UnexpectedEof,
    #[error("invalid utf-8 content")]
    Utf8Error(#[from] std::str::Utf8Error),
    #[error("failed to parse integer number")]
    ParseIntError(#[from] std::num::ParseIntError),
}

impl Error {
    /// Converts Self to a `std::io::Error`, so decoders can surface
    /// failures through the [std::io::Read] interface they implement.
    pub(crate) fn to_stdio(self) -> std::io::Error {
        match self {
            Self::Io(e) => e,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other),
        }
    }
}
