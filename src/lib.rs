//! This library recovers readable RINEX observation data from its two
//! historical compressed renditions: CRINEX (compact RINEX, the scheme of
//! Y. Hatanaka) and LZW (`compress`, the `.Z` suffix), which frequently
//! wraps the former in GNSS archives.
//!
//! Both decoders are pull based filters over any [std::io::Read]
//! implementer and are themselves readable, so they stack: a `.Z` file
//! wraps into [LzwDecoder], a compact RINEX stream wraps into
//! [hatanaka::Decompressor], and [BufferedReader] sniffs the content to
//! assemble the right stack on its own.
//!
//! ```
//! use std::io::Read;
//! use crinex::prelude::*;
//!
//! // hand built compact RINEX content, usually read from a file
//! let mut crx = String::new();
//! crx.push_str(&format!("{:<60}{}\n",
//!     "1.0                 COMPACT RINEX FORMAT", "CRINEX VERS   / TYPE"));
//! crx.push_str(&format!("{:<60}{}\n",
//!     "RNX2CRX ver.4.0.7", "CRINEX PROG / DATE"));
//! crx.push_str(&format!("{:<60}{}\n",
//!     "     2.11           OBSERVATION DATA    G (GPS)", "RINEX VERSION / TYPE"));
//! crx.push_str(&format!("{:<60}{}\n", "     1    C1", "# / TYPES OF OBSERV"));
//! crx.push_str(&format!("{:<60}{}\n", "", "END OF HEADER"));
//! crx.push_str("&10  1  1  0  0  0.0000000  0  1G01\n");
//! crx.push_str("\n");
//! crx.push_str("0&23456789\n");
//!
//! let mut reader = BufferedReader::new(crx.as_bytes())?;
//! let mut rinex = String::new();
//! reader.read_to_string(&mut rinex)?;
//!
//! assert!(rinex.starts_with("     2.11"));
//! assert!(rinex.ends_with(" 10  1  1  0  0  0.0000000  0  1G01\n     23456.789\n"));
//! # Ok::<(), crinex::Error>(())
//! ```

pub mod error;
pub mod hatanaka;
pub mod lzw;
pub mod reader;
pub mod version;

pub use error::Error;
pub use hatanaka::Decompressor;
pub use lzw::LzwDecoder;
pub use reader::BufferedReader;

pub mod prelude {
    pub use crate::error::Error;
    pub use crate::hatanaka::{Crinex, Decompressor};
    pub use crate::lzw::LzwDecoder;
    pub use crate::reader::BufferedReader;
    pub use crate::version::Version;
}
