//! CRINEX preamble definitions.
use crate::{error::Error, version::Version};

use std::str::{from_utf8, FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// CRINEX stream descriptor, recovered from the two line preamble that
/// heads any compact RINEX file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Crinex {
    /// Compression algorithm revision, 1.0 or 3.0.
    pub version: Version,
    /// Compression program name.
    pub prog: String,
    /// Date of compression, carried as written (not interpreted).
    pub date: String,
}

impl Crinex {
    /// Parses the descriptor from the two preamble lines:
    /// `CRINEX VERS   / TYPE` followed by `CRINEX PROG / DATE`.
    pub(crate) fn parse(version_line: &[u8], prog_date_line: &[u8]) -> Result<Self, Error> {
        if version_line.len() < 80 || &version_line[60..80] != b"CRINEX VERS   / TYPE" {
            return Err(Error::NotACrinex);
        }
        let version = match &version_line[..3] {
            b"1.0" => Version::new(1, 0),
            b"3.0" => Version::new(3, 0),
            other => {
                // well formed field but a revision we do not speak
                if Version::from_str(from_utf8(other)?).is_ok() {
                    return Err(Error::NonSupportedCrxVersion);
                }
                return Err(Error::NotACrinex);
            },
        };
        let field = |line: &[u8], start: usize, end: usize| -> String {
            let end = end.min(line.len());
            if start >= end {
                return String::new();
            }
            String::from_utf8_lossy(&line[start..end]).trim().to_string()
        };
        Ok(Self {
            version,
            prog: field(prog_date_line, 0, 20),
            date: field(prog_date_line, 40, 60),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn preamble_parsing() {
        let l1 = format!(
            "{:<60}{}",
            "1.0                 COMPACT RINEX FORMAT", "CRINEX VERS   / TYPE"
        );
        let l2 = format!(
            "{:<20}{:<20}{:<20}{}",
            "RNX2CRX ver.4.0.7", "", "28-Dec-21 00:17", "CRINEX PROG / DATE"
        );
        let crinex = Crinex::parse(l1.as_bytes(), l2.as_bytes()).unwrap();
        assert_eq!(crinex.version, Version::new(1, 0));
        assert_eq!(crinex.prog, "RNX2CRX ver.4.0.7");
        assert_eq!(crinex.date, "28-Dec-21 00:17");
    }

    #[test]
    fn version_3() {
        let l1 = format!(
            "{:<60}{}",
            "3.0                 COMPACT RINEX FORMAT", "CRINEX VERS   / TYPE"
        );
        let crinex = Crinex::parse(l1.as_bytes(), b"").unwrap();
        assert_eq!(crinex.version, Version::new(3, 0));
        assert!(crinex.prog.is_empty());
    }

    #[test]
    fn rejections() {
        // ordinary RINEX header line is not a CRINEX preamble
        let plain = format!(
            "{:<60}{}",
            "     2.11           OBSERVATION DATA    M (MIXED)", "RINEX VERSION / TYPE"
        );
        assert!(matches!(
            Crinex::parse(plain.as_bytes(), b""),
            Err(Error::NotACrinex)
        ));

        let unsupported = format!(
            "{:<60}{}",
            "2.0                 COMPACT RINEX FORMAT", "CRINEX VERS   / TYPE"
        );
        assert!(matches!(
            Crinex::parse(unsupported.as_bytes(), b""),
            Err(Error::NonSupportedCrxVersion)
        ));

        assert!(matches!(Crinex::parse(b"", b""), Err(Error::NotACrinex)));
    }
}
