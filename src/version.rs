//! CRINEX / RINEX revision description
use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Version describes CRINEX and RINEX standard revisions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    /// Version major number
    pub major: u8,
    /// Version minor number
    pub minor: u8,
}

impl Version {
    pub fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl std::str::FromStr for Version {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('.') {
            Some((major, minor)) => Ok(Self {
                major: major.trim().parse::<u8>()?,
                minor: minor.trim().parse::<u8>()?,
            }),
            None => Ok(Self {
                major: s.trim().parse::<u8>()?,
                minor: 0,
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parsing() {
        let version = Version::from_str("1.0").unwrap();
        assert_eq!(version, Version::new(1, 0));
        let version = Version::from_str("3.0").unwrap();
        assert_eq!(version, Version::new(3, 0));
        let version = Version::from_str(" 2.11 ").unwrap();
        assert_eq!(version, Version::new(2, 11));
        assert!(Version::from_str("x.y").is_err());
    }

    #[test]
    fn formatting() {
        assert_eq!(Version::new(3, 0).to_string(), "3.0");
        assert_eq!(Version::new(2, 11).to_string(), "2.11");
    }
}
