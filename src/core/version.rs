//! Format version tokens.

use std::fmt;
use std::str::FromStr;

use crate::util::Error;

/// Version of the toolchain that produced an asset container.
///
/// The contract treats this as an opaque ordered token: it decides which
/// fields exist and how they are interpreted, but only concrete entity
/// types inspect it. Compared field-wise, `major` first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormatVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl FormatVersion {
    /// Create a new format version.
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Check if this version is at least `major.minor`.
    pub fn is_at_least(&self, major: u16, minor: u16) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for FormatVersion {
    type Err = Error;

    /// Parse a `major.minor.patch` string. Missing trailing components
    /// default to zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let mut next = |name: &str| -> Result<u16, Error> {
            match parts.next() {
                None => Ok(0),
                Some(p) => p
                    .parse::<u16>()
                    .map_err(|_| Error::invalid(format!("bad {name} in version `{s}`"))),
            }
        };
        let major = next("major")?;
        let minor = next("minor")?;
        let patch = next("patch")?;
        if parts.next().is_some() {
            return Err(Error::invalid(format!("too many components in version `{s}`")));
        }
        Ok(Self::new(major, minor, patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(FormatVersion::new(2019, 4, 0) < FormatVersion::new(2020, 1, 0));
        assert!(FormatVersion::new(2019, 4, 1) > FormatVersion::new(2019, 4, 0));
        assert!(FormatVersion::new(2019, 4, 0).is_at_least(2019, 4));
        assert!(!FormatVersion::new(2019, 3, 9).is_at_least(2019, 4));
    }

    #[test]
    fn test_display_parse() {
        let v = FormatVersion::new(2019, 4, 12);
        assert_eq!(v.to_string(), "2019.4.12");
        assert_eq!("2019.4.12".parse::<FormatVersion>().unwrap(), v);
        assert_eq!(
            "2019.4".parse::<FormatVersion>().unwrap(),
            FormatVersion::new(2019, 4, 0)
        );
        assert!("2019.x".parse::<FormatVersion>().is_err());
        assert!("1.2.3.4".parse::<FormatVersion>().is_err());
    }
}
