//! Remote API version triple
//!
//! The API reports its version as a string like `"3.0.4"`. Parsing is strict:
//! exactly three dot-separated non-negative integers. All three components are
//! parsed before a [`Version`] is produced, so a bad string never yields a
//! half-updated value.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// `major.minor.release` as reported by the remote API
///
/// The default, `0.0.0`, stands for "not discovered yet" and selects the
/// oldest protocol variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub release: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, release: u32) -> Self {
        Self {
            major,
            minor,
            release,
        }
    }

    /// Is this version `>= major.minor.release`?
    ///
    /// Components are compared in priority order: a greater component
    /// answers yes, an equal one defers to the next, and the release
    /// component decides with `>=`.
    ///
    /// ```rust
    /// use zbx_core::Version;
    ///
    /// assert!(Version::new(2, 4, 0).is_at_least(2, 4, 0));
    /// assert!(!Version::new(2, 3, 9).is_at_least(2, 4, 0));
    /// assert!(Version::new(3, 0, 0).is_at_least(2, 9, 9));
    /// ```
    pub fn is_at_least(&self, major: u32, minor: u32, release: u32) -> bool {
        if self.major != major {
            return self.major > major;
        }
        if self.minor != minor {
            return self.minor > minor;
        }
        self.release >= release
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        let [major, minor, release] = parts.as_slice() else {
            return Err(Error::VersionParse(format!(
                "expected major.minor.release, got {:?} ({} components)",
                s,
                parts.len()
            )));
        };

        let component = |part: &str| {
            part.parse::<u32>()
                .map_err(|e| Error::VersionParse(format!("component {:?} of {:?}: {}", part, s, e)))
        };

        Ok(Self {
            major: component(*major)?,
            minor: component(*minor)?,
            release: component(*release)?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.release)
    }
}
