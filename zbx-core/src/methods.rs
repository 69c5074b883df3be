//! Remote method names the protocol engine depends on
//!
//! Only the bootstrap methods live here. Which login method a server accepts
//! depends on its version, and that choice is made in one place:
//! [`LoginMethod::for_version`].

use crate::version::Version;
use std::fmt;

/// Version discovery. Must be sent without `auth`.
pub const VERSION_METHOD: &str = "APIInfo.version";

/// First version that accepts `user.login`
pub const USER_LOGIN_SINCE: Version = Version::new(2, 4, 0);

/// True if `method` is the version discovery method
///
/// Method names are matched case-insensitively, as the server does.
pub fn is_version_method(method: &str) -> bool {
    method.eq_ignore_ascii_case(VERSION_METHOD)
}

/// Login method variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMethod {
    /// `user.authenticate`, servers before 2.4
    Authenticate,
    /// `user.login`
    Login,
}

impl LoginMethod {
    /// Pick the login method for a server version
    ///
    /// ```rust
    /// use zbx_core::{LoginMethod, Version};
    ///
    /// assert_eq!(LoginMethod::for_version(&Version::new(2, 4, 0)), LoginMethod::Login);
    /// assert_eq!(LoginMethod::for_version(&Version::new(2, 2, 0)), LoginMethod::Authenticate);
    /// ```
    pub fn for_version(version: &Version) -> Self {
        let since = USER_LOGIN_SINCE;
        if version.is_at_least(since.major, since.minor, since.release) {
            LoginMethod::Login
        } else {
            LoginMethod::Authenticate
        }
    }

    /// Wire method name
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginMethod::Authenticate => "user.authenticate",
            LoginMethod::Login => "user.login",
        }
    }
}

impl fmt::Display for LoginMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
