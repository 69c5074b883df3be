//! Session state: auth token and discovered server version
//!
//! Login writes the token, version discovery writes the version. Nothing
//! expires on its own; an invalid token shows up as a protocol error on the
//! next call and the caller logs in again.

use zbx_core::Version;

#[derive(Debug, Clone, Default)]
pub(crate) struct Session {
    pub(crate) auth: Option<String>,
    pub(crate) version: Version,
}

impl Session {
    pub(crate) fn with_auth(auth: Option<String>) -> Self {
        Self {
            auth,
            ..Default::default()
        }
    }

    pub(crate) fn is_at_least(&self, major: u32, minor: u32, release: u32) -> bool {
        self.version.is_at_least(major, minor, release)
    }
}
