//! Cookie sessions.
//!
//! A session is nothing more than a cookie jar persisted to a file. The
//! interactive front-end juggles three named sessions so an admin login,
//! a guest cart and a customer account can coexist.

mod cookie_jar;

pub use cookie_jar::{CookieFileError, CookieJar};

use std::fmt;
use std::path::{Path, PathBuf};

/// The named sessions of the interactive front-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SessionKind {
    /// Admin session used for catalog management.
    Admin,
    /// Guest session owning a shopping cart.
    #[default]
    Cart,
    /// Signed-in customer session.
    User,
}

impl SessionKind {
    /// All sessions, in menu order.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Cart, Self::User];

    /// Returns the lower-case session name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Cart => "cart",
            Self::User => "user",
        }
    }

    /// Returns the default cookie file name for this session.
    #[must_use]
    pub const fn default_cookie_file(&self) -> &'static str {
        match self {
            Self::Admin => "admin.cookies",
            Self::Cart => "cart.cookies",
            Self::User => "user.cookies",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cookie file paths for each named session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionProfiles {
    admin: PathBuf,
    cart: PathBuf,
    user: PathBuf,
}

impl Default for SessionProfiles {
    fn default() -> Self {
        Self::in_dir(Path::new("."))
    }
}

impl SessionProfiles {
    /// Places every session's default cookie file in `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            admin: dir.join(SessionKind::Admin.default_cookie_file()),
            cart: dir.join(SessionKind::Cart.default_cookie_file()),
            user: dir.join(SessionKind::User.default_cookie_file()),
        }
    }

    /// Returns the cookie file of a session.
    #[must_use]
    pub fn cookie_file(&self, kind: SessionKind) -> &Path {
        match kind {
            SessionKind::Admin => &self.admin,
            SessionKind::Cart => &self.cart,
            SessionKind::User => &self.user,
        }
    }

    /// Replaces the cookie file of a session.
    pub fn set_cookie_file(&mut self, kind: SessionKind, path: impl Into<PathBuf>) {
        let slot = match kind {
            SessionKind::Admin => &mut self.admin,
            SessionKind::Cart => &mut self.cart,
            SessionKind::User => &mut self.user,
        };
        *slot = path.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_cart() {
        assert_eq!(SessionKind::default(), SessionKind::Cart);
    }

    #[test]
    fn test_default_profiles_use_named_files() {
        let profiles = SessionProfiles::in_dir(Path::new("/tmp/store"));
        assert_eq!(
            profiles.cookie_file(SessionKind::Admin),
            Path::new("/tmp/store/admin.cookies")
        );
        assert_eq!(
            profiles.cookie_file(SessionKind::User),
            Path::new("/tmp/store/user.cookies")
        );
    }

    #[test]
    fn test_set_cookie_file_only_touches_one_session() {
        let mut profiles = SessionProfiles::default();
        profiles.set_cookie_file(SessionKind::Cart, "/var/lib/other.cookies");

        assert_eq!(
            profiles.cookie_file(SessionKind::Cart),
            Path::new("/var/lib/other.cookies")
        );
        assert_eq!(
            profiles.cookie_file(SessionKind::Admin),
            Path::new("./admin.cookies")
        );
    }

    #[test]
    fn test_session_kind_display() {
        let names: Vec<String> = SessionKind::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["admin", "cart", "user"]);
    }
}
