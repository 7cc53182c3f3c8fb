//! Persistent cookie storage.
//!
//! [`CookieJar`] wraps an RFC 6265 [`reqwest_cookie_store::CookieStore`] so that
//! domain, path, `Secure` and expiry rules are applied the same way a
//! browser would. It implements reqwest's [`CookieStore`] trait so it can be
//! installed as a client's cookie provider, and it can be written to and read
//! back from a file between process runs.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::{MutexGuard, PoisonError};

use reqwest::cookie::CookieStore;
use reqwest::header::HeaderValue;
use reqwest::Url;
use reqwest_cookie_store::CookieStoreMutex;
use thiserror::Error;

/// Errors from loading or saving a cookie file.
#[derive(Debug, Error)]
pub enum CookieFileError {
    /// The file could not be read or written.
    #[error("cookie file I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The file did not contain a cookie jar.
    #[error("cookie file is not a valid cookie jar: {0}")]
    Format(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Thread-safe cookie jar that can be persisted to disk.
///
/// # Example
///
/// ```rust
/// use reqwest::cookie::CookieStore;
/// use reqwest::header::HeaderValue;
/// use vexo_store::session::CookieJar;
///
/// let jar = CookieJar::new();
/// let url = "http://localhost:3000/api/auth/login".parse().unwrap();
/// let header = HeaderValue::from_static("session=abc; Path=/; HttpOnly");
/// jar.set_cookies(&mut std::iter::once(&header), &url);
///
/// let me = "http://localhost:3000/api/auth/me".parse().unwrap();
/// assert_eq!(jar.get(&me, "session").as_deref(), Some("abc"));
/// ```
pub struct CookieJar {
    store: CookieStoreMutex,
}

impl Default for CookieJar {
    fn default() -> Self {
        Self {
            store: CookieStoreMutex::new(reqwest_cookie_store::CookieStore::default()),
        }
    }
}

impl fmt::Debug for CookieJar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.lock().iter_unexpired().count();
        f.debug_struct("CookieJar").field("cookies", &count).finish()
    }
}

impl CookieJar {
    /// Creates an empty jar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a jar previously written with [`save`](Self::save).
    ///
    /// Expired cookies are dropped on load.
    ///
    /// # Errors
    ///
    /// Returns [`CookieFileError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CookieFileError> {
        let reader = BufReader::new(File::open(path)?);
        let store =
            reqwest_cookie_store::CookieStore::load_json(reader).map_err(CookieFileError::Format)?;
        Ok(Self {
            store: CookieStoreMutex::new(store),
        })
    }

    /// Writes the jar to `path`, replacing the previous file.
    ///
    /// Session cookies are kept so a login survives between runs. The
    /// document is written to a sibling temporary file and renamed into
    /// place so a crash never leaves a truncated jar behind.
    ///
    /// # Errors
    ///
    /// Returns [`CookieFileError`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CookieFileError> {
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");

        let mut writer = BufWriter::new(File::create(&tmp)?);
        self.lock()
            .save_incl_expired_and_nonpersistent_json(&mut writer)
            .map_err(CookieFileError::Format)?;
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Returns the value of the live cookie `name` that would be sent to `url`.
    #[must_use]
    pub fn get(&self, url: &Url, name: &str) -> Option<String> {
        self.lock()
            .get_request_values(url)
            .find(|(cookie_name, _)| *cookie_name == name)
            .map(|(_, value)| value.to_string())
    }

    /// Returns `true` if no live cookies are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().iter_unexpired().next().is_none()
    }

    /// Removes every cookie.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, reqwest_cookie_store::CookieStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CookieStore for CookieJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        self.store.set_cookies(cookie_headers, url);
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        self.store.cookies(url)
    }
}
