use std::path::Path;

use super::TuiError;
use crate::clients::ApiClient;
use crate::config::{BaseUrl, StoreConfig};
use crate::session::{SessionKind, SessionProfiles};

/// The interactive front-end's state: which session is active and the
/// client bound to its cookie file.
///
/// Every change rebuilds the client. The new client is built before any
/// field is replaced, so a failed change leaves the context as it was.
#[derive(Debug)]
pub struct SessionContext {
    base_url: BaseUrl,
    profiles: SessionProfiles,
    active: SessionKind,
    verbose: bool,
    client: ApiClient,
}

impl SessionContext {
    /// Creates a context on the default ([`SessionKind::Cart`]) session.
    ///
    /// # Errors
    ///
    /// Returns [`TuiError`] if the client cannot be built.
    pub fn new(base_url: BaseUrl, profiles: SessionProfiles, verbose: bool) -> Result<Self, TuiError> {
        let active = SessionKind::default();
        let client = build_client(&base_url, profiles.cookie_file(active), verbose)?;
        Ok(Self {
            base_url,
            profiles,
            active,
            verbose,
            client,
        })
    }

    /// The client of the active session.
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The active session.
    #[must_use]
    pub const fn active(&self) -> SessionKind {
        self.active
    }

    /// The store base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// The cookie file of every session.
    #[must_use]
    pub const fn profiles(&self) -> &SessionProfiles {
        &self.profiles
    }

    /// Makes `kind` the active session.
    ///
    /// # Errors
    ///
    /// Returns [`TuiError`] if the client cannot be built.
    pub fn switch(&mut self, kind: SessionKind) -> Result<(), TuiError> {
        self.client = build_client(&self.base_url, self.profiles.cookie_file(kind), self.verbose)?;
        self.active = kind;
        tracing::debug!("Switched to the {kind} session");
        Ok(())
    }

    /// Points every session at a new base URL.
    ///
    /// # Errors
    ///
    /// Returns [`TuiError`] if the client cannot be built.
    pub fn set_base_url(&mut self, base_url: BaseUrl) -> Result<(), TuiError> {
        self.client = build_client(&base_url, self.profiles.cookie_file(self.active), self.verbose)?;
        self.base_url = base_url;
        Ok(())
    }

    /// Replaces the cookie files of all sessions.
    ///
    /// # Errors
    ///
    /// Returns [`TuiError`] if the client cannot be built.
    pub fn set_profiles(&mut self, profiles: SessionProfiles) -> Result<(), TuiError> {
        self.client = build_client(&self.base_url, profiles.cookie_file(self.active), self.verbose)?;
        self.profiles = profiles;
        Ok(())
    }
}

fn build_client(base_url: &BaseUrl, cookie_file: &Path, verbose: bool) -> Result<ApiClient, TuiError> {
    let config = StoreConfig::builder()
        .base_url(base_url.clone())
        .cookie_file(cookie_file)
        .verbose(verbose)
        .build()?;
    Ok(ApiClient::new(&config)?)
}
