use std::path::PathBuf;

use anyhow::Context;
use google_youtube3::{
    hyper::{self, client::HttpConnector},
    hyper_rustls::{self, HttpsConnector},
    oauth2, YouTube,
};

/// Default OAuth 2.0 client secret file
pub const CLIENT_SECRETS_FILE: &str = "client_secret.json";
/// Full access to the YouTube account of the authenticated user
pub const YOUTUBE_SCOPE: &str = "https://www.googleapis.com/auth/youtube";

pub type Hub = YouTube<HttpsConnector<HttpConnector>>;

/// Authenticated handle to the YouTube Data API
pub struct Session {
    pub(crate) hub: Hub,
    pub(crate) scopes: Vec<String>,
}
impl Session {
    /// The scopes every API call of the session is authorized with
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}

/// [Session] builder
///
/// The OAuth installed-application flow listens for the authorization code
/// on a local port, an ephemeral one unless [SessionBuilder::redirect_port]
/// is set.
pub struct SessionBuilder {
    secrets: PathBuf,
    scopes: Vec<String>,
    port: Option<u16>,
    token_cache: Option<PathBuf>,
}
impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            secrets: PathBuf::from(CLIENT_SECRETS_FILE),
            scopes: vec![YOUTUBE_SCOPE.to_string()],
            port: None,
            token_cache: None,
        }
    }
}
impl SessionBuilder {
    pub fn new<P: Into<PathBuf>>(secrets: P) -> Self {
        Self {
            secrets: secrets.into(),
            ..Default::default()
        }
    }
    pub fn scopes<S: AsRef<str>>(self, scopes: &[S]) -> Self {
        Self {
            scopes: scopes.iter().map(|s| s.as_ref().to_string()).collect(),
            ..self
        }
    }
    pub fn redirect_port(self, port: u16) -> Self {
        Self {
            port: Some(port),
            ..self
        }
    }
    /// Keeps the OAuth tokens in `path` between runs
    pub fn token_cache<P: Into<PathBuf>>(self, path: P) -> Self {
        Self {
            token_cache: Some(path.into()),
            ..self
        }
    }
    /// Runs the OAuth flow and returns the authenticated session
    pub async fn build(self) -> anyhow::Result<Session> {
        let secret = oauth2::read_application_secret(&self.secrets)
            .await
            .with_context(|| format!("failed to read client secret {:?}", self.secrets))?;
        let return_method = match self.port {
            Some(port) => oauth2::InstalledFlowReturnMethod::HTTPPortRedirect(port),
            None => oauth2::InstalledFlowReturnMethod::HTTPRedirect,
        };
        let mut builder = oauth2::InstalledFlowAuthenticator::builder(secret, return_method);
        if let Some(path) = self.token_cache {
            log::info!("OAuth tokens cached in {:?}", path);
            builder = builder.persist_tokens_to_disk(path);
        }
        let auth = builder
            .build()
            .await
            .context("failed to build the OAuth authenticator")?;
        log::info!("Requesting access to {:?}...", self.scopes);
        auth.token(self.scopes.as_slice())
            .await
            .context("OAuth authorization failed")?;
        let hub = YouTube::new(
            hyper::Client::builder().build(
                hyper_rustls::HttpsConnectorBuilder::new()
                    .with_native_roots()
                    .https_or_http()
                    .enable_http1()
                    .enable_http2()
                    .build(),
            ),
            auth,
        );
        Ok(Session {
            hub,
            scopes: self.scopes,
        })
    }
}

/// Authenticates with the client secret file `secrets` for the given `scopes`
pub async fn authenticate<P, S>(secrets: P, scopes: &[S]) -> anyhow::Result<Session>
where
    P: Into<PathBuf>,
    S: AsRef<str>,
{
    SessionBuilder::new(secrets).scopes(scopes).build().await
}
