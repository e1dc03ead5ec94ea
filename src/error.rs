use google_youtube3::hyper;

/// Failures of the remote video store
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("remote service error (HTTP {status}): {detail}")]
    RemoteService { status: u16, detail: String },
    #[error("unexpected error: {0}")]
    Unexpected(String),
}
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classifies an API client error
    ///
    /// Error responses with a JSON body and raw non-success responses are both
    /// remote service errors, the body of the latter is drained into `detail`.
    /// Everything else (transport, token, decoding, ...) is unexpected.
    pub async fn from_api(error: google_youtube3::Error) -> Self {
        use google_youtube3::Error as Api;
        match error {
            Api::BadRequest(body) => Error::RemoteService {
                status: body["error"]["code"]
                    .as_u64()
                    .and_then(|code| u16::try_from(code).ok())
                    .unwrap_or(400),
                detail: body.to_string(),
            },
            Api::Failure(response) => {
                let status = response.status().as_u16();
                let detail = match hyper::body::to_bytes(response.into_body()).await {
                    Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                    Err(e) => format!("unreadable response body: {e}"),
                };
                Error::RemoteService { status, detail }
            }
            other => Error::Unexpected(other.to_string()),
        }
    }
    /// HTTP status of a remote service error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RemoteService { status, .. } => Some(*status),
            Error::Unexpected(_) => None,
        }
    }
}
