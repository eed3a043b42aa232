use std::fmt;

use crate::auth::error::AccessTokenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Base,
    Authorization,
    Token,
}

/// Coarse classification used at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    BadRequest,
    Unauthorized,
    NotFound,
    UpstreamUnreachable,
    UpstreamRejected,
    Decode,
    Internal,
}

#[derive(Debug)]
pub enum Error {
    Configuration(EndpointKind, url::ParseError),
    Encode(serde_urlencoded::ser::Error),
    HttpClient(reqwest::Error),
    MissingCode,
    MissingSession,
    StateMismatch,
    NoSession,
    SessionBindingDisabled,
    Unreachable(reqwest::Error),
    Rejected {
        status: u16,
        error: Option<AccessTokenError>,
    },
    ReadBody(reqwest::Error),
    Decode(serde_json::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use Error::*;

        match self {
            Configuration(..) => ErrorKind::Configuration,
            Encode(_) | HttpClient(_) => ErrorKind::Internal,
            MissingCode | MissingSession | StateMismatch => ErrorKind::BadRequest,
            NoSession => ErrorKind::Unauthorized,
            SessionBindingDisabled => ErrorKind::NotFound,
            Unreachable(_) => ErrorKind::UpstreamUnreachable,
            Rejected { .. } => ErrorKind::UpstreamRejected,
            ReadBody(_) | Decode(_) => ErrorKind::Decode,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            Configuration(EndpointKind::Base, e) => write!(f, "parse base url error: {}", e),
            Configuration(EndpointKind::Authorization, e) => {
                write!(f, "parse auth endpoint error: {}", e)
            }
            Configuration(EndpointKind::Token, e) => {
                write!(f, "parse token endpoint error: {}", e)
            }
            Encode(e) => write!(f, "encode authorization request error: {}", e),
            HttpClient(e) => write!(f, "failed to build http client: {}", e),
            MissingCode => f.write_str("missing code"),
            MissingSession => f.write_str("missing session"),
            StateMismatch => f.write_str("state mismatch"),
            NoSession => f.write_str("no session"),
            SessionBindingDisabled => f.write_str("session binding disabled"),
            Unreachable(e) => write!(f, "error requesting token: {}", e),
            Rejected { status, error } => {
                write!(f, "token endpoint rejected request: status {}", status)?;
                if let Some(error) = error {
                    write!(f, ": {}", error)?;
                }
                Ok(())
            }
            ReadBody(e) => write!(f, "decode token response error: {}", e),
            Decode(e) => write!(f, "decode token response error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;

        match self {
            Configuration(_, e) => Some(e),
            Encode(e) => Some(e),
            HttpClient(e) | Unreachable(e) | ReadBody(e) => Some(e),
            Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(e: serde_urlencoded::ser::Error) -> Self {
        Self::Encode(e)
    }
}
