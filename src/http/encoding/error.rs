use crate::client::error::{Error, ErrorKind};
use warp::http::StatusCode;
use warp::{Rejection, Reply};

#[derive(Debug)]
pub struct ClientRejection(pub Error);

impl warp::reject::Reject for ClientRejection {}

impl From<Error> for ClientRejection {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::UpstreamRejected => StatusCode::BAD_GATEWAY,
        ErrorKind::Configuration
        | ErrorKind::UpstreamUnreachable
        | ErrorKind::Decode
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Turns client errors into plain-text responses; anything else falls
/// through to warp's own handling.
pub async fn handle_reject(err: Rejection) -> Result<impl Reply, Rejection> {
    match err.find::<ClientRejection>() {
        Some(ClientRejection(e)) => {
            let status = status_for(e.kind());
            Ok(warp::reply::with_status(e.to_string(), status))
        }
        None => Err(err),
    }
}
