use super::error::ClientRejection;
use crate::client::error::Error;
use warp::reply::{Reply, Response};
use warp::Rejection;

pub fn json_encode(value: Result<impl serde::Serialize, Error>) -> Result<impl Reply, Rejection> {
    value
        .map(|v| warp::reply::json(&v))
        .map_err(|e| warp::reject::custom(ClientRejection::from(e)))
}

pub fn reply<T>(result: Result<T, Error>) -> Result<Response, Rejection>
where
    T: Reply,
{
    result
        .map(|t| t.into_response())
        .map_err(|e| warp::reject::custom(ClientRejection::from(e)))
}
