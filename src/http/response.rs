use crate::client::LoginRedirect;
use crate::core::types::{Expire, SessionId};
use crate::session::{Session, SESSION_COOKIE};
use warp::http::{header, StatusCode};
use warp::reply::{Reply, Response};

fn session_cookie(id: &SessionId) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        id,
        Session::EXPIRES_IN_SECS
    )
}

impl Reply for LoginRedirect {
    fn into_response(self) -> Response {
        let mut response = Response::new(warp::hyper::Body::empty());
        *response.status_mut() = StatusCode::FOUND;

        if let Ok(location) = header::HeaderValue::from_str(self.location.as_str()) {
            response.headers_mut().insert(header::LOCATION, location);
        }
        if let Some(session) = &self.session {
            if let Ok(cookie) = header::HeaderValue::from_str(&session_cookie(session)) {
                response.headers_mut().insert(header::SET_COOKIE, cookie);
            }
        }
        response
    }
}
