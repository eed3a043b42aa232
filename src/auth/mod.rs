pub mod access_token;
pub mod authorization;
pub mod error;
pub mod pkce;

pub use access_token::*;
pub use authorization::*;

use url::Url;

/// A target URL plus the parameters to append to its query string.
#[derive(Debug, Clone)]
pub struct Redirect<T> {
    pub uri: Url,
    pub params: T,
}

impl<T: serde::Serialize> Redirect<T> {
    pub fn new(uri: Url, params: T) -> Self {
        Redirect { uri, params }
    }

    /// Appends the parameters after any query the target already carries.
    pub fn location(&self) -> Result<Url, serde_urlencoded::ser::Error> {
        let mut url = self.uri.clone();
        let new_qs = serde_urlencoded::to_string(&self.params)?;
        let pairs = form_urlencoded::parse(new_qs.as_bytes());
        url.query_pairs_mut().extend_pairs(pairs);
        Ok(url)
    }
}
