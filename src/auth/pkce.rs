use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum Transformation {
    S256,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Challenge {
    #[serde(rename = "code_challenge")]
    pub code: String,
    #[serde(rename = "code_challenge_method")]
    pub method: Transformation,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Verifier {
    #[serde(rename = "code_verifier")]
    pub value: String,
}

impl Verifier {
    pub fn challenge(&self) -> Challenge {
        Challenge {
            code: code_challenge_s256(&self.value),
            method: Transformation::S256,
        }
    }
}

pub fn code_challenge_s256(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}
