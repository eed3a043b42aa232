use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;

use crate::auth::pkce::Verifier;
use crate::core::types::{SessionId, State};

pub trait FromRandom {
    fn from_random() -> Self;
}

impl FromRandom for State {
    fn from_random() -> Self {
        State(random_string(32))
    }
}

impl FromRandom for SessionId {
    fn from_random() -> Self {
        SessionId(random_string(48))
    }
}

// 64 bytes encode to 86 characters, inside the 43..=128 range RFC 7636 allows.
impl FromRandom for Verifier {
    fn from_random() -> Self {
        Verifier {
            value: random_string(64),
        }
    }
}

fn random_string(size: usize) -> String {
    let mut bytes = vec![0u8; size];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
