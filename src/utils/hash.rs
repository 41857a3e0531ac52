use base64::{prelude::BASE64_STANDARD, Engine as _};
use sha2::{Digest, Sha256};

/// Salted one-way digest: base64(SHA-256(salt ++ password)). Deterministic,
/// so the same salt/password pair always verifies.
pub fn hash(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    BASE64_STANDARD.encode(hasher.finalize())
}

pub fn verify(salt: &str, password: &str, expected: &str) -> bool {
    hash(salt, password) == expected
}
