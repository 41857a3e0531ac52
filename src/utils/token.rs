use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

/// Random bytes for a session token, reset token or salt.
pub const TOKEN_BYTES: usize = 16;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Opaque token from `len` bytes of OS randomness. Session tokens and reset
/// tokens come from the same generator; only the record field they land in
/// distinguishes them.
pub fn new_token(len: usize) -> String {
    let mut buf = vec![0u8; len];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}

pub fn new_salt() -> String {
    new_token(TOKEN_BYTES)
}
