//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use hmac::digest::generic_array::GenericArray;
use hmac::{Hmac, Mac, digest::KeyInit};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length of signing secrets in bytes
pub const SECRET_LEN: usize = 32;

/// HMAC-SHA256 block size; shorter keys are zero-padded to it
const BLOCK_LEN: usize = 64;

/// Generate a random signing secret
pub fn random_secret() -> [u8; SECRET_LEN] {
    let mut secret = [0u8; SECRET_LEN];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

fn keyed(key: &[u8; SECRET_LEN]) -> HmacSha256 {
    let mut block = [0u8; BLOCK_LEN];
    block[..SECRET_LEN].copy_from_slice(key);
    <HmacSha256 as KeyInit>::new(GenericArray::from_slice(&block))
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &[u8; SECRET_LEN], data: &[u8]) -> [u8; 32] {
    let mut mac = keyed(key);
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Sign `data`, returning the MAC as unpadded URL-safe base64
pub fn sign(key: &[u8; SECRET_LEN], data: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(hmac_sha256(key, data))
}

/// Check a signature produced by [`sign`] in constant time
pub fn verify(key: &[u8; SECRET_LEN], data: &[u8], signature: &str) -> bool {
    let Ok(signature) = general_purpose::URL_SAFE_NO_PAD.decode(signature) else {
        return false;
    };

    let mut mac = keyed(key);
    mac.update(data);
    mac.verify_slice(&signature).is_ok()
}
