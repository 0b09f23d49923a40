//! Base64 transport encoding for uploaded images.
//!
//! The buffer is encoded in bounded chunks. The chunk size is a multiple of
//! three, so every chunk except the last encodes to whole 4-character groups
//! without padding and the concatenation equals a one-shot encoding.

use base64::{Engine, engine::general_purpose::STANDARD};

/// Bytes encoded per step. Must stay a multiple of 3.
pub const CHUNK_SIZE: usize = 3 * 2730;

/// Encode an arbitrary byte buffer as standard padded base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(CHUNK_SIZE) {
        STANDARD.encode_string(chunk, &mut out);
    }
    out
}

/// Build a `data:` URI suitable for an `image_url` message part.
pub fn data_uri(mime_type: &str, encoded: &str) -> String {
    format!("data:{mime_type};base64,{encoded}")
}
