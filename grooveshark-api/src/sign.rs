//! Request signature for the Grooveshark ws3 API.
//!
//! Every call is signed with HMAC-MD5, keyed by the shared secret, over the
//! exact JSON bytes posted as the request body. The hex digest travels as
//! the `sig` query parameter.

use hmac::{Hmac, Mac};
use md5::Md5;

type HmacMd5 = Hmac<Md5>;

/// Compute the hex HMAC-MD5 signature of `body` keyed by `secret`.
///
/// `body` must be the byte-exact request payload; signing a re-serialized
/// copy would desynchronize the signature from what is transmitted.
pub(crate) fn message_signature(body: &[u8], secret: &str) -> String {
    let mut mac =
        HmacMd5::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}
