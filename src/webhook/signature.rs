use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Verify an `X-Line-Signature` header value against the raw request body.
///
/// The platform signs the body with HMAC-SHA256 keyed by the channel secret
/// and sends the digest base64-encoded. Comparison happens in constant time
/// via `Mac::verify_slice`. Any malformed input verifies as false - the
/// check fails closed.
#[must_use]
pub fn verify(body: &[u8], signature: &str, secret: &str) -> bool {
    let Ok(expected) = STANDARD.decode(signature) else {
        warn!("signature header is not valid base64");
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        warn!("failed to create HMAC from channel secret");
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

/// Compute the signature the platform would send for `body`. Test helper.
#[must_use]
pub fn compute(body: &[u8], secret: &str) -> String {
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            warn!("failed to create HMAC: {}", e);
            return String::new();
        }
    };
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}
