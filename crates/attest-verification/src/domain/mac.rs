//! # MAC Computation
//!
//! HMAC-SHA1 digest of the client data window, and the constant-time
//! comparison used to check it.
//!
//! ## Security
//!
//! - **Constant-Time Comparison**: Uses `subtle::ConstantTimeEq` so the
//!   comparison cost does not depend on the position of the first
//!   mismatching byte. A naive XOR loop can be short-circuited by the
//!   compiler.

use crate::domain::entities::MAC_LEN;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;

type HmacSha1 = Hmac<Sha1>;

/// Compute the HMAC-SHA1 digest of `message` under `key`.
///
/// Any key length is acceptable, including the empty fallback key; a wrong
/// key simply yields a digest that fails the comparison. This is the
/// producer side, used to mint tokens in tests and fixtures.
pub fn compute_mac(key: &[u8], message: &[u8]) -> [u8; MAC_LEN] {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Verify `expected` against the HMAC-SHA1 digest of `message` under `key`.
///
/// This is the checking side of the pipeline: any construction failure is
/// reported as a mismatch, never a panic.
pub fn verify_mac(key: &[u8], message: &[u8], expected: &[u8; MAC_LEN]) -> bool {
    let mut mac = match HmacSha1::new_from_slice(key) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(message);

    let computed: [u8; MAC_LEN] = mac.finalize().into_bytes().into();
    macs_equal(&computed, expected)
}

/// Constant-time equality of two digests.
pub fn macs_equal(a: &[u8; MAC_LEN], b: &[u8; MAC_LEN]) -> bool {
    a.ct_eq(b).into()
}
