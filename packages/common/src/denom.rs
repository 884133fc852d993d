//! IBC denom tracing.
//!
//! A voucher received over ICS-20 is tracked under
//! `ibc/{HASH}` where `HASH` is the upper-case hex SHA-256 of the full trace
//! path `{port}/{channel}/{base_denom}`.
//!
//! ```text
//! transfer/channel-0/uzig  ->  ibc/<sha256 hex, upper case>
//! ```

use sha2::{Digest, Sha256};

/// Prefix of every hashed IBC voucher denom
pub const IBC_DENOM_PREFIX: &str = "ibc";

/// Pure, deterministic voucher-denom derivation.
pub trait DenomTracer {
    fn derive_voucher_denom(&self, port: &str, channel: &str, base_denom: &str) -> String;
}

/// ICS-20 denom tracer (`ibc/` + SHA-256 of the trace path).
#[derive(Debug, Clone, Copy, Default)]
pub struct IbcDenomTracer;

impl DenomTracer for IbcDenomTracer {
    fn derive_voucher_denom(&self, port: &str, channel: &str, base_denom: &str) -> String {
        let path = trace_path(port, channel, base_denom);
        format!("{}/{}", IBC_DENOM_PREFIX, hash_trace_path(&path))
    }
}

/// Full denom trace path for a single hop.
pub fn trace_path(port: &str, channel: &str, base_denom: &str) -> String {
    format!("{}/{}/{}", port, channel, base_denom)
}

/// Upper-case hex SHA-256 of a trace path.
pub fn hash_trace_path(path: &str) -> String {
    let digest = Sha256::digest(path.as_bytes());
    hex::encode_upper(digest)
}
