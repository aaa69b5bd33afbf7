//! Consignment id generation: `<prefix><YYMMDD><6 x [A-Z0-9]>`.

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of random characters after the date
pub const SUFFIX_LEN: usize = 6;

/// Generate a consignment id dated `now`, drawing the suffix from the OS CSPRNG
pub fn generate_consignment_id(prefix: &str, now: DateTime<Utc>) -> String {
    generate_with_rng(prefix, now, &mut OsRng)
}

pub fn generate_with_rng<R: Rng + CryptoRng>(prefix: &str, now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();

    format!("{}{}{}", prefix, now.format("%y%m%d"), suffix)
}
