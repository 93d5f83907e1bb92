//! Digest extraction from free-form user input.
//!
//! Users paste either a bare base58 digest or a block-explorer link. The
//! extractor only normalizes; whether the result is a real digest is decided
//! by [`is_valid_transaction_digest`] or by the network.

use std::sync::LazyLock;

use regex::Regex;

/// Explorer URL formats, tried in order. Capture group 1 is the digest.
static EXPLORER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"suivision\.xyz/[^/]*txblock/([A-Za-z0-9]+)",
        r"suiscan\.xyz/[^/]*/tx/([A-Za-z0-9]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("explorer pattern is a valid regex"))
    .collect()
});

/// Length in bytes of a decoded transaction digest.
pub const DIGEST_LENGTH: usize = 32;

/// Pull a digest out of an explorer URL, if the input is one.
pub fn extract_digest_from_url(url: &str) -> Option<String> {
    EXPLORER_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Best-effort digest from user input: explorer URL first, else the trimmed input.
pub fn extract_digest(input: &str) -> String {
    let trimmed = input.trim();
    extract_digest_from_url(trimmed).unwrap_or_else(|| trimmed.to_string())
}

/// A transaction digest is base58 that decodes to exactly 32 bytes.
pub fn is_valid_transaction_digest(digest: &str) -> bool {
    bs58::decode(digest)
        .into_vec()
        .map(|bytes| bytes.len() == DIGEST_LENGTH)
        .unwrap_or(false)
}
