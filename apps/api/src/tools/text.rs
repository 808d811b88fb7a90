use sha2::{Digest, Sha256};

/// Counts Unicode scalar values (code points). This is the documented
/// "character" unit for the charcount tool; it differs from both byte length
/// and grapheme-cluster count for non-ASCII input.
pub fn charcount(text: &str) -> usize {
    text.chars().count()
}

/// Counts whitespace-separated words. Leading/trailing whitespace is ignored
/// and runs of whitespace collapse, so empty and blank strings count 0.
pub fn wordcount(text: &str) -> usize {
    text.split_whitespace().count()
}

/// SHA-256 over the UTF-8 bytes of `text`, rendered as 64 lowercase hex
/// characters. Deterministic, unsalted.
pub fn sha256_hex(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
