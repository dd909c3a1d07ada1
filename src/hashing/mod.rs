/// Computes the 32-byte BLAKE3 cache key for a normalized text.
///
/// Equal texts always produce equal keys; distinct texts collide only with
/// negligible probability (~128 bits of collision resistance), so the cache
/// never needs to store the text alongside the key.
#[inline]
pub fn text_key(text: &str) -> [u8; 32] {
    *blake3::hash(text.as_bytes()).as_bytes()
}

/// Computes a 64-bit hash of a client id, truncated from BLAKE3's 256 bits.
///
/// 64 bits is plenty for the rate limiter's client table: a collision merely
/// makes two clients share a quota window, it cannot corrupt state. With the
/// table capped in the low tens of thousands, the birthday bound puts the
/// collision probability far below anything observable.
#[inline]
pub fn client_key(client_id: &str) -> u64 {
    let hash = blake3::hash(client_id.as_bytes());
    let bytes: [u8; 8] = hash.as_bytes()[0..8]
        .try_into()
        .expect("BLAKE3 always produces at least 8 bytes");
    u64::from_le_bytes(bytes)
}
