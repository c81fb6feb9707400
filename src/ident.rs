use std::fmt;

use uuid::Uuid;

/// Stable 128-bit identity of a tracked entity.
///
/// Grouping and sorting always use the full 128-bit value; the derived
/// 32-bit display key is only a render-primitive address and may collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId(Uuid);

impl TrackId {
    #[inline]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parses the canonical hyphenated representation.
    pub fn parse_str(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Fixed-width 32-char lowercase hex encoding.
    pub fn display_string(&self) -> String {
        self.0.simple().to_string()
    }

    /// Deterministic 32-bit FNV-1a hash of the identity bytes.
    pub fn display_key(&self) -> u32 {
        let mut hash: u32 = 0x811c9dc5;
        for &byte in self.0.as_bytes() {
            hash ^= byte as u32;
            hash = hash.wrapping_mul(0x01000193);
        }
        hash
    }
}

impl From<Uuid> for TrackId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_string_is_fixed_width_hex() {
        let id = TrackId::from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab,
            0xcd, 0xef,
        ]);
        let s = id.display_string();
        assert_eq!(s.len(), 32);
        assert_eq!(s, "0123456789abcdef0123456789abcdef");
    }

    #[test]
    fn display_key_is_stable_and_distinguishes() {
        let a = TrackId::from_bytes([1; 16]);
        let b = TrackId::from_bytes([2; 16]);

        assert_eq!(a.display_key(), a.display_key());
        assert_ne!(a.display_key(), b.display_key());
        assert_ne!(a.display_string(), b.display_string());
    }

    #[test]
    fn ordering_follows_byte_order() {
        let lo = TrackId::from_bytes([0; 16]);
        let hi = TrackId::from_bytes([0xff; 16]);
        assert!(lo < hi);
    }

    #[test]
    fn parse_canonical_round_trips() {
        let id = TrackId::parse_str("01234567-89ab-cdef-0123-456789abcdef").unwrap();
        assert_eq!(id.display_string(), "0123456789abcdef0123456789abcdef");
    }
}
