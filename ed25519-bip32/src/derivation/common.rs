/// Derivation index is a 32 bits number representing
/// a type of derivation and a 31 bits number.
///
/// The highest bit set represent a hard derivation,
/// whereas the bit clear represent soft derivation.
pub type DerivationIndex = u32;

/// first hardened index
pub const HARDENED_BOUNDARY: DerivationIndex = 0x8000_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationType {
    Soft(DerivationIndex),
    Hard(DerivationIndex),
}

impl DerivationType {
    pub fn from_index(index: DerivationIndex) -> Self {
        if index >= HARDENED_BOUNDARY {
            DerivationType::Hard(index)
        } else {
            DerivationType::Soft(index)
        }
    }

    /// Domain separation tags prefixed to the HMAC inputs,
    /// `(Z tag, I tag)`.
    pub fn tags(&self) -> (u8, u8) {
        match self {
            DerivationType::Hard(_) => (0x00, 0x01),
            DerivationType::Soft(_) => (0x02, 0x03),
        }
    }

    pub fn is_hard(&self) -> bool {
        match self {
            DerivationType::Hard(_) => true,
            DerivationType::Soft(_) => false,
        }
    }
}

/// serialise the index as it is fed to the HMAC
pub(crate) fn le32(i: DerivationIndex) -> [u8; 4] {
    i.to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hardened_boundary() {
        assert_eq!(DerivationType::from_index(0), DerivationType::Soft(0));
        assert_eq!(
            DerivationType::from_index(0x7fff_ffff),
            DerivationType::Soft(0x7fff_ffff)
        );
        assert_eq!(
            DerivationType::from_index(0x8000_0000),
            DerivationType::Hard(0x8000_0000)
        );
        assert_eq!(
            DerivationType::from_index(0xffff_ffff),
            DerivationType::Hard(0xffff_ffff)
        );
    }

    #[test]
    fn tag_table() {
        assert_eq!(DerivationType::Hard(0x8000_0000).tags(), (0, 1));
        assert_eq!(DerivationType::Soft(0).tags(), (2, 3));
    }

    #[test]
    fn index_serialisation_is_little_endian() {
        assert_eq!(le32(0x8000_0001), [0x01, 0x00, 0x00, 0x80]);
    }
}
