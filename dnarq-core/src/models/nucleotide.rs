use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A single DNA base from the fixed {A, C, G, T} alphabet.
///
/// The discriminants double as indices into the `[_; 4]` count tables used by
/// the sliding window, so per-base bookkeeping is plain array access rather
/// than an associative lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// Every base, in priority order. Most-frequent queries resolve ties to
    /// the earliest base in this order.
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Parse one ASCII byte, case-insensitively.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(Nucleotide::A),
            b'C' => Some(Nucleotide::C),
            b'G' => Some(Nucleotide::G),
            b'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    /// Index into a `[_; 4]` per-base table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this base belongs to the tracked {G, C} subset used for GC
    /// density.
    #[inline]
    pub fn is_gc(self) -> bool {
        matches!(self, Nucleotide::G | Nucleotide::C)
    }

    pub fn to_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }
}

impl Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(b'A', Some(Nucleotide::A))]
    #[case(b'a', Some(Nucleotide::A))]
    #[case(b'c', Some(Nucleotide::C))]
    #[case(b'G', Some(Nucleotide::G))]
    #[case(b't', Some(Nucleotide::T))]
    #[case(b'N', None)]
    #[case(b'x', None)]
    #[case(b' ', None)]
    fn test_from_byte(#[case] byte: u8, #[case] expected: Option<Nucleotide>) {
        assert_eq!(Nucleotide::from_byte(byte), expected);
    }

    #[test]
    fn test_indices_cover_table() {
        let indices: Vec<usize> = Nucleotide::ALL.iter().map(|b| b.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_gc_subset() {
        assert!(Nucleotide::G.is_gc());
        assert!(Nucleotide::C.is_gc());
        assert!(!Nucleotide::A.is_gc());
        assert!(!Nucleotide::T.is_gc());
    }
}
