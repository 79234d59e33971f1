use std::fmt::{self, Display};
use std::ops::Index;
use std::str::FromStr;

use crate::errors::SequenceError;

use super::nucleotide::Nucleotide;

/// An immutable, validated DNA sequence.
///
/// Construction is the only place the input contract is enforced: the text
/// must be non-empty and contain only A/C/G/T, case-insensitively (lowercase
/// input is folded to uppercase). Once built, every position holds a valid
/// [`Nucleotide`] and downstream code may index freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaSequence {
    bases: Vec<Nucleotide>,
}

impl DnaSequence {
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.bases
    }
}

impl FromStr for DnaSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SequenceError::Empty);
        }
        let mut bases = Vec::with_capacity(s.len());
        for (position, byte) in s.bytes().enumerate() {
            match Nucleotide::from_byte(byte) {
                Some(base) => bases.push(base),
                None => {
                    return Err(SequenceError::InvalidSymbol {
                        symbol: byte as char,
                        position,
                    });
                }
            }
        }
        Ok(DnaSequence { bases })
    }
}

impl Index<usize> for DnaSequence {
    type Output = Nucleotide;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.bases[index]
    }
}

impl Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.bases {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}
