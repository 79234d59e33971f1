use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use super::nucleotide::Nucleotide;

/// The result of one range query.
///
/// Answers come back aligned 1:1 with the submitted query list. Slots whose
/// query was rejected before scheduling, or whose kind was not recognized at
/// the raw boundary, hold [`Answer::Absent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Answer {
    /// A plain count: distinct bases, pattern hits, or hotspot pairs.
    Count(usize),
    /// GC density as a percentage of the range length.
    Density(f64),
    /// The winning base and its in-range count for most-frequent queries.
    MostFrequent { base: Nucleotide, count: usize },
    /// No result for this slot.
    Absent,
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Count(n) => write!(f, "{}", n),
            Answer::Density(percent) => write!(f, "{:.2}%", percent),
            Answer::MostFrequent { base, count } => write!(f, "{} ({})", base, count),
            Answer::Absent => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_formats() {
        assert_eq!(Answer::Count(4).to_string(), "4");
        assert_eq!(Answer::Density(50.0).to_string(), "50.00%");
        assert_eq!(Answer::Density(100.0 / 3.0).to_string(), "33.33%");
        assert_eq!(
            Answer::MostFrequent {
                base: Nucleotide::G,
                count: 3
            }
            .to_string(),
            "G (3)"
        );
        assert_eq!(Answer::Absent.to_string(), "-");
    }
}
