pub mod answer;
pub mod nucleotide;
pub mod query;
pub mod sequence;

// re-export for cleaner imports
pub use self::answer::Answer;
pub use self::nucleotide::Nucleotide;
pub use self::query::{QuerySpec, RawQuery, StatKind};
pub use self::sequence::DnaSequence;
