use thiserror::Error;

/// Fatal input-contract violations.
///
/// These abort the whole batch before any computation starts. Per-query
/// problems (inverted range, out-of-bounds index, unrecognized statistic
/// kind) are deliberately *not* errors: the affected slot answers as absent
/// and the rest of the batch proceeds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Sequence is empty")]
    Empty,

    #[error("Invalid symbol '{symbol}' at position {position}: expected one of A/C/G/T")]
    InvalidSymbol { symbol: char, position: usize },
}
