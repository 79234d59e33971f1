use dnarq_core::models::{Answer, DnaSequence, Nucleotide, StatKind};

use crate::window::WindowState;

/// Answer one query against a window already advanced to exactly `[l, r]`.
///
/// Every kind except multi-base pattern counting reads straight out of the
/// window's accumulators in O(1) (O(4) for the most-frequent argmax).
pub fn evaluate(
    window: &WindowState<'_>,
    seq: &DnaSequence,
    l: usize,
    r: usize,
    kind: &StatKind,
) -> Answer {
    match kind {
        StatKind::Distinct => Answer::Count(window.distinct()),
        StatKind::MostFrequent => {
            let mut best = Nucleotide::A;
            let mut best_count = window.freq(best);
            // Strict comparison keeps ties on the earliest base in ALL order.
            for base in [Nucleotide::C, Nucleotide::G, Nucleotide::T] {
                if window.freq(base) > best_count {
                    best = base;
                    best_count = window.freq(base);
                }
            }
            Answer::MostFrequent {
                base: best,
                count: best_count,
            }
        }
        StatKind::GcContent => {
            let len = (r - l + 1) as f64;
            Answer::Density(window.gc_count() as f64 * 100.0 / len)
        }
        StatKind::PatternCount(pattern) => Answer::Count(count_pattern(window, seq, l, r, pattern)),
        StatKind::GaHotspot => Answer::Count(window.ga_pairs()),
    }
}

/// Count occurrences of `pattern` starting at positions in `[l, r]` with the
/// whole match inside the range.
///
/// An empty pattern counts zero. A single-base pattern reads the window's
/// frequency table in O(1). Longer patterns re-derive symbols from the
/// sequence itself and scan every candidate start: substring counts cannot be
/// maintained incrementally by this window, so this path is O(range length ×
/// pattern length) per query. Known asymptotic outlier.
fn count_pattern(
    window: &WindowState<'_>,
    seq: &DnaSequence,
    l: usize,
    r: usize,
    pattern: &[Nucleotide],
) -> usize {
    match pattern {
        [] => 0,
        [base] => window.freq(*base),
        _ => {
            let m = pattern.len();
            if r - l + 1 < m {
                return 0;
            }
            let s = seq.as_slice();
            (l..=r + 1 - m).filter(|&i| s[i..i + m] == *pattern).count()
        }
    }
}
