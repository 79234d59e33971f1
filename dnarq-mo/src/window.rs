use dnarq_core::models::{DnaSequence, Nucleotide};

/// The tracked adjacent pair: a G immediately followed by an A.
pub const HOTSPOT_PAIR: (Nucleotide, Nucleotide) = (Nucleotide::G, Nucleotide::A);

/// The incrementally maintained window `[cur_l, cur_r]` over one sequence.
///
/// The window owns a per-base frequency table, the distinct-base count, the
/// GC accumulator, and the G→A pair accumulator, all kept consistent with the
/// current membership flags. [`extend`](WindowState::extend) and
/// [`retract`](WindowState::retract) are exact inverses and no-ops against an
/// index that is already in (respectively out of) the window, so the sweep
/// can replay them in any interleaving that respects the four-phase order of
/// [`advance_to`](WindowState::advance_to).
///
/// A window lives for exactly one batch run. `cur_r < cur_l` is the valid
/// empty state; a fresh window starts at `cur_l = 0`, `cur_r = -1`.
#[derive(Debug)]
pub struct WindowState<'a> {
    seq: &'a DnaSequence,
    cur_l: isize,
    cur_r: isize,
    freq: [usize; 4],
    distinct: usize,
    gc_count: usize,
    ga_pairs: usize,
    in_window: Vec<bool>,
}

impl<'a> WindowState<'a> {
    /// A fresh, empty window over `seq`.
    pub fn new(seq: &'a DnaSequence) -> Self {
        WindowState {
            seq,
            cur_l: 0,
            cur_r: -1,
            freq: [0; 4],
            distinct: 0,
            gc_count: 0,
            ga_pairs: 0,
            in_window: vec![false; seq.len()],
        }
    }

    /// Current closed bounds `(cur_l, cur_r)`. Empty iff `cur_r < cur_l`.
    pub fn bounds(&self) -> (isize, isize) {
        (self.cur_l, self.cur_r)
    }

    /// In-window count of `base`.
    #[inline]
    pub fn freq(&self, base: Nucleotide) -> usize {
        self.freq[base.index()]
    }

    /// Number of bases with a nonzero in-window count.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.distinct
    }

    /// Number of in-window positions holding a G or a C.
    #[inline]
    pub fn gc_count(&self) -> usize {
        self.gc_count
    }

    /// Number of G→A pairs whose both endpoints are in the window.
    #[inline]
    pub fn ga_pairs(&self) -> usize {
        self.ga_pairs
    }

    /// Include position `i`. No-op if it is already inside the window.
    pub fn extend(&mut self, i: usize) {
        if self.in_window[i] {
            return;
        }
        let base = self.seq[i];
        if self.freq[base.index()] == 0 {
            self.distinct += 1;
        }
        self.freq[base.index()] += 1;
        if base.is_gc() {
            self.gc_count += 1;
        }
        // Pair accounting goes through the membership flags, not the
        // frequency table: a pair counts only once both endpoints are
        // materialized.
        if i > 0 && self.in_window[i - 1] && (self.seq[i - 1], base) == HOTSPOT_PAIR {
            self.ga_pairs += 1;
        }
        if i + 1 < self.seq.len() && self.in_window[i + 1] && (base, self.seq[i + 1]) == HOTSPOT_PAIR
        {
            self.ga_pairs += 1;
        }
        self.in_window[i] = true;
    }

    /// Exclude position `i`. No-op if it is already outside the window.
    ///
    /// Pair deltas are applied first, while `i` still reads as included
    /// relative to its neighbors; only then do the per-base counters drop.
    pub fn retract(&mut self, i: usize) {
        if !self.in_window[i] {
            return;
        }
        let base = self.seq[i];
        if i > 0 && self.in_window[i - 1] && (self.seq[i - 1], base) == HOTSPOT_PAIR {
            self.ga_pairs -= 1;
        }
        if i + 1 < self.seq.len() && self.in_window[i + 1] && (base, self.seq[i + 1]) == HOTSPOT_PAIR
        {
            self.ga_pairs -= 1;
        }
        self.freq[base.index()] -= 1;
        if self.freq[base.index()] == 0 {
            self.distinct -= 1;
        }
        if base.is_gc() {
            self.gc_count -= 1;
        }
        self.in_window[i] = false;
    }

    /// Move the window to exactly `[l, r]`.
    ///
    /// The four phases run in a fixed order: grow left, grow right, shrink
    /// left, shrink right. Growth precedes shrinkage so the pair counter
    /// never observes a transiently emptied-and-refilled window.
    pub fn advance_to(&mut self, l: usize, r: usize) {
        let (l, r) = (l as isize, r as isize);
        while self.cur_l > l {
            self.cur_l -= 1;
            self.extend(self.cur_l as usize);
        }
        while self.cur_r < r {
            self.cur_r += 1;
            self.extend(self.cur_r as usize);
        }
        while self.cur_l < l {
            self.retract(self.cur_l as usize);
            self.cur_l += 1;
        }
        while self.cur_r > r {
            self.retract(self.cur_r as usize);
            self.cur_r -= 1;
        }
    }
}
