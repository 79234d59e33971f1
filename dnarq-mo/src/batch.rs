use dnarq_core::errors::SequenceError;
use dnarq_core::models::{Answer, DnaSequence, QuerySpec, RawQuery};

use crate::evaluate::evaluate;
use crate::schedule::{ScheduledQuery, block_size, schedule};
use crate::window::WindowState;

/// Answer a batch of typed queries over `seq`.
///
/// Queries with an inverted or out-of-bounds range are rejected before
/// scheduling and answer [`Answer::Absent`]; every other slot holds the
/// statistic for exactly its own range. Output order matches input order
/// regardless of the sweep order used internally, and the batch always runs
/// to completion in a single synchronous pass.
pub fn answer_batch(seq: &DnaSequence, queries: &[QuerySpec]) -> Vec<Answer> {
    let n = seq.len();
    let mut admitted: Vec<ScheduledQuery> = queries
        .iter()
        .enumerate()
        .filter(|(_, q)| q.l <= q.r && q.r < n)
        .map(|(original_index, q)| ScheduledQuery {
            original_index,
            l: q.l,
            r: q.r,
        })
        .collect();

    schedule(&mut admitted, block_size(n));

    let mut answers = vec![Answer::Absent; queries.len()];
    let mut window = WindowState::new(seq);
    for sq in &admitted {
        window.advance_to(sq.l, sq.r);
        let kind = &queries[sq.original_index].kind;
        answers[sq.original_index] = evaluate(&window, seq, sq.l, sq.r, kind);
    }
    answers
}

/// The full external boundary in one call: validate and normalize the raw
/// sequence text, lower the 1-based raw queries, and answer the batch.
///
/// Sequence problems are fatal for the whole batch. Per-query problems
/// (non-positive or inverted bounds, unknown kind string) only leave that
/// slot [`Answer::Absent`].
pub fn answer_raw_batch(sequence: &str, raw: &[RawQuery]) -> Result<Vec<Answer>, SequenceError> {
    let seq: DnaSequence = sequence.parse()?;

    let mut answers = vec![Answer::Absent; raw.len()];
    let (slots, specs): (Vec<usize>, Vec<QuerySpec>) = raw
        .iter()
        .enumerate()
        .filter_map(|(i, q)| q.normalize().map(|spec| (i, spec)))
        .unzip();

    for (slot, answer) in slots.into_iter().zip(answer_batch(&seq, &specs)) {
        answers[slot] = answer;
    }
    Ok(answers)
}
