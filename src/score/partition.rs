use crate::dice::DIE_COUNT;
use crate::score::subsets::Subset;

/// Tie-break orderings for the greedy pass. Greedy consumption is
/// order-dependent and neither ordering wins for every dice configuration,
/// so the resolver runs both and keeps the better result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Highest sum first; equal sums keep enumeration order
    SumOnly,
    /// Highest sum first, then fewest dice first, leaving more dice free
    /// for further groups
    SumAndSize,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::SumOnly, SortOrder::SumAndSize];
}

/// Outcome of one greedy pass: the accumulated score and the die values
/// consumed to reach it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassResult {
    pub total: u32,
    pub consumed: Vec<u8>,
}

/// Sort candidates per the chosen ordering. Both sorts are stable, so
/// candidates the comparator ties stay in enumeration order.
fn sort_candidates(candidates: &mut [Subset], order: SortOrder) {
    match order {
        SortOrder::SumOnly => {
            candidates.sort_by(|a, b| b.sum.cmp(&a.sum));
        }
        SortOrder::SumAndSize => {
            candidates.sort_by(|a, b| {
                let rank = (i64::from(b.sum) - i64::from(a.sum))
                    + (a.size() as i64 - b.size() as i64);
                rank.cmp(&0)
            });
        }
    }
}

/// Remove one occurrence of each candidate value from `remaining`, or leave
/// `remaining` untouched when any value is missing (duplicates counted)
fn try_consume(remaining: &mut Vec<u8>, candidate: &Subset) -> bool {
    let mut scratch = remaining.clone();
    for &value in &candidate.values {
        match scratch.iter().position(|&v| v == value) {
            Some(index) => {
                scratch.swap_remove(index);
            }
            None => return false,
        }
    }
    *remaining = scratch;
    true
}

/// Run one greedy consumption pass over the target-filtered candidates.
///
/// Candidates are visited in the chosen order; each one is accepted only if
/// every one of its values is still unconsumed, and acceptance removes those
/// dice from play and adds the candidate's sum to the total.
pub fn greedy_pass(values: &[u8; DIE_COUNT], candidates: &[Subset], order: SortOrder) -> PassResult {
    let mut ordered = candidates.to_vec();
    sort_candidates(&mut ordered, order);

    let mut remaining: Vec<u8> = values.to_vec();
    let mut total = 0u32;
    let mut consumed = Vec::new();

    for candidate in &ordered {
        if try_consume(&mut remaining, candidate) {
            total += candidate.sum;
            consumed.extend_from_slice(&candidate.values);
        }
    }

    PassResult { total, consumed }
}
