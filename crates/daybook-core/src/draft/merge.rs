//! Per-key merge of a partial update into a stored snapshot.

use super::{DraftAnswers, DraftUpdate};

/// Merge `incoming` into `current`, key by key.
///
/// For each of the two top-level maps the result is `current` with
/// `incoming`'s entries applied per key: incoming wins where both have a
/// value, keys absent from `incoming` are preserved. Neither map is ever
/// replaced wholesale.
///
/// Applying two updates with disjoint key sets commutes; overlapping keys
/// resolve to whichever update was applied last.
pub fn merge(current: &DraftAnswers, incoming: &DraftUpdate) -> DraftAnswers {
    let mut result = current.clone();
    for (question, options) in &incoming.selected {
        result.selected.insert(*question, options.clone());
    }
    for (question, value) in &incoming.scales {
        result.scales.insert(*question, *value);
    }
    result
}
