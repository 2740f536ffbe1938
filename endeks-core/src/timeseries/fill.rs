//! Nearest-neighbor gap filling for sparse observation series.

/// Resolve `None` entries in place: a forward sweep carries the last seen
/// observation into each subsequent gap, then a backward sweep carries the
/// earliest observation into any leading gaps the forward pass could not
/// reach.
///
/// Invariants:
/// - If at least one `Some` exists, no `None` remains afterwards.
/// - An all-`None` slice is left unchanged.
/// - The pass is idempotent.
pub fn fill_gaps(values: &mut [Option<f64>]) {
    let mut last_known = None;
    for v in values.iter_mut() {
        match *v {
            Some(x) => last_known = Some(x),
            None => *v = last_known,
        }
    }

    // Leading gaps have no earlier neighbor; resolve them from the other side.
    let mut next_known = None;
    for v in values.iter_mut().rev() {
        match *v {
            Some(x) => next_known = Some(x),
            None => *v = next_known,
        }
    }
}
