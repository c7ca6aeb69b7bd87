//! Boustrophedon slot sequence.

/// Produces the snake-order visiting sequence over team slots.
///
/// For `team_count = N`, the pattern is `0,1,…,N-1,N-1,…,1,0,0,1,…`
/// truncated to `total` entries. Pure and deterministic; used only to bias
/// candidate selection, never to force placement.
pub fn snake_sequence(team_count: usize, total: usize) -> Vec<usize> {
    (0..total).map(|idx| slot_at(team_count, idx)).collect()
}

/// Slot for one sequence position: forward on even blocks, reversed on odd.
fn slot_at(team_count: usize, idx: usize) -> usize {
    let block = idx / team_count;
    let offset = idx % team_count;
    if block % 2 == 0 {
        offset
    } else {
        team_count - 1 - offset
    }
}
