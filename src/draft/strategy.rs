//! Candidate generation strategies.

use super::snake::snake_sequence;

/// Produces the preferred team slots for each sorted participant.
///
/// The assigner evaluates the returned slots first (capacity permitting),
/// then falls back to every team with capacity, then to the reserve list.
/// Strategies only bias the search; the cost function and tie-break rules
/// are fixed in the runner.
///
/// # Examples
///
/// ```ignore
/// // Round-robin without the reversed passes:
/// struct RoundRobin;
///
/// impl CandidateStrategy for RoundRobin {
///     fn name(&self) -> &str { "RoundRobin" }
///     fn preferred_slots(&self, sorted_idx: usize, team_count: usize) -> Vec<usize> {
///         vec![sorted_idx % team_count]
///     }
/// }
/// ```
pub trait CandidateStrategy: Send + Sync {
    /// Returns the name of this strategy.
    fn name(&self) -> &str;

    /// Preferred slots for the participant at `sorted_idx` (0 = strongest).
    ///
    /// Slots outside `[0, team_count)` are discarded by the runner.
    fn preferred_slots(&self, sorted_idx: usize, team_count: usize) -> Vec<usize>;
}

/// Default strategy: snake-order base slot widened by a symmetric window.
///
/// With `window = 1` the candidate set for base slot `b` is
/// `{b-1, b, b+1}` clamped to the valid range, matching the classic
/// seeded-draft heuristic: strength-sorted greedy assignment with just
/// enough slack to trade balance against the affinity penalty.
#[derive(Debug, Clone)]
pub struct SnakeWindow {
    window: usize,
}

impl SnakeWindow {
    /// Creates a snake strategy with the given half-window.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl Default for SnakeWindow {
    fn default() -> Self {
        Self::new(1)
    }
}

impl CandidateStrategy for SnakeWindow {
    fn name(&self) -> &str {
        "SnakeWindow"
    }

    fn preferred_slots(&self, sorted_idx: usize, team_count: usize) -> Vec<usize> {
        // Recomputing one snake entry is cheap; avoids carrying state.
        let base = snake_sequence(team_count, sorted_idx + 1)[sorted_idx];
        let lo = base.saturating_sub(self.window);
        let hi = (base + self.window).min(team_count - 1);
        (lo..=hi).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_clamped_at_edges() {
        let s = SnakeWindow::default();

        // idx 0 → base 0 → {0, 1}
        assert_eq!(s.preferred_slots(0, 4), vec![0, 1]);
        // idx 3 → base 3 → {2, 3}
        assert_eq!(s.preferred_slots(3, 4), vec![2, 3]);
    }

    #[test]
    fn test_interior_window() {
        let s = SnakeWindow::default();

        // idx 1 → base 1 → {0, 1, 2}
        assert_eq!(s.preferred_slots(1, 4), vec![0, 1, 2]);
        // idx 5 → second (reversed) block, base 2 → {1, 2, 3}
        assert_eq!(s.preferred_slots(5, 4), vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_window_is_exact_snake() {
        let s = SnakeWindow::new(0);
        let seq = snake_sequence(3, 9);
        for (idx, &slot) in seq.iter().enumerate() {
            assert_eq!(s.preferred_slots(idx, 3), vec![slot]);
        }
    }

    #[test]
    fn test_single_team() {
        let s = SnakeWindow::default();
        assert_eq!(s.preferred_slots(7, 1), vec![0]);
    }
}
