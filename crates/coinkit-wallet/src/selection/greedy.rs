use log::debug;

use super::{SelectionResult, SelectionStrategy, UnspentOutputInfo};

/// Smallest-sufficient-first selection.
///
/// If any single candidate covers the target, the smallest such candidate
/// is used on its own (ties go to the earliest in the input). Otherwise the
/// candidates are taken largest first until the target is reached. Fails
/// when the candidate list is empty or the total falls short.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Greedy;

impl SelectionStrategy for Greedy {
    fn select(&self, candidates: &[UnspentOutputInfo], target: u64) -> SelectionResult {
        if candidates.is_empty() {
            debug!("greedy selection: no candidates for target {target}");
            return SelectionResult::failure();
        }

        let (mut lesser, greater): (Vec<&UnspentOutputInfo>, Vec<&UnspentOutputInfo>) =
            candidates.iter().partition(|info| info.value < target);

        if let Some(best) = greater.iter().min_by_key(|info| info.value) {
            debug!(
                "greedy selection: single output {} covers target {target}",
                best.point
            );
            return SelectionResult {
                points: vec![best.point],
                change: best.value - target,
            };
        }

        // Stable sort keeps input order among equal values.
        lesser.sort_by(|a, b| b.value.cmp(&a.value));

        // Track what is still missing rather than a running sum, so large
        // values never overflow.
        let mut points = Vec::new();
        let mut shortfall = target;
        for info in lesser {
            points.push(info.point);
            if info.value >= shortfall {
                let change = info.value - shortfall;
                debug!(
                    "greedy selection: {} outputs cover target {target} with change {change}",
                    points.len()
                );
                return SelectionResult { points, change };
            }
            shortfall -= info.value;
        }

        debug!("greedy selection: candidates fall {shortfall} short of target {target}");
        SelectionResult::failure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinkit_primitives::Hash;
    use coinkit_transaction::OutPoint;

    fn point(tag: u8) -> OutPoint {
        OutPoint::new(Hash::new([tag; 32]), u32::from(tag))
    }

    fn candidates(values: &[u64]) -> Vec<UnspentOutputInfo> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| UnspentOutputInfo::new(point(i as u8 + 1), value))
            .collect()
    }

    #[test]
    fn test_empty_candidates_fail() {
        assert!(Greedy.select(&[], 100).is_failure());
        assert!(Greedy.select(&[], 0).is_failure());
    }

    #[test]
    fn test_single_sufficient_output() {
        let utxos = candidates(&[150]);
        let result = Greedy.select(&utxos, 100);
        assert_eq!(result.points, vec![utxos[0].point]);
        assert_eq!(result.change, 50);
    }

    #[test]
    fn test_smallest_sufficient_output_wins() {
        let utxos = candidates(&[500, 30, 120, 101, 90]);
        let result = Greedy.select(&utxos, 100);
        assert_eq!(result.points, vec![utxos[3].point]);
        assert_eq!(result.change, 1);
    }

    #[test]
    fn test_exact_match_counts_as_sufficient() {
        let utxos = candidates(&[60, 100, 40]);
        let result = Greedy.select(&utxos, 100);
        assert_eq!(result.points, vec![utxos[1].point]);
        assert_eq!(result.change, 0);
    }

    #[test]
    fn test_tie_goes_to_first_candidate() {
        let utxos = candidates(&[200, 150, 150]);
        let result = Greedy.select(&utxos, 100);
        assert_eq!(result.points, vec![utxos[1].point]);
        assert_eq!(result.change, 50);
    }

    #[test]
    fn test_accumulates_largest_first() {
        let utxos = candidates(&[30, 40, 90]);
        let result = Greedy.select(&utxos, 100);
        assert_eq!(result.points, vec![utxos[2].point, utxos[1].point]);
        assert_eq!(result.change, 30);
    }

    #[test]
    fn test_accumulation_stops_once_covered() {
        let utxos = candidates(&[10, 50, 20, 45, 5]);
        let result = Greedy.select(&utxos, 100);
        assert_eq!(
            result.points,
            vec![utxos[1].point, utxos[3].point, utxos[2].point]
        );
        assert_eq!(result.change, 15);
        assert_eq!(result.input_count(), 3);
    }

    #[test]
    fn test_insufficient_total_fails() {
        let utxos = candidates(&[30, 40]);
        assert!(Greedy.select(&utxos, 100).is_failure());
    }

    #[test]
    fn test_zero_target_takes_smallest_output() {
        let utxos = candidates(&[7, 3, 9]);
        let result = Greedy.select(&utxos, 0);
        assert_eq!(result.points, vec![utxos[1].point]);
        assert_eq!(result.change, 3);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let utxos = candidates(&[u64::MAX - 1, u64::MAX - 1]);
        let result = Greedy.select(&utxos, u64::MAX);
        assert_eq!(result.points, vec![utxos[0].point, utxos[1].point]);
        assert_eq!(result.change, u64::MAX - 2);

        let result = Greedy.select(&candidates(&[u64::MAX]), u64::MAX);
        assert_eq!(result.change, 0);
    }

    #[test]
    fn test_candidates_left_untouched() {
        let utxos = candidates(&[30, 40, 90]);
        let before = utxos.clone();
        let _ = Greedy.select(&utxos, 100);
        assert_eq!(utxos, before);
    }
}
