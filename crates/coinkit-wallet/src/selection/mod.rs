//! Unspent output selection.
//!
//! A [`SelectionStrategy`] picks outputs from a borrowed, read-only slice of
//! candidates so that their total covers a target value. Running out of
//! funds is an ordinary outcome: the strategy returns a result with no
//! points, which callers check with [`SelectionResult::is_failure`].
//! Removing the chosen outputs from wallet state is the caller's job.

mod greedy;

pub use greedy::Greedy;

use coinkit_transaction::OutPoint;
use serde::{Deserialize, Serialize};

/// A spendable output known to the wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentOutputInfo {
    /// Where the output lives.
    pub point: OutPoint,
    /// Its value in satoshis.
    pub value: u64,
}

impl UnspentOutputInfo {
    /// Describe output `point` holding `value` satoshis.
    pub fn new(point: OutPoint, value: u64) -> Self {
        UnspentOutputInfo { point, value }
    }
}

/// Outcome of a selection.
///
/// An empty `points` list means no viable selection exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Selected outputs, in the order they were chosen.
    pub points: Vec<OutPoint>,
    /// Selected value in excess of the target.
    pub change: u64,
}

impl SelectionResult {
    /// The failed selection: no points, no change.
    pub fn failure() -> Self {
        Self::default()
    }

    /// Whether the selection failed to reach its target.
    pub fn is_failure(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of inputs the spend will need.
    pub fn input_count(&self) -> usize {
        self.points.len()
    }
}

/// A rule for choosing which candidates fund a payment of `target`.
pub trait SelectionStrategy {
    /// Choose outputs from `candidates` worth at least `target` in total.
    fn select(&self, candidates: &[UnspentOutputInfo], target: u64) -> SelectionResult;
}

impl<T: SelectionStrategy + ?Sized> SelectionStrategy for &T {
    fn select(&self, candidates: &[UnspentOutputInfo], target: u64) -> SelectionResult {
        (**self).select(candidates, target)
    }
}

/// Configurable choice among the built-in strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionAlgorithm {
    /// See [`Greedy`].
    #[default]
    Greedy,
}

impl SelectionStrategy for SelectionAlgorithm {
    fn select(&self, candidates: &[UnspentOutputInfo], target: u64) -> SelectionResult {
        match self {
            SelectionAlgorithm::Greedy => Greedy.select(candidates, target),
        }
    }
}

/// Select outputs from `candidates` covering `target` with `strategy`.
pub fn select_outputs<S: SelectionStrategy + ?Sized>(
    candidates: &[UnspentOutputInfo],
    target: u64,
    strategy: &S,
) -> SelectionResult {
    strategy.select(candidates, target)
}
