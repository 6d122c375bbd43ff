//! Canonical timeline and instant-range slicing

use crate::graph::Interval;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Strictly ascending, duplicate-free sequence of instants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    instants: Vec<f64>,
}

impl Timeline {
    /// Sort and deduplicate. NaN values are dropped.
    pub fn from_instants(instants: impl IntoIterator<Item = f64>) -> Self {
        // Adding 0.0 folds -0.0 into 0.0 so both compare equal under total_cmp
        let mut instants: Vec<f64> = instants
            .into_iter()
            .filter(|v| !v.is_nan())
            .map(|v| v + 0.0)
            .collect();
        instants.sort_by(f64::total_cmp);
        instants.dedup_by(|a, b| a == b);
        Timeline { instants }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.instants
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.instants.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.instants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.instants.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.instants.last().copied()
    }

    /// Index of an instant. Exact match only.
    pub fn position(&self, instant: f64) -> Option<usize> {
        let instant = instant + 0.0;
        self.instants
            .binary_search_by(|probe| probe.total_cmp(&instant))
            .ok()
    }

    /// Indices of the instants in the inclusive range `[start, end]`.
    ///
    /// Empty when either value is not on the timeline or `start` comes
    /// after `end`.
    pub fn range(&self, start: f64, end: f64) -> Range<usize> {
        match (self.position(start), self.position(end)) {
            (Some(first), Some(last)) if first <= last => first..last + 1,
            _ => 0..0,
        }
    }

    /// Indices covered by `interval`, resolving a missing or non-numeric
    /// start to the first instant and a missing or non-numeric end to the last.
    pub fn resolve(&self, interval: &Interval) -> Range<usize> {
        let start = interval.start_instant().or_else(|| self.first());
        let end = interval.end_instant().or_else(|| self.last());
        match (start, end) {
            (Some(start), Some(end)) => self.range(start, end),
            _ => 0..0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TimeBound;

    fn timeline(values: &[f64]) -> Timeline {
        Timeline::from_instants(values.iter().copied())
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        let t = timeline(&[5.0, 1.0, 3.0, 1.0, 5.0, -2.0, f64::NAN]);
        assert_eq!(t.as_slice(), &[-2.0, 1.0, 3.0, 5.0]);
        assert!(t.as_slice().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_inclusive_range() {
        let t = timeline(&[0.0, 2.0, 3.0, 5.0, 7.0]);
        let idx = t.range(2.0, 5.0);
        let members: Vec<f64> = t.as_slice()[idx].to_vec();
        assert_eq!(members, vec![2.0, 3.0, 5.0]);
    }

    #[test]
    fn test_range_off_timeline_or_reversed() {
        let t = timeline(&[0.0, 2.0, 3.0]);
        assert!(t.range(1.0, 3.0).is_empty());
        assert!(t.range(0.0, 9.0).is_empty());
        assert!(t.range(3.0, 0.0).is_empty());
    }

    #[test]
    fn test_open_bounds_resolve_to_edges_of_timeline() {
        let t = timeline(&[0.0, 2.0, 3.0, 5.0]);
        let no_start = Interval::new(None, Some(TimeBound::closed("2")));
        assert_eq!(t.resolve(&no_start), 0..2);
        let no_end = Interval::new(Some(TimeBound::closed("3")), None);
        assert_eq!(t.resolve(&no_end), 2..4);
    }

    #[test]
    fn test_open_start_is_first_instant_not_zero() {
        let t = timeline(&[10.0, 20.0, 30.0]);
        let no_start = Interval::new(None, Some(TimeBound::closed("20")));
        assert_eq!(t.resolve(&no_start), 0..2);
    }

    #[test]
    fn test_resolve_on_empty_timeline() {
        let t = Timeline::default();
        assert!(t.resolve(&Interval::default()).is_empty());
        assert!(t.first().is_none());
    }
}
