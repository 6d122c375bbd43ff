//! Time-varying existence of nodes, edges and attribute values
//!
//! A bound keeps the raw document text together with the attribute it came
//! from. Coercion to a numeric instant happens on demand, so a malformed
//! value is still visible on the model while the timeline treats it as absent.

use super::types::parse_instant;
use serde::{Deserialize, Serialize};

/// Which document attribute supplied a bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundSource {
    /// `start` / `end`
    Closed,
    /// `startopen` / `endopen`
    Open,
    /// `timestamp`, used for both bounds
    Timestamp,
}

/// One side of an interval as written in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBound {
    pub raw: String,
    pub source: BoundSource,
}

impl TimeBound {
    pub fn new(raw: impl Into<String>, source: BoundSource) -> Self {
        TimeBound {
            raw: raw.into(),
            source,
        }
    }

    pub fn closed(raw: impl Into<String>) -> Self {
        Self::new(raw, BoundSource::Closed)
    }

    /// Numeric instant, or `None` when the text is not a number
    pub fn instant(&self) -> Option<f64> {
        parse_instant(&self.raw)
    }
}

/// A single `[start, end]` interval. Either side may be missing (open).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: Option<TimeBound>,
    pub end: Option<TimeBound>,
}

impl Interval {
    pub fn new(start: Option<TimeBound>, end: Option<TimeBound>) -> Self {
        Interval { start, end }
    }

    /// Convenience for closed numeric bounds
    pub fn closed(start: f64, end: f64) -> Self {
        Interval {
            start: Some(TimeBound::closed(start.to_string())),
            end: Some(TimeBound::closed(end.to_string())),
        }
    }

    /// True when neither side was declared
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn start_instant(&self) -> Option<f64> {
        self.start.as_ref().and_then(TimeBound::instant)
    }

    pub fn end_instant(&self) -> Option<f64> {
        self.end.as_ref().and_then(TimeBound::instant)
    }
}

/// Existence of an entity on a dynamic graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Lifetime {
    /// Bounds declared directly on the element
    Interval(Interval),
    /// One or more `spell` elements; the element's own bounds are ignored
    Spells(Vec<Interval>),
}

impl Lifetime {
    /// Intervals this lifetime contributes to snapshot membership.
    ///
    /// An interval with no declared bound contributes nothing.
    pub fn intervals(&self) -> Vec<&Interval> {
        match self {
            Lifetime::Interval(interval) if interval.is_unbounded() => Vec::new(),
            Lifetime::Interval(interval) => vec![interval],
            Lifetime::Spells(spells) => spells.iter().collect(),
        }
    }

    /// Every declared bound, spells included
    pub fn bounds(&self) -> impl Iterator<Item = &TimeBound> {
        let intervals: Vec<&Interval> = match self {
            Lifetime::Interval(interval) => vec![interval],
            Lifetime::Spells(spells) => spells.iter().collect(),
        };
        intervals
            .into_iter()
            .flat_map(|i| i.start.iter().chain(i.end.iter()))
    }
}

/// Mode-dependent existence of a node or edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Presence {
    /// Static graph: the entity always exists, no time fields apply
    #[default]
    Static,
    Dynamic(Lifetime),
}

impl Presence {
    pub fn lifetime(&self) -> Option<&Lifetime> {
        match self {
            Presence::Static => None,
            Presence::Dynamic(lifetime) => Some(lifetime),
        }
    }

    pub fn spells(&self) -> Option<&[Interval]> {
        match self {
            Presence::Dynamic(Lifetime::Spells(spells)) => Some(spells),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_instant() {
        assert_eq!(TimeBound::closed("3").instant(), Some(3.0));
        assert_eq!(TimeBound::new("x", BoundSource::Open).instant(), None);
    }

    #[test]
    fn test_unbounded_interval_contributes_nothing() {
        let lifetime = Lifetime::Interval(Interval::default());
        assert!(lifetime.intervals().is_empty());
        assert_eq!(lifetime.bounds().count(), 0);
    }

    #[test]
    fn test_half_open_interval() {
        let interval = Interval::new(Some(TimeBound::closed("1")), None);
        let lifetime = Lifetime::Interval(interval);
        assert_eq!(lifetime.intervals().len(), 1);
        assert_eq!(lifetime.bounds().count(), 1);
    }

    #[test]
    fn test_spell_bounds() {
        let lifetime = Lifetime::Spells(vec![Interval::closed(0.0, 2.0), Interval::closed(4.0, 6.0)]);
        let raws: Vec<&str> = lifetime.bounds().map(|b| b.raw.as_str()).collect();
        assert_eq!(raws, vec!["0", "2", "4", "6"]);
    }

    #[test]
    fn test_presence_accessors() {
        assert!(Presence::Static.lifetime().is_none());
        let p = Presence::Dynamic(Lifetime::Spells(vec![Interval::closed(1.0, 2.0)]));
        assert_eq!(p.spells().map(|s| s.len()), Some(1));
    }
}
