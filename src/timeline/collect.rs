//! Typed traversal of every temporal bound on nodes and edges

use crate::graph::{AttributeValue, Edge, Lifetime, Node, TimeBound};
use tracing::debug;

/// An entity that may exist over time and carry time-bounded values
pub trait Temporal {
    fn entity_id(&self) -> &str;
    fn lifetime(&self) -> Option<&Lifetime>;
    fn attribute_values(&self) -> &[AttributeValue];
}

impl Temporal for Node {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn lifetime(&self) -> Option<&Lifetime> {
        self.presence.lifetime()
    }

    fn attribute_values(&self) -> &[AttributeValue] {
        self.attributes.as_deref().unwrap_or(&[])
    }
}

impl Temporal for Edge {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn lifetime(&self) -> Option<&Lifetime> {
        self.presence.lifetime()
    }

    fn attribute_values(&self) -> &[AttributeValue] {
        self.attributes.as_deref().unwrap_or(&[])
    }
}

/// Push every numeric bound of `entity` (lifetime, spells, attribute value
/// windows) onto `out`. Unparseable bounds are skipped.
pub fn collect_entity<T: Temporal>(entity: &T, out: &mut Vec<f64>) {
    let lifetime_bounds = entity.lifetime().into_iter().flat_map(Lifetime::bounds);
    let value_bounds = entity.attribute_values().iter().flat_map(AttributeValue::bounds);
    for bound in lifetime_bounds.chain(value_bounds) {
        push_bound(entity.entity_id(), bound, out);
    }
}

fn push_bound(entity: &str, bound: &TimeBound, out: &mut Vec<f64>) {
    match bound.instant() {
        Some(instant) => out.push(instant),
        None => debug!("Discarding non-numeric instant {:?} on {}", bound.raw, entity),
    }
}

/// All instants found on `nodes` and `edges`, unsorted and with duplicates
pub fn collect_instants(nodes: &[Node], edges: &[Edge]) -> Vec<f64> {
    let mut instants = Vec::new();
    for node in nodes {
        collect_entity(node, &mut instants);
    }
    for edge in edges {
        collect_entity(edge, &mut instants);
    }
    instants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{BoundSource, Interval};

    #[test]
    fn test_collects_spells_and_values() {
        let node = Node::new("n", "N")
            .with_lifetime(Lifetime::Spells(vec![Interval::closed(0.0, 2.0), Interval::closed(4.0, 6.0)]))
            .with_attributes(vec![
                AttributeValue::new("w", "1").with_lifetime(Interval::closed(7.0, 8.0)),
            ]);
        let mut out = Vec::new();
        collect_entity(&node, &mut out);
        assert_eq!(out, vec![0.0, 2.0, 4.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_skips_unparseable_bounds() {
        let edge = Edge::new("e", "a", "b").with_lifetime(Lifetime::Interval(Interval::new(
            Some(TimeBound::new("soon", BoundSource::Closed)),
            Some(TimeBound::closed("5")),
        )));
        assert_eq!(collect_instants(&[], &[edge]), vec![5.0]);
    }

    #[test]
    fn test_static_entities_contribute_nothing() {
        let nodes = vec![Node::new("a", "A"), Node::new("b", "B")];
        assert!(collect_instants(&nodes, &[]).is_empty());
    }
}
