//! Dynamic-graph timeline reconstruction
//!
//! Collects every start/end instant on nodes, edges, spells and attribute
//! values into a canonical timeline, then assigns each node and edge to
//! the snapshots its intervals cover. Bounds are inclusive at both ends and
//! open bounds extend to the first/last instant of the timeline.

pub mod collect;
pub mod slice;

pub use collect::{collect_instants, Temporal};
pub use slice::Timeline;

use crate::graph::{Edge, Graph, GraphMode, Node};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors reported by snapshot computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    /// Snapshots are only defined for dynamic graphs with a `double` time format
    #[error("Unsupported snapshot request: mode={mode}, timeformat={time_format:?}")]
    Unsupported {
        mode: String,
        time_format: Option<String>,
    },
}

pub type TimelineResult<T> = Result<T, TimelineError>;

/// Membership at one timeline instant, as indices into the graph's
/// node and edge collections (document order)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub instant: f64,
    pub nodes: Vec<usize>,
    pub edges: Vec<usize>,
}

impl Snapshot {
    fn empty(instant: f64) -> Self {
        Snapshot {
            instant,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn nodes<'g>(&'g self, graph: &'g Graph) -> impl Iterator<Item = &'g Node> + 'g {
        self.nodes.iter().filter_map(move |&i| graph.nodes.get(i))
    }

    pub fn edges<'g>(&'g self, graph: &'g Graph) -> impl Iterator<Item = &'g Edge> + 'g {
        self.edges.iter().filter_map(move |&i| graph.edges.get(i))
    }

    pub fn node_ids<'g>(&'g self, graph: &'g Graph) -> Vec<&'g str> {
        self.nodes(graph).map(|n| n.id.as_str()).collect()
    }

    pub fn edge_ids<'g>(&'g self, graph: &'g Graph) -> Vec<&'g str> {
        self.edges(graph).map(|e| e.id.as_str()).collect()
    }
}

/// Timeline plus one snapshot per instant, in timeline order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshots {
    pub timeline: Timeline,
    pub snapshots: Vec<Snapshot>,
}

impl Snapshots {
    /// Snapshot at exactly `instant`
    pub fn at(&self, instant: f64) -> Option<&Snapshot> {
        self.timeline
            .position(instant)
            .and_then(|i| self.snapshots.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

/// Check that snapshot computation applies to `graph`
pub fn check_supported(graph: &Graph) -> TimelineResult<()> {
    match &graph.mode {
        GraphMode::Dynamic(meta) if meta.time_format.is_numeric_double() => Ok(()),
        GraphMode::Dynamic(meta) => {
            warn!("Snapshots need timeformat=double, graph uses {}", meta.time_format);
            Err(TimelineError::Unsupported {
                mode: graph.mode.name().to_string(),
                time_format: Some(meta.time_format.to_string()),
            })
        }
        GraphMode::Static => {
            warn!("Snapshots requested on a static graph");
            Err(TimelineError::Unsupported {
                mode: graph.mode.name().to_string(),
                time_format: None,
            })
        }
    }
}

/// Indices of the timeline instants at which `entity` is present.
///
/// Spells are resolved independently and unioned. An entity with no
/// declared bound is present nowhere.
pub fn membership<T: Temporal>(timeline: &Timeline, entity: &T) -> Vec<usize> {
    let Some(lifetime) = entity.lifetime() else {
        return Vec::new();
    };
    let mut covered = vec![false; timeline.len()];
    for interval in lifetime.intervals() {
        for i in timeline.resolve(interval) {
            covered[i] = true;
        }
    }
    covered
        .into_iter()
        .enumerate()
        .filter_map(|(i, present)| present.then_some(i))
        .collect()
}

/// Compute the timeline and snapshots of a dynamic graph without caching.
///
/// Fails with `TimelineError::Unsupported` when the graph is static or
/// its time format is not `double`.
pub fn compute_snapshots(graph: &Graph) -> TimelineResult<Snapshots> {
    check_supported(graph)?;

    let timeline = Timeline::from_instants(collect_instants(&graph.nodes, &graph.edges));
    let mut snapshots: Vec<Snapshot> = timeline.iter().map(Snapshot::empty).collect();

    for (index, node) in graph.nodes.iter().enumerate() {
        let present = membership(&timeline, node);
        if present.is_empty() {
            debug!("Node {} is absent from every snapshot", node.id);
        }
        for i in present {
            snapshots[i].nodes.push(index);
        }
    }

    for (index, edge) in graph.edges.iter().enumerate() {
        let present = membership(&timeline, edge);
        if present.is_empty() {
            debug!("Edge {} is absent from every snapshot", edge.id);
        }
        for i in present {
            snapshots[i].edges.push(index);
        }
    }

    info!(
        "Computed {} snapshots over {} nodes and {} edges",
        snapshots.len(),
        graph.node_count(),
        graph.edge_count()
    );

    Ok(Snapshots { timeline, snapshots })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DynamicMeta, Interval, Lifetime, TimeBound, TimeFormat};

    fn dynamic_graph() -> Graph {
        Graph::new(GraphMode::Dynamic(DynamicMeta::default()))
    }

    #[test]
    fn test_end_to_end_spells_and_interval() {
        let mut graph = dynamic_graph();
        graph.nodes.push(
            Node::new("n", "N")
                .with_lifetime(Lifetime::Spells(vec![Interval::closed(0.0, 2.0), Interval::closed(4.0, 6.0)])),
        );
        graph
            .edges
            .push(Edge::new("e", "n", "n").with_lifetime(Lifetime::Interval(Interval::closed(1.0, 5.0))));

        let result = compute_snapshots(&graph).unwrap();
        assert_eq!(result.timeline.as_slice(), &[0.0, 1.0, 2.0, 4.0, 5.0, 6.0]);

        let with_node: Vec<f64> = result.iter().filter(|s| !s.nodes.is_empty()).map(|s| s.instant).collect();
        // Spell [0,2] also covers 1 since 1 lies between on the timeline
        assert_eq!(with_node, vec![0.0, 1.0, 2.0, 4.0, 5.0, 6.0]);
        let with_edge: Vec<f64> = result.iter().filter(|s| !s.edges.is_empty()).map(|s| s.instant).collect();
        assert_eq!(with_edge, vec![1.0, 2.0, 4.0, 5.0]);
    }

    #[test]
    fn test_unbounded_entity_is_excluded() {
        // Documented behaviour: no temporal information means no snapshot,
        // not permanent presence.
        let mut graph = dynamic_graph();
        graph.nodes.push(Node::new("a", "A").with_lifetime(Lifetime::Interval(Interval::closed(1.0, 3.0))));
        graph.nodes.push(Node::new("b", "B").with_lifetime(Lifetime::Interval(Interval::default())));
        let result = compute_snapshots(&graph).unwrap();
        assert!(result.iter().all(|s| s.nodes == vec![0]));
    }

    #[test]
    fn test_non_double_time_format_unsupported() {
        let graph = Graph::new(GraphMode::Dynamic(DynamicMeta {
            time_format: TimeFormat::Date,
            ..Default::default()
        }));
        assert_eq!(
            compute_snapshots(&graph),
            Err(TimelineError::Unsupported {
                mode: "dynamic".to_string(),
                time_format: Some("date".to_string()),
            })
        );
    }

    #[test]
    fn test_malformed_start_treated_as_open() {
        let mut graph = dynamic_graph();
        graph.nodes.push(Node::new("a", "A").with_lifetime(Lifetime::Interval(Interval::closed(0.0, 9.0))));
        graph.nodes.push(Node::new("b", "B").with_lifetime(Lifetime::Interval(Interval::new(
            Some(TimeBound::closed("yesterday")),
            Some(TimeBound::closed("4")),
        ))));
        let result = compute_snapshots(&graph).unwrap();
        assert_eq!(result.timeline.as_slice(), &[0.0, 4.0, 9.0]);
        assert_eq!(result.at(0.0).unwrap().nodes, vec![0, 1]);
        assert_eq!(result.at(4.0).unwrap().nodes, vec![0, 1]);
        assert_eq!(result.at(9.0).unwrap().nodes, vec![0]);
    }

    #[test]
    fn test_attribute_value_windows_extend_timeline() {
        let mut graph = dynamic_graph();
        graph.nodes.push(
            Node::new("a", "A")
                .with_lifetime(Lifetime::Interval(Interval::new(Some(TimeBound::closed("2")), None)))
                .with_attributes(vec![crate::graph::AttributeValue::new("x", "1")
                    .with_lifetime(Interval::closed(0.0, 8.0))]),
        );
        let result = compute_snapshots(&graph).unwrap();
        assert_eq!(result.timeline.as_slice(), &[0.0, 2.0, 8.0]);
        assert!(result.at(0.0).unwrap().nodes.is_empty());
        assert_eq!(result.at(8.0).unwrap().nodes, vec![0]);
    }

    #[test]
    fn test_overlapping_spells_do_not_duplicate() {
        let mut graph = dynamic_graph();
        graph.nodes.push(
            Node::new("a", "A")
                .with_lifetime(Lifetime::Spells(vec![Interval::closed(0.0, 3.0), Interval::closed(1.0, 3.0)])),
        );
        let result = compute_snapshots(&graph).unwrap();
        assert_eq!(result.at(1.0).unwrap().nodes, vec![0]);
    }
}
