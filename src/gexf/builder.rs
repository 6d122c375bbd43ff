//! Entity builder: typed records from document elements
//!
//! Required fields fall back to fixed sentinels. Optional fields are only
//! set when the document supplies them; where the format defines a default
//! for an attribute of a present element (viz alpha, size, shape) that
//! default is applied. Nothing here fails: malformed numbers become NaN or
//! are left for the timeline to treat as absent.

use super::accessor::ElementAccess;
use super::ParseConfig;
use crate::graph::types::parse_float_lenient;
use crate::graph::viz::{DEFAULT_EDGE_SHAPE, DEFAULT_NODE_SHAPE, DEFAULT_SIZE};
use crate::graph::{
    Attribute, AttributeClass, AttributeMode, AttributeType, AttributeValue, BoundSource, Color,
    Edge, EdgeDirection, GraphMode, Interval, Lifetime, Node, Position, TimeBound, MISSING_ID,
    MISSING_LABEL, MISSING_SOURCE, MISSING_TARGET,
};
use tracing::{debug, warn};

/// `closed` wins over `open`, which wins over `timestamp`
fn bound<E: ElementAccess>(el: E, closed: &str, open: &str, timestamp: bool) -> Option<TimeBound> {
    if let Some(raw) = el.attribute(closed) {
        return Some(TimeBound::new(raw, BoundSource::Closed));
    }
    if let Some(raw) = el.attribute(open) {
        return Some(TimeBound::new(raw, BoundSource::Open));
    }
    if timestamp {
        if let Some(raw) = el.attribute("timestamp") {
            return Some(TimeBound::new(raw, BoundSource::Timestamp));
        }
    }
    None
}

/// Interval from `start`/`startopen`/`timestamp` and `end`/`endopen`/`timestamp`
pub fn build_interval<E: ElementAccess>(el: E) -> Interval {
    Interval::new(
        bound(el, "start", "startopen", true),
        bound(el, "end", "endopen", true),
    )
}

/// Graph-level bounds take no `timestamp` fallback
pub fn build_graph_bounds<E: ElementAccess>(el: E) -> (Option<TimeBound>, Option<TimeBound>) {
    (
        bound(el, "start", "startopen", false),
        bound(el, "end", "endopen", false),
    )
}

/// Spells when at least one `spell` element exists, otherwise the
/// element's own bounds
pub fn build_lifetime<E: ElementAccess>(el: E) -> Lifetime {
    let spells: Vec<Interval> = el
        .first_child("spells")
        .map(|block| block.children("spell").into_iter().map(build_interval).collect())
        .unwrap_or_default();
    if spells.is_empty() {
        Lifetime::Interval(build_interval(el))
    } else {
        Lifetime::Spells(spells)
    }
}

/// Attribute values, or `None` when the element has no `attvalues` block
pub fn build_attribute_values<E: ElementAccess>(el: E, mode: &GraphMode) -> Option<Vec<AttributeValue>> {
    let block = el.first_child("attvalues")?;
    let values = block
        .children("attvalue")
        .into_iter()
        .map(|attvalue| {
            let attribute = attvalue
                .attribute("for")
                .or_else(|| attvalue.attribute("id"))
                .unwrap_or("");
            let value = AttributeValue::new(attribute, attvalue.attribute_or("value", ""));
            match mode {
                GraphMode::Dynamic(_) => value.with_lifetime(build_interval(attvalue)),
                GraphMode::Static => value,
            }
        })
        .collect();
    Some(values)
}

fn channel<E: ElementAccess>(el: E, name: &str) -> u8 {
    el.attribute(name)
        .and_then(|raw| raw.trim().parse::<u8>().ok())
        .unwrap_or(255)
}

pub fn build_color<E: ElementAccess>(el: E) -> Option<Color> {
    let color = el.first_child("color")?;
    Some(Color::new(
        channel(color, "r"),
        channel(color, "g"),
        channel(color, "b"),
        parse_float_lenient(&color.attribute_or("a", "1")),
    ))
}

pub fn build_position<E: ElementAccess>(el: E) -> Option<Position> {
    let position = el.first_child("position")?;
    Some(Position {
        x: parse_float_lenient(&position.attribute_or("x", "0")),
        y: parse_float_lenient(&position.attribute_or("y", "0")),
        z: parse_float_lenient(&position.attribute_or("z", "0")),
    })
}

fn build_scalar<E: ElementAccess>(el: E, tag: &str) -> Option<f64> {
    let scalar = el.first_child(tag)?;
    Some(
        scalar
            .attribute("value")
            .map(parse_float_lenient)
            .unwrap_or(DEFAULT_SIZE),
    )
}

fn build_shape<E: ElementAccess>(el: E, default: &str) -> Option<String> {
    el.first_child("shape")
        .map(|shape| shape.attribute_or("value", default))
}

/// Build a node record
pub fn build_node<E: ElementAccess>(el: E, mode: &GraphMode, config: &ParseConfig) -> Node {
    let mut node = Node::new(
        el.attribute_or("id", MISSING_ID),
        el.attribute_or("label", MISSING_LABEL),
    );
    node.attributes = build_attribute_values(el, mode);

    if config.include_viz {
        node.color = build_color(el);
        node.position = build_position(el);
        node.size = build_scalar(el, "size");
        node.shape = build_shape(el, DEFAULT_NODE_SHAPE);
    }

    if mode.is_dynamic() {
        let lifetime = build_lifetime(el);
        debug!("Node {} lifetime: {:?}", node.id, lifetime);
        node = node.with_lifetime(lifetime);
    }
    node
}

/// Build an edge record
pub fn build_edge<E: ElementAccess>(el: E, mode: &GraphMode, config: &ParseConfig) -> Edge {
    let mut edge = Edge::new(
        el.attribute_or("id", MISSING_ID),
        el.attribute_or("source", MISSING_SOURCE),
        el.attribute_or("target", MISSING_TARGET),
    );
    edge.direction = el
        .attribute("type")
        .filter(|raw| !raw.is_empty())
        .map(EdgeDirection::parse);
    if let Some(EdgeDirection::Other(raw)) = &edge.direction {
        warn!("Edge {} has unknown type {:?}", edge.id, raw);
    }
    edge.label = el
        .attribute("label")
        .filter(|raw| !raw.is_empty())
        .map(str::to_string);
    edge.weight = el.attribute("weight").map(parse_float_lenient);
    edge.attributes = build_attribute_values(el, mode);

    if config.include_viz {
        edge.color = build_color(el);
        edge.thickness = build_scalar(el, "thickness").or_else(|| build_scalar(el, "size"));
        edge.shape = build_shape(el, DEFAULT_EDGE_SHAPE);
    }

    if mode.is_dynamic() {
        let lifetime = build_lifetime(el);
        debug!("Edge {} lifetime: {:?}", edge.id, lifetime);
        edge = edge.with_lifetime(lifetime);
    }
    edge
}

/// Flatten one `attributes` block into schema entries
pub fn build_attributes<E: ElementAccess>(block: E) -> Vec<Attribute> {
    let class = AttributeClass::parse(block.attribute("class").unwrap_or(""));
    let mode = AttributeMode::parse(block.attribute("mode").unwrap_or("static"));
    block
        .descendants("attribute")
        .into_iter()
        .map(|attr| {
            Attribute::new(
                class.clone(),
                mode,
                attr.attribute_or("id", ""),
                attr.attribute_or("title", ""),
                AttributeType::parse(attr.attribute("type").unwrap_or("string")),
            )
        })
        .collect()
}
