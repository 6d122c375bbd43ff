//! Graph assembler: graph-level settings, schema, nodes and edges

use super::accessor::ElementAccess;
use super::builder::{build_attributes, build_edge, build_graph_bounds, build_node};
use super::ParseConfig;
use crate::graph::{DynamicMeta, EdgeDirection, Graph, GraphMode, IdType, Meta, TimeFormat};
use tracing::{debug, info, warn};

/// Metadata from the first `meta` element. All fields unset when absent.
pub fn assemble_meta<E: ElementAccess>(root: E) -> Meta {
    let Some(meta) = root.first_descendant("meta") else {
        return Meta::default();
    };
    let text_of = |tag: &str| {
        meta.first_descendant(tag)
            .map(|el| el.text().unwrap_or("").trim().to_string())
    };
    Meta {
        creator: text_of("creator"),
        keywords: text_of("keywords"),
        description: text_of("description"),
        last_modified: meta.attribute("lastmodifieddate").map(str::to_string),
    }
}

/// Mode of the graph element, with dynamic settings when `mode="dynamic"`
pub fn assemble_mode<E: ElementAccess>(graph: Option<E>) -> GraphMode {
    let Some(graph) = graph else {
        return GraphMode::Static;
    };
    match graph.attribute("mode").unwrap_or("static") {
        "dynamic" => {
            let (start, end) = build_graph_bounds(graph);
            GraphMode::Dynamic(DynamicMeta {
                time_format: TimeFormat::parse(graph.attribute("timeformat").unwrap_or("double")),
                start,
                end,
            })
        }
        "static" => GraphMode::Static,
        other => {
            warn!("Unknown graph mode {:?}, treating as static", other);
            GraphMode::Static
        }
    }
}

/// Build a `Graph` from the document's root element
pub fn assemble<E: ElementAccess>(root: E, config: &ParseConfig) -> Graph {
    let version = if root.tag() == "gexf" {
        root.attribute("version").map(str::to_string)
    } else {
        None
    };
    if let Some(version) = &version {
        info!("GEXF version: {}", version);
    }

    let graph_el = if root.tag() == "graph" {
        Some(root)
    } else {
        root.first_descendant("graph")
    };
    if graph_el.is_none() {
        debug!("No graph element, using defaults");
    }

    let mode = assemble_mode(graph_el);
    let mut graph = Graph::new(mode);
    graph.version = version;
    graph.default_edge_type = graph_el
        .and_then(|g| g.attribute("defaultedgetype").map(EdgeDirection::parse))
        .unwrap_or_default();
    graph.id_type = graph_el
        .and_then(|g| g.attribute("idtype").map(IdType::parse))
        .unwrap_or_default();
    graph.meta = assemble_meta(root);

    graph.attributes = root
        .descendants("attributes")
        .into_iter()
        .flat_map(build_attributes)
        .collect();
    graph.nodes = root
        .descendants("node")
        .into_iter()
        .map(|el| build_node(el, &graph.mode, config))
        .collect();
    graph.edges = root
        .descendants("edge")
        .into_iter()
        .map(|el| build_edge(el, &graph.mode, config))
        .collect();

    info!(
        "Assembled {} graph: {} attributes, {} nodes, {} edges",
        graph.mode.name(),
        graph.attributes.len(),
        graph.node_count(),
        graph.edge_count()
    );
    graph
}
