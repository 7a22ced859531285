//! `Graph` and `GraphMut` are the core traits for working with town graphs.
//! `Graph` provides read-only queries, including shortest paths, while
//! `GraphMut` extends `Graph` with methods for adding and removing vertices
//! and edges.
//!
//! [`TownGraph`] is the in-memory implementation: an undirected graph of
//! [`Town`]s connected by weighted, named [`Road`]s, with at most one road
//! between any two towns.
//!
//! Invariants maintained by `TownGraph`:
//!
//! - Every town named by a road is in the vertex set.
//! - Each town's neighbor list is exactly the set of towns it shares a road
//!   with.
//! - Removing a town removes every road touching it, and the town from
//!   every former neighbor's neighbor list.

mod dijkstra;

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Debug,
    hash::Hash,
};

use crate::{
    error::GraphError,
    labels::PathLabels,
    road::Road,
    route::Route,
    town::Town,
    tracing_support::{debug, info_span},
    util::sort_pair,
};

/// A trait representing an undirected, weighted graph.  Queries never fail;
/// absence is reported as `None` or `false`.
pub trait Graph: Sized {
    type Vertex: Eq + Hash + Ord + Clone + Debug;
    type Edge: Eq + Hash + Clone + Debug;

    // Vertices

    /// Gets an iterator over all vertices.
    fn vertex_set(&self) -> impl Iterator<Item = &Self::Vertex> + '_;

    /// Checks if the graph contains a vertex equal to `vertex`.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Gets the number of vertices in the graph.
    fn num_vertices(&self) -> usize {
        self.vertex_set().count()
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    // Edges

    /// Gets an iterator over all edges.
    fn edge_set(&self) -> impl Iterator<Item = &Self::Edge> + '_;

    /// Gets the edge connecting `source` and `destination`, in either
    /// direction.
    fn get_edge(&self, source: &Self::Vertex, destination: &Self::Vertex) -> Option<&Self::Edge>;

    /// Checks if there is an edge connecting `source` and `destination`.
    fn contains_edge(&self, source: &Self::Vertex, destination: &Self::Vertex) -> bool {
        self.get_edge(source, destination).is_some()
    }

    /// Gets every edge touching `vertex`.
    fn edges_of(&self, vertex: &Self::Vertex) -> Result<Vec<&Self::Edge>, GraphError>;

    /// Gets the number of edges in the graph.
    fn num_edges(&self) -> usize {
        self.edge_set().count()
    }

    // Pathfinding

    /// Finds a lowest-weight route from `source` to `destination`.  Returns
    /// `None` if either vertex is missing or no route exists.
    fn shortest_route(&self, source: &Self::Vertex, destination: &Self::Vertex) -> Option<Route>;

    /// Like [`Self::shortest_route`], but renders each step as
    /// `"<from> via <road> to <to> <weight> mi"`.
    fn shortest_path(
        &self,
        source: &Self::Vertex,
        destination: &Self::Vertex,
    ) -> Option<Vec<String>> {
        self.shortest_route(source, destination)
            .map(|route| route.descriptions())
    }
}

/// A trait for graphs that support mutation operations.
///
/// Mutations that would break an invariant fail before changing any state.
pub trait GraphMut: Graph {
    /// Creates a new, empty graph.
    fn new() -> Self;

    /// Adds a vertex.  Returns true if it was not already present.
    fn add_vertex(&mut self, vertex: &Self::Vertex) -> Result<bool, GraphError>;

    /// Adds an edge between two vertices already in the graph and returns
    /// it.  Returns `Ok(None)` without changing the graph if an edge between
    /// the two vertices already exists.
    fn add_edge(
        &mut self,
        source: &Self::Vertex,
        destination: &Self::Vertex,
        weight: u32,
        name: &str,
    ) -> Result<Option<Self::Edge>, GraphError>;

    /// Removes the edge between two vertices, returning it.  When `weight`
    /// or `name` is given, the stored edge must also match it.
    fn remove_edge(
        &mut self,
        source: &Self::Vertex,
        destination: &Self::Vertex,
        weight: Option<u32>,
        name: Option<&str>,
    ) -> Option<Self::Edge>;

    /// Removes a vertex and every edge touching it.  Returns true if the
    /// vertex was present.
    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> bool;

    /// Removes all vertices and edges from the graph.
    fn clear(&mut self) {
        let vertices: Vec<_> = self.vertex_set().cloned().collect();
        for vertex in vertices {
            self.remove_vertex(&vertex);
        }
    }
}

type RoadKey = (String, String);

fn road_key(a: &str, b: &str) -> RoadKey {
    let (a, b) = sort_pair(a, b);
    (a.to_owned(), b.to_owned())
}

/// An in-memory graph of towns and roads.
///
/// Towns are kept ordered by name and roads by their endpoint names, so
/// every iteration order, and therefore every tie-break in
/// [`TownGraph::dijkstra_shortest_path`], is deterministic.
#[derive(Clone, Debug, Default)]
pub struct TownGraph {
    towns: BTreeMap<String, Town>,
    roads: BTreeMap<RoadKey, Road>,
}

impl TownGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the graph's own copy of the town with the given name, including
    /// its current neighbor list.
    pub fn get_town(&self, name: &str) -> Option<&Town> {
        self.towns.get(name)
    }

    /// Gets the town names in ascending order.
    pub fn town_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.towns.keys().map(String::as_str)
    }

    /// Runs the label-based shortest-path computation from `source` and
    /// returns the label of every town reached.  Returns `None` if `source`
    /// is not in the graph.
    ///
    /// Tie-break: among equal cumulative weights the town with the lowest
    /// name is settled first, and a label is only replaced by a strictly
    /// lighter route, so the first route found wins among equal ones.
    pub fn dijkstra_shortest_path(&self, source: &Town) -> Option<PathLabels> {
        let _span = info_span!("dijkstra_shortest_path", source = source.name()).entered();
        dijkstra::label_towns(self, source.name())
    }

    /// Checks the graph invariants, returning a reason if one is violated.
    pub fn check_consistency(&self) -> Result<(), &'static str> {
        for (key, road) in &self.roads {
            if (key.0.as_str(), key.1.as_str()) != road.ends() {
                return Err("Road stored under the wrong endpoint key");
            }
            let (Some(source), Some(destination)) = (
                self.towns.get(road.source()),
                self.towns.get(road.destination()),
            ) else {
                return Err("Road endpoint missing from vertex set");
            };
            if !source.has_neighbor(destination.name()) || !destination.has_neighbor(source.name())
            {
                return Err("Road endpoints are not neighbors");
            }
        }
        for (name, town) in &self.towns {
            if name != town.name() {
                return Err("Town stored under the wrong name");
            }
            let mut seen = BTreeSet::new();
            for neighbor in town.neighbors() {
                if !seen.insert(neighbor) {
                    return Err("Duplicate neighbor");
                }
                if !self.roads.contains_key(&road_key(name, neighbor)) {
                    return Err("Neighbor without a road");
                }
            }
        }
        Ok(())
    }

    fn debug_assert_consistent(&self) {
        #[cfg(all(debug_assertions, not(feature = "unchecked")))]
        if let Err(reason) = self.check_consistency() {
            panic!("Inconsistent town graph: {}", reason);
        }
    }

    /// Fails with `NullArgument` if either handle is unset, then with
    /// `InvalidArgument` if either town is missing.
    fn check_endpoints(&self, source: &Town, destination: &Town) -> Result<(), GraphError> {
        if source.is_unset() || destination.is_unset() {
            return Err(GraphError::NullArgument);
        }
        for town in [source, destination] {
            if !self.towns.contains_key(town.name()) {
                return Err(GraphError::InvalidArgument(town.name().to_owned()));
            }
        }
        Ok(())
    }

    fn link(&mut self, a: &str, b: &str) {
        if let Some(town) = self.towns.get_mut(a) {
            town.insert_neighbor(b.to_owned());
        }
        if let Some(town) = self.towns.get_mut(b) {
            town.insert_neighbor(a.to_owned());
        }
    }

    fn unlink(&mut self, a: &str, b: &str) {
        if let Some(town) = self.towns.get_mut(a) {
            town.remove_neighbor_named(b);
        }
        if let Some(town) = self.towns.get_mut(b) {
            town.remove_neighbor_named(a);
        }
    }

    /// Towns in each connected component, each component sorted by name.
    #[cfg(feature = "pathfinding")]
    pub fn connected_components(&self) -> Vec<BTreeSet<String>> {
        let starts: Vec<String> = self.towns.keys().cloned().collect();
        let mut components: Vec<BTreeSet<String>> =
            pathfinding::prelude::connected_components(&starts, |name: &String| {
                self.neighbor_names(name)
            })
            .into_iter()
            .map(|component| component.into_iter().collect())
            .collect();
        components.sort();
        components
    }

    /// Names of every town reachable from `source`, `source` included, in
    /// breadth-first order.  Empty if `source` is not in the graph.
    #[cfg(feature = "pathfinding")]
    pub fn reachable_from(&self, source: &Town) -> Vec<String> {
        if !self.towns.contains_key(source.name()) {
            return Vec::new();
        }
        pathfinding::prelude::bfs_reach(source.name().to_owned(), |name: &String| {
            self.neighbor_names(name)
        })
        .collect()
    }

    #[cfg(feature = "pathfinding")]
    fn neighbor_names(&self, name: &str) -> Vec<String> {
        self.towns
            .get(name)
            .map(|town| town.neighbors().map(str::to_owned).collect())
            .unwrap_or_default()
    }
}

impl Graph for TownGraph {
    type Vertex = Town;
    type Edge = Road;

    fn vertex_set(&self) -> impl Iterator<Item = &Town> + '_ {
        self.towns.values()
    }

    fn contains_vertex(&self, vertex: &Town) -> bool {
        self.towns.contains_key(vertex.name())
    }

    fn num_vertices(&self) -> usize {
        self.towns.len()
    }

    fn edge_set(&self) -> impl Iterator<Item = &Road> + '_ {
        self.roads.values()
    }

    fn get_edge(&self, source: &Town, destination: &Town) -> Option<&Road> {
        self.roads.get(&road_key(source.name(), destination.name()))
    }

    fn edges_of(&self, vertex: &Town) -> Result<Vec<&Road>, GraphError> {
        if vertex.is_unset() {
            return Err(GraphError::NullArgument);
        }
        if !self.contains_vertex(vertex) {
            return Err(GraphError::InvalidArgument(vertex.name().to_owned()));
        }
        Ok(self
            .roads
            .values()
            .filter(|road| road.touches(vertex.name()))
            .collect())
    }

    fn num_edges(&self) -> usize {
        self.roads.len()
    }

    fn shortest_route(&self, source: &Town, destination: &Town) -> Option<Route> {
        let _span = info_span!(
            "shortest_path",
            source = source.name(),
            destination = destination.name()
        )
        .entered();
        if !self.contains_vertex(destination) {
            return None;
        }
        let labels = self.dijkstra_shortest_path(source)?;
        let route = labels.route_to(destination.name());
        debug!(
            source = source.name(),
            destination = destination.name(),
            found = route.is_some(),
            "shortest path query"
        );
        route
    }
}

impl GraphMut for TownGraph {
    fn new() -> Self {
        Self::default()
    }

    fn add_vertex(&mut self, vertex: &Town) -> Result<bool, GraphError> {
        if vertex.is_unset() {
            return Err(GraphError::NullArgument);
        }
        if self.towns.contains_key(vertex.name()) {
            return Ok(false);
        }
        self.towns
            .insert(vertex.name().to_owned(), Town::new(vertex.name()));
        debug!(town = vertex.name(), "added town");
        Ok(true)
    }

    fn add_edge(
        &mut self,
        source: &Town,
        destination: &Town,
        weight: u32,
        name: &str,
    ) -> Result<Option<Road>, GraphError> {
        self.check_endpoints(source, destination)?;
        let key = road_key(source.name(), destination.name());
        if self.roads.contains_key(&key) {
            debug!(
                source = source.name(),
                destination = destination.name(),
                "road already exists"
            );
            return Ok(None);
        }
        let road = Road::new(source, destination, weight, name);
        self.roads.insert(key, road.clone());
        self.link(source.name(), destination.name());
        debug!(road = %road, weight, "added road");
        self.debug_assert_consistent();
        Ok(Some(road))
    }

    fn remove_edge(
        &mut self,
        source: &Town,
        destination: &Town,
        weight: Option<u32>,
        name: Option<&str>,
    ) -> Option<Road> {
        let key = road_key(source.name(), destination.name());
        let stored = self.roads.get(&key)?;
        if weight.is_some_and(|w| w != stored.weight()) || name.is_some_and(|n| n != stored.name())
        {
            return None;
        }
        let road = self.roads.remove(&key)?;
        self.unlink(road.source(), road.destination());
        debug!(road = %road, "removed road");
        self.debug_assert_consistent();
        Some(road)
    }

    fn remove_vertex(&mut self, vertex: &Town) -> bool {
        let Some(town) = self.towns.remove(vertex.name()) else {
            return false;
        };
        self.roads.retain(|_, road| !road.touches(town.name()));
        for neighbor in town.neighbors() {
            if let Some(other) = self.towns.get_mut(neighbor) {
                other.remove_neighbor_named(town.name());
            }
        }
        debug!(town = town.name(), "removed town");
        self.debug_assert_consistent();
        true
    }

    fn clear(&mut self) {
        self.towns.clear();
        self.roads.clear();
    }
}
