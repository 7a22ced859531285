use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::Arbitrary;

use crate::prelude::*;
use crate::tracing_support::{info_span, init_tracing};

#[derive(Debug, Clone)]
pub struct ArbTownGraph {
    pub graph: TownGraph,
}

pub fn town_name(i: usize) -> String {
    format!("Town_{}", i)
}

impl Arbitrary for ArbTownGraph {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_towns = usize::arbitrary(g) % 12;
        let num_roads = usize::arbitrary(g) % 30;

        let mut graph = TownGraph::new();
        let towns: Vec<Town> = (0..num_towns).map(|i| Town::new(town_name(i))).collect();
        for town in &towns {
            graph.add_vertex(town).unwrap();
        }
        for i in 0..num_roads {
            if towns.is_empty() {
                break;
            }
            let source = &towns[usize::arbitrary(g) % towns.len()];
            let destination = &towns[usize::arbitrary(g) % towns.len()];
            let weight = u32::arbitrary(g) % 20;
            graph
                .add_edge(source, destination, weight, &format!("Road_{}", i))
                .unwrap();
        }

        ArbTownGraph { graph }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let graph = self.graph.clone();
        let towns: Vec<Town> = graph.vertex_set().cloned().collect();
        Box::new(towns.into_iter().rev().map(move |town| {
            let mut smaller = graph.clone();
            smaller.remove_vertex(&town);
            ArbTownGraph { graph: smaller }
        }))
    }
}

/// A `width` by `height` grid of towns, with horizontal roads of weight 1
/// and vertical roads of weight 2.
#[cfg_attr(not(feature = "slow_tests"), allow(dead_code))]
pub fn grid_graph(width: usize, height: usize) -> TownGraph {
    let mut graph = TownGraph::new();
    let town = |x: usize, y: usize| Town::new(format!("T_{:03}_{:03}", x, y));
    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(&town(x, y)).unwrap();
        }
    }
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph
                    .add_edge(&town(x, y), &town(x + 1, y), 1, &format!("H_{}_{}", x, y))
                    .unwrap();
            }
            if y + 1 < height {
                graph
                    .add_edge(&town(x, y), &town(x, y + 1), 2, &format!("V_{}_{}", x, y))
                    .unwrap();
            }
        }
    }
    graph
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks the internal consistency of a graph through its public API.
pub fn check_graph_consistency(graph: &TownGraph) {
    init_tracing();
    let _span = info_span!("check_graph_consistency").entered();

    assert_eq!(graph.check_consistency(), Ok(()));
    assert_eq!(graph.num_vertices(), graph.vertex_set().count());
    assert_eq!(graph.num_edges(), graph.edge_set().count());
    assert!(!has_duplicates(graph.edge_set()));

    for road in graph.edge_set() {
        let source = graph.get_town(road.source()).unwrap();
        let destination = graph.get_town(road.destination()).unwrap();
        assert!(source.has_neighbor(destination.name()));
        assert!(destination.has_neighbor(source.name()));
        assert_eq!(graph.get_edge(destination, source), Some(road));
    }

    for town in graph.vertex_set() {
        assert!(!has_duplicates(town.neighbors()));
        let edges = graph.edges_of(town).unwrap();
        for neighbor in town.neighbors() {
            assert!(edges.iter().any(|road| road.other_end(town.name()) == Some(neighbor)));
        }
        assert_eq!(edges.len(), town.num_neighbors());
    }
}
