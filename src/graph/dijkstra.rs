//! Label-based shortest paths over a [`TownGraph`].
//!
//! Every settled town keeps proposing its cheapest unsettled neighbor.  Each
//! round the lightest proposal across all settled towns is accepted, which
//! settles one more town and records its label.  The search stops when
//! every town is settled or no settled town has an unsettled neighbor left.

use bitvec::vec::BitVec;

use super::TownGraph;
use crate::{
    labels::{PathLabel, PathLabels},
    road::Road,
    tracing_support::trace,
};

/// A settled town's offer to settle one of its neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Proposal {
    total: u64,
    far: usize,
    near: usize,
}

/// Towns indexed by their position in name order, with each town's roads
/// sorted by the index of the far end.
struct Index<'g> {
    names: Vec<&'g str>,
    adjacency: Vec<Vec<(usize, &'g Road)>>,
}

impl<'g> Index<'g> {
    fn new(graph: &'g TownGraph) -> Self {
        let names: Vec<&str> = graph.towns.keys().map(String::as_str).collect();
        let mut adjacency = vec![Vec::new(); names.len()];
        for road in graph.roads.values() {
            let (Ok(a), Ok(b)) = (
                names.binary_search(&road.source()),
                names.binary_search(&road.destination()),
            ) else {
                continue;
            };
            adjacency[a].push((b, road));
            if a != b {
                adjacency[b].push((a, road));
            }
        }
        for roads in &mut adjacency {
            roads.sort_by_key(|&(far, _)| far);
        }
        Self { names, adjacency }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.binary_search(&name).ok()
    }
}

pub(super) fn label_towns(graph: &TownGraph, source: &str) -> Option<PathLabels> {
    let index = Index::new(graph);
    let start = index.position(source)?;
    let n = index.names.len();

    let mut settled: BitVec = BitVec::repeat(false, n);
    let mut distance: Vec<Option<u64>> = vec![None; n];
    let mut labels: Vec<Option<PathLabel>> = vec![None; n];
    let mut frontier = vec![start];

    settled.set(start, true);
    distance[start] = Some(0);
    labels[start] = Some(PathLabel::origin(source));
    let mut num_settled = 1;

    while num_settled < n {
        let mut best: Option<Proposal> = None;
        frontier.retain(|&near| {
            let Some(base) = distance[near] else {
                return false;
            };
            let proposal = index.adjacency[near]
                .iter()
                .filter(|&&(far, _)| !settled[far])
                .map(|&(far, road)| Proposal {
                    total: base + u64::from(road.weight()),
                    far,
                    near,
                })
                .min();
            match proposal {
                Some(proposal) => {
                    if best.is_none_or(|best| proposal < best) {
                        best = Some(proposal);
                    }
                    true
                }
                None => false,
            }
        });
        let Some(Proposal { total, far, near }) = best else {
            break;
        };

        let Some(&(_, road)) = index.adjacency[near]
            .iter()
            .find(|&&(other, _)| other == far)
        else {
            break;
        };
        if distance[far].is_none_or(|known| total < known) {
            distance[far] = Some(total);
            labels[far] = Some(PathLabel::step(
                index.names[near],
                road.name(),
                index.names[far],
                road.weight(),
                total,
            ));
        }
        settled.set(far, true);
        num_settled += 1;
        frontier.push(far);
        trace!(
            town = index.names[far],
            via = road.name(),
            total,
            "settled town"
        );
    }

    Some(PathLabels::new(source, labels.into_iter().flatten()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::GraphMut, town::Town};

    fn graph_of(roads: &[(&str, &str, u32, &str)]) -> TownGraph {
        let mut graph = TownGraph::new();
        for &(a, b, weight, name) in roads {
            let (a, b) = (Town::new(a), Town::new(b));
            graph.add_vertex(&a).unwrap();
            graph.add_vertex(&b).unwrap();
            graph.add_edge(&a, &b, weight, name).unwrap();
        }
        graph
    }

    #[test]
    fn test_unknown_source() {
        let graph = graph_of(&[("A", "B", 1, "ab")]);
        assert_eq!(label_towns(&graph, "Z"), None);
    }

    #[test]
    fn test_isolated_source() {
        let mut graph = graph_of(&[("A", "B", 1, "ab")]);
        graph.add_vertex(&Town::new("C")).unwrap();
        let labels = label_towns(&graph, "C").unwrap();
        assert_eq!(labels.len(), 1);
        assert!(labels.get("C").unwrap().is_origin());
    }

    #[test]
    fn test_unreachable_towns_have_no_label() {
        let graph = graph_of(&[("A", "B", 1, "ab"), ("C", "D", 1, "cd")]);
        let labels = label_towns(&graph, "A").unwrap();
        assert!(labels.contains("B"));
        assert!(!labels.contains("C"));
        assert!(!labels.contains("D"));
    }

    #[test]
    fn test_cumulative_weights() {
        let graph = graph_of(&[
            ("A", "B", 4, "ab"),
            ("A", "C", 1, "ac"),
            ("C", "B", 1, "cb"),
            ("B", "D", 5, "bd"),
        ]);
        let labels = label_towns(&graph, "A").unwrap();
        assert_eq!(labels.total_weight_to("A"), Some(0));
        assert_eq!(labels.total_weight_to("C"), Some(1));
        assert_eq!(labels.total_weight_to("B"), Some(2));
        assert_eq!(labels.total_weight_to("D"), Some(7));
        let b = labels.get("B").unwrap();
        assert_eq!(b.predecessor(), Some("C"));
        assert_eq!(b.road(), Some("cb"));
        assert_eq!(b.step_weight(), 1);
    }

    #[test]
    fn test_equal_routes_prefer_lowest_predecessor() {
        // A-B-D and A-C-D both weigh 2.
        let graph = graph_of(&[
            ("A", "C", 1, "ac"),
            ("A", "B", 1, "ab"),
            ("C", "D", 1, "cd"),
            ("B", "D", 1, "bd"),
        ]);
        let labels = label_towns(&graph, "A").unwrap();
        assert_eq!(labels.get("D").unwrap().predecessor(), Some("B"));
    }

    #[test]
    fn test_self_loop_is_ignored() {
        let graph = graph_of(&[("A", "A", 1, "loop"), ("A", "B", 3, "ab")]);
        let labels = label_towns(&graph, "A").unwrap();
        assert!(labels.get("A").unwrap().is_origin());
        assert_eq!(labels.total_weight_to("B"), Some(3));
    }

    #[test]
    fn test_zero_weight_roads() {
        let graph = graph_of(&[("A", "B", 0, "ab"), ("B", "C", 0, "bc")]);
        let labels = label_towns(&graph, "A").unwrap();
        assert_eq!(labels.total_weight_to("C"), Some(0));
        assert_eq!(
            labels.route_to("C").unwrap().towns().collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }
}
