#![allow(dead_code)]

use town_graph::prelude::*;

/// The twelve roads of the eleven-town test network.
pub const ROADS: [(usize, usize, u32, &str); 12] = [
    (1, 2, 2, "Road_1"),
    (1, 3, 4, "Road_2"),
    (1, 5, 6, "Road_3"),
    (3, 7, 1, "Road_4"),
    (3, 8, 2, "Road_5"),
    (4, 8, 3, "Road_6"),
    (6, 9, 3, "Road_7"),
    (9, 10, 4, "Road_8"),
    (8, 10, 2, "Road_9"),
    (5, 10, 5, "Road_10"),
    (10, 11, 3, "Road_11"),
    (2, 11, 6, "Road_12"),
];

pub fn town(i: usize) -> Town {
    Town::new(format!("Town_{}", i))
}

/// Towns `Town_1` through `Town_11`, indexed from 1; slot 0 is unset.
pub fn towns() -> Vec<Town> {
    (0..12)
        .map(|i| if i == 0 { Town::default() } else { town(i) })
        .collect()
}

pub fn network() -> (TownGraph, Vec<Town>) {
    let towns = towns();
    let mut graph = TownGraph::new();
    for town in &towns[1..] {
        graph.add_vertex(town).unwrap();
    }
    for (a, b, weight, name) in ROADS {
        graph.add_edge(&towns[a], &towns[b], weight, name).unwrap();
    }
    (graph, towns)
}

pub fn network_manager() -> TownGraphManager {
    let mut manager = TownGraphManager::new();
    for i in 1..12 {
        manager.add_town(&format!("Town_{}", i)).unwrap();
    }
    for (a, b, weight, name) in ROADS {
        manager
            .add_road(&format!("Town_{}", a), &format!("Town_{}", b), weight, name)
            .unwrap();
    }
    manager
}

/// The network in the `name,weight;source;destination` file format.
pub fn roads_text() -> String {
    ROADS
        .iter()
        .map(|(a, b, weight, name)| format!("{},{};Town_{};Town_{}\n", name, weight, a, b))
        .collect()
}
