//! A facade over [`TownGraph`] that works with town and road names.

use std::{io::BufRead, path::Path};

use crate::{
    error::GraphError,
    graph::{Graph, GraphMut, TownGraph},
    loader::{self, LoadError},
    town::Town,
};

/// Name-keyed access to a town graph.  Each method builds the town handles
/// it needs and delegates to the underlying graph.
#[derive(Clone, Debug, Default)]
pub struct TownGraphManager {
    graph: TownGraph,
}

impl TownGraphManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &TownGraph {
        &self.graph
    }

    /// Adds a road, adding either town first if it is missing.  Returns true
    /// if the road is new.
    pub fn add_road(
        &mut self,
        town1: &str,
        town2: &str,
        weight: u32,
        road_name: &str,
    ) -> Result<bool, GraphError> {
        let source = Town::new(town1);
        let destination = Town::new(town2);
        self.graph.add_vertex(&source)?;
        self.graph.add_vertex(&destination)?;
        Ok(self
            .graph
            .add_edge(&source, &destination, weight, road_name)?
            .is_some())
    }

    /// Name of the road connecting two towns.
    pub fn get_road(&self, town1: &str, town2: &str) -> Option<&str> {
        self.graph
            .get_edge(&Town::new(town1), &Town::new(town2))
            .map(|road| road.name())
    }

    pub fn add_town(&mut self, name: &str) -> Result<bool, GraphError> {
        self.graph.add_vertex(&Town::new(name))
    }

    pub fn get_town(&self, name: &str) -> Option<&Town> {
        self.graph.get_town(name)
    }

    pub fn contains_town(&self, name: &str) -> bool {
        self.graph.contains_vertex(&Town::new(name))
    }

    pub fn contains_road_connection(&self, town1: &str, town2: &str) -> bool {
        self.graph
            .contains_edge(&Town::new(town1), &Town::new(town2))
    }

    /// All road names, sorted.
    pub fn all_roads(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .graph
            .edge_set()
            .map(|road| road.name().to_owned())
            .collect();
        names.sort();
        names
    }

    /// All town names, sorted.
    pub fn all_towns(&self) -> Vec<String> {
        self.graph.town_names().map(str::to_owned).collect()
    }

    /// Removes the road connecting two towns if it is named `road_name`.
    /// Returns true if a road was removed.
    pub fn delete_road_connection(&mut self, town1: &str, town2: &str, road_name: &str) -> bool {
        self.graph
            .remove_edge(
                &Town::new(town1),
                &Town::new(town2),
                None,
                Some(road_name),
            )
            .is_some()
    }

    pub fn delete_town(&mut self, name: &str) -> bool {
        self.graph.remove_vertex(&Town::new(name))
    }

    /// Shortest path between two towns as step descriptions.  Empty when
    /// either town is unknown or no path exists.
    pub fn get_path(&self, town1: &str, town2: &str) -> Vec<String> {
        self.graph
            .shortest_path(&Town::new(town1), &Town::new(town2))
            .unwrap_or_default()
    }

    /// Loads roads from a file.  See [`loader`] for the format.
    pub fn populate_town_graph(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        loader::load_roads_from_path(&mut self.graph, path)
    }

    pub fn populate_from_reader(&mut self, reader: impl BufRead) -> Result<usize, LoadError> {
        loader::load_roads(&mut self.graph, reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_road_adds_towns() {
        let mut manager = TownGraphManager::new();
        assert_eq!(manager.add_road("A", "B", 3, "ab"), Ok(true));
        assert_eq!(manager.add_road("B", "A", 4, "ba"), Ok(false));
        assert!(manager.contains_town("A"));
        assert!(manager.contains_town("B"));
        assert_eq!(manager.get_road("B", "A"), Some("ab"));
    }

    #[test]
    fn test_empty_names() {
        let mut manager = TownGraphManager::new();
        assert_eq!(manager.add_town(""), Err(GraphError::NullArgument));
        assert_eq!(
            manager.add_road("A", "", 1, "r"),
            Err(GraphError::NullArgument)
        );
        assert!(manager.all_roads().is_empty());
    }

    #[test]
    fn test_delete_road_requires_matching_name() {
        let mut manager = TownGraphManager::new();
        manager.add_road("A", "B", 3, "ab").unwrap();
        assert!(!manager.delete_road_connection("A", "B", "other"));
        assert!(manager.contains_road_connection("A", "B"));
        assert!(manager.delete_road_connection("B", "A", "ab"));
        assert!(!manager.contains_road_connection("A", "B"));
        assert!(manager.contains_town("A"));
    }

    #[test]
    fn test_get_town_has_neighbors() {
        let mut manager = TownGraphManager::new();
        manager.add_road("A", "B", 3, "ab").unwrap();
        let town = manager.get_town("A").unwrap();
        assert!(town.has_neighbor("B"));
        assert_eq!(manager.get_town("Z"), None);
    }
}
