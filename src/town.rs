use std::fmt;

use derivative::Derivative;

/// A named vertex in a [`crate::TownGraph`].
///
/// A town's identity is its name: equality, hashing and ordering ignore the
/// neighbor list.  Neighbors are recorded by name in insertion order and
/// refer to other towns in the same graph.  The graph keeps neighbor lists
/// in sync with its roads; a `Town` held by a caller is a handle used to
/// name a vertex.
///
/// The default town has an empty name and acts as an unset handle; graph
/// mutations reject it with [`crate::GraphError::NullArgument`].
#[derive(Derivative, Default)]
#[derivative(
    Clone,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord
)]
pub struct Town {
    name: String,
    #[derivative(
        PartialEq = "ignore",
        Hash = "ignore",
        PartialOrd = "ignore",
        Ord = "ignore"
    )]
    neighbors: Vec<String>,
}

impl Town {
    /// Creates a town with no neighbors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighbors: Vec::new(),
        }
    }

    /// Creates a copy of `other` that owns its own neighbor list.
    pub fn copy_of(other: &Town) -> Self {
        other.clone()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns true if this is the unset handle.
    pub fn is_unset(&self) -> bool {
        self.name.is_empty()
    }

    /// Gets the names of the neighboring towns in insertion order.
    pub fn neighbors(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.neighbors.iter().map(String::as_str)
    }

    /// Replaces the neighbor list.  Duplicate names are dropped, keeping the
    /// first occurrence.
    pub fn set_neighbors<I, S>(&mut self, neighbors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.neighbors.clear();
        for name in neighbors {
            self.insert_neighbor(name.into());
        }
    }

    pub fn num_neighbors(&self) -> usize {
        self.neighbors.len()
    }

    pub fn has_neighbor(&self, name: &str) -> bool {
        self.neighbors.iter().any(|n| n == name)
    }

    /// Adds `neighbor` to the neighbor list.  Returns true if it was not
    /// already present.
    pub fn add_neighbor(&mut self, neighbor: &Town) -> bool {
        self.insert_neighbor(neighbor.name.clone())
    }

    /// Removes `neighbor` from the neighbor list.  Returns true if it was
    /// present.
    pub fn remove_neighbor(&mut self, neighbor: &Town) -> bool {
        self.remove_neighbor_named(&neighbor.name)
    }

    pub(crate) fn insert_neighbor(&mut self, name: String) -> bool {
        if self.has_neighbor(&name) {
            false
        } else {
            self.neighbors.push(name);
            true
        }
    }

    pub(crate) fn remove_neighbor_named(&mut self, name: &str) -> bool {
        match self.neighbors.iter().position(|n| n == name) {
            Some(index) => {
                self.neighbors.remove(index);
                true
            }
            None => false,
        }
    }
}

impl From<&str> for Town {
    fn from(name: &str) -> Self {
        Town::new(name)
    }
}

impl From<String> for Town {
    fn from(name: String) -> Self {
        Town::new(name)
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.neighbors.is_empty() {
            write!(f, "{} with no neighbors", self.name)
        } else {
            write!(f, "{} with neighbors {}", self.name, self.neighbors.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_new_town() {
        let town = Town::new("Town_1");
        assert_eq!(town.name(), "Town_1");
        assert_eq!(town.num_neighbors(), 0);
        assert!(!town.is_unset());
        assert!(Town::default().is_unset());
    }

    #[test]
    fn test_copy_does_not_alias_neighbors() {
        let mut town1 = Town::new("Town_1");
        let town2 = Town::new("Town_2");
        let town3 = Town::new("Town_3");
        town1.add_neighbor(&town2);

        let mut copy = Town::copy_of(&town1);
        assert_eq!(copy, town1);
        assert!(copy.has_neighbor("Town_2"));

        copy.add_neighbor(&town3);
        assert!(copy.has_neighbor("Town_3"));
        assert!(!town1.has_neighbor("Town_3"));
    }

    #[test]
    fn test_setters() {
        let mut town = Town::new("Town_1");
        town.set_name("Town_2");
        town.set_neighbors(["Town_3", "Town_4", "Town_3"]);
        assert_eq!(town.name(), "Town_2");
        assert_eq!(town.neighbors().collect::<Vec<_>>(), vec!["Town_3", "Town_4"]);
    }

    #[test]
    fn test_add_and_remove_neighbor() {
        let mut town1 = Town::new("Town_1");
        let town2 = Town::new("Town_2");
        assert!(town1.add_neighbor(&town2));
        assert!(!town1.add_neighbor(&town2));
        assert!(town1.remove_neighbor(&town2));
        assert!(!town1.remove_neighbor(&town2));
    }

    #[test]
    fn test_identity_is_name() {
        let mut a = Town::new("Town_1");
        a.add_neighbor(&Town::new("Town_9"));
        let b = Town::new("Town_1");
        let c = Town::new("Town_2");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert_eq!(HashSet::from([a, b]).len(), 1);
    }

    #[test]
    fn test_display() {
        let mut town = Town::new("Town_1");
        assert_eq!(town.to_string(), "Town_1 with no neighbors");
        town.add_neighbor(&Town::new("Town_3"));
        town.add_neighbor(&Town::new("Town_2"));
        assert_eq!(town.to_string(), "Town_1 with neighbors Town_3, Town_2");
    }
}
