use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{town::Town, util::sort_pair};

/// Weight of a road used when none is given.
pub const DEFAULT_WEIGHT: u32 = 1;

/// An undirected, weighted, named edge between two towns.
///
/// Endpoints are recorded by town name.  Two roads are equal when they
/// connect the same unordered pair of towns, regardless of weight or name,
/// so a road also serves as the key for "is there a road between X and Y".
/// The endpoints are fixed once the road is created; weight and name may
/// change without affecting identity.
#[derive(Clone, Debug)]
pub struct Road {
    source: String,
    destination: String,
    weight: u32,
    name: String,
}

impl Road {
    pub fn new(source: &Town, destination: &Town, weight: u32, name: impl Into<String>) -> Self {
        Self::between(source.name(), destination.name(), weight, name)
    }

    /// Creates a road with the default weight of 1.
    pub fn unweighted(source: &Town, destination: &Town, name: impl Into<String>) -> Self {
        Self::new(source, destination, DEFAULT_WEIGHT, name)
    }

    pub(crate) fn between(
        source: impl Into<String>,
        destination: impl Into<String>,
        weight: u32,
        name: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            weight,
            name: name.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns true if `town` is either endpoint.
    pub fn contains(&self, town: &Town) -> bool {
        self.touches(town.name())
    }

    pub(crate) fn touches(&self, name: &str) -> bool {
        self.source == name || self.destination == name
    }

    /// Given one endpoint, returns the other.  Returns `None` if `name` is
    /// not an endpoint of this road.
    pub fn other_end(&self, name: &str) -> Option<&str> {
        if self.source == name {
            Some(self.destination.as_str())
        } else if self.destination == name {
            Some(self.source.as_str())
        } else {
            None
        }
    }

    /// Both endpoint names in nondescending order.
    pub fn ends(&self) -> (&str, &str) {
        sort_pair(self.source.as_str(), self.destination.as_str())
    }

    /// Orders roads by weight, ascending.  Not `Ord`: equality is keyed on
    /// the endpoints.
    pub fn cmp_by_weight(&self, other: &Road) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.ends() == other.ends()
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ends().hash(state);
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} connects towns: {} and {}",
            self.name, self.source, self.destination
        )
    }
}
