//! The label table produced by one shortest-path run.
//!
//! Each reached town carries one [`PathLabel`]: the road it was reached by,
//! the town it was reached from, the weight of that last step, and the
//! cumulative weight from the source.  Following predecessors back from any
//! label ends at the source's origin label.

use std::{collections::BTreeMap, fmt};

use crate::route::{PathStep, Route};

/// Road name shown for the source's origin label.
pub const NO_ROAD: &str = "NONE";

/// The best-known step into one town.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathLabel {
    town: String,
    predecessor: Option<String>,
    road: Option<String>,
    step_weight: u32,
    total_weight: u64,
}

impl PathLabel {
    /// The zero-cost label of the source town.
    pub fn origin(town: impl Into<String>) -> Self {
        Self {
            town: town.into(),
            predecessor: None,
            road: None,
            step_weight: 0,
            total_weight: 0,
        }
    }

    /// A label reaching `town` from `predecessor` over `road`.
    pub fn step(
        predecessor: impl Into<String>,
        road: impl Into<String>,
        town: impl Into<String>,
        step_weight: u32,
        total_weight: u64,
    ) -> Self {
        Self {
            town: town.into(),
            predecessor: Some(predecessor.into()),
            road: Some(road.into()),
            step_weight,
            total_weight,
        }
    }

    pub fn town(&self) -> &str {
        &self.town
    }

    pub fn predecessor(&self) -> Option<&str> {
        self.predecessor.as_deref()
    }

    pub fn road(&self) -> Option<&str> {
        self.road.as_deref()
    }

    pub fn step_weight(&self) -> u32 {
        self.step_weight
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn is_origin(&self) -> bool {
        self.predecessor.is_none()
    }

    /// The route step this label records, or `None` for the origin label.
    pub fn to_step(&self) -> Option<PathStep> {
        let predecessor = self.predecessor.as_deref()?;
        let road = self.road.as_deref().unwrap_or(NO_ROAD);
        Some(PathStep::new(
            predecessor,
            road,
            self.town.as_str(),
            self.step_weight,
        ))
    }
}

impl fmt::Display for PathLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} to {} {} mi",
            self.predecessor.as_deref().unwrap_or(self.town.as_str()),
            self.road.as_deref().unwrap_or(NO_ROAD),
            self.town,
            self.step_weight
        )
    }
}

/// Labels for every town reached from one source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathLabels {
    source: String,
    labels: BTreeMap<String, PathLabel>,
}

impl PathLabels {
    pub(crate) fn new(source: impl Into<String>, labels: impl IntoIterator<Item = PathLabel>) -> Self {
        Self {
            source: source.into(),
            labels: labels
                .into_iter()
                .map(|label| (label.town.clone(), label))
                .collect(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, town: &str) -> Option<&PathLabel> {
        self.labels.get(town)
    }

    pub fn contains(&self, town: &str) -> bool {
        self.labels.contains_key(town)
    }

    /// Number of towns reached, source included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over labels ordered by town name.
    pub fn iter(&self) -> impl Iterator<Item = &PathLabel> + '_ {
        self.labels.values()
    }

    pub fn total_weight_to(&self, town: &str) -> Option<u64> {
        self.get(town).map(PathLabel::total_weight)
    }

    /// Rebuilds the route from the source to `destination` by following
    /// predecessors back from the destination's label.  Returns `None` if
    /// the destination was not reached.
    pub fn route_to(&self, destination: &str) -> Option<Route> {
        let mut label = self.get(destination)?;
        let mut steps = Vec::new();
        while let Some(step) = label.to_step() {
            if steps.len() >= self.labels.len() {
                return None;
            }
            label = self.get(step.from())?;
            steps.push(step);
        }
        debug_assert_eq!(label.town(), self.source);
        steps.reverse();
        Some(Route::from_steps(self.source.clone(), steps))
    }
}
