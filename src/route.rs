use std::{fmt, iter::once};

/// One road traversed on a route.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathStep {
    from: String,
    road: String,
    to: String,
    weight: u32,
}

impl PathStep {
    pub fn new(
        from: impl Into<String>,
        road: impl Into<String>,
        to: impl Into<String>,
        weight: u32,
    ) -> Self {
        Self {
            from: from.into(),
            road: road.into(),
            to: to.into(),
            weight,
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn road(&self) -> &str {
        &self.road
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// Renders as `"<from> via <road> to <to> <weight> mi"`.
impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} to {} {} mi",
            self.from, self.road, self.to, self.weight
        )
    }
}

/// A route through a town graph, represented as a starting town and the
/// sequence of steps taken from it.  Each step starts where the previous one
/// ended.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    start: String,
    steps: Vec<PathStep>,
}

impl Route {
    /// Creates an empty route starting (and ending) at `start`.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            steps: Vec::new(),
        }
    }

    pub fn from_steps(start: impl Into<String>, steps: impl IntoIterator<Item = PathStep>) -> Self {
        let mut route = Self::new(start);
        route.extend(steps);
        route
    }

    /// Returns the first town on the route.
    pub fn first_town(&self) -> &str {
        &self.start
    }

    /// Returns the last town on the route.
    pub fn last_town(&self) -> &str {
        self.steps.last().map_or(self.start.as_str(), |step| step.to())
    }

    /// Returns an iterator over the steps in the route.
    pub fn steps(&self) -> impl ExactSizeIterator<Item = &PathStep> + '_ {
        self.steps.iter()
    }

    /// Returns an iterator over the towns visited, starting town included.
    pub fn towns(&self) -> impl Iterator<Item = &str> + '_ {
        once(self.start.as_str()).chain(self.steps.iter().map(PathStep::to))
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the route has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of the step weights.
    pub fn total_weight(&self) -> u64 {
        self.steps.iter().map(|step| u64::from(step.weight)).sum()
    }

    /// Appends a step.  Panics if the step does not start at the current
    /// last town.
    pub fn add_step(&mut self, step: PathStep) {
        assert_eq!(
            step.from(),
            self.last_town(),
            "Step does not continue the route"
        );
        self.steps.push(step);
    }

    /// Appends all steps of `other`.  Panics if `other` does not start at
    /// the current last town.
    pub fn extend_with(&mut self, other: &Route) {
        assert_eq!(other.first_town(), self.last_town());
        self.extend(other.steps().cloned());
    }

    /// Renders each step with its `Display` form, in order.
    pub fn descriptions(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }
}

impl Extend<PathStep> for Route {
    fn extend<T: IntoIterator<Item = PathStep>>(&mut self, iter: T) {
        for step in iter {
            self.add_step(step);
        }
    }
}

/// One step per line.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
