//! Bulk loading of roads from delimited text.
//!
//! One road per line, in either of two shapes:
//!
//! ```text
//! Road_1;2;Town_1;Town_2
//! Road_1,2;Town_1;Town_2
//! ```
//!
//! Fields are trimmed and blank lines are skipped.  Loading stops at the
//! first malformed line; roads added from earlier lines are kept.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseIntError,
    path::Path,
};

use crate::{
    error::GraphError,
    graph::GraphMut,
    road::Road,
    town::Town,
    tracing_support::{debug, info_span, warn},
};

/// Errors that can occur while loading roads.  Line numbers start at 1.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line}: expected 3 or 4 fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("Line {line}: road name and weight must be separated by ','")]
    MissingWeight { line: usize },
    #[error("Line {line}: invalid weight {value:?}")]
    InvalidWeight {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Line {line}: empty {field} field")]
    EmptyField { line: usize, field: &'static str },
    #[error("Line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

impl LoadError {
    /// The line the error was found on, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Io(_) => None,
            LoadError::FieldCount { line, .. }
            | LoadError::MissingWeight { line }
            | LoadError::InvalidWeight { line, .. }
            | LoadError::EmptyField { line, .. }
            | LoadError::Graph { line, .. } => Some(*line),
        }
    }
}

/// One parsed line of road data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadRecord {
    pub name: String,
    pub weight: u32,
    pub source: String,
    pub destination: String,
}

fn non_empty(value: &str, line: usize, field: &'static str) -> Result<String, LoadError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LoadError::EmptyField { line, field });
    }
    Ok(value.to_owned())
}

/// Parses one line.  Returns `Ok(None)` for a blank line.
pub fn parse_road_line(text: &str, line: usize) -> Result<Option<RoadRecord>, LoadError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let fields: Vec<&str> = text.split(';').collect();
    let (name, weight, source, destination) = match fields[..] {
        [name, weight, source, destination] => (name, weight, source, destination),
        [head, source, destination] => {
            let Some((name, weight)) = head.split_once(',') else {
                return Err(LoadError::MissingWeight { line });
            };
            (name, weight, source, destination)
        }
        _ => {
            return Err(LoadError::FieldCount {
                line,
                found: fields.len(),
            });
        }
    };
    let name = non_empty(name, line, "road name")?;
    let weight_text = non_empty(weight, line, "weight")?;
    let weight = weight_text
        .parse()
        .map_err(|source| LoadError::InvalidWeight {
            line,
            value: weight_text.clone(),
            source,
        })?;
    Ok(Some(RoadRecord {
        name,
        weight,
        source: non_empty(source, line, "source town")?,
        destination: non_empty(destination, line, "destination town")?,
    }))
}

/// Adds both towns of `record` (if missing) and then the road.  Returns
/// true if the road was new.
pub fn apply_record<G>(graph: &mut G, record: &RoadRecord) -> Result<bool, GraphError>
where
    G: GraphMut<Vertex = Town, Edge = Road>,
{
    let source = Town::new(record.source.as_str());
    let destination = Town::new(record.destination.as_str());
    graph.add_vertex(&source)?;
    graph.add_vertex(&destination)?;
    let added = graph.add_edge(&source, &destination, record.weight, &record.name)?;
    Ok(added.is_some())
}

/// Loads every line of `reader` into `graph`.  Returns the number of roads
/// newly added; lines naming an existing connection are accepted but do not
/// count.
pub fn load_roads<G, R>(graph: &mut G, reader: R) -> Result<usize, LoadError>
where
    G: GraphMut<Vertex = Town, Edge = Road>,
    R: BufRead,
{
    let _span = info_span!("load_roads").entered();
    let mut added = 0;
    for (index, text) in reader.lines().enumerate() {
        let line = index + 1;
        let text = text?;
        let record = match parse_road_line(&text, line) {
            Ok(Some(record)) => record,
            Ok(None) => continue,
            Err(err) => {
                warn!(line, error = %err, "aborting road load");
                return Err(err);
            }
        };
        if apply_record(graph, &record).map_err(|source| LoadError::Graph { line, source })? {
            added += 1;
        } else {
            debug!(line, road = record.name.as_str(), "duplicate connection");
        }
    }
    debug!(added, "loaded roads");
    Ok(added)
}

/// Opens `path` and loads it with [`load_roads`].
pub fn load_roads_from_path<G>(graph: &mut G, path: impl AsRef<Path>) -> Result<usize, LoadError>
where
    G: GraphMut<Vertex = Town, Edge = Road>,
{
    let file = File::open(path)?;
    load_roads(graph, BufReader::new(file))
}
