//! The JSON records of the drivers and routes files, and the code reading them from disk.
//!
//! Both files hold a JSON array of objects. A driver object looks like
//! `{"id": 1, "name": "Ana", "exp": 3, "routes": [10, 11]}`, a route object like
//! `{"id": 10, "start": "Delft", "end": "Leiden"}`. Fields not listed here are ignored; in
//! particular a `drivers` field on a route is never read since that list is derived.
use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::DriverId;
use super::ProblemError;
use super::RouteId;

#[derive(Clone, Debug, Deserialize)]
pub struct DriverRecord {
    pub id: DriverId,
    pub name: String,
    /// Validated into an [`ExperienceLevel`](super::ExperienceLevel) when the problem is built.
    pub exp: i64,
    pub routes: Vec<RouteId>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RouteRecord {
    pub id: RouteId,
    pub start: String,
    pub end: String,
}

pub(crate) fn read_records<T: DeserializeOwned>(
    path: &Path,
    kind: &'static str,
) -> Result<Vec<T>, ProblemError> {
    let file = File::open(path).map_err(|source| ProblemError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_records(BufReader::new(file), path, kind)
}

pub(crate) fn parse_records<T: DeserializeOwned>(
    source: impl Read,
    path: &Path,
    kind: &'static str,
) -> Result<Vec<T>, ProblemError> {
    serde_json::from_reader(source).map_err(|source| ProblemError::Json {
        path: path.to_path_buf(),
        kind,
        source,
    })
}
