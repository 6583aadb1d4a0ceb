use std::path::PathBuf;

use thiserror::Error;

use super::DriverId;
use super::RouteId;

#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a valid {kind} file, more details: {source}")]
    Json {
        path: PathBuf,
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("driver {driver} is eligible for route {route}, which does not exist")]
    UnknownRoute { driver: DriverId, route: RouteId },

    #[error("driver {0} is defined more than once")]
    DuplicateDriver(DriverId),

    #[error("route {0} is defined more than once")]
    DuplicateRoute(RouteId),

    #[error("driver {driver} has experience level {level}, expected a level between 1 and 4")]
    InvalidExperience { driver: DriverId, level: i64 },
}
