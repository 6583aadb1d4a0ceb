//! The domain model: drivers, routes and the eligibility relation between them.
//!
//! The relation is sourced from the drivers file only. Every [`Route`] carries the inverse index
//! (the drivers eligible for it), which is computed once when the [`Problem`] is built and never
//! changes afterwards.
mod error;
mod ids;
mod records;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::Path;

pub use error::ProblemError;
pub use ids::*;
use log::debug;
use log::warn;
pub use records::DriverRecord;
pub use records::RouteRecord;

#[derive(Clone, Debug)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub experience: ExperienceLevel,
    pub routes: Vec<RouteId>,
}

#[derive(Clone, Debug)]
pub struct Route {
    pub id: RouteId,
    pub start: String,
    pub end: String,
    drivers: Vec<DriverId>,
}

impl Route {
    /// The drivers which may be allocated to this route, in ascending ID order.
    pub fn drivers(&self) -> &[DriverId] {
        &self.drivers
    }
}

/// An immutable assignment problem. Drivers and routes are kept sorted by ID so that every
/// traversal, and therefore every formulation, is deterministic.
#[derive(Clone, Debug)]
pub struct Problem {
    drivers: BTreeMap<DriverId, Driver>,
    routes: BTreeMap<RouteId, Route>,
}

impl Problem {
    /// Reads the drivers and routes JSON files. The files are closed before this returns.
    pub fn read_files(
        drivers_path: impl AsRef<Path>,
        routes_path: impl AsRef<Path>,
    ) -> Result<Problem, ProblemError> {
        let drivers = records::read_records(drivers_path.as_ref(), "drivers")?;
        let routes = records::read_records(routes_path.as_ref(), "routes")?;

        Problem::new(drivers, routes)
    }

    /// Parses the JSON contents of a drivers and a routes file.
    pub fn from_json(drivers_json: &str, routes_json: &str) -> Result<Problem, ProblemError> {
        let drivers =
            records::parse_records(drivers_json.as_bytes(), Path::new("<drivers>"), "drivers")?;
        let routes =
            records::parse_records(routes_json.as_bytes(), Path::new("<routes>"), "routes")?;

        Problem::new(drivers, routes)
    }

    /// Validates the records and derives the drivers of every route.
    pub fn new(
        driver_records: Vec<DriverRecord>,
        route_records: Vec<RouteRecord>,
    ) -> Result<Problem, ProblemError> {
        let mut routes = BTreeMap::new();
        for record in route_records {
            match routes.entry(record.id) {
                Entry::Occupied(_) => return Err(ProblemError::DuplicateRoute(record.id)),
                Entry::Vacant(entry) => {
                    let _ = entry.insert(Route {
                        id: record.id,
                        start: record.start,
                        end: record.end,
                        drivers: vec![],
                    });
                }
            }
        }

        let mut drivers = BTreeMap::new();
        for record in driver_records {
            let experience =
                ExperienceLevel::new(record.exp).ok_or(ProblemError::InvalidExperience {
                    driver: record.id,
                    level: record.exp,
                })?;

            let mut eligible_routes = Vec::with_capacity(record.routes.len());
            for route in record.routes {
                if eligible_routes.contains(&route) {
                    warn!("Driver {} lists route {route} more than once.", record.id);
                    continue;
                }
                eligible_routes.push(route);
            }

            match drivers.entry(record.id) {
                Entry::Occupied(_) => return Err(ProblemError::DuplicateDriver(record.id)),
                Entry::Vacant(entry) => {
                    let _ = entry.insert(Driver {
                        id: record.id,
                        name: record.name,
                        experience,
                        routes: eligible_routes,
                    });
                }
            }
        }

        for driver in drivers.values() {
            for &route_id in &driver.routes {
                let route = routes
                    .get_mut(&route_id)
                    .ok_or(ProblemError::UnknownRoute {
                        driver: driver.id,
                        route: route_id,
                    })?;
                route.drivers.push(driver.id);
            }
        }

        debug!(
            "Loaded {} drivers and {} routes.",
            drivers.len(),
            routes.len()
        );

        Ok(Problem { drivers, routes })
    }

    pub fn num_drivers(&self) -> usize {
        self.drivers.len()
    }

    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// All drivers in ascending ID order.
    pub fn drivers(&self) -> impl Iterator<Item = &Driver> + '_ {
        self.drivers.values()
    }

    /// All routes in ascending ID order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> + '_ {
        self.routes.values()
    }

    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.get(&id)
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(&id)
    }

    /// The drivers which may be allocated to the given route. Empty for unknown routes.
    pub fn drivers_of(&self, route: RouteId) -> &[DriverId] {
        self.route(route).map(Route::drivers).unwrap_or_default()
    }

    /// The routes the given driver may be allocated to. Empty for unknown drivers.
    pub fn routes_of(&self, driver: DriverId) -> &[RouteId] {
        self.driver(driver)
            .map(|driver| driver.routes.as_slice())
            .unwrap_or_default()
    }

    pub fn experience(&self, driver: DriverId) -> Option<ExperienceLevel> {
        self.driver(driver).map(|driver| driver.experience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(id: i64, exp: i64, routes: &[i64]) -> DriverRecord {
        DriverRecord {
            id: DriverId(id),
            name: format!("driver {id}"),
            exp,
            routes: routes.iter().copied().map(RouteId).collect(),
        }
    }

    fn route(id: i64) -> RouteRecord {
        RouteRecord {
            id: RouteId(id),
            start: format!("start {id}"),
            end: format!("end {id}"),
        }
    }

    #[test]
    fn route_drivers_are_the_inverse_of_driver_routes() {
        let problem = Problem::new(
            vec![
                driver(1, 3, &[10, 20]),
                driver(2, 2, &[10]),
                driver(3, 4, &[]),
            ],
            vec![route(10), route(20), route(30)],
        )
        .expect("valid problem");

        assert_eq!(problem.drivers_of(RouteId(10)), &[DriverId(1), DriverId(2)]);
        assert_eq!(problem.drivers_of(RouteId(20)), &[DriverId(1)]);
        assert!(problem.drivers_of(RouteId(30)).is_empty());

        for route in problem.routes() {
            for &driver in route.drivers() {
                assert!(problem.routes_of(driver).contains(&route.id));
            }
        }
        for driver in problem.drivers() {
            for &route in &driver.routes {
                assert!(problem.drivers_of(route).contains(&driver.id));
            }
        }
    }

    #[test]
    fn unknown_route_is_rejected() {
        let result = Problem::new(vec![driver(1, 3, &[99])], vec![route(10)]);

        assert!(matches!(
            result,
            Err(ProblemError::UnknownRoute {
                driver: DriverId(1),
                route: RouteId(99)
            })
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let duplicate_route = Problem::new(vec![], vec![route(1), route(1)]);
        assert!(matches!(
            duplicate_route,
            Err(ProblemError::DuplicateRoute(RouteId(1)))
        ));

        let duplicate_driver =
            Problem::new(vec![driver(4, 1, &[]), driver(4, 2, &[])], vec![route(1)]);
        assert!(matches!(
            duplicate_driver,
            Err(ProblemError::DuplicateDriver(DriverId(4)))
        ));
    }

    #[test]
    fn experience_outside_range_is_rejected() {
        let result = Problem::new(vec![driver(1, 5, &[])], vec![]);

        assert!(matches!(
            result,
            Err(ProblemError::InvalidExperience {
                driver: DriverId(1),
                level: 5
            })
        ));
    }

    #[test]
    fn repeated_eligibility_is_collapsed() {
        let problem =
            Problem::new(vec![driver(1, 2, &[10, 10])], vec![route(10)]).expect("valid problem");

        assert_eq!(problem.routes_of(DriverId(1)), &[RouteId(10)]);
        assert_eq!(problem.drivers_of(RouteId(10)), &[DriverId(1)]);
    }

    #[test]
    fn json_input_ignores_route_driver_lists() {
        let problem = Problem::from_json(
            r#"[{"id": 1, "name": "Ana", "exp": 4, "routes": [5]}]"#,
            r#"[{"id": 5, "start": "Delft", "end": "Leiden", "drivers": [7, 8]}]"#,
        )
        .expect("valid json");

        assert_eq!(problem.num_drivers(), 1);
        assert_eq!(problem.drivers_of(RouteId(5)), &[DriverId(1)]);
        assert_eq!(problem.route(RouteId(5)).unwrap().start, "Delft");
        assert_eq!(problem.experience(DriverId(1)), ExperienceLevel::new(4));
    }

    #[test]
    fn negative_ids_are_accepted() {
        let problem = Problem::from_json(
            r#"[{"id": -3, "name": "Ana", "exp": 2, "routes": [-1]}]"#,
            r#"[{"id": -1, "start": "Delft", "end": "Leiden"}]"#,
        )
        .expect("valid json");

        assert_eq!(problem.drivers_of(RouteId(-1)), &[DriverId(-3)]);
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = Problem::from_json(r#"[{"id": 1}]"#, "[]");

        assert!(matches!(
            result,
            Err(ProblemError::Json {
                kind: "drivers",
                ..
            })
        ));
    }
}
