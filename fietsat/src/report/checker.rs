use thiserror::Error;

use super::Solution;
use crate::basic_types::HashSet;
use crate::formulation::CoverageRule;
use crate::problem::DriverId;
use crate::problem::ExperienceLevel;
use crate::problem::Problem;
use crate::problem::RouteId;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolutionViolation {
    #[error("driver {0} does not exist")]
    UnknownDriver(DriverId),

    #[error("driver {driver} is not eligible for route {route}")]
    NotEligible { driver: DriverId, route: RouteId },

    #[error("driver {driver} is assigned to route {route} at level {level}, above their experience")]
    AboveExperience {
        driver: DriverId,
        route: RouteId,
        level: ExperienceLevel,
    },

    #[error("driver {0} is assigned more than once")]
    DriverAssignedTwice(DriverId),

    #[error("level {level} of route {route} is filled more than once")]
    SlotFilledTwice {
        route: RouteId,
        level: ExperienceLevel,
    },

    #[error("level {level} of route {route} is not filled")]
    SlotUnfilled {
        route: RouteId,
        level: ExperienceLevel,
    },
}

/// Checks a decoded solution against the assignment rules, returning the first violation.
pub fn check_solution(
    problem: &Problem,
    solution: &Solution,
    coverage: CoverageRule,
) -> Result<(), SolutionViolation> {
    let mut assigned_drivers: HashSet<DriverId> = HashSet::default();

    for (route, assignments) in solution.routes() {
        let mut filled_levels: HashSet<ExperienceLevel> = HashSet::default();

        for assignment in assignments {
            let driver = problem
                .driver(assignment.driver)
                .ok_or(SolutionViolation::UnknownDriver(assignment.driver))?;

            if !driver.routes.contains(&route) {
                return Err(SolutionViolation::NotEligible {
                    driver: driver.id,
                    route,
                });
            }

            if assignment.level > driver.experience {
                return Err(SolutionViolation::AboveExperience {
                    driver: driver.id,
                    route,
                    level: assignment.level,
                });
            }

            if !assigned_drivers.insert(driver.id) {
                return Err(SolutionViolation::DriverAssignedTwice(driver.id));
            }

            if !filled_levels.insert(assignment.level) {
                return Err(SolutionViolation::SlotFilledTwice {
                    route,
                    level: assignment.level,
                });
            }
        }

        if coverage == CoverageRule::Exactly {
            if let Some(level) =
                ExperienceLevel::descending().find(|level| !filled_levels.contains(level))
            {
                return Err(SolutionViolation::SlotUnfilled { route, level });
            }
        }
    }

    Ok(())
}
