use std::collections::BTreeMap;

use log::trace;

use crate::engine::Model;
use crate::problem::DriverId;
use crate::problem::ExperienceLevel;
use crate::problem::Problem;
use crate::problem::RouteId;
use crate::variables::VariablePool;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub driver: DriverId,
    pub level: ExperienceLevel,
}

/// The drivers assigned to every route, highest experience level first.
///
/// A solution only records what was decoded from a model; whether it respects the assignment
/// rules is checked separately by [`check_solution`](super::check_solution).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    assignments: BTreeMap<RouteId, Vec<Assignment>>,
}

impl Solution {
    /// Decodes the true named variables of `model`. Every route of `problem` is present in the
    /// result, possibly without assignments. Auxiliary variables are skipped.
    pub fn decode(problem: &Problem, pool: &VariablePool, model: &Model) -> Solution {
        let mut assignments = problem
            .routes()
            .map(|route| (route.id, vec![]))
            .collect::<BTreeMap<_, _>>();

        for variable in model.true_variables() {
            let Some(key) = pool.lookup(variable) else {
                continue;
            };

            trace!("{variable} decodes to {key:?}");
            assignments.entry(key.route).or_default().push(Assignment {
                driver: key.driver,
                level: key.level,
            });
        }

        for route_assignments in assignments.values_mut() {
            route_assignments.sort_by(|a, b| {
                b.level
                    .cmp(&a.level)
                    .then_with(|| a.driver.cmp(&b.driver))
            });
        }

        Solution { assignments }
    }

    /// The assignments of `route`, highest level first. Empty for unknown routes.
    pub fn assignments_of(&self, route: RouteId) -> &[Assignment] {
        self.assignments
            .get(&route)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All routes with their assignments, in ascending route order.
    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &[Assignment])> + '_ {
        self.assignments
            .iter()
            .map(|(&route, assignments)| (route, assignments.as_slice()))
    }

    pub fn num_assignments(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }

    /// Whether no driver is assigned to any route.
    pub fn is_empty(&self) -> bool {
        self.num_assignments() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Literal;
    use crate::variables::VariableKey;

    fn level(level: i64) -> ExperienceLevel {
        ExperienceLevel::new(level).unwrap()
    }

    fn problem() -> Problem {
        Problem::from_json(
            r#"[
                {"id": 1, "name": "Ana", "exp": 2, "routes": [10]},
                {"id": 2, "name": "Bo", "exp": 4, "routes": [10]}
            ]"#,
            r#"[
                {"id": 10, "start": "Delft", "end": "Leiden"},
                {"id": 20, "start": "Gouda", "end": "Delft"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn positive_named_literals_become_assignments() {
        let problem = problem();
        let mut pool = VariablePool::default();
        let low = pool.id(VariableKey::new(DriverId(1), RouteId(10), level(2)));
        let auxiliary = pool.new_auxiliary();
        let high = pool.id(VariableKey::new(DriverId(2), RouteId(10), level(4)));
        let unused = pool.id(VariableKey::new(DriverId(2), RouteId(10), level(1)));

        let model = Model::new(vec![
            Literal::positive(low),
            Literal::positive(auxiliary),
            Literal::positive(high),
            Literal::negative(unused),
        ]);

        let solution = Solution::decode(&problem, &pool, &model);

        assert_eq!(
            solution.assignments_of(RouteId(10)),
            &[
                Assignment {
                    driver: DriverId(2),
                    level: level(4)
                },
                Assignment {
                    driver: DriverId(1),
                    level: level(2)
                },
            ]
        );
        assert!(solution.assignments_of(RouteId(20)).is_empty());
        assert_eq!(solution.routes().count(), 2);
        assert_eq!(solution.num_assignments(), 2);
        assert!(!solution.is_empty());
    }

    #[test]
    fn model_without_named_variables_decodes_to_empty_routes() {
        let problem = problem();
        let mut pool = VariablePool::default();
        let auxiliary = pool.new_auxiliary();

        let solution =
            Solution::decode(&problem, &pool, &Model::new(vec![Literal::positive(auxiliary)]));

        assert!(solution.is_empty());
        assert_eq!(solution.num_assignments(), 0);
        assert_eq!(solution.routes().count(), 2);
    }
}
