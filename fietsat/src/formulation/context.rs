use log::debug;

use super::BundleOwner;
use super::ClauseGroup;
use super::ConstraintFamily;
use super::CoverageRule;
use super::Formulation;
use super::FormulationOptions;
use crate::basic_types::Literal;
use crate::encoders::CardinalityEncoder;
use crate::encoders::EncodingError;
use crate::problem::DriverId;
use crate::problem::ExperienceLevel;
use crate::problem::Problem;
use crate::problem::RouteId;
use crate::variables::VariableKey;
use crate::variables::VariablePool;

/// Owns all state needed to formulate one [`Problem`]. A context is consumed by
/// [`FormulationContext::formulate`], so every formulation starts from an empty
/// [`VariablePool`].
#[derive(Debug)]
pub struct FormulationContext<'problem> {
    problem: &'problem Problem,
    options: FormulationOptions,
    encoder: Box<dyn CardinalityEncoder>,
    pool: VariablePool,
}

impl<'problem> FormulationContext<'problem> {
    pub fn new(problem: &'problem Problem, options: FormulationOptions) -> Self {
        FormulationContext {
            problem,
            options,
            encoder: options.encoding.encoder(),
            pool: VariablePool::default(),
        }
    }

    /// Builds the four clause groups, in the order of [`ConstraintFamily::ALL`].
    pub fn formulate(mut self) -> Result<Formulation, EncodingError> {
        let groups = vec![
            self.one_level_per_assignment()?,
            self.one_route_per_driver()?,
            self.one_driver_per_slot()?,
            self.experience_ceiling(),
        ];

        for group in &groups {
            debug!(
                "Constraint family '{}': {} clauses in {} bundles.",
                group.family(),
                group.num_clauses(),
                group.bundles().len()
            );
        }

        Ok(Formulation {
            pool: self.pool,
            groups,
        })
    }

    fn literal(&mut self, driver: DriverId, route: RouteId, level: ExperienceLevel) -> Literal {
        Literal::positive(self.pool.id(VariableKey::new(driver, route, level)))
    }

    fn one_level_per_assignment(&mut self) -> Result<ClauseGroup, EncodingError> {
        let mut group = ClauseGroup::new(ConstraintFamily::OneLevelPerAssignment);

        let problem = self.problem;
        for driver in problem.drivers() {
            for &route in &driver.routes {
                let literals = ExperienceLevel::descending()
                    .map(|level| self.literal(driver.id, route, level))
                    .collect::<Vec<_>>();

                let clauses = self
                    .encoder
                    .encode_at_most_k(&literals, 1, &mut self.pool)?;
                group.push(BundleOwner::Assignment(driver.id, route), clauses);
            }
        }

        Ok(group)
    }

    fn one_route_per_driver(&mut self) -> Result<ClauseGroup, EncodingError> {
        let mut group = ClauseGroup::new(ConstraintFamily::OneRoutePerDriver);

        let problem = self.problem;
        for driver in problem.drivers() {
            let literals = driver
                .routes
                .iter()
                .flat_map(|&route| ExperienceLevel::descending().map(move |level| (route, level)))
                .map(|(route, level)| self.literal(driver.id, route, level))
                .collect::<Vec<_>>();

            let clauses = self
                .encoder
                .encode_at_most_k(&literals, 1, &mut self.pool)?;
            group.push(BundleOwner::Driver(driver.id), clauses);
        }

        Ok(group)
    }

    fn one_driver_per_slot(&mut self) -> Result<ClauseGroup, EncodingError> {
        let mut group = ClauseGroup::new(ConstraintFamily::OneDriverPerSlot);

        let problem = self.problem;
        for route in problem.routes() {
            for level in ExperienceLevel::descending() {
                let literals = route
                    .drivers()
                    .iter()
                    .map(|&driver| self.literal(driver, route.id, level))
                    .collect::<Vec<_>>();

                let clauses = match self.options.coverage {
                    CoverageRule::Exactly => {
                        self.encoder
                            .encode_exactly_k(&literals, 1, &mut self.pool)?
                    }
                    CoverageRule::AtMost => {
                        self.encoder
                            .encode_at_most_k(&literals, 1, &mut self.pool)?
                    }
                };
                group.push(BundleOwner::Slot(route.id, level), clauses);
            }
        }

        Ok(group)
    }

    fn experience_ceiling(&mut self) -> ClauseGroup {
        let mut group = ClauseGroup::new(ConstraintFamily::ExperienceCeiling);

        let problem = self.problem;
        for driver in problem.drivers() {
            for &route in &driver.routes {
                for level in driver.experience.above() {
                    let literal = self.literal(driver.id, route, level);
                    group.push(
                        BundleOwner::Ceiling(driver.id, route, level),
                        vec![vec![!literal]],
                    );
                }
            }
        }

        group
    }
}
