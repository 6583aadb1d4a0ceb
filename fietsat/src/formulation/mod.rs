//! Turns a [`Problem`](crate::problem::Problem) into CNF.
//!
//! The formulation consists of four [`ClauseGroup`]s, one per [`ConstraintFamily`]. Each group
//! is a list of bundles, one per entity the clauses were generated for. The grouping is only
//! kept for traceability; the solver receives all clauses as one flat formula.
mod clause_group;
mod context;
mod options;

pub use clause_group::*;
pub use context::FormulationContext;
use log::info;
pub use options::*;

use crate::basic_types::Clause;
use crate::encoders::EncodingError;
use crate::problem::Problem;
use crate::variables::VariablePool;

/// Formulates `problem` in a fresh [`FormulationContext`].
pub fn formulate(
    problem: &Problem,
    options: FormulationOptions,
) -> Result<Formulation, EncodingError> {
    let formulation = FormulationContext::new(problem, options).formulate()?;

    info!(
        "Formulated {} clauses over {} variables ({} named).",
        formulation.num_clauses(),
        formulation.pool().num_variables(),
        formulation.pool().num_named_variables()
    );

    Ok(formulation)
}

/// The clause groups of a problem together with the [`VariablePool`] that numbered them.
#[derive(Clone, Debug)]
pub struct Formulation {
    pool: VariablePool,
    groups: Vec<ClauseGroup>,
}

impl Formulation {
    pub fn pool(&self) -> &VariablePool {
        &self.pool
    }

    pub fn groups(&self) -> &[ClauseGroup] {
        &self.groups
    }

    pub fn group(&self, family: ConstraintFamily) -> Option<&ClauseGroup> {
        self.groups.iter().find(|group| group.family() == family)
    }

    /// All clauses of all groups, flattened.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.groups.iter().flat_map(ClauseGroup::clauses)
    }

    pub fn num_clauses(&self) -> usize {
        self.groups.iter().map(ClauseGroup::num_clauses).sum()
    }

    pub fn has_empty_clause(&self) -> bool {
        self.clauses().any(|clause| clause.is_empty())
    }
}
