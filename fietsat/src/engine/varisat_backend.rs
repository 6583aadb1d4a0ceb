use std::fmt::Debug;
use std::fmt::Formatter;
use std::num::NonZeroI32;

use log::debug;
use varisat::ExtendFormula;
use varisat::Lit;

use super::BackendError;
use super::Model;
use super::SatBackend;
use super::SatisfactionResult;
use crate::basic_types::Literal;

/// Delegates to the [varisat](https://docs.rs/varisat) CDCL solver.
pub struct VarisatBackend {
    solver: varisat::Solver<'static>,
    num_clauses: usize,
}

impl Default for VarisatBackend {
    fn default() -> Self {
        VarisatBackend {
            solver: varisat::Solver::new(),
            num_clauses: 0,
        }
    }
}

impl Debug for VarisatBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VarisatBackend")
            .field("num_clauses", &self.num_clauses)
            .finish_non_exhaustive()
    }
}

impl SatBackend for VarisatBackend {
    fn add_clause(&mut self, clause: &[Literal]) {
        let lits = clause
            .iter()
            .map(|literal| Lit::from_dimacs(literal.to_dimacs().get() as isize))
            .collect::<Vec<_>>();

        self.solver.add_clause(&lits);
        self.num_clauses += 1;
    }

    fn solve(&mut self) -> Result<SatisfactionResult, BackendError> {
        debug!("Handing {} clauses to varisat.", self.num_clauses);

        let satisfiable = self
            .solver
            .solve()
            .map_err(|error| BackendError::Failed(format!("{error:?}")))?;

        if !satisfiable {
            return Ok(SatisfactionResult::Unsatisfiable);
        }

        let lits = self.solver.model().ok_or_else(|| {
            BackendError::Failed("varisat reported satisfiable without a model".to_owned())
        })?;

        let literals = lits
            .into_iter()
            .filter_map(|lit| {
                i32::try_from(lit.to_dimacs())
                    .ok()
                    .and_then(NonZeroI32::new)
                    .map(Literal::from_dimacs)
            })
            .collect();

        Ok(SatisfactionResult::Satisfiable(Model::new(literals)))
    }
}
