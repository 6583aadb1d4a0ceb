//! Hands a [`Formulation`] to a [`SatBackend`] in a single call.
mod sat_backend;
mod varisat_backend;

use log::info;
pub use sat_backend::*;
pub use varisat_backend::VarisatBackend;

use crate::formulation::Formulation;

/// Flattens the clause groups into one formula and solves it.
///
/// A formula with an empty clause is reported unsatisfiable without consulting the backend.
/// Unsatisfiability is a regular outcome, only failures of the backend itself are errors.
pub fn solve(
    formulation: &Formulation,
    backend: &mut impl SatBackend,
) -> Result<SatisfactionResult, BackendError> {
    if formulation.has_empty_clause() {
        info!("The formulation contains an empty clause.");
        return Ok(SatisfactionResult::Unsatisfiable);
    }

    for clause in formulation.clauses() {
        backend.add_clause(clause);
    }

    let result = backend.solve()?;
    info!(
        "The formulation is {}.",
        if result.is_satisfiable() {
            "satisfiable"
        } else {
            "unsatisfiable"
        }
    );

    Ok(result)
}
