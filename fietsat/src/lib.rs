//! # FietSAT
//! FietSAT assigns drivers to routes by formulating the assignment rules as a Boolean
//! satisfiability problem and handing it to a SAT solver.
//!
//! Every route has four experience levels which each need one driver. A driver may only be
//! assigned to a route they are eligible for, to at most one route, and never above their own
//! experience level.
//!
//! The pipeline consists of four steps:
//! 1. Load a [`problem::Problem`] from the drivers and routes files.
//! 2. [Formulate][formulation::formulate] it as four groups of clauses, minting variables for
//!    `(driver, route, level)` triples in a [`variables::VariablePool`].
//! 3. [Solve][engine::solve] the flattened formula with a [`engine::SatBackend`].
//! 4. [Decode][report::Solution::decode] the model back into assignments.
//!
//! ```rust
//! # use fietsat::formulation::FormulationOptions;
//! # use fietsat::problem::Problem;
//! # use fietsat::problem::RouteId;
//! let problem = Problem::from_json(
//!     r#"[
//!         {"id": 1, "name": "Ana", "exp": 4, "routes": [10]},
//!         {"id": 2, "name": "Bo", "exp": 3, "routes": [10]},
//!         {"id": 3, "name": "Cas", "exp": 2, "routes": [10]},
//!         {"id": 4, "name": "Dee", "exp": 1, "routes": [10]}
//!     ]"#,
//!     r#"[{"id": 10, "start": "Delft", "end": "Leiden"}]"#,
//! )?;
//!
//! let solution = fietsat::assign(&problem, FormulationOptions::default())?
//!     .expect("every level can be filled");
//! assert_eq!(solution.assignments_of(RouteId(10)).len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod basic_types;
pub mod dimacs;
pub mod encoders;
pub mod engine;
pub mod formulation;
pub mod problem;
pub mod report;
pub mod variables;

use thiserror::Error;

use crate::encoders::EncodingError;
use crate::engine::BackendError;
use crate::engine::SatisfactionResult;
use crate::engine::VarisatBackend;
use crate::formulation::FormulationOptions;
use crate::problem::Problem;
use crate::report::Solution;

#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("failed to formulate the problem, more details: {0}")]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Formulates, solves and decodes `problem` with the default [`VarisatBackend`].
///
/// Returns `Ok(None)` if no assignment satisfies the rules.
pub fn assign(
    problem: &Problem,
    options: FormulationOptions,
) -> Result<Option<Solution>, AssignmentError> {
    let formulation = formulation::formulate(problem, options)?;

    match engine::solve(&formulation, &mut VarisatBackend::default())? {
        SatisfactionResult::Satisfiable(model) => Ok(Some(Solution::decode(
            problem,
            formulation.pool(),
            &model,
        ))),
        SatisfactionResult::Unsatisfiable => Ok(None),
    }
}
