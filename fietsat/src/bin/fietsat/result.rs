use fietsat::encoders::EncodingError;
use fietsat::engine::BackendError;
use fietsat::problem::ProblemError;
use fietsat::report::SolutionViolation;
use thiserror::Error;

pub(crate) type FietsatResult<T> = Result<T, FietsatError>;

#[derive(Error, Debug)]
pub(crate) enum FietsatError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid input, more details: {0}")]
    Problem(#[from] ProblemError),
    #[error("Failed to formulate the problem, more details: {0}")]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("The decoded solution breaks the assignment rules: {0}")]
    InvalidSolution(#[from] SolutionViolation),
}
