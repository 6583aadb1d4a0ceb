use std::fmt::Debug;

use thiserror::Error;

use super::PairwiseEncoder;
use super::SequentialCounterEncoder;
use crate::basic_types::Clause;
use crate::basic_types::Literal;
use crate::variables::VariablePool;

/// Translates cardinality constraints over literals into clauses.
///
/// Implementations may mint auxiliary variables through the [`VariablePool`]; those are the
/// variables which later decode to nothing.
pub trait CardinalityEncoder: Debug {
    /// Clauses enforcing that at most `k` of `literals` are true.
    fn encode_at_most_k(
        &self,
        literals: &[Literal],
        k: usize,
        pool: &mut VariablePool,
    ) -> Result<Vec<Clause>, EncodingError>;

    /// Clauses enforcing that at least `k` of `literals` are true.
    ///
    /// By default this is "at most `n - k` of the negated literals", except for the common cases
    /// which need no encoding at all. Asking for more than `n` gives the empty clause.
    fn encode_at_least_k(
        &self,
        literals: &[Literal],
        k: usize,
        pool: &mut VariablePool,
    ) -> Result<Vec<Clause>, EncodingError> {
        if k == 0 {
            return Ok(vec![]);
        }
        if k > literals.len() {
            return Ok(vec![vec![]]);
        }
        if k == 1 {
            return Ok(vec![literals.to_vec()]);
        }

        let negated = literals.iter().map(|&literal| !literal).collect::<Vec<_>>();
        self.encode_at_most_k(&negated, literals.len() - k, pool)
    }

    /// Clauses enforcing that exactly `k` of `literals` are true.
    fn encode_exactly_k(
        &self,
        literals: &[Literal],
        k: usize,
        pool: &mut VariablePool,
    ) -> Result<Vec<Clause>, EncodingError> {
        let mut clauses = self.encode_at_most_k(literals, k, pool)?;
        clauses.extend(self.encode_at_least_k(literals, k, pool)?);
        Ok(clauses)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    #[error("the {encoding} encoding cannot express a bound of {k} over {n} literals")]
    UnsupportedBound {
        encoding: CardinalityEncoding,
        k: usize,
        n: usize,
    },
}

/// The available [`CardinalityEncoder`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CardinalityEncoding {
    /// One binary clause per pair of literals, no auxiliary variables. Only supports `k <= 1`.
    Pairwise,
    /// The sequential counter of Sinz (2005), linear in size and valid for any `k`.
    #[default]
    SequentialCounter,
}

impl CardinalityEncoding {
    pub fn encoder(self) -> Box<dyn CardinalityEncoder> {
        match self {
            CardinalityEncoding::Pairwise => Box::new(PairwiseEncoder),
            CardinalityEncoding::SequentialCounter => Box::new(SequentialCounterEncoder),
        }
    }
}

impl std::fmt::Display for CardinalityEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardinalityEncoding::Pairwise => write!(f, "pairwise"),
            CardinalityEncoding::SequentialCounter => write!(f, "sequential counter"),
        }
    }
}
