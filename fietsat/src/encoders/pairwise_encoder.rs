use super::CardinalityEncoder;
use super::CardinalityEncoding;
use super::EncodingError;
use crate::basic_types::Clause;
use crate::basic_types::Literal;
use crate::variables::VariablePool;

/// The naive at-most-one encoding: for every pair of literals, at least one of them is false.
///
/// Produces `n * (n - 1) / 2` binary clauses and never introduces auxiliary variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseEncoder;

impl CardinalityEncoder for PairwiseEncoder {
    fn encode_at_most_k(
        &self,
        literals: &[Literal],
        k: usize,
        _pool: &mut VariablePool,
    ) -> Result<Vec<Clause>, EncodingError> {
        if k >= literals.len() {
            return Ok(vec![]);
        }

        match k {
            0 => Ok(literals.iter().map(|&literal| vec![!literal]).collect()),
            1 => Ok(literals
                .iter()
                .enumerate()
                .flat_map(|(index, &first)| {
                    literals[index + 1..]
                        .iter()
                        .map(move |&second| vec![!first, !second])
                })
                .collect()),
            _ => Err(EncodingError::UnsupportedBound {
                encoding: CardinalityEncoding::Pairwise,
                k,
                n: literals.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::test_helper::assert_encodes;
    use crate::encoders::test_helper::literals;

    #[test]
    fn at_most_one_forbids_every_pair() {
        let mut pool = VariablePool::default();
        let literals = literals(&mut pool, 4);

        let clauses = PairwiseEncoder
            .encode_at_most_k(&literals, 1, &mut pool)
            .expect("supported bound");

        assert_eq!(clauses.len(), 6);
        assert_eq!(pool.num_variables(), 4);
        assert_encodes(&clauses, &literals, &pool, |count| count <= 1);
    }

    #[test]
    fn exactly_one_requires_a_true_literal() {
        let mut pool = VariablePool::default();
        let literals = literals(&mut pool, 3);

        let clauses = PairwiseEncoder
            .encode_exactly_k(&literals, 1, &mut pool)
            .expect("supported bound");

        assert_encodes(&clauses, &literals, &pool, |count| count == 1);
    }

    #[test]
    fn exactly_one_of_nothing_is_the_empty_clause() {
        let mut pool = VariablePool::default();

        let clauses = PairwiseEncoder
            .encode_exactly_k(&[], 1, &mut pool)
            .expect("supported bound");

        assert_eq!(clauses, vec![Vec::<Literal>::new()]);
    }

    #[test]
    fn larger_bounds_are_unsupported() {
        let mut pool = VariablePool::default();
        let literals = literals(&mut pool, 5);

        let result = PairwiseEncoder.encode_at_most_k(&literals, 2, &mut pool);

        assert_eq!(
            result,
            Err(EncodingError::UnsupportedBound {
                encoding: CardinalityEncoding::Pairwise,
                k: 2,
                n: 5
            })
        );
    }
}
