use super::CardinalityEncoder;
use super::EncodingError;
use crate::basic_types::Clause;
use crate::basic_types::Literal;
use crate::variables::VariablePool;

/// The sequential counter encoding for `x_1 + ... + x_n <= k`.
///
/// Auxiliary variable `s(i, j)` states that at least `j + 1` of the first `i + 1` inputs are
/// true. The encoding uses `(n - 1) * k` auxiliaries and `O(n * k)` clauses, and unit
/// propagation on it is arc-consistent.
///
/// Reference:
/// Sinz, Carsten. Towards an optimal CNF encoding of boolean cardinality constraints.
/// CP 2005, LNCS 3709: 827-831.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialCounterEncoder;

impl CardinalityEncoder for SequentialCounterEncoder {
    fn encode_at_most_k(
        &self,
        literals: &[Literal],
        k: usize,
        pool: &mut VariablePool,
    ) -> Result<Vec<Clause>, EncodingError> {
        let n = literals.len();

        if k >= n {
            return Ok(vec![]);
        }
        if k == 0 {
            return Ok(literals.iter().map(|&literal| vec![!literal]).collect());
        }

        // n >= 2 from here on, so there is at least one register
        let registers = (0..n - 1)
            .map(|_| {
                (0..k)
                    .map(|_| Literal::positive(pool.new_auxiliary()))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let mut clauses = vec![vec![!literals[0], registers[0][0]]];
        clauses.extend(registers[0][1..].iter().map(|&counter| vec![!counter]));

        for i in 1..n - 1 {
            let x = literals[i];
            let previous = &registers[i - 1];
            let current = &registers[i];

            clauses.push(vec![!x, current[0]]);
            clauses.push(vec![!previous[0], current[0]]);

            for j in 1..k {
                clauses.push(vec![!x, !previous[j - 1], current[j]]);
                clauses.push(vec![!previous[j], current[j]]);
            }

            clauses.push(vec![!x, !previous[k - 1]]);
        }

        clauses.push(vec![!literals[n - 1], !registers[n - 2][k - 1]]);

        Ok(clauses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::test_helper::assert_encodes;
    use crate::encoders::test_helper::literals;

    #[test]
    fn at_most_one_of_four() {
        let mut pool = VariablePool::default();
        let literals = literals(&mut pool, 4);

        let clauses = SequentialCounterEncoder
            .encode_at_most_k(&literals, 1, &mut pool)
            .expect("always supported");

        assert_eq!(pool.num_variables(), 4 + 3);
        assert_eq!(pool.num_named_variables(), 4);
        assert_encodes(&clauses, &literals, &pool, |count| count <= 1);
    }

    #[test]
    fn at_most_two_of_five() {
        let mut pool = VariablePool::default();
        let literals = literals(&mut pool, 5);

        let clauses = SequentialCounterEncoder
            .encode_at_most_k(&literals, 2, &mut pool)
            .expect("always supported");

        assert_encodes(&clauses, &literals, &pool, |count| count <= 2);
    }

    #[test]
    fn exactly_one_of_three() {
        let mut pool = VariablePool::default();
        let literals = literals(&mut pool, 3);

        let clauses = SequentialCounterEncoder
            .encode_exactly_k(&literals, 1, &mut pool)
            .expect("always supported");

        assert_encodes(&clauses, &literals, &pool, |count| count == 1);
    }

    #[test]
    fn exactly_two_of_four_goes_through_the_negated_inputs() {
        let mut pool = VariablePool::default();
        let literals = literals(&mut pool, 4);

        let clauses = SequentialCounterEncoder
            .encode_exactly_k(&literals, 2, &mut pool)
            .expect("always supported");

        assert_encodes(&clauses, &literals, &pool, |count| count == 2);
    }

    #[test]
    fn trivial_bounds_need_no_auxiliaries() {
        let mut pool = VariablePool::default();
        let literals = literals(&mut pool, 3);

        let loose = SequentialCounterEncoder
            .encode_at_most_k(&literals, 3, &mut pool)
            .expect("always supported");
        let none = SequentialCounterEncoder
            .encode_at_most_k(&literals, 0, &mut pool)
            .expect("always supported");

        assert!(loose.is_empty());
        assert_eq!(none, literals.iter().map(|&l| vec![!l]).collect::<Vec<_>>());
        assert_eq!(pool.num_variables(), 3);
    }

    #[test]
    fn single_literal_at_most_one_is_free() {
        let mut pool = VariablePool::default();
        let literals = literals(&mut pool, 1);

        let clauses = SequentialCounterEncoder
            .encode_exactly_k(&literals, 1, &mut pool)
            .expect("always supported");

        assert_eq!(clauses, vec![vec![literals[0]]]);
    }
}
