use thiserror::Error;

use crate::basic_types::HashMap;
use crate::basic_types::Literal;
use crate::basic_types::Variable;

/// A complete SAT solver which is handed a CNF formula and solves it once.
pub trait SatBackend {
    fn add_clause(&mut self, clause: &[Literal]);

    fn solve(&mut self) -> Result<SatisfactionResult, BackendError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatisfactionResult {
    Satisfiable(Model),
    Unsatisfiable,
}

impl SatisfactionResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatisfactionResult::Satisfiable(_))
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            SatisfactionResult::Satisfiable(model) => Some(model),
            SatisfactionResult::Unsatisfiable => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("the SAT backend failed, more details: {0}")]
    Failed(String),
}

/// A satisfying assignment as reported by the backend: one literal per variable, positive if
/// the variable is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    literals: Vec<Literal>,
}

impl Model {
    pub fn new(literals: Vec<Literal>) -> Model {
        Model { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The variables assigned true, in the order the backend reported them.
    pub fn true_variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.literals
            .iter()
            .filter(|literal| literal.is_positive())
            .map(|literal| literal.variable())
    }

    /// The value of `variable`, or `None` if the backend did not report it.
    pub fn value(&self, variable: Variable) -> Option<bool> {
        self.literals
            .iter()
            .find(|literal| literal.variable() == variable)
            .map(|literal| literal.is_positive())
    }

    /// Whether every clause has at least one literal which is true in this model.
    pub fn satisfies<'a>(&self, mut clauses: impl Iterator<Item = &'a [Literal]>) -> bool {
        let values = self
            .literals
            .iter()
            .map(|literal| (literal.variable(), literal.is_positive()))
            .collect::<HashMap<_, _>>();

        clauses.all(|clause| {
            clause.iter().any(|literal| {
                values.get(&literal.variable()).copied() == Some(literal.is_positive())
            })
        })
    }
}
