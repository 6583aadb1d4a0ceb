use std::fmt::Display;
use std::fmt::Formatter;
use std::num::NonZeroI32;

/// A propositional variable as the SAT backend sees it: a positive integer, starting at 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    index: u32,
}

impl Variable {
    pub fn new(index: u32) -> Variable {
        assert!(index > 0, "variable indices start at 1");
        Variable { index }
    }

    pub fn index(self) -> u32 {
        self.index
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.index)
    }
}

/// A signed reference to a [`Variable`]. Positive literals state the variable is true.
///
/// Internally the literal is stored as `2 * index + polarity`, so literals of the same variable
/// sit next to each other when sorted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    code: u32,
}

impl Literal {
    pub fn new(variable: Variable, is_positive: bool) -> Literal {
        Literal {
            code: variable.index() * 2 + u32::from(is_positive),
        }
    }

    pub fn positive(variable: Variable) -> Literal {
        Literal::new(variable, true)
    }

    pub fn negative(variable: Variable) -> Literal {
        Literal::new(variable, false)
    }

    pub fn is_positive(self) -> bool {
        (self.code & 1) == 1
    }

    pub fn is_negative(self) -> bool {
        !self.is_positive()
    }

    pub fn variable(self) -> Variable {
        Variable::new(self.code / 2)
    }

    /// The signed integer of this literal in the DIMACS convention.
    pub fn to_dimacs(self) -> NonZeroI32 {
        let index = i32::try_from(self.variable().index())
            .expect("variable index does not fit in a DIMACS literal");
        let signed = if self.is_positive() { index } else { -index };
        NonZeroI32::new(signed).expect("variable indices are non-zero")
    }

    pub fn from_dimacs(dimacs: NonZeroI32) -> Literal {
        Literal::new(Variable::new(dimacs.unsigned_abs().get()), dimacs.get() > 0)
    }
}

impl std::ops::Not for Literal {
    type Output = Literal;

    fn not(self) -> Literal {
        Literal { code: self.code ^ 1 }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_negative() {
            write!(f, "~{}", self.variable())
        } else {
            write!(f, "{}", self.variable())
        }
    }
}
