use crate::encoders::CardinalityEncoding;

/// How the drivers of a route cover its experience levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CoverageRule {
    /// Every level of every route is filled by exactly one driver. A route without eligible
    /// drivers makes the instance unsatisfiable.
    #[default]
    Exactly,
    /// Every level of every route is filled by at most one driver, so levels may stay empty.
    AtMost,
}

/// Options which determine how a [`Problem`](crate::problem::Problem) is formulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormulationOptions {
    pub encoding: CardinalityEncoding,
    pub coverage: CoverageRule,
}
