mod literal;

use fnv::FnvBuildHasher;
pub use literal::*;

pub type HashMap<K, V, Hasher = FnvBuildHasher> = std::collections::HashMap<K, V, Hasher>;
pub type HashSet<K, Hasher = FnvBuildHasher> = std::collections::HashSet<K, Hasher>;

/// A disjunction of [`Literal`]s. An empty clause can never be satisfied.
pub type Clause = Vec<Literal>;
