//! The symbol table translating between domain triples and solver variables.
//!
//! Every [`VariableKey`] is bound to exactly one [`Variable`] the first time it is referenced.
//! Cardinality encoders mint auxiliary variables through the same table, which keeps the
//! numbering dense; those variables have no key and decode to nothing.
use crate::basic_types::HashMap;
use crate::basic_types::Variable;
use crate::problem::DriverId;
use crate::problem::ExperienceLevel;
use crate::problem::RouteId;

/// "This driver is assigned to this route at this experience level."
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableKey {
    pub driver: DriverId,
    pub route: RouteId,
    pub level: ExperienceLevel,
}

impl VariableKey {
    pub fn new(driver: DriverId, route: RouteId, level: ExperienceLevel) -> VariableKey {
        VariableKey {
            driver,
            route,
            level,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct VariablePool {
    variables: HashMap<VariableKey, Variable>,
    /// The key of variable `i` is stored at index `i - 1`.
    keys: Vec<Option<VariableKey>>,
}

impl VariablePool {
    /// Returns the variable bound to `key`, minting a new one if the key has not been seen.
    pub fn id(&mut self, key: VariableKey) -> Variable {
        if let Some(&variable) = self.variables.get(&key) {
            return variable;
        }

        let variable = self.mint(Some(key));
        let _ = self.variables.insert(key, variable);
        variable
    }

    /// Mints a variable which is not bound to any key.
    pub fn new_auxiliary(&mut self) -> Variable {
        self.mint(None)
    }

    /// The key bound to `variable`, or `None` for auxiliary and unknown variables.
    pub fn lookup(&self, variable: Variable) -> Option<VariableKey> {
        self.keys
            .get(variable.index() as usize - 1)
            .copied()
            .flatten()
    }

    /// Returns the variable of `key` without minting one.
    pub fn get(&self, key: VariableKey) -> Option<Variable> {
        self.variables.get(&key).copied()
    }

    pub fn num_variables(&self) -> usize {
        self.keys.len()
    }

    pub fn num_named_variables(&self) -> usize {
        self.variables.len()
    }

    /// The named variables and their keys, in increasing variable order.
    pub fn named_variables(&self) -> impl Iterator<Item = (Variable, VariableKey)> + '_ {
        self.keys.iter().enumerate().filter_map(|(index, key)| {
            key.map(|key| (Variable::new(index as u32 + 1), key))
        })
    }

    fn mint(&mut self, key: Option<VariableKey>) -> Variable {
        self.keys.push(key);
        let index = u32::try_from(self.keys.len()).expect("ran out of variable indices");
        Variable::new(index)
    }
}
